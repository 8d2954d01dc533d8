use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::debug;
use vm::VM;

use super::load_program;

pub fn run_file(path: &str) -> Result<()> {
    let program = load_program(path)?;
    debug!(path, code_len = program.len(), "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_program(program, &mut out)
}

/// Execute a loaded program, writing `display` output to `out`.
pub fn run_program<W: Write>(program: vm::Program, out: &mut W) -> Result<()> {
    let mut vm = VM::new(program);
    vm.interpret(out).context("Execution failed")
}
