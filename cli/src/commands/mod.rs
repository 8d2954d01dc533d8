pub mod compile;
pub mod disassemble;
pub mod run;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vm::loader::read_program;
use vm::Program;

/// Extension of serialized programs written by `mach compile -o`.
pub const BINARY_EXTENSION: &str = "machb";

pub fn is_binary(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext == BINARY_EXTENSION)
}

/// Load a program from source text or, for `.machb` files, from its binary form.
pub fn load_program(path: &str) -> Result<Program> {
    if is_binary(path) {
        let mut file = fs::File::open(path).with_context(|| format!("Failed to open {}", path))?;
        return read_program(&mut file).context("Loader error");
    }
    let source = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    compiler::compile(&source).context("Compile error")
}
