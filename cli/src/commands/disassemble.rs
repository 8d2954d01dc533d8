use anyhow::{Context, Result};
use compiler::Compiler;
use memory::Value;
use std::fs;
use vm::Program;

use super::{is_binary, load_program};

pub fn disassemble_file(path: &str) -> Result<()> {
    let listing = if is_binary(path) {
        let program = load_program(path)?;
        render(&program, &[])
    } else {
        let source = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let mut compiler = Compiler::new();
        let program = compiler.compile(&source).context("Compile error")?;
        render(&program, &compiler.slot_names(program.memory.len()))
    };

    println!("== Disassembly of {} ==", path);
    print!("{}", listing);
    Ok(())
}

/// Memory table followed by one line per instruction.
///
/// `names` maps slot index to variable name; missing entries print as `-`.
pub fn render(program: &Program, names: &[Option<&str>]) -> String {
    let mut text = String::new();

    text.push_str(&format!("-- memory ({} slots) --\n", program.memory.len()));
    for (idx, slot) in program.memory.slots().iter().enumerate() {
        let name = names.get(idx).copied().flatten().unwrap_or("-");
        let (kind, init) = match slot {
            None => ("unset", "<unset>".to_string()),
            Some(Value::Str(s)) => ("string", format!("{:?}", s)),
            Some(val) => (val.type_name(), val.to_string()),
        };
        text.push_str(&format!("@{:<5} {:<6} {:<12} {}\n", idx, kind, name, init));
    }

    text.push_str(&format!("-- code ({} words) --\n", program.len()));
    for pc in program.instruction_offsets() {
        text.push_str(&format!("{:04} {}\n", pc, program.location(pc)));
    }
    text
}
