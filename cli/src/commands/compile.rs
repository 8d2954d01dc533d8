use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use vm::loader::write_program;

use super::load_program;

pub fn compile_file(path: &str, output: Option<&str>) -> Result<()> {
    let program = load_program(path)?;
    println!(
        "Compiled {} instructions ({} code words), {} memory slots.",
        program.instruction_offsets().len(),
        program.len(),
        program.memory.len()
    );

    if let Some(out_path) = output {
        let file = fs::File::create(out_path).context("Failed to create output file")?;
        let mut writer = BufWriter::new(file);
        write_program(&program, &mut writer).context("Failed to write binary")?;
        writer.flush().context("Failed to flush binary")?;
        println!("Saved binary to {}", out_path);
    }
    Ok(())
}
