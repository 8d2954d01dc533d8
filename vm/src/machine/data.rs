use crate::error::RuntimeError;
use std::io::Write;

use super::vm::{Flow, VM};

/// Trait for slot copy and output handlers
pub trait DataOps {
    fn handle_set(&mut self, pc: usize) -> Result<Flow, RuntimeError>;
    fn handle_display<W: Write>(&mut self, pc: usize, out: &mut W) -> Result<Flow, RuntimeError>;
}

impl DataOps for VM {
    fn handle_set(&mut self, pc: usize) -> Result<Flow, RuntimeError> {
        let dst = self.slot_operand(pc, 1)?;
        let src = self.slot_operand(pc, 2)?;

        let val = self.load(src)?.clone();
        self.store(dst, val)?;
        Ok(Flow::Continue(pc + 3))
    }

    fn handle_display<W: Write>(&mut self, pc: usize, out: &mut W) -> Result<Flow, RuntimeError> {
        let slot = self.slot_operand(pc, 1)?;
        writeln!(out, "{}", self.load(slot)?)?;
        Ok(Flow::Continue(pc + 2))
    }
}
