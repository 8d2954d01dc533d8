use crate::error::RuntimeError;

use super::promotion::truthy;
use super::vm::{Flow, VM};

/// Trait for control flow instruction handlers
pub trait ControlFlowOps {
    fn handle_branch_if(&mut self, pc: usize) -> Result<Flow, RuntimeError>;
    fn handle_jump(&mut self, pc: usize) -> Result<Flow, RuntimeError>;
}

impl ControlFlowOps for VM {
    fn handle_branch_if(&mut self, pc: usize) -> Result<Flow, RuntimeError> {
        let cond = self.slot_operand(pc, 1)?;
        let target = self.target_operand(pc, 2)?;

        if truthy(self.load(cond)?)? {
            Ok(Flow::Continue(target))
        } else {
            Ok(Flow::Continue(pc + 3))
        }
    }

    fn handle_jump(&mut self, pc: usize) -> Result<Flow, RuntimeError> {
        let target = self.target_operand(pc, 1)?;
        Ok(Flow::Continue(target))
    }
}
