use crate::error::{Fault, RuntimeError};
use crate::opcode::OpCode;
use crate::program::Program;
use memory::{Memory, Value};
use std::io::Write;
use tracing::{debug, trace};

use super::arithmetic::ArithmeticOps;
use super::control::ControlFlowOps;
use super::data::DataOps;

/// Outcome of dispatching one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue at the given pc.
    Continue(usize),
    /// Stop: `end` was executed.
    Halt,
}

/// The Virtual Machine struct
///
/// Owns one compiled program. The code words are never modified; memory slots
/// are overwritten in place as the program runs.
pub struct VM {
    program: Program,
    pc: usize,
    /// Offsets where an instruction begins, ascending. Jump targets must be one
    /// of these or the code length.
    starts: Vec<usize>,
}

impl VM {
    pub fn new(program: Program) -> Self {
        let starts = program.instruction_offsets();
        Self {
            program,
            pc: 0,
            starts,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn memory(&self) -> &Memory {
        &self.program.memory
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.code.len()
    }

    /// Main interpretation loop
    ///
    /// Runs until the pc reaches the end of the code, `end` executes, or a
    /// fault occurs. Output already written before a fault stays written.
    pub fn interpret<W: Write>(&mut self, out: &mut W) -> Result<(), Fault> {
        let len = self.program.code.len();
        debug!(code_len = len, slots = self.program.memory.len(), "interpret");

        while self.pc < len {
            trace!(pc = self.pc, instr = %self.program.location(self.pc), "dispatch");
            match self.step(out) {
                Ok(Flow::Continue(next)) => self.pc = next,
                Ok(Flow::Halt) => self.pc = len,
                Err(error) => {
                    // keep whatever was displayed before the fault
                    let _ = out.flush();
                    return Err(Fault { pc: self.pc, error });
                }
            }
        }

        out.flush().map_err(|e| Fault {
            pc: self.pc,
            error: e.into(),
        })
    }

    /// Dispatch the single instruction at the current pc.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<Flow, RuntimeError> {
        let pc = self.pc;
        let word = self.operand(pc, 0)?;
        let op = OpCode::from_u32(word).ok_or(RuntimeError::InvalidOpcode(word))?;

        match op {
            OpCode::Set => self.handle_set(pc),
            OpCode::Exec1 => self.handle_exec_unary(pc),
            OpCode::Exec2 => self.handle_exec_binary(pc),
            OpCode::BranchIf => self.handle_branch_if(pc),
            OpCode::Jump => self.handle_jump(pc),
            OpCode::Display => self.handle_display(pc, out),
            OpCode::End => Ok(Flow::Halt),
        }
    }

    // --- Operand access shared by the handlers ---

    /// Code word `n` positions after `pc`.
    #[inline]
    pub(super) fn operand(&self, pc: usize, n: usize) -> Result<u32, RuntimeError> {
        self.program
            .code
            .get(pc + n)
            .copied()
            .ok_or(RuntimeError::TruncatedInstruction)
    }

    #[inline]
    pub(super) fn slot_operand(&self, pc: usize, n: usize) -> Result<usize, RuntimeError> {
        self.operand(pc, n).map(|w| w as usize)
    }

    /// Validated jump target: an instruction start or exactly the end of the code.
    pub(super) fn target_operand(&self, pc: usize, n: usize) -> Result<usize, RuntimeError> {
        let target = self.operand(pc, n)?;
        let t = target as usize;
        if t != self.program.code.len() && self.starts.binary_search(&t).is_err() {
            return Err(RuntimeError::InvalidJumpTarget(target));
        }
        Ok(t)
    }

    #[inline]
    pub(super) fn load(&self, slot: usize) -> Result<&Value, RuntimeError> {
        Ok(self.program.memory.load(slot)?)
    }

    #[inline]
    pub(super) fn store(&mut self, slot: usize, val: Value) -> Result<(), RuntimeError> {
        Ok(self.program.memory.store(slot, val)?)
    }
}
