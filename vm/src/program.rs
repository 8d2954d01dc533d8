//! Compiled program: flat code words plus the initial slot memory.

use crate::opcode::OpCode;
use crate::operator::{BinaryOp, UnaryOp};
use memory::Memory;
use thiserror::Error;

/// Structural problems in a code array, found by [`Program::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("unknown opcode {word} at offset {offset}")]
    UnknownOpcode { offset: usize, word: u32 },
    #[error("instruction at offset {offset} runs past the end of the code")]
    Truncated { offset: usize },
    #[error("unknown operator id {id} at offset {offset}")]
    UnknownOperator { offset: usize, id: u32 },
    #[error("slot {slot} at offset {offset} is outside memory ({len} slots)")]
    SlotOutOfRange { offset: usize, slot: u32, len: usize },
    #[error("jump target {target} at offset {offset} is not an instruction boundary")]
    BadTarget { offset: usize, target: u32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub code: Vec<u32>,
    pub memory: Memory,
}

impl Program {
    pub fn new(code: Vec<u32>, memory: Memory) -> Self {
        Self { code, memory }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Offsets of every instruction start, in order.
    ///
    /// Stops at the first word that is not a known opcode.
    pub fn instruction_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut pc = 0;
        while pc < self.code.len() {
            let Some(op) = OpCode::from_u32(self.code[pc]) else {
                break;
            };
            offsets.push(pc);
            pc += op.width();
        }
        offsets
    }

    /// Check the code-array invariants: every instruction is complete, opcode
    /// and operator ids are known, slot operands index into memory, and jump
    /// targets land on an instruction boundary or exactly at the end.
    pub fn validate(&self) -> Result<(), ProgramError> {
        let mut starts = Vec::new();
        let mut targets = Vec::new();
        let mut pc = 0;

        while pc < self.code.len() {
            let word = self.code[pc];
            let op = OpCode::from_u32(word).ok_or(ProgramError::UnknownOpcode { offset: pc, word })?;
            if pc + op.width() > self.code.len() {
                return Err(ProgramError::Truncated { offset: pc });
            }
            starts.push(pc);

            for i in 1..op.width() {
                let operand = self.code[pc + i];
                if op.target_operand() == Some(i) {
                    targets.push((pc, operand));
                } else if op.operator_operand() == Some(i) {
                    let known = match op {
                        OpCode::Exec1 => UnaryOp::from_u32(operand).is_some(),
                        _ => BinaryOp::from_u32(operand).is_some(),
                    };
                    if !known {
                        return Err(ProgramError::UnknownOperator { offset: pc, id: operand });
                    }
                } else if operand as usize >= self.memory.len() {
                    return Err(ProgramError::SlotOutOfRange {
                        offset: pc,
                        slot: operand,
                        len: self.memory.len(),
                    });
                }
            }
            pc += op.width();
        }

        for (offset, target) in targets {
            let t = target as usize;
            if t != self.code.len() && starts.binary_search(&t).is_err() {
                return Err(ProgramError::BadTarget { offset, target });
            }
        }
        Ok(())
    }

    /// Render the instruction at `pc` in source-like form, e.g. `exec_2 @3 add @0 @4`.
    ///
    /// Slots print as `@index`, jump targets as `->offset`.
    pub fn location(&self, pc: usize) -> String {
        let Some(op) = self.code.get(pc).and_then(|w| OpCode::from_u32(*w)) else {
            return format!("<illegal pc {}>", pc);
        };
        let mut text = op.name().to_string();
        for i in 1..op.width() {
            let Some(&operand) = self.code.get(pc + i) else {
                text.push_str(" <truncated>");
                break;
            };
            text.push(' ');
            if op.target_operand() == Some(i) {
                text.push_str(&format!("->{}", operand));
            } else if op.operator_operand() == Some(i) {
                let name = match op {
                    OpCode::Exec1 => UnaryOp::from_u32(operand).map(UnaryOp::name),
                    _ => BinaryOp::from_u32(operand).map(BinaryOp::name),
                };
                match name {
                    Some(name) => text.push_str(name),
                    None => text.push_str(&format!("<op {}>", operand)),
                }
            } else {
                text.push_str(&format!("@{}", operand));
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory::Value;

    fn two_slot_memory() -> Memory {
        Memory::from_slots(vec![None, Some(Value::int(1))])
    }

    #[test]
    fn test_validate_accepts_well_formed_code() {
        // set @0 @1; jump ->0; end
        let program = Program::new(vec![0, 0, 1, 4, 0, 6], two_slot_memory());
        assert_eq!(program.validate(), Ok(()));
        assert_eq!(program.instruction_offsets(), vec![0, 3, 5]);
    }

    #[test]
    fn test_validate_allows_target_at_end() {
        let program = Program::new(vec![4, 2], Memory::new());
        assert_eq!(program.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_mid_instruction_target() {
        let program = Program::new(vec![0, 0, 1, 4, 1], two_slot_memory());
        assert_eq!(
            program.validate(),
            Err(ProgramError::BadTarget { offset: 3, target: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_slot_and_operator() {
        let program = Program::new(vec![5, 2], two_slot_memory());
        assert!(matches!(program.validate(), Err(ProgramError::SlotOutOfRange { slot: 2, .. })));

        let program = Program::new(vec![1, 0, 9, 1], two_slot_memory());
        assert_eq!(
            program.validate(),
            Err(ProgramError::UnknownOperator { offset: 0, id: 9 })
        );
    }

    #[test]
    fn test_validate_rejects_truncation_and_unknown_opcode() {
        let program = Program::new(vec![0, 0], two_slot_memory());
        assert_eq!(program.validate(), Err(ProgramError::Truncated { offset: 0 }));

        let program = Program::new(vec![42], Memory::new());
        assert_eq!(
            program.validate(),
            Err(ProgramError::UnknownOpcode { offset: 0, word: 42 })
        );
    }

    #[test]
    fn test_location_rendering() {
        let program = Program::new(vec![2, 0, 6, 1, 1, 3, 0, 0, 6], two_slot_memory());
        assert_eq!(program.location(0), "exec_2 @0 add @1 @1");
        assert_eq!(program.location(5), "branchif @0 ->0");
        assert_eq!(program.location(8), "end");
        assert_eq!(program.location(99), "<illegal pc 99>");
    }
}
