//! OpCode definitions for the Mach VM
//!
//! Code is a flat array of `u32` words. Each instruction occupies a fixed
//! number of consecutive words: the opcode tag followed by its operands.
//!
//! | opcode     | width | operands                          |
//! |------------|-------|-----------------------------------|
//! | `set`      | 3     | dst slot, src slot                |
//! | `exec_1`   | 4     | dst slot, unary op, arg slot      |
//! | `exec_2`   | 5     | dst slot, binary op, lhs, rhs     |
//! | `branchif` | 3     | cond slot, target offset          |
//! | `jump`     | 2     | target offset                     |
//! | `display`  | 2     | slot                              |
//! | `end`      | 1     |                                   |

use std::fmt;

/// Virtual machine instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Copy: M[A] = M[B]
    Set = 0,
    /// Unary operator: M[A] = op(M[C])
    Exec1 = 1,
    /// Binary operator: M[A] = op(M[C], M[D])
    Exec2 = 2,
    /// Conditional branch: if M[A] != 0 then PC = B
    BranchIf = 3,
    /// Unconditional jump: PC = A
    Jump = 4,
    /// Write M[A] and a newline to the output sink
    Display = 5,
    /// Halt
    End = 6,
}

impl OpCode {
    pub const ALL: [OpCode; 7] = [
        OpCode::Set,
        OpCode::Exec1,
        OpCode::Exec2,
        OpCode::BranchIf,
        OpCode::Jump,
        OpCode::Display,
        OpCode::End,
    ];

    /// Get opcode from a code word
    pub fn from_u32(word: u32) -> Option<Self> {
        match word {
            0 => Some(OpCode::Set),
            1 => Some(OpCode::Exec1),
            2 => Some(OpCode::Exec2),
            3 => Some(OpCode::BranchIf),
            4 => Some(OpCode::Jump),
            5 => Some(OpCode::Display),
            6 => Some(OpCode::End),
            _ => None,
        }
    }

    /// Look up a command by its source name
    pub fn from_name(name: &str) -> Option<Self> {
        OpCode::ALL.into_iter().find(|op| op.name() == name)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Source-level name, as it appears after `exec` expansion
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Set => "set",
            OpCode::Exec1 => "exec_1",
            OpCode::Exec2 => "exec_2",
            OpCode::BranchIf => "branchif",
            OpCode::Jump => "jump",
            OpCode::Display => "display",
            OpCode::End => "end",
        }
    }

    /// Number of code words the instruction occupies, opcode included
    #[inline]
    pub fn width(self) -> usize {
        match self {
            OpCode::Set => 3,
            OpCode::Exec1 => 4,
            OpCode::Exec2 => 5,
            OpCode::BranchIf => 3,
            OpCode::Jump => 2,
            OpCode::Display => 2,
            OpCode::End => 1,
        }
    }

    /// Position of the jump target operand, relative to the opcode word
    pub fn target_operand(self) -> Option<usize> {
        match self {
            OpCode::BranchIf => Some(2),
            OpCode::Jump => Some(1),
            _ => None,
        }
    }

    /// Position of the operator-id operand, relative to the opcode word
    pub fn operator_operand(self) -> Option<usize> {
        match self {
            OpCode::Exec1 | OpCode::Exec2 => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_conversion() {
        for op in OpCode::ALL {
            assert_eq!(OpCode::from_u32(op.as_u32()), Some(op));
            assert_eq!(OpCode::from_name(op.name()), Some(op));
        }
        assert_eq!(OpCode::from_u32(7), None);
        assert_eq!(OpCode::from_name("exec"), None);
    }

    #[test]
    fn test_widths() {
        assert_eq!(OpCode::Set.width(), 3);
        assert_eq!(OpCode::Exec1.width(), 4);
        assert_eq!(OpCode::Exec2.width(), 5);
        assert_eq!(OpCode::BranchIf.width(), 3);
        assert_eq!(OpCode::Jump.width(), 2);
        assert_eq!(OpCode::Display.width(), 2);
        assert_eq!(OpCode::End.width(), 1);
    }

    #[test]
    fn test_special_operand_positions() {
        assert_eq!(OpCode::BranchIf.target_operand(), Some(2));
        assert_eq!(OpCode::Jump.target_operand(), Some(1));
        assert_eq!(OpCode::Set.target_operand(), None);
        assert_eq!(OpCode::Exec2.operator_operand(), Some(2));
        assert_eq!(OpCode::Display.operator_operand(), None);
    }
}
