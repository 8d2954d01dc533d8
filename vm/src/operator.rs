//! Operator tables for `exec_1` and `exec_2`.
//!
//! The operator id is a code operand, so the discriminants are part of the
//! binary program format.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnaryOp {
    Float = 0,
    Int = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BinaryOp {
    Lt = 0,
    Ge = 1,
    Gt = 2,
    Sub = 3,
    Mul = 4,
    Div = 5,
    Add = 6,
    Hypot = 7,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Float, UnaryOp::Int];

    pub fn from_u32(id: u32) -> Option<Self> {
        UnaryOp::ALL.into_iter().find(|op| op.as_u32() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        UnaryOp::ALL.into_iter().find(|op| op.name() == name)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Float => "float",
            UnaryOp::Int => "int",
        }
    }
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 8] = [
        BinaryOp::Lt,
        BinaryOp::Ge,
        BinaryOp::Gt,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Add,
        BinaryOp::Hypot,
    ];

    pub fn from_u32(id: u32) -> Option<Self> {
        BinaryOp::ALL.into_iter().find(|op| op.as_u32() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BinaryOp::ALL.into_iter().find(|op| op.name() == name)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Lt => "lt",
            BinaryOp::Ge => "ge",
            BinaryOp::Gt => "gt",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Add => "add",
            BinaryOp::Hypot => "hypot",
        }
    }

    /// Comparisons always produce an integer 0/1, whatever the operand path.
    pub fn is_comparison(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Ge | BinaryOp::Gt)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_ids() {
        for (i, op) in UnaryOp::ALL.iter().enumerate() {
            assert_eq!(op.as_u32(), i as u32);
        }
        for (i, op) in BinaryOp::ALL.iter().enumerate() {
            assert_eq!(op.as_u32(), i as u32);
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(UnaryOp::from_name("int"), Some(UnaryOp::Int));
        assert_eq!(BinaryOp::from_name("hypot"), Some(BinaryOp::Hypot));
        assert_eq!(BinaryOp::from_name("int"), None);
        assert_eq!(UnaryOp::from_name("add"), None);
        assert_eq!(BinaryOp::from_u32(8), None);
        assert_eq!(UnaryOp::from_u32(1), Some(UnaryOp::Int));
    }
}
