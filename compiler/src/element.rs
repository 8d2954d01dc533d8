//! Instruction stream elements passed between compilation passes.

use mach_parser::Token;
use std::fmt;
use vm::OpCode;

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Opcode at the start of an instruction.
    Command(OpCode),
    /// Source token not yet resolved by a later pass.
    Token(Token),
    /// Resolved jump target (code offset).
    LineOffset(usize),
    /// Bound memory slot index.
    Slot(usize),
    /// Operator id inside `exec_1` / `exec_2`.
    Operator(u32),
}

impl Element {
    /// Code word for an element in compiled form, `None` for raw tokens.
    pub fn code_word(&self) -> Option<u32> {
        match self {
            Element::Command(op) => Some(op.as_u32()),
            Element::LineOffset(n) | Element::Slot(n) => Some(*n as u32),
            Element::Operator(id) => Some(*id),
            Element::Token(_) => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Command(op) => write!(f, "{}", op),
            Element::Token(tok) => write!(f, "{}", tok),
            Element::LineOffset(n) => write!(f, "->{}", n),
            Element::Slot(n) => write!(f, "@{}", n),
            Element::Operator(id) => write!(f, "<op {}>", id),
        }
    }
}

/// An element tagged with the source line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Located {
    pub element: Element,
    pub line: usize,
}

impl Located {
    pub fn new(element: Element, line: usize) -> Self {
        Self { element, line }
    }
}
