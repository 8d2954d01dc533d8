use memory::SlotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid opcode {0}")]
    InvalidOpcode(u32),
    #[error("invalid unary operator id {0}")]
    InvalidUnaryOp(u32),
    #[error("invalid binary operator id {0}")]
    InvalidBinaryOp(u32),
    #[error("instruction runs past the end of the code")]
    TruncatedInstruction,
    #[error("jump target {0} is not an instruction boundary")]
    InvalidJumpTarget(u32),
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("cannot convert {0} to an integer")]
    NonFiniteConversion(f64),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// A runtime error together with the program counter of the failing instruction.
#[derive(Debug, Error)]
#[error("runtime error at pc {pc}: {error}")]
pub struct Fault {
    pub pc: usize,
    #[source]
    pub error: RuntimeError,
}
