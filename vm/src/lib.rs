pub mod error;
pub mod loader;
pub mod machine;
pub mod opcode;
pub mod operator;
pub mod program;

pub use error::{Fault, RuntimeError};
pub use loader::LoaderError;
pub use machine::{Flow, VM};
pub use opcode::OpCode;
pub use operator::{BinaryOp, UnaryOp};
pub use program::{Program, ProgramError};
