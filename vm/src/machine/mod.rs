//! Machine module - VM implementation
//!
//! The dispatch loop lives in `vm`; each group of opcodes is handled by a
//! trait implemented for `VM` in its own submodule.

mod arithmetic;
mod control;
mod data;
mod promotion;
mod vm;

// Public API
pub use arithmetic::{apply_binary, apply_unary};
pub use promotion::{float_value, int_value, truthy};
pub use vm::{Flow, VM};
