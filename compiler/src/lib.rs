pub mod binder;
pub mod codegen;
pub mod element;
pub mod error;
pub mod labels;

pub use codegen::{compile, Compiler};
pub use element::{Element, Located};
pub use error::CompilerError;
