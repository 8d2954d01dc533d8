pub mod slots;
pub mod value;


pub use slots::{Memory, SlotError};
pub use value::Value;
