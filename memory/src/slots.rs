//! Flat slot memory.
//!
//! The compiler allocates one slot per distinct variable name and one per
//! literal occurrence. The slot count is fixed once compilation finishes; the
//! VM only ever replaces slot contents.

use crate::value::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot {0} is out of bounds")]
    OutOfBounds(usize),
    #[error("slot {0} read before assignment")]
    Uninitialized(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    slots: Vec<Option<Value>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Option<Value>>) -> Self {
        Self { slots }
    }

    /// Append a slot and return its index. `None` is an unassigned variable.
    pub fn alloc(&mut self, init: Option<Value>) -> usize {
        let idx = self.slots.len();
        self.slots.push(init);
        idx
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw slot access, `None` when the index is out of range.
    pub fn slot(&self, idx: usize) -> Option<&Option<Value>> {
        self.slots.get(idx)
    }

    pub fn slots(&self) -> &[Option<Value>] {
        &self.slots
    }

    #[inline]
    pub fn load(&self, idx: usize) -> Result<&Value, SlotError> {
        match self.slots.get(idx) {
            Some(Some(val)) => Ok(val),
            Some(None) => Err(SlotError::Uninitialized(idx)),
            None => Err(SlotError::OutOfBounds(idx)),
        }
    }

    #[inline]
    pub fn store(&mut self, idx: usize, val: Value) -> Result<(), SlotError> {
        let slot = self.slots.get_mut(idx).ok_or(SlotError::OutOfBounds(idx))?;
        *slot = Some(val);
        Ok(())
    }
}
