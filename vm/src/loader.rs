//! Binary program format (`.machb`).
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! magic      b"MCH\x01"
//! u32        slot count
//! per slot   u8 tag, then payload:
//!              TAG_UNSET  -
//!              TAG_INT    i64
//!              TAG_FLOAT  f64
//!              TAG_STRING u32 length + UTF-8 bytes
//! u32        code length
//! u32 * len  code words
//! ```

use crate::program::{Program, ProgramError};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use memory::value::{TAG_FLOAT, TAG_INT, TAG_STRING, TAG_UNSET};
use memory::{Memory, Value};
use std::io::{Read, Write};
use thiserror::Error;
use tracing::debug;

pub const MAGIC: &[u8; 4] = b"MCH\x01";

const MAX_SLOTS: u32 = 1 << 24;
const MAX_CODE_WORDS: u32 = 1 << 24;
const MAX_STRING_LEN: u32 = 1 << 20;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid binary format: {0}")]
    Format(String),
    #[error("limit exceeded: {0}")]
    Limit(String),
    #[error("invalid program: {0}")]
    Invalid(#[from] ProgramError),
}

/// Check a count against a format limit, returning it as the `u32` that is written.
fn within_limit(len: usize, max: u32, what: &str) -> Result<u32, LoaderError> {
    match u32::try_from(len) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(LoaderError::Limit(format!("{} {}", what, len))),
    }
}

/// Serialize a compiled program.
///
/// Applies the same limits [`read_program`] enforces, so every file written
/// here can be loaded back.
pub fn write_program<W: Write>(program: &Program, writer: &mut W) -> Result<(), LoaderError> {
    let slot_count = within_limit(program.memory.len(), MAX_SLOTS, "slot count")?;
    let code_len = within_limit(program.code.len(), MAX_CODE_WORDS, "code length")?;

    writer.write_all(MAGIC)?;

    writer.write_u32::<LittleEndian>(slot_count)?;
    for (i, slot) in program.memory.slots().iter().enumerate() {
        match slot {
            None => writer.write_u8(TAG_UNSET)?,
            Some(Value::Int(n)) => {
                writer.write_u8(TAG_INT)?;
                writer.write_i64::<LittleEndian>(*n)?;
            }
            Some(Value::Float(x)) => {
                writer.write_u8(TAG_FLOAT)?;
                writer.write_f64::<LittleEndian>(*x)?;
            }
            Some(Value::Str(s)) => {
                if s.len() > MAX_STRING_LEN as usize {
                    return Err(LoaderError::Limit(format!("string length {} in slot {}", s.len(), i)));
                }
                writer.write_u8(TAG_STRING)?;
                writer.write_u32::<LittleEndian>(s.len() as u32)?;
                writer.write_all(s.as_bytes())?;
            }
        }
    }

    writer.write_u32::<LittleEndian>(code_len)?;
    for word in &program.code {
        writer.write_u32::<LittleEndian>(*word)?;
    }
    Ok(())
}

/// Load and validate a program written by [`write_program`].
///
/// Counts and string lengths are bounded before anything is allocated, so a
/// corrupt header cannot trigger a huge allocation.
pub fn read_program<R: Read>(reader: &mut R) -> Result<Program, LoaderError> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(LoaderError::Format("bad magic or version".to_string()));
    }

    let slot_count = reader.read_u32::<LittleEndian>()?;
    if slot_count > MAX_SLOTS {
        return Err(LoaderError::Limit(format!("slot count {}", slot_count)));
    }
    let mut slots = Vec::with_capacity(slot_count as usize);
    for i in 0..slot_count {
        let tag = reader.read_u8()?;
        let slot = match tag {
            TAG_UNSET => None,
            TAG_INT => Some(Value::int(reader.read_i64::<LittleEndian>()?)),
            TAG_FLOAT => Some(Value::float(reader.read_f64::<LittleEndian>()?)),
            TAG_STRING => {
                let len = reader.read_u32::<LittleEndian>()?;
                if len > MAX_STRING_LEN {
                    return Err(LoaderError::Limit(format!("string length {} in slot {}", len, i)));
                }
                let mut bytes = vec![0u8; len as usize];
                reader.read_exact(&mut bytes)?;
                let s = String::from_utf8(bytes)
                    .map_err(|_| LoaderError::Format(format!("invalid UTF-8 in slot {}", i)))?;
                Some(Value::Str(s))
            }
            other => {
                return Err(LoaderError::Format(format!("unknown tag {} in slot {}", other, i)));
            }
        };
        slots.push(slot);
    }

    let code_len = reader.read_u32::<LittleEndian>()?;
    if code_len > MAX_CODE_WORDS {
        return Err(LoaderError::Limit(format!("code length {}", code_len)));
    }
    let mut code = Vec::with_capacity(code_len as usize);
    for _ in 0..code_len {
        code.push(reader.read_u32::<LittleEndian>()?);
    }

    let program = Program::new(code, Memory::from_slots(slots));
    program.validate()?;
    debug!(code_len = program.len(), slots = program.memory.len(), "program loaded");
    Ok(program)
}
