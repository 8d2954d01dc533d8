use std::fmt;

// --- Serialization tags ---
// Also used by the binary program format, so these values are stable.

pub const TAG_UNSET: u8 = 0;
pub const TAG_INT: u8 = 1;
pub const TAG_FLOAT: u8 = 2;
pub const TAG_STRING: u8 = 3;

/// A boxed runtime value.
///
/// Every memory slot holds one of these (or nothing, before a variable is
/// first assigned). Assignment replaces the whole cell, so a slot that starts
/// out as `Int` may later hold a `Float` or a `Str`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    // --- Constructors ---

    #[inline]
    pub fn int(val: i64) -> Self {
        Value::Int(val)
    }

    #[inline]
    pub fn float(val: f64) -> Self {
        Value::Float(val)
    }

    /// Booleans are integers: 1 for true, 0 for false.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Int(b as i64)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    // --- Inspection ---

    pub fn type_tag(&self) -> u8 {
        match self {
            Value::Int(_) => TAG_INT,
            Value::Float(_) => TAG_FLOAT,
            Value::Str(_) => TAG_STRING,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// The text written by `display`.
///
/// Floats use `{:?}` so they always carry a fractional part or exponent
/// (`1.0`, not `1`) and stay distinguishable from integers.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
