use crate::error::RuntimeError;
use memory::Value;

/// Integer view of a numeric value. Floats truncate toward zero.
pub fn int_value(val: &Value) -> Result<i64, RuntimeError> {
    match val {
        Value::Int(n) => Ok(*n),
        Value::Float(x) => {
            if !x.is_finite() {
                return Err(RuntimeError::NonFiniteConversion(*x));
            }
            let t = x.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            if t >= -(i64::MIN as f64) || t < i64::MIN as f64 {
                return Err(RuntimeError::IntegerOverflow);
            }
            Ok(t as i64)
        }
        Value::Str(_) => Err(RuntimeError::TypeMismatch(format!(
            "expected a number, got {}",
            val.type_name()
        ))),
    }
}

/// Float view of a numeric value.
pub fn float_value(val: &Value) -> Result<f64, RuntimeError> {
    match val {
        Value::Int(n) => Ok(*n as f64),
        Value::Float(x) => Ok(*x),
        Value::Str(_) => Err(RuntimeError::TypeMismatch(format!(
            "expected a number, got {}",
            val.type_name()
        ))),
    }
}

/// Both operands integer-tagged: take the integer path.
#[inline]
pub fn both_ints(a: &Value, b: &Value) -> Option<(i64, i64)> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some((*x, *y)),
        _ => None,
    }
}

/// Branch condition: non-zero after integer coercion.
pub fn truthy(val: &Value) -> Result<bool, RuntimeError> {
    match val {
        Value::Int(_) | Value::Float(_) => Ok(int_value(val)? != 0),
        Value::Str(_) => Err(RuntimeError::TypeMismatch(format!(
            "branch condition must be numeric, got {}",
            val.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_value_truncates_toward_zero() {
        assert_eq!(int_value(&Value::float(2.9)).unwrap(), 2);
        assert_eq!(int_value(&Value::float(-2.9)).unwrap(), -2);
        assert_eq!(int_value(&Value::int(-5)).unwrap(), -5);
    }

    #[test]
    fn test_int_value_rejects_non_finite_and_huge() {
        assert!(matches!(
            int_value(&Value::float(f64::NAN)),
            Err(RuntimeError::NonFiniteConversion(_))
        ));
        assert!(matches!(
            int_value(&Value::float(1e300)),
            Err(RuntimeError::IntegerOverflow)
        ));
        assert_eq!(int_value(&Value::float(-9.223372036854775808e18)).unwrap(), i64::MIN);
    }

    #[test]
    fn test_strings_are_not_numbers() {
        assert!(matches!(
            float_value(&Value::string("1")),
            Err(RuntimeError::TypeMismatch(_))
        ));
        assert!(matches!(
            truthy(&Value::string("")),
            Err(RuntimeError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_truthiness() {
        assert!(!truthy(&Value::int(0)).unwrap());
        assert!(truthy(&Value::int(-3)).unwrap());
        assert!(!truthy(&Value::float(0.75)).unwrap());
        assert!(truthy(&Value::float(1.5)).unwrap());
    }
}
