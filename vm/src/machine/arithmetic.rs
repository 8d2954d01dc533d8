use crate::error::RuntimeError;
use crate::operator::{BinaryOp, UnaryOp};
use memory::Value;

use super::promotion::{both_ints, float_value, int_value};
use super::vm::{Flow, VM};

/// Apply a unary operator.
pub fn apply_unary(op: UnaryOp, a: &Value) -> Result<Value, RuntimeError> {
    match op {
        UnaryOp::Float => Ok(Value::float(float_value(a)?)),
        UnaryOp::Int => Ok(Value::int(int_value(a)?)),
    }
}

/// Apply a binary operator.
///
/// Two integer operands stay on the integer path; anything else is promoted
/// to `f64`. Comparisons always yield an integer 0/1 and `hypot` always
/// yields a float. Integer division truncates toward zero.
pub fn apply_binary(op: BinaryOp, a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    if let Some((x, y)) = both_ints(a, b) {
        let res = match op {
            BinaryOp::Lt => Value::bool(x < y),
            BinaryOp::Ge => Value::bool(x >= y),
            BinaryOp::Gt => Value::bool(x > y),
            BinaryOp::Sub => Value::int(x.checked_sub(y).ok_or(RuntimeError::IntegerOverflow)?),
            BinaryOp::Mul => Value::int(x.checked_mul(y).ok_or(RuntimeError::IntegerOverflow)?),
            BinaryOp::Add => Value::int(x.checked_add(y).ok_or(RuntimeError::IntegerOverflow)?),
            BinaryOp::Div => {
                if y == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Value::int(x.checked_div(y).ok_or(RuntimeError::IntegerOverflow)?)
            }
            BinaryOp::Hypot => Value::float((x as f64).hypot(y as f64)),
        };
        return Ok(res);
    }

    let x = float_value(a)?;
    let y = float_value(b)?;
    let res = match op {
        BinaryOp::Lt => Value::bool(x < y),
        BinaryOp::Ge => Value::bool(x >= y),
        BinaryOp::Gt => Value::bool(x > y),
        BinaryOp::Sub => Value::float(x - y),
        BinaryOp::Mul => Value::float(x * y),
        BinaryOp::Add => Value::float(x + y),
        BinaryOp::Div => Value::float(x / y),
        BinaryOp::Hypot => Value::float(x.hypot(y)),
    };
    Ok(res)
}

/// Trait for `exec_1` / `exec_2` handlers
pub trait ArithmeticOps {
    fn handle_exec_unary(&mut self, pc: usize) -> Result<Flow, RuntimeError>;
    fn handle_exec_binary(&mut self, pc: usize) -> Result<Flow, RuntimeError>;
}

impl ArithmeticOps for VM {
    fn handle_exec_unary(&mut self, pc: usize) -> Result<Flow, RuntimeError> {
        let dst = self.slot_operand(pc, 1)?;
        let id = self.operand(pc, 2)?;
        let arg = self.slot_operand(pc, 3)?;

        let op = UnaryOp::from_u32(id).ok_or(RuntimeError::InvalidUnaryOp(id))?;
        let res = apply_unary(op, self.load(arg)?)?;
        self.store(dst, res)?;
        Ok(Flow::Continue(pc + 4))
    }

    fn handle_exec_binary(&mut self, pc: usize) -> Result<Flow, RuntimeError> {
        let dst = self.slot_operand(pc, 1)?;
        let id = self.operand(pc, 2)?;
        let lhs = self.slot_operand(pc, 3)?;
        let rhs = self.slot_operand(pc, 4)?;

        let op = BinaryOp::from_u32(id).ok_or(RuntimeError::InvalidBinaryOp(id))?;
        let res = apply_binary(op, self.load(lhs)?, self.load(rhs)?)?;
        self.store(dst, res)?;
        Ok(Flow::Continue(pc + 5))
    }
}
