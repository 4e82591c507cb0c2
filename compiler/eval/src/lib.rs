//! Operator semantics shared by `partial_eval` (constant folding over the
//! AST) and the runtime shim's `_h._u`/`_h._b` callbacks. One
//! `match op { ... }` arm per operator, covering arithmetic, bitwise,
//! shift, comparison, and containment dispatch.

mod value;
pub use value::Value;

use hyperion_ast::{BinaryOp, UnaryOp};
use hyperion_errors::{EvalError, Result};

fn type_mismatch(op: impl Into<String>, operands: impl Into<String>) -> hyperion_errors::Error {
    EvalError::TypeMismatch { op: op.into(), operands: operands.into() }.into()
}

fn operand_desc(values: &[&Value]) -> String {
    values.iter().map(|v| v.type_name()).collect::<Vec<_>>().join(", ")
}

pub fn eval_unary(op: UnaryOp, operand: &Value) -> Result<Value> {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Pos => match operand {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(x) => Ok(Value::Float(*x)),
            Value::Bool(b) => Ok(Value::Int(if *b { 1 } else { 0 })),
            _ => Err(type_mismatch(op.tag(), operand_desc(&[operand]))),
        },
        UnaryOp::Neg => match operand {
            Value::Int(i) => i
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| EvalError::Overflow { op: op.tag().into(), lhs: operand.to_string(), rhs: String::new() }.into()),
            Value::Float(x) => Ok(Value::Float(-x)),
            Value::Bool(b) => Ok(Value::Int(if *b { -1 } else { 0 })),
            _ => Err(type_mismatch(op.tag(), operand_desc(&[operand]))),
        },
        UnaryOp::Inv => match operand.as_i64() {
            Some(i) => Ok(Value::Int(!i)),
            None => Err(type_mismatch(op.tag(), operand_desc(&[operand]))),
        },
    }
}

pub fn eval_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    match op {
        BinaryOp::Add => eval_add(lhs, rhs),
        BinaryOp::Sub => eval_numeric(op, lhs, rhs, |a, b| a.checked_sub(b), |a, b| a - b),
        BinaryOp::Mul => eval_mul(lhs, rhs),
        BinaryOp::Pow => eval_pow(lhs, rhs),
        BinaryOp::TrueDiv => eval_truediv(lhs, rhs),
        BinaryOp::FloorDiv => eval_floordiv(lhs, rhs),
        BinaryOp::Mod => eval_mod(lhs, rhs),
        BinaryOp::LShift => eval_shift(op, lhs, rhs, |a, b| a.checked_shl(b)),
        BinaryOp::RShift => eval_shift(op, lhs, rhs, |a, b| a.checked_shr(b)),
        BinaryOp::And => eval_bitwise(op, lhs, rhs, |a, b| a & b, |a, b| a & b),
        BinaryOp::Or => eval_bitwise(op, lhs, rhs, |a, b| a | b, |a, b| a | b),
        BinaryOp::Xor => eval_bitwise(op, lhs, rhs, |a, b| a ^ b, |a, b| a ^ b),
        BinaryOp::Eq => eval_compare(lhs, rhs).map(|ord| Value::Bool(ord == Some(std::cmp::Ordering::Equal))),
        BinaryOp::Ne => eval_compare(lhs, rhs).map(|ord| Value::Bool(ord != Some(std::cmp::Ordering::Equal))),
        BinaryOp::Lt => eval_ordered(op, lhs, rhs, std::cmp::Ordering::is_lt),
        BinaryOp::Gt => eval_ordered(op, lhs, rhs, std::cmp::Ordering::is_gt),
        BinaryOp::Le => eval_ordered(op, lhs, rhs, std::cmp::Ordering::is_le),
        BinaryOp::Ge => eval_ordered(op, lhs, rhs, std::cmp::Ordering::is_ge),
        BinaryOp::In => eval_contains(lhs, rhs).map(Value::Bool),
        BinaryOp::NotIn => eval_contains(lhs, rhs).map(|b| Value::Bool(!b)),
        // Both operands are already reduced expressions by the time a
        // `land`/`lor` reaches here,
        // so there is no operand left unevaluated to return verbatim the
        // way Python's `and`/`or` would; this folds straight to the
        // truth value instead.
        BinaryOp::LAnd => Ok(Value::Bool(lhs.is_truthy() && rhs.is_truthy())),
        BinaryOp::LOr => Ok(Value::Bool(lhs.is_truthy() || rhs.is_truthy())),
    }
}

fn eval_add(lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        _ => eval_numeric(BinaryOp::Add, lhs, rhs, |a, b| a.checked_add(b), |a, b| a + b),
    }
}

fn eval_mul(lhs: &Value, rhs: &Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
            if *n < 0 {
                return Err(EvalError::Domain { op: BinaryOp::Mul.tag().into(), detail: "negative repeat count".into() }.into());
            }
            Ok(Value::Str(s.repeat(*n as usize)))
        }
        _ => eval_numeric(BinaryOp::Mul, lhs, rhs, |a, b| a.checked_mul(b), |a, b| a * b),
    }
}

fn eval_pow(lhs: &Value, rhs: &Value) -> Result<Value> {
    if !lhs.is_numeric() || !rhs.is_numeric() {
        return Err(type_mismatch(BinaryOp::Pow.tag(), operand_desc(&[lhs, rhs])));
    }
    if let (Some(base), Some(exp)) = (lhs.as_i64(), rhs.as_i64()) {
        if !lhs.is_float_typed() && !rhs.is_float_typed() && exp >= 0 {
            return match exp.try_into().ok().and_then(|e: u32| base.checked_pow(e)) {
                Some(v) => Ok(Value::Int(v)),
                None => Err(EvalError::Overflow { op: BinaryOp::Pow.tag().into(), lhs: lhs.to_string(), rhs: rhs.to_string() }.into()),
            };
        }
    }
    let (base, exp) = (lhs.as_f64().unwrap(), rhs.as_f64().unwrap());
    Ok(Value::Float(base.powf(exp)))
}

fn eval_truediv(lhs: &Value, rhs: &Value) -> Result<Value> {
    let (a, b) = numeric_pair(BinaryOp::TrueDiv, lhs, rhs)?;
    if b == 0.0 {
        return Err(EvalError::DivisionByZero { op: BinaryOp::TrueDiv.tag().into() }.into());
    }
    Ok(Value::Float(a / b))
}

fn eval_floordiv(lhs: &Value, rhs: &Value) -> Result<Value> {
    if let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) {
        if !lhs.is_float_typed() && !rhs.is_float_typed() {
            if b == 0 {
                return Err(EvalError::DivisionByZero { op: BinaryOp::FloorDiv.tag().into() }.into());
            }
            return a
                .checked_div_euclid(b)
                .map(Value::Int)
                .ok_or_else(|| EvalError::Overflow { op: BinaryOp::FloorDiv.tag().into(), lhs: lhs.to_string(), rhs: rhs.to_string() }.into());
        }
    }
    let (a, b) = numeric_pair(BinaryOp::FloorDiv, lhs, rhs)?;
    if b == 0.0 {
        return Err(EvalError::DivisionByZero { op: BinaryOp::FloorDiv.tag().into() }.into());
    }
    Ok(Value::Float((a / b).floor()))
}

fn eval_mod(lhs: &Value, rhs: &Value) -> Result<Value> {
    if let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) {
        if !lhs.is_float_typed() && !rhs.is_float_typed() {
            if b == 0 {
                return Err(EvalError::DivisionByZero { op: BinaryOp::Mod.tag().into() }.into());
            }
            return a
                .checked_rem_euclid(b)
                .map(Value::Int)
                .ok_or_else(|| EvalError::Overflow { op: BinaryOp::Mod.tag().into(), lhs: lhs.to_string(), rhs: rhs.to_string() }.into());
        }
    }
    let (a, b) = numeric_pair(BinaryOp::Mod, lhs, rhs)?;
    if b == 0.0 {
        return Err(EvalError::DivisionByZero { op: BinaryOp::Mod.tag().into() }.into());
    }
    Ok(Value::Float(a.rem_euclid(b)))
}

fn numeric_pair(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<(f64, f64)> {
    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs]))),
    }
}

fn eval_numeric(
    op: BinaryOp,
    lhs: &Value,
    rhs: &Value,
    int_op: impl FnOnce(i64, i64) -> Option<i64>,
    float_op: impl FnOnce(f64, f64) -> f64,
) -> Result<Value> {
    if let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) {
        if !lhs.is_float_typed() && !rhs.is_float_typed() {
            return int_op(a, b)
                .map(Value::Int)
                .ok_or_else(|| EvalError::Overflow { op: op.tag().into(), lhs: lhs.to_string(), rhs: rhs.to_string() }.into());
        }
    }
    let (a, b) = numeric_pair(op, lhs, rhs)?;
    Ok(Value::Float(float_op(a, b)))
}

fn eval_shift(op: BinaryOp, lhs: &Value, rhs: &Value, int_op: impl FnOnce(i64, u32) -> Option<i64>) -> Result<Value> {
    let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) else {
        return Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs])));
    };
    if lhs.is_float_typed() || rhs.is_float_typed() {
        return Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs])));
    }
    if b < 0 {
        return Err(EvalError::Domain { op: op.tag().into(), detail: "negative shift amount".into() }.into());
    }
    int_op(a, b as u32).map(Value::Int).ok_or_else(|| EvalError::Overflow { op: op.tag().into(), lhs: lhs.to_string(), rhs: rhs.to_string() }.into())
}

fn eval_bitwise(op: BinaryOp, lhs: &Value, rhs: &Value, int_op: impl FnOnce(i64, i64) -> i64, bool_op: impl FnOnce(bool, bool) -> bool) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(bool_op(*a, *b))),
        _ => {
            let (Some(a), Some(b)) = (lhs.as_i64(), rhs.as_i64()) else {
                return Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs])));
            };
            if lhs.is_float_typed() || rhs.is_float_typed() {
                return Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs])));
            }
            Ok(Value::Int(int_op(a, b)))
        }
    }
}

fn eval_compare(lhs: &Value, rhs: &Value) -> Result<Option<std::cmp::Ordering>> {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => Ok(Some(std::cmp::Ordering::Equal)),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (a, b) if a.is_numeric() && b.is_numeric() => Ok(a.as_f64().unwrap().partial_cmp(&b.as_f64().unwrap())),
        _ => Ok(None),
    }
}

fn eval_ordered(op: BinaryOp, lhs: &Value, rhs: &Value, accept: impl FnOnce(std::cmp::Ordering) -> bool) -> Result<Value> {
    match eval_compare(lhs, rhs)? {
        Some(ord) => Ok(Value::Bool(accept(ord))),
        None => Err(type_mismatch(op.tag(), operand_desc(&[lhs, rhs]))),
    }
}

fn eval_contains(lhs: &Value, rhs: &Value) -> Result<bool> {
    match (lhs, rhs) {
        (Value::Str(needle), Value::Str(haystack)) => Ok(haystack.contains(needle.as_str())),
        _ => Err(type_mismatch(BinaryOp::In.tag(), operand_desc(&[lhs, rhs]))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_ints() {
        assert_eq!(eval_binary(BinaryOp::Add, &Value::Int(2), &Value::Int(3)).unwrap(), Value::Int(5));
    }

    #[test]
    fn add_strings_concatenates() {
        let result = eval_binary(BinaryOp::Add, &Value::Str("a".into()), &Value::Str("b".into())).unwrap();
        assert_eq!(result, Value::Str("ab".into()));
    }

    #[test]
    fn mul_string_by_int_repeats() {
        let result = eval_binary(BinaryOp::Mul, &Value::Str("ab".into()), &Value::Int(3)).unwrap();
        assert_eq!(result, Value::Str("ababab".into()));
    }

    #[test]
    fn pow_int_int_stays_int() {
        assert_eq!(eval_binary(BinaryOp::Pow, &Value::Int(2), &Value::Int(10)).unwrap(), Value::Int(1024));
    }

    #[test]
    fn pow_negative_exponent_is_float() {
        let result = eval_binary(BinaryOp::Pow, &Value::Int(2), &Value::Int(-1)).unwrap();
        assert_eq!(result, Value::Float(0.5));
    }

    #[test]
    fn truediv_by_zero_is_error() {
        assert!(eval_binary(BinaryOp::TrueDiv, &Value::Int(1), &Value::Int(0)).is_err());
    }

    #[test]
    fn floordiv_rounds_toward_negative_infinity() {
        let result = eval_binary(BinaryOp::FloorDiv, &Value::Int(-7), &Value::Int(2)).unwrap();
        assert_eq!(result, Value::Int(-4));
    }

    #[test]
    fn shift_by_negative_is_domain_error() {
        assert!(eval_binary(BinaryOp::LShift, &Value::Int(1), &Value::Int(-1)).is_err());
    }

    #[test]
    fn bitwise_and_on_bools_stays_bool() {
        assert_eq!(eval_binary(BinaryOp::And, &Value::Bool(true), &Value::Bool(false)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn comparison_across_int_and_float() {
        assert_eq!(eval_binary(BinaryOp::Lt, &Value::Int(1), &Value::Float(1.5)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn string_lexicographic_ordering() {
        assert_eq!(eval_binary(BinaryOp::Lt, &Value::Str("abc".into()), &Value::Str("abd".into())).unwrap(), Value::Bool(true));
    }

    #[test]
    fn in_is_substring_test() {
        assert_eq!(eval_binary(BinaryOp::In, &Value::Str("bc".into()), &Value::Str("abcd".into())).unwrap(), Value::Bool(true));
    }

    #[test]
    fn logical_and_does_not_short_circuit_since_both_sides_are_pre_reduced() {
        assert_eq!(eval_binary(BinaryOp::LAnd, &Value::Bool(false), &Value::Int(1)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn unary_not_coerces_truthiness() {
        assert_eq!(eval_unary(UnaryOp::Not, &Value::Int(0)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn unary_inv_rejects_float() {
        assert!(eval_unary(UnaryOp::Inv, &Value::Float(1.0)).is_err());
    }

    #[test]
    fn unary_neg_overflow_is_error() {
        assert!(eval_unary(UnaryOp::Neg, &Value::Int(i64::MIN)).is_err());
    }
}
