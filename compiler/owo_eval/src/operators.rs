//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch for prefix, infix, and index operations. The
//! value type set is fixed (not user-extensible), so pattern matching is
//! preferred over trait objects for exhaustiveness checking.

use std::rc::Rc;

use owo_ir::{InfixOp, PrefixOp};

use crate::errors::{
    division_by_zero, index_not_supported, integer_overflow, negation_overflow, type_mismatch,
    unknown_infix_op, unknown_prefix_op, unusable_hash_key,
};
use crate::value::Value;

/// Evaluate a prefix operation.
///
/// `!` coerces any operand through truthiness, so it never fails; `-` is
/// defined on integers only.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over evaluated operands; references would add clones at call sites"
)]
pub fn eval_prefix(right: Value, op: PrefixOp) -> Value {
    match (&right, op) {
        (operand, PrefixOp::Bang) => Value::Boolean(!operand.is_truthy()),
        (Value::Integer(value), PrefixOp::Minus) => match value.checked_neg() {
            Some(negated) => Value::Integer(negated),
            None => negation_overflow(),
        },
        (_, PrefixOp::Minus) => unknown_prefix_op(op, right.type_name()),
    }
}

/// Evaluate an infix operation using direct pattern matching.
///
/// Mixed integer/float arithmetic promotes the integer side to float. The
/// type-specific helpers answer `None` for operators outside their table,
/// which this entry point turns into an `unknown operator` error naming
/// the original operand types.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over evaluated operands; references would add clones at call sites"
)]
pub fn eval_infix(left: Value, right: Value, op: InfixOp) -> Value {
    let result = match (&left, &right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_infix(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_infix(*a, *b, op),
        (Value::Integer(a), Value::Float(b)) => eval_float_infix(*a as f64, *b, op),
        (Value::Float(a), Value::Integer(b)) => eval_float_infix(*a, *b as f64, op),
        (Value::Str(a), Value::Str(b)) => eval_string_infix(a, b, op),
        _ if matches!(op, InfixOp::EqEq | InfixOp::NotEq) => {
            Some(eval_identity(&left, &right, op))
        }
        _ if left.type_name() == right.type_name() => None,
        _ => Some(type_mismatch(left.type_name(), op, right.type_name())),
    };
    result.unwrap_or_else(|| unknown_infix_op(left.type_name(), op, right.type_name()))
}

/// Evaluate an index operation: `xs[0]`, `h["key"]`.
///
/// Out-of-range and missing-key lookups answer `null`; only an unindexable
/// left side or an unhashable key is an error.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over evaluated operands; references would add clones at call sites"
)]
pub fn eval_index(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(elements), Value::Integer(position)) => usize::try_from(*position)
            .ok()
            .and_then(|i| elements.get(i).cloned())
            .unwrap_or(Value::Null),
        (Value::Hash(pairs), _) => match index.hash_key() {
            Some(key) => pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()),
            None => unusable_hash_key(index.type_name()),
        },
        _ => index_not_supported(left.type_name()),
    }
}

/// Binary operations on integers.
///
/// All arithmetic goes through the checked methods; overflow surfaces as a
/// runtime error value rather than wrapping.
fn eval_integer_infix(a: i64, b: i64, op: InfixOp) -> Option<Value> {
    let value = match op {
        InfixOp::Plus => checked_arith(a.checked_add(b), op),
        InfixOp::Minus => checked_arith(a.checked_sub(b), op),
        InfixOp::Star => checked_arith(a.checked_mul(b), op),
        InfixOp::Slash => {
            if b == 0 {
                division_by_zero()
            } else {
                checked_arith(a.checked_div(b), op)
            }
        }
        // exponentiation runs through f64 and truncates back, so 2 ^ -1 is 0
        InfixOp::Caret => Value::Integer((a as f64).powf(b as f64) as i64),
        InfixOp::Lt => Value::Boolean(a < b),
        InfixOp::Gt => Value::Boolean(a > b),
        InfixOp::LtEq => Value::Boolean(a <= b),
        InfixOp::GtEq => Value::Boolean(a >= b),
        InfixOp::EqEq => Value::Boolean(a == b),
        InfixOp::NotEq => Value::Boolean(a != b),
        InfixOp::PlusPlus => return None,
    };
    Some(value)
}

/// Binary operations on floats, including promoted mixed operands.
fn eval_float_infix(a: f64, b: f64, op: InfixOp) -> Option<Value> {
    let value = match op {
        InfixOp::Plus => Value::Float(a + b),
        InfixOp::Minus => Value::Float(a - b),
        InfixOp::Star => Value::Float(a * b),
        InfixOp::Slash => {
            if b == 0.0 {
                division_by_zero()
            } else {
                Value::Float(a / b)
            }
        }
        InfixOp::Lt => Value::Boolean(a < b),
        InfixOp::Gt => Value::Boolean(a > b),
        InfixOp::LtEq => Value::Boolean(a <= b),
        InfixOp::GtEq => Value::Boolean(a >= b),
        InfixOp::EqEq => Value::Boolean(a == b),
        InfixOp::NotEq => Value::Boolean(a != b),
        InfixOp::Caret | InfixOp::PlusPlus => return None,
    };
    Some(value)
}

/// Binary operations on strings: `+` concatenates, nothing else is defined.
///
/// `==` on strings falls out of the table; string content comparison
/// goes through the `strcomp` builtin instead.
fn eval_string_infix(a: &Rc<str>, b: &Rc<str>, op: InfixOp) -> Option<Value> {
    match op {
        InfixOp::Plus => Some(Value::Str(format!("{a}{b}").into())),
        _ => None,
    }
}

/// `==` and `!=` between operands no arithmetic table claims.
///
/// Booleans and `null` compare by value; arrays, hashes, and functions
/// compare by reference; everything else is simply not equal.
fn eval_identity(left: &Value, right: &Value, op: InfixOp) -> Value {
    let same = match (left, right) {
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Null, Value::Null) => true,
        (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
        (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Builtin(a), Value::Builtin(b)) => a == b,
        _ => false,
    };
    Value::Boolean(if op == InfixOp::NotEq { !same } else { same })
}

/// Checked integer arithmetic where the only failure mode is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op: InfixOp) -> Value {
    result.map_or_else(|| integer_overflow(op), Value::Integer)
}
