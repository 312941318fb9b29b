//! Centralized constructors for runtime error values.
//!
//! OwO reports failures as [`Value::Error`] results rather than through a
//! separate error channel, and scripts match on the exact wording, so every
//! message the evaluator can produce is minted here.

use owo_ir::{InfixOp, PrefixOp};

use crate::value::Value;

/// `type mismatch: INTEGER + STRING`
#[cold]
pub fn type_mismatch(left: &str, op: InfixOp, right: &str) -> Value {
    Value::Error(format!("type mismatch: {left} {op} {right}"))
}

/// `unknown operator: BOOLEAN + BOOLEAN`
#[cold]
pub fn unknown_infix_op(left: &str, op: InfixOp, right: &str) -> Value {
    Value::Error(format!("unknown operator: {left} {op} {right}"))
}

/// `unknown operator: -BOOLEAN`
#[cold]
pub fn unknown_prefix_op(op: PrefixOp, right: &str) -> Value {
    Value::Error(format!("unknown operator: {op}{right}"))
}

/// `attempted division by zero`
#[cold]
pub fn division_by_zero() -> Value {
    Value::Error("attempted division by zero".to_string())
}

/// `integer overflow: INTEGER * INTEGER`
///
/// Only integers can overflow; float arithmetic saturates to infinities.
#[cold]
pub fn integer_overflow(op: InfixOp) -> Value {
    Value::Error(format!("integer overflow: INTEGER {op} INTEGER"))
}

/// `integer overflow: -INTEGER`
#[cold]
pub fn negation_overflow() -> Value {
    Value::Error("integer overflow: -INTEGER".to_string())
}

/// `identifier not found: foobar`
#[cold]
pub fn identifier_not_found(name: &str) -> Value {
    Value::Error(format!("identifier not found: {name}"))
}

/// `identifier foobar not found!`
///
/// The reassignment form of the lookup failure; its wording differs from
/// [`identifier_not_found`] and scripts rely on both spellings.
#[cold]
pub fn reassignment_target_missing(name: &str) -> Value {
    Value::Error(format!("identifier {name} not found!"))
}

/// `Not a function: INTEGER`
#[cold]
pub fn not_a_function(type_name: &str) -> Value {
    Value::Error(format!("Not a function: {type_name}"))
}

/// `wrong number of arguments. got=1, want=2`
#[cold]
pub fn wrong_arity(got: usize, want: usize) -> Value {
    Value::Error(format!("wrong number of arguments. got={got}, want={want}"))
}

/// `unusable as hash key: FUNCTION`, the index form.
#[cold]
pub fn unusable_hash_key(type_name: &str) -> Value {
    Value::Error(format!("unusable as hash key: {type_name}"))
}

/// `Unusable as hash key: ARRAY`, the hash-literal form, which carries a
/// leading capital where the index form does not.
#[cold]
pub fn unusable_literal_hash_key(type_name: &str) -> Value {
    Value::Error(format!("Unusable as hash key: {type_name}"))
}

/// `index operator not supported: STRING`
#[cold]
pub fn index_not_supported(type_name: &str) -> Value {
    Value::Error(format!("index operator not supported: {type_name}"))
}

/// ``argument to `len` not supported, got INTEGER``
#[cold]
pub fn builtin_arg_unsupported(builtin: &str, type_name: &str) -> Value {
    Value::Error(format!(
        "argument to `{builtin}` not supported, got {type_name}"
    ))
}

/// ``argument to `first` must be ARRAY, got INTEGER``
#[cold]
pub fn builtin_arg_wrong_type(builtin: &str, want: &str, type_name: &str) -> Value {
    Value::Error(format!(
        "argument to `{builtin}` must be {want}, got {type_name}"
    ))
}
