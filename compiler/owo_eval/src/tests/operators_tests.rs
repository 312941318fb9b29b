//! Tests for operator dispatch on runtime values.
//!
//! These call the operator entry points directly; the pipeline-level tests
//! exercise the same paths through real programs.

use std::rc::Rc;

use owo_ir::{InfixOp, PrefixOp};
use pretty_assertions::assert_eq;

use crate::{eval_index, eval_infix, eval_prefix, HashKey, HashPair, Value};

fn error(message: &str) -> Value {
    Value::Error(message.to_string())
}

// === Integer arithmetic ===

#[test]
fn test_integer_arithmetic() {
    let cases = [
        (5, InfixOp::Plus, 5, 10),
        (5, InfixOp::Minus, 9, -4),
        (6, InfixOp::Star, 7, 42),
        (7, InfixOp::Slash, 2, 3),
        (-7, InfixOp::Slash, 2, -3),
        (2, InfixOp::Caret, 10, 1024),
        (2, InfixOp::Caret, 0, 1),
        // exponentiation truncates through float, so a negative power is 0
        (2, InfixOp::Caret, -1, 0),
    ];
    for (a, op, b, want) in cases {
        assert_eq!(
            eval_infix(Value::Integer(a), Value::Integer(b), op),
            Value::Integer(want),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn test_integer_comparisons() {
    let cases = [
        (1, InfixOp::Lt, 2, true),
        (2, InfixOp::Lt, 1, false),
        (2, InfixOp::Gt, 1, true),
        (2, InfixOp::LtEq, 2, true),
        (3, InfixOp::GtEq, 4, false),
        (1, InfixOp::EqEq, 1, true),
        (1, InfixOp::NotEq, 1, false),
        (1, InfixOp::NotEq, 2, true),
    ];
    for (a, op, b, want) in cases {
        assert_eq!(
            eval_infix(Value::Integer(a), Value::Integer(b), op),
            Value::Boolean(want),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn test_integer_overflow_is_an_error() {
    let cases = [
        (i64::MAX, InfixOp::Plus, 1, "integer overflow: INTEGER + INTEGER"),
        (i64::MIN, InfixOp::Minus, 1, "integer overflow: INTEGER - INTEGER"),
        (i64::MAX, InfixOp::Star, 2, "integer overflow: INTEGER * INTEGER"),
        (i64::MIN, InfixOp::Slash, -1, "integer overflow: INTEGER / INTEGER"),
    ];
    for (a, op, b, want) in cases {
        assert_eq!(
            eval_infix(Value::Integer(a), Value::Integer(b), op),
            error(want),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn test_division_by_zero() {
    let zero_divisions = [
        (Value::Integer(1), Value::Integer(0)),
        (Value::Float(1.5), Value::Float(0.0)),
        (Value::Integer(5), Value::Float(0.0)),
        (Value::Float(5.5), Value::Integer(0)),
    ];
    for (a, b) in zero_divisions {
        assert_eq!(
            eval_infix(a, b, InfixOp::Slash),
            error("attempted division by zero")
        );
    }
}

// === Floats and promotion ===

#[test]
fn test_float_arithmetic() {
    assert_eq!(
        eval_infix(Value::Float(2.5), Value::Float(1.25), InfixOp::Plus),
        Value::Float(3.75)
    );
    assert_eq!(
        eval_infix(Value::Float(1.5), Value::Float(0.25), InfixOp::Minus),
        Value::Float(1.25)
    );
    assert_eq!(
        eval_infix(Value::Float(2.5), Value::Float(2.0), InfixOp::Star),
        Value::Float(5.0)
    );
    assert_eq!(
        eval_infix(Value::Float(5.0), Value::Float(2.0), InfixOp::Slash),
        Value::Float(2.5)
    );
}

#[test]
fn test_mixed_arithmetic_promotes_to_float() {
    assert_eq!(
        eval_infix(Value::Integer(1), Value::Float(2.5), InfixOp::Plus),
        Value::Float(3.5)
    );
    assert_eq!(
        eval_infix(Value::Float(2.5), Value::Integer(2), InfixOp::Star),
        Value::Float(5.0)
    );
}

#[test]
fn test_float_and_mixed_comparisons() {
    assert_eq!(
        eval_infix(Value::Float(1.5), Value::Float(2.5), InfixOp::Lt),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Float(2.5), Value::Float(2.5), InfixOp::LtEq),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Integer(1), Value::Float(1.5), InfixOp::Lt),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Float(2.0), Value::Integer(2), InfixOp::EqEq),
        Value::Boolean(true)
    );
}

#[test]
fn test_float_has_no_exponent() {
    assert_eq!(
        eval_infix(Value::Float(2.0), Value::Float(3.0), InfixOp::Caret),
        error("unknown operator: FLOAT ^ FLOAT")
    );
    // the error names the operands as written, not the promoted pair
    assert_eq!(
        eval_infix(Value::Integer(2), Value::Float(3.0), InfixOp::Caret),
        error("unknown operator: INTEGER ^ FLOAT")
    );
}

// === Strings ===

#[test]
fn test_string_concatenation() {
    assert_eq!(
        eval_infix(
            Value::Str("Hello".into()),
            Value::Str(" World".into()),
            InfixOp::Plus
        ),
        Value::Str("Hello World".into())
    );
}

#[test]
fn test_strings_support_only_concatenation() {
    for op in [InfixOp::Minus, InfixOp::Lt, InfixOp::EqEq, InfixOp::NotEq] {
        assert_eq!(
            eval_infix(Value::Str("a".into()), Value::Str("b".into()), op),
            error(&format!("unknown operator: STRING {op} STRING")),
            "op {op}"
        );
    }
}

// === Identity equality ===

#[test]
fn test_identity_equality_on_scalars() {
    assert_eq!(
        eval_infix(Value::Boolean(true), Value::Boolean(true), InfixOp::EqEq),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Boolean(true), Value::Boolean(false), InfixOp::NotEq),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Null, Value::Null, InfixOp::EqEq),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(Value::Null, Value::Null, InfixOp::NotEq),
        Value::Boolean(false)
    );
}

#[test]
fn test_identity_equality_across_types_is_false() {
    assert_eq!(
        eval_infix(Value::Boolean(true), Value::Integer(1), InfixOp::EqEq),
        Value::Boolean(false)
    );
    assert_eq!(
        eval_infix(Value::Integer(1), Value::Str("1".into()), InfixOp::NotEq),
        Value::Boolean(true)
    );
}

#[test]
fn test_array_equality_is_by_reference() {
    let elements = Rc::new(vec![Value::Integer(1)]);
    assert_eq!(
        eval_infix(
            Value::Array(Rc::clone(&elements)),
            Value::Array(Rc::clone(&elements)),
            InfixOp::EqEq
        ),
        Value::Boolean(true)
    );
    assert_eq!(
        eval_infix(
            Value::Array(elements),
            Value::Array(Rc::new(vec![Value::Integer(1)])),
            InfixOp::EqEq
        ),
        Value::Boolean(false)
    );
}

// === Rejected pairings ===

#[test]
fn test_type_mismatch() {
    assert_eq!(
        eval_infix(Value::Integer(5), Value::Str("a".into()), InfixOp::Plus),
        error("type mismatch: INTEGER + STRING")
    );
    assert_eq!(
        eval_infix(Value::Boolean(true), Value::Integer(1), InfixOp::Lt),
        error("type mismatch: BOOLEAN < INTEGER")
    );
}

#[test]
fn test_unknown_operator_on_matching_types() {
    assert_eq!(
        eval_infix(Value::Boolean(true), Value::Boolean(false), InfixOp::Plus),
        error("unknown operator: BOOLEAN + BOOLEAN")
    );
    assert_eq!(
        eval_infix(Value::Null, Value::Null, InfixOp::Plus),
        error("unknown operator: NULL + NULL")
    );
}

#[test]
fn test_increment_is_not_a_binary_operator() {
    assert_eq!(
        eval_infix(Value::Integer(1), Value::Integer(2), InfixOp::PlusPlus),
        error("unknown operator: INTEGER ++ INTEGER")
    );
}

// === Prefix operators ===

#[test]
fn test_bang_inverts_truthiness() {
    let cases = [
        (Value::Boolean(true), false),
        (Value::Boolean(false), true),
        (Value::Null, true),
        (Value::Integer(5), false),
        (Value::Integer(0), false),
        (Value::Str("".into()), false),
    ];
    for (operand, want) in cases {
        assert_eq!(
            eval_prefix(operand, PrefixOp::Bang),
            Value::Boolean(want)
        );
    }
}

#[test]
fn test_minus_prefix() {
    assert_eq!(
        eval_prefix(Value::Integer(5), PrefixOp::Minus),
        Value::Integer(-5)
    );
    assert_eq!(
        eval_prefix(Value::Integer(-5), PrefixOp::Minus),
        Value::Integer(5)
    );
    assert_eq!(
        eval_prefix(Value::Integer(i64::MIN), PrefixOp::Minus),
        error("integer overflow: -INTEGER")
    );
    assert_eq!(
        eval_prefix(Value::Boolean(true), PrefixOp::Minus),
        error("unknown operator: -BOOLEAN")
    );
    assert_eq!(
        eval_prefix(Value::Float(1.5), PrefixOp::Minus),
        error("unknown operator: -FLOAT")
    );
}

// === Index operator ===

#[test]
fn test_array_indexing() {
    let array = Value::Array(Rc::new(vec![
        Value::Integer(10),
        Value::Integer(20),
        Value::Integer(30),
    ]));
    assert_eq!(eval_index(array.clone(), Value::Integer(0)), Value::Integer(10));
    assert_eq!(eval_index(array.clone(), Value::Integer(2)), Value::Integer(30));
    assert_eq!(eval_index(array.clone(), Value::Integer(3)), Value::Null);
    assert_eq!(eval_index(array, Value::Integer(-1)), Value::Null);
}

#[test]
fn test_hash_indexing() {
    let mut pairs = rustc_hash::FxHashMap::default();
    pairs.insert(
        HashKey::Str("a".into()),
        HashPair {
            key: Value::Str("a".into()),
            value: Value::Integer(1),
        },
    );
    let hash = Value::Hash(Rc::new(pairs));
    assert_eq!(
        eval_index(hash.clone(), Value::Str("a".into())),
        Value::Integer(1)
    );
    assert_eq!(eval_index(hash.clone(), Value::Str("b".into())), Value::Null);
    assert_eq!(
        eval_index(hash.clone(), Value::Float(1.5)),
        error("unusable as hash key: FLOAT")
    );
    assert_eq!(
        eval_index(hash, Value::Array(Rc::new(vec![]))),
        error("unusable as hash key: ARRAY")
    );
}

#[test]
fn test_index_on_unindexable_values() {
    assert_eq!(
        eval_index(Value::Integer(5), Value::Integer(0)),
        error("index operator not supported: INTEGER")
    );
    assert_eq!(
        eval_index(
            Value::Array(Rc::new(vec![])),
            Value::Str("a".into())
        ),
        error("index operator not supported: ARRAY")
    );
}
