//! Pipeline tests for statements, conditionals, and loops.

use pretty_assertions::assert_eq;

use super::eval_input;
use crate::Value;

// === Literals and simple expressions ===

#[test]
fn test_literal_expressions() {
    assert_eq!(eval_input("5"), Value::Integer(5));
    assert_eq!(eval_input("5.25"), Value::Float(5.25));
    assert_eq!(eval_input("\"hello world\""), Value::Str("hello world".into()));
    assert_eq!(eval_input("true"), Value::Boolean(true));
    assert_eq!(eval_input("false"), Value::Boolean(false));
}

#[test]
fn test_expression_statements() {
    assert_eq!(eval_input("5 + 5 + 5 + 5 - 10"), Value::Integer(10));
    assert_eq!(eval_input("2 * (5 + 10)"), Value::Integer(30));
    assert_eq!(eval_input("!true"), Value::Boolean(false));
    assert_eq!(eval_input("!!5"), Value::Boolean(true));
    assert_eq!(eval_input("3 + 4 * 2"), Value::Integer(11));
    assert_eq!(eval_input("2 ^ 3 ^ 2"), Value::Integer(64));
}

// === Bindings ===

#[test]
fn test_binding_statements() {
    assert_eq!(eval_input("owo a :=: 5; a"), Value::Integer(5));
    assert_eq!(eval_input("owo a :=: 5 * 5; a"), Value::Integer(25));
    assert_eq!(eval_input("owo a :=: 5; owo b :=: a; b"), Value::Integer(5));
    assert_eq!(
        eval_input("owo a :=: 5; owo b :=: a; owo c :=: a + b + 5; c"),
        Value::Integer(15)
    );
}

#[test]
fn test_binding_statement_yields_null() {
    assert_eq!(eval_input("owo a :=: 5"), Value::Null);
}

#[test]
fn test_reassignment() {
    assert_eq!(eval_input("owo a :=: 1; a :=: 2; a"), Value::Integer(2));
    // the reassignment expression itself yields null
    assert_eq!(eval_input("owo a :=: 1; a :=: 2"), Value::Null);
}

#[test]
fn test_increment_sugar() {
    assert_eq!(eval_input("owo i :=: 0; i++; i"), Value::Integer(1));
    assert_eq!(eval_input("owo i :=: 0; i++; i++; i"), Value::Integer(2));
}

// === Conditionals ===

#[test]
fn test_if_expressions() {
    assert_eq!(eval_input("if true { 10 }"), Value::Integer(10));
    assert_eq!(eval_input("if false { 10 }"), Value::Null);
    assert_eq!(eval_input("if 1 < 2 { 10 } else { 20 }"), Value::Integer(10));
    assert_eq!(eval_input("if 1 > 2 { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval_input("if (1 < 2) { 10 }"), Value::Integer(10));
}

#[test]
fn test_if_conditions_use_truthiness() {
    // only null and false are falsy; there is no null literal, so the
    // falsy-null path goes through a valueless if
    assert_eq!(eval_input("if 0 { 1 } else { 2 }"), Value::Integer(1));
    assert_eq!(eval_input("if \"\" { 1 } else { 2 }"), Value::Integer(1));
    assert_eq!(eval_input("if !5 { 1 } else { 2 }"), Value::Integer(2));
    assert_eq!(
        eval_input("if if false { 1 } { 1 } else { 2 }"),
        Value::Integer(2)
    );
}

// === Return ===

#[test]
fn test_return_statements() {
    assert_eq!(eval_input("return 10;"), Value::Integer(10));
    assert_eq!(eval_input("return 10; 9;"), Value::Integer(10));
    assert_eq!(eval_input("return 2 * 5; 9;"), Value::Integer(10));
    assert_eq!(eval_input("9; return 2 * 5; 9;"), Value::Integer(10));
}

#[test]
fn test_return_unwinds_nested_blocks() {
    let input = "
        if 10 > 1 {
            if 10 > 1 {
                return 10;
            }
            return 1;
        }";
    assert_eq!(eval_input(input), Value::Integer(10));
}

// === While loops ===

#[test]
fn test_while_loops() {
    assert_eq!(
        eval_input("owo i :=: 0; while (i < 5) { i :=: i + 1; } i"),
        Value::Integer(5)
    );
    // the loop yields its last body value
    assert_eq!(
        eval_input("owo i :=: 0; while (i < 3) { i :=: i + 1; i }"),
        Value::Integer(3)
    );
    assert_eq!(eval_input("while (false) { 1 }"), Value::Null);
}

#[test]
fn test_return_escapes_while() {
    let input = "
        fn f() {
            while (true) {
                return 7;
            }
        }
        f()";
    assert_eq!(eval_input(input), Value::Integer(7));
}

// === For loops ===

#[test]
fn test_for_loops() {
    assert_eq!(
        eval_input("for (owo i :=: 0; i <= 3; i++) { i }"),
        Value::Integer(3)
    );
    assert_eq!(
        eval_input("for (owo i :=: 10; i >= 0; i :=: i - 1) { i }"),
        Value::Integer(0)
    );
    assert_eq!(
        eval_input("for (owo i :=: 0; i < 0; i++) { i }"),
        Value::Null
    );
}

#[test]
fn test_for_shares_the_enclosing_scope() {
    // the induction variable stays visible after the loop
    assert_eq!(
        eval_input("for (owo i :=: 0; i < 3; i++) { i } i"),
        Value::Integer(3)
    );
}

#[test]
fn test_for_counts_against_outer_binding() {
    let input = "
        owo zap :=: 5;
        for (owo i :=: 0; i <= 10; i++) {
            zap :=: zap + 1
        }
        zap";
    assert_eq!(eval_input(input), Value::Integer(16));
}

#[test]
fn test_return_escapes_for() {
    let input = "
        fn f() {
            for (owo i :=: 0; i < 10; i++) {
                if i == 3 {
                    return i;
                }
            }
        }
        f()";
    assert_eq!(eval_input(input), Value::Integer(3));
}
