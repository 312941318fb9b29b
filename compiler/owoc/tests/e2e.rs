// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `owoc` driver.
//!
//! Everything here goes through [`owoc::eval_source`] or the REPL, the
//! same entry points the `owo` binary uses, rather than poking at the
//! pipeline crates directly.

use std::io::Cursor;

use owo_eval::{Evaluator, SharedEnv, Value};
use owoc::eval_source;
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Result<Value, Vec<String>> {
    eval_source(source, &Evaluator::new(), &SharedEnv::new())
}

/// Feed `input` to a REPL session and capture everything it writes.
fn repl_transcript(input: &str) -> String {
    let mut reader = Cursor::new(input.as_bytes());
    let mut output = Vec::new();
    owoc::repl::start(&mut reader, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_eval_source_runs_a_program() {
    assert_eq!(
        eval("owo x :=: 10; owo y :=: 20; x + y"),
        Ok(Value::Integer(30))
    );
}

#[test]
fn test_eval_source_counts_with_a_for_loop() {
    let source = "
        owo zap :=: 5;
        for (owo i :=: 0; i <= 10; i++) {
            zap :=: zap + 1
        };
        zap";
    assert_eq!(eval(source), Ok(Value::Integer(16)));
}

#[test]
fn test_eval_source_shares_the_environment() {
    let evaluator = Evaluator::new();
    let env = SharedEnv::new();

    eval_source("fn add(a, b) { a + b }", &evaluator, &env).unwrap();
    assert_eq!(
        eval_source("add(2, 3)", &evaluator, &env),
        Ok(Value::Integer(5))
    );
}

#[test]
fn test_eval_source_reports_parse_errors_in_order() {
    assert_eq!(
        eval("owo x := 5;"),
        Err(vec![
            "expected next token to be ASSIGN, got ILLEGAL instead".into(),
            "no prefix parse function for ILLEGAL found".into(),
        ])
    );
}

#[test]
fn test_runtime_errors_come_back_as_values() {
    assert_eq!(
        eval("5 + true"),
        Ok(Value::Error("type mismatch: INTEGER + BOOLEAN".into()))
    );
}

#[test]
fn test_repl_echoes_results_and_suppresses_null() {
    // the binding line evaluates to Null, so only the sum is echoed
    let transcript = repl_transcript("owo x :=: 2;\nx + 3\n");
    assert_eq!(transcript, ">> >> 5\n>> ");
}

#[test]
fn test_repl_keeps_definitions_across_lines() {
    let transcript = repl_transcript("fn double(x) { x * 2 }\ndouble(21)\n");
    assert_eq!(transcript, ">> fn double(x) { (x * 2) }\n>> 42\n>> ");
}

#[test]
fn test_repl_reports_parse_errors_and_recovers() {
    let transcript = repl_transcript("owo x := 5;\nowo x :=: 5;\nx\n");
    let expected = concat!(
        ">> Woops! We ran into some wrong business here!\n",
        " parser errors:\n",
        "\texpected next token to be ASSIGN, got ILLEGAL instead\n",
        "\tno prefix parse function for ILLEGAL found\n",
        ">> >> 5\n",
        ">> ",
    );
    assert_eq!(transcript, expected);
}

#[test]
fn test_repl_prints_error_values_inline() {
    let transcript = repl_transcript("1 / 0\n");
    assert_eq!(transcript, ">> ERROR: attempted division by zero\n>> ");
}

#[test]
fn test_repl_returns_cleanly_at_end_of_input() {
    assert_eq!(repl_transcript(""), ">> ");
}
