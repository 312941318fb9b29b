//! Whole-pipeline tests: source text through lexer, parser, and evaluator.
//!
//! Unit tests for a single layer sit next to that layer; everything here
//! drives real programs end to end and checks the resulting values and
//! error messages.

mod control_tests;
mod operators_tests;

use owo_lexer::Lexer;
use owo_parse::Parser;
use pretty_assertions::assert_eq;

use crate::{Evaluator, SharedEnv, Value};

/// Evaluates one source snippet in a fresh environment.
fn eval_input(input: &str) -> Value {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parse errors for {input:?}: {:?}",
        parser.errors()
    );
    Evaluator::new().eval_program(&program, &SharedEnv::new())
}

/// Asserts that `input` evaluates to exactly the error `message`.
fn assert_error(input: &str, message: &str) {
    match eval_input(input) {
        Value::Error(actual) => assert_eq!(actual, message, "for {input:?}"),
        other => panic!("expected an error for {input:?}, got {other:?}"),
    }
}
