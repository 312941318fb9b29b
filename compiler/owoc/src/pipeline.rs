//! Source-to-value pipeline shared by the REPL and the `run` command.

use owo_eval::{Evaluator, SharedEnv, Value};
use owo_lexer::Lexer;
use owo_parse::Parser;
use tracing::debug;

/// Parse and evaluate `source` against an existing environment.
///
/// A program that does not parse cleanly is never executed: the parser's
/// diagnostics come back instead, in the order they were recorded.
pub fn eval_source(
    source: &str,
    evaluator: &Evaluator,
    env: &SharedEnv,
) -> Result<Value, Vec<String>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.errors().to_vec());
    }

    debug!(statements = program.statements.len(), "evaluating program");
    Ok(evaluator.eval_program(&program, env))
}
