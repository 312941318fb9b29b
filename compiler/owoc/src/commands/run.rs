//! The `run` command: parse and evaluate an OwO source file.

use owo_eval::{Evaluator, SharedEnv, Value};

use super::read_file;
use crate::eval_source;

/// Run an OwO source file against a fresh environment.
///
/// Parse errors and a top-level `Error` result go to stderr with a
/// nonzero exit. Any other final value is printed unless it is `Null`.
pub fn run_file(path: &str) {
    let source = read_file(path);
    let evaluator = Evaluator::new();
    let env = SharedEnv::new();

    match eval_source(&source, &evaluator, &env) {
        Err(errors) => {
            eprintln!("{path}: {} parse error(s)", errors.len());
            for message in &errors {
                eprintln!("\t{message}");
            }
            std::process::exit(1);
        }
        Ok(error @ Value::Error(_)) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
        Ok(Value::Null) => {}
        Ok(value) => println!("{value}"),
    }
}
