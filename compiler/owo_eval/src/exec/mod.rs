//! Execution modules for the OwO interpreter.
//!
//! Evaluation logic organized by category:
//!
//! - `expr`: the [`Evaluator`] itself plus statement and expression dispatch
//! - `call`: function application, builtins, and `~>` chains
//! - `control`: `if`, `while`, and `for`

mod call;
mod control;
mod expr;

pub use expr::Evaluator;
