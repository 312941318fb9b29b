#![deny(clippy::arithmetic_side_effects)]
//! Tree-walking evaluator for OwO programs.
//!
//! Runtime failures are first-class [`Value::Error`] results that
//! short-circuit evaluation the way an early `return` does; nothing in
//! this crate panics on a bad program.
//!
//! # Architecture
//!
//! - [`Value`]: the runtime value enum, with reference-counted aggregates
//! - [`SharedEnv`]: the scope chain that closures capture and mutate
//! - [`Builtins`]: the explicit registry of builtin functions
//! - [`eval_infix`] / [`eval_prefix`] / [`eval_index`]: enum-dispatched
//!   operator evaluation over closed type sets
//! - [`Evaluator`]: the recursive walker tying the pieces together
//!
//! All integer arithmetic goes through checked operations; overflow is an
//! error value, never a wrap or a panic.

mod builtins;
mod environment;
pub mod errors;
mod exec;
mod operators;
mod value;

#[cfg(test)]
mod tests;

pub use builtins::Builtins;
pub use environment::{Environment, SharedEnv};
pub use exec::Evaluator;
pub use operators::{eval_index, eval_infix, eval_prefix};
pub use value::{Builtin, BuiltinFn, FunctionValue, HashKey, HashPair, Value};
