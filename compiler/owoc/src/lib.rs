//! Command-line driver for the OwO interpreter.
//!
//! The library half of the `owo` binary: the source-to-value pipeline,
//! the interactive REPL, and the handlers behind each CLI command.
//! Integration tests link against this crate so they exercise the exact
//! code paths the binary runs.

pub mod commands;
pub mod repl;

mod pipeline;

pub use pipeline::eval_source;
