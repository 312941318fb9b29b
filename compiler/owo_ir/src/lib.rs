//! Core data structures for the OwO interpreter:
//! - Tokens, produced by the lexer
//! - AST nodes (Program, Stmt, Expr), produced by the parser
//!
//! Everything here is plain owned data with no behavior beyond textual
//! rendering; the lexer, parser and evaluator crates all build on it.

pub mod ast;
pub mod token;

pub use ast::{BindingStmt, Block, Expr, Ident, InfixOp, PrefixOp, Program, Stmt};
pub use token::{Token, TokenKind};
