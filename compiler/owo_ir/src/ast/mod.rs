//! AST nodes for OwO.
//!
//! The tree is built once by the parser and never mutated. Rendering via
//! `Display` produces source-shaped text: bindings print as
//! `owo name :=: value;`, operator expressions carry explicit grouping
//! parentheses (`(1 + (2 * 3))`), and blocks print brace-delimited. The
//! evaluator leans on this rendering when it prints function values.

mod expr;
mod operators;

pub use expr::Expr;
pub use operators::{InfixOp, PrefixOp};


use std::fmt;
use std::rc::Rc;

/// A parsed source file: the ordered top-level statements.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A brace-delimited statement list.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

/// An identifier occurrence.
///
/// The name is reference-counted so function values can share parameter
/// lists and bodies with the tree instead of copying them.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ident(pub Rc<str>);

impl Ident {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Ident(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `owo name :=: value`, which is also the init slot of a `for` header.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingStmt {
    pub name: Ident,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `owo name :=: value;`
    Binding(BindingStmt),
    /// `return value;`
    Return(Expr),
    /// A bare expression in statement position.
    Expr(Expr),
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{stmt}")?;
        }
        f.write_str(" }")
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for BindingStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "owo {} :=: {};", self.name, self.value)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Binding(binding) => write!(f, "{binding}"),
            Stmt::Return(value) => write!(f, "return {value};"),
            Stmt::Expr(expr) => write!(f, "{expr}"),
        }
    }
}
