//! Operator enums shared by the parser and the evaluator.

use std::fmt;

/// Prefix (unary) operators.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrefixOp {
    /// `!x`
    Bang,
    /// `-x`
    Minus,
}

impl PrefixOp {
    pub fn glyph(self) -> &'static str {
        match self {
            PrefixOp::Bang => "!",
            PrefixOp::Minus => "-",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Infix (binary) operators.
///
/// `PlusPlus` doubles as the increment sugar: the parser rewrites `i++`
/// into a reassignment whose value is a `++` node with no right operand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InfixOp {
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Caret,    // ^
    PlusPlus, // ++
    Lt,       // <
    Gt,       // >
    LtEq,     // <=
    GtEq,     // >=
    EqEq,     // ==
    NotEq,    // !=
}

impl InfixOp {
    pub fn glyph(self) -> &'static str {
        match self {
            InfixOp::Plus => "+",
            InfixOp::Minus => "-",
            InfixOp::Star => "*",
            InfixOp::Slash => "/",
            InfixOp::Caret => "^",
            InfixOp::PlusPlus => "++",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::LtEq => "<=",
            InfixOp::GtEq => ">=",
            InfixOp::EqEq => "==",
            InfixOp::NotEq => "!=",
        }
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
