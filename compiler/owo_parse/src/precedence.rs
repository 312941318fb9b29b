//! Operator precedence table.

use owo_ir::TokenKind;

/// Binding strength, lowest to highest. The derived `Ord` is the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum Precedence {
    Lowest,
    /// `~>`
    Chain,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`, `++`
    Sum,
    /// `*`, `/`
    Product,
    /// `^`
    Power,
    /// `!x`, `-x`
    Prefix,
    /// `f(x)`
    Call,
    /// `xs[i]`
    Index,
}

impl Precedence {
    /// Infix binding strength of a token; `Lowest` for non-operators.
    pub(crate) fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt | TokenKind::LtEq | TokenKind::GtEq => {
                Precedence::LessGreater
            }
            TokenKind::Plus | TokenKind::PlusPlus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash => Precedence::Product,
            TokenKind::Caret => Precedence::Power,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            TokenKind::TildeArrow => Precedence::Chain,
            _ => Precedence::Lowest,
        }
    }
}
