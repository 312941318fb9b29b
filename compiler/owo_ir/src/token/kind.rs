//! Token kinds for OwO.

use std::fmt;

/// Token kinds for OwO.
///
/// Two-character operators are fused by the lexer (`==`, `!=`, `<=`, `>=`,
/// `++`, `&&`, `~>`), as is the three-character binding operator `:=:`.
/// Anything the lexer cannot place becomes `Illegal`, with the offending
/// text preserved as the token's literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Literals (text carried in Token::literal)
    Ident,
    Int,
    Float,
    Str,

    // Operators
    Assign,     // :=:
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Star,       // *
    Slash,      // /
    Caret,      // ^
    PlusPlus,   // ++
    TildeArrow, // ~>

    Lt,     // <
    Gt,     // >
    LtEq,   // <=
    GtEq,   // >=
    EqEq,   // ==
    NotEq,  // !=
    AmpAmp, // &&

    // Punctuation
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]

    // Keywords
    Fn,
    Owo,
    True,
    False,
    If,
    Else,
    Return,
    While,
    For,
}

impl TokenKind {
    /// Display name, as it appears inside parser diagnostics.
    ///
    /// Word-like kinds use upper-case names (`IDENT`, `ASSIGN`, `OwO`);
    /// operators and punctuation display as their glyphs.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Caret => "^",
            TokenKind::PlusPlus => "++",
            TokenKind::TildeArrow => "~>",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::AmpAmp => "&&",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Fn => "FN",
            TokenKind::Owo => "OwO",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
