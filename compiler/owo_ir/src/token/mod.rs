//! Token types for the OwO lexer.

mod kind;

pub use kind::TokenKind;


/// A lexed token: its kind plus the exact source text it covers.
///
/// The literal is what downstream stages work from: identifier names,
/// number spellings (converted by the parser), string contents, and for
/// `Illegal` tokens the offending character.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The `Eof` token carries no text.
    pub fn eof() -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }
}
