//! Keyword resolution for identifier runs.
//!
//! The lookup uses the identifier's length as a first-pass filter (OwO
//! keywords range from 2-6 chars), then matches against the keywords of
//! that length. Everything else stays an identifier.

use owo_ir::TokenKind;

/// Look up a keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a keyword, `None`
/// if it's a regular identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "owo" => Some(TokenKind::Owo),
            "for" => Some(TokenKind::For),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "else" => Some(TokenKind::Else),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        _ => None,
    }
}
