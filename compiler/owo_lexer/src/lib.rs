//! Lexer for OwO.
//!
//! A byte cursor with one byte of lookahead, fusing the multi-character
//! operators (`==`, `!=`, `<=`, `>=`, `++`, `&&`, `~>`, `:=:`) as it goes.
//! The lexer never fails: unplaceable input becomes `Illegal` tokens and
//! the decision of what to do about them belongs to the parser. Past the
//! end of input it hands out `Eof` forever.

mod keywords;


use memchr::memchr;
use owo_ir::{Token, TokenKind};

pub struct Lexer<'src> {
    input: &'src str,
    /// Byte offset of `ch`.
    position: usize,
    /// Byte offset one past `ch`.
    read_position: usize,
    /// Current byte, `0` once the input is exhausted.
    ch: u8,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::EqEq, "==")
                } else {
                    // `=` is not an operator in OwO; binding goes through `:=:`
                    Token::new(TokenKind::Illegal, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'<' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::LtEq, "<=")
                } else {
                    Token::new(TokenKind::Lt, "<")
                }
            }
            b'>' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::GtEq, ">=")
                } else {
                    Token::new(TokenKind::Gt, ">")
                }
            }
            b'+' => {
                if self.peek_char() == b'+' {
                    self.read_char();
                    Token::new(TokenKind::PlusPlus, "++")
                } else {
                    Token::new(TokenKind::Plus, "+")
                }
            }
            b'&' => {
                if self.peek_char() == b'&' {
                    self.read_char();
                    Token::new(TokenKind::AmpAmp, "&&")
                } else {
                    Token::new(TokenKind::Illegal, "&")
                }
            }
            b'~' => {
                if self.peek_char() == b'>' {
                    self.read_char();
                    Token::new(TokenKind::TildeArrow, "~>")
                } else {
                    Token::new(TokenKind::Illegal, "~")
                }
            }
            b':' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    if self.peek_char() == b':' {
                        self.read_char();
                        Token::new(TokenKind::Assign, ":=:")
                    } else {
                        // `:=` without the closing colon; the stray `=` is
                        // the offending character
                        Token::new(TokenKind::Illegal, "=")
                    }
                } else {
                    Token::new(TokenKind::Colon, ":")
                }
            }
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Star, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'^' => Token::new(TokenKind::Caret, "^"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::LParen, "("),
            b')' => Token::new(TokenKind::RParen, ")"),
            b'{' => Token::new(TokenKind::LBrace, "{"),
            b'}' => Token::new(TokenKind::RBrace, "}"),
            b'[' => Token::new(TokenKind::LBracket, "["),
            b']' => Token::new(TokenKind::RBracket, "]"),
            b'"' => Token::new(TokenKind::Str, self.read_string()),
            // interior NUL bytes fall through to the illegal path; only
            // the end-of-input sentinel is Eof
            0 if self.position >= self.input.len() => Token::eof(),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                let kind = keywords::lookup(literal).unwrap_or(TokenKind::Ident);
                return Token::new(kind, literal);
            }
            ch if ch.is_ascii_digit() => {
                let (kind, literal) = self.read_number();
                return Token::new(kind, literal);
            }
            _ => return self.read_illegal_char(),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.ch = match self.input.as_bytes().get(self.read_position) {
            Some(&byte) => byte,
            None => 0,
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        match self.input.as_bytes().get(self.read_position) {
            Some(&byte) => byte,
            None => 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Reads the contents of a string literal, cursor sitting on the
    /// opening quote. No escape sequences; an unterminated string runs to
    /// the end of input. Leaves the cursor on the closing quote (or at
    /// end of input) for the shared advance in `next_token`.
    fn read_string(&mut self) -> &'src str {
        let start = self.read_position.min(self.input.len());
        match memchr(b'"', &self.input.as_bytes()[start..]) {
            Some(offset) => {
                let end = start + offset;
                self.position = end;
                self.read_position = end + 1;
                self.ch = b'"';
                &self.input[start..end]
            }
            None => {
                let end = self.input.len();
                self.position = end;
                self.read_position = end + 1;
                self.ch = 0;
                &self.input[start..end]
            }
        }
    }

    fn read_identifier(&mut self) -> &'src str {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        &self.input[start..self.position]
    }

    /// Reads a run of digits and dots. Any dot in the run makes it a
    /// `Float` token; malformed spellings like `1.2.3` are caught by the
    /// parser's numeric conversion, not here.
    fn read_number(&mut self) -> (TokenKind, &'src str) {
        let start = self.position;
        let mut kind = TokenKind::Int;
        while self.ch.is_ascii_digit() || self.ch == b'.' {
            if self.ch == b'.' {
                kind = TokenKind::Float;
            }
            self.read_char();
        }
        (kind, &self.input[start..self.position])
    }

    /// Emits an `Illegal` token covering one full character, so the
    /// literal stays valid text even for multi-byte input.
    fn read_illegal_char(&mut self) -> Token {
        let rest = &self.input[self.position..];
        let Some(ch) = rest.chars().next() else {
            self.read_char();
            return Token::new(TokenKind::Illegal, "");
        };
        let width = ch.len_utf8();
        let token = Token::new(TokenKind::Illegal, &rest[..width]);
        for _ in 0..width {
            self.read_char();
        }
        token
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
