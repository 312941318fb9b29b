//! Parser for OwO.
//!
//! A Pratt (precedence-climbing) parser over two tokens of lookahead,
//! pulled lazily from the lexer. Parsing never fails outright: handler
//! errors are recorded as ordered string diagnostics and the offending
//! statement is dropped, so one bad statement does not hide the rest. A
//! non-empty [`Parser::errors`] list means the returned tree is incomplete
//! and must not be evaluated.

mod grammar;
mod precedence;


use owo_ir::{Program, Token, TokenKind};
use owo_lexer::Lexer;
use tracing::trace;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    peek: Token,
    errors: Vec<String>,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
        };
        // twice, to fill both current and peek
        parser.bump();
        parser.bump();
        parser
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.bump();
        }
        program
    }

    /// Diagnostics in the order they were recorded.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub(crate) fn bump(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
        trace!(kind = %self.current.kind, literal = %self.current.literal, "bump");
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the peek token if it has the expected kind; records a
    /// diagnostic and leaves the cursor alone otherwise.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.bump();
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    fn peek_error(&mut self, kind: TokenKind) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            kind, self.peek.kind
        ));
    }

    pub(crate) fn no_prefix_error(&mut self, kind: TokenKind) {
        self.errors
            .push(format!("no prefix parse function for {kind} found"));
    }
}
