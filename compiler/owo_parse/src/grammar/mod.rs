//! Statement-level grammar.

mod expr;

use owo_ir::{BindingStmt, Block, Ident, Stmt, TokenKind};
use tracing::debug;

use crate::precedence::Precedence;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        debug!(kind = %self.current.kind, "parse_statement");
        match self.current.kind {
            TokenKind::Owo => self.parse_binding_statement().map(Stmt::Binding),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `owo <name> :=: <value>`, trailing semicolons swallowed. Doubles as
    /// the init slot of a `for` header, which is why it is factored out of
    /// [`Parser::parse_statement`].
    pub(crate) fn parse_binding_statement(&mut self) -> Option<BindingStmt> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Ident::new(self.current.literal.as_str());

        self.expect_peek(TokenKind::Assign)?;
        self.bump();

        let value = self.parse_expression(Precedence::Lowest)?;

        while self.peek_is(TokenKind::Semicolon) {
            self.bump();
        }

        Some(BindingStmt { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Stmt> {
        self.bump();

        let value = self.parse_expression(Precedence::Lowest)?;

        while self.peek_is(TokenKind::Semicolon) {
            self.bump();
        }

        Some(Stmt::Return(value))
    }

    /// A bare expression in statement position, with one optional
    /// terminating semicolon.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.bump();
        }

        Some(Stmt::Expr(expr))
    }

    /// Statements until `}` or end of input, cursor starting on the `{`.
    /// Failed statements are dropped; the block keeps whatever parsed.
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut statements = Vec::new();

        self.bump();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.bump();
        }

        Block { statements }
    }
}
