//! Expression-level grammar: Pratt dispatch plus one handler per form.

use std::rc::Rc;

use owo_ir::{Expr, Ident, InfixOp, PrefixOp, TokenKind};
use tracing::trace;

use crate::precedence::Precedence;
use crate::Parser;

/// Binary operator for an infix token, if it carries one.
///
/// `&&` has no entry here or anywhere else in the grammar: it lexes but
/// does not parse, so using it surfaces as a `no prefix parse function`
/// diagnostic at its right operand position.
fn infix_op(kind: TokenKind) -> Option<InfixOp> {
    match kind {
        TokenKind::Plus => Some(InfixOp::Plus),
        TokenKind::Minus => Some(InfixOp::Minus),
        TokenKind::Star => Some(InfixOp::Star),
        TokenKind::Slash => Some(InfixOp::Slash),
        TokenKind::Caret => Some(InfixOp::Caret),
        TokenKind::PlusPlus => Some(InfixOp::PlusPlus),
        TokenKind::Lt => Some(InfixOp::Lt),
        TokenKind::Gt => Some(InfixOp::Gt),
        TokenKind::LtEq => Some(InfixOp::LtEq),
        TokenKind::GtEq => Some(InfixOp::GtEq),
        TokenKind::EqEq => Some(InfixOp::EqEq),
        TokenKind::NotEq => Some(InfixOp::NotEq),
        _ => None,
    }
}

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> Option<Expr> {
        trace!(kind = %self.current.kind, ?min, "parse_expression");
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && min < Precedence::of(self.peek.kind) {
            left = match self.peek.kind {
                TokenKind::LParen => {
                    self.bump();
                    self.parse_call(left)?
                }
                TokenKind::LBracket => {
                    self.bump();
                    self.parse_index(left)?
                }
                TokenKind::TildeArrow => {
                    self.bump();
                    self.parse_chain(left)?
                }
                kind => match infix_op(kind) {
                    Some(op) => {
                        self.bump();
                        self.parse_infix_expression(op, left)?
                    }
                    None => return Some(left),
                },
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => self.parse_identifier_expr(),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Float => self.parse_float_literal(),
            TokenKind::Str => Some(Expr::Str(self.current.literal.clone())),
            TokenKind::True => Some(Expr::Boolean(true)),
            TokenKind::False => Some(Expr::Boolean(false)),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOp::Bang),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOp::Minus),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Fn => self.parse_function_literal(),
            TokenKind::While => self.parse_while_expression(),
            TokenKind::For => self.parse_for_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.no_prefix_error(kind);
                None
            }
        }
    }

    /// Identifiers own the reassignment sugar: `x :=: value` becomes an
    /// `Assign` node, and `x++` becomes an `Assign` whose value is a `++`
    /// with no right operand.
    fn parse_identifier_expr(&mut self) -> Option<Expr> {
        if self.peek_is(TokenKind::Assign) {
            let name = Ident::new(self.current.literal.as_str());
            self.bump();
            self.bump();
            let value = self.parse_expression(Precedence::Lowest)?;
            return Some(Expr::Assign {
                name,
                value: Box::new(value),
            });
        }

        if self.peek_is(TokenKind::PlusPlus) {
            let name = Ident::new(self.current.literal.as_str());
            self.bump();
            return Some(Expr::Assign {
                name: name.clone(),
                value: Box::new(Expr::Infix {
                    op: InfixOp::PlusPlus,
                    left: Box::new(Expr::Ident(name)),
                    right: None,
                }),
            });
        }

        Some(Expr::Ident(Ident::new(self.current.literal.as_str())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Integer(value)),
            Err(_) => {
                let message = format!("Could not parse {:?} as integer", self.current.literal);
                self.errors.push(message);
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<f64>() {
            Ok(value) => Some(Expr::Float(value)),
            Err(_) => {
                let message = format!("Could not parse {:?} as float", self.current.literal);
                self.errors.push(message);
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, op: PrefixOp) -> Option<Expr> {
        self.bump();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            op,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, op: InfixOp, left: Expr) -> Option<Expr> {
        let precedence = Precedence::of(self.current.kind);
        self.bump();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            op,
            left: Box::new(left),
            right: Some(Box::new(right)),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.bump();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// `if <cond> { ... }` with an optional `else { ... }`. No parentheses
    /// around the condition, unlike `while`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        self.bump();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.bump();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `while ( <cond> ) { ... }`; the parentheses are mandatory.
    fn parse_while_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.bump();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::While {
            condition: Box::new(condition),
            body,
        })
    }

    /// `for ( owo <init>; <cond>; <step> ) { ... }`
    ///
    /// The header is rigid: the init must be an `owo` binding, the
    /// condition and the step must each start with an identifier, and the
    /// step goes through the identifier sugar so `i++` and `i :=: i + 1`
    /// become reassignments. Any deviation is a diagnostic.
    fn parse_for_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.expect_peek(TokenKind::Owo)?;
        let init = self.parse_binding_statement()?;

        self.expect_peek(TokenKind::Ident)?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Semicolon)?;

        self.expect_peek(TokenKind::Ident)?;
        let step = self.parse_identifier_expr()?;

        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::For {
            init: Box::new(init),
            condition: Box::new(condition),
            step: Box::new(step),
            body,
        })
    }

    /// `fn <name> ( <params> ) { ... }`; anonymous functions are rejected.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::Ident)?;
        let name: Rc<str> = self.current.literal.as_str().into();

        self.expect_peek(TokenKind::LParen)?;
        let params = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::Function {
            name,
            params: Rc::new(params),
            body: Rc::new(body),
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Ident>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.bump();
            return Some(params);
        }

        self.expect_peek(TokenKind::Ident)?;
        params.push(Ident::new(self.current.literal.as_str()));

        while self.peek_is(TokenKind::Comma) {
            self.bump();
            self.expect_peek(TokenKind::Ident)?;
            params.push(Ident::new(self.current.literal.as_str()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(params)
    }

    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        self.bump();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        Some(Expr::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// `seed ~> f ~> g`, left-associative, flattened into a single
    /// ordered `Chain` node while parsing.
    fn parse_chain(&mut self, left: Expr) -> Option<Expr> {
        let mut elements = match left {
            Expr::Chain(elements) => elements,
            other => vec![other],
        };
        self.bump();
        elements.push(self.parse_expression(Precedence::Chain)?);
        Some(Expr::Chain(elements))
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::Array(elements))
    }

    /// `{ key: value, ... }` with pairs kept in source order; a trailing
    /// comma is allowed.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.bump();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.bump();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;
        Some(Expr::Hash(pairs))
    }

    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.bump();
            return Some(list);
        }

        self.bump();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.bump();
            self.bump();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(list)
    }
}
