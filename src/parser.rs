//! Parser for MiniLang.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser implements recursive descent with a fixed precedence
//! ladder for binary operators. It consumes tokens produced by
//! [`crate::lexer`] and builds the AST consumed by
//! [`crate::interpreter`]. There is no error recovery — the first
//! offending token aborts the parse.
//!
//! # Grammar
//!
//! ```text
//! program    := statement* EOF
//! statement  := letStmt | printStmt | ifStmt | whileStmt | block | exprStmt
//! letStmt    := "let" IDENT "=" expression ";"
//! printStmt  := "print" expression ";"
//! ifStmt     := "if" "(" expression ")" statement ("else" statement)?
//! whileStmt  := "while" "(" expression ")" statement
//! block      := "{" statement* "}"
//! exprStmt   := expression ";"
//!
//! expression := assignment
//! assignment := equality ( "=" assignment )?
//! equality   := comparison ( ("==" | "!=") comparison )*
//! comparison := term       ( ("<" | "<=" | ">" | ">=") term )*
//! term       := factor     ( ("+" | "-") factor )*
//! factor     := unary      ( ("*" | "/") unary )*
//! unary      := ("!" | "-") unary | primary
//! primary    := NUMBER | STRING | "true" | "false" | "null"
//!             | IDENT | "(" expression ")"
//! ```
//!
//! Assignment is right-associative and only valid when the parsed LHS
//! is a `Variable`; every other LHS is a `ParseError` anchored at the
//! `=` token. All binary levels are left-associative. `else` binds to
//! the nearest preceding `if` by eager consumption.
//!
//! # See Also
//!
//! * [`crate::lexer`] - produces the token stream consumed by the parser
//! * [`crate::ast`] - defines the AST types produced by the parser
//! * [`crate::interpreter`] - consumes the AST to evaluate the program

use crate::ast::{Expr, Program, Stmt};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// A recursive-descent parser for MiniLang.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The lexer always produces at
    /// least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream into a [`Program`].
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();

        while !self.is_eof() {
            stmts.push(self.statement()?);
        }

        Ok(Program { stmts })
    }

    // ---------- token-stream helpers ----------

    fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn previous(&self) -> &Token {
        let idx = self.pos.saturating_sub(1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn is_eof(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_eof() && self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        if !self.is_eof() {
            self.pos += 1;
        }
        self.previous().clone()
    }

    /// Advances past `kind` if it matches the current token.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let t = self.current();
            Err(ParseError {
                message: message.to_string(),
                line: t.line,
                column: t.column,
            })
        }
    }

    // ---------- statements ----------

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(TokenKind::Let) {
            return self.let_stmt();
        }
        if self.matches(TokenKind::Print) {
            let expr = self.expression()?;
            self.expect(TokenKind::Semicolon, "Expected ';' after value.")?;
            return Ok(Stmt::Print(expr));
        }
        if self.matches(TokenKind::If) {
            return self.if_stmt();
        }
        if self.matches(TokenKind::While) {
            return self.while_stmt();
        }
        if self.matches(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(self.block()?));
        }

        let expr = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Stmt::Expr(expr))
    }

    fn let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Ident, "Expected variable name.")?;
        self.expect(TokenKind::Equal, "Expected '=' after name.")?;
        let init = self.expression()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after let.")?;
        Ok(Stmt::Let(name, init))
    }

    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LeftParen, "Expected '(' after 'if'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expected ')' after condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.matches(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If(condition, then_branch, else_branch))
    }

    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LeftParen, "Expected '(' after 'while'.")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RightParen, "Expected ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While(condition, body))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_eof() {
            stmts.push(self.statement()?);
        }

        self.expect(TokenKind::RightBrace, "Expected '}' after block.")?;
        Ok(stmts)
    }

    // ---------- expressions ----------

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.equality()?;

        if self.matches(TokenKind::Equal) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(name) = expr {
                return Ok(Expr::Assign(name, Box::new(value)));
            }

            return Err(ParseError {
                message: "Invalid assignment target".to_string(),
                line: equals.line,
                column: equals.column,
            });
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc_binary(Self::comparison, &[TokenKind::EqualEqual, TokenKind::BangEqual])
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc_binary(
            Self::term,
            &[
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
            ],
        )
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc_binary(Self::factor, &[TokenKind::Plus, TokenKind::Minus])
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.left_assoc_binary(Self::unary, &[TokenKind::Star, TokenKind::Slash])
    }

    /// Parses a left-associative chain: `next (op next)*`.
    fn left_assoc_binary(
        &mut self,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
        ops: &[TokenKind],
    ) -> Result<Expr, ParseError> {
        let mut expr = next(self)?;

        while ops.iter().any(|op| self.check(*op)) {
            let operator = self.advance();
            let right = next(self)?;
            expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Bang) || self.check(TokenKind::Minus) {
            let operator = self.advance();
            let right = self.unary()?;
            return Ok(Expr::Unary(operator, Box::new(right)));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => {
                self.advance();
                Ok(Expr::Literal(
                    token.literal.expect("literal token carries a pre-decoded value"),
                ))
            }
            TokenKind::Ident => {
                self.advance();
                Ok(Expr::Variable(token))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.expect(TokenKind::RightParen, "Expected ')' after expression.")?;
                Ok(Expr::Grouping(Box::new(expr)))
            }
            _ => Err(ParseError {
                message: "Expected expression.".to_string(),
                line: token.line,
                column: token.column,
            }),
        }
    }
}
