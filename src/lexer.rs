//! Lexical analysis for MiniLang.
//!
//! This module tokenizes MiniLang source text into a stream of tokens
//! for the parser.
//!
//! # Scanning rules
//!
//! * Whitespace (space, tab, carriage return, newline) is skipped;
//!   newlines advance the line counter and reset the column to 1.
//! * `//` begins a line comment, consumed through but not including
//!   the next newline.
//! * Two-char operators are matched greedily (`!=`, `==`, `<=`, `>=`);
//!   otherwise the one-char form (`!`, `=`, `<`, `>`) is emitted.
//! * A string literal is the raw inner slice between two `"`,
//!   including any newlines — no escape sequences are interpreted.
//! * A number literal is digits, optionally followed by a single `.`
//!   and more digits; the decoded value is a `Float` iff the lexeme
//!   contains `.`, otherwise an `Int`. No sign, no exponent, no hex.
//! * An identifier is a leading letter/underscore followed by any
//!   number of letters, digits, or underscores; keyword lookup is
//!   case-sensitive and exact.
//!
//! # Examples
//!
//! ```
//! use minilang::lexer::Lexer;
//! use minilang::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x = 1;");
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # See Also
//!
//! * [`crate::parser`] - consumes the token stream produced here
//! * [`crate::error::LexError`] - the error type raised on failure

use crate::error::LexError;
use crate::token::{keyword_kind, Token, TokenKind};
use crate::value::Value;

/// A hand-rolled character-at-a-time scanner, tracking byte position
/// plus 1-based line/column.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the entire source into a token list terminated by exactly
    /// one `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_eof() {
                tokens.push(Token::new(TokenKind::Eof, "", None, self.line, self.column));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if !self.skip_comment() {
                break;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    fn skip_comment(&mut self) -> bool {
        if self.current_char() == Some('/') && self.peek_char() == Some('/') {
            while !matches!(self.current_char(), Some('\n') | None) {
                self.advance();
            }
            true
        } else {
            false
        }
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let start_line = self.line;
        let start_column = self.column;

        let c = self
            .advance()
            .expect("caller already checked we are not at eof");

        match c {
            '(' => Ok(self.simple(TokenKind::LeftParen, "(", start_line, start_column)),
            ')' => Ok(self.simple(TokenKind::RightParen, ")", start_line, start_column)),
            '{' => Ok(self.simple(TokenKind::LeftBrace, "{", start_line, start_column)),
            '}' => Ok(self.simple(TokenKind::RightBrace, "}", start_line, start_column)),
            ';' => Ok(self.simple(TokenKind::Semicolon, ";", start_line, start_column)),
            '+' => Ok(self.simple(TokenKind::Plus, "+", start_line, start_column)),
            '-' => Ok(self.simple(TokenKind::Minus, "-", start_line, start_column)),
            '*' => Ok(self.simple(TokenKind::Star, "*", start_line, start_column)),
            '/' => Ok(self.simple(TokenKind::Slash, "/", start_line, start_column)),
            '!' => Ok(self.one_or_two(
                '=',
                TokenKind::Bang,
                TokenKind::BangEqual,
                "!",
                "!=",
                start_line,
                start_column,
            )),
            '=' => Ok(self.one_or_two(
                '=',
                TokenKind::Equal,
                TokenKind::EqualEqual,
                "=",
                "==",
                start_line,
                start_column,
            )),
            '<' => Ok(self.one_or_two(
                '=',
                TokenKind::Less,
                TokenKind::LessEqual,
                "<",
                "<=",
                start_line,
                start_column,
            )),
            '>' => Ok(self.one_or_two(
                '=',
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                ">",
                ">=",
                start_line,
                start_column,
            )),
            '"' => self.read_string(start_line, start_column),
            c if c.is_ascii_digit() => self.read_number(start_line, start_column),
            c if c.is_alphabetic() || c == '_' => {
                Ok(self.read_identifier(c, start_line, start_column))
            }
            other => Err(LexError {
                message: format!("Unexpected character '{other}'"),
                line: start_line,
                column: start_column,
            }),
        }
    }

    fn simple(&self, kind: TokenKind, lexeme: &str, line: usize, column: usize) -> Token {
        Token::new(kind, lexeme, None, line, column)
    }

    /// Greedily matches a two-char operator, falling back to the
    /// one-char form.
    #[allow(clippy::too_many_arguments)]
    fn one_or_two(
        &mut self,
        second: char,
        one: TokenKind,
        two: TokenKind,
        one_lexeme: &str,
        two_lexeme: &str,
        line: usize,
        column: usize,
    ) -> Token {
        if self.consume_if(second) {
            Token::new(two, two_lexeme, None, line, column)
        } else {
            Token::new(one, one_lexeme, None, line, column)
        }
    }

    fn read_string(&mut self, start_line: usize, start_column: usize) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            match self.current_char() {
                Some('"') => {
                    self.advance();
                    let lexeme = format!("\"{value}\"");
                    return Ok(Token::new(
                        TokenKind::String,
                        lexeme,
                        Some(Value::Str(value)),
                        start_line,
                        start_column,
                    ));
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return Err(LexError {
                        message: "Unterminated string".to_string(),
                        line: start_line,
                        column: start_column,
                    });
                }
            }
        }
    }

    fn read_number(&mut self, start_line: usize, start_column: usize) -> Result<Token, LexError> {
        let start_pos = self.pos - 1; // `advance` already consumed the first digit

        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.')
            && matches!(self.peek_char(), Some(c) if c.is_ascii_digit())
        {
            self.advance(); // consume '.'
            while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[start_pos..self.pos];
        let literal = if text.contains('.') {
            Value::Float(text.parse::<f64>().expect("validated float lexeme"))
        } else {
            match text.parse::<i64>() {
                Ok(i) => Value::Int(i),
                // The grammar puts no bound on digit count, so a
                // syntactically valid literal can still overflow i64.
                Err(_) => {
                    return Err(LexError {
                        message: format!("Integer literal '{text}' is too large"),
                        line: start_line,
                        column: start_column,
                    });
                }
            }
        };

        Ok(Token::new(TokenKind::Number, text, Some(literal), start_line, start_column))
    }

    fn read_identifier(&mut self, first: char, start_line: usize, start_column: usize) -> Token {
        let start_pos = self.pos - first.len_utf8();

        while matches!(self.current_char(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[start_pos..self.pos];

        match keyword_kind(text) {
            Some(TokenKind::True) => {
                Token::new(TokenKind::True, text, Some(Value::Bool(true)), start_line, start_column)
            }
            Some(TokenKind::False) => {
                Token::new(TokenKind::False, text, Some(Value::Bool(false)), start_line, start_column)
            }
            Some(TokenKind::Null) => {
                Token::new(TokenKind::Null, text, Some(Value::Nil), start_line, start_column)
            }
            Some(kind) => Token::new(kind, text, None, start_line, start_column),
            None => Token::new(TokenKind::Ident, text, None, start_line, start_column),
        }
    }
}
