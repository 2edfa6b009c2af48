//! The error taxonomy shared by the lexer, parser, and interpreter.
//!
//! All three leaf error kinds carry a source location and share the
//! `[line L:C] message` display format, so a single `MiniLangError`
//! catch at the driver boundary is enough to report any failure from
//! any pipeline stage uniformly.

use std::fmt;

/// Raised by the lexer on an unrecognized character or unterminated
/// string literal.
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Raised by the parser on an unexpected token, a missing terminator,
/// or an invalid assignment target.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Raised by the interpreter on an undefined variable, a bad operand
/// type, or division by zero.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}:{}] {}", self.line, self.column, self.message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}:{}] {}", self.line, self.column, self.message)
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}:{}] {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for LexError {}
impl std::error::Error for ParseError {}
impl std::error::Error for RuntimeError {}

/// A single unified error type for the whole MiniLang pipeline, so
/// the file runner and the REPL driver can catch one type regardless
/// of which stage failed.
#[derive(Debug, Clone)]
pub enum MiniLangError {
    Lex(LexError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl fmt::Display for MiniLangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiniLangError::Lex(e) => write!(f, "{e}"),
            MiniLangError::Parse(e) => write!(f, "{e}"),
            MiniLangError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MiniLangError {}

impl From<LexError> for MiniLangError {
    fn from(e: LexError) -> Self {
        MiniLangError::Lex(e)
    }
}

impl From<ParseError> for MiniLangError {
    fn from(e: ParseError) -> Self {
        MiniLangError::Parse(e)
    }
}

impl From<RuntimeError> for MiniLangError {
    fn from(e: RuntimeError) -> Self {
        MiniLangError::Runtime(e)
    }
}
