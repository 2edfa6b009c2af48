//! MiniLang: a small dynamically-typed expression and statement
//! language, lexed, parsed, and tree-walked entirely within this
//! crate — there is no bytecode or native codegen backend.
//!
//! # Pipeline
//!
//! 1. **Lexing** ([`lexer`]) - source text to a token stream
//! 2. **Parsing** ([`parser`]) - tokens to an AST ([`ast`])
//! 3. **Interpretation** ([`interpreter`]) - walks the AST directly
//!
//! [`error::MiniLangError`] unifies the error type raised by any stage
//! behind one `[line L:C] message` display format.

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod token;
pub mod value;

use error::MiniLangError;
use interpreter::Interpreter;
use lexer::Lexer;
use parser::Parser;

/// Lexes, parses, and interprets `source` against `interp`'s existing
/// environment chain. Shared by the file runner and the REPL so both
/// drivers see identical pipeline behavior.
pub fn run(source: &str, interp: &mut Interpreter) -> Result<(), MiniLangError> {
    let tokens = Lexer::new(source).tokenize()?;
    let program = Parser::new(tokens).parse()?;
    interp.interpret(&program)?;
    Ok(())
}
