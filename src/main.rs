//! The MiniLang command-line driver.
//!
//! Run with no arguments to start an interactive REPL, or with a
//! single file path to run that script once.
//!
//! # Usage
//!
//! ```text
//! minilang            # start the REPL
//! minilang script.ml  # run a script file
//! ```
//!
//! # Architecture
//!
//! MiniLang is tree-walked, not compiled:
//!
//! 1. **Lexing** ([`minilang::lexer`]) - converts source text into tokens
//! 2. **Parsing** ([`minilang::parser`]) - builds an AST from tokens
//! 3. **Interpretation** ([`minilang::interpreter`]) - walks the AST directly
//!
//! # Error Reporting
//!
//! Errors from any stage are unified under
//! [`minilang::error::MiniLangError`] and printed in a single
//! `[line L:C] message` format.

use clap::Parser;
use minilang::interpreter::Interpreter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line interface for the MiniLang interpreter.
#[derive(Parser)]
#[command(name = "minilang")]
#[command(about = "A tiny dynamically-typed scripting language", long_about = None)]
struct Cli {
    /// Script to run. Omit to start an interactive REPL.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.file {
        Some(path) => run_file(&path),
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            match minilang::repl::run(stdin.lock(), stdout.lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Reads, lexes, parses, and interprets a single script file.
fn run_file(path: &std::path::Path) -> ExitCode {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut interp = Interpreter::new();
    match minilang::run(&source, &mut interp) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
