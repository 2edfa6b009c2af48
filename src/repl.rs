//! The interactive read-eval-print loop.
//!
//! Buffers input lines until brace depth returns to zero before
//! handing the buffer to [`crate::run`], so a multi-line `if`/`while`/
//! block can be typed across several prompts. Depth is tracked by a
//! naive `{`/`}` character count over each raw line — it is not
//! lexer-aware, so a `{` or `}` inside a string literal or a comment
//! still shifts the count. This mirrors the original driver's
//! behavior rather than fixing it: depth is only reset to zero when a
//! run raises an error; after a successful run it is left exactly as
//! counted, so a miscount from a quoted or commented brace carries
//! over into later prompts until an error happens to clear it.

use crate::error::MiniLangError;
use crate::interpreter::Interpreter;
use std::io::{self, BufRead, Write};

const PRIMARY_PROMPT: &str = "ml> ";
const CONTINUATION_PROMPT: &str = "... ";

/// Runs the REPL against stdin/stdout until `exit`, `quit`, or EOF.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "MiniLang REPL. Type 'exit' to quit.")?;

    let mut interp = Interpreter::new();
    let mut buffer = String::new();
    let mut depth: i64 = 0;

    loop {
        write!(output, "{}", if depth == 0 { PRIMARY_PROMPT } else { CONTINUATION_PROMPT })?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 {
            // EOF terminates the session cleanly, matching a Ctrl-D exit.
            break;
        }

        let trimmed_end = line.trim_end_matches(['\n', '\r']);

        if depth == 0 && matches!(trimmed_end.trim(), "exit" | "quit") {
            break;
        }

        buffer.push_str(trimmed_end);
        buffer.push('\n');
        depth += trimmed_end.matches('{').count() as i64 - trimmed_end.matches('}').count() as i64;

        if depth > 0 {
            continue;
        }

        if !buffer.trim().is_empty() {
            if let Err(e) = crate::run(&buffer, &mut interp) {
                report(&mut output, &e)?;
                depth = 0;
            }
        }

        buffer.clear();
    }

    Ok(())
}

/// Errors caught mid-session are printed (not treated as fatal) and
/// the buffer is reset, so one bad statement doesn't end the session.
fn report<W: Write>(output: &mut W, error: &MiniLangError) -> io::Result<()> {
    writeln!(output, "{error}")
}
