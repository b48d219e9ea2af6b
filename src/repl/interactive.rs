//! Interactive command loop with line editing and history

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::{CheckSummary, ExecutionContext};
use crate::error::{DelimError, Result};
use crate::repl::session::{Session, PROMPT};

pub fn run_repl(ctx: &ExecutionContext) -> Result<CheckSummary> {
    let mut rl = DefaultEditor::new().map_err(|e| DelimError::ReadlineError(e.to_string()))?;

    let mut session = Session::new(ctx);
    let mut stdout = io::stdout();
    session.write_banner(&mut stdout)?;

    let prompt = if session.shows_chrome() { PROMPT } else { "" };

    loop {
        if session.shows_chrome() {
            writeln!(stdout)?;
            stdout.flush()?;
        }

        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if !session.handle_line(&line, &mut stdout)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - discard the current line
                writeln!(stdout, "^C")?;
                continue;
            }
            Err(ReadlineError::Eof) => {
                if ctx.verbose {
                    eprintln!("end of input");
                }
                break;
            }
            Err(err) => {
                return Err(DelimError::ReadlineError(err.to_string()));
            }
        }
    }

    session.write_farewell(&mut stdout)?;
    Ok(session.finish())
}
