//! REPL module for the interactive command loop

use std::io::{self, IsTerminal};

use crate::engine::{CheckSummary, ExecutionContext};
use crate::error::Result;

#[cfg(feature = "repl")]
pub mod interactive;
pub mod session;

pub use session::{is_quit_command, Session, QUIT_COMMAND};

/// Run the command loop on stdin and stdout.
///
/// Uses the line editor when it is compiled in, stdin is a terminal and
/// `plain` is not set. Otherwise lines are read straight from stdin.
pub fn run(ctx: &ExecutionContext, plain: bool) -> Result<CheckSummary> {
    if !plain && io::stdin().is_terminal() {
        return run_editor(ctx);
    }
    run_stdin(ctx)
}

/// Run the command loop over plain stdin lines
pub fn run_stdin(ctx: &ExecutionContext) -> Result<CheckSummary> {
    if ctx.verbose {
        eprintln!("reading expressions from stdin");
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(ctx).run(stdin.lock(), &mut stdout)
}

#[cfg(feature = "repl")]
fn run_editor(ctx: &ExecutionContext) -> Result<CheckSummary> {
    interactive::run_repl(ctx)
}

#[cfg(not(feature = "repl"))]
fn run_editor(ctx: &ExecutionContext) -> Result<CheckSummary> {
    run_stdin(ctx)
}
