//! Command loop session
//!
//! A [`Session`] owns the per-loop totals and knows how to answer one line of
//! input. It writes to any [`Write`], so the same logic drives the plain
//! stdin loop, the line editor and the tests.

use std::io::{BufRead, Write};

use crate::engine::{check_expression, CheckSummary, ExecutionContext};
use crate::error::Result;
use crate::output::{format_output, OutputFormat};

/// Typing this word (any case) ends the loop
pub const QUIT_COMMAND: &str = "sair";

pub const BANNER: &str = "\
--- Delimiter Balance Checker ---
Use parentheses (), brackets [] and braces {}.
Type 'sair' to quit.
---------------------------------";

pub const PROMPT: &str = "Enter expression: ";

pub const FAREWELL: &str = "Program finished.";

/// Check if `line` (without its terminator) is the quit command
pub fn is_quit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case(QUIT_COMMAND)
}

/// Strip a trailing `\n` or `\r\n`
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub struct Session<'a> {
    ctx: &'a ExecutionContext,
    summary: CheckSummary,
}

impl<'a> Session<'a> {
    pub fn new(ctx: &'a ExecutionContext) -> Self {
        Self {
            ctx,
            summary: CheckSummary::default(),
        }
    }

    pub fn summary(&self) -> CheckSummary {
        self.summary
    }

    /// Banner, prompt and farewell only appear in human, non-quiet output
    pub fn shows_chrome(&self) -> bool {
        !self.ctx.quiet && self.ctx.output_format == OutputFormat::Human
    }

    pub fn write_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.shows_chrome() {
            writeln!(out, "{}", BANNER)?;
        }
        Ok(())
    }

    /// Blank line, then the prompt without a newline
    pub fn write_prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.shows_chrome() {
            write!(out, "\n{}", PROMPT)?;
            out.flush()?;
        }
        Ok(())
    }

    pub fn write_farewell<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.shows_chrome() {
            writeln!(out, "\n{}", FAREWELL)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Answer one line of input. Returns `false` once the user asked to quit.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        if is_quit_command(line) {
            return Ok(false);
        }

        let report = check_expression(line);
        self.summary.record(&report);
        writeln!(out, "{}", format_output(&report, &self.ctx.output_format)?)?;
        Ok(true)
    }

    /// Consume the session, reporting totals when verbose
    pub fn finish(self) -> CheckSummary {
        if self.ctx.verbose {
            eprintln!("{}", self.summary);
        }
        self.summary
    }

    /// Read lines from `input` until the quit command or end of input
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, out: &mut W) -> Result<CheckSummary> {
        self.write_banner(out)?;

        let mut buf = String::new();
        loop {
            self.write_prompt(out)?;

            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                if self.ctx.verbose {
                    eprintln!("end of input");
                }
                break;
            }

            if !self.handle_line(trim_line_ending(&buf), out)? {
                break;
            }
        }

        self.write_farewell(out)?;
        Ok(self.finish())
    }
}
