//! Script runner for checking every line of an expression file

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::engine::{check_line, CheckReport, CheckSummary, ExecutionContext};
use crate::error::Result;
use crate::output::format_output;

/// Result of a batch run
#[derive(Debug)]
pub struct ScriptResult {
    /// One report per checked line, in input order
    pub reports: Vec<CheckReport>,
    pub summary: CheckSummary,
}

/// Checks a sequence of lines and prints a verdict for each
pub struct ScriptRunner<'a> {
    exec_ctx: &'a ExecutionContext,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(exec_ctx: &'a ExecutionContext) -> Self {
        Self { exec_ctx }
    }

    /// Load a file and check each of its lines, printing to stdout
    pub fn run_file(&self, path: &Path) -> Result<ScriptResult> {
        if self.exec_ctx.verbose {
            eprintln!("reading expressions from {}", path.display());
        }

        let content = fs::read_to_string(path)?;
        let mut stdout = io::stdout().lock();
        let result = self.run_lines(content.lines(), &mut stdout)?;

        if self.exec_ctx.verbose {
            eprintln!("{}", result.summary);
        }
        Ok(result)
    }

    /// Check each line in order, numbering them from 1
    pub fn run_lines<'l, I, W>(&self, lines: I, out: &mut W) -> Result<ScriptResult>
    where
        I: IntoIterator<Item = &'l str>,
        W: Write,
    {
        let mut reports = Vec::new();
        let mut summary = CheckSummary::default();

        for (i, line) in lines.into_iter().enumerate() {
            let report = check_line(line, i + 1);
            summary.record(&report);
            writeln!(out, "{}", format_output(&report, &self.exec_ctx.output_format)?)?;
            reports.push(report);
        }

        Ok(ScriptResult { reports, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_run_lines_human() {
        let ctx = ExecutionContext::default();
        let runner = ScriptRunner::new(&ctx);
        let mut out = Vec::new();
        let result = runner
            .run_lines(["(a+b)*[c-d]", "[(a+b)", "", "{[a+b)]}"], &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Line 1: Correct\nLine 2: Incorrect\nLine 3: Correct\nLine 4: Incorrect\n"
        );
        assert_eq!(result.summary.checked, 4);
        assert_eq!(result.summary.correct, 2);
        assert_eq!(result.reports[3].line, Some(4));
    }

    #[test]
    fn test_run_lines_does_not_stop_at_quit_word() {
        let ctx = ExecutionContext::default();
        let runner = ScriptRunner::new(&ctx);
        let mut out = Vec::new();
        let result = runner.run_lines("sair\n)(".lines(), &mut out).unwrap();
        assert_eq!(result.summary.checked, 2);
        assert!(result.reports[0].balanced);
        assert!(!result.reports[1].balanced);
    }

    #[test]
    fn test_run_lines_json() {
        let ctx = ExecutionContext {
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let runner = ScriptRunner::new(&ctx);
        let mut out = Vec::new();
        runner.run_lines(["()"], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"expression\":\"()\",\"balanced\":true,\"line\":1}\n"
        );
    }

    #[test]
    fn test_run_file_missing() {
        let ctx = ExecutionContext::default();
        let runner = ScriptRunner::new(&ctx);
        let err = runner
            .run_file(Path::new("/nonexistent/expressions.txt"))
            .unwrap_err();
        assert!(err.to_string().starts_with("IO error"));
    }
}
