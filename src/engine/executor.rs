//! Check executor

use serde::{Deserialize, Serialize};

use crate::engine::balance::is_balanced;
use crate::output::OutputFormat;

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
    pub verbose: bool,
    /// Suppress banner, prompt and farewell in the command loop
    pub quiet: bool,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
            verbose: false,
            quiet: false,
        }
    }
}

/// Verdict for one checked expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub expression: String,
    pub balanced: bool,
    /// 1-based line number when the expression came from a file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Running totals over a session or batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub checked: usize,
    pub correct: usize,
}

impl CheckSummary {
    pub fn record(&mut self, report: &CheckReport) {
        self.checked += 1;
        if report.balanced {
            self.correct += 1;
        }
    }

    pub fn incorrect(&self) -> usize {
        self.checked.saturating_sub(self.correct)
    }
}

impl std::fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "checked {} expression(s): {} correct, {} incorrect",
            self.checked,
            self.correct,
            self.incorrect()
        )
    }
}

/// Check a single expression
pub fn check_expression(expression: &str) -> CheckReport {
    CheckReport {
        expression: expression.to_string(),
        balanced: is_balanced(expression),
        line: None,
    }
}

/// Check a single expression read from line `line` of some input
pub fn check_line(expression: &str, line: usize) -> CheckReport {
    CheckReport {
        line: Some(line),
        ..check_expression(expression)
    }
}
