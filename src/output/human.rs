//! Human-readable output formatting

use crate::engine::executor::CheckReport;

pub const CORRECT: &str = "Correct";
pub const INCORRECT: &str = "Incorrect";

pub fn verdict(balanced: bool) -> &'static str {
    if balanced {
        CORRECT
    } else {
        INCORRECT
    }
}

pub fn format_human(report: &CheckReport) -> String {
    match report.line {
        Some(line) => format!("Line {}: {}", line, verdict(report.balanced)),
        None => format!("Result: {}", verdict(report.balanced)),
    }
}
