//! JSON output formatting
//!
//! One compact object per verdict, so a session's output is JSON Lines.

use crate::engine::executor::CheckReport;
use crate::error::Result;

pub fn format_json(report: &CheckReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
