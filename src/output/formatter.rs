//! Output formatting

use crate::engine::executor::CheckReport;
use crate::error::Result;
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_output(report: &CheckReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(report)),
        OutputFormat::Json => format_json(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::check_expression;

    #[test]
    fn test_format_output_dispatch() {
        let report = check_expression("[]");
        assert_eq!(
            format_output(&report, &OutputFormat::Human).unwrap(),
            "Result: Correct"
        );
        assert!(format_output(&report, &OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}
