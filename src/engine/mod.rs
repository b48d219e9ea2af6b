//! Checking engine: the delimiter table, the balance check and its reports

pub mod balance;
pub mod executor;
pub mod pairs;

pub use balance::{is_balanced, is_balanced_chars};
pub use executor::{check_expression, check_line, CheckReport, CheckSummary, ExecutionContext};
pub use pairs::DELIMITER_PAIRS;
