//! Delimcheck - check that brackets in a line of text are balanced
//!
//! Round `()`, square `[]` and curly `{}` brackets must be closed in the
//! reverse order they were opened, each by its own kind. Every other
//! character is ignored.
//!
//! # Example
//!
//! ```
//! use delimcheck::is_balanced;
//!
//! assert!(is_balanced("(a+b)*[c-d]"));
//! assert!(!is_balanced("{[a+b)]}"));
//! ```

pub mod cli;
pub mod container;
pub mod engine;
pub mod error;
pub mod output;
pub mod repl;
pub mod script;

pub use container::Stack;
pub use engine::{check_expression, is_balanced, is_balanced_chars, CheckReport, CheckSummary, ExecutionContext};
pub use error::{DelimError, Result};
pub use output::{format_output, OutputFormat};
pub use script::{ScriptResult, ScriptRunner};
