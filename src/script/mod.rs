//! Batch checking module
//!
//! Checks expression files line by line without the interactive loop.

pub mod runner;

pub use runner::{ScriptResult, ScriptRunner};
