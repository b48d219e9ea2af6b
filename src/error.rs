//! Error types for delimcheck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    ReadlineError(String),

    #[error("{0} expression(s) are not balanced")]
    Unbalanced(usize),
}

pub type Result<T> = std::result::Result<T, DelimError>;
