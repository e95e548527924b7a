//! Error types for the file collaborators.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading resource collections
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Expected a top-level JSON array in {path}, got {kind}")]
    NotAnArray { path: String, kind: &'static str },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
