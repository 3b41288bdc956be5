//! Error types for md2slack.

use std::io;
use thiserror::Error;

/// Result type alias for md2slack operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An inline node with no rich text counterpart reached a paragraph
    /// while the unsupported-inline policy is `error`.
    #[error("Unexpected child type: {0}")]
    UnsupportedInline(&'static str),

    /// I/O error when reading input or config, or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML or has wrongly typed values.
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Error serializing blocks to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
