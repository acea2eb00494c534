//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! An invalid repartition is not an error: it is reported through
//! [`Validity::Invalid`](crate::model::Validity) on the snapshot.

use thiserror::Error;

/// Lookup of an identifier that is not part of the current inputs.
///
/// Kept distinct from `Ok(0.0)`: zero is a legitimate capacity or size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown node id: {0}")]
    UnknownNode(String),

    #[error("Unknown file id: {0}")]
    UnknownFile(String),
}

/// Errors that can occur while reading node/file/assignment inputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur while loading or checking a layout config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Invalid layout configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
