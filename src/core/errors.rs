/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export StateError from state module
pub use crate::state::StateError;

// Re-export RequestError from request module
pub use crate::request::RequestError;

/// Unified banker error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum BankerError {
    #[error("Malformed input: {0}")]
    #[diagnostic(transparent)]
    State(#[from] StateError),

    #[error("Request rejected: {0}")]
    #[diagnostic(transparent)]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(banker::configuration_error),
        help("Check BANKER_SCAN_ORDER and BANKER_TRACE_JSON.")
    )]
    Configuration(String),

    #[error("Scenario parse error: {0}")]
    #[diagnostic(
        code(banker::parse_error),
        help("Scenario files are JSON objects with available, max, allocation and optional requests.")
    )]
    Parse(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(banker::io_error),
        help("Filesystem operation failed. Check the path and file permissions.")
    )]
    Io(String),
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for BankerError {
    fn from(err: std::io::Error) -> Self {
        BankerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankerError {
    fn from(err: serde_json::Error) -> Self {
        BankerError::Parse(err.to_string())
    }
}

/// Serializable error representation for reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SerializableError {
    /// Create a new serializable error
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a new serializable error with details
    pub fn with_details(
        error_type: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<&RequestError> for SerializableError {
    fn from(err: &RequestError) -> Self {
        let details = serde_json::to_value(err)
            .ok()
            .and_then(|value| value.get("details").map(ToString::to_string));
        match details {
            Some(details) => SerializableError::with_details("request_error", err.to_string(), details),
            None => SerializableError::new("request_error", err.to_string()),
        }
    }
}

impl From<BankerError> for SerializableError {
    fn from(err: BankerError) -> Self {
        let error_type = match &err {
            BankerError::State(_) => "malformed_input",
            BankerError::Request(inner) => return inner.into(),
            BankerError::Configuration(_) => "configuration_error",
            BankerError::Parse(_) => "parse_error",
            BankerError::Io(_) => "io_error",
        };
        SerializableError::new(error_type, err.to_string())
    }
}

/// Result type for banker operations
pub type Result<T> = std::result::Result<T, BankerError>;
