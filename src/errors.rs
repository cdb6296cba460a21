/*!
 * Error types for the langlist crate.
 *
 * Structural problems with a supported-languages response are reported
 * through `ResponseError`. Individual list entries that fail to parse are
 * never errors; they are dropped. `AppError` is what the command line
 * path returns.
 */

use thiserror::Error;

/// Errors that can occur while parsing a supported-languages response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The document does not have the `{"languages": [...]}` shape
    #[error("Malformed supported-languages response: {0}")]
    MalformedResponse(String),

    /// The raw payload could not be read as JSON at all
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from response parsing
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidJson(error.to_string())
    }
}
