//! Error types for service payload handling.

use thiserror::Error;

/// Errors that can occur while reading service payloads or building requests.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered but reported a failure
    #[error("Service error: {message}")]
    Service {
        /// Message supplied by the service
        message: String,
    },

    /// A suggestion request was built from an empty inventory
    #[error("Please enter at least one bead")]
    NoBeads,

    /// Invalid structure or content in caller-supplied data
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Description of the format error
        message: String,
    },
}

impl FormatError {
    /// Create a service error with a message.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Create an invalid format error with a message.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
