//! Unified error handling for the client layer.
//!
//! Every fallible operation returns `Result<T, StoreError>`. Errors are
//! logged once at the operation boundary and surfaced to the caller; nothing
//! here retries or panics. Transient and permanent network failures are not
//! distinguished.

use thiserror::Error;

/// Errors that can occur when talking to the store API or the local
/// session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level HTTP failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status. The message is the
    /// server-supplied `message` field when the body carries one.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected before any network call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local session store read/write failure.
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = StoreError::Validation("username and password are required".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: username and password are required"
        );
    }

    #[test]
    fn test_api_error_carries_server_message() {
        let err = StoreError::Api {
            status: 401,
            message: "username or password is incorrect".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 401): username or password is incorrect"
        );
    }

    #[test]
    fn test_persistence_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Persistence(_)));
    }
}
