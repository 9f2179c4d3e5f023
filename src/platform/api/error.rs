//! Error types for the Qovery API client
//!
//! Provides structured error types for all API operations. A missing entity
//! is not an error: lookups return `Ok(None)` instead of `NotFound`.

use thiserror::Error;

/// Errors that can occur when interacting with the Qovery API
#[derive(Debug, Error)]
pub enum PlatformApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse the API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// User is not authenticated - needs to run `qovery auth login`
    #[error("Not authenticated - run `qovery auth login` first")]
    Unauthorized,

    /// Requested resource was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// User does not have permission for the requested operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded - please try again later")]
    RateLimited,

    /// Server error
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code (5xx)
        status: u16,
        /// Error message
        message: String,
    },
}

impl PlatformApiError {
    /// Map a non-success HTTP status and its error message to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => PlatformApiError::Unauthorized,
            403 => PlatformApiError::PermissionDenied(message),
            404 => PlatformApiError::NotFound(message),
            429 => PlatformApiError::RateLimited,
            500..=599 => PlatformApiError::ServerError { status, message },
            _ => PlatformApiError::ApiError { status, message },
        }
    }
}

/// Result type alias for Qovery API operations
pub type Result<T> = std::result::Result<T, PlatformApiError>;
