//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// A field failed its validation rules
    ValidationError,

    /// Identifier is not in the store's id format
    InvalidIdentifier,

    /// Request body is not JSON of the expected shape
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// A required query parameter is absent
    MissingParameter,

    /// Request is well-formed JSON but semantically unusable
    InvalidInput,

    /// Query string could not be decoded
    InvalidQuery,

    /// Request body exceeds the size limit
    PayloadTooLarge,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::MissingParameter.as_str(), "MISSING_PARAMETER");
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for structured logs and metrics.
    ///
    /// - 1000-1999: Client errors
    /// - 5000-5999: Server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidIdentifier => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::MissingParameter => 1005,
            Self::InvalidInput => 1006,
            Self::InvalidQuery => 1007,
            Self::PayloadTooLarge => 1008,
            Self::InternalError => 5000,
        }
    }

    /// Default user-facing message; handlers may override it with specifics.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidIdentifier => "Invalid identifier format",
            Self::InvalidJson => "Invalid request body",
            Self::NotFound => "Resource not found",
            Self::MissingParameter => "A required parameter is missing",
            Self::InvalidInput => "Invalid request data",
            Self::InvalidQuery => "Invalid query string",
            Self::PayloadTooLarge => "Request body is too large",
            Self::InternalError => "Something went wrong",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
