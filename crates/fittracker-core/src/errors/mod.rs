// ABOUTME: Unified error types and error codes for the FitTracker workspace
// ABOUTME: AppError, ErrorCode, AppResult and the serializable ErrorResponse view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! calculation engine fails with [`ErrorCode::InvalidArgument`] for unknown
//! lookup keys, [`ErrorCode::ValueOutOfRange`] for impossible measurements and
//! [`ErrorCode::DegenerateInput`] for divisions that would yield `NaN` or
//! infinity. The remaining codes belong to configuration loading and the
//! data-source seam.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Unknown enum value or malformed argument passed to a lookup
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument = 3000,
    /// Inputs that would divide by zero
    #[serde(rename = "DEGENERATE_INPUT")]
    DegenerateInput = 3001,
    /// Numeric input outside its physical range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3002,

    // Resource Management (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// JSON (de)serialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "The provided argument is not recognised",
            Self::DegenerateInput => "The inputs make this calculation undefined",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the caller supplied the bad input (as opposed to the system)
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument
                | Self::DegenerateInput
                | Self::ValueOutOfRange
                | Self::ResourceNotFound
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unknown enum value or lookup key
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Division-by-zero style precondition failure
    pub fn degenerate_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DegenerateInput, message)
    }

    /// Value outside its acceptable range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error format for CLI and API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Inner payload of [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Value::is_null", default)]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caller_error_classification() {
        assert!(ErrorCode::InvalidArgument.is_caller_error());
        assert!(ErrorCode::DegenerateInput.is_caller_error());
        assert!(!ErrorCode::ConfigInvalid.is_caller_error());
        assert!(ErrorCode::ResourceNotFound.is_caller_error());
        assert!(!ErrorCode::SerializationError.is_caller_error());
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::degenerate_input("start weight equals target weight");
        let rendered = error.to_string();
        assert!(rendered.starts_with("The inputs make this calculation undefined"));
        assert!(rendered.ends_with("start weight equals target weight"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_argument("unknown cardio type 'swim'")
            .with_details(json!({ "value": "swim" }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_ARGUMENT"));
        assert!(json.contains("swim"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error = AppError::from(parse.unwrap_err());
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
