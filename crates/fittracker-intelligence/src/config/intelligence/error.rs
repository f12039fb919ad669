// ABOUTME: Configuration error types for intelligence table validation
// ABOUTME: Defines error variants for invalid ranges, bad weights, and unreadable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Configuration error types for intelligence table validation.

use std::io;

use fittracker_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds out of order (e.g., excellent above good)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to the required total (e.g., not 100%)
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Override document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Override document is not valid JSON for the tables
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
