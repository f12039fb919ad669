// ABOUTME: Configuration module for the calculation engine
// ABOUTME: Re-exports the intelligence tables and their loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

/// Intelligence tables: nutrition, workout, balance, recommendation
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
