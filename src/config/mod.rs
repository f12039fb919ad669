// ABOUTME: Configuration module for the FitTracker facade
// ABOUTME: Environment-driven application settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

/// Environment configuration and intelligence table loading
pub mod environment;

pub use environment::{AppConfig, Environment};
