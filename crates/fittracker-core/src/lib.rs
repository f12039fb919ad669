// ABOUTME: Core types and constants for the FitTracker calculation platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![deny(unsafe_code)]

//! # FitTracker Core
//!
//! Foundation crate providing shared types and constants for FitTracker.
//! This crate changes infrequently so the calculation engine and the
//! application facade can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Profile, daily log, food, meal, and workout records
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (profile, daily stats, foods, meal and workout entries)
pub mod models;

/// Application constants organized by domain
pub mod constants;
