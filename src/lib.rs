// ABOUTME: Main library entry point for the FitTracker calculation service
// ABOUTME: Wires configuration, logging, the data-source seam, and the daily dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![deny(unsafe_code)]

//! # FitTracker
//!
//! Nutrition targets, workout energy estimates, and energy-balance signals
//! for a weight-loss tracking app.
//!
//! ## Architecture
//!
//! - **`fittracker-core`**: Domain records and the unified error type
//! - **`fittracker-intelligence`**: Stateless calculators and their tables
//! - **Data source**: Async store traits the backend implements
//! - **Dashboard**: One-call daily snapshot over the calculators
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fittracker::intelligence::IntelligenceConfig;
//! use fittracker::models::{ActivityLevel, Sex, UserProfile};
//!
//! # fn main() -> fittracker::errors::AppResult<()> {
//! let profile = UserProfile {
//!     id: uuid::Uuid::new_v4(),
//!     name: "Alex".to_owned(),
//!     birth_date: NaiveDate::from_ymd_opt(1982, 1, 15).unwrap_or_default(),
//!     height_cm: 180.0,
//!     current_weight_kg: 102.4,
//!     start_weight_kg: 105.0,
//!     target_weight_kg: 84.0,
//!     activity_level: ActivityLevel::Moderate,
//!     sex: Sex::Male,
//! };
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//! let daily = fittracker::intelligence::calculate_calorie_targets(
//!     &profile,
//!     0.0,
//!     today,
//!     IntelligenceConfig::<true>::global(),
//! )?;
//! println!("target: {} kcal", daily.targets.calories);
//! # Ok(())
//! # }
//! ```

/// Application configuration from the environment
pub mod config;

/// Daily dashboard snapshot
pub mod dashboard;

/// Async store traits and the in-memory store
pub mod data_source;

/// Structured logging setup
pub mod logging;

pub use fittracker_core as core;
pub use fittracker_core::{errors, models};
pub use fittracker_intelligence as intelligence;
