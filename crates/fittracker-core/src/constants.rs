// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Service names, environment variable keys, and backend vocabulary for foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name for log records
    pub const FITTRACKER: &str = "fittracker";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path to a JSON document overriding the intelligence tables
    pub const CONFIG_PATH: &str = "FITTRACKER_CONFIG_PATH";
    /// Daily calorie deficit in kcal
    pub const CALORIE_DEFICIT: &str = "FITTRACKER_CALORIE_DEFICIT";
    /// Share of workout calories credited back to the daily target (0.0-1.0)
    pub const WORKOUT_BONUS_RATIO: &str = "FITTRACKER_WORKOUT_BONUS_RATIO";
    /// Protein grams per kg of target weight
    pub const PROTEIN_G_PER_KG: &str = "FITTRACKER_PROTEIN_G_PER_KG";
    /// Daily step goal
    pub const STEP_GOAL: &str = "FITTRACKER_STEP_GOAL";
    /// Fall back to full-body / walking for unknown workout keys
    pub const LENIENT_WORKOUT_LOOKUP: &str = "FITTRACKER_LENIENT_WORKOUT_LOOKUP";
}

/// Food catalog vocabulary as stored by the backend
pub mod food_tags {
    /// Category names that mark a food as a vegetable
    pub const VEGETABLE_CATEGORIES: &[&str] = &["verduras", "vegetables"];
    /// Tags that mark a food as a vegetable
    pub const VEGETABLE_TAGS: &[&str] = &["verdura", "vegetable"];
    /// Tags that mark a food as processed
    pub const PROCESSED_TAGS: &[&str] = &["procesado", "processed"];
}
