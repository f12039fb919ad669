// ABOUTME: Domain model module re-exporting profile, nutrition, and workout records
// ABOUTME: Plain value records read by the calculation engine and the data-source seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Core data models
//!
//! All records here are immutable snapshots from the engine's point of view:
//! the backend owns them, the engine only reads scalar fields.

/// User profile, activity level, and weight history
pub mod profile;

/// Foods, meal entries, meal types, and daily aggregates
pub mod nutrition;

/// Workout kinds, intensities, and workout log entries
pub mod workout;

pub use nutrition::{DailyStats, Food, MacroTotals, MealEntry, MealType, StepsEntry, WaterEntry};
pub use profile::{ActivityLevel, Sex, UserProfile, WeightEntry};
pub use workout::{
    CardioType, Intensity, PredefinedWorkout, WorkoutCategory, WorkoutEntry, WorkoutKind,
};
