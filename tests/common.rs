// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample profiles, and log entry builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittracker`
//!
//! Fixtures mirror a typical user: 180 cm, 102.4 kg, born 1982-01-15,
//! moderately active, aiming for 84 kg.

use std::env;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use fittracker::intelligence::IntelligenceConfig;
use fittracker::models::{
    ActivityLevel, Food, MealEntry, MealType, Sex, UserProfile, WorkoutEntry, WorkoutKind,
};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default calculation tables
pub fn test_config() -> IntelligenceConfig<true> {
    IntelligenceConfig::<true>::default()
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC timestamp shorthand
pub fn at(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
}

/// Reference day used across the suites (a Sunday)
pub fn today() -> NaiveDate {
    date(2025, 6, 1)
}

/// 43-year-old male profile on `today()`
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "Alex".to_owned(),
        birth_date: date(1982, 1, 15),
        height_cm: 180.0,
        current_weight_kg: 102.4,
        start_weight_kg: 105.0,
        target_weight_kg: 84.0,
        activity_level: ActivityLevel::Moderate,
        sex: Sex::Male,
    }
}

/// Catalog food with per-100 g values
pub fn food(id: i64, name: &str, category: &str, per_100: [f64; 4], tags: &[&str]) -> Food {
    Food {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        calories_per_100g: per_100[0],
        protein_per_100g: per_100[1],
        carbs_per_100g: per_100[2],
        fat_per_100g: per_100[3],
        unit: "g".to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        is_custom: false,
        user_id: None,
    }
}

/// Meal entry with explicit totals
pub fn meal(
    user_id: Uuid,
    meal_type: MealType,
    food_id: Option<i64>,
    totals: [f64; 4],
    logged_at: DateTime<Utc>,
) -> MealEntry {
    MealEntry {
        id: Uuid::new_v4(),
        user_id,
        food_id,
        meal_type,
        food_name: None,
        quantity: 100.0,
        unit: "g".to_owned(),
        calories: totals[0],
        protein: totals[1],
        carbs: totals[2],
        fat: totals[3],
        logged_at,
    }
}

/// Workout entry of a given kind
pub fn workout(
    user_id: Uuid,
    kind: WorkoutKind,
    calories_burned: f64,
    logged_at: DateTime<Utc>,
) -> WorkoutEntry {
    WorkoutEntry {
        id: Uuid::new_v4(),
        user_id,
        name: "session".to_owned(),
        kind,
        duration_min: 40,
        calories_burned,
        steps_added: 0,
        logged_at,
    }
}
