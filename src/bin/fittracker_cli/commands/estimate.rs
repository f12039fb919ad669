// ABOUTME: Stateless calculator commands for fittracker-cli
// ABOUTME: Daily targets, workout estimates, and energy balance printed as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use fittracker::intelligence::energy_balance::{classify_energy_balance, suggest_meal_margin};
use fittracker::intelligence::workout_calculator::{
    calculate_steps_added, estimate_cardio, estimate_custom_workout, estimate_predefined_workout,
    resolve_cardio_type, resolve_predefined_workout,
};
use fittracker::intelligence::{calculate_calorie_targets, IntelligenceConfig};
use fittracker::models::{Intensity, UserProfile, WorkoutCategory};
use serde_json::json;

use crate::helpers::io::{print_json, read_json, resolve_today};

/// Print the daily target pipeline for a profile document
pub fn targets(
    profile_path: &Path,
    workout_calories: f64,
    today: Option<NaiveDate>,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let profile: UserProfile = read_json(profile_path)?;
    let daily = calculate_calorie_targets(&profile, workout_calories, resolve_today(today), config)?;
    print_json(&daily)
}

/// Print the estimate for a day of the plan
pub fn predefined(
    id: u32,
    weight_kg: f64,
    duration_min: Option<u32>,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let workout = resolve_predefined_workout(id, &config.workout)?;
    let estimate = estimate_predefined_workout(workout, weight_kg, duration_min, &config.workout)?;
    print_json(&json!({
        "workout": workout,
        "title": workout.title(),
        "estimate": estimate,
    }))
}

/// Print the estimate for a custom session
pub fn custom(
    category: &str,
    intensity: &str,
    duration_min: u32,
    weight_kg: f64,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let category: WorkoutCategory = category.parse()?;
    let intensity: Intensity = intensity.parse()?;
    let estimate =
        estimate_custom_workout(category, intensity, weight_kg, duration_min, &config.workout)?;
    print_json(&json!({
        "category": category,
        "intensity": intensity,
        "estimate": estimate,
    }))
}

/// Print the estimate and step credit for a cardio activity
pub fn cardio(
    code: &str,
    duration_min: u32,
    weight_kg: f64,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let cardio = resolve_cardio_type(code, &config.workout)?;
    let estimate = estimate_cardio(cardio, weight_kg, duration_min, &config.workout)?;
    let steps_added = calculate_steps_added(cardio, duration_min, &config.workout.steps_per_minute);
    print_json(&json!({
        "cardio": cardio,
        "estimate": estimate,
        "steps_added": steps_added,
    }))
}

/// Print the balance classification and meal margin
pub fn balance(
    consumed: f64,
    workout_calories: f64,
    steps: u32,
    target: i32,
    config: &IntelligenceConfig<true>,
) -> Result<()> {
    let balance =
        classify_energy_balance(consumed, workout_calories, steps, target, &config.balance)?;
    let margin = suggest_meal_margin(target, balance.net_calories, &config.balance);
    print_json(&json!({
        "balance": balance,
        "message": balance.message(),
        "meal_margin": margin,
        "suggestion": margin.category.suggestion(),
    }))
}
