// ABOUTME: Workout energy estimation from MET values with an EPOC afterburn surcharge
// ABOUTME: Predefined plan days, custom sessions, cardio types, step credit, and burn decomposition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Workout Calculator Module
//!
//! In-session burn is `MET x weight x 3.5 / 200` kcal per minute; the total
//! multiplies that by the activity's EPOC factor and rounds once. The
//! dispatchers only pick a `(met, epoc)` pair from [`WorkoutConfig`].
//!
//! # Scientific References
//!
//! - Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

use fittracker_core::errors::{AppError, AppResult};
use fittracker_core::models::{
    CardioType, Intensity, PredefinedWorkout, WorkoutCategory, WorkoutEntry, WorkoutKind,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::intelligence::{ActivityCost, StepsPerMinuteConfig, WorkoutConfig};
use crate::physiological_constants::met;
use crate::rounding::round_to_i32;

/// Energy estimate for one session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEstimate {
    /// MET value used
    pub met_value: f64,
    /// EPOC multiplier used
    pub epoc_multiplier: f64,
    /// In-session kcal, rounded
    pub during_calories: i32,
    /// Afterburn kcal (`total - during`)
    pub epoc_calories: i32,
    /// Total kcal including afterburn
    pub total_calories: i32,
}

/// Display split of a stored total into in-session and afterburn parts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaloriesBreakdown {
    /// Approximate in-session kcal
    pub during: i32,
    /// Afterburn kcal
    pub epoc: i32,
    /// The total that was decomposed
    pub total: i32,
    /// Afterburn as a whole percentage of the in-session burn
    pub epoc_percent: i32,
}

fn validate_session(weight_kg: f64, duration_min: f64) -> AppResult<()> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::value_out_of_range("Weight must be positive"));
    }
    if !(duration_min.is_finite() && duration_min >= 0.0) {
        return Err(AppError::value_out_of_range(
            "Duration must be a non-negative number of minutes",
        ));
    }
    Ok(())
}

fn validate_cost(met_value: f64, epoc_multiplier: f64) -> AppResult<()> {
    if !(met_value.is_finite() && met_value > 0.0) {
        return Err(AppError::value_out_of_range(format!(
            "MET value must be positive, got {met_value}"
        )));
    }
    if !(epoc_multiplier.is_finite() && epoc_multiplier > 0.0) {
        return Err(AppError::value_out_of_range(format!(
            "EPOC multiplier must be positive, got {epoc_multiplier}"
        )));
    }
    Ok(())
}

fn during_calories_unrounded(met_value: f64, weight_kg: f64, duration_min: f64) -> f64 {
    met_value * weight_kg * met::RESTING_O2_ML_PER_KG_MIN / met::O2_ML_TO_KCAL_DIVISOR
        * duration_min
}

/// Calculate calories burned including afterburn
///
/// Formula: total = round(MET x `weight_kg` x 3.5 / 200 x `duration_min` x `epoc_multiplier`)
///
/// Pass `1.0` as `epoc_multiplier` for the plain in-session burn.
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight, MET value or EPOC
/// multiplier, or a negative duration
pub fn calculate_calories_burned(
    met_value: f64,
    weight_kg: f64,
    duration_min: f64,
    epoc_multiplier: f64,
) -> AppResult<i32> {
    validate_cost(met_value, epoc_multiplier)?;
    validate_session(weight_kg, duration_min)?;
    Ok(round_to_i32(
        during_calories_unrounded(met_value, weight_kg, duration_min) * epoc_multiplier,
    ))
}

/// Full estimate for an activity cost entry
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight, MET value or EPOC multiplier
pub fn estimate_activity(
    cost: ActivityCost,
    weight_kg: f64,
    duration_min: u32,
) -> AppResult<WorkoutEstimate> {
    let duration = f64::from(duration_min);
    validate_cost(cost.met, cost.epoc_multiplier)?;
    validate_session(weight_kg, duration)?;

    let during = during_calories_unrounded(cost.met, weight_kg, duration);
    let during_calories = round_to_i32(during);
    let total_calories = round_to_i32(during * cost.epoc_multiplier);

    Ok(WorkoutEstimate {
        met_value: cost.met,
        epoc_multiplier: cost.epoc_multiplier,
        during_calories,
        epoc_calories: total_calories - during_calories,
        total_calories,
    })
}

/// Resolve a plan day from its 1-based id
///
/// Unknown ids fail unless `config.lenient_lookup` is set, in which case the
/// full-body day is used.
///
/// # Errors
///
/// Returns `InvalidArgument` for ids outside 1..=4 in strict mode
pub fn resolve_predefined_workout(
    workout_id: u32,
    config: &WorkoutConfig,
) -> AppResult<PredefinedWorkout> {
    match PredefinedWorkout::from_id(workout_id) {
        Ok(workout) => Ok(workout),
        Err(_) if config.lenient_lookup => {
            warn!(workout_id, "Unknown predefined workout id, using full body");
            Ok(PredefinedWorkout::FullBody)
        }
        Err(e) => Err(e),
    }
}

/// Resolve a cardio type from its code
///
/// Unknown codes fail unless `config.lenient_lookup` is set, in which case
/// walking is used.
///
/// # Errors
///
/// Returns `InvalidArgument` for unknown codes in strict mode
pub fn resolve_cardio_type(code: &str, config: &WorkoutConfig) -> AppResult<CardioType> {
    match code.parse::<CardioType>() {
        Ok(cardio) => Ok(cardio),
        Err(_) if config.lenient_lookup => {
            warn!(code, "Unknown cardio type, using walking");
            Ok(CardioType::Walking)
        }
        Err(e) => Err(e),
    }
}

/// Estimate a day of the four-day plan (40 minutes when `duration_min` is `None`)
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight
pub fn estimate_predefined_workout(
    workout: PredefinedWorkout,
    weight_kg: f64,
    duration_min: Option<u32>,
    config: &WorkoutConfig,
) -> AppResult<WorkoutEstimate> {
    let duration = duration_min.unwrap_or(config.default_predefined_duration_min);
    estimate_activity(config.predefined.cost_for(workout), weight_kg, duration)
}

/// Estimate a custom session from its category and intensity
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight
pub fn estimate_custom_workout(
    category: WorkoutCategory,
    intensity: Intensity,
    weight_kg: f64,
    duration_min: u32,
    config: &WorkoutConfig,
) -> AppResult<WorkoutEstimate> {
    let cost = config.table_for(category).cost_for(intensity);
    estimate_activity(cost, weight_kg, duration_min)
}

/// Estimate a specific cardio activity
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight
pub fn estimate_cardio(
    cardio: CardioType,
    weight_kg: f64,
    duration_min: u32,
    config: &WorkoutConfig,
) -> AppResult<WorkoutEstimate> {
    estimate_activity(config.cardio_types.cost_for(cardio), weight_kg, duration_min)
}

/// Estimate any workout kind
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight
pub fn estimate_workout(
    kind: WorkoutKind,
    weight_kg: f64,
    duration_min: u32,
    config: &WorkoutConfig,
) -> AppResult<WorkoutEstimate> {
    let estimate = match kind {
        WorkoutKind::Predefined { workout } => {
            estimate_predefined_workout(workout, weight_kg, Some(duration_min), config)
        }
        WorkoutKind::Custom {
            category,
            intensity,
        } => estimate_custom_workout(category, intensity, weight_kg, duration_min, config),
        WorkoutKind::Cardio { cardio } => estimate_cardio(cardio, weight_kg, duration_min, config),
    }?;

    debug!(
        ?kind,
        duration_min,
        total = estimate.total_calories,
        "Estimated workout energy"
    );
    Ok(estimate)
}

/// Total kcal of a plan day looked up by id
///
/// # Errors
///
/// Returns `InvalidArgument` for unknown ids in strict mode and
/// `ValueOutOfRange` for a non-positive weight
pub fn calculate_predefined_workout_calories(
    workout_id: u32,
    weight_kg: f64,
    duration_min: Option<u32>,
    config: &WorkoutConfig,
) -> AppResult<i32> {
    let workout = resolve_predefined_workout(workout_id, config)?;
    Ok(estimate_predefined_workout(workout, weight_kg, duration_min, config)?.total_calories)
}

/// Total kcal of a custom session
///
/// # Errors
///
/// Returns `ValueOutOfRange` for a non-positive weight
pub fn calculate_custom_workout_calories(
    category: WorkoutCategory,
    intensity: Intensity,
    weight_kg: f64,
    duration_min: u32,
    config: &WorkoutConfig,
) -> AppResult<i32> {
    let estimate = estimate_custom_workout(category, intensity, weight_kg, duration_min, config)?;
    Ok(estimate.total_calories)
}

/// Total kcal of a cardio activity looked up by code
///
/// # Errors
///
/// Returns `InvalidArgument` for unknown codes in strict mode and
/// `ValueOutOfRange` for a non-positive weight
pub fn calculate_cardio_calories(
    cardio_code: &str,
    weight_kg: f64,
    duration_min: u32,
    config: &WorkoutConfig,
) -> AppResult<i32> {
    let cardio = resolve_cardio_type(cardio_code, config)?;
    Ok(estimate_cardio(cardio, weight_kg, duration_min, config)?.total_calories)
}

/// Steps credited for a cardio session (independent of weight)
#[must_use]
pub fn calculate_steps_added(
    cardio: CardioType,
    duration_min: u32,
    config: &StepsPerMinuteConfig,
) -> u32 {
    config.cadence_for(cardio).saturating_mul(duration_min)
}

/// Split a stored total back into in-session and afterburn kcal
///
/// `during = round(total / epoc_multiplier)`; the inverse is rounding-lossy
/// and recovers the in-session burn within 1 kcal.
///
/// # Errors
///
/// Returns `DegenerateInput` when `epoc_multiplier` is not a positive number
pub fn decompose_calories(total: i32, epoc_multiplier: f64) -> AppResult<CaloriesBreakdown> {
    if !(epoc_multiplier.is_finite() && epoc_multiplier > 0.0) {
        return Err(AppError::degenerate_input(format!(
            "EPOC multiplier must be positive, got {epoc_multiplier}"
        )));
    }

    let during = round_to_i32(f64::from(total) / epoc_multiplier);
    Ok(CaloriesBreakdown {
        during,
        epoc: total - during,
        total,
        epoc_percent: round_to_i32((epoc_multiplier - 1.0) * 100.0),
    })
}

/// Suggested next day of the four-day plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextWorkout {
    /// Plan day to train next
    pub workout: PredefinedWorkout,
    /// Most recent plan day found in the log, if any
    pub after: Option<PredefinedWorkout>,
}

/// Pick the plan day after the most recently logged one (day 1 when none)
#[must_use]
pub fn suggest_next_workout(workouts: &[WorkoutEntry]) -> NextWorkout {
    let after = workouts
        .iter()
        .filter_map(|entry| match entry.kind {
            WorkoutKind::Predefined { workout } => Some((entry.logged_at, workout)),
            WorkoutKind::Custom { .. } | WorkoutKind::Cardio { .. } => None,
        })
        .max_by_key(|(logged_at, _)| *logged_at)
        .map(|(_, workout)| workout);

    NextWorkout {
        workout: after.map_or(PredefinedWorkout::Push, |last| last.next()),
        after,
    }
}
