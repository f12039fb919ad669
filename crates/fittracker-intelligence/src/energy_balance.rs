// ABOUTME: Net energy balance semaphore and next-meal margin suggestion
// ABOUTME: Net = consumed - (workout kcal + step kcal); tiers on the distance from the daily target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Energy Balance Module
//!
//! The semaphore severity depends only on `|difference|`; the sign only picks
//! the direction of the message.

use std::fmt;

use fittracker_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::intelligence::BalanceConfig;
use crate::rounding::round_to_i32;

/// Semaphore tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    /// Within 200 kcal of target
    Excellent,
    /// Within 400 kcal of target
    Good,
    /// Within 600 kcal of target
    Warning,
    /// More than 600 kcal off target
    Danger,
}

impl BalanceStatus {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the target the day is on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BalanceDirection {
    /// Net intake above target
    Over,
    /// Net intake below target
    Under,
    /// Exactly on target
    OnTarget,
}

/// Energy balance of a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceClassification {
    /// Workout kcal plus step kcal
    pub burned_total: i32,
    /// Consumed minus burned
    pub net_calories: i32,
    /// Net minus target
    pub difference: i32,
    /// Semaphore tier of `|difference|`
    pub status: BalanceStatus,
    /// Sign of `difference`
    pub direction: BalanceDirection,
}

impl BalanceClassification {
    /// Human-readable summary of the balance
    #[must_use]
    pub fn message(&self) -> String {
        let amount = self.difference.unsigned_abs();
        match (self.status, self.direction) {
            (_, BalanceDirection::OnTarget) => "Right on target".to_owned(),
            (BalanceStatus::Excellent, BalanceDirection::Over) => {
                format!("On track: {amount} kcal over target")
            }
            (BalanceStatus::Excellent, BalanceDirection::Under) => {
                format!("On track: {amount} kcal under target")
            }
            (_, BalanceDirection::Over) => format!("{amount} kcal over target"),
            (_, BalanceDirection::Under) => format!("{amount} kcal under target"),
        }
    }
}

/// Next-meal guidance from the kcal left for the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealMarginCategory {
    /// Target already exceeded; avoid more food
    AlreadyOver,
    /// Less than 300 kcal left
    LightMeal,
    /// Less than 600 kcal left
    ModerateMeal,
    /// 600 kcal or more left
    EatNormally,
}

impl MealMarginCategory {
    /// Short suggestion for the category
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::AlreadyOver => "Target already reached, avoid eating more today",
            Self::LightMeal => "Room for a light meal",
            Self::ModerateMeal => "Room for a moderate meal",
            Self::EatNormally => "Eat normally",
        }
    }
}

/// kcal left and the resulting category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealMargin {
    /// Target minus net intake
    pub remaining: i32,
    /// Guidance category
    pub category: MealMarginCategory,
}

/// kcal credited for a step count
#[must_use]
pub fn step_calories(steps: u32, config: &BalanceConfig) -> i32 {
    round_to_i32(f64::from(steps) * config.kcal_per_step)
}

/// Tier for an absolute distance from target
#[must_use]
pub fn classify_difference(difference: i32, config: &BalanceConfig) -> BalanceStatus {
    let distance = f64::from(difference.unsigned_abs());
    let tiers = &config.semaphore;

    if distance <= tiers.excellent_max_kcal {
        BalanceStatus::Excellent
    } else if distance <= tiers.good_max_kcal {
        BalanceStatus::Good
    } else if distance <= tiers.warning_max_kcal {
        BalanceStatus::Warning
    } else {
        BalanceStatus::Danger
    }
}

/// Classify the day's energy balance
///
/// - `burned_total = workout_calories + round(steps x 0.04)`
/// - `net = consumed - burned_total`
/// - `difference = net - target`
///
/// # Errors
///
/// Returns `DegenerateInput` when consumed or workout kcal is not a finite number
pub fn classify_energy_balance(
    consumed: f64,
    workout_calories: f64,
    steps: u32,
    target_calories: i32,
    config: &BalanceConfig,
) -> AppResult<BalanceClassification> {
    if !consumed.is_finite() {
        return Err(AppError::degenerate_input(format!(
            "Consumed kcal must be finite, got {consumed}"
        )));
    }
    if !workout_calories.is_finite() {
        return Err(AppError::degenerate_input(format!(
            "Workout kcal must be finite, got {workout_calories}"
        )));
    }

    let burned_total = round_to_i32(workout_calories + f64::from(step_calories(steps, config)));
    let net_calories = round_to_i32(consumed - f64::from(burned_total));
    let difference = net_calories - target_calories;
    let status = classify_difference(difference, config);

    let direction = match difference.signum() {
        1 => BalanceDirection::Over,
        -1 => BalanceDirection::Under,
        _ => BalanceDirection::OnTarget,
    };

    debug!(
        burned_total,
        net_calories,
        difference,
        status = status.as_str(),
        "Classified energy balance"
    );

    Ok(BalanceClassification {
        burned_total,
        net_calories,
        difference,
        status,
        direction,
    })
}

/// Suggest the size of the next meal from `target - net`
#[must_use]
pub fn suggest_meal_margin(
    target_calories: i32,
    net_calories: i32,
    config: &BalanceConfig,
) -> MealMargin {
    let remaining = target_calories - net_calories;
    let left = f64::from(remaining);
    let thresholds = &config.meal_margin;

    let category = if remaining < 0 {
        MealMarginCategory::AlreadyOver
    } else if left < thresholds.light_meal_below_kcal {
        MealMarginCategory::LightMeal
    } else if left < thresholds.moderate_meal_below_kcal {
        MealMarginCategory::ModerateMeal
    } else {
        MealMarginCategory::EatNormally
    };

    MealMargin {
        remaining,
        category,
    }
}
