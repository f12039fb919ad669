// ABOUTME: Energy balance configuration for the net-calorie semaphore and meal margin
// ABOUTME: Configures step energy, semaphore tiers, meal-margin breakpoints, and the daily step goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Energy Balance Configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Energy balance configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BalanceConfig {
    /// kcal credited per step (0.04)
    pub kcal_per_step: f64,
    /// Semaphore tiers on the absolute difference from target
    pub semaphore: SemaphoreThresholds,
    /// Breakpoints on the remaining calories for the next meal
    pub meal_margin: MealMarginThresholds,
    /// Steps counted as 100 % of the daily goal (10 000)
    pub daily_step_goal: u32,
}

/// Inclusive upper bounds on `|difference|` for each semaphore tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SemaphoreThresholds {
    /// Up to this many kcal off target is excellent (200)
    pub excellent_max_kcal: f64,
    /// Up to this many kcal off target is good (400)
    pub good_max_kcal: f64,
    /// Up to this many kcal off target is a warning (600); beyond is danger
    pub warning_max_kcal: f64,
}

/// Exclusive upper bounds on remaining kcal for the meal-margin categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MealMarginThresholds {
    /// Below this, suggest a light meal (300)
    pub light_meal_below_kcal: f64,
    /// Below this, suggest a moderate meal (600)
    pub moderate_meal_below_kcal: f64,
}

impl BalanceConfig {
    /// Validate tier ordering and positive step values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when tiers are out of order or a step value is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.kcal_per_step.is_finite() && self.kcal_per_step >= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_step must be a non-negative number",
            ));
        }
        let s = &self.semaphore;
        if s.excellent_max_kcal < 0.0
            || s.excellent_max_kcal >= s.good_max_kcal
            || s.good_max_kcal >= s.warning_max_kcal
        {
            return Err(ConfigError::InvalidRange(
                "semaphore thresholds must satisfy 0 <= excellent < good < warning",
            ));
        }
        let m = &self.meal_margin;
        if m.light_meal_below_kcal <= 0.0 || m.light_meal_below_kcal >= m.moderate_meal_below_kcal
        {
            return Err(ConfigError::InvalidRange(
                "meal margin thresholds must satisfy 0 < light < moderate",
            ));
        }
        if self.daily_step_goal == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "daily_step_goal must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            kcal_per_step: 0.04,
            semaphore: SemaphoreThresholds::default(),
            meal_margin: MealMarginThresholds::default(),
            daily_step_goal: 10_000,
        }
    }
}

impl Default for SemaphoreThresholds {
    fn default() -> Self {
        Self {
            excellent_max_kcal: 200.0,
            good_max_kcal: 400.0,
            warning_max_kcal: 600.0,
        }
    }
}

impl Default for MealMarginThresholds {
    fn default() -> Self {
        Self {
            light_meal_below_kcal: 300.0,
            moderate_meal_below_kcal: 600.0,
        }
    }
}
