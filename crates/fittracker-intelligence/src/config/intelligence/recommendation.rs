// ABOUTME: Recommendation heuristics configuration for meal analysis and daily suggestions
// ABOUTME: Configures the ratio thresholds each meal rule and each daily gap rule compares against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Recommendation Heuristics Configuration
//!
//! Ratios are fractions of the per-meal target slice; gaps are absolute
//! amounts left against the daily targets.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Recommendation heuristics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Thresholds for the per-meal rules
    pub meal: MealRuleThresholds,
    /// Thresholds for the whole-day suggestions
    pub daily: DailySuggestionThresholds,
}

/// Per-meal rule ratios against the meal's target slice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MealRuleThresholds {
    /// Above this ratio the meal is a calorie excess error (1.2)
    pub calorie_excess_ratio: f64,
    /// At or above this ratio (and not over) calories are on target (0.8)
    pub calorie_on_target_ratio: f64,
    /// Below this ratio protein is flagged as missing (0.5)
    pub protein_low_ratio: f64,
    /// Lower bound of the healthy fat band (0.8)
    pub fat_band_low_ratio: f64,
    /// Upper bound of the healthy fat band (1.2)
    pub fat_band_high_ratio: f64,
    /// Above this ratio fat is flagged as excessive (1.5)
    pub fat_excess_ratio: f64,
    /// Below this ratio a breakfast is nudged towards healthy fats (0.5)
    pub fat_low_ratio: f64,
    /// Below this ratio breakfast and lunch are nudged towards carbs (0.3)
    pub carbs_low_ratio: f64,
    /// Above this ratio carbs are flagged as excessive (1.5)
    pub carbs_excess_ratio: f64,
}

/// Whole-day gap thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DailySuggestionThresholds {
    /// Remaining protein above this suggests protein foods (30 g)
    pub protein_gap_g: f64,
    /// Remaining kcal above this suggests calorie-dense foods (300)
    pub calorie_gap_kcal: f64,
    /// ...provided remaining protein is below this (20 g)
    pub calorie_gap_max_protein_gap_g: f64,
    /// Intake above this with no vegetables suggests vegetables (500 kcal)
    pub vegetables_after_kcal: f64,
    /// Fat above this share of the daily target raises a warning (0.8)
    pub fat_warning_ratio: f64,
}

impl RecommendationConfig {
    /// Validate ratio ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when a band is inverted or a ratio is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.meal;
        if m.calorie_on_target_ratio <= 0.0 || m.calorie_on_target_ratio >= 1.0 {
            return Err(ConfigError::InvalidRange(
                "calorie_on_target_ratio must be in (0, 1)",
            ));
        }
        if m.calorie_excess_ratio <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "calorie_excess_ratio must be greater than 1",
            ));
        }
        if m.fat_low_ratio < 0.0
            || m.fat_low_ratio >= m.fat_band_low_ratio
            || m.fat_band_low_ratio >= m.fat_band_high_ratio
            || m.fat_band_high_ratio >= m.fat_excess_ratio
        {
            return Err(ConfigError::InvalidRange(
                "fat ratios must satisfy 0 <= low < band_low < band_high < excess",
            ));
        }
        if m.protein_low_ratio < 0.0 || m.protein_low_ratio >= 1.0 {
            return Err(ConfigError::InvalidRange("protein_low_ratio must be in [0, 1)"));
        }
        if m.carbs_low_ratio < 0.0 || m.carbs_low_ratio >= m.carbs_excess_ratio {
            return Err(ConfigError::InvalidRange(
                "carbs ratios must satisfy 0 <= low < excess",
            ));
        }
        let d = &self.daily;
        if d.protein_gap_g < 0.0
            || d.calorie_gap_kcal < 0.0
            || d.vegetables_after_kcal < 0.0
            || d.fat_warning_ratio <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "daily suggestion thresholds must not be negative",
            ));
        }
        Ok(())
    }
}

impl Default for MealRuleThresholds {
    fn default() -> Self {
        Self {
            calorie_excess_ratio: 1.2,
            calorie_on_target_ratio: 0.8,
            protein_low_ratio: 0.5,
            fat_band_low_ratio: 0.8,
            fat_band_high_ratio: 1.2,
            fat_excess_ratio: 1.5,
            fat_low_ratio: 0.5,
            carbs_low_ratio: 0.3,
            carbs_excess_ratio: 1.5,
        }
    }
}

impl Default for DailySuggestionThresholds {
    fn default() -> Self {
        Self {
            protein_gap_g: 30.0,
            calorie_gap_kcal: 300.0,
            calorie_gap_max_protein_gap_g: 20.0,
            vegetables_after_kcal: 500.0,
            fat_warning_ratio: 0.8,
        }
    }
}
