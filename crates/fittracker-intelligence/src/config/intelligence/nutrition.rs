// ABOUTME: Nutrition configuration for metabolic targets and per-meal distribution
// ABOUTME: Configures BMR coefficients, activity factors, deficit policy, macro split, and meal shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Nutrition Configuration
//!
//! Coefficients for the daily calorie and macro targets plus the table that
//! slices those targets across the five meal slots.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch, Exercise Physiology

use fittracker_core::models::{ActivityLevel, MealType};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tolerance when checking that a distribution column sums to 1.0
const SHARE_SUM_TOLERANCE: f64 = 0.001;

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Deficit and workout credit-back policy
    pub calorie_target: CalorieTargetConfig,
    /// Protein rule and fat share
    pub macronutrients: MacronutrientConfig,
    /// Per-meal share of the daily targets
    pub meal_distribution: MealDistributionConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
        }
    }
}

/// Daily calorie target policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalorieTargetConfig {
    /// kcal subtracted from TDEE (600)
    pub deficit_kcal: f64,
    /// Share of workout burn credited back to the target (0.5)
    pub workout_bonus_ratio: f64,
}

/// Macro split policy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MacronutrientConfig {
    /// Protein grams per kg of target weight (2.0)
    pub protein_g_per_kg_target: f64,
    /// Fraction of target calories assigned to fat (0.25)
    pub fat_share_of_calories: f64,
}

/// Fractions of the daily calorie, protein, carbs, and fat targets for one meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealShare {
    /// Calorie share
    pub calories: f64,
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

impl MealShare {
    /// Create a meal share from the four fractions
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Per-meal distribution of daily targets
///
/// Each column (calories, protein, carbs, fat) must sum to 1.0 across the
/// five slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MealDistributionConfig {
    /// Breakfast: 25/20/25/30 %
    pub breakfast: MealShare,
    /// Mid-morning snack: 10/15/10/10 %
    pub mid_morning: MealShare,
    /// Lunch: 35/35/40/30 %
    pub lunch: MealShare,
    /// Afternoon snack: 10/10/10/10 %
    pub afternoon_snack: MealShare,
    /// Dinner: 20/20/15/20 %
    pub dinner: MealShare,
}

impl MealDistributionConfig {
    /// Share for a meal slot
    #[must_use]
    pub const fn share_for(&self, meal_type: MealType) -> MealShare {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::MidMorning => self.mid_morning,
            MealType::Lunch => self.lunch,
            MealType::AfternoonSnack => self.afternoon_snack,
            MealType::Dinner => self.dinner,
        }
    }

    /// Validate that every column sums to 1.0 and no share is negative
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the offending column
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares: Vec<MealShare> = MealType::ALL.iter().map(|m| self.share_for(*m)).collect();

        let columns: [(&str, fn(&MealShare) -> f64); 4] = [
            ("calories", |s| s.calories),
            ("protein", |s| s.protein),
            ("carbs", |s| s.carbs),
            ("fat", |s| s.fat),
        ];

        for (name, column) in columns {
            if shares.iter().any(|s| column(s) < 0.0) {
                return Err(ConfigError::InvalidWeights(format!(
                    "meal {name} shares must not be negative"
                )));
            }
            let sum: f64 = shares.iter().map(column).sum();
            if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(format!(
                    "meal {name} shares sum to {sum:.3}, expected 1.0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
        }
    }
}

impl Default for CalorieTargetConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 600.0,
            workout_bonus_ratio: 0.5,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg_target: 2.0,
            fat_share_of_calories: 0.25,
        }
    }
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast: MealShare::new(0.25, 0.20, 0.25, 0.30),
            mid_morning: MealShare::new(0.10, 0.15, 0.10, 0.10),
            lunch: MealShare::new(0.35, 0.35, 0.40, 0.30),
            afternoon_snack: MealShare::new(0.10, 0.10, 0.10, 0.10),
            dinner: MealShare::new(0.20, 0.20, 0.15, 0.20),
        }
    }
}
