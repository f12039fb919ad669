// ABOUTME: Intelligence configuration aggregating every calculation table of the engine
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Intelligence Configuration Module
//!
//! Type-state configuration for the calculation engine. A freshly parsed or
//! env-patched configuration is an `IntelligenceConfig<false>`; only
//! [`IntelligenceConfig::validate`] produces the `IntelligenceConfig<true>`
//! the calculators accept.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR, activity factors, deficit policy, macro split, meal shares
//! - `workout` - MET/EPOC tables and step cadence
//! - `balance` - Semaphore tiers, meal margin, step energy
//! - `recommendation` - Meal rule ratios and daily gap thresholds

pub mod balance;
pub mod error;
pub mod nutrition;
pub mod recommendation;
pub mod workout;

pub use balance::{BalanceConfig, MealMarginThresholds, SemaphoreThresholds};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, MacronutrientConfig,
    MealDistributionConfig, MealShare, NutritionConfig,
};
pub use recommendation::{DailySuggestionThresholds, MealRuleThresholds, RecommendationConfig};
pub use workout::{
    ActivityCost, CardioTable, IntensityTable, PredefinedTable, StepsPerMinuteConfig,
    WorkoutConfig,
};

use std::env;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use fittracker_core::constants::env_config;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig<true>> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig<const VALIDATED: bool = false> {
    /// Metabolic target and meal distribution tables
    #[serde(default)]
    pub nutrition: NutritionConfig,
    /// Workout energy tables
    #[serde(default)]
    pub workout: WorkoutConfig,
    /// Energy balance semaphore and meal margin
    #[serde(default)]
    pub balance: BalanceConfig,
    /// Recommendation heuristics thresholds
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl IntelligenceConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults, the optional JSON file, and environment
    ///
    /// The file named by `FITTRACKER_CONFIG_PATH` is applied first, then
    /// individual `FITTRACKER_*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variables contain
    /// invalid values, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let draft = match env::var(env_config::CONFIG_PATH) {
            Ok(path) => IntelligenceConfig::<false>::from_json_file(Path::new(&path))?,
            Err(_) => Self::default().into_draft(),
        };

        draft.apply_env_overrides()?.validate()
    }

    /// Parse and validate a JSON document; omitted sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed documents and a validation error
    /// for out-of-range tables
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let draft: IntelligenceConfig<false> = serde_json::from_str(json)?;
        draft.validate()
    }

    /// Drop the validation marker so the tables can be patched again
    #[must_use]
    pub fn into_draft(self) -> IntelligenceConfig<false> {
        IntelligenceConfig {
            nutrition: self.nutrition,
            workout: self.workout,
            balance: self.balance,
            recommendation: self.recommendation,
            _phantom: PhantomData,
        }
    }
}

impl IntelligenceConfig<false> {
    /// Read an unvalidated configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` or `ConfigError::Json`
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading intelligence config file");
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found across all sections
    pub fn validate(self) -> Result<IntelligenceConfig<true>, ConfigError> {
        self.validate_nutrition()?;
        self.workout.validate()?;
        self.balance.validate()?;
        self.recommendation.validate()?;

        Ok(IntelligenceConfig {
            nutrition: self.nutrition,
            workout: self.workout,
            balance: self.balance,
            recommendation: self.recommendation,
            _phantom: PhantomData,
        })
    }

    /// Validate nutrition configuration
    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if nutr.calorie_target.deficit_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie deficit must not be negative",
            ));
        }
        if !(0.0..=1.0).contains(&nutr.calorie_target.workout_bonus_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "Workout bonus ratio must be between 0.0 and 1.0",
            ));
        }

        if !(0.5..=3.0).contains(&nutr.macronutrients.protein_g_per_kg_target) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein target must be between 0.5 and 3.0 g/kg",
            ));
        }
        if !(0.0..1.0).contains(&nutr.macronutrients.fat_share_of_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat share of calories must be between 0.0 and 1.0",
            ));
        }

        nutr.meal_distribution.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a variable is set but unparseable
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::CALORIE_DEFICIT,
            &mut self.nutrition.calorie_target.deficit_kcal,
        )?;
        Self::apply_env_var(
            env_config::WORKOUT_BONUS_RATIO,
            &mut self.nutrition.calorie_target.workout_bonus_ratio,
        )?;
        Self::apply_env_var(
            env_config::PROTEIN_G_PER_KG,
            &mut self.nutrition.macronutrients.protein_g_per_kg_target,
        )?;
        Self::apply_env_var(env_config::STEP_GOAL, &mut self.balance.daily_step_goal)?;
        Self::apply_env_var(
            env_config::LENIENT_WORKOUT_LOOKUP,
            &mut self.workout.lenient_lookup,
        )?;

        Ok(self)
    }
}

impl Default for IntelligenceConfig<true> {
    fn default() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            workout: WorkoutConfig::default(),
            balance: BalanceConfig::default(),
            recommendation: RecommendationConfig::default(),
            _phantom: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = IntelligenceConfig::<true>::default();
        assert!(config.into_draft().validate().is_ok());
    }

    #[test]
    fn test_inverted_activity_factors_rejected() {
        let mut draft = IntelligenceConfig::<true>::default().into_draft();
        draft.nutrition.activity_factors.light = 1.1;
        assert!(matches!(
            draft.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_meal_shares_must_sum_to_one() {
        let mut draft = IntelligenceConfig::<true>::default().into_draft();
        draft.nutrition.meal_distribution.dinner.calories = 0.5;
        assert!(matches!(
            draft.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = IntelligenceConfig::<true>::from_json_str(
            r#"{"balance": {"daily_step_goal": 8000}}"#,
        )
        .unwrap();
        assert_eq!(config.balance.daily_step_goal, 8000);
        assert!((config.balance.kcal_per_step - 0.04).abs() < f64::EPSILON);
        assert!((config.nutrition.activity_factors.moderate - 1.55).abs() < f64::EPSILON);
    }
}
