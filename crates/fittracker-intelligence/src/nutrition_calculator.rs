// ABOUTME: Metabolic target calculations using the Mifflin-St Jeor equation
// ABOUTME: Age, BMR, TDEE, daily calorie target, workout bonus, macro split, meal slices, and portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Nutrition Calculator Module
//!
//! Converts a biometric profile into daily calorie and macro targets:
//! BMR → TDEE → target (TDEE − deficit + workout bonus) → macro split.
//! Every kcal and gram output is rounded half-up to a whole number.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use chrono::{Datelike, NaiveDate};
use fittracker_core::errors::{AppError, AppResult};
use fittracker_core::models::{ActivityLevel, Food, MacroTotals, MealType, Sex, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, CalorieTargetConfig, IntelligenceConfig,
    MacronutrientConfig, MealDistributionConfig,
};
use crate::physiological_constants::{energy_density, portions};
use crate::rounding::{round_half_up, round_to_i32};

/// Gram targets of the macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fat: i32,
}

/// Daily (or per-meal) calorie and macro targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieTargets {
    /// kcal
    pub calories: i32,
    /// Protein (g)
    pub protein: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fat (g)
    pub fat: i32,
}

impl CalorieTargets {
    /// Combine a calorie target with its macro split
    #[must_use]
    pub const fn new(calories: i32, macros: MacroTargets) -> Self {
        Self {
            calories,
            protein: macros.protein,
            carbs: macros.carbs,
            fat: macros.fat,
        }
    }

    /// Targets as floating-point totals for comparisons against intake
    #[must_use]
    pub fn as_totals(&self) -> MacroTotals {
        MacroTotals {
            calories: f64::from(self.calories),
            protein: f64::from(self.protein),
            carbs: f64::from(self.carbs),
            fat: f64::from(self.fat),
        }
    }
}

/// Output of the full daily pipeline with its intermediate values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyTargets {
    /// Age in whole years on `today`
    pub age: u32,
    /// Basal metabolic rate (kcal)
    pub bmr: i32,
    /// Total daily energy expenditure (kcal)
    pub tdee: i32,
    /// Deficit subtracted from TDEE (kcal)
    pub deficit: i32,
    /// Workout kcal credited back
    pub workout_bonus: i32,
    /// Resulting calorie and macro targets
    pub targets: CalorieTargets,
}

/// Whole years between `birth_date` and `today`
///
/// One year is subtracted when today's month/day precedes the birthday.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `birth_date` is after `today`
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> AppResult<u32> {
    if birth_date > today {
        return Err(AppError::value_out_of_range(format!(
            "birth date {birth_date} is after {today}"
        )));
    }

    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    Ok(age.unsigned_abs())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age` - Age in years
/// * `sex` - Selects the sex constant
/// * `config` - BMR configuration with formula coefficients
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `ValueOutOfRange` if weight or height is not a positive finite number
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<i32> {
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(AppError::value_out_of_range("Weight must be positive"));
    }
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(AppError::value_out_of_range("Height must be positive"));
    }

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef * f64::from(age)),
    ) + sex_constant;

    Ok(round_to_i32(bmr))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors:
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
#[must_use]
pub fn calculate_tdee(
    bmr: i32,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> i32 {
    round_to_i32(f64::from(bmr) * config.factor_for(activity_level))
}

/// Daily calorie target: `tdee - deficit + workout_bonus`
///
/// Not clamped; a very low TDEE yields a very low or negative target.
#[must_use]
pub fn calculate_daily_calorie_target(tdee: i32, deficit_kcal: f64, workout_bonus: i32) -> i32 {
    round_to_i32(f64::from(tdee) - deficit_kcal + f64::from(workout_bonus))
}

/// Share of the day's workout burn credited back to the target
#[must_use]
pub fn calculate_workout_bonus(calories_burned: f64, config: &CalorieTargetConfig) -> i32 {
    round_to_i32(calories_burned * config.workout_bonus_ratio)
}

/// Split a calorie target into protein, fat, and carbohydrate grams
///
/// - Protein: `target_weight_kg` x 2 g
/// - Fat: 25 % of calories / 9
/// - Carbs: the remaining calories / 4
///
/// Grams are clamped at zero; `protein*4 + carbs*4 + fat*9` then stays within
/// rounding distance of `target_calories` for every target large enough to
/// cover the protein and fat.
#[must_use]
pub fn calculate_macros(
    target_calories: i32,
    target_weight_kg: f64,
    config: &MacronutrientConfig,
) -> MacroTargets {
    let calories = f64::from(target_calories);

    let protein = clamp_grams(
        "protein",
        round_to_i32(target_weight_kg * config.protein_g_per_kg_target),
    );
    let fat = clamp_grams(
        "fat",
        round_to_i32(calories * config.fat_share_of_calories / energy_density::KCAL_PER_GRAM_FAT),
    );
    let residual = f64::from(fat).mul_add(
        -energy_density::KCAL_PER_GRAM_FAT,
        f64::from(protein).mul_add(-energy_density::KCAL_PER_GRAM_PROTEIN, calories),
    );
    let carbs = clamp_grams(
        "carbs",
        round_to_i32(residual / energy_density::KCAL_PER_GRAM_CARBS),
    );

    MacroTargets {
        protein,
        carbs,
        fat,
    }
}

fn clamp_grams(macro_name: &'static str, grams: i32) -> i32 {
    if grams < 0 {
        warn!(
            macro_name,
            grams, "Negative macro target clamped to zero; calorie target too low"
        );
        return 0;
    }
    grams
}

/// Slice daily targets for one meal slot using the distribution table
#[must_use]
pub fn calculate_meal_targets(
    daily: &CalorieTargets,
    meal_type: MealType,
    config: &MealDistributionConfig,
) -> CalorieTargets {
    let share = config.share_for(meal_type);
    CalorieTargets {
        calories: round_to_i32(f64::from(daily.calories) * share.calories),
        protein: round_to_i32(f64::from(daily.protein) * share.protein),
        carbs: round_to_i32(f64::from(daily.carbs) * share.carbs),
        fat: round_to_i32(f64::from(daily.fat) * share.fat),
    }
}

/// Scale a food's per-100 g values to a portion
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `quantity` is negative or not finite
pub fn calculate_portion_nutrition(food: &Food, quantity: f64) -> AppResult<MacroTotals> {
    if !(quantity.is_finite() && quantity >= 0.0) {
        return Err(AppError::value_out_of_range(format!(
            "portion quantity must be a non-negative number, got {quantity}"
        )));
    }

    let scale = |per_100: f64| round_half_up(per_100 * quantity / portions::REFERENCE_PORTION_G);
    Ok(MacroTotals {
        calories: scale(food.calories_per_100g),
        protein: scale(food.protein_per_100g),
        carbs: scale(food.carbs_per_100g),
        fat: scale(food.fat_per_100g),
    })
}

/// Full daily pipeline for a profile
///
/// age → BMR → TDEE → workout bonus → target → macros (on target weight).
///
/// # Errors
///
/// Propagates errors from [`calculate_age`] and [`calculate_bmr`]
pub fn calculate_calorie_targets(
    profile: &UserProfile,
    workout_calories: f64,
    today: NaiveDate,
    config: &IntelligenceConfig<true>,
) -> AppResult<DailyTargets> {
    let nutrition = &config.nutrition;

    let age = calculate_age(profile.birth_date, today)?;
    let bmr = calculate_bmr(
        profile.current_weight_kg,
        profile.height_cm,
        age,
        profile.sex,
        &nutrition.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &nutrition.activity_factors);
    let workout_bonus = calculate_workout_bonus(workout_calories, &nutrition.calorie_target);
    let calories = calculate_daily_calorie_target(
        tdee,
        nutrition.calorie_target.deficit_kcal,
        workout_bonus,
    );
    let macros = calculate_macros(
        calories,
        profile.target_weight_kg,
        &nutrition.macronutrients,
    );

    debug!(
        user_id = %profile.id,
        age, bmr, tdee, workout_bonus, calories, "Calculated daily calorie targets"
    );

    Ok(DailyTargets {
        age,
        bmr,
        tdee,
        deficit: round_to_i32(nutrition.calorie_target.deficit_kcal),
        workout_bonus,
        targets: CalorieTargets::new(calories, macros),
    })
}

/// Whole kcal with `.` thousands separators from five digits up (es-ES style)
#[must_use]
pub fn format_calories(calories: f64) -> String {
    let rounded = round_half_up(calories) as i64;
    let digits = rounded.unsigned_abs().to_string();
    let sign = if rounded < 0 { "-" } else { "" };

    if digits.len() < 5 {
        return format!("{sign}{digits}");
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// Weight with one decimal
#[must_use]
pub fn format_weight(weight_kg: f64) -> String {
    format!("{weight_kg:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_grams_only_touches_negatives() {
        assert_eq!(clamp_grams("carbs", -12), 0);
        assert_eq!(clamp_grams("carbs", 0), 0);
        assert_eq!(clamp_grams("carbs", 42), 42);
    }

    #[test]
    fn test_format_calories_grouping() {
        assert_eq!(format_calories(2405.4), "2405");
        assert_eq!(format_calories(12_345.0), "12.345");
        assert_eq!(format_calories(1_234_567.0), "1.234.567");
        assert_eq!(format_calories(-15_000.0), "-15.000");
    }
}
