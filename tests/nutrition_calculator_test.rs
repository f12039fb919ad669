// ABOUTME: Integration tests for the daily target pipeline and food portions
// ABOUTME: Covers age, BMR, TDEE, calorie target, macro split, meal slices, and portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker
//! Nutrition calculator tests
//!
//! Reference user: male, 102.4 kg, 180 cm, 43 years, moderate activity,
//! 84 kg target. BMR 1939, TDEE 3005, target 2405 on a rest day.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittracker::errors::ErrorCode;
use fittracker::intelligence::nutrition_calculator::{
    calculate_age, calculate_bmr, calculate_calorie_targets, calculate_daily_calorie_target,
    calculate_macros, calculate_meal_targets, calculate_portion_nutrition, calculate_tdee,
    calculate_workout_bonus, format_weight, CalorieTargets,
};
use fittracker::models::{ActivityLevel, MealType, Sex};

mod common;

// ============================================================================
// AGE
// ============================================================================

#[test]
fn test_age_after_birthday() {
    assert_eq!(
        calculate_age(common::date(1982, 1, 15), common::today()).unwrap(),
        43
    );
}

#[test]
fn test_age_before_birthday_subtracts_one() {
    let birth = common::date(1982, 1, 15);
    assert_eq!(calculate_age(birth, common::date(2025, 1, 14)).unwrap(), 42);
    assert_eq!(calculate_age(birth, common::date(2025, 1, 15)).unwrap(), 43);
}

#[test]
fn test_age_future_birth_date_rejected() {
    let err = calculate_age(common::date(2030, 1, 1), common::today()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// BMR / TDEE
// ============================================================================

#[test]
fn test_bmr_male_reference_user() {
    let config = common::test_config();
    let bmr = calculate_bmr(102.4, 180.0, 43, Sex::Male, &config.nutrition.bmr).unwrap();
    // 1024 + 1125 - 215 + 5
    assert_eq!(bmr, 1939);
}

#[test]
fn test_bmr_female_uses_negative_constant() {
    let config = common::test_config();
    let bmr = calculate_bmr(70.0, 165.0, 30, Sex::Female, &config.nutrition.bmr).unwrap();
    // 700 + 1031.25 - 150 - 161 = 1420.25
    assert_eq!(bmr, 1420);
}

#[test]
fn test_bmr_rejects_non_positive_weight() {
    let config = common::test_config();
    let err = calculate_bmr(0.0, 180.0, 43, Sex::Male, &config.nutrition.bmr).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = calculate_bmr(80.0, f64::NAN, 43, Sex::Male, &config.nutrition.bmr).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_bmr_is_monotonic() {
    let bmr = common::test_config().nutrition.bmr;
    for sex in [Sex::Male, Sex::Female] {
        let by_weight: Vec<i32> = (40..=160)
            .step_by(10)
            .map(|w| calculate_bmr(f64::from(w), 175.0, 40, sex, &bmr).unwrap())
            .collect();
        assert!(by_weight.windows(2).all(|w| w[0] < w[1]), "{by_weight:?}");

        let by_height: Vec<i32> = (140..=210)
            .step_by(10)
            .map(|h| calculate_bmr(80.0, f64::from(h), 40, sex, &bmr).unwrap())
            .collect();
        assert!(by_height.windows(2).all(|w| w[0] < w[1]), "{by_height:?}");

        let by_age: Vec<i32> = (18..=90)
            .step_by(4)
            .map(|age| calculate_bmr(80.0, 175.0, age, sex, &bmr).unwrap())
            .collect();
        assert!(by_age.windows(2).all(|w| w[0] > w[1]), "{by_age:?}");
    }
}

#[test]
fn test_tdee_per_activity_level() {
    let factors = common::test_config().nutrition.activity_factors;
    assert_eq!(calculate_tdee(1939, ActivityLevel::Moderate, &factors), 3005);
    assert_eq!(calculate_tdee(2000, ActivityLevel::Sedentary, &factors), 2400);
    assert_eq!(calculate_tdee(2000, ActivityLevel::Light, &factors), 2750);
    assert_eq!(calculate_tdee(2000, ActivityLevel::Active, &factors), 3450);
}

#[test]
fn test_tdee_is_monotonic_in_activity() {
    let factors = common::test_config().nutrition.activity_factors;
    let values: Vec<i32> = ActivityLevel::ALL
        .iter()
        .map(|level| calculate_tdee(1800, *level, &factors))
        .collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
}

// ============================================================================
// CALORIE TARGET
// ============================================================================

#[test]
fn test_workout_bonus_is_half_of_burn() {
    let policy = common::test_config().nutrition.calorie_target;
    assert_eq!(calculate_workout_bonus(516.0, &policy), 258);
    assert_eq!(calculate_workout_bonus(0.0, &policy), 0);
    assert_eq!(calculate_workout_bonus(301.0, &policy), 151);
}

#[test]
fn test_daily_target_subtracts_deficit_and_adds_bonus() {
    assert_eq!(calculate_daily_calorie_target(3005, 600.0, 0), 2405);
    assert_eq!(calculate_daily_calorie_target(3005, 600.0, 258), 2663);
}

#[test]
fn test_daily_target_is_not_clamped() {
    assert_eq!(calculate_daily_calorie_target(500, 600.0, 0), -100);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn test_macros_reference_split() {
    let config = common::test_config().nutrition.macronutrients;
    let macros = calculate_macros(2405, 84.0, &config);
    assert_eq!(macros.protein, 168);
    assert_eq!(macros.fat, 67);
    assert_eq!(macros.carbs, 283);
}

#[test]
fn test_macros_energy_closure() {
    let config = common::test_config().nutrition.macronutrients;
    // Targets above ~900 kcal keep carbs positive for an 84 kg goal
    for target in (1000..=4000).step_by(7) {
        let m = calculate_macros(target, 84.0, &config);
        let energy = m.protein * 4 + m.carbs * 4 + m.fat * 9;
        assert!(
            (energy - target).abs() <= 3,
            "target {target} reconstructed as {energy}"
        );
    }
}

#[test]
fn test_macros_clamp_negative_carbs() {
    let config = common::test_config().nutrition.macronutrients;
    let macros = calculate_macros(800, 84.0, &config);
    assert_eq!(macros.protein, 168);
    assert_eq!(macros.fat, 22);
    assert_eq!(macros.carbs, 0);
}

// ============================================================================
// FULL PIPELINE
// ============================================================================

#[test]
fn test_calorie_targets_rest_day() {
    common::init_test_logging();
    let config = common::test_config();
    let daily =
        calculate_calorie_targets(&common::sample_profile(), 0.0, common::today(), &config)
            .unwrap();

    assert_eq!(daily.age, 43);
    assert_eq!(daily.bmr, 1939);
    assert_eq!(daily.tdee, 3005);
    assert_eq!(daily.deficit, 600);
    assert_eq!(daily.workout_bonus, 0);
    assert_eq!(
        daily.targets,
        CalorieTargets {
            calories: 2405,
            protein: 168,
            carbs: 283,
            fat: 67,
        }
    );
}

#[test]
fn test_calorie_targets_training_day() {
    let config = common::test_config();
    let daily =
        calculate_calorie_targets(&common::sample_profile(), 516.0, common::today(), &config)
            .unwrap();

    assert_eq!(daily.workout_bonus, 258);
    assert_eq!(daily.targets.calories, 2663);
    assert_eq!(daily.targets.protein, 168);
    assert_eq!(daily.targets.fat, 74);
    assert_eq!(daily.targets.carbs, 331);
}

#[test]
fn test_calorie_targets_female_light() {
    let config = common::test_config();
    let mut profile = common::sample_profile();
    profile.sex = Sex::Female;
    profile.birth_date = common::date(1995, 1, 1);
    profile.current_weight_kg = 70.0;
    profile.height_cm = 165.0;
    profile.target_weight_kg = 60.0;
    profile.activity_level = ActivityLevel::Light;

    let daily = calculate_calorie_targets(&profile, 300.0, common::today(), &config).unwrap();
    assert_eq!(daily.bmr, 1420);
    assert_eq!(daily.tdee, 1953);
    assert_eq!(daily.targets.calories, 1503);
    assert_eq!(daily.targets.protein, 120);
    assert_eq!(daily.targets.fat, 42);
    assert_eq!(daily.targets.carbs, 161);
}

// ============================================================================
// MEAL SLICES AND PORTIONS
// ============================================================================

#[test]
fn test_meal_targets_follow_distribution() {
    let config = common::test_config();
    let daily = CalorieTargets {
        calories: 2405,
        protein: 168,
        carbs: 283,
        fat: 67,
    };
    let shares = &config.nutrition.meal_distribution;

    let breakfast = calculate_meal_targets(&daily, MealType::Breakfast, shares);
    assert_eq!(breakfast.calories, 601);
    assert_eq!(breakfast.protein, 34);
    assert_eq!(breakfast.carbs, 71);
    assert_eq!(breakfast.fat, 20);

    let lunch = calculate_meal_targets(&daily, MealType::Lunch, shares);
    assert_eq!(lunch.calories, 842);
    assert_eq!(lunch.protein, 59);
    assert_eq!(lunch.carbs, 113);

    let calories: i32 = MealType::ALL
        .iter()
        .map(|m| calculate_meal_targets(&daily, *m, shares).calories)
        .sum();
    assert!((calories - daily.calories).abs() <= 3);
}

#[test]
fn test_portion_nutrition_scales_per_100g() {
    let chicken = common::food(1, "Chicken breast", "proteinas", [165.0, 31.0, 0.0, 3.6], &[]);
    let totals = calculate_portion_nutrition(&chicken, 150.0).unwrap();
    assert!((totals.calories - 248.0).abs() < f64::EPSILON);
    assert!((totals.protein - 47.0).abs() < f64::EPSILON);
    assert!(totals.carbs.abs() < f64::EPSILON);
    assert!((totals.fat - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_portion_nutrition_rejects_negative_quantity() {
    let rice = common::food(2, "Rice", "cereales", [130.0, 2.7, 28.0, 0.3], &[]);
    let err = calculate_portion_nutrition(&rice, -10.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert!(calculate_portion_nutrition(&rice, 0.0).is_ok());
}

#[test]
fn test_format_weight_one_decimal() {
    assert_eq!(format_weight(102.44), "102.4");
    assert_eq!(format_weight(84.0), "84.0");
}
