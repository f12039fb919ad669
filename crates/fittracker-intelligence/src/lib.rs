// ABOUTME: Nutrition and energy-balance calculation engine for FitTracker
// ABOUTME: Pure functions turning a profile and a day's log into targets, estimates, and signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![deny(unsafe_code)]

//! # FitTracker Intelligence
//!
//! Stateless calculators over scalar inputs. Every function takes the
//! relevant slice of [`config::IntelligenceConfig`] by reference, so callers
//! can inject tuned tables; [`config::IntelligenceConfig::global`] holds the
//! defaults plus environment overrides.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, calorie target, macro split, meal slices
//! - **`workout_calculator`**: MET/EPOC burn estimates and step credit
//! - **`progress_tracker`**: Weight, macro, and step percentages; weekly calendar
//! - **`energy_balance`**: Net-calorie semaphore and meal margin
//! - **`recommendation_engine`**: Meal rules and daily gap suggestions

/// Calculation tables and their loader
pub mod config;

/// Net-calorie semaphore and next-meal margin
pub mod energy_balance;

/// Metabolic targets and food portions
pub mod nutrition_calculator;

/// Physical constants used by the calculators
pub mod physiological_constants;

/// Progress percentages and the weekly calendar
pub mod progress_tracker;

/// Meal recommendations and daily suggestions
pub mod recommendation_engine;

/// Half-up rounding
pub mod rounding;

/// Workout energy estimates
pub mod workout_calculator;

pub use config::{ConfigError, IntelligenceConfig};
pub use energy_balance::{
    classify_energy_balance, suggest_meal_margin, BalanceClassification, BalanceDirection,
    BalanceStatus, MealMargin, MealMarginCategory,
};
pub use nutrition_calculator::{
    calculate_age, calculate_bmr, calculate_calorie_targets, calculate_daily_calorie_target,
    calculate_macros, calculate_meal_targets, calculate_portion_nutrition, calculate_tdee,
    calculate_workout_bonus, CalorieTargets, DailyTargets, MacroTargets,
};
pub use progress_tracker::{
    build_weekly_calendar, calculate_macro_percentage, calculate_steps_progress,
    calculate_weight_progress, calories_remaining, summarize_week, CalendarDay, WeeklySummary,
};
pub use recommendation_engine::{
    DailySuggestion, MealRecommendationEngine, PendingFood, Recommendation, Severity,
};
pub use workout_calculator::{
    calculate_calories_burned, calculate_cardio_calories, calculate_custom_workout_calories,
    calculate_predefined_workout_calories, calculate_steps_added, decompose_calories,
    CaloriesBreakdown, NextWorkout, WorkoutEstimate,
};
