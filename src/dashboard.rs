// ABOUTME: Daily dashboard snapshot combining targets, progress, and energy balance
// ABOUTME: Pure snapshot builder plus the async loader that reads a day from the stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Dashboard
//!
//! [`DashboardSnapshot::build`] is pure: it takes the profile, the reduced
//! [`DailyStats`], and the week's workouts. [`load_dashboard`] fetches those
//! from any store implementing [`ProfileStore`] and [`DailyLogStore`].

use chrono::{Days, NaiveDate};
use fittracker_core::errors::{AppError, AppResult};
use fittracker_core::models::{DailyStats, Food, UserProfile, WorkoutEntry};
use fittracker_intelligence::progress_tracker::WEEK_DAYS;
use fittracker_intelligence::workout_calculator::{suggest_next_workout, NextWorkout};
use fittracker_intelligence::{
    build_weekly_calendar, calculate_calorie_targets, calculate_macro_percentage,
    calculate_steps_progress, calculate_weight_progress, calories_remaining,
    classify_energy_balance, suggest_meal_margin, summarize_week, BalanceClassification,
    CalendarDay, DailySuggestion, DailyTargets, IntelligenceConfig, MealMargin,
    MealRecommendationEngine, WeeklySummary,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::data_source::{aggregate_daily_stats, DailyLogStore, ProfileStore};
use crate::logging::AppLogger;

/// Percentage of each daily macro target already eaten
///
/// `None` when the target is zero.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MacroProgress {
    /// Calories eaten vs target
    pub calories: Option<i32>,
    /// Protein eaten vs target
    pub protein: Option<i32>,
    /// Carbohydrates eaten vs target
    pub carbs: Option<i32>,
    /// Fat eaten vs target
    pub fat: Option<i32>,
}

/// Everything the home screen shows for one day
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Owner
    pub user_id: Uuid,
    /// Day the snapshot describes
    pub date: NaiveDate,
    /// Daily targets with intermediate values
    pub targets: DailyTargets,
    /// Reduced figures of the day
    pub stats: DailyStats,
    /// Weight goal progress; `None` when start and target weights coincide
    pub weight_progress: Option<i32>,
    /// Kilograms lost since registration
    pub weight_lost_kg: f64,
    /// Macro progress against today's targets
    pub macros: MacroProgress,
    /// Step goal progress
    pub steps_progress: Option<i32>,
    /// kcal left for the day
    pub calories_remaining: i32,
    /// Net-calorie semaphore
    pub balance: BalanceClassification,
    /// Human-readable balance summary
    pub balance_message: String,
    /// Size suggestion for the next meal
    pub meal_margin: MealMargin,
    /// Gap-driven daily suggestions
    pub suggestions: Vec<DailySuggestion>,
    /// Seven-day workout calendar
    pub calendar: Vec<CalendarDay>,
    /// Workout count and kcal over the calendar window
    pub week: WeeklySummary,
    /// Next day of the strength plan
    pub next_workout: NextWorkout,
}

impl DashboardSnapshot {
    /// Build the snapshot for `today`
    ///
    /// `week_workouts` covers the seven days ending on `today`; the workout
    /// bonus uses `stats.workout_calories`.
    ///
    /// # Errors
    ///
    /// Propagates profile errors from the daily target pipeline and rejects
    /// non-finite daily totals
    pub fn build(
        profile: &UserProfile,
        stats: DailyStats,
        week_workouts: &[WorkoutEntry],
        has_vegetables: bool,
        today: NaiveDate,
        config: &IntelligenceConfig<true>,
    ) -> AppResult<Self> {
        let targets = calculate_calorie_targets(profile, stats.workout_calories, today, config)?;
        let daily = targets.targets;

        let balance = classify_energy_balance(
            stats.total_calories,
            stats.workout_calories,
            stats.steps,
            daily.calories,
            &config.balance,
        )?;
        let meal_margin = suggest_meal_margin(daily.calories, balance.net_calories, &config.balance);

        let macros = MacroProgress {
            calories: calculate_macro_percentage(stats.total_calories, f64::from(daily.calories))
                .ok(),
            protein: calculate_macro_percentage(stats.total_protein, f64::from(daily.protein))
                .ok(),
            carbs: calculate_macro_percentage(stats.total_carbs, f64::from(daily.carbs)).ok(),
            fat: calculate_macro_percentage(stats.total_fat, f64::from(daily.fat)).ok(),
        };

        let weight_progress = match calculate_weight_progress(
            profile.start_weight_kg,
            profile.current_weight_kg,
            profile.target_weight_kg,
        ) {
            Ok(percent) => Some(percent),
            Err(e) => {
                debug!(user_id = %profile.id, error = %e, "Weight progress undefined");
                None
            }
        };

        let suggestions = MealRecommendationEngine::new(&config.recommendation).daily_suggestions(
            &stats.intake(),
            &daily,
            has_vegetables,
        );

        let workout_dates: Vec<NaiveDate> = week_workouts
            .iter()
            .map(|w| w.logged_at.date_naive())
            .collect();

        Ok(Self {
            user_id: profile.id,
            date: today,
            targets,
            stats,
            weight_progress,
            weight_lost_kg: profile.weight_lost_kg(),
            macros,
            steps_progress: calculate_steps_progress(stats.steps, config.balance.daily_step_goal)
                .ok(),
            calories_remaining: calories_remaining(daily.calories, stats.total_calories),
            balance_message: balance.message(),
            balance,
            meal_margin,
            suggestions,
            calendar: build_weekly_calendar(today, &workout_dates),
            week: summarize_week(week_workouts, today),
            next_workout: suggest_next_workout(week_workouts),
        })
    }
}

/// Read one day from the stores and build its snapshot
///
/// # Errors
///
/// Returns `ResourceNotFound` when the profile does not exist, and propagates
/// store and calculation errors
pub async fn load_dashboard<S>(
    store: &S,
    user_id: Uuid,
    today: NaiveDate,
    config: &IntelligenceConfig<true>,
) -> AppResult<DashboardSnapshot>
where
    S: ProfileStore + DailyLogStore,
{
    let profile = store
        .get_profile(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;

    let week_start = today
        .checked_sub_days(Days::new(WEEK_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);

    let meals = store.meal_entries(user_id, today).await?;
    let week_workouts = store.workout_entries(user_id, week_start, today).await?;
    let steps = store.latest_steps(user_id, today).await?;
    let water = store.latest_water(user_id, today).await?;

    let food_ids: Vec<i64> = meals.iter().filter_map(|m| m.food_id).collect();
    let has_vegetables = store
        .foods(&food_ids)
        .await?
        .iter()
        .any(Food::is_vegetable);

    let todays_workouts: Vec<WorkoutEntry> = week_workouts
        .iter()
        .filter(|w| w.logged_at.date_naive() == today)
        .cloned()
        .collect();
    let stats = aggregate_daily_stats(&meals, &todays_workouts, steps.as_ref(), water.as_ref());

    let snapshot = DashboardSnapshot::build(
        &profile,
        stats,
        &week_workouts,
        has_vegetables,
        today,
        config,
    )?;

    AppLogger::log_dashboard(
        &user_id.to_string(),
        snapshot.targets.targets.calories,
        snapshot.balance.status.as_str(),
    );

    Ok(snapshot)
}
