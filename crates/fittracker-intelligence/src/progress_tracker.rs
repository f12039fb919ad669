// ABOUTME: Progress signals for display: weight progress, macro and step percentages, weekly view
// ABOUTME: Guards every division so degenerate inputs fail instead of producing NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Progress Tracker Module
//!
//! All percentages are whole numbers clamped to `0..=100`.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fittracker_core::errors::{AppError, AppResult};
use fittracker_core::models::WorkoutEntry;
use serde::{Deserialize, Serialize};

use crate::rounding::round_to_i32;

/// Days shown in the weekly calendar (today and the six before)
pub const WEEK_DAYS: u64 = 7;

/// One cell of the weekly calendar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Monday-first day letter (L M X J V S D)
    pub letter: char,
    /// At least one workout logged that day
    pub has_workout: bool,
    /// Whether this cell is today
    pub is_today: bool,
}

/// Workout totals over the calendar window
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// Number of workouts
    pub count: usize,
    /// Sum of kcal burned
    pub calories: f64,
}

fn clamp_percent(value: f64) -> i32 {
    round_to_i32(value).clamp(0, 100)
}

/// Share of the planned weight change already achieved
///
/// Formula: `clamp(round((start - current) / (start - target) x 100), 0, 100)`
///
/// # Errors
///
/// Returns `DegenerateInput` when start equals target or an input is not finite
pub fn calculate_weight_progress(
    start_weight_kg: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
) -> AppResult<i32> {
    let total_change = start_weight_kg - target_weight_kg;
    if !current_weight_kg.is_finite()
        || !total_change.is_finite()
        || total_change.abs() < f64::EPSILON
    {
        return Err(AppError::degenerate_input(format!(
            "weight progress undefined for start {start_weight_kg} kg and target {target_weight_kg} kg"
        )));
    }

    let achieved = start_weight_kg - current_weight_kg;
    Ok(clamp_percent(achieved / total_change * 100.0))
}

/// Intake as a percentage of its target
///
/// # Errors
///
/// Returns `DegenerateInput` when `target` is not positive
pub fn calculate_macro_percentage(current: f64, target: f64) -> AppResult<i32> {
    if !(target.is_finite() && target > 0.0) {
        return Err(AppError::degenerate_input(format!(
            "percentage of a non-positive target ({target})"
        )));
    }
    if !current.is_finite() {
        return Err(AppError::degenerate_input("current intake is not a number"));
    }
    Ok(clamp_percent(current / target * 100.0))
}

/// Steps as a percentage of the daily goal
///
/// # Errors
///
/// Returns `DegenerateInput` when `goal` is zero
pub fn calculate_steps_progress(steps: u32, goal: u32) -> AppResult<i32> {
    if goal == 0 {
        return Err(AppError::degenerate_input("step goal is zero"));
    }
    Ok(clamp_percent(f64::from(steps) / f64::from(goal) * 100.0))
}

/// kcal left for the day (negative when over target)
#[must_use]
pub fn calories_remaining(target_calories: i32, consumed: f64) -> i32 {
    round_to_i32(f64::from(target_calories) - consumed)
}

/// Monday-first Spanish day initial
#[must_use]
pub const fn day_letter(weekday: Weekday) -> char {
    match weekday {
        Weekday::Mon => 'L',
        Weekday::Tue => 'M',
        Weekday::Wed => 'X',
        Weekday::Thu => 'J',
        Weekday::Fri => 'V',
        Weekday::Sat => 'S',
        Weekday::Sun => 'D',
    }
}

fn window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(WEEK_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Seven cells from six days ago to today, oldest first
#[must_use]
pub fn build_weekly_calendar(today: NaiveDate, workout_dates: &[NaiveDate]) -> Vec<CalendarDay> {
    window_start(today)
        .iter_days()
        .take_while(|date| *date <= today)
        .map(|date| CalendarDay {
            date,
            letter: day_letter(date.weekday()),
            has_workout: workout_dates.contains(&date),
            is_today: date == today,
        })
        .collect()
}

/// Count and kcal of the workouts inside the calendar window ending `today`
#[must_use]
pub fn summarize_week(workouts: &[WorkoutEntry], today: NaiveDate) -> WeeklySummary {
    let start = window_start(today);
    workouts
        .iter()
        .filter(|w| (start..=today).contains(&w.logged_at.date_naive()))
        .fold(WeeklySummary::default(), |acc, w| WeeklySummary {
            count: acc.count + 1,
            calories: acc.calories + w.calories_burned,
        })
}
