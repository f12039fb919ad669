// ABOUTME: Data-source seam describing the hosted backend the calculators read from
// ABOUTME: Async ProfileStore and DailyLogStore traits, an in-memory store, and the daily reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Backend boundary
//!
//! The calculation engine never talks to the backend; callers fetch rows
//! through these traits and hand scalars to the engine. [`InMemoryStore`]
//! backs tests and the CLI.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::NaiveDate;
use fittracker_core::errors::{AppError, AppResult};
use fittracker_core::models::{
    DailyStats, Food, MacroTotals, MealEntry, StepsEntry, UserProfile, WaterEntry, WeightEntry,
    WorkoutEntry,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::logging::AppLogger;

/// Profile and weight history access
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Get a user's profile
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Record a weight measurement and make it the profile's current weight
    async fn insert_weight(&self, entry: WeightEntry) -> AppResult<()>;

    /// Weight history, oldest first
    async fn weight_history(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>>;
}

/// Per-day log access
#[async_trait]
pub trait DailyLogStore: Send + Sync {
    /// Meal entries logged on `date`
    async fn meal_entries(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>>;

    /// Workout entries logged between `from` and `to`, both inclusive
    async fn workout_entries(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<WorkoutEntry>>;

    /// Latest step reading of `date`
    async fn latest_steps(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<StepsEntry>>;

    /// Latest water reading of `date`
    async fn latest_water(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<WaterEntry>>;

    /// Catalog foods with the given ids; unknown ids are skipped
    async fn foods(&self, ids: &[i64]) -> AppResult<Vec<Food>>;

    /// Add or replace a catalog food
    async fn insert_food(&self, food: Food) -> AppResult<()>;

    /// Record a meal entry
    async fn insert_meal(&self, entry: MealEntry) -> AppResult<()>;

    /// Record a workout entry
    async fn insert_workout(&self, entry: WorkoutEntry) -> AppResult<()>;

    /// Record a step reading
    async fn insert_steps(&self, entry: StepsEntry) -> AppResult<()>;

    /// Record a water reading
    async fn insert_water(&self, entry: WaterEntry) -> AppResult<()>;
}

/// Sum the day's meals and workouts into [`DailyStats`]
///
/// Steps and water come from the latest readings; missing readings count as zero.
#[must_use]
pub fn aggregate_daily_stats(
    meals: &[MealEntry],
    workouts: &[WorkoutEntry],
    steps: Option<&StepsEntry>,
    water: Option<&WaterEntry>,
) -> DailyStats {
    let intake: MacroTotals = meals.iter().map(MealEntry::totals).sum();

    DailyStats {
        total_calories: intake.calories,
        total_protein: intake.protein,
        total_carbs: intake.carbs,
        total_fat: intake.fat,
        workout_calories: workouts.iter().map(|w| w.calories_burned).sum(),
        steps: steps.map_or(0, |s| s.steps),
        water_glasses: water.map_or(0, |w| w.glasses),
    }
}

/// Everything needed to compute one day for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLog {
    /// Profile snapshot
    pub profile: UserProfile,
    /// Meals of the day
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    /// Workouts of the seven days ending on the day
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    /// Latest step reading
    #[serde(default)]
    pub steps: Option<StepsEntry>,
    /// Latest water reading
    #[serde(default)]
    pub water: Option<WaterEntry>,
    /// Catalog rows referenced by `meals`
    #[serde(default)]
    pub foods: Vec<Food>,
}

#[derive(Debug, Default)]
struct StoreState {
    profiles: HashMap<Uuid, UserProfile>,
    foods: HashMap<i64, Food>,
    weights: Vec<WeightEntry>,
    meals: Vec<MealEntry>,
    workouts: Vec<WorkoutEntry>,
    steps: Vec<StepsEntry>,
    water: Vec<WaterEntry>,
}

/// Thread-safe in-memory store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile
    pub async fn upsert_profile(&self, profile: UserProfile) {
        let mut state = self.state.write().await;
        state.profiles.insert(profile.id, profile);
    }

    /// Load a whole day log (profile plus rows)
    pub async fn import_day(&self, log: DayLog) {
        let mut state = self.state.write().await;
        state.profiles.insert(log.profile.id, log.profile);
        state.meals.extend(log.meals);
        state.workouts.extend(log.workouts);
        state.steps.extend(log.steps);
        state.water.extend(log.water);
        state
            .foods
            .extend(log.foods.into_iter().map(|food| (food.id, food)));
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        let start = Instant::now();
        let profile = self.state.read().await.profiles.get(&user_id).cloned();
        AppLogger::log_store_operation(
            "get_profile",
            &user_id.to_string(),
            profile.is_some(),
            elapsed_ms(start),
        );
        Ok(profile)
    }

    async fn insert_weight(&self, entry: WeightEntry) -> AppResult<()> {
        if !(entry.weight_kg.is_finite() && entry.weight_kg > 0.0) {
            return Err(AppError::value_out_of_range("Weight must be positive"));
        }

        let mut state = self.state.write().await;
        let profile = state
            .profiles
            .get_mut(&entry.user_id)
            .ok_or_else(|| AppError::not_found(format!("User {}", entry.user_id)))?;
        profile.current_weight_kg = entry.weight_kg;
        state.weights.push(entry);
        Ok(())
    }

    async fn weight_history(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        let mut history: Vec<WeightEntry> = self
            .state
            .read()
            .await
            .weights
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by_key(|w| w.measured_at);
        Ok(history)
    }
}

#[async_trait]
impl DailyLogStore for InMemoryStore {
    async fn meal_entries(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>> {
        let start = Instant::now();
        let meals: Vec<MealEntry> = self
            .state
            .read()
            .await
            .meals
            .iter()
            .filter(|m| m.user_id == user_id && m.logged_at.date_naive() == date)
            .cloned()
            .collect();
        AppLogger::log_store_operation(
            "meal_entries",
            &user_id.to_string(),
            true,
            elapsed_ms(start),
        );
        Ok(meals)
    }

    async fn workout_entries(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<WorkoutEntry>> {
        if from > to {
            return Err(AppError::invalid_argument(format!(
                "workout range starts after it ends ({from} > {to})"
            )));
        }
        let state = self.state.read().await;
        Ok(state
            .workouts
            .iter()
            .filter(|w| w.user_id == user_id && (from..=to).contains(&w.logged_at.date_naive()))
            .cloned()
            .collect())
    }

    async fn latest_steps(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<StepsEntry>> {
        let state = self.state.read().await;
        Ok(state
            .steps
            .iter()
            .filter(|s| s.user_id == user_id && s.logged_at.date_naive() == date)
            .max_by_key(|s| s.logged_at)
            .cloned())
    }

    async fn latest_water(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Option<WaterEntry>> {
        let state = self.state.read().await;
        Ok(state
            .water
            .iter()
            .filter(|w| w.user_id == user_id && w.logged_at.date_naive() == date)
            .max_by_key(|w| w.logged_at)
            .cloned())
    }

    async fn foods(&self, ids: &[i64]) -> AppResult<Vec<Food>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.foods.get(id))
            .cloned()
            .collect())
    }

    async fn insert_food(&self, food: Food) -> AppResult<()> {
        self.state.write().await.foods.insert(food.id, food);
        Ok(())
    }

    async fn insert_meal(&self, entry: MealEntry) -> AppResult<()> {
        if !(is_non_negative(entry.quantity) && is_non_negative(entry.calories)) {
            return Err(AppError::value_out_of_range(
                "Meal quantity and calories must not be negative",
            ));
        }
        self.state.write().await.meals.push(entry);
        Ok(())
    }

    async fn insert_workout(&self, entry: WorkoutEntry) -> AppResult<()> {
        if !is_non_negative(entry.calories_burned) {
            return Err(AppError::value_out_of_range(format!(
                "Workout calories must not be negative, got {}",
                entry.calories_burned
            )));
        }
        self.state.write().await.workouts.push(entry);
        Ok(())
    }

    async fn insert_steps(&self, entry: StepsEntry) -> AppResult<()> {
        self.state.write().await.steps.push(entry);
        Ok(())
    }

    async fn insert_water(&self, entry: WaterEntry) -> AppResult<()> {
        self.state.write().await.water.push(entry);
        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
