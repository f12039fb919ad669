// ABOUTME: Nutrition tracking models for food intake analysis
// ABOUTME: MealType, Food, MealEntry, MacroTotals, DailyStats, and step/water log rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::food_tags;
use crate::errors::AppError;

/// Meal slot within a day
///
/// Aliases accept the backend's Spanish slot codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// First meal of the day
    #[serde(alias = "desayuno")]
    Breakfast,
    /// Mid-morning snack
    #[serde(alias = "media_manana")]
    MidMorning,
    /// Main midday meal
    #[serde(alias = "comida")]
    Lunch,
    /// Afternoon snack
    #[serde(alias = "merienda")]
    AfternoonSnack,
    /// Evening meal
    #[serde(alias = "cena")]
    Dinner,
}

impl MealType {
    /// All slots in chronological order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::MidMorning,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
    ];

    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MidMorning => "mid_morning",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon_snack",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "desayuno" => Ok(Self::Breakfast),
            "mid_morning" | "media_manana" => Ok(Self::MidMorning),
            "lunch" | "comida" => Ok(Self::Lunch),
            "afternoon_snack" | "snack" | "merienda" => Ok(Self::AfternoonSnack),
            "dinner" | "cena" => Ok(Self::Dinner),
            other => Err(AppError::invalid_argument(format!(
                "unknown meal type '{other}'"
            ))),
        }
    }
}

/// Food catalog row with macros per 100 g (or 100 ml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Catalog identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// kcal per 100 units
    #[serde(alias = "calories_per_100")]
    pub calories_per_100g: f64,
    /// Protein grams per 100 units
    #[serde(alias = "protein_per_100")]
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 units
    #[serde(alias = "carbs_per_100")]
    pub carbs_per_100g: f64,
    /// Fat grams per 100 units
    #[serde(alias = "fat_per_100")]
    pub fat_per_100g: f64,
    /// Unit label (g, ml)
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the user created this entry
    #[serde(default)]
    pub is_custom: bool,
    /// Owner of a custom food
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

fn default_unit() -> String {
    "g".to_owned()
}

impl Food {
    /// Case-insensitive tag lookup
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Vegetable by category or by tag
    #[must_use]
    pub fn is_vegetable(&self) -> bool {
        food_tags::VEGETABLE_CATEGORIES
            .iter()
            .any(|c| self.category.eq_ignore_ascii_case(c))
            || food_tags::VEGETABLE_TAGS.iter().any(|t| self.has_tag(t))
    }

    /// Tagged as processed food
    #[must_use]
    pub fn is_processed(&self) -> bool {
        food_tags::PROCESSED_TAGS.iter().any(|t| self.has_tag(t))
    }
}

/// Calories and macro grams of a food portion, meal, or day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// kcal
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a MacroTotals> for MacroTotals {
    fn sum<I: Iterator<Item = &'a MacroTotals>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// One logged food portion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Catalog food, if the entry came from the catalog
    #[serde(default)]
    pub food_id: Option<i64>,
    /// Meal slot
    pub meal_type: MealType,
    /// Denormalized food name
    #[serde(default)]
    pub food_name: Option<String>,
    /// Quantity in `unit`
    pub quantity: f64,
    /// Unit label
    #[serde(default = "default_unit")]
    pub unit: String,
    /// kcal
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Log timestamp
    pub logged_at: DateTime<Utc>,
}

impl MealEntry {
    /// Macro totals of this entry
    #[must_use]
    pub const fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

/// Step counter reading; the latest reading of a day wins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepsEntry {
    /// Owner
    pub user_id: Uuid,
    /// Cumulative steps at `logged_at`
    pub steps: u32,
    /// Reading timestamp
    pub logged_at: DateTime<Utc>,
}

/// Water intake reading; the latest reading of a day wins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaterEntry {
    /// Owner
    pub user_id: Uuid,
    /// Glasses drunk so far
    pub glasses: u32,
    /// Reading timestamp
    pub logged_at: DateTime<Utc>,
}

/// Aggregated figures for one day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyStats {
    /// Sum of meal kcal
    pub total_calories: f64,
    /// Sum of meal protein (g)
    pub total_protein: f64,
    /// Sum of meal carbohydrates (g)
    pub total_carbs: f64,
    /// Sum of meal fat (g)
    pub total_fat: f64,
    /// Sum of workout kcal
    pub workout_calories: f64,
    /// Latest step count
    pub steps: u32,
    /// Latest water glasses
    pub water_glasses: u32,
}

impl DailyStats {
    /// Meal totals as a [`MacroTotals`]
    #[must_use]
    pub const fn intake(&self) -> MacroTotals {
        MacroTotals {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fat: self.total_fat,
        }
    }
}
