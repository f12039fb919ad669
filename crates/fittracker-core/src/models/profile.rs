// ABOUTME: User profile model with biometric snapshot and activity level
// ABOUTME: ActivityLevel, Sex, UserProfile, and WeightEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Self-reported activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 4] = [Self::Sedentary, Self::Light, Self::Moderate, Self::Active];

    /// Wire name as stored by the backend
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            other => Err(AppError::invalid_argument(format!(
                "unknown activity level '{other}'"
            ))),
        }
    }
}

/// Biological sex for the BMR constant
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// +5 kcal constant
    #[default]
    Male,
    /// -161 kcal constant
    Female,
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_argument(format!("unknown sex '{other}'"))),
        }
    }
}

/// Profile snapshot as supplied by the profile store
///
/// Field aliases accept the backend's column names so rows can be
/// deserialized directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User identifier
    pub id: Uuid,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Height in centimeters
    pub height_cm: f64,
    /// Latest measured weight (kg)
    #[serde(alias = "current_weight")]
    pub current_weight_kg: f64,
    /// Weight when the user registered (kg)
    #[serde(alias = "start_weight")]
    pub start_weight_kg: f64,
    /// Goal weight (kg)
    #[serde(alias = "target_weight")]
    pub target_weight_kg: f64,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
    /// Sex for the BMR constant
    #[serde(default)]
    pub sex: Sex,
}

impl UserProfile {
    /// Kilograms lost since registration (negative when weight was gained)
    #[must_use]
    pub fn weight_lost_kg(&self) -> f64 {
        self.start_weight_kg - self.current_weight_kg
    }
}

/// One weight measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Owner
    pub user_id: Uuid,
    /// Measured weight (kg)
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    /// Measurement timestamp
    pub measured_at: DateTime<Utc>,
}
