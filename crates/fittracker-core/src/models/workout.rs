// ABOUTME: Workout models covering predefined plan days, custom sessions, and cardio
// ABOUTME: WorkoutCategory, Intensity, PredefinedWorkout, CardioType, WorkoutKind, WorkoutEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Category of a custom workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutCategory {
    /// Resistance training
    Strength,
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    Hiit,
}

impl FromStr for WorkoutCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "hiit" => Ok(Self::Hiit),
            other => Err(AppError::invalid_argument(format!(
                "unknown workout type '{other}'"
            ))),
        }
    }
}

/// Perceived intensity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Easy effort
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_argument(format!(
                "unknown intensity '{other}'"
            ))),
        }
    }
}

/// Day of the four-day strength plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PredefinedWorkout {
    /// Day 1: chest, shoulders, triceps
    Push,
    /// Day 2: back, biceps
    Pull,
    /// Day 3: glutes, hamstrings, core
    Legs,
    /// Day 4: whole body
    FullBody,
}

impl PredefinedWorkout {
    /// Plan days in order
    pub const ALL: [Self; 4] = [Self::Push, Self::Pull, Self::Legs, Self::FullBody];

    /// Resolve a plan day from its 1-based id
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for ids outside 1..=4
    pub fn from_id(id: u32) -> AppResult<Self> {
        match id {
            1 => Ok(Self::Push),
            2 => Ok(Self::Pull),
            3 => Ok(Self::Legs),
            4 => Ok(Self::FullBody),
            other => Err(AppError::invalid_argument(format!(
                "unknown predefined workout id {other}"
            ))),
        }
    }

    /// Plan day that follows this one in the rotation
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Push => Self::Pull,
            Self::Pull => Self::Legs,
            Self::Legs => Self::FullBody,
            Self::FullBody => Self::Push,
        }
    }

    /// Display title of the plan day
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Push => "Day 1: Push",
            Self::Pull => "Day 2: Pull",
            Self::Legs => "Day 3: Legs",
            Self::FullBody => "Day 4: Full Body",
        }
    }
}

/// Specific cardio activity
///
/// Aliases accept the short codes used by the mobile client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardioType {
    /// Walking at ~5 km/h
    #[serde(alias = "walk")]
    Walking,
    /// Walking while pushing a stroller or carrying a load
    #[serde(alias = "walkVega")]
    WalkingWithLoad,
    /// Running at ~8 km/h
    #[serde(alias = "run")]
    Running,
    /// Moderate cycling
    #[serde(alias = "bike")]
    Cycling,
}

impl CardioType {
    /// Cardio types in display order
    pub const ALL: [Self; 4] = [
        Self::Walking,
        Self::WalkingWithLoad,
        Self::Running,
        Self::Cycling,
    ];

    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::WalkingWithLoad => "walking_with_load",
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }
}

impl fmt::Display for CardioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardioType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "walk" | "walking" => Ok(Self::Walking),
            "walkVega" | "walking_with_load" => Ok(Self::WalkingWithLoad),
            "run" | "running" => Ok(Self::Running),
            "bike" | "cycling" => Ok(Self::Cycling),
            other => Err(AppError::invalid_argument(format!(
                "unknown cardio type '{other}'"
            ))),
        }
    }
}

/// What kind of session a workout entry records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutKind {
    /// A day of the four-day plan
    Predefined {
        /// Plan day
        workout: PredefinedWorkout,
    },
    /// Free-form session
    Custom {
        /// Session category
        category: WorkoutCategory,
        /// Intensity tier
        intensity: Intensity,
    },
    /// Specific cardio activity
    Cardio {
        /// Cardio type
        cardio: CardioType,
    },
}

/// One logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Session kind
    pub kind: WorkoutKind,
    /// Duration in minutes
    pub duration_min: u32,
    /// Estimated kcal including afterburn
    pub calories_burned: f64,
    /// Steps credited by the session
    #[serde(default)]
    pub steps_added: u32,
    /// Log timestamp
    pub logged_at: DateTime<Utc>,
}
