// ABOUTME: Workout energy configuration with MET and EPOC lookup tables
// ABOUTME: Covers custom category x intensity, predefined plan days, cardio types, and step cadence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Workout Energy Configuration
//!
//! MET values follow the Compendium of Physical Activities; EPOC multipliers
//! are coached assumptions for the afterburn surcharge on top of the
//! in-session burn.
//!
//! # Scientific References
//!
//! - Ainsworth et al. (2011) Compendium of Physical Activities,
//!   DOI: 10.1249/MSS.0b013e31821ece12
//! - `LaForgia` et al. (2006) Effects of exercise intensity and duration on EPOC,
//!   DOI: 10.1080/02640410500457109

use fittracker_core::models::{CardioType, Intensity, PredefinedWorkout, WorkoutCategory};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// MET value and afterburn multiplier for one activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityCost {
    /// Metabolic equivalent of the activity
    pub met: f64,
    /// Multiplier applied to the in-session burn (1.0 = no afterburn)
    pub epoc_multiplier: f64,
}

impl ActivityCost {
    /// Create an activity cost entry
    #[must_use]
    pub const fn new(met: f64, epoc_multiplier: f64) -> Self {
        Self {
            met,
            epoc_multiplier,
        }
    }

    fn validate(&self, what: &'static str) -> Result<(), ConfigError> {
        if !(self.met.is_finite() && self.met > 0.0) {
            return Err(ConfigError::ValueOutOfRange(what));
        }
        if !(self.epoc_multiplier.is_finite() && self.epoc_multiplier >= 1.0) {
            return Err(ConfigError::ValueOutOfRange(what));
        }
        Ok(())
    }
}

/// Low / medium / high tiers of one workout category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntensityTable {
    /// Easy effort
    pub low: ActivityCost,
    /// Moderate effort
    pub medium: ActivityCost,
    /// Hard effort
    pub high: ActivityCost,
}

impl IntensityTable {
    /// Entry for an intensity tier
    #[must_use]
    pub const fn cost_for(&self, intensity: Intensity) -> ActivityCost {
        match intensity {
            Intensity::Low => self.low,
            Intensity::Medium => self.medium,
            Intensity::High => self.high,
        }
    }
}

/// Predefined four-day plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PredefinedTable {
    /// Day 1: 5.0 MET, 1.15 EPOC
    pub push: ActivityCost,
    /// Day 2: 5.0 MET, 1.15 EPOC
    pub pull: ActivityCost,
    /// Day 3: 6.0 MET, 1.20 EPOC
    pub legs: ActivityCost,
    /// Day 4: 5.5 MET, 1.18 EPOC
    pub full_body: ActivityCost,
}

impl PredefinedTable {
    /// Entry for a plan day
    #[must_use]
    pub const fn cost_for(&self, workout: PredefinedWorkout) -> ActivityCost {
        match workout {
            PredefinedWorkout::Push => self.push,
            PredefinedWorkout::Pull => self.pull,
            PredefinedWorkout::Legs => self.legs,
            PredefinedWorkout::FullBody => self.full_body,
        }
    }
}

/// Specific cardio activities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardioTable {
    /// Walking ~5 km/h: 3.5 MET, 1.05 EPOC
    pub walking: ActivityCost,
    /// Walking with a stroller or load: 3.0 MET, 1.03 EPOC
    pub walking_with_load: ActivityCost,
    /// Running ~8 km/h: 9.0 MET, 1.08 EPOC
    pub running: ActivityCost,
    /// Moderate cycling: 7.5 MET, 1.06 EPOC
    pub cycling: ActivityCost,
}

impl CardioTable {
    /// Entry for a cardio type
    #[must_use]
    pub const fn cost_for(&self, cardio: CardioType) -> ActivityCost {
        match cardio {
            CardioType::Walking => self.walking,
            CardioType::WalkingWithLoad => self.walking_with_load,
            CardioType::Running => self.running,
            CardioType::Cycling => self.cycling,
        }
    }
}

/// Step cadence credited per minute of cardio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StepsPerMinuteConfig {
    /// Walking: 100
    pub walking: u32,
    /// Walking with load: 90
    pub walking_with_load: u32,
    /// Running: 160
    pub running: u32,
    /// Cycling: 0
    pub cycling: u32,
}

impl StepsPerMinuteConfig {
    /// Cadence for a cardio type
    #[must_use]
    pub const fn cadence_for(&self, cardio: CardioType) -> u32 {
        match cardio {
            CardioType::Walking => self.walking,
            CardioType::WalkingWithLoad => self.walking_with_load,
            CardioType::Running => self.running,
            CardioType::Cycling => self.cycling,
        }
    }
}

/// Workout energy estimation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkoutConfig {
    /// Custom strength sessions
    pub strength: IntensityTable,
    /// Custom steady-state cardio sessions
    pub cardio: IntensityTable,
    /// Custom HIIT sessions
    pub hiit: IntensityTable,
    /// Four-day plan
    pub predefined: PredefinedTable,
    /// Specific cardio activities
    pub cardio_types: CardioTable,
    /// Step cadence per cardio type
    pub steps_per_minute: StepsPerMinuteConfig,
    /// Duration assumed for a plan day when none is given (40)
    pub default_predefined_duration_min: u32,
    /// Fall back to full-body / walking on unknown plan ids or cardio codes
    pub lenient_lookup: bool,
}

impl WorkoutConfig {
    /// Intensity table of a custom workout category
    #[must_use]
    pub const fn table_for(&self, category: WorkoutCategory) -> &IntensityTable {
        match category {
            WorkoutCategory::Strength => &self.strength,
            WorkoutCategory::Cardio => &self.cardio,
            WorkoutCategory::Hiit => &self.hiit,
        }
    }

    /// Validate every table entry
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when a MET is not positive or an
    /// EPOC multiplier is below 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (table, name) in [
            (&self.strength, "strength MET/EPOC entries out of range"),
            (&self.cardio, "cardio MET/EPOC entries out of range"),
            (&self.hiit, "hiit MET/EPOC entries out of range"),
        ] {
            for intensity in [Intensity::Low, Intensity::Medium, Intensity::High] {
                table.cost_for(intensity).validate(name)?;
            }
        }
        for workout in PredefinedWorkout::ALL {
            self.predefined
                .cost_for(workout)
                .validate("predefined MET/EPOC entries out of range")?;
        }
        for cardio in CardioType::ALL {
            self.cardio_types
                .cost_for(cardio)
                .validate("cardio type MET/EPOC entries out of range")?;
        }
        if self.default_predefined_duration_min == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default predefined duration must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            strength: IntensityTable {
                low: ActivityCost::new(3.5, 1.10),
                medium: ActivityCost::new(5.0, 1.15),
                high: ActivityCost::new(6.0, 1.20),
            },
            cardio: IntensityTable {
                low: ActivityCost::new(5.0, 1.05),
                medium: ActivityCost::new(7.0, 1.08),
                high: ActivityCost::new(9.0, 1.10),
            },
            hiit: IntensityTable {
                low: ActivityCost::new(8.0, 1.15),
                medium: ActivityCost::new(10.0, 1.20),
                high: ActivityCost::new(12.0, 1.25),
            },
            predefined: PredefinedTable::default(),
            cardio_types: CardioTable::default(),
            steps_per_minute: StepsPerMinuteConfig::default(),
            default_predefined_duration_min: 40,
            lenient_lookup: false,
        }
    }
}

impl Default for PredefinedTable {
    fn default() -> Self {
        Self {
            push: ActivityCost::new(5.0, 1.15),
            pull: ActivityCost::new(5.0, 1.15),
            legs: ActivityCost::new(6.0, 1.20),
            full_body: ActivityCost::new(5.5, 1.18),
        }
    }
}

impl Default for CardioTable {
    fn default() -> Self {
        Self {
            walking: ActivityCost::new(3.5, 1.05),
            walking_with_load: ActivityCost::new(3.0, 1.03),
            running: ActivityCost::new(9.0, 1.08),
            cycling: ActivityCost::new(7.5, 1.06),
        }
    }
}

impl Default for StepsPerMinuteConfig {
    fn default() -> Self {
        Self {
            walking: 100,
            walking_with_load: 90,
            running: 160,
            cycling: 0,
        }
    }
}
