// ABOUTME: Physical constants for energy density and MET conversion
// ABOUTME: Fixed facts of exercise physiology that the calculators share
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Physiological constants based on exercise physiology and nutrition science
//!
//! Values here are physical facts, not tunable policy; tunable tables live in
//! [`crate::config::intelligence`].

/// Energy density of macronutrients
///
/// Reference: Atwater general factors (USDA Handbook No. 74)
pub mod energy_density {
    /// kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// MET to energy conversion
///
/// kcal/min = MET x weight (kg) x 3.5 / 200
///
/// Reference: ACSM's Guidelines for Exercise Testing and Prescription, metabolic equations
pub mod met {
    /// Resting oxygen uptake in ml O2 per kg per minute (1 MET)
    pub const RESTING_O2_ML_PER_KG_MIN: f64 = 3.5;

    /// Divisor converting ml O2 x kg to kcal (5 kcal per litre O2, /1000 x 5 = /200)
    pub const O2_ML_TO_KCAL_DIVISOR: f64 = 200.0;
}

/// Food labelling conventions
pub mod portions {
    /// Catalog macros are stated per this many grams (or ml)
    pub const REFERENCE_PORTION_G: f64 = 100.0;
}
