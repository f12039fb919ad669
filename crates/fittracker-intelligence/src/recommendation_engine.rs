// ABOUTME: Rule-based meal recommendations and whole-day nutrition suggestions
// ABOUTME: Compares projected meal totals with the meal's target slice and flags gaps in the day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Meal recommendation engine
//!
//! Rules are independent threshold checks evaluated in a fixed order:
//! calories, protein, fat, carbohydrates, processed foods, vegetables.
//! A slot with nothing logged and nothing pending gets starter guidance
//! instead.

use fittracker_core::errors::AppResult;
use fittracker_core::models::{Food, MacroTotals, MealType};
use serde::Serialize;
use tracing::debug;

use crate::config::intelligence::{
    DailySuggestionThresholds, MealRuleThresholds, RecommendationConfig,
};
use crate::nutrition_calculator::{calculate_portion_nutrition, CalorieTargets};
use crate::rounding::round_to_i32;

/// Severity of a recommendation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Target met
    Success,
    /// Mild deviation
    Warning,
    /// Neutral guidance
    Info,
    /// Serious deviation
    Error,
}

/// One advisory line
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Severity
    pub severity: Severity,
    /// Emoji shown next to the message
    pub icon: &'static str,
    /// Message text
    pub message: String,
}

impl Recommendation {
    fn new(severity: Severity, icon: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            icon,
            message: message.into(),
        }
    }
}

/// Food about to be added to a meal, with its portion totals
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFood {
    /// Catalog food
    pub food: Food,
    /// Portion quantity in the food's unit
    pub quantity: f64,
    /// Portion totals
    pub totals: MacroTotals,
}

impl PendingFood {
    /// Scale `food` to `quantity` and keep both
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a negative quantity
    pub fn from_portion(food: Food, quantity: f64) -> AppResult<Self> {
        let totals = calculate_portion_nutrition(&food, quantity)?;
        Ok(Self {
            food,
            quantity,
            totals,
        })
    }
}

/// Whole-day gap suggestion with example foods
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DailySuggestion {
    /// Emoji
    pub icon: &'static str,
    /// Headline
    pub title: String,
    /// Example options
    pub options: Vec<&'static str>,
}

/// Rule-based recommendation engine
pub struct MealRecommendationEngine<'a> {
    config: &'a RecommendationConfig,
}

impl<'a> MealRecommendationEngine<'a> {
    /// Create an engine over a recommendation config
    #[must_use]
    pub const fn new(config: &'a RecommendationConfig) -> Self {
        Self { config }
    }

    /// Recommendations for a meal slot
    ///
    /// `logged` is what the slot already holds; `pending` is what the user is
    /// about to add. Rules compare `logged + pending` against `meal_targets`.
    #[must_use]
    pub fn analyze_meal(
        &self,
        meal_type: MealType,
        meal_targets: &CalorieTargets,
        logged: &MacroTotals,
        pending: &[PendingFood],
    ) -> Vec<Recommendation> {
        if pending.is_empty() && logged.calories.abs() < f64::EPSILON {
            return starter_guidance(meal_type, meal_targets);
        }

        let projected = *logged + pending.iter().map(|p| p.totals).sum::<MacroTotals>();
        let target = meal_targets.as_totals();
        let rules = &self.config.meal;

        let mut recs = Vec::new();
        recs.extend(calorie_rule(&projected, &target, rules));
        recs.extend(protein_rule(&projected, &target, rules));
        recs.extend(fat_rule(meal_type, &projected, &target, rules));
        recs.extend(carbs_rule(meal_type, &projected, &target, rules));

        if pending.iter().any(|p| p.food.is_processed()) {
            recs.push(Recommendation::new(
                Severity::Warning,
                "🍕",
                "Includes processed foods, natural options are a better choice",
            ));
        }

        let has_vegetables = pending.iter().any(|p| p.food.is_vegetable());
        if !has_vegetables
            && matches!(meal_type, MealType::Lunch | MealType::Dinner)
            && !pending.is_empty()
        {
            recs.push(Recommendation::new(
                Severity::Info,
                "🥬",
                "Add vegetables for more nutrients and fibre",
            ));
        }

        debug!(%meal_type, count = recs.len(), "Generated meal recommendations");
        recs
    }

    /// Whole-day suggestions from the gap between intake and daily targets
    #[must_use]
    pub fn daily_suggestions(
        &self,
        totals: &MacroTotals,
        targets: &CalorieTargets,
        has_vegetables: bool,
    ) -> Vec<DailySuggestion> {
        daily_gap_suggestions(totals, targets, has_vegetables, &self.config.daily)
    }
}

fn calorie_rule(
    projected: &MacroTotals,
    target: &MacroTotals,
    rules: &MealRuleThresholds,
) -> Option<Recommendation> {
    let over = round_to_i32(projected.calories - target.calories);
    if projected.calories > target.calories * rules.calorie_excess_ratio {
        Some(Recommendation::new(
            Severity::Error,
            "🚨",
            format!("{over} kcal over the target for this meal"),
        ))
    } else if projected.calories > target.calories {
        Some(Recommendation::new(
            Severity::Warning,
            "⚠️",
            format!("Slightly over: +{over} kcal"),
        ))
    } else if projected.calories >= target.calories * rules.calorie_on_target_ratio {
        Some(Recommendation::new(
            Severity::Success,
            "✅",
            format!(
                "Calories on target: {}/{} kcal",
                round_to_i32(projected.calories),
                target.calories
            ),
        ))
    } else {
        None
    }
}

fn protein_rule(
    projected: &MacroTotals,
    target: &MacroTotals,
    rules: &MealRuleThresholds,
) -> Option<Recommendation> {
    if projected.protein >= target.protein {
        Some(Recommendation::new(
            Severity::Success,
            "💪",
            format!(
                "Enough protein! {}g/{}g",
                round_to_i32(projected.protein),
                target.protein
            ),
        ))
    } else if projected.protein < target.protein * rules.protein_low_ratio {
        Some(Recommendation::new(
            Severity::Warning,
            "🥩",
            format!(
                "Protein is short: add {}g more",
                round_to_i32(target.protein - projected.protein)
            ),
        ))
    } else {
        None
    }
}

fn fat_rule(
    meal_type: MealType,
    projected: &MacroTotals,
    target: &MacroTotals,
    rules: &MealRuleThresholds,
) -> Option<Recommendation> {
    let fat = projected.fat;
    if fat >= target.fat * rules.fat_band_low_ratio && fat <= target.fat * rules.fat_band_high_ratio
    {
        Some(Recommendation::new(
            Severity::Success,
            "🥑",
            format!("Healthy fats OK: {}g", round_to_i32(fat)),
        ))
    } else if fat > target.fat * rules.fat_excess_ratio {
        Some(Recommendation::new(
            Severity::Warning,
            "⚠️",
            format!(
                "Too much fat: {}g (max {}g)",
                round_to_i32(fat),
                target.fat
            ),
        ))
    } else if fat < target.fat * rules.fat_low_ratio && meal_type == MealType::Breakfast {
        Some(Recommendation::new(
            Severity::Info,
            "🥜",
            "Add healthy fats: avocado, nuts, olive oil",
        ))
    } else {
        None
    }
}

fn carbs_rule(
    meal_type: MealType,
    projected: &MacroTotals,
    target: &MacroTotals,
    rules: &MealRuleThresholds,
) -> Option<Recommendation> {
    if projected.carbs < target.carbs * rules.carbs_low_ratio
        && matches!(meal_type, MealType::Breakfast | MealType::Lunch)
    {
        Some(Recommendation::new(
            Severity::Info,
            "🌾",
            "Consider adding carbohydrates: oats, brown rice, wholegrain bread",
        ))
    } else if projected.carbs > target.carbs * rules.carbs_excess_ratio {
        Some(Recommendation::new(
            Severity::Warning,
            "⚠️",
            format!("Lots of carbohydrates: {}g", round_to_i32(projected.carbs)),
        ))
    } else {
        None
    }
}

/// Guidance for an empty meal slot, quoting its targets
#[must_use]
pub fn starter_guidance(meal_type: MealType, meal_targets: &CalorieTargets) -> Vec<Recommendation> {
    let kcal = meal_targets.calories;
    let protein = meal_targets.protein;

    match meal_type {
        MealType::Breakfast => vec![
            Recommendation::new(
                Severity::Info,
                "💡",
                format!("Ideal breakfast: {kcal} kcal with {protein}g protein"),
            ),
            Recommendation::new(
                Severity::Info,
                "🥑",
                format!(
                    "Include {}g of healthy fats (avocado, nuts)",
                    meal_targets.fat
                ),
            ),
            Recommendation::new(
                Severity::Info,
                "🥚",
                "Recommended: eggs, Greek yoghurt, oats, fruit",
            ),
        ],
        MealType::Lunch => vec![
            Recommendation::new(
                Severity::Info,
                "💡",
                format!("Main meal: {kcal} kcal with {protein}g protein"),
            ),
            Recommendation::new(
                Severity::Info,
                "🥩",
                "Base: lean protein (chicken, fish, beef)",
            ),
            Recommendation::new(
                Severity::Info,
                "🥬",
                "Add: vegetables and complex carbohydrates (rice, wholegrain pasta)",
            ),
        ],
        MealType::Dinner => vec![
            Recommendation::new(
                Severity::Info,
                "💡",
                format!("Light dinner: {kcal} kcal with {protein}g protein"),
            ),
            Recommendation::new(
                Severity::Info,
                "🐟",
                "Ideal: fish or lean protein with vegetables",
            ),
            Recommendation::new(
                Severity::Info,
                "🌙",
                "Avoid: heavy carbohydrates at night",
            ),
        ],
        MealType::MidMorning | MealType::AfternoonSnack => vec![
            Recommendation::new(
                Severity::Info,
                "🍎",
                format!("Snack: {kcal} kcal with {protein}g protein"),
            ),
            Recommendation::new(
                Severity::Info,
                "🥜",
                "Options: fruit, yoghurt, nuts (small portion)",
            ),
        ],
    }
}

/// Whole-day gap suggestions
///
/// - protein gap above 30 g: protein foods
/// - kcal gap above 300 with protein gap below 20 g: calorie-dense foods
/// - no vegetables after 500 kcal: vegetables
/// - fat above 80 % of the daily target: fat warning
#[must_use]
pub fn daily_gap_suggestions(
    totals: &MacroTotals,
    targets: &CalorieTargets,
    has_vegetables: bool,
    thresholds: &DailySuggestionThresholds,
) -> Vec<DailySuggestion> {
    let target = targets.as_totals();
    let calories_left = target.calories - totals.calories;
    let protein_left = target.protein - totals.protein;

    let mut suggestions = Vec::new();

    if protein_left > thresholds.protein_gap_g {
        suggestions.push(DailySuggestion {
            icon: "🍗",
            title: format!("{}g protein still to go", round_to_i32(protein_left)),
            options: vec!["Chicken 150g", "Greek yoghurt 200g", "Tuna 100g"],
        });
    }
    if calories_left > thresholds.calorie_gap_kcal
        && protein_left < thresholds.calorie_gap_max_protein_gap_g
    {
        suggestions.push(DailySuggestion {
            icon: "🥑",
            title: format!("{} kcal still to go", round_to_i32(calories_left)),
            options: vec!["Avocado", "Almonds 25g", "Banana"],
        });
    }
    if !has_vegetables && totals.calories > thresholds.vegetables_after_kcal {
        suggestions.push(DailySuggestion {
            icon: "🥬",
            title: "No vegetables today".to_owned(),
            options: vec!["Salad", "Broccoli", "Spinach"],
        });
    }
    if totals.fat > target.fat * thresholds.fat_warning_ratio {
        suggestions.push(DailySuggestion {
            icon: "⚠️",
            title: format!(
                "{}g fat (max {}g)",
                round_to_i32(totals.fat),
                targets.fat
            ),
            options: vec!["Cut down on fried food", "Lean protein"],
        });
    }

    suggestions
}
