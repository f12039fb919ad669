// ABOUTME: Criterion benchmarks for the calculation engine
// ABOUTME: Measures the daily target pipeline, workout estimates, and weekly aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Criterion benchmarks for the calculation engine.
//!
//! Measures the per-request pipelines a dashboard refresh runs: daily targets,
//! workout estimates, meal recommendations, and the weekly calendar.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittracker::data_source::aggregate_daily_stats;
use fittracker::intelligence::nutrition_calculator::{calculate_calorie_targets, CalorieTargets};
use fittracker::intelligence::progress_tracker::{build_weekly_calendar, summarize_week};
use fittracker::intelligence::recommendation_engine::{MealRecommendationEngine, PendingFood};
use fittracker::intelligence::workout_calculator::{estimate_workout, suggest_next_workout};
use fittracker::intelligence::IntelligenceConfig;
use fittracker::models::{
    ActivityLevel, CardioType, Food, Intensity, MacroTotals, MealEntry, MealType,
    PredefinedWorkout, Sex, UserProfile, WorkoutCategory, WorkoutEntry, WorkoutKind,
};
use uuid::Uuid;

fn bench_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

fn bench_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "bench".to_owned(),
        birth_date: NaiveDate::from_ymd_opt(1982, 1, 15).unwrap_or_default(),
        height_cm: 180.0,
        current_weight_kg: 102.4,
        start_weight_kg: 105.0,
        target_weight_kg: 84.0,
        activity_level: ActivityLevel::Moderate,
        sex: Sex::Male,
    }
}

/// Rotate through every workout kind, one session every few hours
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_workouts(count: usize) -> Vec<WorkoutEntry> {
    let user_id = Uuid::new_v4();
    let start = Utc.from_utc_datetime(&bench_day().and_hms_opt(20, 0, 0).unwrap_or_default());
    (0..count)
        .map(|index| {
            let kind = match index % 3 {
                0 => WorkoutKind::Predefined {
                    workout: PredefinedWorkout::ALL[index % 4],
                },
                1 => WorkoutKind::Custom {
                    category: WorkoutCategory::Hiit,
                    intensity: Intensity::Medium,
                },
                _ => WorkoutKind::Cardio {
                    cardio: CardioType::ALL[index % 4],
                },
            };
            WorkoutEntry {
                id: Uuid::new_v4(),
                user_id,
                name: format!("bench_workout_{index}"),
                kind,
                duration_min: 30 + (index % 30) as u32,
                calories_burned: 300.0 + (index % 200) as f64,
                steps_added: 0,
                logged_at: start - Duration::hours((index * 5) as i64),
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_meals(count: usize) -> Vec<MealEntry> {
    let user_id = Uuid::new_v4();
    let logged_at = Utc.from_utc_datetime(&bench_day().and_hms_opt(12, 0, 0).unwrap_or_default());
    (0..count)
        .map(|index| MealEntry {
            id: Uuid::new_v4(),
            user_id,
            food_id: Some(index as i64),
            meal_type: MealType::ALL[index % 5],
            food_name: None,
            quantity: 100.0,
            unit: "g".to_owned(),
            calories: 150.0 + (index % 50) as f64,
            protein: 10.0 + (index % 20) as f64,
            carbs: 15.0 + (index % 25) as f64,
            fat: 5.0 + (index % 10) as f64,
            logged_at,
        })
        .collect()
}

fn bench_daily_targets(c: &mut Criterion) {
    let config = IntelligenceConfig::<true>::default();
    let profile = bench_profile();

    c.bench_function("daily_targets", |b| {
        b.iter(|| {
            calculate_calorie_targets(
                black_box(&profile),
                black_box(516.0),
                black_box(bench_day()),
                &config,
            )
        });
    });
}

fn bench_workout_estimates(c: &mut Criterion) {
    let config = IntelligenceConfig::<true>::default();
    let workouts = generate_workouts(100);

    let mut group = c.benchmark_group("workout_estimates");
    group.throughput(Throughput::Elements(workouts.len() as u64));
    group.bench_function("estimate_workout_batch", |b| {
        b.iter(|| {
            workouts
                .iter()
                .filter_map(|w| {
                    estimate_workout(w.kind, black_box(102.4), w.duration_min, &config.workout)
                        .ok()
                })
                .map(|e| e.total_calories)
                .sum::<i32>()
        });
    });
    group.finish();
}

fn bench_meal_recommendations(c: &mut Criterion) {
    let config = IntelligenceConfig::<true>::default();
    let engine = MealRecommendationEngine::new(&config.recommendation);
    let targets = CalorieTargets {
        calories: 842,
        protein: 59,
        carbs: 113,
        fat: 20,
    };
    let food = Food {
        id: 1,
        name: "Pizza".to_owned(),
        category: "platos".to_owned(),
        calories_per_100g: 266.0,
        protein_per_100g: 11.0,
        carbs_per_100g: 33.0,
        fat_per_100g: 10.0,
        unit: "g".to_owned(),
        tags: vec!["procesado".to_owned()],
        is_custom: false,
        user_id: None,
    };
    let pending: Vec<PendingFood> = [150.0, 200.0, 300.0]
        .iter()
        .filter_map(|qty| PendingFood::from_portion(food.clone(), *qty).ok())
        .collect();

    c.bench_function("analyze_lunch", |b| {
        b.iter(|| {
            engine.analyze_meal(
                MealType::Lunch,
                black_box(&targets),
                black_box(&MacroTotals::default()),
                black_box(&pending),
            )
        });
    });
}

fn bench_weekly_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_aggregation");

    for count in [10_usize, 100, 500] {
        let workouts = generate_workouts(count);
        let meals = generate_meals(count);
        let dates: Vec<NaiveDate> = workouts.iter().map(|w| w.logged_at.date_naive()).collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("calendar", count), &dates, |b, dates| {
            b.iter(|| build_weekly_calendar(black_box(bench_day()), black_box(dates)));
        });
        group.bench_with_input(
            BenchmarkId::new("summarize_week", count),
            &workouts,
            |b, workouts| {
                b.iter(|| {
                    (
                        summarize_week(black_box(workouts), bench_day()),
                        suggest_next_workout(black_box(workouts)),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("aggregate_daily_stats", count),
            &(meals, workouts),
            |b, (meals, workouts)| {
                b.iter(|| aggregate_daily_stats(black_box(meals), black_box(workouts), None, None));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_daily_targets,
    bench_workout_estimates,
    bench_meal_recommendations,
    bench_weekly_aggregation
);

criterion_main!(benches);
