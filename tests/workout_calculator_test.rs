// ABOUTME: Integration tests for MET/EPOC workout energy estimates
// ABOUTME: Covers plan days, custom sessions, cardio, step credit, decomposition, and rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittracker::errors::ErrorCode;
use fittracker::intelligence::config::intelligence::ActivityCost;
use fittracker::intelligence::workout_calculator::{
    calculate_calories_burned, calculate_cardio_calories, calculate_custom_workout_calories,
    calculate_predefined_workout_calories, calculate_steps_added, decompose_calories,
    estimate_activity, estimate_cardio, estimate_predefined_workout, estimate_workout,
    suggest_next_workout,
};
use fittracker::models::{
    CardioType, Intensity, PredefinedWorkout, WorkoutCategory, WorkoutKind,
};
use uuid::Uuid;

mod common;

// ============================================================================
// CORE FORMULA
// ============================================================================

#[test]
fn test_calories_burned_formula() {
    // 6 x 102.4 x 3.5 / 200 x 40 = 430.08; x 1.2 = 516.096
    assert_eq!(calculate_calories_burned(6.0, 102.4, 40.0, 1.2).unwrap(), 516);
    assert_eq!(calculate_calories_burned(6.0, 102.4, 40.0, 1.0).unwrap(), 430);
}

#[test]
fn test_zero_duration_burns_nothing() {
    assert_eq!(calculate_calories_burned(12.0, 80.0, 0.0, 1.25).unwrap(), 0);
}

#[test]
fn test_invalid_weight_rejected() {
    let err = calculate_calories_burned(6.0, 0.0, 40.0, 1.2).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    let err = calculate_calories_burned(6.0, 80.0, -5.0, 1.2).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_non_positive_met_or_epoc_rejected() {
    for (met, epoc) in [
        (-6.0, 1.2),
        (0.0, 1.2),
        (f64::NAN, 1.2),
        (6.0, -1.0),
        (6.0, 0.0),
        (6.0, f64::INFINITY),
    ] {
        let err = calculate_calories_burned(met, 80.0, 30.0, epoc).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "met {met}, epoc {epoc}");

        let err = estimate_activity(ActivityCost::new(met, epoc), 80.0, 30).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "met {met}, epoc {epoc}");
    }
}

// ============================================================================
// PREDEFINED PLAN
// ============================================================================

#[test]
fn test_legs_day_estimate() {
    let config = common::test_config();
    let estimate =
        estimate_predefined_workout(PredefinedWorkout::Legs, 102.4, None, &config.workout)
            .unwrap();

    assert!((estimate.met_value - 6.0).abs() < f64::EPSILON);
    assert_eq!(estimate.during_calories, 430);
    assert_eq!(estimate.total_calories, 516);
    assert_eq!(estimate.epoc_calories, 86);
}

#[test]
fn test_predefined_by_id_defaults_to_forty_minutes() {
    let config = common::test_config();
    assert_eq!(
        calculate_predefined_workout_calories(1, 102.4, None, &config.workout).unwrap(),
        412
    );
    assert_eq!(
        calculate_predefined_workout_calories(4, 80.0, Some(40), &config.workout).unwrap(),
        363
    );
}

#[test]
fn test_unknown_predefined_id_strict_and_lenient() {
    let mut config = common::test_config();
    let err = calculate_predefined_workout_calories(9, 80.0, None, &config.workout).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);

    common::init_test_logging();
    config.workout.lenient_lookup = true;
    let lenient = calculate_predefined_workout_calories(9, 80.0, Some(40), &config.workout).unwrap();
    let full_body = calculate_predefined_workout_calories(4, 80.0, Some(40), &config.workout).unwrap();
    assert_eq!(lenient, full_body);
}

// ============================================================================
// CUSTOM AND CARDIO
// ============================================================================

#[test]
fn test_custom_workout_tables() {
    let config = common::test_config();
    assert_eq!(
        calculate_custom_workout_calories(
            WorkoutCategory::Hiit,
            Intensity::High,
            80.0,
            30,
            &config.workout
        )
        .unwrap(),
        630
    );
    assert_eq!(
        calculate_custom_workout_calories(
            WorkoutCategory::Strength,
            Intensity::Low,
            70.0,
            60,
            &config.workout
        )
        .unwrap(),
        283
    );
}

#[test]
fn test_custom_intensity_is_monotonic() {
    let config = common::test_config();
    for category in [
        WorkoutCategory::Strength,
        WorkoutCategory::Cardio,
        WorkoutCategory::Hiit,
    ] {
        let burns: Vec<i32> = [Intensity::Low, Intensity::Medium, Intensity::High]
            .iter()
            .map(|i| {
                calculate_custom_workout_calories(category, *i, 80.0, 45, &config.workout)
                    .unwrap()
            })
            .collect();
        assert!(burns[0] < burns[1] && burns[1] < burns[2], "{category:?}: {burns:?}");
    }
}

#[test]
fn test_cardio_codes() {
    let config = common::test_config();
    assert_eq!(calculate_cardio_calories("run", 80.0, 45, &config.workout).unwrap(), 612);
    assert_eq!(calculate_cardio_calories("walk", 80.0, 60, &config.workout).unwrap(), 309);
    assert_eq!(calculate_cardio_calories("bike", 80.0, 30, &config.workout).unwrap(), 334);
    assert_eq!(
        calculate_cardio_calories("walkVega", 102.4, 30, &config.workout).unwrap(),
        166
    );

    let err = calculate_cardio_calories("swim", 80.0, 30, &config.workout).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidArgument);
}

#[test]
fn test_estimate_workout_dispatches_on_kind() {
    let config = common::test_config();
    let cardio = estimate_workout(
        WorkoutKind::Cardio {
            cardio: CardioType::Running,
        },
        80.0,
        45,
        &config.workout,
    )
    .unwrap();
    let direct = estimate_cardio(CardioType::Running, 80.0, 45, &config.workout).unwrap();
    assert_eq!(cardio, direct);
}

// ============================================================================
// STEPS AND DECOMPOSITION
// ============================================================================

#[test]
fn test_steps_added_per_cardio_type() {
    let cadence = common::test_config().workout.steps_per_minute;
    assert_eq!(calculate_steps_added(CardioType::Walking, 30, &cadence), 3000);
    assert_eq!(calculate_steps_added(CardioType::WalkingWithLoad, 30, &cadence), 2700);
    assert_eq!(calculate_steps_added(CardioType::Running, 30, &cadence), 4800);
    assert_eq!(calculate_steps_added(CardioType::Cycling, 30, &cadence), 0);
}

#[test]
fn test_decompose_recovers_during_calories() {
    let breakdown = decompose_calories(516, 1.2).unwrap();
    assert_eq!(breakdown.during, 430);
    assert_eq!(breakdown.epoc, 86);
    assert_eq!(breakdown.total, 516);
    assert_eq!(breakdown.epoc_percent, 20);
}

#[test]
fn test_decompose_within_one_kcal_across_tables() {
    let config = common::test_config().workout;
    let mut costs: Vec<ActivityCost> = PredefinedWorkout::ALL
        .iter()
        .map(|day| config.predefined.cost_for(*day))
        .collect();
    costs.extend(CardioType::ALL.iter().map(|c| config.cardio_types.cost_for(*c)));
    for category in [
        WorkoutCategory::Strength,
        WorkoutCategory::Cardio,
        WorkoutCategory::Hiit,
    ] {
        for intensity in [Intensity::Low, Intensity::Medium, Intensity::High] {
            costs.push(config.table_for(category).cost_for(intensity));
        }
    }

    for cost in costs {
        for weight in (40..=160).step_by(5) {
            for duration in 1..=120 {
                let estimate = estimate_activity(cost, f64::from(weight), duration).unwrap();
                let breakdown =
                    decompose_calories(estimate.total_calories, cost.epoc_multiplier).unwrap();
                assert!(
                    (breakdown.during - estimate.during_calories).abs() <= 1,
                    "{cost:?} at {weight} kg for {duration} min: {} vs {}",
                    breakdown.during,
                    estimate.during_calories
                );
                assert_eq!(breakdown.during + breakdown.epoc, estimate.total_calories);
            }
        }
    }
}

#[test]
fn test_decompose_rejects_zero_multiplier() {
    let err = decompose_calories(516, 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::DegenerateInput);
}

// ============================================================================
// PLAN ROTATION
// ============================================================================

#[test]
fn test_next_workout_starts_with_push() {
    let next = suggest_next_workout(&[]);
    assert_eq!(next.workout, PredefinedWorkout::Push);
    assert!(next.after.is_none());
}

#[test]
fn test_next_workout_follows_latest_plan_day() {
    let user = Uuid::new_v4();
    let day = common::today();
    let log = vec![
        common::workout(
            user,
            WorkoutKind::Predefined {
                workout: PredefinedWorkout::Pull,
            },
            400.0,
            common::at(day, 8),
        ),
        common::workout(
            user,
            WorkoutKind::Predefined {
                workout: PredefinedWorkout::FullBody,
            },
            400.0,
            common::at(day, 18),
        ),
        common::workout(
            user,
            WorkoutKind::Cardio {
                cardio: CardioType::Walking,
            },
            150.0,
            common::at(day, 20),
        ),
    ];

    let next = suggest_next_workout(&log);
    assert_eq!(next.after, Some(PredefinedWorkout::FullBody));
    assert_eq!(next.workout, PredefinedWorkout::Push);
}
