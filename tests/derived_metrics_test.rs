// ABOUTME: Integration tests for derived metrics
// ABOUTME: BMI values and category boundaries, goal progress, and achievement thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitalog::intelligence::{
    bmi, daily_target, evaluate_thresholds, progress_ratio, BmiCategory, ThresholdEvent,
};
use vitalog::models::MetricKind;

#[test]
fn test_bmi_reference_value() {
    // 70 kg at 170 cm is the canonical mid-Normal reference.
    let value = bmi(170.0, 70.0);
    assert!((value - 24.2).abs() < 0.05);
    assert_eq!(BmiCategory::from_bmi(value), BmiCategory::Normal);
}

#[test]
fn test_bmi_bad_input_is_zero_not_error() {
    assert!(bmi(0.0, 70.0).abs() < f64::EPSILON);
    assert!(bmi(170.0, 0.0).abs() < f64::EPSILON);
    assert!(bmi(-170.0, 70.0).abs() < f64::EPSILON);
    assert!(bmi(f64::NAN, 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmi_category_band_edges() {
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.999), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(29.999), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
}

#[test]
fn test_progress_ratio_clamped_and_proportional() {
    assert!((progress_ratio(MetricKind::Steps, 12_000.0) - 1.0).abs() < f64::EPSILON);
    assert!((progress_ratio(MetricKind::Steps, 5_000.0) - 0.5).abs() < f64::EPSILON);
    assert!((progress_ratio(MetricKind::Water, 4.0) - 0.5).abs() < f64::EPSILON);
    assert!(progress_ratio(MetricKind::Meals, 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_every_kind_has_a_target() {
    for kind in MetricKind::ALL {
        assert!(daily_target(kind) > 0.0);
    }
}

fn single_event(kind: MetricKind, value: f64) -> ThresholdEvent {
    let mut events = evaluate_thresholds(kind, value);
    assert_eq!(events.len(), 1, "{kind} at {value} should raise one event");
    events.remove(0)
}

#[test]
fn test_steps_thresholds() {
    assert!(matches!(
        single_event(MetricKind::Steps, 10_000.0),
        ThresholdEvent::GoalMet { .. }
    ));
    match single_event(MetricKind::Steps, 5_000.0) {
        ThresholdEvent::GoalProgress { ratio, .. } => {
            assert!((ratio - 0.5).abs() < f64::EPSILON);
        }
        other => panic!("expected progress, got {other:?}"),
    }
    assert!(evaluate_thresholds(MetricKind::Steps, 4_999.0).is_empty());
}

#[test]
fn test_water_thresholds() {
    assert!(matches!(
        single_event(MetricKind::Water, 8.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::Water, 4.0),
        ThresholdEvent::GoalProgress { .. }
    ));
    assert!(evaluate_thresholds(MetricKind::Water, 3.0).is_empty());
}

#[test]
fn test_sleep_thresholds() {
    assert!(matches!(
        single_event(MetricKind::Sleep, 8.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::Sleep, 9.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::Sleep, 5.9),
        ThresholdEvent::HealthAlert { .. }
    ));
    // Between the alert floor and the goal band nothing fires.
    assert!(evaluate_thresholds(MetricKind::Sleep, 7.0).is_empty());
    assert!(evaluate_thresholds(MetricKind::Sleep, 10.0).is_empty());
}

#[test]
fn test_meals_thresholds() {
    assert!(matches!(
        single_event(MetricKind::Meals, 2_000.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::Meals, 1_500.0),
        ThresholdEvent::GoalProgress { .. }
    ));
    assert!(evaluate_thresholds(MetricKind::Meals, 1_499.0).is_empty());
}

#[test]
fn test_heart_rate_thresholds() {
    assert!(matches!(
        single_event(MetricKind::HeartRate, 60.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::HeartRate, 100.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(matches!(
        single_event(MetricKind::HeartRate, 101.0),
        ThresholdEvent::HealthAlert { .. }
    ));
    assert!(evaluate_thresholds(MetricKind::HeartRate, 59.0).is_empty());
}

#[test]
fn test_mood_thresholds() {
    assert!(matches!(
        single_event(MetricKind::Mood, 4.0),
        ThresholdEvent::GoalMet { .. }
    ));
    assert!(evaluate_thresholds(MetricKind::Mood, 3.0).is_empty());
}
