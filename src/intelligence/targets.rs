// ABOUTME: Daily goal targets and achievement threshold constants per metric kind
// ABOUTME: Progress ratio computation against fixed per-kind targets, clamped to 1.0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Daily targets and goal progress.
//!
//! Every lookup in this module is an exhaustive match on [`MetricKind`]: a
//! new kind fails to compile until its target and thresholds are decided.

use crate::models::MetricKind;

/// Fixed daily targets, one per metric kind.
pub mod daily_targets {
    /// Daily step goal
    pub const STEPS: f64 = 10_000.0;

    /// Daily water goal in glasses
    pub const WATER_GLASSES: f64 = 8.0;

    /// Nightly sleep goal in hours
    pub const SLEEP_HOURS: f64 = 8.0;

    /// Daily calorie goal
    pub const MEAL_CALORIES: f64 = 2_000.0;

    /// Reference resting heart rate in bpm; progress against it is a
    /// closeness indicator, not a goal to exceed
    pub const HEART_RATE_BPM: f64 = 80.0;

    /// Top of the mood scale
    pub const MOOD_SCORE: f64 = 5.0;
}

/// Thresholds at which logging an observation raises an event.
pub mod achievement_thresholds {
    /// Steps at or above the daily target count as goal met; at or above
    /// this floor (but short of the target) a progress update fires
    pub const STEPS_PROGRESS_FLOOR: f64 = 5_000.0;

    /// Water glasses floor for a progress update
    pub const WATER_PROGRESS_FLOOR: f64 = 4.0;

    /// Sleep hours in `[GOAL_MIN, GOAL_MAX]` count as goal met
    pub const SLEEP_GOAL_MIN: f64 = 8.0;

    /// Upper bound of the healthy sleep band
    pub const SLEEP_GOAL_MAX: f64 = 9.0;

    /// Sleeping under this many hours raises a health alert
    pub const SLEEP_ALERT_BELOW: f64 = 6.0;

    /// Calorie floor for a progress update
    pub const CALORIES_PROGRESS_FLOOR: f64 = 1_500.0;

    /// Bottom of the healthy resting heart rate band in bpm
    pub const HEART_RATE_HEALTHY_MIN: f64 = 60.0;

    /// Top of the healthy resting heart rate band in bpm; above it a health
    /// alert fires
    pub const HEART_RATE_HEALTHY_MAX: f64 = 100.0;

    /// Mood score at or above which the day counts as a goal met
    pub const MOOD_GOAL_MIN: f64 = 4.0;
}

/// The fixed daily target for `kind`.
#[must_use]
pub const fn daily_target(kind: MetricKind) -> f64 {
    match kind {
        MetricKind::Steps => daily_targets::STEPS,
        MetricKind::Water => daily_targets::WATER_GLASSES,
        MetricKind::Sleep => daily_targets::SLEEP_HOURS,
        MetricKind::Meals => daily_targets::MEAL_CALORIES,
        MetricKind::HeartRate => daily_targets::HEART_RATE_BPM,
        MetricKind::Mood => daily_targets::MOOD_SCORE,
    }
}

/// Progress toward the daily target for `kind`, in `[0, 1]`.
///
/// Values past the target clamp to 1.0. A non-positive target yields 0
/// rather than dividing by zero.
#[must_use]
pub fn progress_ratio(kind: MetricKind, value: f64) -> f64 {
    let target = daily_target(kind);
    if target <= 0.0 {
        return 0.0;
    }
    (value / target).clamp(0.0, 1.0)
}
