// ABOUTME: Threshold evaluation turning logged observations into discrete achievement events
// ABOUTME: Kind-specific goal-met, progress-update, and health-alert rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Achievement thresholds.
//!
//! Evaluating an observation produces zero or more [`ThresholdEvent`]s. The
//! data layer's responsibility ends at producing the event; formatting and
//! delivery belong to the notification boundary.

use crate::models::MetricKind;

use super::targets::{achievement_thresholds as thresholds, daily_targets};

/// A discrete event raised by an observation crossing a threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdEvent {
    /// The daily goal for this kind was met
    GoalMet {
        /// Which metric met its goal
        kind: MetricKind,
        /// Congratulation text, ready for delivery
        message: String,
    },
    /// Partial progress worth a nudge
    GoalProgress {
        /// Which metric progressed
        kind: MetricKind,
        /// Display name of the goal being chased
        goal_label: &'static str,
        /// Progress toward the goal in `[0, 1]`
        ratio: f64,
    },
    /// The observation is outside a healthy band
    HealthAlert {
        /// Which metric triggered the alert
        kind: MetricKind,
        /// Alert body text, ready for delivery
        message: String,
    },
}

/// Evaluate the threshold rules for one observation.
///
/// Rules, per kind:
/// - steps: ≥ 10,000 goal met; ≥ 5,000 progress update
/// - water: ≥ 8 glasses goal met; ≥ 4 progress update
/// - sleep: 8–9 hours goal met; under 6 hours health alert
/// - meals: ≥ 2,000 calories goal met; ≥ 1,500 progress update
/// - heart rate: 60–100 bpm goal met; above 100 health alert
/// - mood: ≥ 4 goal met
#[must_use]
pub fn evaluate_thresholds(kind: MetricKind, value: f64) -> Vec<ThresholdEvent> {
    match kind {
        MetricKind::Steps => {
            if value >= daily_targets::STEPS {
                vec![goal_met(kind, "10,000 Steps Goal! 🚶‍♂️")]
            } else if value >= thresholds::STEPS_PROGRESS_FLOOR {
                vec![ThresholdEvent::GoalProgress {
                    kind,
                    goal_label: "Daily Steps",
                    ratio: value / daily_targets::STEPS,
                }]
            } else {
                Vec::new()
            }
        }
        MetricKind::Water => {
            if value >= daily_targets::WATER_GLASSES {
                vec![goal_met(kind, "8 Glasses of Water Goal! 💧")]
            } else if value >= thresholds::WATER_PROGRESS_FLOOR {
                vec![ThresholdEvent::GoalProgress {
                    kind,
                    goal_label: "Daily Water Intake",
                    ratio: value / daily_targets::WATER_GLASSES,
                }]
            } else {
                Vec::new()
            }
        }
        MetricKind::Sleep => {
            if (thresholds::SLEEP_GOAL_MIN..=thresholds::SLEEP_GOAL_MAX).contains(&value) {
                vec![goal_met(kind, "Perfect Sleep Goal! 😴")]
            } else if value < thresholds::SLEEP_ALERT_BELOW {
                vec![ThresholdEvent::HealthAlert {
                    kind,
                    message: "You slept less than 6 hours. Consider getting more rest!".into(),
                }]
            } else {
                Vec::new()
            }
        }
        MetricKind::Meals => {
            if value >= daily_targets::MEAL_CALORIES {
                vec![goal_met(kind, "Daily Calorie Goal! 🍽️")]
            } else if value >= thresholds::CALORIES_PROGRESS_FLOOR {
                vec![ThresholdEvent::GoalProgress {
                    kind,
                    goal_label: "Daily Calories",
                    ratio: value / daily_targets::MEAL_CALORIES,
                }]
            } else {
                Vec::new()
            }
        }
        MetricKind::HeartRate => {
            if (thresholds::HEART_RATE_HEALTHY_MIN..=thresholds::HEART_RATE_HEALTHY_MAX)
                .contains(&value)
            {
                vec![goal_met(kind, "Healthy Heart Rate! ❤️")]
            } else if value > thresholds::HEART_RATE_HEALTHY_MAX {
                vec![ThresholdEvent::HealthAlert {
                    kind,
                    message: "Your heart rate is elevated. Consider resting or consulting a doctor."
                        .into(),
                }]
            } else {
                Vec::new()
            }
        }
        MetricKind::Mood => {
            if value >= thresholds::MOOD_GOAL_MIN {
                vec![goal_met(kind, "Great Mood! 😊")]
            } else {
                Vec::new()
            }
        }
    }
}

fn goal_met(kind: MetricKind, message: &str) -> ThresholdEvent {
    ThresholdEvent::GoalMet {
        kind,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(events: &[ThresholdEvent]) -> Vec<&'static str> {
        events
            .iter()
            .map(|event| match event {
                ThresholdEvent::GoalMet { .. } => "goal",
                ThresholdEvent::GoalProgress { .. } => "progress",
                ThresholdEvent::HealthAlert { .. } => "alert",
            })
            .collect()
    }

    #[test]
    fn test_steps_goal_and_progress_bands() {
        assert_eq!(kinds(&evaluate_thresholds(MetricKind::Steps, 10_000.0)), ["goal"]);
        assert_eq!(
            kinds(&evaluate_thresholds(MetricKind::Steps, 7_500.0)),
            ["progress"]
        );
        assert!(evaluate_thresholds(MetricKind::Steps, 4_999.0).is_empty());
    }

    #[test]
    fn test_steps_progress_carries_ratio() {
        let events = evaluate_thresholds(MetricKind::Steps, 7_500.0);
        match &events[0] {
            ThresholdEvent::GoalProgress { ratio, .. } => {
                assert!((ratio - 0.75).abs() < f64::EPSILON);
            }
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn test_sleep_bands() {
        assert_eq!(kinds(&evaluate_thresholds(MetricKind::Sleep, 8.5)), ["goal"]);
        assert_eq!(kinds(&evaluate_thresholds(MetricKind::Sleep, 5.0)), ["alert"]);
        assert!(evaluate_thresholds(MetricKind::Sleep, 7.0).is_empty());
        assert!(evaluate_thresholds(MetricKind::Sleep, 9.5).is_empty());
    }

    #[test]
    fn test_heart_rate_bands() {
        assert_eq!(
            kinds(&evaluate_thresholds(MetricKind::HeartRate, 72.0)),
            ["goal"]
        );
        assert_eq!(
            kinds(&evaluate_thresholds(MetricKind::HeartRate, 120.0)),
            ["alert"]
        );
        assert!(evaluate_thresholds(MetricKind::HeartRate, 55.0).is_empty());
    }

    #[test]
    fn test_mood_goal() {
        assert_eq!(kinds(&evaluate_thresholds(MetricKind::Mood, 4.0)), ["goal"]);
        assert!(evaluate_thresholds(MetricKind::Mood, 3.0).is_empty());
    }
}
