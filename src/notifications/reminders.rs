// ABOUTME: Daily reminder slots derived from notification preferences
// ABOUTME: Parses HH:MM preference strings and pairs enabled reminders with their content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use chrono::NaiveTime;

use crate::constants::formats;
use crate::errors::{AppError, AppResult};
use crate::models::NotificationPreferences;

/// The four daily reminder channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    /// Hydration nudge
    Water,
    /// Wind-down-for-bed nudge
    Sleep,
    /// Daily movement nudge
    Exercise,
    /// Meal logging nudge
    Meal,
}

impl ReminderKind {
    /// Notification title for this reminder.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Water => "💧 Time to hydrate!",
            Self::Sleep => "😴 Time for bed!",
            Self::Exercise => "🏃‍♂️ Time to move!",
            Self::Meal => "🍽️ Time to eat!",
        }
    }

    /// Notification body for this reminder.
    #[must_use]
    pub const fn body(&self) -> &'static str {
        match self {
            Self::Water => "Don't forget to drink water and stay hydrated.",
            Self::Sleep => "Get ready for a good night's sleep to maintain your health.",
            Self::Exercise => "Take a walk or do some exercise to reach your daily step goal.",
            Self::Meal => "Don't forget to log your meals and track your nutrition.",
        }
    }
}

/// One enabled reminder and the local time it should repeat at daily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSlot {
    /// Which reminder
    pub kind: ReminderKind,
    /// Time of day to fire, local
    pub time: NaiveTime,
}

/// Derive the enabled reminder slots from the stored preferences.
///
/// Disabled reminders yield no slot. The scheduling collaborator turns each
/// slot into a repeating OS notification; this function's job ends at the
/// (kind, time) pairs.
///
/// # Errors
///
/// Returns an error if an enabled reminder's time string is not `HH:MM`.
pub fn active_reminder_slots(
    preferences: &NotificationPreferences,
) -> AppResult<Vec<ReminderSlot>> {
    let mut slots = Vec::new();
    if preferences.water_reminders {
        slots.push(ReminderSlot {
            kind: ReminderKind::Water,
            time: parse_reminder_time(&preferences.water_reminder_time)?,
        });
    }
    if preferences.sleep_reminders {
        slots.push(ReminderSlot {
            kind: ReminderKind::Sleep,
            time: parse_reminder_time(&preferences.sleep_reminder_time)?,
        });
    }
    if preferences.exercise_reminders {
        slots.push(ReminderSlot {
            kind: ReminderKind::Exercise,
            time: parse_reminder_time(&preferences.exercise_reminder_time)?,
        });
    }
    if preferences.meal_reminders {
        slots.push(ReminderSlot {
            kind: ReminderKind::Meal,
            time: parse_reminder_time(&preferences.meal_reminder_time)?,
        });
    }
    Ok(slots)
}

fn parse_reminder_time(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, formats::REMINDER_TIME).map_err(|error| {
        AppError::invalid_format(format!("Reminder time {value:?} is not HH:MM: {error}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_yield_three_slots() {
        let slots = active_reminder_slots(&NotificationPreferences::default()).unwrap();
        let kinds: Vec<ReminderKind> = slots.iter().map(|slot| slot.kind).collect();
        assert_eq!(
            kinds,
            [ReminderKind::Water, ReminderKind::Sleep, ReminderKind::Exercise]
        );
        assert_eq!(
            slots[0].time,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_disabled_reminder_has_no_slot() {
        let preferences = NotificationPreferences {
            water_reminders: false,
            sleep_reminders: false,
            exercise_reminders: false,
            meal_reminders: true,
            ..NotificationPreferences::default()
        };
        let slots = active_reminder_slots(&preferences).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].kind, ReminderKind::Meal);
        assert_eq!(slots[0].time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_malformed_time_rejected() {
        let preferences = NotificationPreferences {
            water_reminder_time: "25:99".into(),
            ..NotificationPreferences::default()
        };
        assert!(active_reminder_slots(&preferences).is_err());
    }

    #[test]
    fn test_disabled_reminder_time_is_not_parsed() {
        let preferences = NotificationPreferences {
            meal_reminders: false,
            meal_reminder_time: "not-a-time".into(),
            ..NotificationPreferences::default()
        };
        assert!(active_reminder_slots(&preferences).is_ok());
    }
}
