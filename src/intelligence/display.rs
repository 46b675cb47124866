// ABOUTME: Per-kind display formatting: values, target strings, colors, and icon names
// ABOUTME: Exhaustive lookups on MetricKind consumed by presentation surfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Display formatting for metric values.
//!
//! Everything here is an exhaustive match on [`MetricKind`] so an unhandled
//! kind is a compile error, not a silently blank dashboard card.

use crate::models::MetricKind;

/// Mood scale emoji, indexed 1-5. Index 0 is unused padding.
const MOOD_SCALE: [&str; 6] = ["", "😢", "😐", "🙂", "😊", "🤩"];

/// Format an observed value for display.
///
/// Steps and calories get thousands separators, sleep an hours suffix, mood
/// its emoji; everything else renders as the bare number.
#[must_use]
pub fn format_value(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::Steps | MetricKind::Meals => group_thousands(value),
        MetricKind::Sleep => format!("{value}h"),
        MetricKind::Water | MetricKind::HeartRate => format!("{value}"),
        MetricKind::Mood => {
            let index = value as usize;
            MOOD_SCALE
                .get(index)
                .filter(|emoji| !emoji.is_empty())
                .copied()
                .unwrap_or("😐")
                .to_owned()
        }
    }
}

/// The target shown next to a metric card.
#[must_use]
pub const fn target_display(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Steps => "10,000",
        MetricKind::Water => "8",
        MetricKind::Sleep => "8h",
        MetricKind::Meals => "2,000",
        MetricKind::HeartRate => "60-100",
        MetricKind::Mood => "Good",
    }
}

/// Accent color for a metric, as a hex string.
#[must_use]
pub const fn display_color(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Steps => "#4f8cff",
        MetricKind::Water => "#00c896",
        MetricKind::Sleep => "#ffb300",
        MetricKind::Meals => "#ff5252",
        MetricKind::HeartRate => "#9c27b0",
        MetricKind::Mood => "#4caf50",
    }
}

/// Icon name for a metric, from the Material Design icon set.
#[must_use]
pub const fn icon_name(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Steps => "walk",
        MetricKind::Water => "cup-water",
        MetricKind::Sleep => "sleep",
        MetricKind::Meals => "food-apple",
        MetricKind::HeartRate => "heart-pulse",
        MetricKind::Mood => "emoticon-happy",
    }
}

/// Group an integral value with comma thousands separators; fractional
/// values fall back to plain formatting.
fn group_thousands(value: f64) -> String {
    if value.fract() != 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let negative = value < 0.0;
    let digits = format!("{}", value.abs() as u64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}
