// ABOUTME: Presentation-side validation of metric values and profile fields
// ABOUTME: Range checks applied by callers before handing values to the data store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Caller-side validation.
//!
//! The data store accepts any numeric value; range enforcement is a
//! presentation concern and lives here so every surface applies the same
//! bounds. All functions return `ValueOutOfRange`/`ValidationFailed` errors
//! and never mutate anything.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::MetricKind;

/// Validate an observation value for `kind`.
///
/// # Errors
///
/// Returns an error when the value is not finite or is outside the
/// kind-specific range: counts must be non-negative, sleep fits in a day,
/// heart rate below 300 bpm, mood on the 1-5 scale.
pub fn validate_metric_value(kind: MetricKind, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::value_out_of_range(
            kind.as_str(),
            format!("{} value must be a number", kind.label()),
        ));
    }
    match kind {
        MetricKind::Steps | MetricKind::Water | MetricKind::Meals => {
            if value < 0.0 {
                return Err(AppError::value_out_of_range(
                    kind.as_str(),
                    format!("{} must be zero or more", kind.label()),
                ));
            }
        }
        MetricKind::Sleep => {
            if !limits::SLEEP_HOURS_RANGE.contains(&value) {
                return Err(AppError::value_out_of_range(
                    kind.as_str(),
                    "Sleep must be between 0 and 24 hours",
                ));
            }
        }
        MetricKind::HeartRate => {
            if !limits::HEART_RATE_RANGE.contains(&value) {
                return Err(AppError::value_out_of_range(
                    kind.as_str(),
                    "Heart rate must be between 0 and 300 bpm",
                ));
            }
        }
        MetricKind::Mood => {
            if !limits::MOOD_RANGE.contains(&value) || value.fract() != 0.0 {
                return Err(AppError::value_out_of_range(
                    kind.as_str(),
                    "Mood must be a whole number from 1 to 5",
                ));
            }
        }
    }
    Ok(())
}

/// Validate an age in years.
///
/// # Errors
///
/// Returns an error when the age is outside 1-150.
pub fn validate_age(age: u16) -> AppResult<()> {
    if limits::AGE_RANGE.contains(&age) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            "age",
            "Please enter a valid age (1-150)",
        ))
    }
}

/// Validate a height in centimeters.
///
/// # Errors
///
/// Returns an error when the height is outside 50-300 cm.
pub fn validate_height_cm(height_cm: f64) -> AppResult<()> {
    if height_cm.is_finite() && limits::HEIGHT_CM_RANGE.contains(&height_cm) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            "height",
            "Please enter a valid height (50-300 cm)",
        ))
    }
}

/// Validate a weight in kilograms.
///
/// # Errors
///
/// Returns an error when the weight is outside 20-500 kg.
pub fn validate_weight_kg(weight_kg: f64) -> AppResult<()> {
    if weight_kg.is_finite() && limits::WEIGHT_KG_RANGE.contains(&weight_kg) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            "weight",
            "Please enter a valid weight (20-500 kg)",
        ))
    }
}

/// Minimal email shape check: something before and after one `@`.
///
/// # Errors
///
/// Returns an error when the address has no user part, no domain, or no `@`.
pub fn validate_email(email: &str) -> AppResult<()> {
    let mut parts = email.splitn(2, '@');
    let user = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if user.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation(format!(
            "{email:?} is not a valid email address"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_reject_negative() {
        assert!(validate_metric_value(MetricKind::Steps, -1.0).is_err());
        assert!(validate_metric_value(MetricKind::Steps, 0.0).is_ok());
        assert!(validate_metric_value(MetricKind::Water, 8.0).is_ok());
    }

    #[test]
    fn test_sleep_bounds() {
        assert!(validate_metric_value(MetricKind::Sleep, 24.0).is_ok());
        assert!(validate_metric_value(MetricKind::Sleep, 24.5).is_err());
    }

    #[test]
    fn test_heart_rate_bounds() {
        assert!(validate_metric_value(MetricKind::HeartRate, 300.0).is_ok());
        assert!(validate_metric_value(MetricKind::HeartRate, 301.0).is_err());
    }

    #[test]
    fn test_mood_must_be_whole_scale_value() {
        assert!(validate_metric_value(MetricKind::Mood, 3.0).is_ok());
        assert!(validate_metric_value(MetricKind::Mood, 3.5).is_err());
        assert!(validate_metric_value(MetricKind::Mood, 0.0).is_err());
        assert!(validate_metric_value(MetricKind::Mood, 6.0).is_err());
    }

    #[test]
    fn test_profile_ranges() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(30.0).is_err());
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_age(30).is_ok());
        assert!(validate_age(0).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("userexample.com").is_err());
    }
}
