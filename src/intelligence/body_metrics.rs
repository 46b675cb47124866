// ABOUTME: Body mass index computation and categorization
// ABOUTME: Pure functions over profile height and weight with a zero sentinel for bad input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Body mass index.

use serde::{Deserialize, Serialize};

/// BMI category bands per the WHO adult classification.
///
/// Band lower bounds are inclusive: a BMI of exactly 18.5 is `Normal`, 25 is
/// `Overweight`, 30 is `Obese`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI at or above 30
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Display color, as a hex string for presentation surfaces.
    #[must_use]
    pub const fn display_color(&self) -> &'static str {
        match self {
            Self::Underweight => "#ffb300",
            Self::Normal => "#4caf50",
            Self::Overweight => "#ff9800",
            Self::Obese => "#f44336",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body mass index from height in centimeters and weight in kilograms.
///
/// Returns 0.0 when either input is non-positive or non-finite; this
/// function never fails. Callers display the zero sentinel as "enter your
/// height and weight".
#[must_use]
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if !height_cm.is_finite() || !weight_kg.is_finite() || height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI from optional profile fields, with the same zero sentinel for
/// missing values.
#[must_use]
pub fn bmi_from_profile(height_cm: Option<f64>, weight_kg: Option<f64>) -> f64 {
    match (height_cm, weight_kg) {
        (Some(height_cm), Some(weight_kg)) => bmi(height_cm, weight_kg),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_typical_value() {
        let value = bmi(170.0, 70.0);
        assert!((value - 24.22).abs() < 0.01);
    }

    #[test]
    fn test_bmi_zero_height_is_sentinel_not_panic() {
        assert!(bmi(0.0, 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_negative_weight_is_sentinel() {
        assert!(bmi(170.0, -1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_missing_profile_fields() {
        assert!(bmi_from_profile(Some(170.0), None).abs() < f64::EPSILON);
        assert!(bmi_from_profile(None, Some(70.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_boundaries_inclusive_lower() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.2), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }
}
