// ABOUTME: Application constants for storage keys, validation limits, and service identity
// ABOUTME: Centralizes the persisted-layout key names and the numeric bounds used by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Application-wide constants.
//!
//! The storage key names define the persisted layout and must never change
//! without a data migration; everything else here is a tuning value.

/// Keys of the persisted collections in the key-value storage engine.
///
/// These names are the on-disk contract: each key maps to one JSON-serialized
/// collection (or single record) and is rewritten wholesale on every mutation.
pub mod storage_keys {
    /// All registered accounts, as a JSON array.
    pub const USERS: &str = "users";

    /// The active-session account snapshot, or absent when logged out.
    pub const CURRENT_USER: &str = "currentUser";

    /// All health records across accounts, as a JSON array.
    pub const HEALTH_DATA: &str = "healthData";

    /// The per-install notification preferences record.
    pub const NOTIFICATION_SETTINGS: &str = "notificationSettings";
}

/// Service identity strings used in logging and configuration.
pub mod service_names {
    /// Canonical service name for structured log output.
    pub const VITALOG: &str = "vitalog";
}

/// Validation bounds enforced by presentation-layer callers.
///
/// The data store itself accepts any numeric value (range enforcement lives
/// with the caller); these bounds are what the CLI applies before calling in.
pub mod limits {
    /// Valid age range in years.
    pub const AGE_RANGE: std::ops::RangeInclusive<u16> = 1..=150;

    /// Valid height range in centimeters.
    pub const HEIGHT_CM_RANGE: std::ops::RangeInclusive<f64> = 50.0..=300.0;

    /// Valid weight range in kilograms.
    pub const WEIGHT_KG_RANGE: std::ops::RangeInclusive<f64> = 20.0..=500.0;

    /// Valid sleep duration range in hours.
    pub const SLEEP_HOURS_RANGE: std::ops::RangeInclusive<f64> = 0.0..=24.0;

    /// Valid heart rate range in beats per minute.
    pub const HEART_RATE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=300.0;

    /// Valid mood scale range (1 = worst, 5 = best).
    pub const MOOD_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;
}

/// Date and time formats used at the storage boundary.
pub mod formats {
    /// Calendar-date format for record dates and CSV rows (ISO 8601).
    pub const DATE: &str = "%Y-%m-%d";

    /// Time-of-day format for reminder slots.
    pub const REMINDER_TIME: &str = "%H:%M";
}
