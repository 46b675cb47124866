// ABOUTME: Core data models for the Vitalog health-tracking data layer
// ABOUTME: Defines Account, HealthRecord, MetricKind and notification preference structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Data Models
//!
//! Domain types shared across the storage engine, the data store, and the
//! derived-metrics layer. Serde attribute names on these types are part of
//! the persisted layout (see `constants::storage_keys`) and must stay stable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of trackable daily metrics.
///
/// Serialized names are the storage and CSV contract (`heartRate`, not
/// `heart_rate`). Adding a variant is a breaking change for every exhaustive
/// match in the intelligence layer, which is intentional: no lookup on this
/// enum is allowed a fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Daily step count
    Steps,
    /// Glasses of water drunk
    Water,
    /// Hours slept last night
    Sleep,
    /// Calories consumed
    Meals,
    /// Heart rate in beats per minute
    HeartRate,
    /// Mood on a 1-5 scale
    Mood,
}

impl MetricKind {
    /// All metric kinds, in dashboard display order.
    pub const ALL: [Self; 6] = [
        Self::Steps,
        Self::Water,
        Self::Sleep,
        Self::Meals,
        Self::HeartRate,
        Self::Mood,
    ];

    /// The serialized name of this kind, as stored and as emitted in CSV.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::Meals => "meals",
            Self::HeartRate => "heartRate",
            Self::Mood => "mood",
        }
    }

    /// Human-readable label for display surfaces.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Steps => "Steps",
            Self::Water => "Water",
            Self::Sleep => "Sleep",
            Self::Meals => "Calories",
            Self::HeartRate => "Heart Rate",
            Self::Mood => "Mood",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(Self::Steps),
            "water" => Ok(Self::Water),
            "sleep" => Ok(Self::Sleep),
            "meals" => Ok(Self::Meals),
            "heartRate" | "heart-rate" | "heart" => Ok(Self::HeartRate),
            "mood" => Ok(Self::Mood),
            other => Err(crate::errors::AppError::invalid_format(format!(
                "Unknown metric kind: {other}"
            ))),
        }
    }
}

/// A registered user identity with credentials and profile fields.
///
/// The credential secret is stored as the plaintext string the user supplied.
/// Hashing it is a pending product decision, not a storage-layer one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier, generated at registration
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address; unique across all accounts, compared exactly as stored
    pub email: String,
    /// Credential secret, stored as supplied
    pub password: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u16>,
    /// Self-reported gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(rename = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Opaque URI of the profile photo, if one was picked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account from a registration request, stamping a fresh
    /// identifier and creation time.
    #[must_use]
    pub fn new(request: RegisterRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            password: request.password,
            age: request.age,
            gender: request.gender,
            height_cm: request.height_cm,
            weight_kg: request.weight_kg,
            profile_photo: request.profile_photo,
            created_at: Utc::now(),
        }
    }
}

/// Input to account registration.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address; the caller normalizes case before submitting
    pub email: String,
    /// Credential secret
    pub password: String,
    /// Age in years
    pub age: Option<u16>,
    /// Self-reported gender
    pub gender: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Opaque profile photo URI
    pub profile_photo: Option<String>,
}

/// Partial profile update; `None` fields are left unchanged.
///
/// Credentials are not updatable through this path. Email changes would
/// bypass the uniqueness scan, so they are deliberately not expressible.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New age in years
    pub age: Option<u16>,
    /// New self-reported gender
    pub gender: Option<String>,
    /// New height in centimeters
    pub height_cm: Option<f64>,
    /// New weight in kilograms
    pub weight_kg: Option<f64>,
    /// New profile photo URI
    pub profile_photo: Option<String>,
}

impl ProfileUpdate {
    /// Shallow-merge the supplied fields onto `account`.
    pub fn apply(&self, account: &mut Account) {
        if let Some(name) = &self.name {
            account.name = name.clone();
        }
        if let Some(age) = self.age {
            account.age = Some(age);
        }
        if let Some(gender) = &self.gender {
            account.gender = Some(gender.clone());
        }
        if let Some(height_cm) = self.height_cm {
            account.height_cm = Some(height_cm);
        }
        if let Some(weight_kg) = self.weight_kg {
            account.weight_kg = Some(weight_kg);
        }
        if let Some(profile_photo) = &self.profile_photo {
            account.profile_photo = Some(profile_photo.clone());
        }
    }

    /// Whether this update carries any field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height_cm.is_none()
            && self.weight_kg.is_none()
            && self.profile_photo.is_none()
    }
}

/// One metric observation for one account, one kind, one calendar day.
///
/// At most one record exists per (account, kind, date) tuple; writing a new
/// observation for an occupied tuple replaces the old record wholesale,
/// including its identifier and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Record identifier, regenerated on every upsert
    pub id: Uuid,
    /// Owning account identifier
    #[serde(rename = "userId")]
    pub account_id: Uuid,
    /// Which metric this observation is for
    #[serde(rename = "type")]
    pub kind: MetricKind,
    /// Observed value
    pub value: f64,
    /// Calendar date of the observation, date-only granularity
    pub date: NaiveDate,
    /// Full-precision creation instant; used for ordering and debugging only
    pub timestamp: DateTime<Utc>,
}

impl HealthRecord {
    /// Create a record for `date`, stamping a fresh identifier and timestamp.
    #[must_use]
    pub fn new(account_id: Uuid, kind: MetricKind, value: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            kind,
            value,
            date,
            timestamp: Utc::now(),
        }
    }
}

/// Per-install reminder toggles and times.
///
/// This record is process-wide, not per-account: the single-user-per-device
/// assumption of the original product. Times are `HH:MM` strings, parsed only
/// when reminder slots are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    /// Daily water reminder on/off
    pub water_reminders: bool,
    /// Daily sleep reminder on/off
    pub sleep_reminders: bool,
    /// Daily exercise reminder on/off
    pub exercise_reminders: bool,
    /// Daily meal reminder on/off
    pub meal_reminders: bool,
    /// Water reminder time, `HH:MM`
    pub water_reminder_time: String,
    /// Sleep reminder time, `HH:MM`
    pub sleep_reminder_time: String,
    /// Exercise reminder time, `HH:MM`
    pub exercise_reminder_time: String,
    /// Meal reminder time, `HH:MM`
    pub meal_reminder_time: String,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            water_reminders: true,
            sleep_reminders: true,
            exercise_reminders: true,
            meal_reminders: false,
            water_reminder_time: "10:00".into(),
            sleep_reminder_time: "22:00".into(),
            exercise_reminder_time: "18:00".into(),
            meal_reminder_time: "12:00".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_kind_serialized_names() {
        let json = serde_json::to_string(&MetricKind::HeartRate).unwrap();
        assert_eq!(json, "\"heartRate\"");
        let kind: MetricKind = serde_json::from_str("\"steps\"").unwrap();
        assert_eq!(kind, MetricKind::Steps);
    }

    #[test]
    fn test_metric_kind_as_str_matches_serde() {
        for kind in MetricKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_health_record_storage_field_names() {
        let record = HealthRecord::new(
            Uuid::new_v4(),
            MetricKind::Steps,
            5000.0,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("userId").is_some());
        assert_eq!(value.get("type").unwrap(), "steps");
        assert_eq!(value.get("date").unwrap(), "2024-01-01");
    }

    #[test]
    fn test_profile_update_merge_leaves_unset_fields() {
        let mut account = Account::new(RegisterRequest {
            name: "Dana".into(),
            email: "dana@example.com".into(),
            password: "secret".into(),
            height_cm: Some(170.0),
            ..RegisterRequest::default()
        });

        let update = ProfileUpdate {
            weight_kg: Some(70.0),
            ..ProfileUpdate::default()
        };
        update.apply(&mut account);

        assert_eq!(account.weight_kg, Some(70.0));
        assert_eq!(account.height_cm, Some(170.0));
        assert_eq!(account.name, "Dana");
        assert_eq!(account.email, "dana@example.com");
    }

    #[test]
    fn test_notification_preferences_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.water_reminders);
        assert!(prefs.sleep_reminders);
        assert!(prefs.exercise_reminders);
        assert!(!prefs.meal_reminders);
        assert_eq!(prefs.water_reminder_time, "10:00");
    }
}
