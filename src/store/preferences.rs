// ABOUTME: Notification preference persistence over the notificationSettings storage key
// ABOUTME: Loads the per-install record with defaults and saves replacements wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use super::DataStore;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::NotificationPreferences;

impl DataStore {
    /// Load the per-install notification preferences.
    ///
    /// An absent or corrupt record yields the defaults (water, sleep, and
    /// exercise reminders on; meals off). Preferences are not scoped to an
    /// account.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the read.
    pub async fn notification_preferences(&self) -> AppResult<NotificationPreferences> {
        let stored: Option<NotificationPreferences> = self
            .read_record(storage_keys::NOTIFICATION_SETTINGS)
            .await?;
        Ok(stored.unwrap_or_default())
    }

    /// Replace the per-install notification preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage medium fails the write.
    pub async fn save_notification_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> AppResult<()> {
        let _guard = self.preferences_lock().clone().lock_owned().await;
        self.write_record(storage_keys::NOTIFICATION_SETTINGS, preferences)
            .await
    }
}
