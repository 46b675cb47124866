// ABOUTME: Application configuration resolved from the environment
// ABOUTME: Storage location selection with a platform data-directory default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Environment-based configuration.

use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage connection string: `memory://` or a data-directory path
    pub storage_url: String,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve configuration from environment variables.
    ///
    /// `VITALOG_STORAGE_URL` overrides the storage location; otherwise data
    /// lives under the platform data directory (for example
    /// `~/.local/share/vitalog`).
    ///
    /// # Errors
    ///
    /// Returns an error if no storage override is set and the platform data
    /// directory cannot be determined.
    pub fn from_env() -> AppResult<Self> {
        let storage_url = match env::var("VITALOG_STORAGE_URL") {
            Ok(url) => url,
            Err(_) => default_data_dir()?.to_string_lossy().into_owned(),
        };

        let config = Self {
            storage_url,
            logging: LoggingConfig::from_env(),
        };
        info!(storage_url = %config.storage_url, "Configuration resolved");
        Ok(config)
    }
}

/// The default on-device data directory.
///
/// # Errors
///
/// Returns an error if the platform has no data directory.
pub fn default_data_dir() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(service_names::VITALOG))
        .ok_or_else(|| AppError::config("No platform data directory available"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir_ends_with_service_name() {
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(service_names::VITALOG));
        }
    }
}
