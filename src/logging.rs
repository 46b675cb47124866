// ABOUTME: Logging configuration and structured logging setup for the data layer and CLI
// ABOUTME: Configures log level, output format, and subscriber initialization from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Structured logging configuration with environment overrides

use anyhow::Result;
use std::env;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine-read logs
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::VITALOG.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::VITALOG.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the tracing subscriber fails to initialize, for
    /// example when one is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_names(self.include_thread)
                    .with_span_events(FmtSpan::NONE);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_names(self.include_thread)
                    .with_target(false);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_names(self.include_thread)
                    .with_target(false);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .try_init()?;
            }
        }

        tracing::debug!(
            service = %self.service_name,
            version = %self.service_version,
            "Logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, service_names::VITALOG);
    }
}
