// ABOUTME: Unified error handling with stable error codes for the data layer
// ABOUTME: Defines ErrorCode, AppError with attachable context, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Unified Error Handling
//!
//! This module provides the centralized error type for Vitalog. It defines
//! stable error codes and a single [`AppError`] carrier so every operation in
//! the data layer fails the same way, regardless of which collection or
//! backend produced the failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials = 1000,

    // Validation (3000-3999)
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3001,
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    #[serde(rename = "ACCOUNT_NOT_FOUND")]
    AccountNotFound = 4000,
    #[serde(rename = "DUPLICATE_EMAIL")]
    DuplicateEmail = 4001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_UNAVAILABLE")]
    StorageUnavailable = 9001,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "The provided email or password is incorrect",
            Self::ValidationFailed => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidFormat => "The data format is invalid",
            Self::AccountNotFound => "The requested account was not found",
            Self::DuplicateEmail => "An account with this email already exists",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::StorageUnavailable => "The storage medium failed to read or write",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Account ID if the failure is scoped to one account
    pub account_id: Option<Uuid>,
    /// Resource ID if applicable (record ID, storage key)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            account_id: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add an account ID to the error context
    #[must_use]
    pub fn with_account_id(mut self, account_id: Uuid) -> Self {
        self.context.account_id = Some(account_id);
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid login credentials
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid email or password")
    }

    /// Email collision on registration
    #[must_use]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self::new(
            ErrorCode::DuplicateEmail,
            format!("An account with email {email} already exists"),
        )
        .with_resource_id(email)
    }

    /// Account lookup miss
    #[must_use]
    pub fn account_not_found(account_id: Uuid) -> Self {
        Self::new(
            ErrorCode::AccountNotFound,
            format!("Account {account_id} not found"),
        )
        .with_account_id(account_id)
    }

    /// Storage medium read/write failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageUnavailable, message)
    }

    /// Serialization/deserialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Caller-side validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Numeric value outside its allowed range
    pub fn value_out_of_range(field: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_resource_id(field)
    }

    /// Malformed structured data (dates, times, stored JSON)
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Conversion from `anyhow::Error` (the storage-provider seam) to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => {
                Self::new(ErrorCode::StorageUnavailable, error.to_string()).with_details(
                    serde_json::json!({
                        "source": source.to_string()
                    }),
                )
            }
            None => Self::new(ErrorCode::StorageUnavailable, error.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_descriptions() {
        assert!(ErrorCode::DuplicateEmail.description().contains("email"));
        assert!(ErrorCode::StorageUnavailable
            .description()
            .contains("storage"));
    }

    #[test]
    fn test_app_error_creation() {
        let account_id = Uuid::new_v4();
        let error = AppError::account_not_found(account_id);

        assert_eq!(error.code, ErrorCode::AccountNotFound);
        assert_eq!(error.context.account_id, Some(account_id));
        assert!(error.message.contains(&account_id.to_string()));
    }

    #[test]
    fn test_duplicate_email_carries_resource() {
        let error = AppError::duplicate_email("a@b.com");
        assert_eq!(error.code, ErrorCode::DuplicateEmail);
        assert_eq!(error.context.resource_id.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::DuplicateEmail).unwrap();
        assert_eq!(json, "\"DUPLICATE_EMAIL\"");
    }
}
