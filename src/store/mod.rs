// ABOUTME: Data store over the key-value storage engine with per-collection write serialization
// ABOUTME: Shared read-modify-write helpers; operation impls live in accounts, health, preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Data Store
//!
//! [`DataStore`] owns the storage handle and exposes every data-layer
//! operation. Implementations are split by domain:
//!
//! - [`accounts`]: registration, login, session, profile updates
//! - [`health`]: per-day metric records, range queries, CSV export
//! - [`preferences`]: the per-install notification preferences record
//!
//! Every mutation is a full-collection read-modify-write against one storage
//! key. Overlapping writes to the same collection would race (the second read
//! could predate the first persist), so each collection carries an async
//! mutex held across its read-modify-write sequence. Reads take no lock.

pub mod accounts;
pub mod health;
pub mod preferences;

use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::storage::{Storage, StorageProvider};

/// The data-layer entry point: account directory, health record store, and
/// notification preferences over one storage medium.
///
/// Cloning is cheap and clones share the collection locks, so any number of
/// handles may be used concurrently within one process.
#[derive(Clone)]
pub struct DataStore {
    storage: Storage,
    accounts_lock: Arc<Mutex<()>>,
    health_lock: Arc<Mutex<()>>,
    preferences_lock: Arc<Mutex<()>>,
}

impl DataStore {
    /// Create a data store over an already-opened storage backend.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            accounts_lock: Arc::new(Mutex::new(())),
            health_lock: Arc::new(Mutex::new(())),
            preferences_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open the storage backend described by `storage_url` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be created (see
    /// [`Storage::new`]).
    pub async fn open(storage_url: &str) -> AppResult<Self> {
        let storage = Storage::new(storage_url).await?;
        Ok(Self::new(storage))
    }

    /// The storage backend this store writes through.
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Today's local calendar date, the identity component of daily upserts.
    #[must_use]
    pub fn local_today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub(crate) const fn accounts_lock(&self) -> &Arc<Mutex<()>> {
        &self.accounts_lock
    }

    pub(crate) const fn health_lock(&self) -> &Arc<Mutex<()>> {
        &self.health_lock
    }

    pub(crate) const fn preferences_lock(&self) -> &Arc<Mutex<()>> {
        &self.preferences_lock
    }

    /// Read and deserialize the collection stored under `key`.
    ///
    /// An absent key is an empty collection. Corrupt stored data also
    /// collapses to empty for listing paths, with a warning; only a failure
    /// of the medium itself surfaces as an error.
    pub(crate) async fn read_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> AppResult<Vec<T>> {
        let raw = self
            .storage
            .read(key)
            .await
            .map_err(|error| log_storage_error(key, "read", &error))?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(error) => {
                warn!(key, %error, "Stored collection is corrupt; treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Serialize and write the full collection under `key`.
    pub(crate) async fn write_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> AppResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage
            .write(key, &raw)
            .await
            .map_err(|error| log_storage_error(key, "write", &error))
    }

    /// Read and deserialize the single record stored under `key`, if any.
    ///
    /// Corrupt stored data collapses to `None`, with a warning.
    pub(crate) async fn read_record<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let raw = self
            .storage
            .read(key)
            .await
            .map_err(|error| log_storage_error(key, "read", &error))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                warn!(key, %error, "Stored record is corrupt; treating as absent");
                Ok(None)
            }
        }
    }

    /// Serialize and write a single record under `key`.
    pub(crate) async fn write_record<T: Serialize>(&self, key: &str, record: &T) -> AppResult<()> {
        let raw = serde_json::to_string(record)?;
        self.storage
            .write(key, &raw)
            .await
            .map_err(|error| log_storage_error(key, "write", &error))
    }

    /// Remove the record stored under `key`, if present.
    pub(crate) async fn remove_record(&self, key: &str) -> AppResult<()> {
        self.storage
            .remove(key)
            .await
            .map_err(|error| log_storage_error(key, "remove", &error))
    }
}

fn log_storage_error(key: &str, operation: &str, error: &anyhow::Error) -> AppError {
    warn!(key, operation, %error, "Storage operation failed");
    AppError::storage(format!("Storage {operation} failed for key {key}: {error}"))
        .with_resource_id(key)
}
