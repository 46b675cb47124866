// ABOUTME: Storage abstraction layer for the Vitalog data store
// ABOUTME: Plugin architecture for key-value persistence with memory and file backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! # Storage Engine
//!
//! An opaque, asynchronous, string-keyed storage medium. The data store treats
//! whatever lives behind this trait as the single source of truth: every
//! higher-level operation reads a full collection value, mutates it in memory,
//! and writes the full value back. There are no partial-row operations at this
//! seam, by design of the persisted layout.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod file;
pub mod memory;

pub use factory::{Storage, StorageType};

/// Core storage abstraction trait
///
/// All storage backends must implement this trait to provide a consistent
/// interface for the data-store layer. Values are opaque strings; callers own
/// serialization.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails to read. Absence is
    /// not an error.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails to persist the value.
    async fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails the removal.
    async fn remove(&self, key: &str) -> Result<()>;
}
