// ABOUTME: Storage factory and backend abstraction for runtime backend selection
// ABOUTME: Detects memory vs. file backends from a connection string and delegates operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

//! Storage factory for creating storage backends
//!
//! This module provides automatic backend detection and creation based on
//! connection strings.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::file::FileStorage;
use super::memory::MemoryStorage;
use super::StorageProvider;

/// Supported storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// Volatile in-process map, for tests and ephemeral sessions
    Memory,
    /// JSON files under a data directory, for on-device persistence
    File,
}

/// Storage instance wrapper that delegates to the appropriate backend
#[derive(Clone)]
pub enum Storage {
    /// In-memory backend
    Memory(MemoryStorage),
    /// File-per-key backend
    File(FileStorage),
}

impl Storage {
    /// Get a descriptive string for the current storage backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "Memory (Volatile)",
            Self::File(_) => "File (On-Device)",
        }
    }

    /// Get the storage type enum
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        match self {
            Self::Memory(_) => StorageType::Memory,
            Self::File(_) => StorageType::File,
        }
    }

    /// Create a new storage instance based on the connection string.
    ///
    /// `memory://` selects the in-memory backend; `file:<path>` or a bare
    /// filesystem path selects the file backend rooted at that directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The connection string is empty
    /// - The file backend's data directory cannot be created
    pub async fn new(storage_url: &str) -> Result<Self> {
        debug!("Detecting storage type from URL: {}", storage_url);
        let storage_type = detect_storage_type(storage_url)?;
        info!("Detected storage type: {:?}", storage_type);

        match storage_type {
            StorageType::Memory => Ok(Self::Memory(MemoryStorage::new())),
            StorageType::File => {
                let path = storage_url.strip_prefix("file:").unwrap_or(storage_url);
                let storage = FileStorage::new(path).await?;
                Ok(Self::File(storage))
            }
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Memory(storage) => storage.read(key).await,
            Self::File(storage) => storage.read(key).await,
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Memory(storage) => storage.write(key, value).await,
            Self::File(storage) => storage.write(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Memory(storage) => storage.remove(key).await,
            Self::File(storage) => storage.remove(key).await,
        }
    }
}

/// Detect the backend type from a connection string
fn detect_storage_type(storage_url: &str) -> Result<StorageType> {
    if storage_url.is_empty() {
        return Err(anyhow!("Storage URL must not be empty"));
    }
    if storage_url == "memory://" || storage_url == "memory" {
        return Ok(StorageType::Memory);
    }
    Ok(StorageType::File)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_memory_backend() {
        assert_eq!(
            detect_storage_type("memory://").unwrap(),
            StorageType::Memory
        );
    }

    #[test]
    fn test_detect_file_backend() {
        assert_eq!(
            detect_storage_type("/tmp/vitalog-data").unwrap(),
            StorageType::File
        );
        assert_eq!(
            detect_storage_type("file:/tmp/vitalog-data").unwrap(),
            StorageType::File
        );
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(detect_storage_type("").is_err());
    }

    #[tokio::test]
    async fn test_factory_creates_memory_backend() {
        let storage = Storage::new("memory://").await.unwrap();
        assert_eq!(storage.storage_type(), StorageType::Memory);
    }
}
