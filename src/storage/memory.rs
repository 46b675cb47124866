// ABOUTME: In-memory storage backend over a concurrent map
// ABOUTME: Volatile key-value store used by tests and ephemeral sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use super::StorageProvider;

/// Volatile in-process storage backend.
///
/// Clones share the same underlying map, matching the semantics of a single
/// storage medium viewed through multiple handles.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_roundtrip() {
        let storage = MemoryStorage::new();
        storage.write("users", "[]").await.unwrap();
        assert_eq!(storage.read("users").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_absent_key_reads_none() {
        let storage = MemoryStorage::new();
        assert!(storage.read("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.write("k", "v").await.unwrap();
        storage.remove("k").await.unwrap();
        storage.remove("k").await.unwrap();
        assert!(storage.read("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let storage = MemoryStorage::new();
        let view = storage.clone();
        storage.write("k", "v").await.unwrap();
        assert_eq!(view.read("k").await.unwrap().as_deref(), Some("v"));
    }
}
