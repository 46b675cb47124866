// ABOUTME: File-per-key storage backend with atomic replace-on-write
// ABOUTME: Persists each collection as one JSON file under a data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalog Health

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::StorageProvider;

/// File-backed storage rooted at a data directory.
///
/// Each key maps to `<root>/<key>.json`. Writes land in a temporary sibling
/// file first and are renamed into place, so a crash mid-write leaves the old
/// value intact rather than a truncated file.
#[derive(Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a file store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// The data directory this store writes under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageProvider for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(error).with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => {
                Err(error).with_context(|| format!("Failed to remove {}", path.display()))
            }
        }
    }
}
