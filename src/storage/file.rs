// ABOUTME: File-backed state store writing one JSON document per key
// ABOUTME: Files live in the configured data directory and are replaced atomically on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use super::StateStore;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Stores each key as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Use `data_dir`, which is created on first save
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the document for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if `key` could escape the data directory
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "Storage key '{key}' must be alphanumeric, '_' or '-'"
            )));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    async fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}",
                self.data_dir.display()
            ))
            .with_source(e)
        })?;

        // Write beside the target, then rename over it
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, &path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
        })?;

        debug!(path = %path.display(), bytes = value.len(), "State document written");
        Ok(())
    }
}
