// ABOUTME: File-backed storage backend keeping one JSON file per document key
// ABOUTME: Writes go through a temp file and rename so documents are never half-written
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

use std::path::{Path, PathBuf};

use tokio::fs;

use super::StorageBackend;
use crate::errors::{CoachError, CoachResult};

/// Durable document storage: one `<key>.json` file per key under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a file store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::StorageUnavailable`] if the directory cannot
    /// be created.
    pub fn new(root: impl Into<PathBuf>) -> CoachResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|err| {
            CoachError::StorageUnavailable(format!(
                "cannot create storage directory {}: {err}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    /// Directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait::async_trait]
impl StorageBackend for FileStorage {
    async fn get(&self, key: &str) -> CoachResult<Option<String>> {
        match fs::read_to_string(self.document_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CoachError::StorageUnavailable(format!(
                "cannot read document '{key}': {err}"
            ))),
        }
    }

    async fn put(&self, key: &str, value: &str) -> CoachResult<()> {
        // Write to a sibling temp file and rename so a crash mid-write
        // never leaves a truncated document behind.
        let path = self.document_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).await.map_err(|err| {
            CoachError::StorageUnavailable(format!("cannot write document '{key}': {err}"))
        })?;
        fs::rename(&tmp, &path).await.map_err(|err| {
            CoachError::StorageUnavailable(format!("cannot commit document '{key}': {err}"))
        })
    }

    async fn remove(&self, key: &str) -> CoachResult<()> {
        match fs::remove_file(self.document_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CoachError::StorageUnavailable(format!(
                "cannot remove document '{key}': {err}"
            ))),
        }
    }
}
