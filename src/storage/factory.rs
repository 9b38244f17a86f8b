// ABOUTME: Storage facade for location-based backend selection
// ABOUTME: Follows the pluggable-provider pattern so stores never name a concrete backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

use std::path::PathBuf;

use super::{file::FileStorage, memory::InMemoryStorage, StorageBackend};
use crate::config::StorageLocation;
use crate::errors::CoachResult;

/// Unified storage interface over the available backends.
///
/// Constructed once at application start and shared (via `Arc`) with every
/// store that needs it.
#[derive(Debug, Clone)]
pub struct Storage {
    inner: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Memory(InMemoryStorage),
    File(FileStorage),
}

impl Storage {
    /// Create a volatile in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Backend::Memory(InMemoryStorage::new()),
        }
    }

    /// Create a file-backed store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn file(dir: impl Into<PathBuf>) -> CoachResult<Self> {
        Ok(Self {
            inner: Backend::File(FileStorage::new(dir)?),
        })
    }

    /// Create a store for the configured location.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory-backed location cannot be opened.
    pub fn from_location(location: &StorageLocation) -> CoachResult<Self> {
        match location {
            StorageLocation::Memory => Ok(Self::in_memory()),
            StorageLocation::Directory(dir) => {
                tracing::info!(directory = %dir.display(), "opening file-backed document storage");
                Self::file(dir.clone())
            }
        }
    }

    /// Fetch the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub async fn get(&self, key: &str) -> CoachResult<Option<String>> {
        match &self.inner {
            Backend::Memory(backend) => backend.get(key).await,
            Backend::File(backend) => backend.get(key).await,
        }
    }

    /// Store `value` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write.
    pub async fn put(&self, key: &str, value: &str) -> CoachResult<()> {
        match &self.inner {
            Backend::Memory(backend) => backend.put(key, value).await,
            Backend::File(backend) => backend.put(key, value).await,
        }
    }

    /// Remove the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot perform the removal.
    pub async fn remove(&self, key: &str) -> CoachResult<()> {
        match &self.inner {
            Backend::Memory(backend) => backend.remove(key).await,
            Backend::File(backend) => backend.remove(key).await,
        }
    }
}
