// ABOUTME: Document storage abstraction with pluggable backends
// ABOUTME: One JSON document per namespaced key, in-memory or file-per-key on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Document Storage
//!
//! The persistence seam of the coach core: a key/value store holding one
//! JSON document per namespaced key. Backends are pluggable behind
//! [`StorageBackend`]; the [`Storage`](factory::Storage) facade selects
//! one from a [`StorageLocation`](crate::config::StorageLocation) and is
//! what the profile and logbook stores are constructed with — there is no
//! implicit global store, callers pass their store by reference.

/// Storage facade for backend selection
pub mod factory;
/// One JSON file per key under a directory
pub mod file;
/// Volatile in-memory storage
pub mod memory;

use crate::errors::CoachResult;

/// Backend trait for pluggable document storage.
///
/// Values are pre-serialized JSON strings; the stores above this layer own
/// serialization so a backend never needs to understand document shapes.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetch the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    async fn get(&self, key: &str) -> CoachResult<Option<String>>;

    /// Store `value` under `key`, replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the write (quota, missing
    /// directory, storage disabled).
    async fn put(&self, key: &str, value: &str) -> CoachResult<()>;

    /// Remove the document stored under `key`. Removing an absent key is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot perform the removal.
    async fn remove(&self, key: &str) -> CoachResult<()>;
}
