// ABOUTME: In-memory storage backend for tests and storage-disabled environments
// ABOUTME: Documents live in a shared map and are lost when the process exits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::StorageBackend;
use crate::errors::CoachResult;

/// In-memory document storage.
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one map, matching the
/// one-namespace-per-installation model. This is the substitute backend
/// for tests and the degraded mode when durable storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for InMemoryStorage {
    async fn get(&self, key: &str) -> CoachResult<Option<String>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> CoachResult<()> {
        self.documents
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoachResult<()> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}
