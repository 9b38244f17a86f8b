// ABOUTME: Integration tests for the pluggable storage backends
// ABOUTME: Covers in-memory and file-per-key document storage behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

use anyhow::Result;

use pace_coach_core::storage::factory::Storage;
use pace_coach_core::storage::file::FileStorage;
use pace_coach_core::storage::memory::InMemoryStorage;
use pace_coach_core::storage::StorageBackend;

#[tokio::test]
async fn memory_backend_round_trips_documents() -> Result<()> {
    let storage = InMemoryStorage::new();

    assert_eq!(storage.get("pace_test").await?, None);

    storage.put("pace_test", r#"{"value":42}"#).await?;
    assert_eq!(
        storage.get("pace_test").await?.as_deref(),
        Some(r#"{"value":42}"#)
    );

    storage.remove("pace_test").await?;
    assert_eq!(storage.get("pace_test").await?, None);

    Ok(())
}

#[tokio::test]
async fn memory_backend_clones_share_documents() -> Result<()> {
    let storage = InMemoryStorage::new();
    let clone = storage.clone();

    storage.put("pace_shared", "\"doc\"").await?;
    assert_eq!(clone.get("pace_shared").await?.as_deref(), Some("\"doc\""));

    Ok(())
}

#[tokio::test]
async fn file_backend_persists_across_instances() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let storage = FileStorage::new(dir.path())?;
    storage.put("pace_athlete_profile", r#"{"name":"t"}"#).await?;
    drop(storage);

    let reopened = FileStorage::new(dir.path())?;
    assert_eq!(
        reopened.get("pace_athlete_profile").await?.as_deref(),
        Some(r#"{"name":"t"}"#)
    );

    Ok(())
}

#[tokio::test]
async fn file_backend_overwrites_existing_documents() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path())?;

    storage.put("pace_doc", "\"first\"").await?;
    storage.put("pace_doc", "\"second\"").await?;

    assert_eq!(storage.get("pace_doc").await?.as_deref(), Some("\"second\""));

    Ok(())
}

#[tokio::test]
async fn file_backend_removing_absent_key_is_ok() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let storage = FileStorage::new(dir.path())?;

    storage.remove("pace_never_written").await?;

    Ok(())
}

#[tokio::test]
async fn facade_delegates_to_selected_backend() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let memory = Storage::in_memory();
    memory.put("pace_doc", "\"mem\"").await?;
    assert_eq!(memory.get("pace_doc").await?.as_deref(), Some("\"mem\""));

    let file = Storage::file(dir.path())?;
    file.put("pace_doc", "\"disk\"").await?;
    assert_eq!(file.get("pace_doc").await?.as_deref(), Some("\"disk\""));
    assert!(dir.path().join("pace_doc.json").exists());

    Ok(())
}
