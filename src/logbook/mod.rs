// ABOUTME: Logbook store for the satellite documents around the athlete profile
// ABOUTME: Training logs, nutrition logs, preferences, conversation history, performance data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Logbook
//!
//! The documents that orbit the athlete profile: standalone training and
//! nutrition logs, dashboard preferences, conversation history, and
//! performance results. Each lives under its own storage key. The same
//! recovery policy as the profile store applies — reads degrade to empty
//! lists or defaults, writes report success as a boolean, and failures
//! are logged rather than propagated.

use std::sync::Arc;

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};

use crate::constants::{limits, storage_keys};
use crate::models::{
    ConversationRecord, DataExport, NutritionLogEntry, PerformanceEntry, TrainingLogEntry,
    UserPreferences,
};
use crate::profile::ProfileStore;
use crate::storage::factory::Storage;

/// Store for the satellite documents around the athlete profile.
#[derive(Debug, Clone)]
pub struct Logbook {
    storage: Arc<Storage>,
}

impl Logbook {
    /// Create a logbook over shared document storage.
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Seed empty lists and default preferences for any document that does
    /// not exist yet. Returns `false` if any seed write failed.
    pub async fn ensure_defaults(&self) -> bool {
        let mut ok = true;
        if self
            .read_list::<TrainingLogEntry>(storage_keys::TRAINING_LOGS)
            .await
            .is_none()
        {
            ok &= self
                .write_doc(storage_keys::TRAINING_LOGS, &Vec::<TrainingLogEntry>::new())
                .await;
        }
        if self
            .read_list::<NutritionLogEntry>(storage_keys::NUTRITION_LOGS)
            .await
            .is_none()
        {
            ok &= self
                .write_doc(
                    storage_keys::NUTRITION_LOGS,
                    &Vec::<NutritionLogEntry>::new(),
                )
                .await;
        }
        if self.read_doc::<UserPreferences>(storage_keys::USER_PREFERENCES).await.is_none() {
            ok &= self
                .write_doc(storage_keys::USER_PREFERENCES, &UserPreferences::default())
                .await;
        }
        ok
    }

    // ── Training logs ───────────────────────────────────────────────────

    /// All training log entries, oldest first. Empty when none exist or
    /// the document is unreadable.
    pub async fn training_logs(&self) -> Vec<TrainingLogEntry> {
        self.read_list(storage_keys::TRAINING_LOGS)
            .await
            .unwrap_or_default()
    }

    /// Append a training log entry.
    pub async fn add_training_log(&self, entry: TrainingLogEntry) -> bool {
        let mut logs = self.training_logs().await;
        logs.push(entry);
        self.write_doc(storage_keys::TRAINING_LOGS, &logs).await
    }

    // ── Nutrition logs ──────────────────────────────────────────────────

    /// All nutrition log entries, oldest first.
    pub async fn nutrition_logs(&self) -> Vec<NutritionLogEntry> {
        self.read_list(storage_keys::NUTRITION_LOGS)
            .await
            .unwrap_or_default()
    }

    /// Append a nutrition log entry.
    pub async fn add_nutrition_log(&self, entry: NutritionLogEntry) -> bool {
        let mut logs = self.nutrition_logs().await;
        logs.push(entry);
        self.write_doc(storage_keys::NUTRITION_LOGS, &logs).await
    }

    // ── Preferences ─────────────────────────────────────────────────────

    /// User preferences, defaulted when absent or unreadable.
    pub async fn preferences(&self) -> UserPreferences {
        self.read_doc(storage_keys::USER_PREFERENCES)
            .await
            .unwrap_or_default()
    }

    /// Merge an update into the preferences document.
    pub async fn update_preferences<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&mut UserPreferences),
    {
        let mut preferences = self.preferences().await;
        apply(&mut preferences);
        self.write_doc(storage_keys::USER_PREFERENCES, &preferences)
            .await
    }

    // ── Conversation history ────────────────────────────────────────────

    /// Retained conversation records, oldest first.
    pub async fn conversation_history(&self) -> Vec<ConversationRecord> {
        self.read_list(storage_keys::CONVERSATION_HISTORY)
            .await
            .unwrap_or_default()
    }

    /// Append a conversation record, evicting the oldest entries beyond
    /// the retention cap.
    pub async fn add_conversation(&self, record: ConversationRecord) -> bool {
        let mut history = self.conversation_history().await;
        history.push(record);
        if history.len() > limits::CONVERSATION_HISTORY_MAX {
            let excess = history.len() - limits::CONVERSATION_HISTORY_MAX;
            history.drain(..excess);
        }
        self.write_doc(storage_keys::CONVERSATION_HISTORY, &history)
            .await
    }

    /// Remove all retained conversation records.
    pub async fn clear_conversation_history(&self) -> bool {
        match self
            .storage
            .remove(storage_keys::CONVERSATION_HISTORY)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "could not clear conversation history");
                false
            }
        }
    }

    // ── Performance data ────────────────────────────────────────────────

    /// All performance entries, oldest first.
    pub async fn performance_data(&self) -> Vec<PerformanceEntry> {
        self.read_list(storage_keys::PERFORMANCE_DATA)
            .await
            .unwrap_or_default()
    }

    /// Append a performance entry.
    pub async fn add_performance(&self, entry: PerformanceEntry) -> bool {
        let mut entries = self.performance_data().await;
        entries.push(entry);
        self.write_doc(storage_keys::PERFORMANCE_DATA, &entries)
            .await
    }

    // ── Context summaries ───────────────────────────────────────────────

    /// One-line summary of the most recent training log entries, for
    /// conversational context.
    pub async fn recent_training_summary(&self) -> String {
        let logs = self.training_logs().await;
        let recent: Vec<&TrainingLogEntry> = logs
            .iter()
            .rev()
            .take(limits::CONTEXT_TRAINING_LOGS)
            .collect();
        if recent.is_empty() {
            return "No recent training data logged.".to_owned();
        }
        recent
            .iter()
            .rev()
            .map(|entry| {
                format!(
                    "{}: {} - {} ({}min, {} intensity)",
                    entry.date,
                    entry.session_type,
                    entry.focus,
                    entry.duration_minutes,
                    entry.intensity
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// One-line calorie-average summary of the most recent nutrition log
    /// entries, for conversational context.
    pub async fn nutrition_summary(&self) -> String {
        let logs = self.nutrition_logs().await;
        let recent: Vec<&NutritionLogEntry> = logs
            .iter()
            .rev()
            .take(limits::CONTEXT_NUTRITION_LOGS)
            .collect();
        if recent.is_empty() {
            return "No recent nutrition data logged.".to_owned();
        }
        let total: u64 = recent.iter().map(|log| u64::from(log.total_calories)).sum();
        let average = (total as f64 / recent.len() as f64).round() as u64;
        format!(
            "Recent nutrition: averaging {average} calories/day over {} days",
            recent.len()
        )
    }

    // ── Export / clear ──────────────────────────────────────────────────

    /// Bundle every stored document for export.
    pub async fn export_all(&self, profiles: &ProfileStore) -> DataExport {
        DataExport {
            athlete_profile: profiles.read().await,
            training_logs: self.training_logs().await,
            nutrition_logs: self.nutrition_logs().await,
            user_preferences: self.preferences().await,
            conversation_history: self.conversation_history().await,
            performance_data: self.performance_data().await,
            export_date: Utc::now(),
        }
    }

    /// Remove every stored document, then re-seed the defaults. Returns
    /// `false` if any removal or seed write failed.
    pub async fn clear_all(&self, profiles: &ProfileStore) -> bool {
        let mut ok = true;
        for key in storage_keys::ALL {
            if let Err(err) = self.storage.remove(key).await {
                error!(key, error = %err, "could not remove document");
                ok = false;
            }
        }
        // Re-seed: reading the profile writes the default back, and the
        // logbook seeds its empty documents.
        let _ = profiles.read().await;
        ok &= self.ensure_defaults().await;
        ok
    }

    // ── Shared plumbing ─────────────────────────────────────────────────

    async fn read_doc<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.storage.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(key, error = %err, "stored document is corrupt, using default");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(key, error = %err, "storage unavailable, using default");
                None
            }
        }
    }

    async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        self.read_doc(key).await
    }

    async fn write_doc<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                error!(key, error = %err, "could not serialize document");
                return false;
            }
        };
        match self.storage.put(key, &raw).await {
            Ok(()) => true,
            Err(err) => {
                error!(key, error = %err, "could not persist document");
                false
            }
        }
    }
}
