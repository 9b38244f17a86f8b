// ABOUTME: ProfileStore - reads and writes the single athlete profile document
// ABOUTME: Seeds defaults when absent, recovers from corruption, applies typed updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Athlete Profile Store
//!
//! The one persisted [`AthleteProfile`] document lives behind this store.
//! Reads never fail: a missing document is seeded with the canonical
//! default profile, and a corrupt or unreadable one falls back to the
//! default (logged, stored bytes left untouched). Writes report success as
//! a boolean and log failures — storage problems never propagate past
//! this boundary.
//!
//! Concurrent writers from multiple processes are last-writer-wins; the
//! store targets a single-user local tool and does not lock the document.

/// Typed field references and the update dispatcher
pub mod field;

use std::sync::Arc;

use tracing::{error, warn};

use crate::constants::{limits, storage_keys};
use crate::errors::{CoachError, CoachResult};
use crate::models::{defaults, AthleteProfile, CurrentStatus, Lifestyle, Training, TrainingSession};
use crate::storage::factory::Storage;

pub use field::{apply as apply_field, clamp_rpe, FieldValue, ProfileField};

/// Store for the single athlete profile document.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    storage: Arc<Storage>,
}

impl ProfileStore {
    /// Create a profile store over shared document storage.
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Read the athlete profile. Never fails.
    ///
    /// A missing document is seeded with the default profile so the next
    /// read is served from storage. Corrupt documents and unavailable
    /// backends degrade to the default profile, logged.
    pub async fn read(&self) -> AthleteProfile {
        match self.storage.get(storage_keys::ATHLETE_PROFILE).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(err) => {
                    warn!(
                        key = storage_keys::ATHLETE_PROFILE,
                        error = %err,
                        "stored athlete profile is corrupt, using default profile"
                    );
                    defaults::default_profile()
                }
            },
            Ok(None) => {
                let profile = defaults::default_profile();
                if !self.write(&profile).await {
                    warn!("could not seed default athlete profile, continuing in memory");
                }
                profile
            }
            Err(err) => {
                warn!(error = %err, "profile storage unavailable, using default profile");
                defaults::default_profile()
            }
        }
    }

    /// Persist the profile. Returns `false` on any serialization or
    /// storage failure; failures are logged, never propagated.
    pub async fn write(&self, profile: &AthleteProfile) -> bool {
        let raw = match serde_json::to_string(profile) {
            Ok(raw) => raw,
            Err(err) => {
                error!(error = %err, "could not serialize athlete profile");
                return false;
            }
        };
        match self.storage.put(storage_keys::ATHLETE_PROFILE, &raw).await {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "could not persist athlete profile");
                false
            }
        }
    }

    /// Update one typed field and persist, returning the updated profile.
    ///
    /// Measurement fields recompute their derived values in the same
    /// write, so the stored document never holds inconsistent pairs.
    ///
    /// # Errors
    ///
    /// [`CoachError::InvalidField`] when the value kind does not match the
    /// field; [`CoachError::StorageUnavailable`] when the updated profile
    /// could not be persisted.
    pub async fn update_field(
        &self,
        field: ProfileField,
        value: FieldValue,
    ) -> CoachResult<AthleteProfile> {
        let mut profile = self.read().await;
        field::apply(&mut profile, field, value)?;
        if self.write(&profile).await {
            Ok(profile)
        } else {
            Err(CoachError::StorageUnavailable(
                "updated profile could not be persisted".into(),
            ))
        }
    }

    /// Merge an update into the training section.
    pub async fn update_training<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&mut Training),
    {
        let mut profile = self.read().await;
        apply(&mut profile.training);
        self.write(&profile).await
    }

    /// Merge an update into the lifestyle section.
    pub async fn update_lifestyle<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&mut Lifestyle),
    {
        let mut profile = self.read().await;
        apply(&mut profile.lifestyle);
        self.write(&profile).await
    }

    /// Merge an update into the current-status subsection.
    pub async fn update_current_status<F>(&self, apply: F) -> bool
    where
        F: FnOnce(&mut CurrentStatus),
    {
        let mut profile = self.read().await;
        apply(&mut profile.lifestyle.current_status);
        self.write(&profile).await
    }

    /// Merge new personal bests into the profile, replacing marks for
    /// events already present.
    pub async fn update_personal_bests<I>(&self, bests: I) -> bool
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut profile = self.read().await;
        profile.profile.personal_bests.extend(bests);
        self.write(&profile).await
    }

    /// Prepend a training session to the recent list, evicting the oldest
    /// entries beyond the cap. RPE is clamped to 0-10 on the way in.
    pub async fn add_training_session(&self, mut session: TrainingSession) -> bool {
        session.rpe = field::clamp_rpe(session.rpe);
        let mut profile = self.read().await;
        profile.training.recent_sessions.insert(0, session);
        profile
            .training
            .recent_sessions
            .truncate(limits::RECENT_SESSIONS_MAX);
        self.write(&profile).await
    }

    /// Remove the profile document. The next read re-seeds the default.
    pub async fn clear(&self) -> bool {
        match self.storage.remove(storage_keys::ATHLETE_PROFILE).await {
            Ok(()) => true,
            Err(err) => {
                error!(error = %err, "could not clear athlete profile");
                false
            }
        }
    }
}
