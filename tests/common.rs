// ABOUTME: Shared helpers for integration tests
// ABOUTME: In-memory stores, mock voice agent, and microphone capability stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

#![allow(dead_code)] // Each test binary uses a subset of these helpers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::mpsc;

use pace_coach_core::errors::{CoachError, CoachResult};
use pace_coach_core::logbook::Logbook;
use pace_coach_core::profile::ProfileStore;
use pace_coach_core::session::{
    AgentEvent, MicrophoneAccess, SessionHandle, SessionRequest, VoiceAgent,
};
use pace_coach_core::storage::factory::Storage;

/// Shared in-memory storage with both stores over it.
pub fn memory_stores() -> (Arc<Storage>, ProfileStore, Logbook) {
    let storage = Arc::new(Storage::in_memory());
    let profiles = ProfileStore::new(Arc::clone(&storage));
    let logbook = Logbook::new(Arc::clone(&storage));
    (storage, profiles, logbook)
}

/// A Monday morning, fixed for deterministic weekday lookups.
pub fn monday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 11, 10, 0, 0).unwrap()
}

/// Mock voice agent recording every start request and exposing the event
/// sender handed to it.
#[derive(Clone, Default)]
pub struct MockVoiceAgent {
    pub requests: Arc<Mutex<Vec<SessionRequest>>>,
    pub ended: Arc<Mutex<Vec<SessionHandle>>>,
    pub events_tx: Arc<Mutex<Option<mpsc::Sender<AgentEvent>>>>,
    pub fail_start: bool,
}

impl MockVoiceAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_start: true,
            ..Self::default()
        }
    }

    /// The event sender captured from the last `start_session` call.
    pub fn sender(&self) -> mpsc::Sender<AgentEvent> {
        self.events_tx
            .lock()
            .unwrap()
            .clone()
            .expect("start_session not called")
    }
}

#[async_trait]
impl VoiceAgent for MockVoiceAgent {
    async fn start_session(
        &self,
        request: SessionRequest,
        events: mpsc::Sender<AgentEvent>,
    ) -> CoachResult<SessionHandle> {
        if self.fail_start {
            return Err(CoachError::ExternalAgent("simulated vendor outage".into()));
        }
        self.requests.lock().unwrap().push(request);
        *self.events_tx.lock().unwrap() = Some(events);
        Ok(SessionHandle::new())
    }

    async fn end_session(&self, session: &SessionHandle) -> CoachResult<()> {
        self.ended.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn set_muted(&self, _session: &SessionHandle, muted: bool) -> CoachResult<bool> {
        Ok(muted)
    }
}

/// Microphone capability that always grants access.
#[derive(Clone, Copy, Default)]
pub struct GrantedMicrophone;

#[async_trait]
impl MicrophoneAccess for GrantedMicrophone {
    async fn request_access(&self) -> CoachResult<()> {
        Ok(())
    }
}

/// Microphone capability that always denies access.
#[derive(Clone, Copy, Default)]
pub struct DeniedMicrophone;

#[async_trait]
impl MicrophoneAccess for DeniedMicrophone {
    async fn request_access(&self) -> CoachResult<()> {
        Err(CoachError::CapabilityDenied(
            "microphone permission refused".into(),
        ))
    }
}
