// ABOUTME: External voice-agent collaborator traits and the event contract
// ABOUTME: The core depends only on this shape, never on a concrete vendor SDK
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! The voice-agent seam.
//!
//! The real-time conversation vendor is opaque to the core: it is driven
//! through [`VoiceAgent`] (start/end/mute) and reports back through
//! [`AgentEvent`]s on a channel the controller owns. Microphone access is
//! its own capability trait so platforms (and tests) can grant or deny it
//! independently of the vendor.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::context::ContextValue;
use crate::errors::CoachResult;
use crate::models::Speaker;

/// Connection status reported by the external agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Session is being established
    Connecting,
    /// Session is live
    Connected,
    /// Session has ended
    Disconnected,
}

/// One inbound message from the external agent.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentMessage {
    /// Who the vendor attributes the line to
    pub source: Speaker,
    /// Transcribed text
    pub text: String,
}

/// Events the external agent delivers while a session runs.
///
/// Events are applied in arrival order; the controller neither buffers
/// nor reorders them.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentEvent {
    /// A transcript line arrived
    Message(AgentMessage),
    /// The connection status changed
    StatusChange(ConnectionStatus),
    /// The vendor reported a failure
    Error(String),
}

/// Initialization payload for a session: the agent identity plus the
/// athlete context projections.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Vendor-side agent id
    pub agent_id: String,
    /// Flat context variables for the vendor's templating layer
    pub variables: BTreeMap<String, ContextValue>,
    /// Long-form briefing used as system context
    pub briefing: String,
}

/// Opaque handle to a running vendor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    /// Handle id, assigned by the agent implementation
    pub id: Uuid,
}

impl SessionHandle {
    /// Mint a fresh handle.
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver for the external real-time voice-conversation service.
#[async_trait]
pub trait VoiceAgent: Send + Sync {
    /// Start a session, delivering events to `events` until the session
    /// ends.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::ExternalAgent`](crate::errors::CoachError)
    /// when the vendor rejects the session.
    async fn start_session(
        &self,
        request: SessionRequest,
        events: mpsc::Sender<AgentEvent>,
    ) -> CoachResult<SessionHandle>;

    /// Request session termination. Best effort — the controller treats
    /// failures as non-blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor could not be told to stop.
    async fn end_session(&self, session: &SessionHandle) -> CoachResult<()>;

    /// Set the microphone mute state, returning the state the vendor
    /// actually applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the vendor rejected the change.
    async fn set_muted(&self, session: &SessionHandle, muted: bool) -> CoachResult<bool>;
}

/// Platform capability gate for microphone access.
#[async_trait]
pub trait MicrophoneAccess: Send + Sync {
    /// Request microphone permission from the platform.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::CapabilityDenied`](crate::errors::CoachError)
    /// when the user or platform refuses.
    async fn request_access(&self) -> CoachResult<()>;
}
