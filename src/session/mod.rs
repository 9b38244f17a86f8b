// ABOUTME: Conversation session controller - state machine around the external voice agent
// ABOUTME: Owns the transcript, the elapsed-duration counter, and the mute flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Conversation Session Controller
//!
//! Thin state machine around starting and stopping a voice session:
//!
//! ```text
//! Idle -> Connecting -> Connected -> Idle        (normal path)
//!         Connecting -> Error     -> Idle        (failed start)
//!         Connected  -> Idle                     (user-initiated end)
//! ```
//!
//! The controller drives a [`VoiceAgent`] with the athlete's context
//! projections, applies the agent's events in arrival order, appends every
//! inbound message to an append-only transcript, and runs a one-second
//! elapsed counter while connected. At most one session is in flight:
//! starting while `Connecting` or `Connected` is a precondition violation
//! the UI must prevent.

/// Voice-agent collaborator traits and events
pub mod agent;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::constants::agent as agent_constants;
use crate::context::{briefing, variables};
use crate::errors::{CoachError, CoachResult};
use crate::models::{AthleteProfile, TranscriptEntry};

pub use agent::{
    AgentEvent, AgentMessage, ConnectionStatus, MicrophoneAccess, SessionHandle, SessionRequest,
    VoiceAgent,
};

/// Controller states observable by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session; start is permitted
    Idle,
    /// Waiting for the agent to come up
    Connecting,
    /// Live conversation
    Connected,
    /// A start failed or the agent reported an error
    Error,
}

/// State machine around one voice conversation at a time.
pub struct ConversationSessionController<A, M> {
    agent: A,
    microphone: M,
    agent_id: String,
    state: SessionState,
    status_message: Option<String>,
    session: Option<SessionHandle>,
    events: Option<mpsc::Receiver<AgentEvent>>,
    transcript: Vec<TranscriptEntry>,
    muted: bool,
    elapsed: Arc<AtomicU64>,
    ticker: Option<JoinHandle<()>>,
}

impl<A, M> ConversationSessionController<A, M>
where
    A: VoiceAgent,
    M: MicrophoneAccess,
{
    /// Create an idle controller for the given agent id.
    #[must_use]
    pub fn new(agent: A, microphone: M, agent_id: impl Into<String>) -> Self {
        Self {
            agent,
            microphone,
            agent_id: agent_id.into(),
            state: SessionState::Idle,
            status_message: None,
            session: None,
            events: None,
            transcript: Vec::new(),
            muted: false,
            elapsed: Arc::new(AtomicU64::new(0)),
            ticker: None,
        }
    }

    /// Start a session with the athlete's context projections.
    ///
    /// Requires microphone permission; denial moves the controller to
    /// `Error` with a user-facing reason. A prior `Error` state is cleared
    /// by a new start attempt.
    ///
    /// # Errors
    ///
    /// [`CoachError::SessionActive`] when a session is already connecting
    /// or connected (the UI must disable start outside `Idle`);
    /// [`CoachError::CapabilityDenied`] or [`CoachError::ExternalAgent`]
    /// when the start itself fails.
    pub async fn start(&mut self, profile: &AthleteProfile) -> CoachResult<()> {
        match self.state {
            SessionState::Connecting | SessionState::Connected => {
                return Err(CoachError::SessionActive);
            }
            SessionState::Error => {
                self.status_message = None;
                self.state = SessionState::Idle;
            }
            SessionState::Idle => {}
        }

        if let Err(err) = self.microphone.request_access().await {
            self.state = SessionState::Error;
            self.status_message = Some(err.user_message());
            return Err(err);
        }

        self.state = SessionState::Connecting;

        let now = Utc::now();
        let request = SessionRequest {
            agent_id: self.agent_id.clone(),
            variables: variables::map_to_variables(profile, now),
            briefing: briefing::compose(profile, now),
        };

        let (sender, receiver) = mpsc::channel(agent_constants::EVENT_CHANNEL_CAPACITY);
        match self.agent.start_session(request, sender).await {
            Ok(handle) => {
                debug!(session = %handle.id, "voice session requested");
                self.session = Some(handle);
                self.events = Some(receiver);
                Ok(())
            }
            Err(err) => {
                self.state = SessionState::Error;
                self.status_message = Some(err.user_message());
                self.events = None;
                Err(err)
            }
        }
    }

    /// Apply one agent event. Events must be applied in arrival order;
    /// the last status write wins.
    pub fn handle_event(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::Message(message) => {
                self.transcript.push(TranscriptEntry {
                    speaker: message.source,
                    text: message.text,
                    timestamp: Utc::now(),
                });
            }
            AgentEvent::StatusChange(ConnectionStatus::Connecting) => {
                self.stop_ticker(false);
                self.state = SessionState::Connecting;
            }
            AgentEvent::StatusChange(ConnectionStatus::Connected) => {
                self.state = SessionState::Connected;
                self.status_message = None;
                self.start_ticker();
            }
            AgentEvent::StatusChange(ConnectionStatus::Disconnected) => {
                self.stop_ticker(true);
                self.state = SessionState::Idle;
                self.session = None;
                self.events = None;
            }
            AgentEvent::Error(reason) => {
                self.stop_ticker(false);
                warn!(reason = %reason, "voice agent reported an error");
                self.state = SessionState::Error;
                self.status_message = Some(reason);
            }
        }
    }

    /// Drain and apply any events the agent has queued.
    pub fn process_pending_events(&mut self) {
        let mut drained = Vec::new();
        if let Some(receiver) = self.events.as_mut() {
            while let Ok(event) = receiver.try_recv() {
                drained.push(event);
            }
        }
        for event in drained {
            self.handle_event(event);
        }
    }

    /// End the session. Best effort: a failed vendor termination is
    /// logged, never surfaced — the controller returns to `Idle`
    /// regardless.
    pub async fn end(&mut self) {
        if let Some(handle) = self.session.take() {
            if let Err(err) = self.agent.end_session(&handle).await {
                warn!(session = %handle.id, error = %err, "voice session termination failed");
            }
        }
        self.stop_ticker(true);
        self.events = None;
        self.state = SessionState::Idle;
        self.status_message = None;
    }

    /// Toggle the mute flag, returning the previous value.
    ///
    /// Only talks to the vendor while a session handle exists; otherwise
    /// the toggle is a local UI flag.
    pub async fn toggle_mute(&mut self) -> bool {
        let previous = self.muted;
        let requested = !previous;
        if self.state == SessionState::Connected {
            if let Some(handle) = &self.session {
                match self.agent.set_muted(handle, requested).await {
                    Ok(applied) => self.muted = applied,
                    Err(err) => {
                        warn!(error = %err, "mute change rejected, keeping local flag");
                        self.muted = requested;
                    }
                }
                return previous;
            }
        }
        self.muted = requested;
        previous
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Human-readable message for the `Error` state, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Seconds the current session has been connected.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// The append-only transcript of this controller's sessions.
    #[must_use]
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Current local mute flag.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    fn start_ticker(&mut self) {
        self.stop_ticker(true);
        let elapsed = Arc::clone(&self.elapsed);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; skip it so the counter
            // reads 0 until a full second has passed.
            interval.tick().await;
            loop {
                interval.tick().await;
                elapsed.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    fn stop_ticker(&mut self, reset: bool) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        if reset {
            self.elapsed.store(0, Ordering::Relaxed);
        }
    }
}

impl<A, M> Drop for ConversationSessionController<A, M> {
    fn drop(&mut self) {
        // The interval task must not outlive the controller.
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
