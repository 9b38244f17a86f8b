// ABOUTME: Unified error handling for the PACE coach core
// ABOUTME: Defines the CoachError taxonomy and the propagation policy between layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Unified Error Handling
//!
//! One error taxonomy for the whole crate. The propagation policy:
//!
//! - Storage problems (`StorageUnavailable`, `StorageCorrupt`,
//!   `Serialization`) are recovered locally by the stores — they fall back
//!   to defaults and log, and never surface as blocking errors to callers
//!   of `read`-shaped operations.
//! - `CapabilityDenied` and `ExternalAgent` surface to the UI as
//!   human-readable session state; they are not retried automatically.
//! - `SessionActive` is a programming error the UI layer must prevent by
//!   disabling the start control while a session is in flight.

use thiserror::Error;

/// Unified error type for the coach core.
#[derive(Debug, Error)]
pub enum CoachError {
    /// The storage backend could not be reached or refused the operation
    /// (quota exceeded, directory missing, storage disabled).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A persisted document exists but could not be parsed.
    #[error("stored document '{key}' is corrupt: {reason}")]
    StorageCorrupt {
        /// Storage key of the unreadable document
        key: String,
        /// Parser diagnostic
        reason: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required capability (microphone access) was denied by the platform.
    #[error("microphone access denied: {0}")]
    CapabilityDenied(String),

    /// The external voice agent reported a failure.
    #[error("voice agent error: {0}")]
    ExternalAgent(String),

    /// A session start was requested while one is already connecting or
    /// connected.
    #[error("a conversation session is already active")]
    SessionActive,

    /// A typed field update received a value of the wrong kind.
    #[error("invalid value for {field}: expected {expected}")]
    InvalidField {
        /// Field that rejected the value
        field: &'static str,
        /// Kind of value the field accepts
        expected: &'static str,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoachError {
    /// Human-readable message suitable for direct display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::CapabilityDenied(_) => {
                "Microphone access was denied. Please allow microphone use and try again."
                    .to_owned()
            }
            Self::ExternalAgent(reason) => {
                format!("The voice coach could not be reached: {reason}")
            }
            Self::SessionActive => "A conversation is already in progress.".to_owned(),
            other => other.to_string(),
        }
    }

    /// Whether the stores recover from this error locally instead of
    /// surfacing it.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable(_) | Self::StorageCorrupt { .. } | Self::Serialization(_)
        )
    }
}

/// Result type alias for convenience.
pub type CoachResult<T> = Result<T, CoachError>;
