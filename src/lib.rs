// ABOUTME: Library entry point for the PACE coach core
// ABOUTME: Athlete profile persistence, AI context generation, and voice session control
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

#![deny(unsafe_code)]

//! # PACE Coach Core
//!
//! The persistence and context core behind the "Coach Alex" AI
//! track-and-field coaching dashboard. The UI shell and the concrete
//! voice vendor live elsewhere; this crate owns:
//!
//! - **Profile persistence**: the athlete profile document and its
//!   satellite documents (training logs, nutrition logs, preferences,
//!   conversation history, performance data) behind pluggable storage.
//! - **Context generation**: pure projections of the profile into the
//!   flat variable map and the long-form briefing the voice agent
//!   consumes.
//! - **Session control**: the state machine that drives the external
//!   voice agent through start/end/mute and its event callbacks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use pace_coach_core::config::CoachConfig;
//! use pace_coach_core::profile::ProfileStore;
//! use pace_coach_core::storage::factory::Storage;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CoachConfig::from_env()?;
//! let storage = Arc::new(Storage::from_location(&config.storage)?);
//! let profiles = ProfileStore::new(storage);
//!
//! // Never fails: seeds the default profile on first read.
//! let profile = profiles.read().await;
//! println!("coaching {}", profile.profile.name);
//! # Ok(())
//! # }
//! ```

/// Runtime configuration from environment variables
pub mod config;

/// Storage keys, caps, fallbacks, and conversion factors
pub mod constants;

/// Profile projections for the voice agent (variables and briefing)
pub mod context;

/// Unified error taxonomy
pub mod errors;

/// Satellite document store (logs, preferences, history)
pub mod logbook;

/// Structured logging setup
pub mod logging;

/// Persisted document models
pub mod models;

/// Athlete profile store
pub mod profile;

/// Voice session state machine and collaborator traits
pub mod session;

/// Pluggable document storage
pub mod storage;

pub use errors::{CoachError, CoachResult};
