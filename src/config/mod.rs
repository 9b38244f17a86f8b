// ABOUTME: Configuration management for the coach core
// ABOUTME: Environment-driven settings for storage location, agent identity, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

/// Environment-based runtime configuration
pub mod environment;

pub use environment::{AgentConfig, CoachConfig, Environment, LogLevel, StorageLocation};
