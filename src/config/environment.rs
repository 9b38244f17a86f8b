// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, storage location selection, and agent identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Environment-based configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::constants::agent;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational and above
    #[default]
    Info,
    /// Debug and above
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for configuration defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the document store keeps its data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageLocation {
    /// Volatile in-memory storage, lost on exit
    Memory,
    /// One JSON file per document key under this directory
    Directory(PathBuf),
}

impl StorageLocation {
    /// Resolve from `PACE_STORAGE_DIR`.
    ///
    /// The literal value `memory` selects the in-memory backend; any other
    /// value is a directory path. Unset falls back to the platform data
    /// directory (`<data_dir>/pace-coach`), or memory when no data
    /// directory exists.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var("PACE_STORAGE_DIR") {
            Ok(value) if value == "memory" => Self::Memory,
            Ok(value) => Self::Directory(PathBuf::from(value)),
            Err(_) => dirs::data_dir().map_or(Self::Memory, |dir| {
                Self::Directory(dir.join("pace-coach"))
            }),
        }
    }
}

/// External voice agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Conversational agent id handed to the vendor SDK
    pub agent_id: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_id: agent::DEFAULT_AGENT_ID.into(),
        }
    }
}

/// Complete runtime configuration for the coach core
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Document storage location
    pub storage: StorageLocation,
    /// Voice agent settings
    pub agent: AgentConfig,
}

impl CoachConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `PACE_ENV`, `RUST_LOG`, `PACE_STORAGE_DIR`,
    /// `PACE_AGENT_ID`. Every variable has a sensible default; the only
    /// failure mode is an agent id that is present but empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `PACE_AGENT_ID` is set to an empty string.
    pub fn from_env() -> Result<Self> {
        let environment =
            Environment::from_str_or_default(&env::var("PACE_ENV").unwrap_or_default());
        let log_level = LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_default());
        let storage = StorageLocation::from_env();

        let agent_id = match env::var("PACE_AGENT_ID") {
            Ok(value) => {
                let trimmed = value.trim().to_owned();
                if trimmed.is_empty() {
                    anyhow::bail!("PACE_AGENT_ID is set but empty");
                }
                trimmed
            }
            Err(_) => agent::DEFAULT_AGENT_ID.into(),
        };

        let config = Self {
            environment,
            log_level,
            storage,
            agent: AgentConfig { agent_id },
        };
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let StorageLocation::Directory(dir) = &self.storage {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("storage directory path is empty");
            }
        }
        Ok(())
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            storage: StorageLocation::Memory,
            agent: AgentConfig::default(),
        }
    }
}
