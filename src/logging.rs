// ABOUTME: Logging configuration and structured logging setup for the coach core
// ABOUTME: Configures tracing level and output format from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Structured logging configuration on `tracing`.

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::constants::service;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: service::SERVICE_NAME.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables.
    ///
    /// `RUST_LOG` controls the filter, `LOG_FORMAT` the output format, and
    /// `PACE_ENV` the reported environment.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("PACE_ENV").unwrap_or_else(|_| "development".into());

        Self {
            level,
            format,
            service_name: service::SERVICE_NAME.into(),
            environment,
        }
    }

    /// Initialize the global tracing subscriber from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber is already installed or the filter
    /// directive cannot be parsed.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .with_context(|| format!("invalid log filter directive '{}'", self.level))?;

        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_current_span(false))
                .try_init()
                .context("failed to install JSON tracing subscriber")?,
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true))
                .try_init()
                .context("failed to install tracing subscriber")?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false))
                .try_init()
                .context("failed to install compact tracing subscriber")?,
        }

        tracing::info!(
            service = %self.service_name,
            environment = %self.environment,
            level = %self.level,
            "logging initialized"
        );

        Ok(())
    }
}
