// ABOUTME: Logging configuration and structured logging setup for the assessment platform
// ABOUTME: Configures log level, output format, and domain event helpers over tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use std::env;
use std::fmt as std_fmt;
use std::io;
use std::str::FromStr;

use anyhow::Result;
use sports_ai_core::models::{LeaderboardScope, SportId};
use tracing::{info, warn, Subscriber};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

use crate::config::Environment;
use crate::constants::{env_config, service_names};

/// Environment variable selecting the log format
const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One `JSON` object per event
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single-line output for terminals
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Compact => "compact",
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `sports_ai=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Deployment environment reported at startup
    pub environment: Environment,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, and the deployment environment
    ///
    /// Production defaults to JSON with source locations; everything else to
    /// pretty output. An unparsable `LOG_FORMAT` keeps the default.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();
        let default_format = if environment.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format: env::var(LOG_FORMAT_VAR)
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(default_format),
            include_location: environment.is_production(),
            environment,
        }
    }

    fn fmt_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location);
        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(filter)
            .try_init()?;

        info!(
            service.name = service_names::SPORTS_AI,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Domain event logging helpers
pub struct AppLogger;

impl AppLogger {
    /// Log an assessment lifecycle transition
    pub fn log_assessment_event(user_id: Uuid, sport: SportId, event: &str, attempt: u32) {
        info!(
            user.id = %user_id,
            assessment.sport = %sport,
            assessment.event = %event,
            assessment.attempt = attempt,
            "Assessment event"
        );
    }

    /// Log a failed assessment
    pub fn log_assessment_failure(user_id: Uuid, sport: SportId, code: &str, message: &str) {
        warn!(
            user.id = %user_id,
            assessment.sport = %sport,
            error.code = %code,
            error.message = %message,
            "Assessment failed"
        );
    }

    /// Log achievements unlocked by a result
    pub fn log_achievements_awarded(user_id: Uuid, result_id: Uuid, achievement_ids: &[&str]) {
        if achievement_ids.is_empty() {
            return;
        }
        info!(
            user.id = %user_id,
            result.id = %result_id,
            achievements = ?achievement_ids,
            "Achievements awarded"
        );
    }

    /// Log a leaderboard query
    pub fn log_leaderboard_query(
        sport: SportId,
        scope: LeaderboardScope,
        entries: usize,
        duration_ms: u64,
    ) {
        info!(
            leaderboard.sport = %sport,
            leaderboard.scope = %scope,
            leaderboard.entries = entries,
            leaderboard.duration_ms = duration_ms,
            "Leaderboard query"
        );
    }

    /// Log a UI language change
    pub fn log_language_change(from: &str, to: &str) {
        info!(language.from = %from, language.to = %to, "Language changed");
    }
}
