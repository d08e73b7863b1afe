// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Assessment timing, rating thresholds, leaderboard paging, and default language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! Every value has a default matching the mobile client's behaviour and can be
//! overridden through a `SPORTS_AI_*` environment variable. Invalid values are
//! reported as `ConfigInvalid` instead of being silently ignored.

/// Deployment environment and env-var parsing
pub mod environment;

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{assessment, env_config, leaderboard};
use crate::errors::{AppError, AppResult, LookupPolicy};
use crate::localization::Language;
use crate::models::RatingThresholds;
pub use environment::{parse_env, Environment};

/// Timing and acceptance parameters for the analysis pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Deadline for a single analysis attempt
    pub analysis_timeout: Duration,
    /// Automatic retries after a transient failure
    pub max_retries: u32,
    /// Backoff before the first retry, doubled per attempt
    pub retry_backoff: Duration,
    /// Minimum analysis confidence accepted at ingestion
    pub min_confidence: f64,
    /// Delay of the simulated analysis service
    pub simulated_delay: Duration,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            analysis_timeout: Duration::from_secs(assessment::ANALYSIS_TIMEOUT_SECS),
            max_retries: assessment::ANALYSIS_MAX_RETRIES,
            retry_backoff: Duration::from_millis(assessment::ANALYSIS_RETRY_BACKOFF_MS),
            min_confidence: assessment::MIN_ANALYSIS_CONFIDENCE,
            simulated_delay: Duration::from_millis(assessment::SIMULATED_ANALYSIS_DELAY_MS),
        }
    }
}

impl AssessmentConfig {
    /// Load overrides from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable does not parse or the result
    /// fails validation.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(secs) = parse_env::<u64>(env_config::ANALYSIS_TIMEOUT_SECS)? {
            config.analysis_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = parse_env(env_config::ANALYSIS_MAX_RETRIES)? {
            config.max_retries = retries;
        }
        if let Some(ms) = parse_env::<u64>(env_config::ANALYSIS_RETRY_BACKOFF_MS)? {
            config.retry_backoff = Duration::from_millis(ms);
        }
        if let Some(confidence) = parse_env(env_config::MIN_CONFIDENCE)? {
            config.min_confidence = confidence;
        }
        if let Some(ms) = parse_env::<u64>(env_config::SIMULATED_DELAY_MS)? {
            config.simulated_delay = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout or a confidence outside [0, 1].
    pub fn validate(&self) -> AppResult<()> {
        if self.analysis_timeout.is_zero() {
            return Err(AppError::config("analysis_timeout must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AppError::config("min_confidence must be between 0 and 1"));
        }
        Ok(())
    }
}

/// Leaderboard paging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Entries per page when the caller does not ask for a size
    pub page_size: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            page_size: leaderboard::DEFAULT_PAGE_SIZE,
        }
    }
}

impl LeaderboardConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the page size is zero or above the hard cap.
    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 || self.page_size > leaderboard::MAX_PAGE_SIZE {
            return Err(AppError::config(format!(
                "page_size must be between 1 and {}",
                leaderboard::MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Language screens start in
    pub default_language: Language,
    /// Analysis pipeline parameters
    pub assessment: AssessmentConfig,
    /// Rating bucket thresholds
    pub rating: RatingThresholds,
    /// Leaderboard paging
    pub leaderboard: LeaderboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any variable is malformed or the assembled
    /// configuration fails validation. An unsupported language code is an
    /// error outside production and falls back to English in production.
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();

        let default_language = match env::var(env_config::LANGUAGE) {
            Ok(code) => Language::resolve(&code, environment.lookup_policy())?,
            Err(_) => Language::default(),
        };

        let mut rating = RatingThresholds::default();
        if let Some(value) = parse_env(env_config::RATING_EXCELLENT)? {
            rating.excellent = value;
        }
        if let Some(value) = parse_env(env_config::RATING_GOOD)? {
            rating.good = value;
        }
        if let Some(value) = parse_env(env_config::RATING_AVERAGE)? {
            rating.average = value;
        }

        let mut leaderboard = LeaderboardConfig::default();
        if let Some(size) = parse_env(env_config::LEADERBOARD_PAGE_SIZE)? {
            leaderboard.page_size = size;
        }

        let config = Self {
            environment,
            default_language,
            assessment: AssessmentConfig::from_env()?,
            rating,
            leaderboard,
        };
        config.validate()?;

        info!(
            environment = %config.environment,
            language = %config.default_language,
            timeout_secs = config.assessment.analysis_timeout.as_secs(),
            max_retries = config.assessment.max_retries,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigInvalid` found.
    pub fn validate(&self) -> AppResult<()> {
        self.assessment.validate()?;
        self.rating.validate()?;
        self.leaderboard.validate()
    }

    /// Lookup policy of the configured environment
    #[must_use]
    pub const fn lookup_policy(&self) -> LookupPolicy {
        self.environment.lookup_policy()
    }
}
