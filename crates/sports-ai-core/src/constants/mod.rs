// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rating thresholds, assessment timings, leaderboard limits, and env variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Numeric thresholds here are placeholder
//! product decisions; the runtime values come from `AppConfig`, which uses
//! these as defaults.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const SPORTS_AI: &str = "sports-ai";
}

/// Percentile thresholds for the qualitative rating buckets
pub mod rating {
    /// Percentile at or above which a result is rated excellent
    pub const EXCELLENT_MIN_PERCENTILE: u8 = 90;
    /// Percentile at or above which a result is rated good
    pub const GOOD_MIN_PERCENTILE: u8 = 70;
    /// Percentile at or above which a result is rated average
    pub const AVERAGE_MIN_PERCENTILE: u8 = 40;
    /// Upper bound of the percentile scale
    pub const MAX_PERCENTILE: u8 = 100;
}

/// Assessment pipeline defaults
pub mod assessment {
    /// Delay of the simulated analysis step (the mock pipeline's fixed timer)
    pub const SIMULATED_ANALYSIS_DELAY_MS: u64 = 3_000;
    /// Request timeout for a single analysis attempt
    pub const ANALYSIS_TIMEOUT_SECS: u64 = 10;
    /// Automatic retries after a transient failure
    pub const ANALYSIS_MAX_RETRIES: u32 = 2;
    /// Base backoff between retries, doubled per attempt
    pub const ANALYSIS_RETRY_BACKOFF_MS: u64 = 500;
    /// Minimum analysis confidence accepted at ingestion
    pub const MIN_ANALYSIS_CONFIDENCE: f64 = 0.6;
    /// Upper bound of the technique score
    pub const MAX_TECHNIQUE_SCORE: u8 = 100;
}

/// Leaderboard defaults
pub mod leaderboard {
    /// Entries returned per page
    pub const DEFAULT_PAGE_SIZE: usize = 20;
    /// Hard cap on entries per page
    pub const MAX_PAGE_SIZE: usize = 100;
    /// Ranks that receive a podium medal
    pub const PODIUM_SIZE: u32 = 3;
}

/// Achievement rule thresholds
pub mod achievements {
    /// Vertical jump height in cm for "High Jumper"
    pub const HIGH_JUMPER_CM: f64 = 60.0;
    /// Shuttle run time in seconds for "Speed Demon"
    pub const SPEED_DEMON_SECONDS: f64 = 12.0;
    /// Sit-up repetitions for "Core Crusher"
    pub const CORE_CRUSHER_REPS: f64 = 50.0;
    /// Percentile for "Top 10%"
    pub const TOP_PERCENTILE: u8 = 90;
    /// Streak length in days for "Consistency Master"
    pub const CONSISTENCY_STREAK_DAYS: u32 = 7;
    /// Hour (UTC, exclusive) before which an assessment counts for "Early Bird"
    pub const EARLY_BIRD_HOUR_UTC: u32 = 8;
}

/// Environment variable names read by `AppConfig::from_env`
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Default UI language code
    pub const LANGUAGE: &str = "SPORTS_AI_LANGUAGE";
    /// Analysis request timeout in seconds
    pub const ANALYSIS_TIMEOUT_SECS: &str = "SPORTS_AI_ANALYSIS_TIMEOUT_SECS";
    /// Automatic retries for transient analysis failures
    pub const ANALYSIS_MAX_RETRIES: &str = "SPORTS_AI_ANALYSIS_MAX_RETRIES";
    /// Base retry backoff in milliseconds
    pub const ANALYSIS_RETRY_BACKOFF_MS: &str = "SPORTS_AI_ANALYSIS_RETRY_BACKOFF_MS";
    /// Minimum accepted analysis confidence
    pub const MIN_CONFIDENCE: &str = "SPORTS_AI_MIN_CONFIDENCE";
    /// Delay of the simulated analysis service in milliseconds
    pub const SIMULATED_DELAY_MS: &str = "SPORTS_AI_SIMULATED_DELAY_MS";
    /// Percentile threshold for "excellent"
    pub const RATING_EXCELLENT: &str = "SPORTS_AI_RATING_EXCELLENT";
    /// Percentile threshold for "good"
    pub const RATING_GOOD: &str = "SPORTS_AI_RATING_GOOD";
    /// Percentile threshold for "average"
    pub const RATING_AVERAGE: &str = "SPORTS_AI_RATING_AVERAGE";
    /// Leaderboard page size
    pub const LEADERBOARD_PAGE_SIZE: &str = "SPORTS_AI_LEADERBOARD_PAGE_SIZE";
}
