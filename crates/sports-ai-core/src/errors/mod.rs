// ABOUTME: Unified error handling with stable error codes for the assessment platform
// ABOUTME: Defines ErrorCode, AppError, AppResult, and the lookup failure policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry
//! a stable [`ErrorCode`] so screens can decide between a retry prompt and a
//! fatal message without string matching.
//!
//! Propagation policy:
//! - Lookup errors (unknown sport, unsupported language) are programmer errors.
//!   They fail fast in development and are logged and defaulted in production,
//!   see [`LookupPolicy`].
//! - Analysis errors are expected and recoverable; they surface as a retry prompt.
//! - Malformed performance results are rejected at ingestion, never rendered.

/// Analysis service boundary errors
pub mod analysis;

pub use analysis::AnalysisError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Lookup (1000-1999)
    /// Sport identifier outside the closed set
    UnknownSport = 1000,
    /// Sport exists but is not selectable yet
    SportUnavailable = 1001,
    /// Language code outside the supported set
    UnsupportedLanguage = 1002,
    /// No reference distribution for the requested cohort
    BenchmarkUnavailable = 1003,

    // Validation (3000-3999)
    /// Input rejected before any processing
    InvalidInput = 3000,
    /// A performance result failed ingestion validation
    InvalidResult = 3001,
    /// Numeric value outside its documented range
    ValueOutOfRange = 3002,

    // Analysis (5000-5999)
    /// Analysis did not finish within the request timeout
    AnalysisTimeout = 5000,
    /// Analysis confidence below the configured threshold
    AnalysisLowConfidence = 5001,
    /// Captured video could not be used
    CaptureInvalid = 5002,
    /// Cheat detection flagged the attempt
    CheatDetected = 5003,
    /// Analysis backend unreachable or failing
    ExternalServiceUnavailable = 5004,

    // Conflict / lifecycle (4000-4999)
    /// Another assessment is already in flight for this user
    AssessmentInProgress = 4000,
    /// The assessment was canceled before completion
    AssessmentCanceled = 4001,
    /// Achievement already awarded to this user
    DuplicateAchievement = 4002,

    // Configuration (6000-6999)
    /// Configuration value missing or invalid
    ConfigInvalid = 6000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// Serialization or deserialization failure
    SerializationError = 9001,
}

/// Coarse grouping of error codes used by the propagation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Programmer errors from closed-set lookups
    Lookup,
    /// Rejected input or malformed data
    Validation,
    /// Expected failures of the analysis pipeline
    Analysis,
    /// Lifecycle conflicts
    Conflict,
    /// Configuration problems
    Config,
    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Numeric code for logs and wire payloads
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Category used to pick a propagation strategy
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::UnknownSport
            | Self::SportUnavailable
            | Self::UnsupportedLanguage
            | Self::BenchmarkUnavailable => ErrorCategory::Lookup,
            Self::InvalidInput | Self::InvalidResult | Self::ValueOutOfRange => {
                ErrorCategory::Validation
            }
            Self::AnalysisTimeout
            | Self::AnalysisLowConfidence
            | Self::CaptureInvalid
            | Self::CheatDetected
            | Self::ExternalServiceUnavailable => ErrorCategory::Analysis,
            Self::AssessmentInProgress | Self::AssessmentCanceled | Self::DuplicateAchievement => {
                ErrorCategory::Conflict
            }
            Self::ConfigInvalid => ErrorCategory::Config,
            Self::InternalError | Self::SerializationError => ErrorCategory::Internal,
        }
    }

    /// Whether the user can reasonably retry the operation
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::AnalysisTimeout
                | Self::AnalysisLowConfidence
                | Self::CaptureInvalid
                | Self::ExternalServiceUnavailable
                | Self::AssessmentInProgress
                | Self::AssessmentCanceled
        )
    }

    /// Whether the pipeline may retry automatically without asking the user
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Self::AnalysisTimeout | Self::ExternalServiceUnavailable
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownSport => "The requested sport is not supported",
            Self::SportUnavailable => "This sport assessment is coming soon",
            Self::UnsupportedLanguage => "The requested language is not supported",
            Self::BenchmarkUnavailable => "No benchmark data exists for this group",
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidResult => "The performance result is malformed",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::AnalysisTimeout => "Performance analysis took too long",
            Self::AnalysisLowConfidence => "The analysis was not confident enough to score",
            Self::CaptureInvalid => "The recorded video could not be analyzed",
            Self::CheatDetected => "The attempt did not follow the test protocol",
            Self::ExternalServiceUnavailable => "The analysis service is currently unavailable",
            Self::AssessmentInProgress => "An assessment is already in progress",
            Self::AssessmentCanceled => "The assessment was canceled",
            Self::DuplicateAchievement => "The achievement has already been awarded",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Sport identifier outside the closed set
    #[must_use]
    pub fn unknown_sport(sport: &str) -> Self {
        Self::new(ErrorCode::UnknownSport, format!("Unknown sport '{sport}'"))
    }

    /// Sport visible but not selectable
    #[must_use]
    pub fn sport_unavailable(sport: &str) -> Self {
        Self::new(
            ErrorCode::SportUnavailable,
            format!("Sport '{sport}' is not available yet"),
        )
    }

    /// Language code outside the supported set
    #[must_use]
    pub fn unsupported_language(code: &str) -> Self {
        Self::new(
            ErrorCode::UnsupportedLanguage,
            format!("Unsupported language '{code}'"),
        )
    }

    /// No reference distribution available
    #[must_use]
    pub fn benchmark_unavailable(details: impl Into<String>) -> Self {
        Self::new(ErrorCode::BenchmarkUnavailable, details)
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed performance result rejected at ingestion
    #[must_use]
    pub fn invalid_result(field: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidResult,
            format!("Invalid performance result field '{field}': {reason}"),
        )
    }

    /// Analysis exceeded its deadline
    #[must_use]
    pub fn analysis_timeout(after_ms: u128) -> Self {
        Self::new(
            ErrorCode::AnalysisTimeout,
            format!("Analysis timed out after {after_ms} ms"),
        )
    }

    /// Analysis confidence below the configured minimum
    #[must_use]
    pub fn low_confidence(confidence: f64, threshold: f64) -> Self {
        Self::new(
            ErrorCode::AnalysisLowConfidence,
            format!("Analysis confidence {confidence:.2} is below the required {threshold:.2}"),
        )
    }

    /// Captured video rejected
    #[must_use]
    pub fn capture_invalid(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::CaptureInvalid, reason)
    }

    /// Cheat detection flagged the attempt
    #[must_use]
    pub fn cheat_detected() -> Self {
        Self::new(
            ErrorCode::CheatDetected,
            "Cheat detection flagged this attempt",
        )
    }

    /// Another assessment already in flight
    #[must_use]
    pub fn assessment_in_progress() -> Self {
        Self::new(
            ErrorCode::AssessmentInProgress,
            "An assessment is already in progress for this user",
        )
    }

    /// Assessment canceled before completion
    #[must_use]
    pub fn assessment_canceled() -> Self {
        Self::new(ErrorCode::AssessmentCanceled, "Assessment canceled")
    }

    /// Achievement already present in the user's history
    #[must_use]
    pub fn duplicate_achievement(achievement_id: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateAchievement,
            format!("Achievement '{achievement_id}' already awarded"),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether the user should be offered a retry
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.code.is_recoverable()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string()).with_source(err)
    }
}

/// How closed-set lookup failures are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Return the error to the caller (development, testing)
    #[default]
    FailFast,
    /// Log the error and continue with a default (production)
    LogAndDefault,
}

impl LookupPolicy {
    /// Resolve a lookup result according to the policy
    ///
    /// Under `LogAndDefault` a failed lookup is logged and `None` is returned so
    /// the caller can substitute its default.
    ///
    /// # Errors
    ///
    /// Returns the original error under `FailFast`.
    pub fn resolve<T>(self, result: AppResult<T>) -> AppResult<Option<T>> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (Self::FailFast, Err(err)) => Err(err),
            (Self::LogAndDefault, Err(err)) => {
                warn!(error.code = %err.code, error.message = %err.message, "Lookup failed, using default");
                Ok(None)
            }
        }
    }
}
