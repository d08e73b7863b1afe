// ABOUTME: Error types for the video analysis service boundary
// ABOUTME: Maps capture, timeout, confidence, and service failures onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Failure modes of the analysis service call
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalysisError {
    /// The captured video reference could not be used
    #[error("Captured video is invalid: {0}")]
    CaptureInvalid(String),

    /// The service did not answer within the request timeout
    #[error("Analysis timed out after {0:?}")]
    Timeout(Duration),

    /// The analysis confidence was below the configured threshold
    #[error("Analysis confidence {confidence:.2} below threshold {threshold:.2}")]
    LowConfidence {
        /// Confidence reported by the service
        confidence: f64,
        /// Minimum confidence required
        threshold: f64,
    },

    /// Cheat detection flagged the attempt
    #[error("Cheat detected in submitted attempt")]
    CheatDetected,

    /// The backend is unreachable or returned an error
    #[error("Analysis service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service answered with data that fails validation
    #[error("Malformed analysis result: {0}")]
    MalformedResult(String),
}

impl AnalysisError {
    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::CaptureInvalid(_) => ErrorCode::CaptureInvalid,
            Self::Timeout(_) => ErrorCode::AnalysisTimeout,
            Self::LowConfidence { .. } => ErrorCode::AnalysisLowConfidence,
            Self::CheatDetected => ErrorCode::CheatDetected,
            Self::ServiceUnavailable(_) => ErrorCode::ExternalServiceUnavailable,
            Self::MalformedResult(_) => ErrorCode::InvalidResult,
        }
    }

    /// Whether the pipeline should retry automatically
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.code().is_transient()
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match &err {
            AnalysisError::Timeout(after) => Self::analysis_timeout(after.as_millis()),
            AnalysisError::LowConfidence {
                confidence,
                threshold,
            } => Self::low_confidence(*confidence, *threshold),
            _ => Self::new(err.code(), err.to_string()),
        }
    }
}
