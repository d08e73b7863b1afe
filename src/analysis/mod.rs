// ABOUTME: Video analysis service boundary and result ingestion
// ABOUTME: Request/response types, the async service trait, and the simulated implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis
//!
//! The analysis service turns a captured video into raw measurements. Real pose
//! estimation is outside this crate; [`SimulatedAnalysisService`] stands in for
//! it with deterministic output. [`ResultIngestor`] validates raw output and
//! turns it into a [`PerformanceResult`](crate::models::PerformanceResult).

/// Raw analysis to performance result conversion
pub mod ingest;

/// Deterministic stand-in for the analysis backend
pub mod simulated;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AnalysisError;
use crate::models::{AgeGroup, GenderCategory, SportId};
pub use ingest::ResultIngestor;
pub use simulated::{ScriptStep, SimulatedAnalysisService};

/// Handle to a captured video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    /// Storage location of the recording
    pub uri: String,
    /// Recording length
    pub duration: Duration,
}

impl VideoReference {
    /// Reference to a recording at `uri`
    #[must_use]
    pub fn new(uri: impl Into<String>, duration: Duration) -> Self {
        Self {
            uri: uri.into(),
            duration,
        }
    }

    /// Reject references that cannot be analyzed
    ///
    /// # Errors
    ///
    /// Returns `CaptureInvalid` for an empty location or an empty recording.
    pub fn check(&self) -> Result<(), AnalysisError> {
        if self.uri.trim().is_empty() {
            return Err(AnalysisError::CaptureInvalid("missing video location".into()));
        }
        if self.duration.is_zero() {
            return Err(AnalysisError::CaptureInvalid("recording is empty".into()));
        }
        Ok(())
    }
}

/// Everything the service needs to analyze one attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Captured video
    pub video: VideoReference,
    /// Assessed sport
    pub sport: SportId,
    /// Athlete
    pub user_id: Uuid,
    /// Benchmark cohort age group
    pub age_group: AgeGroup,
    /// Benchmark cohort gender
    pub gender: GenderCategory,
}

/// Measurements returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysis {
    /// Score in the sport's unit
    pub score: f64,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    /// Technique score in [0, 100]
    pub technique_score: u8,
    /// Cheat detection flag
    pub cheat_detected: bool,
}

/// Video analysis backend
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyze one recorded attempt
    async fn analyze(&self, request: &AnalysisRequest) -> Result<RawAnalysis, AnalysisError>;
}
