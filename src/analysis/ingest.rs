// ABOUTME: Converts raw analysis output into validated performance results
// ABOUTME: Applies cheat and confidence gates, benchmark comparison, and achievement evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sports_ai_intelligence::{AchievementEvaluator, AchievementHistory, BenchmarkEvaluator};
use tracing::debug;
use uuid::Uuid;

use super::{AnalysisRequest, RawAnalysis};
use crate::constants::assessment;
use crate::errors::{AnalysisError, AppResult};
use crate::logging::AppLogger;
use crate::models::{PerformanceResult, VideoAnalysis};
use crate::registry::SportRegistry;

/// Ingestion boundary between the analysis service and the rest of the app
#[derive(Clone)]
pub struct ResultIngestor {
    benchmarks: Arc<BenchmarkEvaluator>,
    achievements: Arc<AchievementEvaluator>,
    min_confidence: f64,
}

impl Default for ResultIngestor {
    fn default() -> Self {
        Self::new(
            Arc::new(BenchmarkEvaluator::seeded()),
            Arc::new(AchievementEvaluator::new()),
            assessment::MIN_ANALYSIS_CONFIDENCE,
        )
    }
}

impl ResultIngestor {
    /// Ingestor using the given evaluators and confidence floor
    #[must_use]
    pub const fn new(
        benchmarks: Arc<BenchmarkEvaluator>,
        achievements: Arc<AchievementEvaluator>,
        min_confidence: f64,
    ) -> Self {
        Self {
            benchmarks,
            achievements,
            min_confidence,
        }
    }

    /// Gate raw output before it becomes a result
    ///
    /// # Errors
    ///
    /// `CheatDetected` first, then `MalformedResult` for values outside their
    /// ranges, then `LowConfidence` below the floor.
    pub fn check(&self, raw: &RawAnalysis) -> Result<(), AnalysisError> {
        if raw.cheat_detected {
            return Err(AnalysisError::CheatDetected);
        }
        if !raw.confidence.is_finite() || !(0.0..=1.0).contains(&raw.confidence) {
            return Err(AnalysisError::MalformedResult(format!(
                "confidence {} is outside [0, 1]",
                raw.confidence
            )));
        }
        if !raw.score.is_finite() || raw.score < 0.0 {
            return Err(AnalysisError::MalformedResult(format!(
                "score {} is not a non-negative finite number",
                raw.score
            )));
        }
        if raw.technique_score > assessment::MAX_TECHNIQUE_SCORE {
            return Err(AnalysisError::MalformedResult(format!(
                "technique score {} is outside [0, 100]",
                raw.technique_score
            )));
        }
        if raw.confidence < self.min_confidence {
            return Err(AnalysisError::LowConfidence {
                confidence: raw.confidence,
                threshold: self.min_confidence,
            });
        }
        Ok(())
    }

    /// Build the performance result for one successful analysis
    ///
    /// The returned result carries the achievements it unlocked against
    /// `history`. It is not recorded anywhere; storing it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the mapped analysis error for rejected output,
    /// `BenchmarkUnavailable` when the cohort has no curve, and
    /// `InvalidResult` if the assembled result fails validation.
    pub fn ingest(
        &self,
        request: &AnalysisRequest,
        raw: RawAnalysis,
        history: &AchievementHistory,
        completed_at: DateTime<Utc>,
    ) -> AppResult<PerformanceResult> {
        self.check(&raw)?;

        let sport = SportRegistry::global().get(request.sport);
        let comparison = self.benchmarks.comparison(
            request.sport,
            raw.score,
            request.age_group,
            request.gender,
        )?;

        let mut result = PerformanceResult {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            sport_id: request.sport,
            score: raw.score,
            unit: sport.unit.to_owned(),
            timestamp: completed_at,
            video_analysis: VideoAnalysis {
                cheat_detected: raw.cheat_detected,
                confidence: raw.confidence,
                technique_score: raw.technique_score,
            },
            benchmark_comparison: comparison,
            achievements_earned: Vec::new(),
        };
        result.validate(self.benchmarks.thresholds())?;

        result.achievements_earned = self.achievements.evaluate(&result, history);
        let earned: Vec<&str> = result
            .achievements_earned
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        AppLogger::log_achievements_awarded(result.user_id, result.id, &earned);

        debug!(
            result.id = %result.id,
            sport = %result.sport_id,
            score = result.score,
            percentile = result.benchmark_comparison.percentile,
            "Result ingested"
        );
        Ok(result)
    }
}
