// ABOUTME: Shared builders for intelligence integration tests
// ABOUTME: Creates consistent performance results at fixed timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sports_ai_core::models::{
    AgeGroup, BenchmarkComparison, GenderCategory, PerformanceResult, Rating, RatingThresholds,
    SportId, VideoAnalysis,
};
use sports_ai_core::registry::SportRegistry;
use uuid::Uuid;

/// UTC timestamp on January 2025
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
}

/// Valid, countable result with a consistent rating
pub fn result(
    user_id: Uuid,
    sport: SportId,
    score: f64,
    percentile: u8,
    timestamp: DateTime<Utc>,
) -> PerformanceResult {
    PerformanceResult {
        id: Uuid::new_v4(),
        user_id,
        sport_id: sport,
        score,
        unit: SportRegistry::global().get(sport).unit.to_owned(),
        timestamp,
        video_analysis: VideoAnalysis {
            cheat_detected: false,
            confidence: 0.9,
            technique_score: 85,
        },
        benchmark_comparison: BenchmarkComparison {
            age_group: AgeGroup::Age18To25,
            gender_category: GenderCategory::Male,
            percentile,
            rating: Rating::from_percentile(percentile, &RatingThresholds::default()),
        },
        achievements_earned: Vec::new(),
    }
}

/// Same as [`result`] but flagged by cheat detection
pub fn cheating_result(
    user_id: Uuid,
    sport: SportId,
    score: f64,
    timestamp: DateTime<Utc>,
) -> PerformanceResult {
    let mut r = result(user_id, sport, score, 99, timestamp);
    r.video_analysis.cheat_detected = true;
    r
}
