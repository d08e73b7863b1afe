// ABOUTME: Tests for the performance result model and ingestion validation
// ABOUTME: Covers rating buckets, cohorts, JSON shape, and malformed result rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use sports_ai_core::errors::ErrorCode;
use sports_ai_core::models::{
    AgeGroup, BenchmarkComparison, GenderCategory, PerformanceResult, Rating, RatingThresholds,
    SportId, VideoAnalysis,
};
use uuid::Uuid;

fn sample_result() -> PerformanceResult {
    PerformanceResult {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        sport_id: SportId::VerticalJump,
        score: 65.0,
        unit: "cm".to_owned(),
        timestamp: Utc.with_ymd_and_hms(2025, 1, 8, 10, 0, 0).unwrap(),
        video_analysis: VideoAnalysis {
            cheat_detected: false,
            confidence: 0.92,
            technique_score: 88,
        },
        benchmark_comparison: BenchmarkComparison {
            age_group: AgeGroup::Age18To25,
            gender_category: GenderCategory::Male,
            percentile: 75,
            rating: Rating::Good,
        },
        achievements_earned: Vec::new(),
    }
}

#[test]
fn test_rating_buckets() {
    let t = RatingThresholds::default();
    assert_eq!(Rating::from_percentile(95, &t), Rating::Excellent);
    assert_eq!(Rating::from_percentile(75, &t), Rating::Good);
    assert_eq!(Rating::from_percentile(50, &t), Rating::Average);
    assert_eq!(Rating::from_percentile(10, &t), Rating::NeedsImprovement);
}

#[test]
fn test_rating_boundaries_both_sides() {
    let t = RatingThresholds::default();
    assert_eq!(Rating::from_percentile(90, &t), Rating::Excellent);
    assert_eq!(Rating::from_percentile(89, &t), Rating::Good);
    assert_eq!(Rating::from_percentile(70, &t), Rating::Good);
    assert_eq!(Rating::from_percentile(69, &t), Rating::Average);
    assert_eq!(Rating::from_percentile(40, &t), Rating::Average);
    assert_eq!(Rating::from_percentile(39, &t), Rating::NeedsImprovement);
    assert_eq!(Rating::from_percentile(0, &t), Rating::NeedsImprovement);
    assert_eq!(Rating::from_percentile(100, &t), Rating::Excellent);
}

#[test]
fn test_rating_is_monotonic() {
    let t = RatingThresholds::default();
    let mut previous = Rating::from_percentile(0, &t);
    for p in 1..=100 {
        let current = Rating::from_percentile(p, &t);
        assert!(current >= previous, "rating dropped at percentile {p}");
        previous = current;
    }
}

#[test]
fn test_threshold_validation() {
    assert!(RatingThresholds::default().validate().is_ok());
    let overlapping = RatingThresholds {
        excellent: 70,
        good: 70,
        average: 40,
    };
    assert_eq!(
        overlapping.validate().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    let off_scale = RatingThresholds {
        excellent: 120,
        good: 70,
        average: 40,
    };
    assert!(off_scale.validate().is_err());
}

#[test]
fn test_age_group_from_birth_date() {
    let on = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
    let birthday_tomorrow = NaiveDate::from_ymd_opt(2007, 1, 9).unwrap();
    assert_eq!(
        AgeGroup::from_birth_date(birthday_tomorrow, on),
        AgeGroup::Age14To17
    );
    let birthday_today = NaiveDate::from_ymd_opt(2007, 1, 8).unwrap();
    assert_eq!(
        AgeGroup::from_birth_date(birthday_today, on),
        AgeGroup::Age18To25
    );
    let future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    assert_eq!(AgeGroup::from_birth_date(future, on), AgeGroup::Under14);
    assert_eq!("18-25".parse::<AgeGroup>().unwrap(), AgeGroup::Age18To25);
}

#[test]
fn test_valid_result_passes() {
    sample_result()
        .validate(&RatingThresholds::default())
        .unwrap();
}

#[test]
fn test_rejects_out_of_range_fields() {
    let thresholds = RatingThresholds::default();

    let mut result = sample_result();
    result.benchmark_comparison.percentile = 101;
    let err = result.validate(&thresholds).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidResult);
    assert!(err.message.contains("percentile"));

    let mut result = sample_result();
    result.video_analysis.confidence = 1.2;
    assert!(result
        .validate(&thresholds)
        .unwrap_err()
        .message
        .contains("confidence"));

    let mut result = sample_result();
    result.video_analysis.confidence = f64::NAN;
    assert!(result.validate(&thresholds).is_err());

    let mut result = sample_result();
    result.video_analysis.technique_score = 101;
    assert!(result.validate(&thresholds).is_err());

    let mut result = sample_result();
    result.score = -1.0;
    assert!(result.validate(&thresholds).is_err());

    let mut result = sample_result();
    result.unit = "meters".to_owned();
    assert!(result
        .validate(&thresholds)
        .unwrap_err()
        .message
        .contains("unit"));
}

#[test]
fn test_rejects_rating_inconsistent_with_percentile() {
    // shuttle run mock entry: percentile 85 labelled excellent
    let mut result = sample_result();
    result.benchmark_comparison.percentile = 85;
    result.benchmark_comparison.rating = Rating::Excellent;
    let err = result.validate(&RatingThresholds::default()).unwrap_err();
    assert!(err.message.contains("rating"));
}

#[test]
fn test_json_shape_matches_client_payload() {
    let payload = r#"{
        "id": "7f1b6a2e-7d1c-4c8e-9a51-0e1f7a3c2b10",
        "userId": "0b5f2a44-3c9d-4e1f-8a7b-6c5d4e3f2a1b",
        "sportType": "vertical_jump",
        "score": 65,
        "unit": "cm",
        "timestamp": "2025-01-08T10:00:00Z",
        "videoAnalysis": { "cheatDetected": false, "confidence": 0.92, "technique_score": 88 },
        "benchmarkComparison": {
            "ageGroup": "18-25",
            "genderCategory": "male",
            "percentile": 75,
            "rating": "good"
        },
        "achievementsEarned": [
            {
                "id": "high_jumper",
                "title": "High Jumper",
                "description": "Jumped over 60cm",
                "icon": "⬆️",
                "category": "performance",
                "earnedAt": "2025-01-08T10:00:00Z"
            }
        ]
    }"#;
    let result: PerformanceResult = serde_json::from_str(payload).unwrap();
    assert_eq!(result.sport_id, SportId::VerticalJump);
    assert_eq!(result.video_analysis.technique_score, 88);
    assert_eq!(result.benchmark_comparison.rating, Rating::Good);
    assert_eq!(result.achievements_earned.len(), 1);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["sportId"], "vertical_jump");
    assert_eq!(value["videoAnalysis"]["techniqueScore"], 88);
    assert_eq!(value["benchmarkComparison"]["rating"], "good");
}

#[test]
fn test_cheat_flag_excludes_result() {
    let mut result = sample_result();
    assert!(result.is_countable());
    result.video_analysis.cheat_detected = true;
    assert!(!result.is_countable());
}
