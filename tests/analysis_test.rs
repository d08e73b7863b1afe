// ABOUTME: Tests for the simulated analysis service and result ingestion
// ABOUTME: Covers capture checks, deterministic scoring, and ingestion gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use helpers::{raw, request};
use sports_ai::analysis::{
    AnalysisService, RawAnalysis, ResultIngestor, ScriptStep, SimulatedAnalysisService,
    VideoReference,
};
use sports_ai::errors::{AnalysisError, ErrorCode};
use sports_ai::intelligence::AchievementHistory;
use sports_ai::models::SportId;
use sports_ai::registry::SportRegistry;
use uuid::Uuid;

#[test]
fn test_video_reference_check() {
    assert!(VideoReference::new("file:///a.mp4", Duration::from_secs(5))
        .check()
        .is_ok());
    assert!(matches!(
        VideoReference::new("  ", Duration::from_secs(5)).check(),
        Err(AnalysisError::CaptureInvalid(_))
    ));
    assert!(matches!(
        VideoReference::new("file:///a.mp4", Duration::ZERO).check(),
        Err(AnalysisError::CaptureInvalid(_))
    ));
}

#[test]
fn test_generated_scores_are_deterministic_and_in_range() {
    let service = SimulatedAnalysisService::new(Duration::ZERO, 7);
    let user = Uuid::new_v4();

    for sport in SportId::ALL {
        let req = request(user, sport);
        let first = service.generate(&req);
        assert_eq!(first, service.generate(&req), "{sport} is not deterministic");
        assert!(first.score > 0.0);
        assert!((0.75..=0.99).contains(&first.confidence));
        assert!((60..=98).contains(&first.technique_score));
        assert!(!first.cheat_detected);
    }

    let jump = service.generate(&request(user, SportId::VerticalJump));
    assert!((30.0..=75.0).contains(&jump.score));
    let run = service.generate(&request(user, SportId::EnduranceRun));
    assert!((380.0..=720.0).contains(&run.score));
    assert!(run.score.fract().abs() < f64::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_service_waits_for_delay() {
    let service = SimulatedAnalysisService::new(Duration::from_secs(3), 1);
    let req = request(Uuid::new_v4(), SportId::Situps);

    let started = tokio::time::Instant::now();
    let result = service.analyze(&req).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(3));
    assert_eq!(result, service.generate(&req));
    assert_eq!(service.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_scripted_steps_are_replayed_in_order() {
    let service = SimulatedAnalysisService::scripted(
        Duration::from_millis(100),
        vec![
            ScriptStep::fail(AnalysisError::ServiceUnavailable("down".into())),
            ScriptStep::ok(raw(61.5)).after(Duration::from_secs(1)),
        ],
    );
    let req = request(Uuid::new_v4(), SportId::VerticalJump);

    assert!(matches!(
        service.analyze(&req).await,
        Err(AnalysisError::ServiceUnavailable(_))
    ));
    let second = service.analyze(&req).await.unwrap();
    assert!((second.score - 61.5).abs() < f64::EPSILON);
    assert_eq!(service.analyze(&req).await.unwrap(), service.generate(&req));
    assert_eq!(service.calls(), 3);
}

#[tokio::test]
async fn test_invalid_capture_fails_before_waiting() {
    let service = SimulatedAnalysisService::new(Duration::from_secs(3600), 1);
    let mut req = request(Uuid::new_v4(), SportId::Situps);
    req.video = VideoReference::new("", Duration::from_secs(1));

    let err = service.analyze(&req).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::CaptureInvalid);
}

#[test]
fn test_ingestion_gates_in_order() {
    let ingestor = ResultIngestor::default();

    let flagged = RawAnalysis {
        cheat_detected: true,
        confidence: 2.0,
        ..raw(50.0)
    };
    assert_eq!(ingestor.check(&flagged), Err(AnalysisError::CheatDetected));

    let bad_confidence = RawAnalysis {
        confidence: 1.2,
        ..raw(50.0)
    };
    assert!(matches!(
        ingestor.check(&bad_confidence),
        Err(AnalysisError::MalformedResult(_))
    ));

    assert!(matches!(
        ingestor.check(&raw(-1.0)),
        Err(AnalysisError::MalformedResult(_))
    ));
    assert!(matches!(
        ingestor.check(&raw(f64::NAN)),
        Err(AnalysisError::MalformedResult(_))
    ));

    let bad_technique = RawAnalysis {
        technique_score: 101,
        ..raw(50.0)
    };
    assert!(matches!(
        ingestor.check(&bad_technique),
        Err(AnalysisError::MalformedResult(_))
    ));

    let unsure = RawAnalysis {
        confidence: 0.4,
        ..raw(50.0)
    };
    assert!(matches!(
        ingestor.check(&unsure),
        Err(AnalysisError::LowConfidence { .. })
    ));
}

#[test]
fn test_ingest_builds_benchmarked_result_with_achievements() {
    let ingestor = ResultIngestor::default();
    let user = Uuid::new_v4();
    let req = request(user, SportId::VerticalJump);
    let at = Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap();

    let result = ingestor
        .ingest(&req, raw(64.0), &AchievementHistory::new(), at)
        .unwrap();

    assert_eq!(result.user_id, user);
    assert_eq!(result.sport_id, SportId::VerticalJump);
    assert_eq!(result.unit, SportRegistry::global().get(SportId::VerticalJump).unit);
    assert_eq!(result.timestamp, at);
    assert!(result.benchmark_comparison.percentile <= 100);
    assert!(result.is_countable());

    let earned: Vec<&str> = result
        .achievements_earned
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert!(earned.contains(&"first_assessment"));
    assert!(earned.contains(&"high_jumper"));
}

#[test]
fn test_ingest_rejects_low_confidence_with_mapped_code() {
    let ingestor = ResultIngestor::default();
    let req = request(Uuid::new_v4(), SportId::Situps);
    let unsure = RawAnalysis {
        confidence: 0.3,
        ..raw(40.0)
    };

    let err = ingestor
        .ingest(&req, unsure, &AchievementHistory::new(), Utc::now())
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AnalysisLowConfidence);
}
