// ABOUTME: Shared fixtures for root crate integration tests
// ABOUTME: Athlete profiles, analysis requests, and pipelines over scripted services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use sports_ai::analysis::{
    AnalysisRequest, RawAnalysis, ResultIngestor, ScriptStep, SimulatedAnalysisService,
    VideoReference,
};
use sports_ai::assessment::AssessmentPipeline;
use sports_ai::config::AssessmentConfig;
use sports_ai::models::{AgeGroup, GenderCategory, SportId, UserProfile, UserRole};
use sports_ai::store::{InMemoryResultStore, ResultStore};
use uuid::Uuid;

/// Athlete born in 2000 living in `district`, `state`
pub fn athlete(name: &str, district: Option<&str>, state: Option<&str>) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        name: name.to_owned(),
        role: UserRole::Athlete,
        avatar: None,
        district: district.map(str::to_owned),
        state: state.map(str::to_owned),
        date_of_birth: NaiveDate::from_ymd_opt(2000, 3, 1),
        gender: Some(GenderCategory::Male),
        preferred_language: "en".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap(),
    }
}

/// Playable video reference
pub fn video() -> VideoReference {
    VideoReference::new("file:///recordings/test.mp4", Duration::from_secs(20))
}

/// Request for `sport` by `user_id` in the 18-25 male cohort
pub fn request(user_id: Uuid, sport: SportId) -> AnalysisRequest {
    AnalysisRequest {
        video: video(),
        sport,
        user_id,
        age_group: AgeGroup::Age18To25,
        gender: GenderCategory::Male,
    }
}

/// Clean measurement with good confidence
pub fn raw(score: f64) -> RawAnalysis {
    RawAnalysis {
        score,
        confidence: 0.9,
        technique_score: 85,
        cheat_detected: false,
    }
}

/// Default pipeline timings: 10 s timeout, 2 retries, 500 ms backoff
pub fn assessment_config() -> AssessmentConfig {
    AssessmentConfig {
        analysis_timeout: Duration::from_secs(10),
        max_retries: 2,
        retry_backoff: Duration::from_millis(500),
        ..AssessmentConfig::default()
    }
}

/// Pipeline over a scripted service; unscripted calls take `delay`
pub fn scripted_pipeline(
    delay: Duration,
    steps: Vec<ScriptStep>,
) -> (AssessmentPipeline, Arc<SimulatedAnalysisService>, Arc<InMemoryResultStore>) {
    let service = Arc::new(SimulatedAnalysisService::scripted(delay, steps));
    let store = Arc::new(InMemoryResultStore::new());
    let pipeline = AssessmentPipeline::new(
        service.clone(),
        ResultIngestor::default(),
        store.clone() as Arc<dyn ResultStore>,
        assessment_config(),
    );
    (pipeline, service, store)
}
