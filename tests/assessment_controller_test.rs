// ABOUTME: Tests for the assessment screen controller lifecycle
// ABOUTME: Sport selection, background runs, cancellation, and settled states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::{athlete, raw, scripted_pipeline, video};
use sports_ai::analysis::{RawAnalysis, ScriptStep};
use sports_ai::assessment::{AssessmentController, AssessmentState};
use sports_ai::errors::{AnalysisError, ErrorCode};
use sports_ai::models::SportId;
use sports_ai::store::{InMemoryResultStore, ResultStore};
use uuid::Uuid;

fn setup(
    delay: Duration,
    steps: Vec<ScriptStep>,
) -> (AssessmentController, Arc<InMemoryResultStore>, Uuid) {
    let (pipeline, _service, store) = scripted_pipeline(delay, steps);
    let profile = athlete("Riya", Some("Pune"), Some("Maharashtra"));
    let user = profile.id;
    (AssessmentController::new(pipeline, profile), store, user)
}

#[tokio::test]
async fn test_start_requires_a_selected_sport() {
    let (controller, _store, _user) = setup(Duration::from_millis(10), Vec::new());

    let err = controller.start(video()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(controller.state(), AssessmentState::Idle);
}

#[tokio::test]
async fn test_unavailable_sport_cannot_be_selected() {
    let (controller, _store, _user) = setup(Duration::from_millis(10), Vec::new());
    controller.select_sport(SportId::Situps).unwrap();

    let err = controller.select_sport(SportId::Shotput).unwrap_err();
    assert_eq!(err.code, ErrorCode::SportUnavailable);
    assert_eq!(controller.selected_sport(), Some(SportId::Situps));
    assert_eq!(controller.sports().len(), SportId::ALL.len());
}

#[tokio::test(start_paused = true)]
async fn test_completed_assessment_clears_selection() {
    let (controller, store, user) = setup(
        Duration::from_secs(3),
        vec![ScriptStep::ok(raw(63.0))],
    );
    controller.select_sport(SportId::VerticalJump).unwrap();
    controller.start(video()).unwrap();

    assert_eq!(
        controller.state(),
        AssessmentState::InFlight {
            sport: SportId::VerticalJump,
            attempt: 1
        }
    );

    let AssessmentState::Completed(result) = controller.wait().await else {
        panic!("expected a completed assessment");
    };
    assert!((result.score - 63.0).abs() < f64::EPSILON);
    assert_eq!(result.user_id, user);
    assert_eq!(controller.selected_sport(), None);
    assert_eq!(store.results_for(user).await.unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_second_start_is_rejected_while_running() {
    let (controller, _store, _user) = setup(Duration::from_secs(3), Vec::new());
    controller.select_sport(SportId::Situps).unwrap();
    controller.start(video()).unwrap();

    assert_eq!(
        controller.start(video()).unwrap_err().code,
        ErrorCode::AssessmentInProgress
    );
    assert_eq!(
        controller.select_sport(SportId::ShuttleRun).unwrap_err().code,
        ErrorCode::AssessmentInProgress
    );
    assert_eq!(
        controller.reset().unwrap_err().code,
        ErrorCode::AssessmentInProgress
    );

    assert!(matches!(controller.wait().await, AssessmentState::Completed(_)));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_keeps_selection() {
    let (controller, store, user) = setup(Duration::from_secs(3), Vec::new());
    controller.select_sport(SportId::EnduranceRun).unwrap();
    controller.start(video()).unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(controller.cancel().unwrap());

    assert_eq!(controller.wait().await, AssessmentState::Canceled);
    assert_eq!(controller.selected_sport(), Some(SportId::EnduranceRun));
    assert!(!controller.cancel().unwrap());
    assert!(store.results_for(user).await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failure_is_reported_and_can_be_reset() {
    let flagged = RawAnalysis {
        cheat_detected: true,
        ..raw(70.0)
    };
    let (controller, _store, _user) = setup(Duration::from_secs(1), vec![ScriptStep::ok(flagged)]);
    controller.select_sport(SportId::VerticalJump).unwrap();
    controller.start(video()).unwrap();

    let AssessmentState::Failed(failure) = controller.wait().await else {
        panic!("expected a failed assessment");
    };
    assert_eq!(failure.code, ErrorCode::CheatDetected);
    assert_eq!(controller.selected_sport(), Some(SportId::VerticalJump));

    controller.reset().unwrap();
    assert_eq!(controller.state(), AssessmentState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_retry_then_completion_is_observable() {
    let (controller, _store, _user) = setup(
        Duration::from_millis(200),
        vec![
            ScriptStep::fail(AnalysisError::ServiceUnavailable("busy".into())),
            ScriptStep::ok(raw(12.4)),
        ],
    );
    let mut states = controller.subscribe();
    controller.select_sport(SportId::ShuttleRun).unwrap();
    controller.start(video()).unwrap();

    let mut attempts = Vec::new();
    loop {
        states.changed().await.unwrap();
        let state = states.borrow_and_update().clone();
        match state {
            AssessmentState::InFlight { attempt, .. } => attempts.push(attempt),
            AssessmentState::Completed(_) => break,
            other => panic!("unexpected state {}", other.as_str()),
        }
    }
    assert_eq!(attempts.last(), Some(&2));
}
