// ABOUTME: Tests for achievement rules and the evaluator
// ABOUTME: Thresholds, rule order, duplicate suppression, cheat exclusion, and idempotency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{at, cheating_result, result};
use sports_ai_core::models::{AchievementCategory, PerformanceResult, SportId};
use sports_ai_intelligence::achievements::{AchievementEvaluator, AchievementHistory};
use uuid::Uuid;

fn ids(achievements: &[sports_ai_core::models::Achievement]) -> Vec<&str> {
    achievements.iter().map(|a| a.id.as_str()).collect()
}

/// Record `result` with the achievements it unlocks, returning them
fn award(
    evaluator: &AchievementEvaluator,
    history: &mut AchievementHistory,
    mut result: PerformanceResult,
) -> Vec<String> {
    result.achievements_earned = evaluator.evaluate(&result, history);
    let unlocked = result
        .achievements_earned
        .iter()
        .map(|a| a.id.clone())
        .collect();
    history.record(&result);
    unlocked
}

#[test]
fn test_rule_order_is_fixed() {
    let evaluator = AchievementEvaluator::new();
    let order: Vec<&str> = evaluator.rule_ids().collect();
    assert_eq!(
        order,
        vec![
            "first_assessment",
            "high_jumper",
            "speed_demon",
            "core_crusher",
            "top_ten_percent",
            "personal_best",
            "consistency_master",
            "early_bird",
            "all_rounder",
        ]
    );
}

#[test]
fn test_first_high_jump_unlocks_in_rule_order() {
    let evaluator = AchievementEvaluator::new();
    let history = AchievementHistory::new();
    let user = Uuid::new_v4();

    let jump = result(user, SportId::VerticalJump, 65.0, 75, at(8, 10));
    let unlocked = evaluator.evaluate(&jump, &history);

    assert_eq!(ids(&unlocked), vec!["first_assessment", "high_jumper"]);
    assert!(unlocked.iter().all(|a| a.earned_at == jump.timestamp));
    assert_eq!(unlocked[1].category, AchievementCategory::Performance);
}

#[test]
fn test_threshold_boundaries() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();
    // Prime the history so first_assessment does not fire
    award(
        &evaluator,
        &mut history,
        result(user, SportId::EnduranceRun, 500.0, 60, at(1, 12)),
    );

    let exactly_60 = result(user, SportId::VerticalJump, 60.0, 70, at(20, 12));
    assert!(!ids(&evaluator.evaluate(&exactly_60, &history)).contains(&"high_jumper"));

    let exactly_12 = result(user, SportId::ShuttleRun, 12.0, 60, at(20, 12));
    assert!(!ids(&evaluator.evaluate(&exactly_12, &history)).contains(&"speed_demon"));
    let under_12 = result(user, SportId::ShuttleRun, 11.9, 80, at(20, 12));
    assert!(ids(&evaluator.evaluate(&under_12, &history)).contains(&"speed_demon"));

    let fifty = result(user, SportId::Situps, 50.0, 80, at(20, 12));
    assert!(ids(&evaluator.evaluate(&fifty, &history)).contains(&"core_crusher"));

    let p90 = result(user, SportId::Situps, 30.0, 90, at(20, 12));
    assert!(ids(&evaluator.evaluate(&p90, &history)).contains(&"top_ten_percent"));
    let p89 = result(user, SportId::Situps, 30.0, 89, at(20, 12));
    assert!(!ids(&evaluator.evaluate(&p89, &history)).contains(&"top_ten_percent"));
}

#[test]
fn test_cheat_flag_unlocks_nothing() {
    let evaluator = AchievementEvaluator::new();
    let history = AchievementHistory::new();
    let flagged = cheating_result(Uuid::new_v4(), SportId::VerticalJump, 90.0, at(8, 6));
    assert!(evaluator.evaluate(&flagged, &history).is_empty());
}

#[test]
fn test_duplicates_are_suppressed() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    let first = award(
        &evaluator,
        &mut history,
        result(user, SportId::VerticalJump, 65.0, 75, at(8, 10)),
    );
    assert!(first.contains(&"high_jumper".to_owned()));

    let second = award(
        &evaluator,
        &mut history,
        result(user, SportId::VerticalJump, 62.0, 72, at(9, 10)),
    );
    assert!(second.is_empty(), "unexpected repeat unlocks: {second:?}");
    assert_eq!(history.achievements().len(), 2);
}

#[test]
fn test_re_evaluating_recorded_result_is_empty() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    let mut jump = result(user, SportId::VerticalJump, 65.0, 95, at(8, 7));
    jump.achievements_earned = evaluator.evaluate(&jump, &history);
    assert!(!jump.achievements_earned.is_empty());

    history.record(&jump);
    history.record(&jump);
    assert_eq!(history.results().len(), 1);
    assert!(evaluator.evaluate(&jump, &history).is_empty());
}

#[test]
fn test_personal_best_is_direction_aware() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    award(
        &evaluator,
        &mut history,
        result(user, SportId::ShuttleRun, 12.5, 50, at(6, 12)),
    );
    let slower = result(user, SportId::ShuttleRun, 13.0, 40, at(7, 12));
    assert!(!ids(&evaluator.evaluate(&slower, &history)).contains(&"personal_best"));

    let faster = result(user, SportId::ShuttleRun, 12.2, 55, at(7, 12));
    assert!(ids(&evaluator.evaluate(&faster, &history)).contains(&"personal_best"));
}

#[test]
fn test_personal_best_ignores_cheating_history() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    history.record(&cheating_result(user, SportId::Situps, 80.0, at(5, 12)));
    award(
        &evaluator,
        &mut history,
        result(user, SportId::Situps, 30.0, 30, at(6, 12)),
    );

    let better = result(user, SportId::Situps, 35.0, 40, at(7, 12));
    assert!(ids(&evaluator.evaluate(&better, &history)).contains(&"personal_best"));
}

#[test]
fn test_seven_day_streak_unlocks_consistency() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    for day in 1..=6 {
        let unlocked = award(
            &evaluator,
            &mut history,
            result(user, SportId::Situps, 20.0, 10, at(day, 12)),
        );
        assert!(!unlocked.contains(&"consistency_master".to_owned()));
    }
    let seventh = award(
        &evaluator,
        &mut history,
        result(user, SportId::Situps, 20.0, 10, at(7, 12)),
    );
    assert!(seventh.contains(&"consistency_master".to_owned()));
}

#[test]
fn test_early_bird_before_eight_utc() {
    let evaluator = AchievementEvaluator::new();
    let history = AchievementHistory::new();
    let user = Uuid::new_v4();

    let dawn = result(user, SportId::Situps, 20.0, 10, at(8, 7));
    assert!(ids(&evaluator.evaluate(&dawn, &history)).contains(&"early_bird"));
    let eight = result(user, SportId::Situps, 20.0, 10, at(8, 8));
    assert!(!ids(&evaluator.evaluate(&eight, &history)).contains(&"early_bird"));
}

#[test]
fn test_all_rounder_needs_every_available_sport() {
    let evaluator = AchievementEvaluator::new();
    let mut history = AchievementHistory::new();
    let user = Uuid::new_v4();

    award(&evaluator, &mut history, result(user, SportId::VerticalJump, 40.0, 30, at(10, 12)));
    award(&evaluator, &mut history, result(user, SportId::ShuttleRun, 13.0, 40, at(11, 12)));
    let third = award(
        &evaluator,
        &mut history,
        result(user, SportId::Situps, 30.0, 30, at(12, 12)),
    );
    assert!(!third.contains(&"all_rounder".to_owned()));

    // Shot put is not available, so four sports complete the set
    let fourth = award(
        &evaluator,
        &mut history,
        result(user, SportId::EnduranceRun, 500.0, 60, at(13, 12)),
    );
    assert!(fourth.contains(&"all_rounder".to_owned()));
}
