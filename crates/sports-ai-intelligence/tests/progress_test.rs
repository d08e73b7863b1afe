// ABOUTME: Tests for streaks and progress summaries
// ABOUTME: Consecutive days, period windows, personal bests, and improvement rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{at, cheating_result, result};
use sports_ai_core::models::SportId;
use sports_ai_intelligence::progress::{best_streak, current_streak, ProgressPeriod, ProgressSummary};
use uuid::Uuid;

#[test]
fn test_current_streak_counts_back_from_today() {
    let stamps = vec![at(5, 9), at(6, 9), at(6, 18), at(7, 9)];
    assert_eq!(current_streak(stamps.clone(), at(7, 0).date_naive()), 3);
    // Nothing yet today: streak still alive from yesterday
    assert_eq!(current_streak(stamps.clone(), at(8, 0).date_naive()), 3);
    // A full missed day breaks it
    assert_eq!(current_streak(stamps, at(9, 0).date_naive()), 0);
}

#[test]
fn test_best_streak_finds_longest_run() {
    let stamps = vec![
        at(1, 9),
        at(2, 9),
        at(4, 9),
        at(5, 9),
        at(6, 9),
        at(7, 9),
        at(10, 9),
    ];
    assert_eq!(best_streak(stamps), 4);
    assert_eq!(best_streak(Vec::new()), 0);
}

#[test]
fn test_period_window() {
    let now = at(15, 12);
    assert!(ProgressPeriod::Week.contains(at(9, 13), now));
    assert!(!ProgressPeriod::Week.contains(at(8, 11), now));
    assert!(ProgressPeriod::Month.contains(at(1, 0), now));
    assert!(!ProgressPeriod::Year.contains(at(16, 0), now));
    assert_eq!("month".parse::<ProgressPeriod>().unwrap(), ProgressPeriod::Month);
    assert!("decade".parse::<ProgressPeriod>().is_err());
}

#[test]
fn test_summary_figures() {
    let user = Uuid::new_v4();
    let results = vec![
        result(user, SportId::VerticalJump, 50.0, 50, at(2, 10)),
        result(user, SportId::VerticalJump, 60.0, 70, at(12, 10)),
        result(user, SportId::ShuttleRun, 12.5, 50, at(13, 10)),
        result(user, SportId::ShuttleRun, 11.25, 80, at(14, 10)),
        cheating_result(user, SportId::VerticalJump, 95.0, at(14, 11)),
    ];

    let summary = ProgressSummary::compute(&results, ProgressPeriod::Week, at(14, 12));
    assert_eq!(summary.total_tests, 4);
    assert_eq!(summary.tests_in_period, 3);
    // (70 + 50 + 80) / 3
    assert_eq!(summary.average_percentile, Some(67));
    assert_eq!(summary.personal_bests.get(&SportId::VerticalJump), Some(&60.0));
    assert_eq!(summary.personal_bests.get(&SportId::ShuttleRun), Some(&11.25));
    assert_eq!(summary.current_streak, 3);
    assert_eq!(summary.best_streak, 3);

    // Shuttle run improved 10% (faster); vertical jump has one result in window
    let rate = summary.improvement_rate.unwrap();
    assert!((rate - 10.0).abs() < 1e-9, "rate was {rate}");
}

#[test]
fn test_summary_of_empty_history() {
    let summary = ProgressSummary::compute(&[], ProgressPeriod::Month, at(14, 12));
    assert_eq!(summary.total_tests, 0);
    assert_eq!(summary.average_percentile, None);
    assert_eq!(summary.improvement_rate, None);
    assert_eq!(summary.current_streak, 0);
}
