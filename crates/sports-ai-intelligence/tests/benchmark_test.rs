// ABOUTME: Tests for score to percentile evaluation
// ABOUTME: Covers interpolation, clamping, direction-aware monotonicity, and missing cohorts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use sports_ai_core::errors::ErrorCode;
use sports_ai_core::models::{
    AgeGroup, BetterDirection, GenderCategory, Rating, RatingThresholds, SportId,
};
use sports_ai_intelligence::benchmark::{
    BenchmarkEvaluator, DistributionError, ReferenceDistribution, StaticBenchmarkTable,
};

fn adult_male(evaluator: &BenchmarkEvaluator, sport: SportId, score: f64) -> u8 {
    evaluator
        .evaluate(sport, score, AgeGroup::Age18To25, GenderCategory::Male)
        .unwrap()
        .percentile
}

#[test]
fn test_interpolates_between_anchors() {
    let dist =
        ReferenceDistribution::new(BetterDirection::Higher, vec![(10.0, 0), (20.0, 50), (30.0, 100)])
            .unwrap();
    assert_eq!(dist.percentile_for(15.0), 25);
    assert_eq!(dist.percentile_for(20.0), 50);
    assert_eq!(dist.percentile_for(29.0), 95);
}

#[test]
fn test_clamps_outside_anchor_range() {
    let dist =
        ReferenceDistribution::new(BetterDirection::Higher, vec![(10.0, 5), (20.0, 95)]).unwrap();
    assert_eq!(dist.percentile_for(-100.0), 5);
    assert_eq!(dist.percentile_for(1_000.0), 95);
}

#[test]
fn test_rejects_invalid_anchors() {
    assert_eq!(
        ReferenceDistribution::new(BetterDirection::Higher, vec![(10.0, 5)]).unwrap_err(),
        DistributionError::TooFewAnchors(1)
    );
    assert!(matches!(
        ReferenceDistribution::new(BetterDirection::Higher, vec![(20.0, 5), (10.0, 50)]),
        Err(DistributionError::UnsortedScores { index: 1 })
    ));
    assert!(matches!(
        ReferenceDistribution::new(BetterDirection::Higher, vec![(10.0, 50), (20.0, 40)]),
        Err(DistributionError::NonMonotonic { index: 1, .. })
    ));
    assert!(matches!(
        ReferenceDistribution::new(BetterDirection::Lower, vec![(10.0, 40), (20.0, 50)]),
        Err(DistributionError::NonMonotonic { .. })
    ));
    assert!(matches!(
        ReferenceDistribution::new(BetterDirection::Higher, vec![(10.0, 50), (20.0, 120)]),
        Err(DistributionError::PercentileOutOfRange { percentile: 120, .. })
    ));
}

#[test]
fn test_sample_history_percentile_reproduced() {
    let evaluator = BenchmarkEvaluator::seeded();
    let benchmark = evaluator
        .evaluate(
            SportId::VerticalJump,
            65.0,
            AgeGroup::Age18To25,
            GenderCategory::Male,
        )
        .unwrap();
    assert_eq!(benchmark.percentile, 75);
    assert_eq!(benchmark.rating, Rating::Good);
}

#[test]
fn test_higher_is_better_monotone() {
    let evaluator = BenchmarkEvaluator::seeded();
    let mut previous = 0;
    for cm in (0..=120).step_by(5) {
        let p = adult_male(&evaluator, SportId::VerticalJump, f64::from(cm));
        assert!(p >= previous, "percentile dropped at {cm} cm");
        previous = p;
    }
}

#[test]
fn test_lower_is_better_for_timed_sports() {
    let evaluator = BenchmarkEvaluator::seeded();
    let fast = adult_male(&evaluator, SportId::ShuttleRun, 10.0);
    let slow = adult_male(&evaluator, SportId::ShuttleRun, 14.0);
    assert!(fast > slow, "faster shuttle run must rank higher ({fast} vs {slow})");

    let mut previous = 100;
    for tenths in 80..=200 {
        let p = adult_male(&evaluator, SportId::ShuttleRun, f64::from(tenths) / 10.0);
        assert!(p <= previous, "percentile rose at {tenths} tenths");
        previous = p;
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let a = BenchmarkEvaluator::seeded();
    let b = BenchmarkEvaluator::seeded();
    for sport in SportId::ALL {
        for age in AgeGroup::ALL {
            for gender in GenderCategory::ALL {
                assert_eq!(
                    a.evaluate(sport, 42.0, age, gender).unwrap(),
                    b.evaluate(sport, 42.0, age, gender).unwrap()
                );
            }
        }
    }
}

#[test]
fn test_seeded_table_covers_every_cohort() {
    let table = StaticBenchmarkTable::seeded();
    assert_eq!(
        table.len(),
        SportId::ALL.len() * AgeGroup::ALL.len() * GenderCategory::ALL.len()
    );
}

#[test]
fn test_younger_cohort_scores_higher_percentile() {
    let evaluator = BenchmarkEvaluator::seeded();
    let adult = evaluator
        .evaluate(SportId::Situps, 40.0, AgeGroup::Age18To25, GenderCategory::Male)
        .unwrap();
    let junior = evaluator
        .evaluate(SportId::Situps, 40.0, AgeGroup::Under14, GenderCategory::Male)
        .unwrap();
    assert!(junior.percentile > adult.percentile);
}

#[test]
fn test_missing_cohort_is_benchmark_unavailable() {
    let evaluator = BenchmarkEvaluator::new(StaticBenchmarkTable::new(), RatingThresholds::default());
    let err = evaluator
        .evaluate(SportId::Situps, 40.0, AgeGroup::Age18To25, GenderCategory::Male)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BenchmarkUnavailable);
}

#[test]
fn test_non_finite_score_rejected() {
    let evaluator = BenchmarkEvaluator::seeded();
    let err = evaluator
        .evaluate(
            SportId::Situps,
            f64::NAN,
            AgeGroup::Age18To25,
            GenderCategory::Male,
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_comparison_carries_cohort() {
    let evaluator = BenchmarkEvaluator::seeded();
    let comparison = evaluator
        .comparison(
            SportId::ShuttleRun,
            11.2,
            AgeGroup::Age14To17,
            GenderCategory::Female,
        )
        .unwrap();
    assert_eq!(comparison.age_group, AgeGroup::Age14To17);
    assert_eq!(comparison.gender_category, GenderCategory::Female);
    assert_eq!(
        comparison.rating,
        Rating::from_percentile(comparison.percentile, evaluator.thresholds())
    );
}
