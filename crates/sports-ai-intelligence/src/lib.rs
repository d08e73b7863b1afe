// ABOUTME: Assessment intelligence engine for the Sports AI platform
// ABOUTME: Benchmark percentiles, achievement rules, leaderboard ranking, and progress statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sports AI Intelligence
//!
//! Pure algorithms over the models in `sports_ai_core`. Nothing in this crate
//! performs IO or holds global mutable state; every function is deterministic
//! given its inputs, which keeps the evaluators trivially testable and safe to
//! share across async tasks.
//!
//! - [`benchmark`]: score to percentile to rating against a cohort distribution
//! - [`achievements`]: ordered achievement rules over a user's history
//! - [`leaderboard`]: direction-aware ranking with a strict tie-break
//! - [`progress`]: streaks, period windows, and per-user summaries

/// Score to percentile evaluation against reference distributions
pub mod benchmark;

/// Achievement rules and evaluator
pub mod achievements;

/// Leaderboard ranking
pub mod leaderboard;

/// Streaks and progress statistics
pub mod progress;

pub use achievements::{
    AchievementDefinition, AchievementEvaluator, AchievementHistory, AchievementRule,
};
pub use benchmark::{
    Benchmark, BenchmarkEvaluator, BenchmarkTable, DistributionError, ReferenceDistribution,
    StaticBenchmarkTable,
};
pub use leaderboard::{medal, rank_of, Competitor, LeaderboardRanker, ScopeFilter};
pub use progress::{best_streak, current_streak, ProgressPeriod, ProgressSummary};
