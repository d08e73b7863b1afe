// ABOUTME: Core data models for the Sports AI assessment platform
// ABOUTME: Re-exports sport, performance, achievement, leaderboard, and user types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data contracts consumed by every screen and algorithm.
//!
//! - `SportDefinition`: display and measurement metadata for one sport
//! - `PerformanceResult`: outcome of one completed assessment attempt
//! - `Achievement`: unlocked milestone, never mutated or removed
//! - `LeaderboardEntry`: one ranked row within a scope
//! - `UserProfile`: registered athlete, coach, or official
//!
//! Wire names use camelCase to match the mobile client's JSON payloads.

mod achievement;
mod leaderboard;
mod performance;
mod sport;
mod user;

pub use achievement::{Achievement, AchievementCategory};
pub use leaderboard::{LeaderboardEntry, LeaderboardScope, LeaderboardUser};
pub use performance::{
    AgeGroup, BenchmarkComparison, GenderCategory, PerformanceResult, Rating, RatingThresholds,
    VideoAnalysis,
};
pub use sport::{BetterDirection, SportDefinition, SportId};
pub use user::{UserProfile, UserRole};
