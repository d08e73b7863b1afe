// ABOUTME: Achievement model awarded when a result or streak crosses a threshold
// ABOUTME: Achievements are append-only and identified by a stable rule id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement grouping shown on the profile screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    /// Single-result performance thresholds
    Performance,
    /// Streak based
    Consistency,
    /// Beating an earlier result
    Improvement,
    /// Participation milestones
    Milestone,
}

/// An unlocked achievement
///
/// The `id` is the rule identifier, so a user holds at most one achievement per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable rule identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// What was accomplished
    pub description: String,
    /// Emoji icon
    pub icon: String,
    /// Grouping
    pub category: AchievementCategory,
    /// When it was earned
    pub earned_at: DateTime<Utc>,
}
