// ABOUTME: Dashboard screen controller computing the home tab statistics
// ABOUTME: Weekly tests, streak, totals, average percentile, and recent achievements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sports_ai_intelligence::{ProgressPeriod, ProgressSummary};
use uuid::Uuid;

use super::ViewState;
use crate::errors::AppResult;
use crate::models::Achievement;
use crate::presentation::palette;
use crate::store::ResultStore;

/// Number of achievements shown on the dashboard
const RECENT_ACHIEVEMENTS: usize = 2;

/// Figures shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Tests in the last seven days
    pub tests_this_week: usize,
    /// Consecutive days with a test, ending today or yesterday
    pub current_streak: u32,
    /// All countable tests
    pub total_tests: usize,
    /// Mean percentile over the last seven days
    pub average_percentile: Option<u8>,
    /// Best percentile ever reached
    pub best_percentile: Option<u8>,
    /// Latest achievements, newest first
    pub recent_achievements: Vec<Achievement>,
}

/// One tile of the quick stats grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    /// Caption
    pub label: &'static str,
    /// Rendered value
    pub value: String,
    /// Icon glyph
    pub icon: &'static str,
    /// Icon color
    pub color: &'static str,
}

impl DashboardStats {
    /// Quick stats grid in display order
    #[must_use]
    pub fn quick_stats(&self) -> Vec<QuickStat> {
        let percent = |value: Option<u8>| value.map_or_else(|| "-".to_owned(), |p| format!("{p}%"));
        vec![
            QuickStat {
                label: "Tests This Week",
                value: self.tests_this_week.to_string(),
                icon: "📊",
                color: palette::PRIMARY,
            },
            QuickStat {
                label: "Current Streak",
                value: format!("{} days", self.current_streak),
                icon: "🔥",
                color: "#EA580C",
            },
            QuickStat {
                label: "Personal Best",
                value: percent(self.best_percentile),
                icon: "🏆",
                color: palette::SECONDARY,
            },
            QuickStat {
                label: "Total Tests",
                value: self.total_tests.to_string(),
                icon: "🌍",
                color: "#7C3AED",
            },
        ]
    }
}

/// Home tab
pub struct DashboardController {
    results: Arc<dyn ResultStore>,
    user_id: Uuid,
    state: ViewState<DashboardStats>,
}

impl DashboardController {
    /// Dashboard of `user_id`
    #[must_use]
    pub fn new(results: Arc<dyn ResultStore>, user_id: Uuid) -> Self {
        Self {
            results,
            user_id,
            state: ViewState::Loading,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<DashboardStats> {
        &self.state
    }

    /// Reload statistics as of `now`
    pub async fn refresh(&mut self, now: DateTime<Utc>) -> &ViewState<DashboardStats> {
        self.state = ViewState::Loading;
        self.state = ViewState::from_result(self.load(now).await);
        &self.state
    }

    async fn load(&self, now: DateTime<Utc>) -> AppResult<DashboardStats> {
        let results = self.results.results_for(self.user_id).await?;
        let summary = ProgressSummary::compute(&results, ProgressPeriod::Week, now);

        let best_percentile = results
            .iter()
            .filter(|r| r.is_countable())
            .map(|r| r.benchmark_comparison.percentile)
            .max();

        let mut achievements: Vec<Achievement> = results
            .iter()
            .flat_map(|r| r.achievements_earned.iter().cloned())
            .collect();
        achievements.sort_by(|a, b| b.earned_at.cmp(&a.earned_at));
        achievements.truncate(RECENT_ACHIEVEMENTS);

        Ok(DashboardStats {
            tests_this_week: summary.tests_in_period,
            current_streak: summary.current_streak,
            total_tests: summary.total_tests,
            average_percentile: summary.average_percentile,
            best_percentile,
            recent_achievements: achievements,
        })
    }
}
