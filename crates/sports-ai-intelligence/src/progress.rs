// ABOUTME: Streak tracking and progress statistics over a user's assessment history
// ABOUTME: Consecutive-day streaks, period windows, personal bests, and improvement rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sports_ai_core::errors::AppError;
use sports_ai_core::models::{BetterDirection, PerformanceResult, SportId};
use sports_ai_core::registry::SportRegistry;

fn distinct_days(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> BTreeSet<NaiveDate> {
    timestamps.into_iter().map(|ts| ts.date_naive()).collect()
}

/// Consecutive UTC days with at least one assessment, ending today
///
/// A streak stays alive through `today` until the day is over: when nothing
/// was recorded today yet, counting starts from yesterday.
#[must_use]
pub fn current_streak(
    timestamps: impl IntoIterator<Item = DateTime<Utc>>,
    today: NaiveDate,
) -> u32 {
    let days = distinct_days(timestamps);

    let mut cursor = if days.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive UTC days with at least one assessment
#[must_use]
pub fn best_streak(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in distinct_days(timestamps) {
        run = match previous.and_then(|p| p.succ_opt()) {
            Some(expected) if expected == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// Rolling window used by the progress screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressPeriod {
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
    /// Last 365 days
    Year,
}

impl ProgressPeriod {
    /// Every period, shortest first
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Year];

    /// Window length
    #[must_use]
    pub fn length(self) -> Duration {
        match self {
            Self::Week => Duration::days(7),
            Self::Month => Duration::days(30),
            Self::Year => Duration::days(365),
        }
    }

    /// Whether `timestamp` falls inside the window ending at `now`
    #[must_use]
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        timestamp <= now && timestamp > now - self.length()
    }

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Period selector label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Year => "This Year",
        }
    }
}

impl fmt::Display for ProgressPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown progress period '{s}'")))
    }
}

/// Aggregated statistics for one user
///
/// Cheat-flagged results are excluded from every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Window the period figures cover
    pub period: ProgressPeriod,
    /// All countable results
    pub total_tests: usize,
    /// Countable results inside the window
    pub tests_in_period: usize,
    /// Mean percentile inside the window, rounded
    pub average_percentile: Option<u8>,
    /// Best score per sport over all time, direction-aware
    pub personal_bests: BTreeMap<SportId, f64>,
    /// Mean percent change from first to latest score per sport inside the window
    pub improvement_rate: Option<f64>,
    /// Current consecutive-day streak
    pub current_streak: u32,
    /// Longest consecutive-day streak
    pub best_streak: u32,
}

impl ProgressSummary {
    /// Summarize `results` for the window ending at `now`
    #[must_use]
    pub fn compute(
        results: &[PerformanceResult],
        period: ProgressPeriod,
        now: DateTime<Utc>,
    ) -> Self {
        let countable: Vec<&PerformanceResult> =
            results.iter().filter(|r| r.is_countable()).collect();
        let in_period: Vec<&PerformanceResult> = countable
            .iter()
            .copied()
            .filter(|r| period.contains(r.timestamp, now))
            .collect();

        let average_percentile = if in_period.is_empty() {
            None
        } else {
            let sum: u32 = in_period
                .iter()
                .map(|r| u32::from(r.benchmark_comparison.percentile))
                .sum();
            Some((f64::from(sum) / in_period.len() as f64).round() as u8)
        };

        let timestamps = || countable.iter().map(|r| r.timestamp);

        Self {
            period,
            total_tests: countable.len(),
            tests_in_period: in_period.len(),
            average_percentile,
            personal_bests: personal_bests(&countable),
            improvement_rate: improvement_rate(&in_period),
            current_streak: current_streak(timestamps(), now.date_naive()),
            best_streak: best_streak(timestamps()),
        }
    }
}

fn personal_bests(results: &[&PerformanceResult]) -> BTreeMap<SportId, f64> {
    let registry = SportRegistry::global();
    let mut bests: BTreeMap<SportId, f64> = BTreeMap::new();
    for result in results {
        let direction = registry.get(result.sport_id).better_direction;
        bests
            .entry(result.sport_id)
            .and_modify(|best| {
                if direction.is_better(result.score, *best) {
                    *best = result.score;
                }
            })
            .or_insert(result.score);
    }
    bests
}

fn improvement_rate(results: &[&PerformanceResult]) -> Option<f64> {
    let registry = SportRegistry::global();
    let mut by_sport: BTreeMap<SportId, Vec<&PerformanceResult>> = BTreeMap::new();
    for &result in results {
        by_sport.entry(result.sport_id).or_default().push(result);
    }

    let changes: Vec<f64> = by_sport
        .into_iter()
        .filter_map(|(sport, mut series)| {
            if series.len() < 2 {
                return None;
            }
            series.sort_by_key(|r| r.timestamp);
            let first = series.first()?.score;
            let latest = series.last()?.score;
            if first <= 0.0 {
                return None;
            }
            let change = match registry.get(sport).better_direction {
                BetterDirection::Higher => latest - first,
                BetterDirection::Lower => first - latest,
            };
            Some(change / first * 100.0)
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.iter().sum::<f64>() / changes.len() as f64)
    }
}
