// ABOUTME: Progress screen controller with period selection and result history
// ABOUTME: Combines the progress summary with result cards for the selected window
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
use crate::models::PerformanceResult;
use crate::presentation::ResultCardModel;
use crate::store::ResultStore;

/// Content of the progress screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    /// Statistics for the selected period
    pub summary: ProgressSummary,
    /// Results inside the period, newest first
    pub results: Vec<PerformanceResult>,
    /// Cards for `results`, same order
    pub cards: Vec<ResultCardModel>,
}

/// Progress tab
pub struct ProgressController {
    results: Arc<dyn ResultStore>,
    user_id: Uuid,
    period: ProgressPeriod,
    state: ViewState<ProgressView>,
}

impl ProgressController {
    /// Progress of `user_id`, starting on the weekly view
    #[must_use]
    pub fn new(results: Arc<dyn ResultStore>, user_id: Uuid) -> Self {
        Self {
            results,
            user_id,
            period: ProgressPeriod::default(),
            state: ViewState::Loading,
        }
    }

    /// Selected period
    #[must_use]
    pub const fn period(&self) -> ProgressPeriod {
        self.period
    }

    /// Change the period; takes effect on the next refresh
    pub fn select_period(&mut self, period: ProgressPeriod) {
        if self.period != period {
            self.period = period;
            self.state = ViewState::Loading;
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<ProgressView> {
        &self.state
    }

    /// Reload as of `now`
    pub async fn refresh(&mut self, now: DateTime<Utc>) -> &ViewState<ProgressView> {
        self.state = ViewState::Loading;
        self.state = ViewState::from_result(self.load(now).await);
        &self.state
    }

    async fn load(&self, now: DateTime<Utc>) -> AppResult<ProgressView> {
        let all = self.results.results_for(self.user_id).await?;
        let summary = ProgressSummary::compute(&all, self.period, now);

        let mut results: Vec<PerformanceResult> = all
            .into_iter()
            .filter(|r| self.period.contains(r.timestamp, now))
            .collect();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let cards = results.iter().map(ResultCardModel::new).collect();

        Ok(ProgressView {
            summary,
            results,
            cards,
        })
    }
}
