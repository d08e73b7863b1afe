// ABOUTME: Data sources for performance results, user profiles, and leaderboards
// ABOUTME: Async ResultStore trait with an in-memory implementation behind a tokio RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data sources
//!
//! Persistence is out of scope, so every source here lives in memory. The
//! [`ResultStore`] trait is the seam a real backend would implement.

/// Deterministic demo population
pub mod demo;

/// User profile directory
pub mod directory;

/// Paged leaderboard queries
pub mod leaderboard;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use sports_ai_intelligence::AchievementHistory;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Achievement, PerformanceResult, SportId};
pub use demo::{seed_demo_data, DemoPopulation};
pub use directory::UserDirectory;
pub use leaderboard::{LeaderboardPage, LeaderboardQuery, LeaderboardService, OwnRank};

/// Storage of completed performance results
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Store a new result
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a result with the same id already exists.
    async fn insert(&self, result: PerformanceResult) -> AppResult<()>;

    /// Results of `user_id`, oldest first
    async fn results_for(&self, user_id: Uuid) -> AppResult<Vec<PerformanceResult>>;

    /// Results for `sport` across all users, oldest first
    async fn results_for_sport(&self, sport: SportId) -> AppResult<Vec<PerformanceResult>>;

    /// Achievement history of `user_id`, rebuilt from stored results
    async fn history_for(&self, user_id: Uuid) -> AppResult<AchievementHistory> {
        let results = self.results_for(user_id).await?;
        Ok(AchievementHistory::from_results(&results))
    }

    /// Achievements earned by `user_id`, oldest first
    async fn achievements_for(&self, user_id: Uuid) -> AppResult<Vec<Achievement>> {
        Ok(self.history_for(user_id).await?.achievements().to_vec())
    }
}

#[derive(Default)]
struct StoreInner {
    results: Vec<PerformanceResult>,
    ids: HashSet<Uuid>,
}

/// Result store held in process memory
#[derive(Clone, Default)]
pub struct InMemoryResultStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryResultStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results
    pub async fn len(&self) -> usize {
        self.inner.read().await.results.len()
    }

    /// Whether the store holds no results
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.results.is_empty()
    }

    async fn filtered(
        &self,
        keep: impl Fn(&PerformanceResult) -> bool + Send,
    ) -> Vec<PerformanceResult> {
        let guard = self.inner.read().await;
        let mut selected: Vec<PerformanceResult> =
            guard.results.iter().filter(|r| keep(r)).cloned().collect();
        drop(guard);
        selected.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        selected
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn insert(&self, result: PerformanceResult) -> AppResult<()> {
        let mut guard = self.inner.write().await;
        if !guard.ids.insert(result.id) {
            return Err(AppError::invalid_input(format!(
                "Result {} already stored",
                result.id
            )));
        }
        debug!(result.id = %result.id, user.id = %result.user_id, sport = %result.sport_id, "Result stored");
        guard.results.push(result);
        Ok(())
    }

    async fn results_for(&self, user_id: Uuid) -> AppResult<Vec<PerformanceResult>> {
        Ok(self.filtered(|r| r.user_id == user_id).await)
    }

    async fn results_for_sport(&self, sport: SportId) -> AppResult<Vec<PerformanceResult>> {
        Ok(self.filtered(|r| r.sport_id == sport).await)
    }
}
