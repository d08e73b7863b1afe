// ABOUTME: Leaderboard query service over the result store and user directory
// ABOUTME: Scope resolution from the requester's profile, cursor paging, and own-rank lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use sports_ai_intelligence::{rank_of, LeaderboardRanker, ScopeFilter};
use uuid::Uuid;

use super::{ResultStore, UserDirectory};
use crate::constants::leaderboard::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{LeaderboardEntry, LeaderboardScope, SportId};
use crate::pagination::{Cursor, RankCursor};
use crate::registry::SportRegistry;

/// Parameters of one leaderboard page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    /// Ranked sport
    pub sport: SportId,
    /// Regional scope
    pub scope: LeaderboardScope,
    /// User whose region anchors regional scopes and whose rank is reported
    pub requester: Option<Uuid>,
    /// Continuation cursor from a previous page
    pub cursor: Option<Cursor>,
    /// Entries per page; `None` uses the service default
    pub page_size: Option<usize>,
}

impl LeaderboardQuery {
    /// First page of `sport` in `scope` seen by `requester`
    #[must_use]
    pub const fn new(sport: SportId, scope: LeaderboardScope, requester: Option<Uuid>) -> Self {
        Self {
            sport,
            scope,
            requester,
            cursor: None,
            page_size: None,
        }
    }

    /// Continue from `cursor`
    #[must_use]
    pub fn after(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Request `size` entries per page
    #[must_use]
    pub const fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }
}

/// Requester's own position on the full board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnRank {
    /// 1-based rank
    pub rank: u32,
    /// Ranked score
    pub score: f64,
    /// Number of ranked users in scope
    pub total: usize,
}

/// One page of a ranked board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    /// Entries on this page, best first
    pub entries: Vec<LeaderboardEntry>,
    /// Cursor for the next page
    pub next_cursor: Option<Cursor>,
    /// Requester's rank, if they are on the board
    pub own_rank: Option<OwnRank>,
    /// Number of ranked users in scope
    pub total: usize,
}

/// Leaderboard queries backed by the result store
#[derive(Clone)]
pub struct LeaderboardService {
    results: Arc<dyn ResultStore>,
    directory: UserDirectory,
    page_size: usize,
}

impl LeaderboardService {
    /// Service reading `results` and `directory`
    #[must_use]
    pub fn new(results: Arc<dyn ResultStore>, directory: UserDirectory) -> Self {
        Self {
            results,
            directory,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the default page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Rank the board and return the requested page
    ///
    /// Regional scopes use the requester's district and state. Without a
    /// requester, or for a requester with no region on file, a regional board
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns `SportUnavailable` for a sport that cannot be assessed,
    /// `InvalidInput` for a zero page size, an unknown requester, or a cursor
    /// issued for another board.
    pub async fn query(&self, query: LeaderboardQuery) -> AppResult<LeaderboardPage> {
        let started = Instant::now();
        SportRegistry::global().select(query.sport)?;

        let page_size = match query.page_size.unwrap_or(self.page_size) {
            0 => return Err(AppError::invalid_input("page_size must be greater than 0")),
            size => size.min(MAX_PAGE_SIZE),
        };
        let offset = match &query.cursor {
            Some(cursor) => RankCursor::decode(cursor, query.sport, query.scope)?.offset,
            None => 0,
        };

        let filter = match query.requester {
            Some(user_id) => {
                let profile = self.directory.get(user_id).await?;
                ScopeFilter::for_requester(
                    query.scope,
                    profile.district.as_deref(),
                    profile.state.as_deref(),
                )
            }
            None => ScopeFilter::for_requester(query.scope, None, None),
        };

        let results = self.results.results_for_sport(query.sport).await?;
        let competitors = self.directory.competitors().await;
        let ranked = LeaderboardRanker::rank(query.sport, &results, &competitors, &filter);
        let total = ranked.len();

        let own_rank = query
            .requester
            .and_then(|user_id| rank_of(&ranked, user_id))
            .map(|entry| OwnRank {
                rank: entry.rank,
                score: entry.score,
                total,
            });

        let end = offset.saturating_add(page_size).min(total);
        let entries = ranked.get(offset..end).map(<[_]>::to_vec).unwrap_or_default();
        let next_cursor = (end < total).then(|| {
            RankCursor {
                sport: query.sport,
                scope: query.scope,
                offset: end,
            }
            .encode()
        });

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_leaderboard_query(query.sport, query.scope, entries.len(), elapsed_ms);

        Ok(LeaderboardPage {
            entries,
            next_cursor,
            own_rank,
            total,
        })
    }
}
