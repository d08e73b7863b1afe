// ABOUTME: Leaderboard screen controller with sport and scope selection
// ABOUTME: Loads ranked pages, builds the podium, and reports the requester's own rank
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use sports_ai_intelligence::medal;
use uuid::Uuid;

use super::ViewState;
use crate::constants::leaderboard::PODIUM_SIZE;
use crate::errors::AppResult;
use crate::models::{LeaderboardEntry, LeaderboardScope, SportId};
use crate::pagination::Cursor;
use crate::presentation::{format_score, rank_color};
use crate::registry::SportRegistry;
use crate::store::{LeaderboardQuery, LeaderboardService, OwnRank};

/// Podium slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    /// Ranked entry
    pub entry: LeaderboardEntry,
    /// Medal glyph
    pub medal: &'static str,
    /// Rank color
    pub color: &'static str,
    /// Score with unit
    pub score_text: String,
}

/// Content of the leaderboard screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    /// Shown sport
    pub sport: SportId,
    /// Shown scope
    pub scope: LeaderboardScope,
    /// Top three
    pub podium: Vec<PodiumEntry>,
    /// Every loaded entry, best first
    pub entries: Vec<LeaderboardEntry>,
    /// Requester's rank
    pub own_rank: Option<OwnRank>,
    /// Ranked users in scope
    pub total: usize,
    /// Cursor for loading more entries
    pub next_cursor: Option<Cursor>,
}

/// Leaderboard tab
pub struct LeaderboardController {
    service: LeaderboardService,
    requester: Option<Uuid>,
    sport: SportId,
    scope: LeaderboardScope,
    state: ViewState<LeaderboardView>,
}

impl LeaderboardController {
    /// National vertical jump board seen by `requester`
    #[must_use]
    pub const fn new(service: LeaderboardService, requester: Option<Uuid>) -> Self {
        Self {
            service,
            requester,
            sport: SportId::VerticalJump,
            scope: LeaderboardScope::National,
            state: ViewState::Loading,
        }
    }

    /// Shown sport
    #[must_use]
    pub const fn sport(&self) -> SportId {
        self.sport
    }

    /// Shown scope
    #[must_use]
    pub const fn scope(&self) -> LeaderboardScope {
        self.scope
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<LeaderboardView> {
        &self.state
    }

    /// Switch sport; takes effect on the next refresh
    ///
    /// # Errors
    ///
    /// Returns `SportUnavailable` for a sport that cannot be assessed.
    pub fn select_sport(&mut self, sport: SportId) -> AppResult<()> {
        SportRegistry::global().select(sport)?;
        if self.sport != sport {
            self.sport = sport;
            self.state = ViewState::Loading;
        }
        Ok(())
    }

    /// Switch scope; takes effect on the next refresh
    pub fn select_scope(&mut self, scope: LeaderboardScope) {
        if self.scope != scope {
            self.scope = scope;
            self.state = ViewState::Loading;
        }
    }

    /// Load the first page of the current board
    pub async fn refresh(&mut self) -> &ViewState<LeaderboardView> {
        self.state = ViewState::Loading;
        let query = LeaderboardQuery::new(self.sport, self.scope, self.requester);
        self.state = ViewState::from_result(self.load(query, Vec::new()).await);
        &self.state
    }

    /// Append the next page, if any
    ///
    /// Does nothing unless a loaded board has more entries.
    pub async fn load_more(&mut self) -> &ViewState<LeaderboardView> {
        let Some(view) = self.state.ready() else {
            return &self.state;
        };
        let Some(cursor) = view.next_cursor.clone() else {
            return &self.state;
        };
        let loaded = view.entries.clone();
        let query = LeaderboardQuery::new(self.sport, self.scope, self.requester).after(cursor);
        self.state = ViewState::from_result(self.load(query, loaded).await);
        &self.state
    }

    async fn load(
        &self,
        query: LeaderboardQuery,
        mut entries: Vec<LeaderboardEntry>,
    ) -> AppResult<LeaderboardView> {
        let page = self.service.query(query).await?;
        entries.extend(page.entries);

        let unit = SportRegistry::global().get(self.sport).unit;
        let podium = entries
            .iter()
            .take_while(|entry| entry.rank <= PODIUM_SIZE)
            .filter_map(|entry| {
                medal(entry.rank).map(|glyph| PodiumEntry {
                    entry: entry.clone(),
                    medal: glyph,
                    color: rank_color(entry.rank),
                    score_text: format_score(entry.score, unit),
                })
            })
            .collect();

        Ok(LeaderboardView {
            sport: self.sport,
            scope: self.scope,
            podium,
            entries,
            own_rank: page.own_rank,
            total: page.total,
            next_cursor: page.next_cursor,
        })
    }
}
