// ABOUTME: Leaderboard ranking for one sport within a geographic scope
// ABOUTME: Latest result per user, direction-aware ordering, deterministic tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sports_ai_core::constants::leaderboard::PODIUM_SIZE;
use sports_ai_core::models::{
    LeaderboardEntry, LeaderboardScope, LeaderboardUser, PerformanceResult, SportId,
};
use sports_ai_core::registry::SportRegistry;
use tracing::debug;
use uuid::Uuid;

/// Directory record for a ranked user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// User identifier
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Avatar URL
    pub avatar: Option<String>,
    /// District of residence
    pub district: String,
    /// State of residence
    pub state: String,
}

/// Scope restricted to the requesting user's region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeFilter {
    /// Requested scope
    pub scope: LeaderboardScope,
    /// Requester's district, required for `District`
    pub district: Option<String>,
    /// Requester's state, required for `District` and `State`
    pub state: Option<String>,
}

impl ScopeFilter {
    /// Whole country
    #[must_use]
    pub const fn national() -> Self {
        Self {
            scope: LeaderboardScope::National,
            district: None,
            state: None,
        }
    }

    /// Filter for `scope` around a requester living in `district`, `state`
    #[must_use]
    pub fn for_requester(
        scope: LeaderboardScope,
        district: Option<&str>,
        state: Option<&str>,
    ) -> Self {
        Self {
            scope,
            district: district.map(str::to_owned),
            state: state.map(str::to_owned),
        }
    }

    /// Whether `competitor` is ranked under this filter
    ///
    /// A regional scope without a known requester region includes nobody.
    #[must_use]
    pub fn includes(&self, competitor: &Competitor) -> bool {
        match self.scope {
            LeaderboardScope::National => true,
            LeaderboardScope::State => self.state.as_deref() == Some(competitor.state.as_str()),
            LeaderboardScope::District => {
                self.state.as_deref() == Some(competitor.state.as_str())
                    && self.district.as_deref() == Some(competitor.district.as_str())
            }
        }
    }
}

/// Ranking engine
pub struct LeaderboardRanker;

impl LeaderboardRanker {
    /// Rank users for `sport` within `filter`
    ///
    /// Only the latest countable result of each user in `directory` is ranked.
    /// Entries are ordered best first with ties broken by the earlier result
    /// timestamp and then by user id, so ranks are a strict sequence `1..=n`.
    #[must_use]
    pub fn rank(
        sport: SportId,
        results: &[PerformanceResult],
        directory: &HashMap<Uuid, Competitor>,
        filter: &ScopeFilter,
    ) -> Vec<LeaderboardEntry> {
        let direction = SportRegistry::global().get(sport).better_direction;

        let mut latest: HashMap<Uuid, (&PerformanceResult, &Competitor)> = HashMap::new();
        for result in results
            .iter()
            .filter(|r| r.sport_id == sport && r.is_countable())
        {
            let Some(competitor) = directory.get(&result.user_id) else {
                continue;
            };
            if !filter.includes(competitor) {
                continue;
            }
            latest
                .entry(result.user_id)
                .and_modify(|current| {
                    if (result.timestamp, result.id) > (current.0.timestamp, current.0.id) {
                        *current = (result, competitor);
                    }
                })
                .or_insert((result, competitor));
        }

        let mut ranked: Vec<(&PerformanceResult, &Competitor)> = latest.into_values().collect();
        ranked.sort_by(|(a, _), (b, _)| {
            direction
                .compare(a.score, b.score)
                .then_with(|| a.timestamp.cmp(&b.timestamp))
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        debug!(sport = %sport, scope = %filter.scope, entries = ranked.len(), "Ranked leaderboard");

        ranked
            .into_iter()
            .enumerate()
            .map(|(index, (result, competitor))| LeaderboardEntry {
                rank: u32::try_from(index + 1).unwrap_or(u32::MAX),
                user_id: result.user_id,
                user: LeaderboardUser {
                    name: competitor.name.clone(),
                    avatar: competitor.avatar.clone(),
                },
                score: result.score,
                district: competitor.district.clone(),
                state: competitor.state.clone(),
            })
            .collect()
    }
}

/// Entry of `user_id` in a ranked board
#[must_use]
pub fn rank_of(entries: &[LeaderboardEntry], user_id: Uuid) -> Option<&LeaderboardEntry> {
    entries.iter().find(|entry| entry.user_id == user_id)
}

/// Podium medal for ranks 1 to 3
#[must_use]
pub const fn medal(rank: u32) -> Option<&'static str> {
    if rank == 0 || rank > PODIUM_SIZE {
        return None;
    }
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        _ => Some("🥉"),
    }
}
