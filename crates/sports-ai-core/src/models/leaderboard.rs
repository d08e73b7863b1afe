// ABOUTME: Leaderboard entry and scope types for ranked sport results
// ABOUTME: Entries carry a rank that is unique within one query scope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Geographic aggregation level of a leaderboard query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardScope {
    /// Same district as the requesting user
    District,
    /// Same state as the requesting user
    State,
    /// Everyone
    #[default]
    National,
}

impl LeaderboardScope {
    /// Every scope in UI order
    pub const ALL: [Self; 3] = [Self::District, Self::State, Self::National];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::District => "district",
            Self::State => "state",
            Self::National => "national",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::District => "District",
            Self::State => "State",
            Self::National => "National",
        }
    }
}

impl fmt::Display for LeaderboardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "district" => Ok(Self::District),
            "state" => Ok(Self::State),
            "national" => Ok(Self::National),
            other => Err(AppError::invalid_input(format!(
                "Unknown leaderboard scope '{other}'"
            ))),
        }
    }
}

/// Public identity shown on a leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardUser {
    /// Display name
    pub name: String,
    /// Optional avatar (emoji or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// One ranked row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based rank, unique within the scope
    pub rank: u32,
    /// Ranked user
    pub user_id: Uuid,
    /// Display identity
    pub user: LeaderboardUser,
    /// Ranked score in the sport's unit
    pub score: f64,
    /// User's district
    pub district: String,
    /// User's state
    pub state: String,
}
