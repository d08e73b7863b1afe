// ABOUTME: Cursor-based pagination for leaderboard queries
// ABOUTME: Provides opaque cursor encoding bound to the sport and scope it was issued for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{LeaderboardScope, SportId};

/// Opaque pagination cursor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Encoded form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a cursor received from a client
    #[must_use]
    pub const fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position inside one ranked leaderboard
///
/// Encoded as Base64(`sport|scope|offset`). The sport and scope are checked on
/// decode so a cursor cannot be replayed against a different board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCursor {
    /// Sport the board ranks
    pub sport: SportId,
    /// Scope the board was filtered to
    pub scope: LeaderboardScope,
    /// Number of entries already returned
    pub offset: usize,
}

impl RankCursor {
    /// Encode for transmission
    #[must_use]
    pub fn encode(&self) -> Cursor {
        let data = format!("{}|{}|{}", self.sport, self.scope, self.offset);
        Cursor(URL_SAFE_NO_PAD.encode(data.as_bytes()))
    }

    /// Decode a cursor issued for `sport` and `scope`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the cursor is malformed or was issued for
    /// another board.
    pub fn decode(cursor: &Cursor, sport: SportId, scope: LeaderboardScope) -> AppResult<Self> {
        let malformed = || AppError::invalid_input("Malformed leaderboard cursor");

        let bytes = URL_SAFE_NO_PAD
            .decode(cursor.as_str())
            .map_err(|_| malformed())?;
        let text = String::from_utf8(bytes).map_err(|_| malformed())?;

        let mut parts = text.splitn(3, '|');
        let (Some(sport_str), Some(scope_str), Some(offset_str)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let decoded = Self {
            sport: sport_str.parse().map_err(|_| malformed())?,
            scope: scope_str.parse().map_err(|_| malformed())?,
            offset: offset_str.parse().map_err(|_| malformed())?,
        };

        if decoded.sport != sport || decoded.scope != scope {
            return Err(AppError::invalid_input(
                "Leaderboard cursor was issued for a different sport or scope",
            ));
        }
        Ok(decoded)
    }
}
