// ABOUTME: In-memory directory of user profiles
// ABOUTME: Profile lookup and conversion into leaderboard competitors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use sports_ai_intelligence::Competitor;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;

/// Profiles keyed by user id
#[derive(Clone, Default)]
pub struct UserDirectory {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl UserDirectory {
    /// Empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile
    pub async fn upsert(&self, profile: UserProfile) {
        self.profiles.write().await.insert(profile.id, profile);
    }

    /// Profile of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown user.
    pub async fn get(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.profiles
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::invalid_input(format!("Unknown user {user_id}")))
    }

    /// Number of profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Whether the directory is empty
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    /// Every profile as a ranking competitor
    ///
    /// Missing regions become empty strings, which no regional filter matches.
    pub async fn competitors(&self) -> HashMap<Uuid, Competitor> {
        self.profiles
            .read()
            .await
            .values()
            .map(|profile| {
                (
                    profile.id,
                    Competitor {
                        user_id: profile.id,
                        name: profile.name.clone(),
                        avatar: profile.avatar.clone(),
                        district: profile.district.clone().unwrap_or_default(),
                        state: profile.state.clone().unwrap_or_default(),
                    },
                )
            })
            .collect()
    }
}
