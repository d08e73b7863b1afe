// ABOUTME: Profile screen controller for account details, achievements, and language
// ABOUTME: Supports an editing mode and switches UI language through the shared translator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::ViewState;
use crate::errors::{AppError, AppResult};
use crate::localization::{Language, Translator};
use crate::models::{Achievement, UserProfile};
use crate::store::{ResultStore, UserDirectory};

/// Content of the profile screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    /// Account details
    pub profile: UserProfile,
    /// Translated role name
    pub role_label: String,
    /// "District, State"
    pub location: String,
    /// Earned achievements, oldest first
    pub achievements: Vec<Achievement>,
    /// Countable tests taken
    pub total_tests: usize,
}

/// Editable profile fields; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Full name
    pub name: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// District
    pub district: Option<String>,
    /// State
    pub state: Option<String>,
}

/// Profile tab
pub struct ProfileController {
    directory: UserDirectory,
    results: Arc<dyn ResultStore>,
    translator: Translator,
    user_id: Uuid,
    editing: bool,
    state: ViewState<ProfileView>,
}

impl ProfileController {
    /// Profile of `user_id`
    #[must_use]
    pub fn new(
        directory: UserDirectory,
        results: Arc<dyn ResultStore>,
        translator: Translator,
        user_id: Uuid,
    ) -> Self {
        Self {
            directory,
            results,
            translator,
            user_id,
            editing: false,
            state: ViewState::Loading,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState<ProfileView> {
        &self.state
    }

    /// Whether the edit form is open
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Open or close the edit form without saving
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    /// Current UI language
    #[must_use]
    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Switch the UI language
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedLanguage` and keeps the current language for an
    /// unknown code.
    pub fn change_language(&mut self, code: &str) -> AppResult<()> {
        self.translator.set_language(code)?;
        if let ViewState::Ready(view) = &mut self.state {
            view.role_label = self.translator.t(view.profile.role.translation_key()).to_owned();
        }
        Ok(())
    }

    /// Reload the profile
    pub async fn refresh(&mut self) -> &ViewState<ProfileView> {
        self.state = ViewState::Loading;
        self.state = ViewState::from_result(self.load().await);
        &self.state
    }

    /// Save `update` and close the edit form
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the form is not open or the name is blank.
    pub async fn save(&mut self, update: ProfileUpdate) -> AppResult<()> {
        if !self.editing {
            return Err(AppError::invalid_input("Profile is not being edited"));
        }
        let mut profile = self.directory.get(self.user_id).await?;
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::invalid_input("Name must not be empty"));
            }
            name.clone_into(&mut profile.name);
        }
        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }
        if let Some(district) = update.district {
            profile.district = Some(district);
        }
        if let Some(state) = update.state {
            profile.state = Some(state);
        }
        self.directory.upsert(profile).await;
        self.editing = false;
        info!(user.id = %self.user_id, "Profile updated");
        self.refresh().await;
        Ok(())
    }

    async fn load(&self) -> AppResult<ProfileView> {
        let profile = self.directory.get(self.user_id).await?;
        let results = self.results.results_for(self.user_id).await?;
        let achievements = self.results.achievements_for(self.user_id).await?;

        Ok(ProfileView {
            role_label: self.translator.t(profile.role.translation_key()).to_owned(),
            location: profile.location(),
            achievements,
            total_tests: results.iter().filter(|r| r.is_countable()).count(),
            profile,
        })
    }
}
