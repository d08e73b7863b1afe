// ABOUTME: Screen controllers and navigation surface of the mobile client
// ABOUTME: Tagged view state, error view, tabs, and one controller per screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Screens
//!
//! Each controller owns the local state of one screen and exposes what the
//! screen renders as a [`ViewState`]. Loads never panic or leave stale data
//! behind: a failure becomes `ViewState::Failed` with a retry hint.

/// Role selection and sign-in
pub mod auth;

/// Home tab statistics
pub mod dashboard;

/// Ranked boards
pub mod leaderboard;

/// Profile, achievements, and language
pub mod profile;

/// Results history and statistics
pub mod progress;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, ErrorCode};
pub use crate::assessment::AssessmentController;
pub use auth::{AuthController, AuthMode, RoleOption};
pub use dashboard::{DashboardController, DashboardStats, QuickStat};
pub use leaderboard::{LeaderboardController, LeaderboardView, PodiumEntry};
pub use profile::{ProfileController, ProfileUpdate, ProfileView};
pub use progress::{ProgressController, ProgressView};

/// Error as shown on a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorView {
    /// Error code
    pub code: ErrorCode,
    /// Message for the user
    pub message: String,
    /// Whether to show a retry action
    pub retryable: bool,
}

impl From<&AppError> for ErrorView {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            retryable: err.is_recoverable(),
        }
    }
}

impl From<AppError> for ErrorView {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Content of a screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    /// Waiting for data
    #[default]
    Loading,
    /// Load failed
    Failed(ErrorView),
    /// Data ready to render
    Ready(T),
}

impl<T> ViewState<T> {
    /// State for the outcome of a load
    #[must_use]
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(ErrorView::from(&err)),
        }
    }

    /// Ready data, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Error, if the load failed
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorView> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    /// Whether data is ready
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Whether a load is pending
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Bottom navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Home
    #[default]
    Dashboard,
    /// Sport selection and testing
    Assessment,
    /// Results history
    Progress,
    /// Rankings
    Leaderboard,
    /// Account
    Profile,
}

impl Tab {
    /// Tabs in bar order
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Assessment,
        Self::Progress,
        Self::Leaderboard,
        Self::Profile,
    ];

    /// Route name
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Dashboard => "index",
            Self::Assessment => "assessment",
            Self::Progress => "progress",
            Self::Leaderboard => "leaderboard",
            Self::Profile => "profile",
        }
    }

    /// Tab bar title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Assessment => "Assessment",
            Self::Progress => "Progress",
            Self::Leaderboard => "Leaderboard",
            Self::Profile => "Profile",
        }
    }

    /// Localization key of the screen heading
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Assessment => "takeTest",
            Self::Progress => "myProgress",
            Self::Leaderboard => "leaderboard",
            Self::Profile => "profile",
        }
    }
}

/// Top-level destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "screen", content = "tab")]
pub enum Screen {
    /// Entry screen before sign-in
    #[default]
    Auth,
    /// Main tabbed interface
    Tabs(Tab),
}
