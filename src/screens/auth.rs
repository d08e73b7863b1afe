// ABOUTME: Auth screen controller for role selection and sign-in/sign-up mode
// ABOUTME: Authentication itself is out of scope; submitting only validates and navigates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::info;

use super::{Screen, Tab};
use crate::errors::{AppError, AppResult};
use crate::localization::Translator;
use crate::models::UserRole;
use crate::presentation::{Button, ButtonVariant};

/// Whether the form creates an account or signs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Existing account
    #[default]
    SignIn,
    /// New account
    SignUp,
}

/// Role choice shown on the auth screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    /// Role
    pub role: UserRole,
    /// Translated title
    pub title: String,
    /// Short description
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Accent color when selected
    pub color: &'static str,
    /// Whether this role is selected
    pub selected: bool,
}

const ROLES: [(UserRole, &str, &str, &str); 3] = [
    (
        UserRole::Athlete,
        "Track your performance and improve your skills",
        "🏃‍♂️",
        "#1E40AF",
    ),
    (
        UserRole::Coach,
        "Monitor and guide multiple athletes",
        "👨‍🏫",
        "#059669",
    ),
    (
        UserRole::Official,
        "Oversee assessments and manage competitions",
        "👩‍⚖️",
        "#EA580C",
    ),
];

/// Auth screen state
pub struct AuthController {
    translator: Translator,
    mode: AuthMode,
    selected_role: Option<UserRole>,
}

impl AuthController {
    /// Controller rendering through `translator`
    #[must_use]
    pub const fn new(translator: Translator) -> Self {
        Self {
            translator,
            mode: AuthMode::SignIn,
            selected_role: None,
        }
    }

    /// Current form mode
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch between sign-in and sign-up
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    /// Choose a role
    pub fn select_role(&mut self, role: UserRole) {
        self.selected_role = Some(role);
    }

    /// Chosen role
    #[must_use]
    pub const fn selected_role(&self) -> Option<UserRole> {
        self.selected_role
    }

    /// Role choices in display order
    #[must_use]
    pub fn role_options(&self) -> Vec<RoleOption> {
        ROLES
            .iter()
            .map(|&(role, description, icon, color)| RoleOption {
                role,
                title: self.translator.t(role.translation_key()).to_owned(),
                description,
                icon,
                color,
                selected: self.selected_role == Some(role),
            })
            .collect()
    }

    /// Main submit button, disabled until a role is chosen
    #[must_use]
    pub fn submit_button(&self) -> Button {
        let key = match self.mode {
            AuthMode::SignIn => "signIn",
            AuthMode::SignUp => "signUp",
        };
        Button::new(self.translator.t(key)).disabled(self.selected_role.is_none())
    }

    /// Link switching the form mode
    #[must_use]
    pub fn mode_toggle_button(&self) -> Button {
        let title = match self.mode {
            AuthMode::SignIn => "New user? Sign Up",
            AuthMode::SignUp => "Already have an account? Sign In",
        };
        Button::new(title).variant(ButtonVariant::Outline)
    }

    /// Submit the form and return the screen to show next
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no role is selected.
    pub fn submit(&self) -> AppResult<Screen> {
        let role = self
            .selected_role
            .ok_or_else(|| AppError::invalid_input("Please select your role first"))?;
        info!(role = %role, mode = ?self.mode, "Authenticating");
        Ok(Screen::Tabs(Tab::Dashboard))
    }
}
