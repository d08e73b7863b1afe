// ABOUTME: Presentation view-models for the mobile client
// ABOUTME: UI primitives, sport and result cards, palette, and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presentation
//!
//! Renderers are out of scope; these types carry exactly what a renderer needs
//! so the formatting rules can be tested without a UI.

/// Sport and result cards
pub mod cards;

/// Card, button, badge, and progress bar
pub mod components;

/// Score, ordinal, duration, and color formatting
pub mod format;

/// Shared colors
pub mod palette {
    /// Primary blue
    pub const PRIMARY: &str = "#1E40AF";
    /// Secondary green
    pub const SECONDARY: &str = "#059669";
    /// Plain white
    pub const WHITE: &str = "#FFFFFF";
    /// Borders and empty progress tracks
    pub const BORDER: &str = "#E5E7EB";
    /// Secondary text
    pub const MUTED: &str = "#6B7280";
}

pub use cards::{AchievementChip, ResultCardModel, SportCardModel, ValidationStatus};
pub use components::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, CardVariant, ProgressBar,
};
pub use format::{
    format_estimated_duration, format_percent, format_score, format_score_value, ordinal,
    rank_color, rating_badge_text, rating_badge_variant, rating_color,
};
