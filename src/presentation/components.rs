// ABOUTME: View-models for the shared UI primitives
// ABOUTME: Card, Button, Badge, and ProgressBar reduced to the data a renderer needs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::palette;

/// Card surface style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    /// Flat white card
    #[default]
    Default,
    /// Card with drop shadow
    Elevated,
    /// Card with a light border
    Outlined,
}

impl CardVariant {
    /// Border color, if the variant draws one
    #[must_use]
    pub const fn border_color(self) -> Option<&'static str> {
        match self {
            Self::Outlined => Some(palette::BORDER),
            Self::Default | Self::Elevated => None,
        }
    }

    /// Shadow elevation
    #[must_use]
    pub const fn elevation(self) -> u8 {
        match self {
            Self::Elevated => 4,
            Self::Default | Self::Outlined => 0,
        }
    }
}

/// Button fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid primary blue
    #[default]
    Primary,
    /// Solid green
    Secondary,
    /// Transparent with a blue border
    Outline,
}

impl ButtonVariant {
    /// Background color; `None` is transparent
    #[must_use]
    pub const fn background(self) -> Option<&'static str> {
        match self {
            Self::Primary => Some(palette::PRIMARY),
            Self::Secondary => Some(palette::SECONDARY),
            Self::Outline => None,
        }
    }

    /// Label color
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Primary | Self::Secondary => palette::WHITE,
            Self::Outline => palette::PRIMARY,
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact
    Small,
    /// Standard
    #[default]
    Medium,
    /// Call to action
    Large,
}

impl ButtonSize {
    /// Minimum touch height in points
    #[must_use]
    pub const fn min_height(self) -> u8 {
        match self {
            Self::Small => 36,
            Self::Medium => 48,
            Self::Large => 56,
        }
    }

    /// Label font size in points
    #[must_use]
    pub const fn font_size(self) -> u8 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }
}

/// Pressable button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Label
    pub title: String,
    /// Fill style
    pub variant: ButtonVariant,
    /// Size
    pub size: ButtonSize,
    /// Whether presses are ignored
    pub disabled: bool,
    /// Whether an operation started by this button is running
    pub loading: bool,
}

impl Button {
    /// Enabled medium primary button
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
        }
    }

    /// Set the fill style
    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the size
    #[must_use]
    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the disabled flag
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the loading flag
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Whether a press should trigger the action
    #[must_use]
    pub const fn is_pressable(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Rendered opacity
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.is_pressable() {
            1.0
        } else {
            0.5
        }
    }
}

/// Badge color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Green
    Success,
    /// Amber
    Warning,
    /// Red
    Error,
    /// Blue
    Info,
    /// Gray
    #[default]
    Neutral,
}

impl BadgeVariant {
    /// Background color
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => "#D1FAE5",
            Self::Warning => "#FEF3C7",
            Self::Error => "#FEE2E2",
            Self::Info => "#DBEAFE",
            Self::Neutral => "#F3F4F6",
        }
    }

    /// Text color
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Success => "#065F46",
            Self::Warning => "#92400E",
            Self::Error => "#991B1B",
            Self::Info => "#1E3A8A",
            Self::Neutral => "#374151",
        }
    }
}

/// Badge size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    /// Small
    Small,
    /// Medium
    #[default]
    Medium,
}

/// Short status label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Label
    pub text: String,
    /// Color scheme
    pub variant: BadgeVariant,
    /// Size
    pub size: BadgeSize,
}

impl Badge {
    /// Medium badge
    #[must_use]
    pub fn new(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            variant,
            size: BadgeSize::Medium,
        }
    }

    /// Small badge
    #[must_use]
    pub fn small(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            size: BadgeSize::Small,
            ..Self::new(text, variant)
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Horizontal progress indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    /// Fill fraction, always within [0, 1]
    progress: f64,
    /// Fill color
    pub color: String,
    /// Track color
    pub track_color: String,
    /// Whether to render a label above the bar
    pub show_label: bool,
    /// Label override
    pub label: Option<String>,
}

impl ProgressBar {
    /// Bar filled to `progress`, clamped to [0, 1]; NaN counts as empty
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self {
            progress: if progress.is_nan() {
                0.0
            } else {
                progress.clamp(0.0, 1.0)
            },
            color: palette::PRIMARY.to_owned(),
            track_color: palette::BORDER.to_owned(),
            show_label: false,
            label: None,
        }
    }

    /// Set the fill color
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Show the default percentage label
    #[must_use]
    pub const fn with_label(mut self) -> Self {
        self.show_label = true;
        self
    }

    /// Show `label` instead of the percentage
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.show_label = true;
        self.label = Some(label.into());
        self
    }

    /// Fill fraction in [0, 1]
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Fill width as a percentage of the track
    #[must_use]
    pub fn fill_percent(&self) -> f64 {
        self.progress * 100.0
    }

    /// Rendered label, if shown
    #[must_use]
    pub fn label_text(&self) -> Option<String> {
        if !self.show_label {
            return None;
        }
        Some(
            self.label
                .clone()
                .unwrap_or_else(|| format!("{}%", (self.progress * 100.0).round() as u32)),
        )
    }
}
