// ABOUTME: Card view-models for sports and performance results
// ABOUTME: Derive every displayed string and color from registry and result data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::components::{Badge, BadgeVariant, CardVariant, ProgressBar};
use super::format::{
    format_estimated_duration, format_percent, format_score_value, ordinal, rating_badge_text,
    rating_badge_variant, rating_color,
};
use crate::models::{PerformanceResult, SportDefinition, SportId};
use crate::registry::SportRegistry;

/// Sport tile on the assessment screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportCardModel {
    /// Sport
    pub sport: SportId,
    /// Display name
    pub name: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Short description
    pub description: &'static str,
    /// Accent color
    pub color: &'static str,
    /// e.g. `2 mins`
    pub estimated_time: String,
    /// e.g. `Measured in cm`
    pub unit_label: String,
    /// `Coming Soon` for sports not open yet
    pub badge: Option<Badge>,
    /// Whether the tile ignores presses
    pub disabled: bool,
    /// Card surface
    pub variant: CardVariant,
}

impl SportCardModel {
    /// Tile for `sport`; `disabled` greys out an otherwise available sport
    #[must_use]
    pub fn new(sport: &SportDefinition, disabled: bool) -> Self {
        Self {
            sport: sport.id,
            name: sport.name,
            icon: sport.icon,
            description: sport.description,
            color: sport.color,
            estimated_time: format_estimated_duration(sport.estimated_duration),
            unit_label: format!("Measured in {}", sport.unit),
            badge: (!sport.available).then(|| Badge::small("Coming Soon", BadgeVariant::Warning)),
            disabled: disabled || !sport.available,
            variant: CardVariant::Elevated,
        }
    }

    /// Tiles for every registered sport in registry order
    #[must_use]
    pub fn all() -> Vec<Self> {
        SportRegistry::global()
            .all()
            .map(|sport| Self::new(sport, false))
            .collect()
    }
}

/// Result of the cheat check as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Attempt accepted
    Valid,
    /// Attempt flagged by cheat detection
    Flagged,
}

impl ValidationStatus {
    /// Banner text
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Valid => "✅ Valid Performance",
            Self::Flagged => "⚠️ Technique Issues Detected",
        }
    }
}

/// Achievement chip shown on a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementChip {
    /// Icon glyph
    pub icon: String,
    /// Title
    pub title: String,
}

/// Card summarizing one performance result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCardModel {
    /// Sport display name
    pub sport_name: &'static str,
    /// Sport icon
    pub sport_icon: &'static str,
    /// Sport accent color
    pub sport_color: &'static str,
    /// Completion date, `M/D/YYYY`
    pub date: String,
    /// Rating badge
    pub rating_badge: Badge,
    /// Score without unit
    pub score: String,
    /// Unit label
    pub unit: &'static str,
    /// e.g. `75th`
    pub percentile: String,
    /// Color of the percentile text
    pub percentile_color: &'static str,
    /// Technique score bar
    pub technique: ProgressBar,
    /// e.g. `87%`
    pub confidence: String,
    /// Cheat check banner
    pub validation: ValidationStatus,
    /// Achievements unlocked by this result
    pub achievements: Vec<AchievementChip>,
}

impl ResultCardModel {
    /// Card for `result`
    #[must_use]
    pub fn new(result: &PerformanceResult) -> Self {
        let sport = SportRegistry::global().get(result.sport_id);
        let comparison = &result.benchmark_comparison;
        let accent = rating_color(comparison.rating);
        let technique = result.video_analysis.technique_score;

        Self {
            sport_name: sport.name,
            sport_icon: sport.icon,
            sport_color: sport.color,
            date: result.timestamp.format("%-m/%-d/%Y").to_string(),
            rating_badge: Badge::new(
                rating_badge_text(comparison.rating),
                rating_badge_variant(comparison.rating),
            ),
            score: format_score_value(result.score, sport.unit),
            unit: sport.unit,
            percentile: ordinal(u32::from(comparison.percentile)),
            percentile_color: accent,
            technique: ProgressBar::new(f64::from(technique) / 100.0)
                .color(accent)
                .labeled(format!("{technique}%")),
            confidence: format_percent(result.video_analysis.confidence),
            validation: if result.video_analysis.cheat_detected {
                ValidationStatus::Flagged
            } else {
                ValidationStatus::Valid
            },
            achievements: result
                .achievements_earned
                .iter()
                .map(|a| AchievementChip {
                    icon: a.icon.clone(),
                    title: a.title.clone(),
                })
                .collect(),
        }
    }
}
