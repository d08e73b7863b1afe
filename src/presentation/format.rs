// ABOUTME: Display formatting for scores, ordinals, durations, and rating colors
// ABOUTME: Shared by cards, screens, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use super::components::BadgeVariant;
use super::palette;
use crate::models::Rating;

/// Unit whose scores are seconds shown as `m:ss`
pub const TIME_UNIT: &str = "time";

/// Score value without its unit
///
/// Whole numbers print without decimals, fractions with at most two.
/// Scores in the `time` unit are seconds and print as `m:ss`.
#[must_use]
pub fn format_score_value(score: f64, unit: &str) -> String {
    if unit == TIME_UNIT {
        let total = score.max(0.0).round() as u64;
        return format!("{}:{:02}", total / 60, total % 60);
    }
    if score.fract().abs() < f64::EPSILON {
        return format!("{score:.0}");
    }
    let text = format!("{score:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Score with its unit, e.g. `65 cm` or `8:25`
#[must_use]
pub fn format_score(score: f64, unit: &str) -> String {
    let value = format_score_value(score, unit);
    if unit == TIME_UNIT {
        value
    } else {
        format!("{value} {unit}")
    }
}

/// English ordinal, e.g. `1st`, `12th`, `75th`
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Rounded minutes, e.g. `1 min` or `12 mins`
#[must_use]
pub fn format_estimated_duration(duration: Duration) -> String {
    let minutes = ((duration.as_secs() + 30) / 60).max(1);
    if minutes == 1 {
        "1 min".to_owned()
    } else {
        format!("{minutes} mins")
    }
}

/// Fraction in [0, 1] as a whole percentage, e.g. `87%`
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", (fraction.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// Accent color of a rating
#[must_use]
pub const fn rating_color(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => palette::SECONDARY,
        Rating::Good => palette::PRIMARY,
        Rating::Average => "#EA580C",
        Rating::NeedsImprovement => "#DC2626",
    }
}

/// Badge scheme of a rating
#[must_use]
pub const fn rating_badge_variant(rating: Rating) -> BadgeVariant {
    match rating {
        Rating::Excellent => BadgeVariant::Success,
        Rating::Good => BadgeVariant::Info,
        Rating::Average => BadgeVariant::Warning,
        Rating::NeedsImprovement => BadgeVariant::Error,
    }
}

/// Rating badge text, e.g. `needs improvement`
#[must_use]
pub fn rating_badge_text(rating: Rating) -> String {
    rating.as_str().replace('_', " ")
}

/// Color of a leaderboard rank: gold, silver, bronze, then gray
#[must_use]
pub const fn rank_color(rank: u32) -> &'static str {
    match rank {
        1 => "#FFD700",
        2 => "#C0C0C0",
        3 => "#CD7F32",
        _ => palette::MUTED,
    }
}
