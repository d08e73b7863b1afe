// ABOUTME: Performance result model produced by a completed assessment attempt
// ABOUTME: Video analysis metrics, benchmark comparison, ratings, cohorts, and ingestion validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Achievement, SportId};
use crate::constants::{assessment, rating};
use crate::errors::{AppError, AppResult};
use crate::registry::SportRegistry;

/// Qualitative bucket derived from a percentile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Bottom of the scale
    NeedsImprovement,
    /// Middle of the population
    Average,
    /// Above most of the population
    Good,
    /// Top of the population
    Excellent,
}

impl Rating {
    /// Bucket a percentile using the given thresholds
    ///
    /// Monotone: a higher percentile never yields a lower rating.
    #[must_use]
    pub const fn from_percentile(percentile: u8, thresholds: &RatingThresholds) -> Self {
        if percentile >= thresholds.excellent {
            Self::Excellent
        } else if percentile >= thresholds.good {
            Self::Good
        } else if percentile >= thresholds.average {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::NeedsImprovement => "needs_improvement",
        }
    }

    /// Human readable label ("needs improvement")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum percentile for each rating bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Lower bound (inclusive) of `Excellent`
    pub excellent: u8,
    /// Lower bound (inclusive) of `Good`
    pub good: u8,
    /// Lower bound (inclusive) of `Average`
    pub average: u8,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            excellent: rating::EXCELLENT_MIN_PERCENTILE,
            good: rating::GOOD_MIN_PERCENTILE,
            average: rating::AVERAGE_MIN_PERCENTILE,
        }
    }
}

impl RatingThresholds {
    /// Check that buckets are strictly ordered and on the percentile scale
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the thresholds overlap or exceed 100.
    pub fn validate(&self) -> AppResult<()> {
        if self.excellent > rating::MAX_PERCENTILE {
            return Err(AppError::config(
                "excellent threshold must be <= 100",
            ));
        }
        if !(self.excellent > self.good && self.good > self.average) {
            return Err(AppError::config(format!(
                "rating thresholds must be strictly descending, got {}/{}/{}",
                self.excellent, self.good, self.average
            )));
        }
        Ok(())
    }
}

/// Age cohort used for benchmarking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgeGroup {
    /// Younger than 14
    #[serde(rename = "under-14")]
    Under14,
    /// 14 to 17
    #[serde(rename = "14-17")]
    Age14To17,
    /// 18 to 25
    #[serde(rename = "18-25")]
    Age18To25,
    /// 26 to 35
    #[serde(rename = "26-35")]
    Age26To35,
    /// 36 to 45
    #[serde(rename = "36-45")]
    Age36To45,
    /// 46 and older
    #[serde(rename = "46+")]
    Age46Plus,
}

impl AgeGroup {
    /// Every cohort, youngest first
    pub const ALL: [Self; 6] = [
        Self::Under14,
        Self::Age14To17,
        Self::Age18To25,
        Self::Age26To35,
        Self::Age36To45,
        Self::Age46Plus,
    ];

    /// Cohort for an age in whole years
    #[must_use]
    pub const fn from_age(years: u32) -> Self {
        match years {
            0..=13 => Self::Under14,
            14..=17 => Self::Age14To17,
            18..=25 => Self::Age18To25,
            26..=35 => Self::Age26To35,
            36..=45 => Self::Age36To45,
            _ => Self::Age46Plus,
        }
    }

    /// Cohort for a birth date evaluated on `on`
    ///
    /// Birth dates in the future are treated as age zero.
    #[must_use]
    pub fn from_birth_date(birth: NaiveDate, on: NaiveDate) -> Self {
        let mut years = on.year() - birth.year();
        if (on.month(), on.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        Self::from_age(u32::try_from(years).unwrap_or(0))
    }

    /// Wire identifier ("18-25")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Under14 => "under-14",
            Self::Age14To17 => "14-17",
            Self::Age18To25 => "18-25",
            Self::Age26To35 => "26-35",
            Self::Age36To45 => "36-45",
            Self::Age46Plus => "46+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown age group '{s}'")))
    }
}

/// Gender category used for benchmarking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GenderCategory {
    /// Male cohort
    Male,
    /// Female cohort
    Female,
    /// Combined cohort
    Other,
}

impl GenderCategory {
    /// Every category
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GenderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender category '{other}'"
            ))),
        }
    }
}

/// Metrics derived from the recorded video
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysis {
    /// Whether the attempt was flagged by cheat detection
    pub cheat_detected: bool,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    /// Technique score in [0, 100]
    #[serde(alias = "technique_score")]
    pub technique_score: u8,
}

/// Comparison of a score against its reference cohort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    /// Age cohort
    pub age_group: AgeGroup,
    /// Gender cohort
    pub gender_category: GenderCategory,
    /// Share of the cohort this score exceeds, 0-100
    pub percentile: u8,
    /// Qualitative bucket of `percentile`
    pub rating: Rating,
}

/// Outcome of one completed assessment attempt
///
/// Created once by the analysis pipeline and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResult {
    /// Unique result identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Assessed sport
    #[serde(alias = "sportType")]
    pub sport_id: SportId,
    /// Raw score in the sport's unit
    pub score: f64,
    /// Unit copied from the sport definition at creation time
    pub unit: String,
    /// Completion time
    pub timestamp: DateTime<Utc>,
    /// Video analysis metrics
    pub video_analysis: VideoAnalysis,
    /// Benchmark comparison
    pub benchmark_comparison: BenchmarkComparison,
    /// Achievements unlocked by this result, in rule order
    #[serde(default)]
    pub achievements_earned: Vec<Achievement>,
}

impl PerformanceResult {
    /// Reject malformed results at the ingestion boundary
    ///
    /// # Errors
    ///
    /// Returns `InvalidResult` naming the first offending field.
    pub fn validate(&self, thresholds: &RatingThresholds) -> AppResult<()> {
        if !self.score.is_finite() || self.score < 0.0 {
            return Err(AppError::invalid_result(
                "score",
                format!("{} is not a non-negative finite number", self.score),
            ));
        }

        let expected_unit = SportRegistry::global().get(self.sport_id).unit;
        if self.unit != expected_unit {
            return Err(AppError::invalid_result(
                "unit",
                format!("expected '{expected_unit}' for {}, got '{}'", self.sport_id, self.unit),
            ));
        }

        let confidence = self.video_analysis.confidence;
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(AppError::invalid_result(
                "videoAnalysis.confidence",
                format!("{confidence} is outside [0, 1]"),
            ));
        }

        if self.video_analysis.technique_score > assessment::MAX_TECHNIQUE_SCORE {
            return Err(AppError::invalid_result(
                "videoAnalysis.techniqueScore",
                format!("{} is outside [0, 100]", self.video_analysis.technique_score),
            ));
        }

        let comparison = &self.benchmark_comparison;
        if comparison.percentile > rating::MAX_PERCENTILE {
            return Err(AppError::invalid_result(
                "benchmarkComparison.percentile",
                format!("{} is outside [0, 100]", comparison.percentile),
            ));
        }

        let expected_rating = Rating::from_percentile(comparison.percentile, thresholds);
        if comparison.rating != expected_rating {
            return Err(AppError::invalid_result(
                "benchmarkComparison.rating",
                format!(
                    "percentile {} maps to '{expected_rating}', got '{}'",
                    comparison.percentile, comparison.rating
                ),
            ));
        }

        Ok(())
    }

    /// Whether this result should count towards rankings and achievements
    #[must_use]
    pub const fn is_countable(&self) -> bool {
        !self.video_analysis.cheat_detected
    }
}
