// ABOUTME: Benchmark evaluator mapping raw scores to cohort percentiles and ratings
// ABOUTME: Piecewise-linear reference distributions per sport, age group, and gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sports_ai_core::constants::rating::MAX_PERCENTILE;
use sports_ai_core::errors::{AppError, AppResult};
use sports_ai_core::models::{
    AgeGroup, BenchmarkComparison, BetterDirection, GenderCategory, Rating, RatingThresholds,
    SportId,
};
use sports_ai_core::registry::SportRegistry;
use thiserror::Error;
use tracing::{debug, error};

/// Reasons a reference distribution is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Fewer than two anchors cannot be interpolated
    #[error("a reference distribution needs at least 2 anchors, got {0}")]
    TooFewAnchors(usize),
    /// Anchor score is NaN or infinite
    #[error("anchor {index} has a non-finite score")]
    NonFiniteScore {
        /// Position of the offending anchor
        index: usize,
    },
    /// Scores must be strictly ascending
    #[error("anchor scores must be strictly ascending (anchor {index})")]
    UnsortedScores {
        /// Position of the offending anchor
        index: usize,
    },
    /// Percentile outside [0, 100]
    #[error("anchor {index} percentile {percentile} exceeds 100")]
    PercentileOutOfRange {
        /// Position of the offending anchor
        index: usize,
        /// Offending value
        percentile: u8,
    },
    /// Percentiles must move with the scoring direction
    #[error("anchor {index} percentile breaks monotonicity for {direction:?} scoring")]
    NonMonotonic {
        /// Position of the offending anchor
        index: usize,
        /// Direction the distribution was declared with
        direction: BetterDirection,
    },
}

impl From<DistributionError> for AppError {
    fn from(err: DistributionError) -> Self {
        Self::benchmark_unavailable(err.to_string()).with_source(err)
    }
}

/// Cohort reference curve as `(score, percentile)` anchors
///
/// Anchors are sorted by ascending score. For `Higher` sports the percentile is
/// non-decreasing along the anchors, for `Lower` sports it is non-increasing,
/// so interpolation is monotone in the better direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDistribution {
    direction: BetterDirection,
    anchors: Vec<(f64, u8)>,
}

impl ReferenceDistribution {
    /// Build a validated distribution
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError`] when the anchors are too few, unsorted,
    /// off-scale, or not monotone for `direction`.
    pub fn new(
        direction: BetterDirection,
        anchors: Vec<(f64, u8)>,
    ) -> Result<Self, DistributionError> {
        if anchors.len() < 2 {
            return Err(DistributionError::TooFewAnchors(anchors.len()));
        }

        for (index, &(score, percentile)) in anchors.iter().enumerate() {
            if !score.is_finite() {
                return Err(DistributionError::NonFiniteScore { index });
            }
            if percentile > MAX_PERCENTILE {
                return Err(DistributionError::PercentileOutOfRange { index, percentile });
            }
            let Some(&(prev_score, prev_percentile)) = index.checked_sub(1).map(|i| &anchors[i])
            else {
                continue;
            };
            if score <= prev_score {
                return Err(DistributionError::UnsortedScores { index });
            }
            let monotone = match direction {
                BetterDirection::Higher => percentile >= prev_percentile,
                BetterDirection::Lower => percentile <= prev_percentile,
            };
            if !monotone {
                return Err(DistributionError::NonMonotonic { index, direction });
            }
        }

        Ok(Self { direction, anchors })
    }

    /// Scoring direction of the curve
    #[must_use]
    pub const fn direction(&self) -> BetterDirection {
        self.direction
    }

    /// Anchor points in ascending score order
    #[must_use]
    pub fn anchors(&self) -> &[(f64, u8)] {
        &self.anchors
    }

    /// Percentile of `score`, linearly interpolated between anchors
    ///
    /// Scores beyond either end anchor take that anchor's percentile.
    #[must_use]
    pub fn percentile_for(&self, score: f64) -> u8 {
        let (first, last) = match (self.anchors.first(), self.anchors.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0,
        };
        if score <= first.0 {
            return first.1;
        }
        if score >= last.0 {
            return last.1;
        }

        let interpolated = self
            .anchors
            .windows(2)
            .find(|pair| score <= pair[1].0)
            .map_or(f64::from(last.1), |pair| {
                let (low_score, low_pct) = pair[0];
                let (high_score, high_pct) = pair[1];
                let t = (score - low_score) / (high_score - low_score);
                (f64::from(high_pct) - f64::from(low_pct)).mul_add(t, f64::from(low_pct))
            });

        // Clamped to the percentile scale before narrowing
        interpolated
            .round()
            .clamp(0.0, f64::from(MAX_PERCENTILE)) as u8
    }

    /// Same curve with every anchor score shifted by a cohort factor
    ///
    /// A factor below 1.0 describes a cohort that reaches each percentile with a
    /// weaker raw score: lower heights or counts for `Higher` sports, slower
    /// times for `Lower` sports.
    #[must_use]
    fn scaled(&self, factor: f64) -> Self {
        let anchors = self
            .anchors
            .iter()
            .map(|&(score, percentile)| {
                let shifted = match self.direction {
                    BetterDirection::Higher => score * factor,
                    BetterDirection::Lower => score / factor,
                };
                (shifted, percentile)
            })
            .collect();
        Self {
            direction: self.direction,
            anchors,
        }
    }
}

/// Injected source of cohort reference distributions
pub trait BenchmarkTable: Send + Sync {
    /// Reference curve for one cohort, if known
    fn reference(
        &self,
        sport: SportId,
        age_group: AgeGroup,
        gender: GenderCategory,
    ) -> Option<&ReferenceDistribution>;
}

/// Adult male reference anchors per sport
///
/// Placeholder population data; the anchors are calibrated so the sample
/// history reproduces its recorded percentiles (65 cm vertical jump at the
/// 75th percentile).
fn base_curve(sport: SportId) -> Vec<(f64, u8)> {
    match sport {
        SportId::VerticalJump => vec![
            (20.0, 1),
            (35.0, 15),
            (45.0, 35),
            (55.0, 55),
            (65.0, 75),
            (75.0, 90),
            (85.0, 99),
        ],
        SportId::ShuttleRun => vec![
            (9.5, 99),
            (10.5, 90),
            (11.5, 75),
            (12.5, 50),
            (13.5, 30),
            (15.0, 10),
            (18.0, 1),
        ],
        SportId::Situps => vec![
            (10.0, 1),
            (20.0, 10),
            (30.0, 30),
            (40.0, 55),
            (50.0, 80),
            (60.0, 95),
            (70.0, 99),
        ],
        // Seconds over the endurance distance
        SportId::EnduranceRun => vec![
            (360.0, 99),
            (420.0, 90),
            (480.0, 75),
            (540.0, 55),
            (600.0, 35),
            (720.0, 10),
            (900.0, 1),
        ],
        SportId::Shotput => vec![
            (4.0, 1),
            (6.0, 10),
            (8.0, 35),
            (10.0, 60),
            (12.0, 85),
            (14.0, 97),
            (16.0, 99),
        ],
    }
}

const fn age_factor(age_group: AgeGroup) -> f64 {
    match age_group {
        AgeGroup::Under14 => 0.75,
        AgeGroup::Age14To17 => 0.9,
        AgeGroup::Age18To25 => 1.0,
        AgeGroup::Age26To35 => 0.97,
        AgeGroup::Age36To45 => 0.9,
        AgeGroup::Age46Plus => 0.8,
    }
}

const fn gender_factor(gender: GenderCategory) -> f64 {
    match gender {
        GenderCategory::Male => 1.0,
        GenderCategory::Female => 0.82,
        GenderCategory::Other => 0.91,
    }
}

/// In-memory benchmark table keyed by cohort
#[derive(Debug, Clone, Default)]
pub struct StaticBenchmarkTable {
    distributions: HashMap<(SportId, AgeGroup, GenderCategory), ReferenceDistribution>,
}

impl StaticBenchmarkTable {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering every sport, age group, and gender combination
    #[must_use]
    pub fn seeded() -> Self {
        let mut table = Self::new();
        let registry = SportRegistry::global();

        for sport in registry.all() {
            let base = match ReferenceDistribution::new(sport.better_direction, base_curve(sport.id))
            {
                Ok(base) => base,
                Err(e) => {
                    error!(sport = %sport.id, error = %e, "Invalid base benchmark curve");
                    continue;
                }
            };
            for age_group in AgeGroup::ALL {
                for gender in GenderCategory::ALL {
                    let factor = age_factor(age_group) * gender_factor(gender);
                    table.insert(sport.id, age_group, gender, base.scaled(factor));
                }
            }
        }

        debug!(cohorts = table.len(), "Seeded benchmark table");
        table
    }

    /// Add or replace the curve for one cohort
    pub fn insert(
        &mut self,
        sport: SportId,
        age_group: AgeGroup,
        gender: GenderCategory,
        distribution: ReferenceDistribution,
    ) {
        self.distributions
            .insert((sport, age_group, gender), distribution);
    }

    /// Number of cohorts with a curve
    #[must_use]
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    /// Whether the table has no curves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

impl BenchmarkTable for StaticBenchmarkTable {
    fn reference(
        &self,
        sport: SportId,
        age_group: AgeGroup,
        gender: GenderCategory,
    ) -> Option<&ReferenceDistribution> {
        self.distributions.get(&(sport, age_group, gender))
    }
}

/// Percentile and rating for one score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Share of the cohort the score beats, 0-100
    pub percentile: u8,
    /// Rating bucket of `percentile`
    pub rating: Rating,
}

/// Maps raw scores to percentiles and ratings
///
/// Pure and deterministic: the same inputs always produce the same benchmark.
#[derive(Debug, Clone)]
pub struct BenchmarkEvaluator<T = StaticBenchmarkTable> {
    table: T,
    thresholds: RatingThresholds,
}

impl BenchmarkEvaluator<StaticBenchmarkTable> {
    /// Evaluator over the seeded table with default thresholds
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(StaticBenchmarkTable::seeded(), RatingThresholds::default())
    }
}

impl<T: BenchmarkTable> BenchmarkEvaluator<T> {
    /// Create an evaluator over `table`
    #[must_use]
    pub const fn new(table: T, thresholds: RatingThresholds) -> Self {
        Self { table, thresholds }
    }

    /// Rating thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }

    /// Percentile and rating of `score` within its cohort
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-finite score and `BenchmarkUnavailable`
    /// when the table has no curve for the cohort.
    pub fn evaluate(
        &self,
        sport: SportId,
        score: f64,
        age_group: AgeGroup,
        gender: GenderCategory,
    ) -> AppResult<Benchmark> {
        if !score.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Score for {sport} must be a finite number"
            )));
        }

        let reference = self
            .table
            .reference(sport, age_group, gender)
            .ok_or_else(|| {
                AppError::benchmark_unavailable(format!(
                    "No benchmark for {sport} ({age_group}, {gender})"
                ))
            })?;

        let percentile = reference.percentile_for(score);
        let rating = Rating::from_percentile(percentile, &self.thresholds);
        debug!(sport = %sport, score, percentile, rating = %rating, "Evaluated benchmark");
        Ok(Benchmark { percentile, rating })
    }

    /// Full comparison record for a performance result
    ///
    /// # Errors
    ///
    /// Same as [`Self::evaluate`].
    pub fn comparison(
        &self,
        sport: SportId,
        score: f64,
        age_group: AgeGroup,
        gender: GenderCategory,
    ) -> AppResult<BenchmarkComparison> {
        let Benchmark { percentile, rating } = self.evaluate(sport, score, age_group, gender)?;
        Ok(BenchmarkComparison {
            age_group,
            gender_category: gender,
            percentile,
            rating,
        })
    }
}
