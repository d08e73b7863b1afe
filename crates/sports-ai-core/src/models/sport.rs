// ABOUTME: Sport identifier enumeration and per-sport measurement metadata
// ABOUTME: Defines the closed SportId set, scoring direction, and SportDefinition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::AppError;

/// Closed set of sports that can be assessed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SportId {
    /// Standing vertical jump, measured in centimetres
    VerticalJump,
    /// Shuttle run, measured in seconds
    ShuttleRun,
    /// Timed sit-ups, measured in repetitions
    Situps,
    /// Endurance run, measured as elapsed time
    EnduranceRun,
    /// Shot put, measured in metres
    Shotput,
}

impl SportId {
    /// Every sport in registry order
    pub const ALL: [Self; 5] = [
        Self::VerticalJump,
        Self::ShuttleRun,
        Self::Situps,
        Self::EnduranceRun,
        Self::Shotput,
    ];

    /// Wire identifier (`vertical_jump`, `shuttle_run`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerticalJump => "vertical_jump",
            Self::ShuttleRun => "shuttle_run",
            Self::Situps => "situps",
            Self::EnduranceRun => "endurance_run",
            Self::Shotput => "shotput",
        }
    }

    /// Position of this sport in registry order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical_jump" => Ok(Self::VerticalJump),
            "shuttle_run" => Ok(Self::ShuttleRun),
            "situps" => Ok(Self::Situps),
            "endurance_run" => Ok(Self::EnduranceRun),
            "shotput" => Ok(Self::Shotput),
            other => Err(AppError::unknown_sport(other)),
        }
    }
}

/// Which way a raw score improves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BetterDirection {
    /// Larger scores are better (height, distance, repetitions)
    Higher,
    /// Smaller scores are better (elapsed time)
    Lower,
}

impl BetterDirection {
    /// Order two scores so that the better one sorts first
    #[must_use]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Higher => b.total_cmp(&a),
            Self::Lower => a.total_cmp(&b),
        }
    }

    /// Whether `candidate` strictly beats `reference`
    #[must_use]
    pub fn is_better(self, candidate: f64, reference: f64) -> bool {
        self.compare(candidate, reference) == Ordering::Less
    }
}

/// Display and measurement metadata for one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportDefinition {
    /// Closed-set identifier
    pub id: SportId,
    /// Display label
    pub name: &'static str,
    /// Icon name used by the sport card
    pub icon: &'static str,
    /// Measurement unit, display only
    pub unit: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Accent colour as a hex string
    pub color: &'static str,
    /// Expected time to complete the test
    #[serde(serialize_with = "serialize_duration_secs")]
    pub estimated_duration: Duration,
    /// Visible but not selectable when false
    pub available: bool,
    /// Whether higher or lower raw scores are better
    pub better_direction: BetterDirection,
}

fn serialize_duration_secs<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_secs())
}
