// ABOUTME: Immutable registry of supported sports and their metadata
// ABOUTME: Provides infallible typed lookup and validated string lookup with failure policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sport registry
//!
//! The registry is a `'static` table built at compile time. Identifiers are
//! unique and the table is never mutated, so lookups need no synchronization.

use std::time::Duration;

use tracing::debug;

use crate::errors::{AppError, AppResult, LookupPolicy};
use crate::models::{BetterDirection, SportDefinition, SportId};

const fn minutes(n: u64) -> Duration {
    Duration::from_secs(n * 60)
}

static SPORTS: [SportDefinition; 5] = [
    SportDefinition {
        id: SportId::VerticalJump,
        name: "Vertical Jump",
        icon: "trending-up",
        unit: "cm",
        description: "Measure your explosive leg power",
        color: "#1E40AF",
        estimated_duration: minutes(2),
        available: true,
        better_direction: BetterDirection::Higher,
    },
    SportDefinition {
        id: SportId::ShuttleRun,
        name: "Shuttle Run",
        icon: "zap",
        unit: "seconds",
        description: "Test your agility and speed",
        color: "#059669",
        estimated_duration: minutes(3),
        available: true,
        better_direction: BetterDirection::Lower,
    },
    SportDefinition {
        id: SportId::Situps,
        name: "Sit-ups",
        icon: "activity",
        unit: "reps",
        description: "Core strength assessment",
        color: "#EA580C",
        estimated_duration: minutes(1),
        available: true,
        better_direction: BetterDirection::Higher,
    },
    SportDefinition {
        id: SportId::EnduranceRun,
        name: "Endurance Run",
        icon: "circle",
        unit: "time",
        description: "Cardiovascular endurance test",
        color: "#7C3AED",
        estimated_duration: minutes(12),
        available: true,
        better_direction: BetterDirection::Lower,
    },
    SportDefinition {
        id: SportId::Shotput,
        name: "Shot Put",
        icon: "target",
        unit: "meters",
        description: "Power and technique assessment",
        color: "#DC2626",
        estimated_duration: minutes(5),
        available: false,
        better_direction: BetterDirection::Higher,
    },
];

static GLOBAL: SportRegistry = SportRegistry { sports: &SPORTS };

/// Read-only mapping from `SportId` to `SportDefinition`
#[derive(Debug, Clone, Copy)]
pub struct SportRegistry {
    sports: &'static [SportDefinition],
}

impl SportRegistry {
    /// Process-wide registry
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Definition for a typed identifier
    #[must_use]
    pub fn get(&self, id: SportId) -> &'static SportDefinition {
        // SPORTS is declared in SportId::ALL order
        &self.sports[id.index()]
    }

    /// Definition for an untyped identifier
    ///
    /// # Errors
    ///
    /// Returns `UnknownSport` if `id` is outside the closed set.
    pub fn lookup(&self, id: &str) -> AppResult<&'static SportDefinition> {
        let sport: SportId = id.parse()?;
        Ok(self.get(sport))
    }

    /// Lookup that follows the environment's failure policy
    ///
    /// # Errors
    ///
    /// Returns `UnknownSport` under `LookupPolicy::FailFast`.
    pub fn lookup_with_policy(
        &self,
        id: &str,
        policy: LookupPolicy,
    ) -> AppResult<Option<&'static SportDefinition>> {
        policy.resolve(self.lookup(id))
    }

    /// All definitions in registry order
    pub fn all(&self) -> impl Iterator<Item = &'static SportDefinition> {
        self.sports.iter()
    }

    /// Definitions that can currently be selected
    pub fn available(&self) -> impl Iterator<Item = &'static SportDefinition> {
        self.sports.iter().filter(|sport| sport.available)
    }

    /// Validate that a sport may be selected for an assessment
    ///
    /// # Errors
    ///
    /// Returns `SportUnavailable` for sports flagged as coming soon.
    pub fn select(&self, id: SportId) -> AppResult<&'static SportDefinition> {
        let sport = self.get(id);
        if !sport.available {
            debug!(sport = %id, "Rejected selection of unavailable sport");
            return Err(AppError::sport_unavailable(id.as_str()));
        }
        Ok(sport)
    }

    /// Number of registered sports
    #[must_use]
    pub fn len(&self) -> usize {
        self.sports.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}
