// ABOUTME: User profile model for athletes, coaches, and officials
// ABOUTME: Carries location and demographic fields used for scoping and benchmarking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AgeGroup, GenderCategory};
use crate::errors::AppError;

/// Role chosen on the auth screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Takes assessments
    Athlete,
    /// Monitors athletes
    Coach,
    /// Oversees assessments and competitions
    Official,
}

impl UserRole {
    /// Every role in display order
    pub const ALL: [Self; 3] = [Self::Athlete, Self::Coach, Self::Official];

    /// Wire identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Coach => "coach",
            Self::Official => "official",
        }
    }

    /// Localization key of the role title
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "athlete" => Ok(Self::Athlete),
            "coach" => Ok(Self::Coach),
            "official" => Ok(Self::Official),
            other => Err(AppError::invalid_input(format!("Unknown role '{other}'"))),
        }
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Contact email
    pub email: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Full name
    pub name: String,
    /// Role
    pub role: UserRole,
    /// Optional avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// District, used for district-scoped leaderboards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// State, used for state-scoped leaderboards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Birth date, used for the benchmark age cohort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Gender, used for the benchmark gender cohort
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderCategory>,
    /// Preferred UI language code
    pub preferred_language: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Benchmark age cohort on `on`, defaulting to 18-25 when the birth date is unknown
    #[must_use]
    pub fn age_group(&self, on: NaiveDate) -> AgeGroup {
        self.date_of_birth
            .map_or(AgeGroup::Age18To25, |dob| AgeGroup::from_birth_date(dob, on))
    }

    /// Benchmark gender cohort, defaulting to the combined cohort
    #[must_use]
    pub fn gender_category(&self) -> GenderCategory {
        self.gender.unwrap_or(GenderCategory::Other)
    }

    /// "District, State" location line
    #[must_use]
    pub fn location(&self) -> String {
        match (&self.district, &self.state) {
            (Some(district), Some(state)) => format!("{district}, {state}"),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => String::new(),
        }
    }
}
