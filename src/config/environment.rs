// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Deployment modes and typed environment variable parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration primitives

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult, LookupPolicy};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse leniently; anything unrecognized is `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a deployed build
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Failure policy for closed-set lookups
    ///
    /// Development and tests fail fast; production logs and falls back.
    #[must_use]
    pub const fn lookup_policy(self) -> LookupPolicy {
        if self.is_production() {
            LookupPolicy::LogAndDefault
        } else {
            LookupPolicy::FailFast
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an optional environment variable
///
/// Returns `Ok(None)` when the variable is unset.
///
/// # Errors
///
/// Returns `ConfigInvalid` naming the variable when the value does not parse.
pub fn parse_env<T>(name: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("{name}='{raw}' is invalid: {e}"))),
        Err(_) => Ok(None),
    }
}
