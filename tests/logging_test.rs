// ABOUTME: Tests for logging configuration read from the environment
// ABOUTME: Format parsing and production defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use sports_ai::config::Environment;
use sports_ai::constants::env_config;
use sports_ai::logging::{LogFormat, LoggingConfig};

fn clear_env() {
    for var in [env_config::ENVIRONMENT, "LOG_FORMAT", "RUST_LOG"] {
        env::remove_var(var);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
    assert_eq!(LogFormat::Pretty.to_string(), "pretty");
}

#[test]
#[serial]
fn test_development_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_production_logs_json_with_locations() {
    clear_env();
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var("RUST_LOG", "sports_ai=debug");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.level, "sports_ai=debug");
}

#[test]
#[serial]
fn test_explicit_format_overrides_environment_default() {
    clear_env();
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var("LOG_FORMAT", "compact");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
}
