// ABOUTME: Core types and constants for the Sports AI assessment platform
// ABOUTME: Foundation crate with error handling, sport registry, models, and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sports AI Core
//!
//! Foundation crate providing shared types and constants for the Sports AI
//! assessment platform. Every screen, service, and algorithm depends on the
//! data contracts defined here, so this crate is kept small and stable.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AnalysisError`
//! - **constants**: Thresholds, timeouts, and limits shared across the workspace
//! - **models**: Sport definitions, performance results, achievements, leaderboard entries
//! - **registry**: Immutable sport registry keyed by `SportId`
//! - **pagination**: Opaque cursor for paging leaderboard queries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (sports, performance results, achievements, leaderboards, users)
pub mod models;

/// Immutable registry of supported sports
pub mod registry;

/// Opaque cursor-based pagination
pub mod pagination;
