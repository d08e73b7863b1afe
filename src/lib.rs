// ABOUTME: Main library entry point for the Sports AI athletic self-assessment client
// ABOUTME: Assessment pipeline, result stores, leaderboards, localization, and screen controllers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Sports AI
//!
//! Client core of an athletic self-assessment app. An athlete picks a sport,
//! records a video, and receives a validated, benchmarked result with any
//! achievements it unlocks. Results feed progress statistics and
//! district, state, and national leaderboards.
//!
//! ## Architecture
//!
//! - **`sports_ai_core`**: errors, sport registry, models, pagination
//! - **`sports_ai_intelligence`**: benchmarks, achievements, ranking, progress
//! - **analysis**: analysis service seam and result ingestion
//! - **assessment**: cancellable, retrying assessment tasks
//! - **store**: result store, user directory, leaderboard queries, demo data
//! - **screens**: one controller per screen over a shared [`context::AppContext`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sports_ai::config::AppConfig;
//! use sports_ai::context::AppContext;
//! use sports_ai::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let (context, demo) = AppContext::demo(AppConfig::from_env()?).await?;
//!     let mut board = context.leaderboard_controller(Some(demo.current_user));
//!     if let Some(view) = board.refresh().await.ready() {
//!         println!("{} athletes ranked", view.total);
//!     }
//!     Ok(())
//! }
//! ```

pub use sports_ai_core::{constants, errors, models, pagination, registry};
pub use sports_ai_intelligence as intelligence;

/// Analysis service seam, simulated analyzer, and result ingestion
pub mod analysis;

/// Assessment tasks with timeout, retry, and cancellation
pub mod assessment;

/// Configuration loaded from the environment
pub mod config;

/// Shared application context
pub mod context;

/// UI string translation
pub mod localization;

/// Logging setup and structured domain events
pub mod logging;

/// View models and formatting for rendered components
pub mod presentation;

/// Screen controllers and navigation
pub mod screens;

/// Result storage, user directory, and leaderboard queries
pub mod store;
