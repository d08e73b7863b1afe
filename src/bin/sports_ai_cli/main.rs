// ABOUTME: Sports AI CLI - command-line access to the assessment platform
// ABOUTME: Lists sports, translates strings, evaluates scores, and runs demo assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List sports with their card details
//! sports-ai-cli sports
//!
//! # Translate a key, or dump a whole dictionary
//! sports-ai-cli translate selectSport --language hi
//! sports-ai-cli dictionary hi
//!
//! # Percentile and rating of a score
//! sports-ai-cli evaluate vertical_jump 62 --age-group 18-25 --gender male
//!
//! # Run a simulated assessment for the demo athlete
//! sports-ai-cli assess vertical_jump --delay-ms 200
//!
//! # Demo leaderboard and progress views
//! sports-ai-cli leaderboard vertical_jump --scope state
//! sports-ai-cli progress --period month --output progress.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sports_ai::intelligence::ProgressPeriod;
use sports_ai::localization::Language;
use sports_ai::logging::{LogFormat, LoggingConfig};
use sports_ai::models::{AgeGroup, GenderCategory, LeaderboardScope, SportId};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "sports-ai-cli",
    about = "Sports AI assessment CLI",
    long_about = "Command-line access to the Sports AI sport registry, benchmarks, translations, and a seeded demo population."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write JSON output to this file instead of stdout
    #[arg(long, short = 'o', global = true)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List sports as shown on the selection screen
    Sports {
        /// Hide sports that are not open yet
        #[arg(long)]
        available_only: bool,
    },

    /// Translate a UI string key
    Translate {
        /// Localization key
        key: String,

        /// Language code (en, hi)
        #[arg(long, short = 'l', default_value = "en")]
        language: Language,
    },

    /// Print every string of a language
    Dictionary {
        /// Language code (en, hi)
        language: String,
    },

    /// Percentile and rating of a score
    Evaluate {
        /// Sport id (e.g. `vertical_jump`)
        sport: SportId,

        /// Measured score in the sport's unit
        score: f64,

        /// Age cohort (e.g. `18-25`)
        #[arg(long, default_value = "18-25")]
        age_group: AgeGroup,

        /// Gender cohort
        #[arg(long, default_value = "male")]
        gender: GenderCategory,
    },

    /// Run a simulated assessment for the demo athlete
    Assess {
        /// Sport id
        sport: SportId,

        /// Video location
        #[arg(long, default_value = "file:///recordings/demo.mp4")]
        video: String,

        /// Video length in seconds
        #[arg(long, default_value = "30")]
        duration_secs: u64,

        /// Simulated analysis delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed of the simulated analyzer
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Show a demo leaderboard as seen by the demo athlete
    Leaderboard {
        /// Sport id
        #[arg(default_value = "vertical_jump")]
        sport: SportId,

        /// Board scope (district, state, national)
        #[arg(long, default_value = "national")]
        scope: LeaderboardScope,

        /// Entries per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Opaque cursor returned by a previous page
        #[arg(long)]
        cursor: Option<String>,
    },

    /// Show the demo athlete's progress
    Progress {
        /// Window (week, month, year)
        #[arg(long, default_value = "week")]
        period: ProgressPeriod,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.into(),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    };
    logging.init()?;
    debug!("Sports AI CLI");

    let output = cli.output.as_deref();
    match cli.command {
        Command::Sports { available_only } => commands::reference::sports(available_only, output),
        Command::Translate { key, language } => {
            commands::reference::translate(&key, language, output)
        }
        Command::Dictionary { language } => commands::reference::dictionary(&language, output),
        Command::Evaluate {
            sport,
            score,
            age_group,
            gender,
        } => commands::reference::evaluate(sport, score, age_group, gender, output),
        Command::Assess {
            sport,
            video,
            duration_secs,
            delay_ms,
            seed,
        } => {
            let options = commands::demo::AssessOptions {
                sport,
                video,
                duration_secs,
                delay_ms,
                seed,
            };
            commands::demo::assess(options, output).await
        }
        Command::Leaderboard {
            sport,
            scope,
            page_size,
            cursor,
        } => commands::demo::leaderboard(sport, scope, page_size, cursor, output).await,
        Command::Progress { period } => commands::demo::progress(period, output).await,
    }
}
