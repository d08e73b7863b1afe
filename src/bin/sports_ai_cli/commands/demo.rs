// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Commands running against the seeded demo population
// ABOUTME: Simulated assessment, leaderboard pages, and progress summaries

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use serde_json::json;
use sports_ai::analysis::{SimulatedAnalysisService, VideoReference};
use sports_ai::assessment::AssessmentState;
use sports_ai::config::AppConfig;
use sports_ai::context::AppContext;
use sports_ai::intelligence::ProgressPeriod;
use sports_ai::models::{LeaderboardScope, SportId};
use sports_ai::pagination::Cursor;
use sports_ai::presentation::ResultCardModel;
use sports_ai::screens::{ProgressController, ViewState};
use sports_ai::store::LeaderboardQuery;
use tracing::info;

use crate::helpers::output::emit;

/// Arguments of the `assess` command
pub struct AssessOptions {
    pub sport: SportId,
    pub video: String,
    pub duration_secs: u64,
    pub delay_ms: Option<u64>,
    pub seed: u64,
}

pub async fn assess(options: AssessOptions, output: Option<&Path>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(delay_ms) = options.delay_ms {
        config.assessment.simulated_delay = Duration::from_millis(delay_ms);
    }
    let service = Arc::new(SimulatedAnalysisService::new(
        config.assessment.simulated_delay,
        options.seed,
    ));
    let context = AppContext::with_service(config, service);
    let demo = context.seed_demo().await?;

    let controller = context.assessment_controller(demo.current_user).await?;
    controller.select_sport(options.sport)?;
    controller.start(VideoReference::new(
        options.video,
        Duration::from_secs(options.duration_secs),
    ))?;
    info!(sport = %options.sport, "Assessment started");

    match controller.wait().await {
        AssessmentState::Completed(result) => emit(
            &json!({
                "card": ResultCardModel::new(&result),
                "result": result,
            }),
            output,
        ),
        AssessmentState::Failed(failure) => {
            bail!("Assessment failed ({}): {}", failure.code, failure.message)
        }
        other => bail!("Assessment ended in state {}", other.as_str()),
    }
}

pub async fn leaderboard(
    sport: SportId,
    scope: LeaderboardScope,
    page_size: Option<usize>,
    cursor: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let (context, demo) = AppContext::demo(AppConfig::from_env()?).await?;

    let mut query = LeaderboardQuery::new(sport, scope, Some(demo.current_user));
    if let Some(cursor) = cursor {
        query = query.after(Cursor::from_string(cursor));
    }
    if let Some(size) = page_size {
        query = query.with_page_size(size);
    }
    let page = context.leaderboard().query(query).await?;
    emit(&page, output)
}

pub async fn progress(period: ProgressPeriod, output: Option<&Path>) -> Result<()> {
    let (context, demo) = AppContext::demo(AppConfig::from_env()?).await?;

    let mut controller: ProgressController = context.progress_controller(demo.current_user);
    controller.select_period(period);
    match controller.refresh(demo.now).await {
        ViewState::Ready(view) => emit(view, output),
        ViewState::Failed(err) => bail!("{}: {}", err.code, err.message),
        ViewState::Loading => bail!("Progress did not load"),
    }
}
