// ABOUTME: Application context wiring configuration, stores, and services together
// ABOUTME: Single place that builds the pipeline, leaderboard service, and screen controllers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use sports_ai_intelligence::{AchievementEvaluator, BenchmarkEvaluator, StaticBenchmarkTable};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{AnalysisService, ResultIngestor, SimulatedAnalysisService};
use crate::assessment::{AssessmentController, AssessmentPipeline};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::localization::Translator;
use crate::screens::{
    AuthController, DashboardController, LeaderboardController, ProfileController,
    ProgressController,
};
use crate::store::{
    seed_demo_data, DemoPopulation, InMemoryResultStore, LeaderboardService, ResultStore,
    UserDirectory,
};

/// Shared services of a running client
///
/// Cloning is cheap; every clone sees the same stores and language.
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    translator: Translator,
    results: Arc<InMemoryResultStore>,
    directory: UserDirectory,
    ingestor: ResultIngestor,
    pipeline: AssessmentPipeline,
    leaderboard: LeaderboardService,
}

impl AppContext {
    /// Context backed by the simulated analysis service
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let service = Arc::new(SimulatedAnalysisService::new(
            config.assessment.simulated_delay,
            42,
        ));
        Self::with_service(config, service)
    }

    /// Context backed by the given analysis service
    #[must_use]
    pub fn with_service(config: AppConfig, service: Arc<dyn AnalysisService>) -> Self {
        let ingestor = ResultIngestor::new(
            Arc::new(BenchmarkEvaluator::new(
                StaticBenchmarkTable::seeded(),
                config.rating,
            )),
            Arc::new(AchievementEvaluator::new()),
            config.assessment.min_confidence,
        );
        let results = Arc::new(InMemoryResultStore::new());
        let directory = UserDirectory::new();
        let store: Arc<dyn ResultStore> = results.clone();

        let pipeline = AssessmentPipeline::new(
            service,
            ingestor.clone(),
            store.clone(),
            config.assessment.clone(),
        );
        let leaderboard = LeaderboardService::new(store, directory.clone())
            .with_page_size(config.leaderboard.page_size);

        Self {
            translator: Translator::new(config.default_language),
            config: Arc::new(config),
            results,
            directory,
            ingestor,
            pipeline,
            leaderboard,
        }
    }

    /// Context populated with the demo athletes
    ///
    /// # Errors
    ///
    /// Returns an error if the demo data cannot be ingested.
    pub async fn demo(config: AppConfig) -> AppResult<(Self, DemoPopulation)> {
        let context = Self::new(config);
        let population = context.seed_demo().await?;
        Ok((context, population))
    }

    /// Seed the demo athletes into this context's stores
    ///
    /// # Errors
    ///
    /// Returns an error if the demo data cannot be ingested.
    pub async fn seed_demo(&self) -> AppResult<DemoPopulation> {
        let population =
            seed_demo_data(self.results.as_ref(), &self.directory, &self.ingestor).await?;
        info!(
            users = population.users.len(),
            results = self.results.len().await,
            "Demo data seeded"
        );
        Ok(population)
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared translator
    #[must_use]
    pub const fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Result store
    #[must_use]
    pub fn results(&self) -> Arc<dyn ResultStore> {
        self.results.clone()
    }

    /// User directory
    #[must_use]
    pub const fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Result ingestor
    #[must_use]
    pub const fn ingestor(&self) -> &ResultIngestor {
        &self.ingestor
    }

    /// Analysis pipeline
    #[must_use]
    pub const fn pipeline(&self) -> &AssessmentPipeline {
        &self.pipeline
    }

    /// Leaderboard service
    #[must_use]
    pub const fn leaderboard(&self) -> &LeaderboardService {
        &self.leaderboard
    }

    /// Sign-in screen
    #[must_use]
    pub fn auth_controller(&self) -> AuthController {
        AuthController::new(self.translator.clone())
    }

    /// Home tab of `user_id`
    #[must_use]
    pub fn dashboard_controller(&self, user_id: Uuid) -> DashboardController {
        DashboardController::new(self.results(), user_id)
    }

    /// Assessment tab of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown user.
    pub async fn assessment_controller(&self, user_id: Uuid) -> AppResult<AssessmentController> {
        let athlete = self.directory.get(user_id).await?;
        Ok(AssessmentController::new(self.pipeline.clone(), athlete))
    }

    /// Progress tab of `user_id`
    #[must_use]
    pub fn progress_controller(&self, user_id: Uuid) -> ProgressController {
        ProgressController::new(self.results(), user_id)
    }

    /// Leaderboard tab seen by `requester`
    #[must_use]
    pub fn leaderboard_controller(&self, requester: Option<Uuid>) -> LeaderboardController {
        LeaderboardController::new(self.leaderboard.clone(), requester)
    }

    /// Profile tab of `user_id`
    #[must_use]
    pub fn profile_controller(&self, user_id: Uuid) -> ProfileController {
        ProfileController::new(
            self.directory.clone(),
            self.results(),
            self.translator.clone(),
            user_id,
        )
    }
}
