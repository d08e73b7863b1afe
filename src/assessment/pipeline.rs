// ABOUTME: Assessment pipeline running analysis with timeout, retry, and cancellation
// ABOUTME: Enforces one in-flight assessment per user and stores the ingested result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{info, warn};
use uuid::Uuid;

use super::task::{AssessmentState, AssessmentTask};
use crate::analysis::{AnalysisRequest, AnalysisService, ResultIngestor};
use crate::config::AssessmentConfig;
use crate::errors::{AnalysisError, AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{PerformanceResult, SportId};
use crate::registry::SportRegistry;
use crate::store::ResultStore;

/// Users with an assessment currently running
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    active: Arc<DashMap<Uuid, SportId>>,
}

impl InFlightRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the in-flight slot of `user_id`
    ///
    /// # Errors
    ///
    /// Returns `AssessmentInProgress` if the user already holds the slot.
    pub fn try_acquire(&self, user_id: Uuid, sport: SportId) -> AppResult<InFlightGuard> {
        match self.active.entry(user_id) {
            Entry::Occupied(running) => {
                warn!(
                    user.id = %user_id,
                    running = %running.get(),
                    requested = %sport,
                    "Rejected concurrent assessment"
                );
                Err(AppError::assessment_in_progress())
            }
            Entry::Vacant(slot) => {
                slot.insert(sport);
                Ok(InFlightGuard {
                    active: Arc::clone(&self.active),
                    user_id,
                })
            }
        }
    }

    /// Sport `user_id` is currently being assessed in
    #[must_use]
    pub fn active_sport(&self, user_id: Uuid) -> Option<SportId> {
        self.active.get(&user_id).map(|entry| *entry.value())
    }
}

/// Held while an assessment runs; releases the user's slot on drop
#[derive(Debug)]
pub struct InFlightGuard {
    active: Arc<DashMap<Uuid, SportId>>,
    user_id: Uuid,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.active.remove(&self.user_id);
    }
}

/// Cancellation signal shared between the caller and a running assessment
#[derive(Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelHandle {
    /// Handle in the not-canceled state
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request cancellation; later calls have no effect
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once cancellation is requested
    pub async fn canceled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while waiting
        _ = rx.wait_for(|canceled| *canceled).await;
    }
}

/// Assessment admitted by the in-flight check but not yet run
#[derive(Debug)]
pub struct PendingAssessment {
    request: AnalysisRequest,
    _guard: InFlightGuard,
}

impl PendingAssessment {
    /// Request this assessment will analyze
    #[must_use]
    pub const fn request(&self) -> &AnalysisRequest {
        &self.request
    }
}

/// Runs assessments from analysis request to stored result
#[derive(Clone)]
pub struct AssessmentPipeline {
    service: Arc<dyn AnalysisService>,
    ingestor: ResultIngestor,
    store: Arc<dyn ResultStore>,
    in_flight: InFlightRegistry,
    config: AssessmentConfig,
}

impl AssessmentPipeline {
    /// Pipeline over the given service, ingestor, and store
    #[must_use]
    pub fn new(
        service: Arc<dyn AnalysisService>,
        ingestor: ResultIngestor,
        store: Arc<dyn ResultStore>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            service,
            ingestor,
            store,
            in_flight: InFlightRegistry::new(),
            config,
        }
    }

    /// In-flight registry shared by every run of this pipeline
    #[must_use]
    pub const fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }

    /// Admit `request`, claiming the user's in-flight slot
    ///
    /// # Errors
    ///
    /// Returns `UnknownSport`/`SportUnavailable` for a sport that cannot be
    /// assessed and `AssessmentInProgress` when the user already has a run.
    pub fn try_begin(&self, request: AnalysisRequest) -> AppResult<PendingAssessment> {
        SportRegistry::global().select(request.sport)?;
        let guard = self.in_flight.try_acquire(request.user_id, request.sport)?;
        Ok(PendingAssessment {
            request,
            _guard: guard,
        })
    }

    /// Admit and run `request`
    ///
    /// # Errors
    ///
    /// See [`Self::try_begin`] and [`Self::execute`].
    pub async fn run(
        &self,
        request: AnalysisRequest,
        cancel: &CancelHandle,
    ) -> AppResult<PerformanceResult> {
        let pending = self.try_begin(request)?;
        self.execute(&pending, cancel, None).await
    }

    /// Run an admitted assessment to completion
    ///
    /// Each attempt is bounded by the analysis timeout. Timeouts and service
    /// outages are retried with exponential backoff up to `max_retries`; other
    /// analysis failures end the run immediately. `InFlight` transitions are
    /// published to `task` when one is given. The user's in-flight slot stays
    /// claimed until `pending` is dropped.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentCanceled` if `cancel` fires before the result is
    /// stored, the mapped analysis error of the last attempt, or an ingestion
    /// or store error.
    pub async fn execute(
        &self,
        pending: &PendingAssessment,
        cancel: &CancelHandle,
        task: Option<&AssessmentTask>,
    ) -> AppResult<PerformanceResult> {
        let request = &pending.request;
        let outcome = self.attempt_all(request, cancel, task).await;

        match &outcome {
            Ok(result) => {
                info!(
                    user.id = %request.user_id,
                    sport = %request.sport,
                    result.id = %result.id,
                    score = result.score,
                    percentile = result.benchmark_comparison.percentile,
                    "Assessment completed"
                );
            }
            Err(err) => AppLogger::log_assessment_failure(
                request.user_id,
                request.sport,
                &err.code.to_string(),
                &err.message,
            ),
        }
        outcome
    }

    async fn attempt_all(
        &self,
        request: &AnalysisRequest,
        cancel: &CancelHandle,
        task: Option<&AssessmentTask>,
    ) -> AppResult<PerformanceResult> {
        let timeout = self.config.analysis_timeout;
        let max_attempts = self.config.max_retries.saturating_add(1);
        let mut attempt = 0_u32;

        let raw = loop {
            attempt += 1;
            if let Some(task) = task {
                task.publish(AssessmentState::InFlight {
                    sport: request.sport,
                    attempt,
                });
            }
            AppLogger::log_assessment_event(request.user_id, request.sport, "attempt", attempt);

            let outcome = tokio::select! {
                biased;
                () = cancel.canceled() => return Err(AppError::assessment_canceled()),
                outcome = tokio::time::timeout(timeout, self.service.analyze(request)) => {
                    outcome.unwrap_or(Err(AnalysisError::Timeout(timeout)))
                }
            };

            match outcome {
                Ok(raw) => break raw,
                Err(err) if err.is_transient() && attempt < max_attempts => {
                    let backoff = self.backoff(attempt);
                    warn!(
                        user.id = %request.user_id,
                        sport = %request.sport,
                        attempt,
                        backoff_ms = backoff.as_millis(),
                        error = %err,
                        "Analysis attempt failed, retrying"
                    );
                    tokio::select! {
                        biased;
                        () = cancel.canceled() => return Err(AppError::assessment_canceled()),
                        () = tokio::time::sleep(backoff) => {}
                    }
                }
                Err(err) => return Err(err.into()),
            }
        };

        if cancel.is_canceled() {
            return Err(AppError::assessment_canceled());
        }

        let history = self.store.history_for(request.user_id).await?;
        let result = self.ingestor.ingest(request, raw, &history, Utc::now())?;
        self.store.insert(result.clone()).await?;
        Ok(result)
    }

    /// Backoff before retry number `attempt`, doubling each time
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));
        self.config.retry_backoff.saturating_mul(factor)
    }
}
