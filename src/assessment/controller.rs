// ABOUTME: Assessment screen controller owning sport selection and the running task
// ABOUTME: Starts, cancels, and observes assessments for the signed-in athlete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::pipeline::{AssessmentPipeline, CancelHandle};
use super::task::{AssessmentState, AssessmentTask};
use crate::analysis::{AnalysisRequest, VideoReference};
use crate::errors::{AppError, AppResult};
use crate::models::{SportDefinition, SportId, UserProfile};
use crate::registry::SportRegistry;

/// State behind the assessment screen
///
/// Selecting a sport and starting are synchronous; the analysis itself runs on
/// a spawned tokio task whose progress is published through [`AssessmentTask`].
/// A completed run clears the selection, a failed or canceled one keeps it so
/// the user can retry.
pub struct AssessmentController {
    pipeline: AssessmentPipeline,
    athlete: UserProfile,
    task: AssessmentTask,
    selection: Arc<watch::Sender<Option<SportId>>>,
    active: Arc<Mutex<Option<CancelHandle>>>,
}

impl AssessmentController {
    /// Controller assessing `athlete` through `pipeline`
    #[must_use]
    pub fn new(pipeline: AssessmentPipeline, athlete: UserProfile) -> Self {
        let (selection, _rx) = watch::channel(None);
        Self {
            pipeline,
            athlete,
            task: AssessmentTask::new(),
            selection: Arc::new(selection),
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// Every sport shown on the screen, available or not
    #[must_use]
    pub fn sports(&self) -> Vec<&'static SportDefinition> {
        SportRegistry::global().all().collect()
    }

    /// Select the sport to assess
    ///
    /// # Errors
    ///
    /// Returns `SportUnavailable` for a sport that is not open yet and
    /// `AssessmentInProgress` while an assessment runs. The selection is left
    /// unchanged in both cases.
    pub fn select_sport(&self, sport: SportId) -> AppResult<()> {
        if self.task.state().is_in_flight() {
            return Err(AppError::assessment_in_progress());
        }
        SportRegistry::global().select(sport)?;
        self.selection.send_replace(Some(sport));
        debug!(sport = %sport, "Sport selected");
        Ok(())
    }

    /// Drop the current selection
    pub fn clear_selection(&self) {
        self.selection.send_replace(None);
    }

    /// Currently selected sport
    #[must_use]
    pub fn selected_sport(&self) -> Option<SportId> {
        *self.selection.borrow()
    }

    /// Start assessing the selected sport from `video`
    ///
    /// Must be called from within a tokio runtime. Returns as soon as the run
    /// is admitted; observe it through [`Self::state`], [`Self::subscribe`],
    /// or [`Self::wait`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no sport is selected and
    /// `AssessmentInProgress` while another run is in flight.
    pub fn start(&self, video: VideoReference) -> AppResult<()> {
        let sport = self
            .selected_sport()
            .ok_or_else(|| AppError::invalid_input("Select a sport before starting an assessment"))?;

        let request = AnalysisRequest {
            video,
            sport,
            user_id: self.athlete.id,
            age_group: self.athlete.age_group(Utc::now().date_naive()),
            gender: self.athlete.gender_category(),
        };
        let pending = self.pipeline.try_begin(request)?;

        let cancel = CancelHandle::new();
        *self.active_slot()? = Some(cancel.clone());
        self.task
            .publish(AssessmentState::InFlight { sport, attempt: 1 });
        info!(user.id = %self.athlete.id, sport = %sport, "Assessment started");

        let pipeline = self.pipeline.clone();
        let task = self.task.clone();
        let selection = Arc::clone(&self.selection);
        tokio::spawn(async move {
            let outcome = pipeline.execute(&pending, &cancel, Some(&task)).await;
            let state = match outcome {
                Ok(result) => {
                    selection.send_replace(None);
                    AssessmentState::settle(Ok(result))
                }
                Err(err) => AssessmentState::settle(Err(&err)),
            };
            task.publish(state);
            drop(pending);
        });
        Ok(())
    }

    /// Cancel the running assessment
    ///
    /// Returns whether a running assessment was signaled.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the controller lock is poisoned.
    pub fn cancel(&self) -> AppResult<bool> {
        let handle = self.active_slot()?.take();
        match handle {
            Some(handle) if self.task.state().is_in_flight() => {
                handle.cancel();
                info!(user.id = %self.athlete.id, "Assessment cancel requested");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Current task state
    #[must_use]
    pub fn state(&self) -> AssessmentState {
        self.task.state()
    }

    /// Receiver notified on every state transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AssessmentState> {
        self.task.subscribe()
    }

    /// Wait for the running assessment, if any, and return the state reached
    pub async fn wait(&self) -> AssessmentState {
        self.task.settled().await
    }

    /// Return a settled task to `Idle`
    ///
    /// # Errors
    ///
    /// Returns `AssessmentInProgress` while an assessment runs.
    pub fn reset(&self) -> AppResult<()> {
        if self.task.state().is_in_flight() {
            return Err(AppError::assessment_in_progress());
        }
        self.task.publish(AssessmentState::Idle);
        Ok(())
    }

    fn active_slot(&self) -> AppResult<std::sync::MutexGuard<'_, Option<CancelHandle>>> {
        self.active
            .lock()
            .map_err(|_| AppError::internal("Mutex poisoned: assessment cancel slot"))
    }
}
