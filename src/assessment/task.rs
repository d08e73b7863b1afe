// ABOUTME: Observable lifecycle of a single assessment attempt
// ABOUTME: Task states, failure summaries, and the watch channel publishing them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::errors::{AppError, ErrorCode};
use crate::models::{PerformanceResult, SportId};

/// Why an assessment failed, in a form screens can keep and clone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// Error code of the failure
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Whether to offer the user a retry
    pub retryable: bool,
}

impl From<&AppError> for TaskFailure {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            retryable: err.is_recoverable(),
        }
    }
}

/// Lifecycle state of the current assessment
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AssessmentState {
    /// Nothing started
    #[default]
    Idle,
    /// Waiting for the analysis service
    InFlight {
        /// Assessed sport
        sport: SportId,
        /// 1-based attempt number
        attempt: u32,
    },
    /// Finished with a stored result
    Completed(Box<PerformanceResult>),
    /// Finished without a result
    Failed(TaskFailure),
    /// Stopped by the user
    Canceled,
}

impl AssessmentState {
    /// Whether an analysis is running
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Whether the task reached an end state
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_) | Self::Canceled)
    }

    /// Stable lowercase name for logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight { .. } => "in_flight",
            Self::Completed(_) => "completed",
            Self::Failed(_) => "failed",
            Self::Canceled => "canceled",
        }
    }

    /// Terminal state for the outcome of a run
    #[must_use]
    pub fn settle(outcome: Result<PerformanceResult, &AppError>) -> Self {
        match outcome {
            Ok(result) => Self::Completed(Box::new(result)),
            Err(err) if err.code == ErrorCode::AssessmentCanceled => Self::Canceled,
            Err(err) => Self::Failed(TaskFailure::from(err)),
        }
    }
}

/// Publisher of one user's assessment state
#[derive(Clone)]
pub struct AssessmentTask {
    state: Arc<watch::Sender<AssessmentState>>,
}

impl Default for AssessmentTask {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentTask {
    /// Task starting in `Idle`
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AssessmentState::Idle);
        Self {
            state: Arc::new(tx),
        }
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> AssessmentState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every transition
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AssessmentState> {
        self.state.subscribe()
    }

    /// Move to `state`
    pub fn publish(&self, state: AssessmentState) {
        self.state.send_replace(state);
    }

    /// Wait until no analysis is running and return the state reached
    pub async fn settled(&self) -> AssessmentState {
        let mut rx = self.state.subscribe();
        let state = rx.wait_for(|state| !state.is_in_flight()).await;
        state.map_or_else(|_| self.state(), |guard| guard.clone())
    }
}
