// ABOUTME: Assessment lifecycle from sport selection to stored result
// ABOUTME: Pipeline with timeout, retry, and cancellation plus the screen controller driving it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assessment
//!
//! An assessment is a cancelable task with the states `Idle`, `InFlight`,
//! `Completed`, `Failed`, and `Canceled`. Each user may have at most one
//! assessment in flight.

/// Screen controller for starting and observing assessments
pub mod controller;

/// Analysis pipeline with timeout, retry, and cancellation
pub mod pipeline;

/// Task state and publication
pub mod task;

pub use controller::AssessmentController;
pub use pipeline::{
    AssessmentPipeline, CancelHandle, InFlightGuard, InFlightRegistry, PendingAssessment,
};
pub use task::{AssessmentState, AssessmentTask, TaskFailure};
