// ABOUTME: Simulated analysis service with deterministic scoring and scripted outcomes
// ABOUTME: Seeded ChaCha RNG per user and sport, optional per-call script for tests and demos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;
use tracing::debug;

use super::{AnalysisRequest, AnalysisService, RawAnalysis};
use crate::constants::assessment::SIMULATED_ANALYSIS_DELAY_MS;
use crate::errors::AnalysisError;
use crate::models::SportId;

/// One scripted service response
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptStep {
    /// Time the call takes; `None` uses the service delay
    pub delay: Option<Duration>,
    /// Response returned after the delay
    pub outcome: Result<RawAnalysis, AnalysisError>,
}

impl ScriptStep {
    /// Successful response
    #[must_use]
    pub const fn ok(raw: RawAnalysis) -> Self {
        Self {
            delay: None,
            outcome: Ok(raw),
        }
    }

    /// Failing response
    #[must_use]
    pub const fn fail(error: AnalysisError) -> Self {
        Self {
            delay: None,
            outcome: Err(error),
        }
    }

    /// Override how long this call takes
    #[must_use]
    pub const fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Stand-in analysis backend
///
/// Each call waits for the configured delay and then either replays the next
/// scripted step or generates a plausible measurement. Generated measurements
/// depend only on the seed, user, and sport.
pub struct SimulatedAnalysisService {
    delay: Duration,
    seed: u64,
    script: Mutex<VecDeque<ScriptStep>>,
    calls: AtomicU32,
}

impl Default for SimulatedAnalysisService {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_ANALYSIS_DELAY_MS), 42)
    }
}

impl SimulatedAnalysisService {
    /// Service answering after `delay` with measurements derived from `seed`
    #[must_use]
    pub fn new(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            seed,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicU32::new(0),
        }
    }

    /// Service that replays `steps` in order before generating measurements
    #[must_use]
    pub fn scripted(delay: Duration, steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            script: Mutex::new(steps.into_iter().collect()),
            ..Self::new(delay, 42)
        }
    }

    /// Number of `analyze` calls received
    #[must_use]
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Deterministic measurement for `request`
    #[must_use]
    pub fn generate(&self, request: &AnalysisRequest) -> RawAnalysis {
        let user_bits = request.user_id.as_u64_pair();
        let mix = self.seed ^ user_bits.0 ^ user_bits.1.rotate_left(17) ^ request.sport.index() as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(mix);

        let score = match request.sport {
            SportId::VerticalJump => round_to(rng.gen_range(30.0..75.0), 1),
            SportId::ShuttleRun => round_to(rng.gen_range(10.0..14.5), 2),
            SportId::Situps => rng.gen_range(20_u32..60).into(),
            SportId::EnduranceRun => rng.gen_range(380_u32..720).into(),
            SportId::Shotput => round_to(rng.gen_range(5.0..14.0), 2),
        };

        RawAnalysis {
            score,
            confidence: round_to(rng.gen_range(0.75..0.99), 2),
            technique_score: rng.gen_range(60..=98),
            cheat_detected: false,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[async_trait]
impl AnalysisService for SimulatedAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<RawAnalysis, AnalysisError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        request.video.check()?;

        let step = self.script.lock().await.pop_front();
        let delay = step.as_ref().and_then(|s| s.delay).unwrap_or(self.delay);
        debug!(
            user.id = %request.user_id,
            sport = %request.sport,
            call,
            delay_ms = delay.as_millis(),
            scripted = step.is_some(),
            "Simulated analysis started"
        );
        tokio::time::sleep(delay).await;

        match step {
            Some(step) => step.outcome,
            None => Ok(self.generate(request)),
        }
    }
}
