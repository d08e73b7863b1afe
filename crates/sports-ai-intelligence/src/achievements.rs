// ABOUTME: Achievement rules evaluated against a new result and the user's history
// ABOUTME: Fixed rule order, duplicate suppression, and cheat-flag exclusion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::Timelike;
use sports_ai_core::constants::achievements::{
    CONSISTENCY_STREAK_DAYS, CORE_CRUSHER_REPS, EARLY_BIRD_HOUR_UTC, HIGH_JUMPER_CM,
    SPEED_DEMON_SECONDS, TOP_PERCENTILE,
};
use sports_ai_core::errors::AppError;
use sports_ai_core::models::{Achievement, AchievementCategory, PerformanceResult, SportId};
use sports_ai_core::registry::SportRegistry;
use tracing::debug;
use uuid::Uuid;

use crate::progress::current_streak;

/// Results and unlocked achievements of one user
#[derive(Debug, Clone, Default)]
pub struct AchievementHistory {
    results: Vec<PerformanceResult>,
    result_ids: HashSet<Uuid>,
    achievements: Vec<Achievement>,
    earned_ids: HashSet<String>,
}

impl AchievementHistory {
    /// Empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History built by recording `results` in order
    #[must_use]
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a PerformanceResult>) -> Self {
        let mut history = Self::new();
        for result in results {
            history.record(result);
        }
        history
    }

    /// Append a result and the achievements it carries
    ///
    /// Recording the same result twice is a no-op, and an achievement id is
    /// kept only the first time it appears.
    pub fn record(&mut self, result: &PerformanceResult) {
        if !self.result_ids.insert(result.id) {
            return;
        }
        for achievement in &result.achievements_earned {
            if self.earned_ids.insert(achievement.id.clone()) {
                self.achievements.push(achievement.clone());
            } else {
                let duplicate = AppError::duplicate_achievement(&achievement.id);
                debug!(user.id = %result.user_id, error = %duplicate, "Skipped duplicate achievement");
            }
        }
        self.results.push(result.clone());
    }

    /// Recorded results, oldest recording first
    #[must_use]
    pub fn results(&self) -> &[PerformanceResult] {
        &self.results
    }

    /// Unlocked achievements in unlock order
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Whether `achievement_id` was already unlocked
    #[must_use]
    pub fn has_earned(&self, achievement_id: &str) -> bool {
        self.earned_ids.contains(achievement_id)
    }

    /// Countable results other than `exclude`
    fn prior_countable<'a>(
        &'a self,
        exclude: &'a PerformanceResult,
    ) -> impl Iterator<Item = &'a PerformanceResult> + 'a {
        self.results
            .iter()
            .filter(move |r| r.id != exclude.id && r.is_countable())
    }
}

/// Static description of an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    /// Stable identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Display description
    pub description: &'static str,
    /// Emoji icon
    pub icon: &'static str,
    /// Category
    pub category: AchievementCategory,
}

impl AchievementDefinition {
    fn unlock(&self, result: &PerformanceResult) -> Achievement {
        Achievement {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            icon: self.icon.to_owned(),
            category: self.category,
            earned_at: result.timestamp,
        }
    }
}

/// One achievement condition
pub trait AchievementRule: Send + Sync {
    /// Static description of the achievement this rule unlocks
    fn definition(&self) -> &AchievementDefinition;

    /// Whether `result` meets the condition given the prior `history`
    fn matches(&self, result: &PerformanceResult, history: &AchievementHistory) -> bool;

    /// Stable identifier
    fn id(&self) -> &'static str {
        self.definition().id
    }

    /// Achievement unlocked by `result`, if the condition holds
    fn evaluate(
        &self,
        result: &PerformanceResult,
        history: &AchievementHistory,
    ) -> Option<Achievement> {
        self.matches(result, history)
            .then(|| self.definition().unlock(result))
    }
}

struct FirstAssessment;
struct HighJumper;
struct SpeedDemon;
struct CoreCrusher;
struct TopTenPercent;
struct PersonalBest;
struct ConsistencyMaster;
struct EarlyBird;
struct AllRounder;

const FIRST_ASSESSMENT: AchievementDefinition = AchievementDefinition {
    id: "first_assessment",
    title: "First Steps",
    description: "Completed your first assessment",
    icon: "🎉",
    category: AchievementCategory::Milestone,
};

const HIGH_JUMPER: AchievementDefinition = AchievementDefinition {
    id: "high_jumper",
    title: "High Jumper",
    description: "Jumped over 60cm",
    icon: "⬆️",
    category: AchievementCategory::Performance,
};

const SPEED_DEMON: AchievementDefinition = AchievementDefinition {
    id: "speed_demon",
    title: "Speed Demon",
    description: "Finished the shuttle run in under 12 seconds",
    icon: "⚡",
    category: AchievementCategory::Performance,
};

const CORE_CRUSHER: AchievementDefinition = AchievementDefinition {
    id: "core_crusher",
    title: "Core Crusher",
    description: "Completed 50 or more sit-ups",
    icon: "💪",
    category: AchievementCategory::Performance,
};

const TOP_TEN_PERCENT: AchievementDefinition = AchievementDefinition {
    id: "top_ten_percent",
    title: "Top 10%",
    description: "Scored in the top 10% of your age group",
    icon: "🏅",
    category: AchievementCategory::Performance,
};

const PERSONAL_BEST: AchievementDefinition = AchievementDefinition {
    id: "personal_best",
    title: "Personal Best",
    description: "Beat your previous best score",
    icon: "📈",
    category: AchievementCategory::Improvement,
};

const CONSISTENCY_MASTER: AchievementDefinition = AchievementDefinition {
    id: "consistency_master",
    title: "Consistency Master",
    description: "Assessed 7 days in a row",
    icon: "🎯",
    category: AchievementCategory::Consistency,
};

const EARLY_BIRD: AchievementDefinition = AchievementDefinition {
    id: "early_bird",
    title: "Early Bird",
    description: "Completed an assessment before 8 AM",
    icon: "🌅",
    category: AchievementCategory::Milestone,
};

const ALL_ROUNDER: AchievementDefinition = AchievementDefinition {
    id: "all_rounder",
    title: "All-Rounder",
    description: "Completed every available sport",
    icon: "🏆",
    category: AchievementCategory::Milestone,
};

impl AchievementRule for FirstAssessment {
    fn definition(&self) -> &AchievementDefinition {
        &FIRST_ASSESSMENT
    }

    fn matches(&self, result: &PerformanceResult, history: &AchievementHistory) -> bool {
        history.prior_countable(result).next().is_none()
    }
}

impl AchievementRule for HighJumper {
    fn definition(&self) -> &AchievementDefinition {
        &HIGH_JUMPER
    }

    fn matches(&self, result: &PerformanceResult, _: &AchievementHistory) -> bool {
        result.sport_id == SportId::VerticalJump && result.score > HIGH_JUMPER_CM
    }
}

impl AchievementRule for SpeedDemon {
    fn definition(&self) -> &AchievementDefinition {
        &SPEED_DEMON
    }

    fn matches(&self, result: &PerformanceResult, _: &AchievementHistory) -> bool {
        result.sport_id == SportId::ShuttleRun && result.score < SPEED_DEMON_SECONDS
    }
}

impl AchievementRule for CoreCrusher {
    fn definition(&self) -> &AchievementDefinition {
        &CORE_CRUSHER
    }

    fn matches(&self, result: &PerformanceResult, _: &AchievementHistory) -> bool {
        result.sport_id == SportId::Situps && result.score >= CORE_CRUSHER_REPS
    }
}

impl AchievementRule for TopTenPercent {
    fn definition(&self) -> &AchievementDefinition {
        &TOP_TEN_PERCENT
    }

    fn matches(&self, result: &PerformanceResult, _: &AchievementHistory) -> bool {
        result.benchmark_comparison.percentile >= TOP_PERCENTILE
    }
}

impl AchievementRule for PersonalBest {
    fn definition(&self) -> &AchievementDefinition {
        &PERSONAL_BEST
    }

    fn matches(&self, result: &PerformanceResult, history: &AchievementHistory) -> bool {
        let direction = SportRegistry::global().get(result.sport_id).better_direction;
        let mut prior = history
            .prior_countable(result)
            .filter(|r| r.sport_id == result.sport_id)
            .peekable();
        if prior.peek().is_none() {
            return false;
        }
        prior.all(|r| direction.is_better(result.score, r.score))
    }
}

impl AchievementRule for ConsistencyMaster {
    fn definition(&self) -> &AchievementDefinition {
        &CONSISTENCY_MASTER
    }

    fn matches(&self, result: &PerformanceResult, history: &AchievementHistory) -> bool {
        let timestamps = history
            .prior_countable(result)
            .map(|r| r.timestamp)
            .chain(std::iter::once(result.timestamp));
        current_streak(timestamps, result.timestamp.date_naive()) >= CONSISTENCY_STREAK_DAYS
    }
}

impl AchievementRule for EarlyBird {
    fn definition(&self) -> &AchievementDefinition {
        &EARLY_BIRD
    }

    fn matches(&self, result: &PerformanceResult, _: &AchievementHistory) -> bool {
        result.timestamp.hour() < EARLY_BIRD_HOUR_UTC
    }
}

impl AchievementRule for AllRounder {
    fn definition(&self) -> &AchievementDefinition {
        &ALL_ROUNDER
    }

    fn matches(&self, result: &PerformanceResult, history: &AchievementHistory) -> bool {
        let completed: HashSet<SportId> = history
            .prior_countable(result)
            .map(|r| r.sport_id)
            .chain(std::iter::once(result.sport_id))
            .collect();
        SportRegistry::global()
            .available()
            .all(|sport| completed.contains(&sport.id))
    }
}

/// Runs the achievement rules in their fixed order
pub struct AchievementEvaluator {
    rules: Vec<Box<dyn AchievementRule>>,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementEvaluator {
    /// Evaluator with the built-in rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(FirstAssessment),
            Box::new(HighJumper),
            Box::new(SpeedDemon),
            Box::new(CoreCrusher),
            Box::new(TopTenPercent),
            Box::new(PersonalBest),
            Box::new(ConsistencyMaster),
            Box::new(EarlyBird),
            Box::new(AllRounder),
        ])
    }

    /// Evaluator with a custom rule list, evaluated in the given order
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn AchievementRule>>) -> Self {
        Self { rules }
    }

    /// Rule identifiers in evaluation order
    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    /// Achievements newly unlocked by `result`
    ///
    /// Cheat-flagged results unlock nothing. Rules whose achievement is already
    /// in `history` are skipped, so re-evaluating a recorded result is empty.
    #[must_use]
    pub fn evaluate(
        &self,
        result: &PerformanceResult,
        history: &AchievementHistory,
    ) -> Vec<Achievement> {
        if !result.is_countable() {
            debug!(result.id = %result.id, "Cheat-flagged result unlocks no achievements");
            return Vec::new();
        }

        let unlocked: Vec<Achievement> = self
            .rules
            .iter()
            .filter(|rule| !history.has_earned(rule.id()))
            .filter_map(|rule| rule.evaluate(result, history))
            .collect();

        if !unlocked.is_empty() {
            debug!(
                user.id = %result.user_id,
                sport = %result.sport_id,
                count = unlocked.len(),
                "Achievements unlocked"
            );
        }
        unlocked
    }
}
