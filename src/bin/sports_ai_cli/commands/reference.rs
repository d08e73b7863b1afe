// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Reference commands that need no stored data
// ABOUTME: Sport listing, translations, dictionaries, and benchmark evaluation

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use sports_ai::config::AppConfig;
use sports_ai::intelligence::{BenchmarkEvaluator, StaticBenchmarkTable};
use sports_ai::localization::{Language, LocalizationTable};
use sports_ai::models::{AgeGroup, GenderCategory, SportId};
use sports_ai::presentation::{format_score, SportCardModel};
use sports_ai::registry::SportRegistry;

use crate::helpers::output::emit;

pub fn sports(available_only: bool, output: Option<&Path>) -> Result<()> {
    let cards: Vec<SportCardModel> = SportCardModel::all()
        .into_iter()
        .filter(|card| !available_only || !card.disabled)
        .collect();
    emit(&cards, output)
}

pub fn translate(key: &str, language: Language, output: Option<&Path>) -> Result<()> {
    let text = LocalizationTable::global().translate(language, key);
    emit(
        &json!({ "language": language.code(), "key": key, "text": text }),
        output,
    )
}

pub fn dictionary(code: &str, output: Option<&Path>) -> Result<()> {
    let entries = LocalizationTable::global().dictionary(code)?;
    emit(&entries, output)
}

pub fn evaluate(
    sport: SportId,
    score: f64,
    age_group: AgeGroup,
    gender: GenderCategory,
    output: Option<&Path>,
) -> Result<()> {
    let config = AppConfig::from_env()?;
    let evaluator = BenchmarkEvaluator::new(StaticBenchmarkTable::seeded(), config.rating);
    let comparison = evaluator.comparison(sport, score, age_group, gender)?;
    let definition = SportRegistry::global().get(sport);

    emit(
        &json!({
            "sport": sport,
            "score": format_score(score, definition.unit),
            "comparison": comparison,
        }),
        output,
    )
}
