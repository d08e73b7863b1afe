// ABOUTME: Deterministic demo population for the CLI and screen controllers
// ABOUTME: Seeds the sample athletes, the vertical jump board, and the current user's history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use sports_ai_intelligence::AchievementHistory;
use tracing::info;
use uuid::Uuid;

use super::{ResultStore, UserDirectory};
use crate::analysis::{AnalysisRequest, RawAnalysis, ResultIngestor, VideoReference};
use crate::errors::{AppError, AppResult};
use crate::models::{GenderCategory, SportId, UserProfile, UserRole};
use crate::registry::SportRegistry;

const DEMO_SEED: u64 = 0x5350_4f52_5453;

/// Id of the signed-in demo user
pub const CURRENT_USER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);

struct DemoAthlete {
    name: &'static str,
    district: &'static str,
    state: &'static str,
    gender: GenderCategory,
    birth_year: i32,
}

const fn athlete(
    name: &'static str,
    district: &'static str,
    state: &'static str,
    gender: GenderCategory,
    birth_year: i32,
) -> DemoAthlete {
    DemoAthlete {
        name,
        district,
        state,
        gender,
        birth_year,
    }
}

/// Top of the national vertical jump board with fixed scores
static PODIUM: [(DemoAthlete, f64); 5] = [
    (athlete("Rahul Sharma", "Mumbai", "Maharashtra", GenderCategory::Male, 2001), 78.0),
    (athlete("Priya Patel", "Ahmedabad", "Gujarat", GenderCategory::Female, 2002), 75.0),
    (athlete("Amit Kumar", "Delhi", "Delhi", GenderCategory::Male, 2000), 73.0),
    (athlete("Sneha Reddy", "Hyderabad", "Telangana", GenderCategory::Female, 2003), 71.0),
    (athlete("Vikram Singh", "Jaipur", "Rajasthan", GenderCategory::Male, 1999), 70.0),
];

/// Athletes ranked between the podium and the current user
static FIELD: [DemoAthlete; 6] = [
    athlete("Arjun Mehta", "Pune", "Maharashtra", GenderCategory::Male, 2001),
    athlete("Kavya Nair", "Kochi", "Kerala", GenderCategory::Female, 2002),
    athlete("Rohan Gupta", "Lucknow", "Uttar Pradesh", GenderCategory::Male, 2000),
    athlete("Ananya Iyer", "Chennai", "Tamil Nadu", GenderCategory::Female, 2004),
    athlete("Karan Malhotra", "Mumbai", "Maharashtra", GenderCategory::Male, 1998),
    athlete("Meera Joshi", "Bhopal", "Madhya Pradesh", GenderCategory::Female, 2003),
];

/// Current user's assessments: (day of January 2025, hour, minute, sport, score)
const CURRENT_USER_HISTORY: [(u32, u32, u32, SportId, f64); 7] = [
    (2, 7, 30, SportId::Situps, 42.0),
    (3, 9, 0, SportId::EnduranceRun, 505.0),
    (4, 16, 0, SportId::VerticalJump, 58.0),
    (5, 7, 45, SportId::ShuttleRun, 12.8),
    (6, 11, 0, SportId::VerticalJump, 62.0),
    (7, 14, 30, SportId::ShuttleRun, 12.5),
    (8, 10, 0, SportId::VerticalJump, 65.0),
];

/// Handles to the seeded population
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPopulation {
    /// Signed-in user
    pub current_user: Uuid,
    /// Every seeded user, current user last
    pub users: Vec<Uuid>,
    /// Reference "now" the demo data is arranged around
    pub now: DateTime<Utc>,
}

fn january(day: u32, hour: u32, minute: u32) -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, minute, 0)
        .single()
        .ok_or_else(|| AppError::internal(format!("invalid demo timestamp 2025-01-{day}")))
}

fn birth_date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(format!("invalid demo birth date {year}-{month}-{day}")))
}

fn email_for(name: &str) -> String {
    format!("{}@email.com", name.to_lowercase().replace(' ', "."))
}

/// Populate `store` and `directory` with the demo athletes
///
/// Results go through `ingestor` so benchmark comparisons and achievements are
/// the same as for a live assessment. Output is identical across runs apart
/// from result ids.
///
/// # Errors
///
/// Propagates ingestion and store failures.
pub async fn seed_demo_data(
    store: &dyn ResultStore,
    directory: &UserDirectory,
    ingestor: &ResultIngestor,
) -> AppResult<DemoPopulation> {
    let mut rng = ChaCha8Rng::seed_from_u64(DEMO_SEED);
    let joined = january(1, 0, 0)?;
    let mut users = Vec::with_capacity(PODIUM.len() + FIELD.len() + 1);

    let field_scores: Vec<f64> = FIELD
        .iter()
        .map(|_| (rng.gen_range(66.0_f64..69.9) * 10.0).round() / 10.0)
        .collect();
    let board = PODIUM
        .iter()
        .map(|(who, score)| (who, *score))
        .chain(FIELD.iter().zip(field_scores));

    for (index, (who, score)) in board.enumerate() {
        let user_id = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_1000 + index as u128);
        let profile = UserProfile {
            id: user_id,
            email: email_for(who.name),
            phone: None,
            name: who.name.to_owned(),
            role: UserRole::Athlete,
            avatar: None,
            district: Some(who.district.to_owned()),
            state: Some(who.state.to_owned()),
            date_of_birth: Some(birth_date(who.birth_year, 6, 1)?),
            gender: Some(who.gender),
            preferred_language: "en".to_owned(),
            created_at: joined,
        };
        let day = 2 + (index as u32 % 6);
        let at = january(day, 9 + (index as u32 % 8), 0)?;
        let mut history = AchievementHistory::new();
        record(store, ingestor, &profile, &mut history, SportId::VerticalJump, score, at, &mut rng)
            .await?;
        directory.upsert(profile).await;
        users.push(user_id);
    }

    let current = UserProfile {
        id: CURRENT_USER_ID,
        email: "alex.johnson@email.com".to_owned(),
        phone: Some("+91 98765 43210".to_owned()),
        name: "Alex Johnson".to_owned(),
        role: UserRole::Athlete,
        avatar: None,
        district: Some("Mumbai".to_owned()),
        state: Some("Maharashtra".to_owned()),
        date_of_birth: Some(birth_date(1998, 5, 15)?),
        gender: Some(GenderCategory::Male),
        preferred_language: "en".to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2024, 12, 1, 0, 0, 0)
            .single()
            .unwrap_or(joined),
    };
    let mut history = AchievementHistory::new();
    for (day, hour, minute, sport, score) in CURRENT_USER_HISTORY {
        let at = january(day, hour, minute)?;
        record(store, ingestor, &current, &mut history, sport, score, at, &mut rng)
            .await?;
    }
    directory.upsert(current).await;
    users.push(CURRENT_USER_ID);

    info!(
        users = users.len(),
        achievements = history.achievements().len(),
        "Demo data seeded"
    );
    Ok(DemoPopulation {
        current_user: CURRENT_USER_ID,
        users,
        now: january(8, 20, 0)?,
    })
}

#[allow(clippy::too_many_arguments)]
async fn record(
    store: &dyn ResultStore,
    ingestor: &ResultIngestor,
    profile: &UserProfile,
    history: &mut AchievementHistory,
    sport: SportId,
    score: f64,
    at: DateTime<Utc>,
    rng: &mut ChaCha8Rng,
) -> AppResult<()> {
    let definition = SportRegistry::global().get(sport);
    let request = AnalysisRequest {
        video: VideoReference::new(
            format!("demo://{}/{}", profile.id, at.timestamp()),
            definition.estimated_duration,
        ),
        sport,
        user_id: profile.id,
        age_group: profile.age_group(at.date_naive()),
        gender: profile.gender_category(),
    };
    let raw = RawAnalysis {
        score,
        confidence: (rng.gen_range(0.8_f64..0.98) * 100.0).round() / 100.0,
        technique_score: rng.gen_range(65..=95),
        cheat_detected: false,
    };

    let result = ingestor.ingest(&request, raw, history, at)?;
    history.record(&result);
    store.insert(result).await
}
