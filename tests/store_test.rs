// ABOUTME: Tests for the in-memory result store and user directory
// ABOUTME: Duplicate rejection, chronological ordering, and rebuilt achievement history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::{DateTime, TimeZone, Utc};
use helpers::{athlete, raw, request};
use sports_ai::analysis::ResultIngestor;
use sports_ai::errors::ErrorCode;
use sports_ai::intelligence::AchievementHistory;
use sports_ai::models::{PerformanceResult, SportId};
use sports_ai::store::{InMemoryResultStore, ResultStore, UserDirectory};
use uuid::Uuid;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap()
}

fn result(user: Uuid, sport: SportId, score: f64, when: DateTime<Utc>) -> PerformanceResult {
    ResultIngestor::default()
        .ingest(&request(user, sport), raw(score), &AchievementHistory::new(), when)
        .unwrap()
}

#[tokio::test]
async fn test_duplicate_result_is_rejected() {
    let store = InMemoryResultStore::new();
    let stored = result(Uuid::new_v4(), SportId::Situps, 40.0, at(3, 9));

    store.insert(stored.clone()).await.unwrap();
    let err = store.insert(stored).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_results_come_back_oldest_first() {
    let store = InMemoryResultStore::new();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();

    store
        .insert(result(user, SportId::VerticalJump, 60.0, at(5, 10)))
        .await
        .unwrap();
    store
        .insert(result(other, SportId::VerticalJump, 55.0, at(4, 10)))
        .await
        .unwrap();
    store
        .insert(result(user, SportId::Situps, 38.0, at(2, 8)))
        .await
        .unwrap();

    let mine = store.results_for(user).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].sport_id, SportId::Situps);
    assert_eq!(mine[1].sport_id, SportId::VerticalJump);

    let jumps = store.results_for_sport(SportId::VerticalJump).await.unwrap();
    assert_eq!(
        jumps.iter().map(|r| r.user_id).collect::<Vec<_>>(),
        vec![other, user]
    );
    assert!(store
        .results_for(Uuid::new_v4())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_history_is_rebuilt_from_stored_results() {
    let store = InMemoryResultStore::new();
    let user = Uuid::new_v4();
    let ingestor = ResultIngestor::default();
    let mut history = AchievementHistory::new();

    for (day, score) in [(2, 52.0), (3, 64.0)] {
        let stored = ingestor
            .ingest(
                &request(user, SportId::VerticalJump),
                raw(score),
                &history,
                at(day, 9),
            )
            .unwrap();
        history.record(&stored);
        store.insert(stored).await.unwrap();
    }

    let achievements = store.achievements_for(user).await.unwrap();
    let ids: Vec<&str> = achievements.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"first_assessment"));
    assert!(ids.contains(&"high_jumper"));
    assert_eq!(
        ids.iter().filter(|id| **id == "first_assessment").count(),
        1
    );
    assert!(achievements
        .windows(2)
        .all(|pair| pair[0].earned_at <= pair[1].earned_at));
}

#[tokio::test]
async fn test_directory_lookup_and_competitors() {
    let directory = UserDirectory::new();
    assert!(directory.is_empty().await);

    let placed = athlete("Neha", Some("Pune"), Some("Maharashtra"));
    let unplaced = athlete("Dev", None, None);
    directory.upsert(placed.clone()).await;
    directory.upsert(unplaced.clone()).await;

    assert_eq!(directory.len().await, 2);
    assert_eq!(directory.get(placed.id).await.unwrap(), placed);
    assert_eq!(
        directory.get(Uuid::new_v4()).await.unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let competitors = directory.competitors().await;
    assert_eq!(competitors[&placed.id].district, "Pune");
    assert_eq!(competitors[&placed.id].name, "Neha");
    assert!(competitors[&unplaced.id].state.is_empty());
}

#[tokio::test]
async fn test_upsert_replaces_existing_profile() {
    let directory = UserDirectory::new();
    let mut profile = athlete("Isha", Some("Nagpur"), Some("Maharashtra"));
    directory.upsert(profile.clone()).await;

    profile.district = Some("Mumbai".to_owned());
    directory.upsert(profile.clone()).await;

    assert_eq!(directory.len().await, 1);
    assert_eq!(
        directory.get(profile.id).await.unwrap().district.as_deref(),
        Some("Mumbai")
    );
}
