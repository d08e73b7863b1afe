// ABOUTME: Tests for the immutable sport registry
// ABOUTME: Validates lookups, availability, scoring direction, and failure policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::cmp::Ordering;
use std::collections::HashSet;
use std::time::Duration;

use sports_ai_core::errors::{ErrorCode, LookupPolicy};
use sports_ai_core::models::{BetterDirection, SportId};
use sports_ai_core::registry::SportRegistry;

#[test]
fn test_every_sport_has_name_and_unit() {
    let registry = SportRegistry::global();
    for id in SportId::ALL {
        let sport = registry.get(id);
        assert_eq!(sport.id, id);
        assert!(!sport.name.is_empty(), "{id} has empty name");
        assert!(!sport.unit.is_empty(), "{id} has empty unit");
    }
}

#[test]
fn test_only_shotput_is_unavailable() {
    let registry = SportRegistry::global();
    for sport in registry.all() {
        assert_eq!(sport.available, sport.id != SportId::Shotput, "{}", sport.id);
    }
    assert_eq!(registry.available().count(), 4);
}

#[test]
fn test_ids_are_unique_and_in_order() {
    let registry = SportRegistry::global();
    let ids: Vec<SportId> = registry.all().map(|s| s.id).collect();
    assert_eq!(ids, SportId::ALL.to_vec());
    let unique: HashSet<SportId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), registry.len());
}

#[test]
fn test_lookup_by_string() {
    let registry = SportRegistry::global();
    let sport = registry.lookup("shuttle_run").unwrap();
    assert_eq!(sport.name, "Shuttle Run");
    assert_eq!(sport.unit, "seconds");
    assert_eq!(sport.estimated_duration, Duration::from_secs(180));

    let err = registry.lookup("curling").unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownSport);
}

#[test]
fn test_lookup_policy() {
    let registry = SportRegistry::global();
    let err = registry
        .lookup_with_policy("curling", LookupPolicy::FailFast)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownSport);

    let defaulted = registry
        .lookup_with_policy("curling", LookupPolicy::LogAndDefault)
        .unwrap();
    assert!(defaulted.is_none());

    let found = registry
        .lookup_with_policy("situps", LookupPolicy::LogAndDefault)
        .unwrap();
    assert_eq!(found.map(|s| s.id), Some(SportId::Situps));
}

#[test]
fn test_select_rejects_coming_soon() {
    let registry = SportRegistry::global();
    assert!(registry.select(SportId::VerticalJump).is_ok());
    let err = registry.select(SportId::Shotput).unwrap_err();
    assert_eq!(err.code, ErrorCode::SportUnavailable);
}

#[test]
fn test_timed_sports_are_lower_is_better() {
    let registry = SportRegistry::global();
    assert_eq!(
        registry.get(SportId::ShuttleRun).better_direction,
        BetterDirection::Lower
    );
    assert_eq!(
        registry.get(SportId::EnduranceRun).better_direction,
        BetterDirection::Lower
    );
    assert_eq!(
        registry.get(SportId::VerticalJump).better_direction,
        BetterDirection::Higher
    );
}

#[test]
fn test_better_direction_compare() {
    assert_eq!(BetterDirection::Higher.compare(78.0, 75.0), Ordering::Less);
    assert_eq!(BetterDirection::Lower.compare(11.0, 12.5), Ordering::Less);
    assert!(BetterDirection::Lower.is_better(11.0, 12.5));
    assert!(!BetterDirection::Higher.is_better(70.0, 70.0));
}

#[test]
fn test_sport_id_round_trips_through_display() {
    for id in SportId::ALL {
        assert_eq!(id.to_string().parse::<SportId>().unwrap(), id);
    }
    let json = serde_json::to_string(&SportId::VerticalJump).unwrap();
    assert_eq!(json, "\"vertical_jump\"");
}
