// ABOUTME: Integration tests for the athlete profile store
// ABOUTME: Default seeding, corruption recovery, typed updates, and the session cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

mod common;

use anyhow::Result;

use common::memory_stores;
use pace_coach_core::constants::storage_keys;
use pace_coach_core::errors::CoachError;
use pace_coach_core::models::{defaults, TrainingSession};
use pace_coach_core::profile::{FieldValue, ProfileField};

#[tokio::test]
async fn read_seeds_default_profile_when_absent() -> Result<()> {
    let (storage, profiles, _) = memory_stores();

    assert_eq!(storage.get(storage_keys::ATHLETE_PROFILE).await?, None);

    let profile = profiles.read().await;
    assert_eq!(profile, defaults::default_profile());
    assert_eq!(profile.profile.name, "Jordan Smith");

    // The default was persisted, and a second read serves the same document.
    assert!(storage.get(storage_keys::ATHLETE_PROFILE).await?.is_some());
    assert_eq!(profiles.read().await, profile);

    Ok(())
}

#[tokio::test]
async fn read_falls_back_to_default_on_corrupt_document() -> Result<()> {
    let (storage, profiles, _) = memory_stores();

    storage
        .put(storage_keys::ATHLETE_PROFILE, "{not valid json")
        .await?;

    let profile = profiles.read().await;
    assert_eq!(profile, defaults::default_profile());

    // The corrupt bytes are left in place for inspection.
    assert_eq!(
        storage.get(storage_keys::ATHLETE_PROFILE).await?.as_deref(),
        Some("{not valid json")
    );

    Ok(())
}

#[tokio::test]
async fn write_then_read_round_trips() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    let mut profile = defaults::default_profile();
    profile.profile.name = "Maya Chen".into();
    profile.athletics.primary_event = "400m".into();
    profile
        .profile
        .personal_bests
        .insert("400m".into(), "53.10s".into());

    assert!(profiles.write(&profile).await);
    assert_eq!(profiles.read().await, profile);

    Ok(())
}

#[tokio::test]
async fn weight_update_recomputes_derived_fields_atomically() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    let updated = profiles
        .update_field(ProfileField::WeightLbs, FieldValue::Decimal(160.0))
        .await?;

    assert!((updated.profile.weight.lbs - 160.0).abs() < f64::EPSILON);
    assert!((updated.profile.weight.kg - 72.6).abs() < 0.05);
    assert_eq!(updated.profile.weight.display, "160 lbs");

    // The persisted document holds the same derived values.
    let stored = profiles.read().await;
    assert_eq!(stored.profile.weight, updated.profile.weight);

    Ok(())
}

#[tokio::test]
async fn weight_conversion_is_idempotent_within_one_pound() {
    use pace_coach_core::models::Weight;

    for lbs in [120_u32, 145, 160, 185, 220] {
        let weight = Weight::from_lbs(f64::from(lbs));
        let back = Weight::from_kg(weight.kg);
        assert!(
            (back.lbs - f64::from(lbs)).abs() <= 1.0,
            "lbs -> kg -> lbs drifted: {lbs} became {}",
            back.lbs
        );
    }
}

#[tokio::test]
async fn height_update_recomputes_feet_inches_and_display() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    let updated = profiles
        .update_field(ProfileField::HeightCm, FieldValue::Decimal(178.0))
        .await?;

    assert_eq!(updated.profile.height.feet, 5);
    assert_eq!(updated.profile.height.inches, 10);
    assert_eq!(updated.profile.height.display, "5'10\"");

    Ok(())
}

#[tokio::test]
async fn update_field_rejects_mismatched_value_kinds() {
    let (_, profiles, _) = memory_stores();

    let err = profiles
        .update_field(ProfileField::Age, FieldValue::Text("twenty".into()))
        .await;
    assert!(matches!(err, Err(CoachError::InvalidField { .. })));
}

#[tokio::test]
async fn recent_sessions_keep_only_ten_newest_in_append_order() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    // Start from an empty session list.
    assert!(
        profiles
            .update_training(|training| training.recent_sessions.clear())
            .await
    );

    for n in 1..=11 {
        let session = TrainingSession {
            date: format!("2025-07-{n:02}"),
            session_type: format!("Session {n}"),
            ..TrainingSession::default()
        };
        assert!(profiles.add_training_session(session).await);
    }

    let profile = profiles.read().await;
    let sessions = &profile.training.recent_sessions;
    assert_eq!(sessions.len(), 10);

    // Newest first: session 11 leads, session 2 trails, session 1 evicted.
    assert_eq!(sessions[0].session_type, "Session 11");
    assert_eq!(sessions[9].session_type, "Session 2");
    assert!(!sessions.iter().any(|s| s.session_type == "Session 1"));

    Ok(())
}

#[tokio::test]
async fn rpe_is_clamped_into_range_on_append() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    let session = TrainingSession {
        date: "2025-08-09".into(),
        session_type: "Time Trial".into(),
        rpe: 14,
        ..TrainingSession::default()
    };
    assert!(profiles.add_training_session(session).await);

    let profile = profiles.read().await;
    assert_eq!(profile.training.recent_sessions[0].rpe, 10);

    Ok(())
}

#[tokio::test]
async fn section_merges_preserve_unrelated_fields() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    let before = profiles.read().await;
    assert!(
        profiles
            .update_current_status(|status| {
                status.energy = "Low".into();
                status.soreness = "Tight hamstrings".into();
            })
            .await
    );

    let after = profiles.read().await;
    assert_eq!(after.lifestyle.current_status.energy, "Low");
    assert_eq!(after.lifestyle.current_status.soreness, "Tight hamstrings");
    // Untouched fields in the same section survive the merge.
    assert_eq!(
        after.lifestyle.current_status.next_competition,
        before.lifestyle.current_status.next_competition
    );
    assert_eq!(after.training, before.training);

    Ok(())
}

#[tokio::test]
async fn personal_best_merge_replaces_and_adds() -> Result<()> {
    let (_, profiles, _) = memory_stores();

    assert!(
        profiles
            .update_personal_bests([
                ("100m".to_owned(), "10.39s".to_owned()),
                ("60m Indoor".to_owned(), "6.79s".to_owned()),
            ])
            .await
    );

    let profile = profiles.read().await;
    assert_eq!(
        profile.profile.personal_bests.get("100m").map(String::as_str),
        Some("10.39s")
    );
    assert_eq!(
        profile
            .profile
            .personal_bests
            .get("60m Indoor")
            .map(String::as_str),
        Some("6.79s")
    );
    // Pre-existing events remain.
    assert!(profile.profile.personal_bests.contains_key("200m"));

    Ok(())
}

#[tokio::test]
async fn clear_reseeds_default_on_next_read() -> Result<()> {
    let (storage, profiles, _) = memory_stores();

    let mut profile = profiles.read().await;
    profile.profile.name = "Someone Else".into();
    assert!(profiles.write(&profile).await);

    assert!(profiles.clear().await);
    assert_eq!(storage.get(storage_keys::ATHLETE_PROFILE).await?, None);

    assert_eq!(profiles.read().await, defaults::default_profile());

    Ok(())
}
