// ABOUTME: Integration tests for the satellite-document logbook
// ABOUTME: Log appends, conversation history cap, preferences, export and clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

mod common;

use anyhow::Result;

use common::memory_stores;
use pace_coach_core::models::{
    defaults, ConversationRecord, NutritionLogEntry, PerformanceEntry, TrainingLogEntry,
    UserPreferences,
};

#[tokio::test]
async fn training_logs_append_with_ids_and_timestamps() -> Result<()> {
    let (_, _, logbook) = memory_stores();

    let first = TrainingLogEntry::record(
        "2025-08-05",
        "Tempo",
        "rhythm",
        60,
        "medium",
        "6x100m @ 75%",
    );
    let second = TrainingLogEntry::record(
        "2025-08-06",
        "Strength Training",
        "lower body",
        75,
        "high",
        "squat day",
    );
    assert_ne!(first.id, second.id);

    assert!(logbook.add_training_log(first.clone()).await);
    assert!(logbook.add_training_log(second.clone()).await);

    let logs = logbook.training_logs().await;
    assert_eq!(logs, vec![first, second]);

    Ok(())
}

#[tokio::test]
async fn conversation_history_evicts_oldest_beyond_fifty() -> Result<()> {
    let (_, _, logbook) = memory_stores();

    for n in 0..55_u64 {
        let record = ConversationRecord::record(n, Vec::new());
        assert!(logbook.add_conversation(record).await);
    }

    let history = logbook.conversation_history().await;
    assert_eq!(history.len(), 50);
    // The five oldest (durations 0..4) were evicted, order preserved.
    assert_eq!(history[0].duration_seconds, 5);
    assert_eq!(history[49].duration_seconds, 54);

    Ok(())
}

#[tokio::test]
async fn preferences_default_and_merge() -> Result<()> {
    let (_, _, logbook) = memory_stores();

    assert_eq!(logbook.preferences().await, UserPreferences::default());

    assert!(
        logbook
            .update_preferences(|preferences| {
                preferences.theme = "dark".into();
                preferences.units = "metric".into();
            })
            .await
    );

    let preferences = logbook.preferences().await;
    assert_eq!(preferences.theme, "dark");
    assert_eq!(preferences.units, "metric");
    // Untouched fields keep their defaults.
    assert!(preferences.notifications);
    assert_eq!(preferences.language, "en");

    Ok(())
}

#[tokio::test]
async fn context_summaries_cover_recent_entries() -> Result<()> {
    let (_, _, logbook) = memory_stores();

    assert_eq!(
        logbook.recent_training_summary().await,
        "No recent training data logged."
    );
    assert_eq!(
        logbook.nutrition_summary().await,
        "No recent nutrition data logged."
    );

    logbook
        .add_training_log(TrainingLogEntry::record(
            "2025-08-08",
            "Speed Development",
            "acceleration",
            55,
            "high",
            "blocks",
        ))
        .await;
    logbook
        .add_nutrition_log(NutritionLogEntry::record("2025-08-07", 3400, 210, 430, 95, ""))
        .await;
    logbook
        .add_nutrition_log(NutritionLogEntry::record("2025-08-08", 3200, 205, 410, 90, ""))
        .await;

    let training = logbook.recent_training_summary().await;
    assert!(training.contains("2025-08-08: Speed Development - acceleration (55min, high intensity)"));

    // (3400 + 3200) / 2 = 3300
    assert_eq!(
        logbook.nutrition_summary().await,
        "Recent nutrition: averaging 3300 calories/day over 2 days"
    );

    Ok(())
}

#[tokio::test]
async fn export_bundles_every_document() -> Result<()> {
    let (_, profiles, logbook) = memory_stores();

    logbook
        .add_training_log(TrainingLogEntry::record(
            "2025-08-08",
            "Speed Development",
            "acceleration",
            55,
            "high",
            "",
        ))
        .await;
    logbook
        .add_performance(PerformanceEntry::record(
            "100m",
            "10.45s (wind +1.2)",
            "Dual Meet",
            "",
        ))
        .await;

    let export = logbook.export_all(&profiles).await;
    assert_eq!(export.athlete_profile, defaults::default_profile());
    assert_eq!(export.training_logs.len(), 1);
    assert_eq!(export.performance_data.len(), 1);
    assert_eq!(export.user_preferences, UserPreferences::default());
    assert!(export.nutrition_logs.is_empty());
    assert!(export.conversation_history.is_empty());

    Ok(())
}

#[tokio::test]
async fn clear_all_removes_everything_and_reseeds_defaults() -> Result<()> {
    let (_, profiles, logbook) = memory_stores();

    let mut profile = profiles.read().await;
    profile.profile.name = "Someone Else".into();
    assert!(profiles.write(&profile).await);
    logbook
        .add_training_log(TrainingLogEntry::record(
            "2025-08-08",
            "Tempo",
            "rhythm",
            60,
            "medium",
            "",
        ))
        .await;
    logbook
        .update_preferences(|preferences| preferences.theme = "dark".into())
        .await;

    assert!(logbook.clear_all(&profiles).await);

    assert_eq!(profiles.read().await, defaults::default_profile());
    assert!(logbook.training_logs().await.is_empty());
    assert_eq!(logbook.preferences().await, UserPreferences::default());

    Ok(())
}

#[tokio::test]
async fn clearing_conversation_history_leaves_other_documents() -> Result<()> {
    let (_, _, logbook) = memory_stores();

    logbook
        .add_conversation(ConversationRecord::record(120, Vec::new()))
        .await;
    logbook
        .add_training_log(TrainingLogEntry::record(
            "2025-08-08",
            "Tempo",
            "rhythm",
            60,
            "medium",
            "",
        ))
        .await;

    assert!(logbook.clear_conversation_history().await);
    assert!(logbook.conversation_history().await.is_empty());
    assert_eq!(logbook.training_logs().await.len(), 1);

    Ok(())
}
