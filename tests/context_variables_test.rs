// ABOUTME: Integration tests for the flat context-variable projection
// ABOUTME: Purity, key completeness, and the derived day/workout variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

mod common;

use anyhow::Result;
use chrono::NaiveDate;

use common::monday_morning;
use pace_coach_core::context::{days_until_competition, map_to_variables, ContextValue};
use pace_coach_core::models::{defaults, AthleteProfile};

/// Every key the projection documents. A missing profile field must fall
/// back, never drop the key.
const DOCUMENTED_KEYS: [&str; 25] = [
    "athlete_name",
    "athlete_age",
    "athlete_event",
    "athlete_level",
    "pb_100m",
    "pb_200m",
    "pb_400m",
    "current_phase",
    "current_energy",
    "current_motivation",
    "last_session_type",
    "last_session_rpe",
    "last_session_date",
    "primary_goal",
    "next_competition",
    "days_until_comp",
    "squat_1rm",
    "clean_1rm",
    "today_date",
    "today_workout",
    "sleep_quality",
    "stress_level",
    "soreness",
    "hydration",
    "last_competition",
];

#[test]
fn projection_is_pure_and_byte_identical() -> Result<()> {
    let profile = defaults::default_profile();
    let now = monday_morning();

    let first = serde_json::to_string(&map_to_variables(&profile, now))?;
    let second = serde_json::to_string(&map_to_variables(&profile, now))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn every_documented_key_is_present_for_an_empty_profile() {
    let variables = map_to_variables(&AthleteProfile::default(), monday_morning());

    for key in DOCUMENTED_KEYS {
        assert!(variables.contains_key(key), "missing key: {key}");
    }
    assert_eq!(variables.len(), DOCUMENTED_KEYS.len());

    // Fallbacks fill in for the missing fields.
    assert_eq!(
        variables.get("athlete_name"),
        Some(&ContextValue::Text("Athlete".into()))
    );
    assert_eq!(
        variables.get("athlete_age"),
        Some(&ContextValue::Number(20))
    );
    assert_eq!(
        variables.get("today_workout"),
        Some(&ContextValue::Text("Recovery".into()))
    );
}

#[test]
fn monday_schedule_and_stored_days_project_as_documented() {
    let mut profile = defaults::default_profile();
    profile
        .training
        .weekly_schedule
        .insert("monday".into(), "Speed Development".into());
    profile.lifestyle.current_status.days_until_competition = 14;
    profile.lifestyle.current_status.next_competition_date = None;

    let variables = map_to_variables(&profile, monday_morning());

    assert_eq!(
        variables.get("days_until_comp"),
        Some(&ContextValue::Number(14))
    );
    assert_eq!(
        variables.get("today_workout"),
        Some(&ContextValue::Text("Speed Development".into()))
    );
}

#[test]
fn stored_competition_date_overrides_the_integer() {
    let mut profile = defaults::default_profile();
    profile.lifestyle.current_status.days_until_competition = 99;
    profile.lifestyle.current_status.next_competition_date =
        NaiveDate::from_ymd_opt(2025, 8, 25);

    // monday_morning() is 2025-08-11.
    let variables = map_to_variables(&profile, monday_morning());
    assert_eq!(
        variables.get("days_until_comp"),
        Some(&ContextValue::Number(14))
    );
}

#[test]
fn past_competition_dates_clamp_to_zero() {
    let mut profile = defaults::default_profile();
    profile.lifestyle.current_status.next_competition_date =
        NaiveDate::from_ymd_opt(2025, 8, 1);

    assert_eq!(
        days_until_competition(&profile.lifestyle.current_status, monday_morning()),
        0
    );
}

#[test]
fn summary_reports_headline_facts_and_full_completeness() {
    use pace_coach_core::context::{data_completeness, summarize};

    let profile = defaults::default_profile();
    let summary = summarize(&profile, monday_morning());

    assert_eq!(summary.athlete_name, "Jordan Smith");
    assert_eq!(summary.primary_event, "100m Sprint");
    // No mark is stored under "100m Sprint", so the 100m mark stands in.
    assert_eq!(summary.personal_best, "10.42s");
    assert_eq!(summary.days_until_competition, 14);
    assert_eq!(summary.last_session_type, "Speed Development");
    assert_eq!(summary.last_session_rpe, 7);
    assert_eq!(summary.data_completeness, 100);

    assert_eq!(data_completeness(&profile), 100);
}

#[test]
fn summary_degrades_gracefully_for_an_empty_profile() {
    use pace_coach_core::context::summarize;

    let summary = summarize(&AthleteProfile::default(), monday_morning());

    assert_eq!(summary.athlete_name, "Athlete");
    assert_eq!(summary.personal_best, "N/A");
    assert_eq!(summary.last_session_type, "No recent workout");
    assert_eq!(summary.last_session_rpe, 0);
    assert_eq!(summary.data_completeness, 0);
}

#[test]
fn profile_facts_flow_through_the_projection() {
    let profile = defaults::default_profile();
    let variables = map_to_variables(&profile, monday_morning());

    assert_eq!(
        variables.get("athlete_name"),
        Some(&ContextValue::Text("Jordan Smith".into()))
    );
    assert_eq!(
        variables.get("pb_100m"),
        Some(&ContextValue::Text("10.42s".into()))
    );
    assert_eq!(
        variables.get("squat_1rm"),
        Some(&ContextValue::Text("315 lbs".into()))
    );
    assert_eq!(
        variables.get("last_session_rpe"),
        Some(&ContextValue::Number(7))
    );
    assert_eq!(
        variables.get("today_date"),
        Some(&ContextValue::Text("2025-08-11".into()))
    );
}
