// ABOUTME: Integration tests for the athlete briefing composer
// ABOUTME: Totality over sparse profiles, determinism, and required facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

mod common;

use common::monday_morning;
use pace_coach_core::context::{
    compose, compose_check_in, compose_scenario, ConversationScenario,
};
use pace_coach_core::context::briefing::compose_with_activity;
use pace_coach_core::models::{defaults, AthleteProfile};

#[test]
fn briefing_contains_every_required_section() {
    let briefing = compose(&defaults::default_profile(), monday_morning());

    for section in [
        "**ATHLETE BRIEFING FILE**",
        "**ATHLETE OVERVIEW:**",
        "**PERSONAL RECORDS:**",
        "**CURRENT GOALS:**",
        "**TRAINING STATUS:**",
        "**WEEKLY TRAINING SCHEDULE:**",
        "**RECENT TRAINING SESSIONS:**",
        "**STRENGTH NUMBERS:**",
        "**NUTRITION & LIFESTYLE:**",
        "**RECOVERY PROFILE:**",
        "**CURRENT STATUS (as of today):**",
        "**COMPETITION SCHEDULE:**",
        "**SEASON PROGRESS:**",
        "**COACHING NOTES:**",
        "**TODAY'S CHECK-IN CONTEXT:**",
    ] {
        assert!(briefing.contains(section), "missing section: {section}");
    }
}

#[test]
fn briefing_carries_the_athlete_facts() {
    let briefing = compose(&defaults::default_profile(), monday_morning());

    assert!(briefing.contains("Jordan Smith"));
    assert!(briefing.contains("100m: 10.42s"));
    assert!(briefing.contains("Break 10.35s in the 100m"));
    assert!(briefing.contains("Competition Phase"));
    assert!(briefing.contains("Back Squat 1RM: 315 lbs"));
    assert!(briefing.contains("Conference Championships"));
    assert!(briefing.contains("14 days away from their next competition"));
    // monday_morning() is Monday 2025-08-11; the greeting names the day
    // and the scheduled session.
    assert!(briefing.contains("Monday, August 11, 2025"));
    assert!(briefing.contains("Speed Development - 3x30m, 3x60m"));
}

#[test]
fn briefing_is_total_over_an_empty_profile() {
    let briefing = compose(&AthleteProfile::default(), monday_morning());

    // Generic greeting and placeholders instead of a failure.
    assert!(briefing.contains("Greeting Athlete warmly by name"));
    assert!(briefing.contains("N/A"));
    assert!(briefing.contains("**WEEKLY TRAINING SCHEDULE:**"));
}

#[test]
fn briefing_is_deterministic_for_fixed_inputs() {
    let profile = defaults::default_profile();
    let now = monday_morning();

    assert_eq!(compose(&profile, now), compose(&profile, now));
}

#[test]
fn activity_lines_are_appended_when_provided() {
    let briefing = compose_with_activity(
        &defaults::default_profile(),
        monday_morning(),
        "2025-08-08: Speed Development - acceleration (55min, high intensity)",
        "Recent nutrition: averaging 3300 calories/day over 3 days",
    );

    assert!(briefing.contains("**RECENT ACTIVITY:**"));
    assert!(briefing.contains("- Training: 2025-08-08: Speed Development"));
    assert!(briefing.contains("- Nutrition: Recent nutrition: averaging 3300"));
}

#[test]
fn check_in_brief_names_the_athlete_and_todays_session() {
    let brief = compose_check_in(&defaults::default_profile(), monday_morning());

    assert!(brief.contains("Daily Check-in Context for Jordan Smith"));
    assert!(brief.contains("100m Sprint specialist in Competition Phase phase"));
    assert!(brief.contains("Primary goal: Break 10.35s in the 100m"));
    assert!(brief.contains("Today (monday): Speed Development - 3x30m, 3x60m"));
    assert!(brief.contains("Conduct a supportive daily check-in"));
}

#[test]
fn scenario_briefs_extend_the_check_in_with_a_focus_line() {
    let profile = defaults::default_profile();
    let now = monday_morning();
    let check_in = compose_check_in(&profile, now);

    let scenarios = [
        (ConversationScenario::PreWorkout, "Pre-workout preparation"),
        (ConversationScenario::PostWorkout, "Workout reflection"),
        (
            ConversationScenario::NutritionAdvice,
            "Personalized nutrition guidance",
        ),
        (ConversationScenario::GoalSetting, "Goal refinement"),
        (
            ConversationScenario::InjuryPrevention,
            "Injury prevention strategies",
        ),
    ];
    for (scenario, expected) in scenarios {
        let brief = compose_scenario(&profile, now, scenario);
        assert!(brief.starts_with(&check_in));
        assert!(brief.contains(expected), "missing focus for {scenario:?}");
    }
}
