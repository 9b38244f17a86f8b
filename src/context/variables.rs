// ABOUTME: Flat context-variable projection of the athlete profile
// ABOUTME: Fixed key set with per-key fallbacks, pure over (profile, now)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Flat context variables for the voice agent.
//!
//! The vendor's templating layer only accepts scalars, so the profile is
//! projected into a fixed set of named string/number variables. Every
//! documented key is always present — a missing profile field resolves to
//! that key's fallback, never to an absent key.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{days_until_competition, text_or, text_or_na, todays_workout};
use crate::constants::fallbacks;
use crate::models::AthleteProfile;

/// A scalar context variable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(i64),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Project an athlete profile into the documented context-variable set.
///
/// Pure: identical `(profile, now)` inputs yield identical output, and the
/// `BTreeMap` iterates in a fixed key order. `now` drives only
/// `today_date`, `today_workout`, and the date-derived
/// `days_until_comp`.
#[must_use]
pub fn map_to_variables(
    profile: &AthleteProfile,
    now: DateTime<Utc>,
) -> BTreeMap<String, ContextValue> {
    let identity = &profile.profile;
    let status = &profile.lifestyle.current_status;
    let training = &profile.training;
    let today = now.format("%Y-%m-%d").to_string();

    let last_session = training.recent_sessions.first();

    let mut variables = BTreeMap::new();
    let mut set = |key: &str, value: ContextValue| {
        variables.insert(key.to_owned(), value);
    };

    // Basic profile
    set(
        "athlete_name",
        text_or(&identity.name, fallbacks::ATHLETE_NAME).into(),
    );
    set(
        "athlete_age",
        if identity.age == 0 {
            fallbacks::ATHLETE_AGE.into()
        } else {
            i64::from(identity.age).into()
        },
    );
    set(
        "athlete_event",
        text_or(&profile.athletics.primary_event, fallbacks::PRIMARY_EVENT).into(),
    );
    set(
        "athlete_level",
        text_or(
            &profile.athletics.experience.level,
            fallbacks::COMPETITION_LEVEL,
        )
        .into(),
    );

    // Personal bests
    for (key, event) in [("pb_100m", "100m"), ("pb_200m", "200m"), ("pb_400m", "400m")] {
        let mark = identity
            .personal_bests
            .get(event)
            .map_or(fallbacks::PLACEHOLDER, |mark| text_or_na(mark));
        set(key, mark.into());
    }

    // Current training
    set(
        "current_phase",
        text_or(&training.current_phase, fallbacks::TRAINING_PHASE).into(),
    );
    set(
        "current_energy",
        text_or(&status.energy, fallbacks::ENERGY).into(),
    );
    set(
        "current_motivation",
        text_or(&status.motivation, fallbacks::MOTIVATION).into(),
    );

    // Recent performance
    set(
        "last_session_type",
        last_session.map_or(fallbacks::SESSION_TYPE, |s| {
            text_or(&s.session_type, fallbacks::SESSION_TYPE)
        })
        .into(),
    );
    set(
        "last_session_rpe",
        last_session.map_or(fallbacks::SESSION_RPE, |s| i64::from(s.rpe)).into(),
    );
    set(
        "last_session_date",
        last_session
            .map_or_else(|| today.clone(), |s| text_or(&s.date, &today).to_owned())
            .into(),
    );

    // Goals & competition
    set(
        "primary_goal",
        text_or(&identity.goals.primary, fallbacks::PRIMARY_GOAL).into(),
    );
    set(
        "next_competition",
        text_or(&status.next_competition, fallbacks::NEXT_COMPETITION).into(),
    );
    set("days_until_comp", days_until_competition(status, now).into());

    // Strength & power
    set(
        "squat_1rm",
        training
            .strength_stats
            .get("Back Squat")
            .map_or(fallbacks::SQUAT_1RM, |mark| text_or_na(mark))
            .into(),
    );
    set(
        "clean_1rm",
        training
            .strength_stats
            .get("Power Clean")
            .map_or(fallbacks::CLEAN_1RM, |mark| text_or_na(mark))
            .into(),
    );

    // Today's context
    set("today_date", today.into());
    set("today_workout", todays_workout(training, now).into());

    // Recovery & wellness
    set(
        "sleep_quality",
        text_or(
            &profile.lifestyle.recovery.sleep_quality,
            fallbacks::SLEEP_QUALITY,
        )
        .into(),
    );
    set(
        "stress_level",
        text_or(&status.stress, fallbacks::STRESS_LEVEL).into(),
    );
    set(
        "soreness",
        text_or(&status.soreness, fallbacks::SORENESS).into(),
    );

    // Nutrition
    set(
        "hydration",
        text_or(&profile.lifestyle.nutrition.hydration, fallbacks::HYDRATION).into(),
    );

    // Competition history
    set(
        "last_competition",
        text_or_na(&status.last_competition).into(),
    );

    variables
}
