// ABOUTME: Compact profile summary for read-only dashboard surfaces
// ABOUTME: Headline facts plus a data-completeness score over the required fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Compact profile summary.
//!
//! The dashboard's read-only surfaces show a handful of headline facts
//! rather than the full briefing. The summary also scores how complete
//! the profile is, so the settings editor can nudge the athlete to fill
//! in what the coach is missing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{days_until_competition, text_or, text_or_na};
use crate::constants::fallbacks;
use crate::models::AthleteProfile;

/// Headline facts for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    /// Athlete display name
    pub athlete_name: String,
    /// Main competition event
    pub primary_event: String,
    /// Best mark for the primary event (falls back to the 100m mark)
    pub personal_best: String,
    /// Headline goal
    pub primary_goal: String,
    /// Next competition name
    pub next_competition: String,
    /// Days until the next competition
    pub days_until_competition: i64,
    /// Current training phase
    pub current_phase: String,
    /// Most recent session type
    pub last_session_type: String,
    /// Most recent session RPE
    pub last_session_rpe: u8,
    /// Self-reported energy level
    pub energy: String,
    /// Self-reported motivation level
    pub motivation: String,
    /// Percentage of required profile fields that are filled in
    pub data_completeness: u8,
}

/// Build the dashboard summary for a profile.
#[must_use]
pub fn summarize(profile: &AthleteProfile, now: DateTime<Utc>) -> ProfileSummary {
    let identity = &profile.profile;
    let status = &profile.lifestyle.current_status;
    let last_session = profile.training.recent_sessions.first();

    let primary_event = text_or(&profile.athletics.primary_event, fallbacks::PRIMARY_EVENT);
    let personal_best = identity
        .personal_bests
        .get(primary_event)
        .or_else(|| identity.personal_bests.get("100m"))
        .map_or(fallbacks::PLACEHOLDER, |mark| text_or_na(mark));

    ProfileSummary {
        athlete_name: text_or(&identity.name, fallbacks::ATHLETE_NAME).to_owned(),
        primary_event: primary_event.to_owned(),
        personal_best: personal_best.to_owned(),
        primary_goal: text_or_na(&identity.goals.primary).to_owned(),
        next_competition: text_or_na(&status.next_competition).to_owned(),
        days_until_competition: days_until_competition(status, now),
        current_phase: text_or_na(&profile.training.current_phase).to_owned(),
        last_session_type: last_session
            .map_or("No recent workout", |session| {
                text_or(&session.session_type, "No recent workout")
            })
            .to_owned(),
        last_session_rpe: last_session.map_or(0, |session| session.rpe),
        energy: text_or_na(&status.energy).to_owned(),
        motivation: text_or_na(&status.motivation).to_owned(),
        data_completeness: data_completeness(profile),
    }
}

/// Percentage of the required profile fields that are filled in.
///
/// The required set mirrors what the coach needs before advice gets
/// specific: identity basics, measurements, the primary event, the
/// headline goal, and the training phase.
#[must_use]
pub fn data_completeness(profile: &AthleteProfile) -> u8 {
    let identity = &profile.profile;
    let filled = [
        !identity.name.trim().is_empty(),
        identity.age > 0,
        identity.weight.lbs > 0.0,
        identity.height.cm > 0.0,
        !profile.athletics.primary_event.trim().is_empty(),
        !identity.goals.primary.trim().is_empty(),
        !profile.training.current_phase.trim().is_empty(),
    ];

    let completed = filled.iter().filter(|&&present| present).count();
    ((completed as f64 / filled.len() as f64) * 100.0).round() as u8
}
