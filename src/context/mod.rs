// ABOUTME: Conversational context generation - profile projections for the voice agent
// ABOUTME: Flat context variables and the long-form briefing, both pure over (profile, now)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Conversational Context
//!
//! Projections of the athlete profile handed to the external voice agent:
//! a flat variable map ([`variables`]) for vendors that template over
//! scalars, and a long-form briefing ([`briefing`]) used as the agent's
//! system context. Both are pure functions of `(profile, now)` — the
//! caller supplies the clock, so identical inputs always produce
//! identical output.

/// Long-form briefing composition
pub mod briefing;
/// Compact dashboard summary with completeness scoring
pub mod summary;
/// Flat context-variable projection
pub mod variables;

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::constants::fallbacks;
use crate::models::{CurrentStatus, Training};

pub use briefing::{compose, compose_check_in, compose_scenario, ConversationScenario};
pub use summary::{data_completeness, summarize, ProfileSummary};
pub use variables::{map_to_variables, ContextValue};

/// Resolve a possibly-empty profile field, substituting `fallback` for
/// the empty string. Both projections route every field access through
/// this (or [`text_or_na`]) so missing-data behavior is specified in one
/// place.
#[must_use]
pub fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Resolve a possibly-empty profile field with the standard placeholder.
#[must_use]
pub fn text_or_na(value: &str) -> &str {
    text_or(value, fallbacks::PLACEHOLDER)
}

/// Days until the next competition.
///
/// The stored competition date is authoritative when present: the count is
/// the number of calendar days from `now`'s date to the competition date,
/// clamped to zero for past dates. Without a date, the stored integer is
/// used verbatim.
#[must_use]
pub fn days_until_competition(status: &CurrentStatus, now: DateTime<Utc>) -> i64 {
    status.next_competition_date.map_or_else(
        || i64::from(status.days_until_competition),
        |date| (date - now.date_naive()).num_days().max(0),
    )
}

/// The workout scheduled for `now`'s weekday, defaulting to a recovery
/// placeholder when the schedule has no entry for that day.
#[must_use]
pub fn todays_workout(training: &Training, now: DateTime<Utc>) -> String {
    training
        .weekly_schedule
        .get(weekday_key(now.weekday()))
        .map_or_else(|| fallbacks::TODAY_WORKOUT.to_owned(), Clone::clone)
}

/// Lowercase schedule key for a weekday.
#[must_use]
pub const fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
