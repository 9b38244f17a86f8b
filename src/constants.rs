// ABOUTME: Centralized constants for storage keys, document caps, and fallback values
// ABOUTME: Single source of truth for the pace_* storage namespace and unit conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Centralized constants used across the crate.
//!
//! Every persisted document key, cap, and fallback literal lives here so the
//! stores, the context projections, and the tests agree on one value.

/// Storage keys for the persisted JSON documents.
///
/// One JSON document is stored per key. The `pace_` prefix namespaces the
/// documents within whatever backend directory or map they land in.
pub mod storage_keys {
    /// The single athlete profile document
    pub const ATHLETE_PROFILE: &str = "pace_athlete_profile";
    /// Standalone training log entries
    pub const TRAINING_LOGS: &str = "pace_training_logs";
    /// Standalone nutrition log entries
    pub const NUTRITION_LOGS: &str = "pace_nutrition_logs";
    /// User preferences document
    pub const USER_PREFERENCES: &str = "pace_user_preferences";
    /// Conversation history, capped at `limits::CONVERSATION_HISTORY_MAX`
    pub const CONVERSATION_HISTORY: &str = "pace_conversations";
    /// Performance (competition result) entries
    pub const PERFORMANCE_DATA: &str = "pace_performance";

    /// All document keys, in the order `clear_all` removes them
    pub const ALL: [&str; 6] = [
        ATHLETE_PROFILE,
        TRAINING_LOGS,
        NUTRITION_LOGS,
        USER_PREFERENCES,
        CONVERSATION_HISTORY,
        PERFORMANCE_DATA,
    ];
}

/// Caps on list-shaped documents.
pub mod limits {
    /// Recent sessions embedded in the profile, newest first
    pub const RECENT_SESSIONS_MAX: usize = 10;
    /// Conversation records kept before the oldest are evicted
    pub const CONVERSATION_HISTORY_MAX: usize = 50;
    /// Recent sessions rendered into the briefing
    pub const BRIEFING_SESSIONS: usize = 3;
    /// Training log entries summarized for conversational context
    pub const CONTEXT_TRAINING_LOGS: usize = 5;
    /// Nutrition log entries averaged for conversational context
    pub const CONTEXT_NUTRITION_LOGS: usize = 3;
    /// Upper bound on self-reported RPE values
    pub const RPE_MAX: u8 = 10;
}

/// Fallback values substituted when a profile field is absent.
///
/// The context-variable mapper must emit every documented key, so each key
/// has a defined fallback; the briefing composer substitutes
/// [`PLACEHOLDER`](fallbacks::PLACEHOLDER) for anything it cannot resolve.
pub mod fallbacks {
    /// Placeholder rendered for missing briefing facts
    pub const PLACEHOLDER: &str = "N/A";
    /// Athlete name when none is stored
    pub const ATHLETE_NAME: &str = "Athlete";
    /// Athlete age when none is stored
    pub const ATHLETE_AGE: i64 = 20;
    /// Primary event when none is stored
    pub const PRIMARY_EVENT: &str = "100m";
    /// Competition level when none is stored
    pub const COMPETITION_LEVEL: &str = "collegiate";
    /// Training phase when none is stored
    pub const TRAINING_PHASE: &str = "competition";
    /// Workout slotted for days with no scheduled session
    pub const TODAY_WORKOUT: &str = "Recovery";
    /// Session type when no recent session exists
    pub const SESSION_TYPE: &str = "speed";
    /// RPE when no recent session exists
    pub const SESSION_RPE: i64 = 7;
    /// Primary goal when none is stored
    pub const PRIMARY_GOAL: &str = "Run sub-10.70 in 100m";
    /// Next competition name when none is stored
    pub const NEXT_COMPETITION: &str = "Conference Championships";
    /// Back squat 1RM when none is stored
    pub const SQUAT_1RM: &str = "140kg";
    /// Power clean 1RM when none is stored
    pub const CLEAN_1RM: &str = "110kg";
    /// Energy level when none is stored
    pub const ENERGY: &str = "Moderate";
    /// Motivation level when none is stored
    pub const MOTIVATION: &str = "High";
    /// Sleep quality when none is stored
    pub const SLEEP_QUALITY: &str = "Good";
    /// Stress level when none is stored
    pub const STRESS_LEVEL: &str = "Low";
    /// Soreness report when none is stored
    pub const SORENESS: &str = "None reported";
    /// Hydration target when none is stored
    pub const HYDRATION: &str = "3-4 liters daily";
}

/// Measurement conversion factors.
pub mod conversion {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.205;
    /// Centimeters per inch
    pub const CM_PER_INCH: f64 = 2.54;
    /// Inches per foot
    pub const INCHES_PER_FOOT: f64 = 12.0;
}

/// Voice agent defaults.
pub mod agent {
    /// Default conversational agent id, overridable via `PACE_AGENT_ID`
    pub const DEFAULT_AGENT_ID: &str = "agent_4701k28hw2jvfj79kkypdbhyd93m";
    /// Buffered agent events before the producer awaits
    pub const EVENT_CHANNEL_CAPACITY: usize = 32;
}

/// Service identity for logging.
pub mod service {
    /// Service name reported in structured logs
    pub const SERVICE_NAME: &str = "pace-coach-core";
}

/// Lowercase weekday names in schedule order, the keys of
/// `Training::weekly_schedule`.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];
