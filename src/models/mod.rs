// ABOUTME: Core data models for the PACE coach - athlete profile and satellite documents
// ABOUTME: Defines AthleteProfile, training/nutrition logs, preferences, and transcripts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! # Data Models
//!
//! The persisted document shapes of the coach core. The athlete profile is
//! one JSON document; training logs, nutrition logs, preferences,
//! conversation history, and performance data are satellite documents with
//! their own storage keys.
//!
//! All documents serialize as camelCase JSON, matching the layout the
//! dashboard persists, and deserialize tolerantly: a missing section or
//! field falls back to its `Default` so older documents keep loading.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::conversion::{CM_PER_INCH, INCHES_PER_FOOT, LBS_PER_KG};

/// Canonical default documents
pub mod defaults;

/// The single athlete profile document, one per storage namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AthleteProfile {
    /// Identity, physical measurements, personal bests, and goals
    pub profile: Identity,
    /// Event specialization and competitive experience
    pub athletics: Athletics,
    /// Training phase, weekly schedule, recent sessions, strength stats
    pub training: Training,
    /// Nutrition, recovery, and day-to-day status
    pub lifestyle: Lifestyle,
    /// Season-long progress tracking
    pub season_progress: SeasonProgress,
}

/// Who the athlete is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    /// Full display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Self-reported gender
    pub gender: String,
    /// Height with derived display fields
    pub height: Height,
    /// Weight with derived display fields
    pub weight: Weight,
    /// Event name -> best mark (e.g. "100m" -> "10.42s")
    pub personal_bests: BTreeMap<String, String>,
    /// Primary, secondary, and long-term goals
    pub goals: Goals,
}

/// Height measurement. `feet`, `inches`, and `display` are derived from
/// `cm` and always recomputed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Height {
    /// Height in centimeters, the authoritative value
    pub cm: f64,
    /// Derived whole feet
    pub feet: u32,
    /// Derived remaining inches
    pub inches: u32,
    /// Derived display string (e.g. `5'10"`)
    pub display: String,
}

impl Height {
    /// Build a height from centimeters, computing the derived fields.
    #[must_use]
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = cm / CM_PER_INCH;
        let mut feet = (total_inches / INCHES_PER_FOOT).floor() as u32;
        let mut inches = (total_inches % INCHES_PER_FOOT).round() as u32;
        if inches >= 12 {
            feet += 1;
            inches = 0;
        }
        Self {
            cm,
            feet,
            inches,
            display: format!("{feet}'{inches}\""),
        }
    }
}

/// Weight measurement. `kg` and `display` are derived from `lbs` and
/// always recomputed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Weight {
    /// Weight in pounds, the authoritative value
    pub lbs: f64,
    /// Derived kilograms, one decimal
    pub kg: f64,
    /// Derived display string (e.g. `160 lbs`)
    pub display: String,
}

impl Weight {
    /// Build a weight from pounds, computing the derived fields.
    #[must_use]
    pub fn from_lbs(lbs: f64) -> Self {
        let kg = ((lbs / LBS_PER_KG) * 10.0).round() / 10.0;
        Self {
            lbs,
            kg,
            display: format!("{lbs:.0} lbs"),
        }
    }

    /// Build a weight from kilograms, rounding pounds to the nearest unit.
    #[must_use]
    pub fn from_kg(kg: f64) -> Self {
        Self::from_lbs((kg * LBS_PER_KG).round())
    }
}

/// Goal statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Goals {
    /// The headline goal for the current season
    pub primary: String,
    /// Secondary goal
    pub secondary: String,
    /// Multi-season ambition
    pub long_term: String,
}

/// Event specialization and competitive background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Athletics {
    /// Main competition event (e.g. "100m Sprint")
    pub primary_event: String,
    /// Event group (e.g. "Sprints")
    pub event_group: String,
    /// Competitive experience
    pub experience: Experience,
}

/// Competitive experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Competition level (e.g. "Collegiate")
    pub level: String,
    /// Seasons of competitive experience
    pub years_competing: u32,
}

/// Training state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Training {
    /// Phase name: "Off-Season", "Pre-Season", "In-Season", "Championship",
    /// "Transition", or a free-form phase label
    pub current_phase: String,
    /// Lowercase weekday name -> workout description
    pub weekly_schedule: BTreeMap<String, String>,
    /// Logged sessions, newest first, capped at
    /// [`RECENT_SESSIONS_MAX`](crate::constants::limits::RECENT_SESSIONS_MAX)
    pub recent_sessions: Vec<TrainingSession>,
    /// Lift name -> one-rep-max string (e.g. "Back Squat" -> "315 lbs")
    pub strength_stats: BTreeMap<String, String>,
}

/// A single logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingSession {
    /// Session date (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Session type (e.g. "Speed Development")
    #[serde(rename = "type")]
    pub session_type: String,
    /// What was done
    pub workout_details: String,
    /// Recorded rep times, when the session produced any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<String>>,
    /// Subjective feel
    pub feeling: String,
    /// Rate of perceived exertion, 0-10
    pub rpe: u8,
    /// Free-form notes
    pub notes: String,
}

/// Nutrition, recovery, and day-to-day status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifestyle {
    /// Nutrition plan
    pub nutrition: Nutrition,
    /// Recovery profile
    pub recovery: Recovery,
    /// Today's self-reported status
    pub current_status: CurrentStatus,
}

/// Nutrition plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Nutrition {
    /// Daily calorie target (e.g. "3,200-3,400")
    pub daily_calories: String,
    /// Macro split description
    pub macro_split: String,
    /// Meals per day
    pub meals: u32,
    /// Hydration target
    pub hydration: String,
    /// Current supplement set
    pub supplements: BTreeSet<String>,
}

/// Recovery profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Recovery {
    /// Typical sleep duration (e.g. "8-9 hours")
    pub sleep_average: String,
    /// Sleep quality description
    pub sleep_quality: String,
    /// Resting heart rate (e.g. "52 bpm")
    pub resting_hr: String,
    /// Heart rate variability range
    pub hrv: String,
    /// Baseline stress level
    pub stress_level: String,
    /// Recovery methods in rotation
    pub recovery_methods: Vec<String>,
}

/// Self-reported status, refreshed at check-in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentStatus {
    /// Energy level
    pub energy: String,
    /// Motivation level
    pub motivation: String,
    /// Soreness report
    pub soreness: String,
    /// Stress level
    pub stress: String,
    /// Confidence level
    pub confidence: String,
    /// Next competition name
    pub next_competition: String,
    /// Next competition date, the authoritative source for the
    /// days-until-competition derivation when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_competition_date: Option<NaiveDate>,
    /// Stored days-until-competition, used only when no date is stored
    pub days_until_competition: u32,
    /// Last competition result
    pub last_competition: String,
}

/// Season-long progress tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonProgress {
    /// When the season started
    pub start_date: String,
    /// Event name -> improvement summary
    pub improvements: BTreeMap<String, ImprovementNote>,
    /// Strength gains over the season
    pub strength_gains: StrengthGains,
    /// Goals staged across the rest of the season
    pub upcoming_goals: UpcomingGoals,
}

/// Improvement summary for one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImprovementNote {
    /// Best mark this season
    pub season_best: String,
    /// Delta from last season
    pub improvement: String,
    /// Consistency note
    pub consistency: String,
}

/// Strength improvement over the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthGains {
    /// Squat gain (e.g. "25 lbs")
    pub squat: String,
    /// Power clean gain
    pub clean: String,
}

/// Goals staged across the rest of the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpcomingGoals {
    /// Goal for the next meet
    pub immediate: String,
    /// Mid-season goal
    pub mid_term: String,
    /// End-of-season goal
    pub end_of_season: String,
}

// ── Satellite documents ─────────────────────────────────────────────────

/// One standalone training log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLogEntry {
    /// Unique entry id
    pub id: Uuid,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Session date (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Session type
    #[serde(rename = "type")]
    pub session_type: String,
    /// Session focus
    pub focus: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Intensity description (e.g. "high")
    pub intensity: String,
    /// Free-form notes
    pub notes: String,
}

impl TrainingLogEntry {
    /// Record a new entry, assigning its id and timestamp.
    #[must_use]
    pub fn record(
        date: impl Into<String>,
        session_type: impl Into<String>,
        focus: impl Into<String>,
        duration_minutes: u32,
        intensity: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            date: date.into(),
            session_type: session_type.into(),
            focus: focus.into(),
            duration_minutes,
            intensity: intensity.into(),
            notes: notes.into(),
        }
    }
}

/// One standalone nutrition log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLogEntry {
    /// Unique entry id
    pub id: Uuid,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Day covered (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Total calories for the day
    pub total_calories: u32,
    /// Protein grams
    pub protein_grams: u32,
    /// Carbohydrate grams
    pub carbs_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Free-form notes
    pub notes: String,
}

impl NutritionLogEntry {
    /// Record a new entry, assigning its id and timestamp.
    #[must_use]
    pub fn record(
        date: impl Into<String>,
        total_calories: u32,
        protein_grams: u32,
        carbs_grams: u32,
        fat_grams: u32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            date: date.into(),
            total_calories,
            protein_grams,
            carbs_grams,
            fat_grams,
            notes: notes.into(),
        }
    }
}

/// Dashboard preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// UI theme
    pub theme: String,
    /// Whether notifications are enabled
    pub notifications: bool,
    /// Unit system ("imperial" or "metric")
    pub units: String,
    /// Interface language
    pub language: String,
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The athlete
    User,
    /// The voice coach
    Agent,
}

/// One line of a conversation transcript. Transcripts are append-only;
/// entries are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEntry {
    /// Who spoke
    pub speaker: Speaker,
    /// What was said
    pub text: String,
    /// When the line arrived
    pub timestamp: DateTime<Utc>,
}

/// A completed conversation, stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    /// Unique record id
    pub id: Uuid,
    /// When the conversation ended
    pub timestamp: DateTime<Utc>,
    /// Session length in seconds
    pub duration_seconds: u64,
    /// Full transcript
    pub transcript: Vec<TranscriptEntry>,
}

impl ConversationRecord {
    /// Record a finished conversation, assigning its id and timestamp.
    #[must_use]
    pub fn record(duration_seconds: u64, transcript: Vec<TranscriptEntry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            duration_seconds,
            transcript,
        }
    }
}

/// One competition or time-trial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    /// Unique entry id
    pub id: Uuid,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Event contested
    pub event: String,
    /// Result mark (e.g. "10.45s (wind +1.2)")
    pub mark: String,
    /// Meet name
    pub meet: String,
    /// Free-form notes
    pub notes: String,
}

impl PerformanceEntry {
    /// Record a new result, assigning its id and timestamp.
    #[must_use]
    pub fn record(
        event: impl Into<String>,
        mark: impl Into<String>,
        meet: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event: event.into(),
            mark: mark.into(),
            meet: meet.into(),
            notes: notes.into(),
        }
    }
}

/// Everything the store holds, bundled for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    /// The athlete profile
    pub athlete_profile: AthleteProfile,
    /// All training log entries
    pub training_logs: Vec<TrainingLogEntry>,
    /// All nutrition log entries
    pub nutrition_logs: Vec<NutritionLogEntry>,
    /// User preferences
    pub user_preferences: UserPreferences,
    /// Retained conversation history
    pub conversation_history: Vec<ConversationRecord>,
    /// All performance entries
    pub performance_data: Vec<PerformanceEntry>,
    /// When the export was taken
    pub export_date: DateTime<Utc>,
}
