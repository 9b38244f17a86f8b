// ABOUTME: Long-form athlete briefing composed for the voice agent's system context
// ABOUTME: Sectioned narrative plus check-in and scenario variants, total over any profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! The athlete briefing.
//!
//! A long structured narrative the voice agent receives as system context
//! before a session. Composition is total: every missing field renders as
//! the standard placeholder, so no profile shape can make it fail. The
//! section order and labels are part of the contract — downstream prompts
//! reference them — but tests assert the presence of facts, not byte
//! layout.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, Utc};

use super::{days_until_competition, text_or, text_or_na, todays_workout, weekday_key};
use crate::constants::{fallbacks, limits, WEEKDAYS};
use crate::models::AthleteProfile;

/// Conversation scenarios with a dedicated focus line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationScenario {
    /// Pre-workout preparation and readiness
    PreWorkout,
    /// Post-workout reflection and recovery planning
    PostWorkout,
    /// Personalized nutrition guidance
    NutritionAdvice,
    /// Goal refinement and progress assessment
    GoalSetting,
    /// Injury prevention and movement quality
    InjuryPrevention,
}

impl ConversationScenario {
    fn focus_line(self) -> &'static str {
        match self {
            Self::PreWorkout => {
                "Focus: Pre-workout preparation, energy levels, and training readiness."
            }
            Self::PostWorkout => {
                "Focus: Workout reflection, recovery planning, and performance feedback."
            }
            Self::NutritionAdvice => {
                "Focus: Personalized nutrition guidance based on training demands and goals."
            }
            Self::GoalSetting => "Focus: Goal refinement, progress assessment, and motivation.",
            Self::InjuryPrevention => {
                "Focus: Injury prevention strategies, movement quality, and recovery optimization."
            }
        }
    }
}

/// Compose the full athlete briefing.
///
/// Deterministic for a given `(profile, now)`; `now` controls only the
/// greeting's weekday/date text and the weekday-indexed schedule lookup.
#[must_use]
pub fn compose(profile: &AthleteProfile, now: DateTime<Utc>) -> String {
    let identity = &profile.profile;
    let training = &profile.training;
    let lifestyle = &profile.lifestyle;
    let status = &lifestyle.current_status;
    let season = &profile.season_progress;

    let name = text_or(&identity.name, fallbacks::ATHLETE_NAME);
    let days_until = days_until_competition(status, now);
    let todays_session = todays_workout(training, now);

    let mut out = String::new();

    out.push_str("**ATHLETE BRIEFING FILE**\n\n");

    out.push_str("**ATHLETE OVERVIEW:**\n");
    let _ = writeln!(out, "- Name: {name}");
    let _ = writeln!(
        out,
        "- Age: {} years old, {}",
        identity.age,
        text_or_na(&identity.gender)
    );
    let _ = writeln!(
        out,
        "- Physical: {}, {}",
        text_or_na(&identity.height.display),
        text_or_na(&identity.weight.display)
    );
    let _ = writeln!(
        out,
        "- Primary Event: {} (specialist in {})",
        text_or_na(&profile.athletics.primary_event),
        text_or_na(&profile.athletics.event_group)
    );
    let _ = writeln!(
        out,
        "- Experience: {} level, {} years competing",
        text_or_na(&profile.athletics.experience.level),
        profile.athletics.experience.years_competing
    );

    out.push_str("\n**PERSONAL RECORDS:**\n");
    if identity.personal_bests.is_empty() {
        let _ = writeln!(out, "- {}", fallbacks::PLACEHOLDER);
    } else {
        for (event, mark) in &identity.personal_bests {
            let _ = writeln!(out, "- {event}: {mark}");
        }
    }

    out.push_str("\n**CURRENT GOALS:**\n");
    let _ = writeln!(out, "- Primary: {}", text_or_na(&identity.goals.primary));
    let _ = writeln!(
        out,
        "- Secondary: {}",
        text_or_na(&identity.goals.secondary)
    );
    let _ = writeln!(
        out,
        "- Long-term: {}",
        text_or_na(&identity.goals.long_term)
    );

    out.push_str("\n**TRAINING STATUS:**\n");
    let _ = writeln!(
        out,
        "- Current Phase: {}",
        text_or_na(&training.current_phase)
    );

    out.push_str("\n**WEEKLY TRAINING SCHEDULE:**\n");
    for day in WEEKDAYS {
        let workout = training
            .weekly_schedule
            .get(day)
            .map_or(fallbacks::PLACEHOLDER, |workout| text_or_na(workout));
        let _ = writeln!(out, "- {}: {workout}", capitalize(day));
    }

    out.push_str("\n**RECENT TRAINING SESSIONS:**\n");
    if training.recent_sessions.is_empty() {
        let _ = writeln!(out, "- {}", fallbacks::PLACEHOLDER);
    } else {
        for (index, session) in training
            .recent_sessions
            .iter()
            .take(limits::BRIEFING_SESSIONS)
            .enumerate()
        {
            let times = session.times.as_ref().map_or_else(
                || fallbacks::PLACEHOLDER.to_owned(),
                |times| times.join(", "),
            );
            let _ = writeln!(
                out,
                "{}. {} - {}\n   Workout: {}\n   Times: {times}\n   Feeling: {}, RPE: {}/10\n   Notes: {}",
                index + 1,
                text_or_na(&session.date),
                text_or_na(&session.session_type),
                text_or_na(&session.workout_details),
                text_or_na(&session.feeling),
                session.rpe,
                text_or_na(&session.notes)
            );
        }
    }

    out.push_str("\n**STRENGTH NUMBERS:**\n");
    if training.strength_stats.is_empty() {
        let _ = writeln!(out, "- {}", fallbacks::PLACEHOLDER);
    } else {
        for (lift, max) in &training.strength_stats {
            let _ = writeln!(out, "- {lift} 1RM: {max}");
        }
    }

    out.push_str("\n**NUTRITION & LIFESTYLE:**\n");
    let _ = writeln!(
        out,
        "- Daily Calories: {}",
        text_or_na(&lifestyle.nutrition.daily_calories)
    );
    let _ = writeln!(
        out,
        "- Macro Split: {}",
        text_or_na(&lifestyle.nutrition.macro_split)
    );
    let _ = writeln!(out, "- Meals per day: {}", lifestyle.nutrition.meals);
    let _ = writeln!(
        out,
        "- Hydration: {}",
        text_or_na(&lifestyle.nutrition.hydration)
    );
    let supplements = if lifestyle.nutrition.supplements.is_empty() {
        fallbacks::PLACEHOLDER.to_owned()
    } else {
        lifestyle
            .nutrition
            .supplements
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "- Current Supplements: {supplements}");

    out.push_str("\n**RECOVERY PROFILE:**\n");
    let _ = writeln!(
        out,
        "- Sleep: {} ({} quality)",
        text_or_na(&lifestyle.recovery.sleep_average),
        text_or_na(&lifestyle.recovery.sleep_quality)
    );
    let _ = writeln!(
        out,
        "- Resting HR: {}",
        text_or_na(&lifestyle.recovery.resting_hr)
    );
    let _ = writeln!(out, "- HRV Range: {}", text_or_na(&lifestyle.recovery.hrv));
    let _ = writeln!(
        out,
        "- Stress Level: {}",
        text_or_na(&lifestyle.recovery.stress_level)
    );
    let methods = if lifestyle.recovery.recovery_methods.is_empty() {
        fallbacks::PLACEHOLDER.to_owned()
    } else {
        lifestyle.recovery.recovery_methods.join(", ")
    };
    let _ = writeln!(out, "- Recovery Methods: {methods}");

    out.push_str("\n**CURRENT STATUS (as of today):**\n");
    let _ = writeln!(out, "- Energy Level: {}", text_or_na(&status.energy));
    let _ = writeln!(out, "- Motivation: {}", text_or_na(&status.motivation));
    let _ = writeln!(out, "- Physical State: {}", text_or_na(&status.soreness));
    let _ = writeln!(out, "- Stress Level: {}", text_or_na(&status.stress));
    let _ = writeln!(out, "- Confidence: {}", text_or_na(&status.confidence));

    out.push_str("\n**COMPETITION SCHEDULE:**\n");
    let _ = writeln!(
        out,
        "- Next Competition: {}",
        text_or_na(&status.next_competition)
    );
    let _ = writeln!(out, "- Days Until: {days_until}");
    let _ = writeln!(
        out,
        "- Last Competition Result: {}",
        text_or_na(&status.last_competition)
    );

    out.push_str("\n**SEASON PROGRESS:**\n");
    let _ = writeln!(out, "- Season Start: {}", text_or_na(&season.start_date));
    for (event, note) in &season.improvements {
        let _ = writeln!(
            out,
            "- {event}: season best {}, {} ({})",
            text_or_na(&note.season_best),
            text_or_na(&note.improvement),
            text_or_na(&note.consistency)
        );
    }
    let _ = writeln!(
        out,
        "- Strength Gains: Squat +{}, Clean +{}",
        text_or_na(&season.strength_gains.squat),
        text_or_na(&season.strength_gains.clean)
    );
    let _ = writeln!(
        out,
        "- Upcoming: {} | {} | {}",
        text_or_na(&season.upcoming_goals.immediate),
        text_or_na(&season.upcoming_goals.mid_term),
        text_or_na(&season.upcoming_goals.end_of_season)
    );

    out.push_str("\n**COACHING NOTES:**\n");
    let _ = writeln!(
        out,
        "- This athlete is {days_until} days away from their next competition"
    );
    let _ = writeln!(
        out,
        "- Their main goal: {}",
        text_or_na(&identity.goals.primary)
    );
    let _ = writeln!(
        out,
        "- Current training phase is {} - adjust advice accordingly",
        text_or_na(&training.current_phase)
    );
    if let Some(last) = training.recent_sessions.first() {
        let _ = writeln!(
            out,
            "- Last training session was {} with RPE {}/10",
            text_or_na(&last.session_type),
            last.rpe
        );
        let _ = writeln!(
            out,
            "- They felt \"{}\" in their last session",
            text_or_na(&last.feeling)
        );
    }

    out.push_str("\n**TODAY'S CHECK-IN CONTEXT:**\n");
    let _ = writeln!(
        out,
        "Today is {}. You are Coach Alex, an experienced track and field coach. You have just received this complete briefing about {name}. You know EVERYTHING about their training, stats, and goals.",
        now.format("%A, %B %-d, %Y")
    );
    out.push('\n');
    out.push_str("Start this conversation by:\n");
    let _ = writeln!(out, "1. Greeting {name} warmly by name");
    let _ = writeln!(
        out,
        "2. Briefly acknowledging their current training situation (they're in {} phase, {days_until} days from competition)",
        text_or_na(&training.current_phase)
    );
    let _ = writeln!(
        out,
        "3. Asking how they're feeling today and if they're ready for today's scheduled training: {todays_session}"
    );
    out.push_str("4. Referencing their recent performance or training when appropriate\n\n");
    out.push_str(
        "Be conversational and supportive. Since you have their complete profile, you can provide specific, personalized advice without asking for basic information you already know.",
    );

    out
}

/// Compose the full briefing with recent-activity lines appended.
///
/// The activity summaries come from the logbook (standalone training and
/// nutrition logs) and are passed in pre-rendered so composition stays
/// pure.
#[must_use]
pub fn compose_with_activity(
    profile: &AthleteProfile,
    now: DateTime<Utc>,
    recent_training: &str,
    nutrition_status: &str,
) -> String {
    let mut out = compose(profile, now);
    out.push_str("\n\n**RECENT ACTIVITY:**\n");
    let _ = writeln!(out, "- Training: {recent_training}");
    let _ = write!(out, "- Nutrition: {nutrition_status}");
    out
}

/// Compose the short daily check-in brief.
#[must_use]
pub fn compose_check_in(profile: &AthleteProfile, now: DateTime<Utc>) -> String {
    let identity = &profile.profile;
    let name = text_or(&identity.name, fallbacks::ATHLETE_NAME);
    let event = text_or(&profile.athletics.primary_event, fallbacks::PRIMARY_EVENT);
    let phase = text_or(&profile.training.current_phase, fallbacks::TRAINING_PHASE);
    let goal = text_or(&identity.goals.primary, fallbacks::PRIMARY_GOAL);
    let pb = identity
        .personal_bests
        .get(event)
        .or_else(|| identity.personal_bests.get("100m"))
        .map_or(fallbacks::PLACEHOLDER, |mark| text_or_na(mark));
    let weekday = weekday_key(now.weekday());

    let mut out = String::new();
    let _ = writeln!(out, "Daily Check-in Context for {name}:");
    let _ = writeln!(out, "- {event} specialist in {phase} phase");
    let _ = writeln!(out, "- Primary goal: {goal}");
    let _ = writeln!(out, "- Recent PB: {pb}");
    let _ = writeln!(
        out,
        "- Today ({weekday}): {}",
        todays_workout(&profile.training, now)
    );
    out.push('\n');
    out.push_str(
        "Conduct a supportive daily check-in focusing on today's training, recovery status, and motivation. Ask about sleep, nutrition, any concerns, and provide encouragement toward their goal.",
    );
    out
}

/// Compose a scenario-focused brief: the check-in brief plus the
/// scenario's focus line.
#[must_use]
pub fn compose_scenario(
    profile: &AthleteProfile,
    now: DateTime<Utc>,
    scenario: ConversationScenario,
) -> String {
    format!(
        "{}\n\n{}",
        compose_check_in(profile, now),
        scenario.focus_line()
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
