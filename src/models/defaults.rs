// ABOUTME: Canonical default documents seeded on first load and used as fallbacks
// ABOUTME: Single source for the demo athlete profile and default preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Canonical defaults.
//!
//! Every component that needs a fallback profile uses
//! [`default_profile`] — there is exactly one definition of the demo
//! athlete, so the stores, the context projections, and the tests can
//! never drift apart.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    AthleteProfile, Athletics, CurrentStatus, Experience, Goals, Height, Identity,
    ImprovementNote, Lifestyle, Nutrition, Recovery, SeasonProgress, StrengthGains, Training,
    TrainingSession, UpcomingGoals, UserPreferences, Weight,
};

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "light".into(),
            notifications: true,
            units: "imperial".into(),
            language: "en".into(),
        }
    }
}

/// The demo athlete profile seeded when no profile document exists.
#[must_use]
pub fn default_profile() -> AthleteProfile {
    AthleteProfile {
        profile: Identity {
            name: "Jordan Smith".into(),
            age: 20,
            gender: "Male".into(),
            height: Height::from_cm(178.0),
            weight: Weight::from_lbs(160.0),
            personal_bests: BTreeMap::from([
                ("100m".to_owned(), "10.42s".to_owned()),
                ("200m".to_owned(), "21.18s".to_owned()),
                ("60m".to_owned(), "6.85s".to_owned()),
                ("Long Jump".to_owned(), "7.25m".to_owned()),
            ]),
            goals: Goals {
                primary: "Break 10.35s in the 100m".into(),
                secondary: "Qualify for conference championships".into(),
                long_term: "Make nationals in senior year".into(),
            },
        },
        athletics: Athletics {
            primary_event: "100m Sprint".into(),
            event_group: "Sprints".into(),
            experience: Experience {
                level: "Collegiate".into(),
                years_competing: 6,
            },
        },
        training: Training {
            current_phase: "Competition Phase".into(),
            weekly_schedule: BTreeMap::from([
                (
                    "monday".to_owned(),
                    "Speed Development - 3x30m, 3x60m".to_owned(),
                ),
                (
                    "tuesday".to_owned(),
                    "Strength Training - Lower Body Power".to_owned(),
                ),
                ("wednesday".to_owned(), "Tempo - 6x100m at 75%".to_owned()),
                (
                    "thursday".to_owned(),
                    "Strength Training - Upper Body".to_owned(),
                ),
                (
                    "friday".to_owned(),
                    "Competition Prep - Block Starts + Accelerations".to_owned(),
                ),
                (
                    "saturday".to_owned(),
                    "Competition or Time Trial".to_owned(),
                ),
                (
                    "sunday".to_owned(),
                    "Active Recovery - Light Movement".to_owned(),
                ),
            ]),
            recent_sessions: vec![
                TrainingSession {
                    date: "2025-08-08".into(),
                    session_type: "Speed Development".into(),
                    workout_details: "3x30m (3.95, 3.92, 3.90), 3x60m (6.85, 6.82, 6.80)".into(),
                    times: Some(vec![
                        "3.95".into(),
                        "3.92".into(),
                        "3.90".into(),
                        "6.85".into(),
                        "6.82".into(),
                        "6.80".into(),
                    ]),
                    feeling: "Strong and explosive".into(),
                    rpe: 7,
                    notes: "Great acceleration pattern, felt smooth through transition".into(),
                },
                TrainingSession {
                    date: "2025-08-06".into(),
                    session_type: "Strength Training".into(),
                    workout_details: "Back Squat 5x3 @ 85%, Power Clean 4x2 @ 90%".into(),
                    times: None,
                    feeling: "Powerful".into(),
                    rpe: 8,
                    notes: "Hit all lifts, feeling strong in the weight room".into(),
                },
                TrainingSession {
                    date: "2025-08-05".into(),
                    session_type: "Tempo".into(),
                    workout_details: "6x100m @ 75% with 90s rest".into(),
                    times: Some(vec![
                        "12.8".into(),
                        "12.7".into(),
                        "12.9".into(),
                        "12.8".into(),
                        "12.6".into(),
                        "12.7".into(),
                    ]),
                    feeling: "Controlled and relaxed".into(),
                    rpe: 6,
                    notes: "Good rhythm and relaxation at tempo pace".into(),
                },
            ],
            strength_stats: BTreeMap::from([
                ("Back Squat".to_owned(), "315 lbs".to_owned()),
                ("Power Clean".to_owned(), "235 lbs".to_owned()),
                ("Bench Press".to_owned(), "185 lbs".to_owned()),
            ]),
        },
        lifestyle: Lifestyle {
            nutrition: Nutrition {
                daily_calories: "3,200-3,400".into(),
                macro_split: "50% Carbs, 25% Protein, 25% Fat".into(),
                meals: 5,
                hydration: "3-4 liters daily".into(),
                supplements: BTreeSet::from([
                    "Creatine".to_owned(),
                    "Whey Protein".to_owned(),
                    "Magnesium".to_owned(),
                    "Vitamin D".to_owned(),
                ]),
            },
            recovery: Recovery {
                sleep_average: "8-9 hours".into(),
                sleep_quality: "Good".into(),
                resting_hr: "52 bpm".into(),
                hrv: "45-55ms".into(),
                stress_level: "Low-Moderate".into(),
                recovery_methods: vec![
                    "Ice baths".into(),
                    "Massage".into(),
                    "Stretching".into(),
                    "Meditation".into(),
                ],
            },
            current_status: CurrentStatus {
                energy: "High".into(),
                motivation: "Very High".into(),
                soreness: "Minimal soreness in calves".into(),
                stress: "Low".into(),
                confidence: "High".into(),
                next_competition: "Conference Championships".into(),
                next_competition_date: None,
                days_until_competition: 14,
                last_competition: "Dual Meet - 10.45s (wind +1.2)".into(),
            },
        },
        season_progress: SeasonProgress {
            start_date: "March 1, 2025".into(),
            improvements: BTreeMap::from([(
                "100m".to_owned(),
                ImprovementNote {
                    season_best: "10.42s".into(),
                    improvement: "-0.08s from last season".into(),
                    consistency: "85% of races under 10.50s".into(),
                },
            )]),
            strength_gains: StrengthGains {
                squat: "25 lbs".into(),
                clean: "15 lbs".into(),
            },
            upcoming_goals: UpcomingGoals {
                immediate: "Run 10.38s at conference meet".into(),
                mid_term: "Qualify for regionals".into(),
                end_of_season: "Break 10.35s and set new school record".into(),
            },
        },
    }
}
