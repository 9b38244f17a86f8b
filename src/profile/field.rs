// ABOUTME: Typed profile field references and the single update dispatcher
// ABOUTME: Replaces stringly-typed path updates; measurement edits recompute derived values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Typed field updates.
//!
//! The settings editor updates one nested field at a time. Instead of
//! dotted path strings, each editable field is a [`ProfileField`] variant
//! and every update goes through [`apply`], which type-checks the value
//! and keeps derived measurement fields consistent: setting the weight in
//! pounds recomputes kilograms and the display string in the same update,
//! setting the height in centimeters recomputes feet/inches and the
//! display string.

use chrono::NaiveDate;

use crate::constants::limits::RPE_MAX;
use crate::errors::{CoachError, CoachResult};
use crate::models::{AthleteProfile, Height, Weight};

/// Every profile field the settings editor can update individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Athlete display name
    Name,
    /// Age in years
    Age,
    /// Self-reported gender
    Gender,
    /// Weight in pounds (recomputes kg and display)
    WeightLbs,
    /// Height in centimeters (recomputes feet/inches and display)
    HeightCm,
    /// Main competition event
    PrimaryEvent,
    /// Event group
    EventGroup,
    /// Competition level
    ExperienceLevel,
    /// Seasons of competitive experience
    YearsCompeting,
    /// Headline goal
    PrimaryGoal,
    /// Secondary goal
    SecondaryGoal,
    /// Multi-season goal
    LongTermGoal,
    /// Training phase name
    CurrentPhase,
    /// Energy level
    Energy,
    /// Motivation level
    Motivation,
    /// Soreness report
    Soreness,
    /// Stress level
    Stress,
    /// Confidence level
    Confidence,
    /// Next competition name
    NextCompetition,
    /// Next competition date
    NextCompetitionDate,
    /// Stored days until competition
    DaysUntilCompetition,
    /// Last competition result
    LastCompetition,
}

impl ProfileField {
    /// Stable field name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "profile.name",
            Self::Age => "profile.age",
            Self::Gender => "profile.gender",
            Self::WeightLbs => "profile.weight.lbs",
            Self::HeightCm => "profile.height.cm",
            Self::PrimaryEvent => "athletics.primaryEvent",
            Self::EventGroup => "athletics.eventGroup",
            Self::ExperienceLevel => "athletics.experience.level",
            Self::YearsCompeting => "athletics.experience.yearsCompeting",
            Self::PrimaryGoal => "profile.goals.primary",
            Self::SecondaryGoal => "profile.goals.secondary",
            Self::LongTermGoal => "profile.goals.longTerm",
            Self::CurrentPhase => "training.currentPhase",
            Self::Energy => "lifestyle.currentStatus.energy",
            Self::Motivation => "lifestyle.currentStatus.motivation",
            Self::Soreness => "lifestyle.currentStatus.soreness",
            Self::Stress => "lifestyle.currentStatus.stress",
            Self::Confidence => "lifestyle.currentStatus.confidence",
            Self::NextCompetition => "lifestyle.currentStatus.nextCompetition",
            Self::NextCompetitionDate => "lifestyle.currentStatus.nextCompetitionDate",
            Self::DaysUntilCompetition => "lifestyle.currentStatus.daysUntilCompetition",
            Self::LastCompetition => "lifestyle.currentStatus.lastCompetition",
        }
    }
}

/// A value for a typed field update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Whole-number value
    Integer(i64),
    /// Fractional value
    Decimal(f64),
    /// Calendar date value
    Date(NaiveDate),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Apply one typed field update to a profile.
///
/// # Errors
///
/// Returns [`CoachError::InvalidField`] when the value kind does not match
/// the field, or the value is out of range (negative count, RPE above 10).
pub fn apply(
    profile: &mut AthleteProfile,
    field: ProfileField,
    value: FieldValue,
) -> CoachResult<()> {
    match field {
        ProfileField::Name => profile.profile.name = expect_text(field, value)?,
        ProfileField::Age => profile.profile.age = expect_count(field, value)?,
        ProfileField::Gender => profile.profile.gender = expect_text(field, value)?,
        ProfileField::WeightLbs => {
            profile.profile.weight = Weight::from_lbs(expect_decimal(field, value)?);
        }
        ProfileField::HeightCm => {
            profile.profile.height = Height::from_cm(expect_decimal(field, value)?);
        }
        ProfileField::PrimaryEvent => {
            profile.athletics.primary_event = expect_text(field, value)?;
        }
        ProfileField::EventGroup => profile.athletics.event_group = expect_text(field, value)?,
        ProfileField::ExperienceLevel => {
            profile.athletics.experience.level = expect_text(field, value)?;
        }
        ProfileField::YearsCompeting => {
            profile.athletics.experience.years_competing = expect_count(field, value)?;
        }
        ProfileField::PrimaryGoal => profile.profile.goals.primary = expect_text(field, value)?,
        ProfileField::SecondaryGoal => {
            profile.profile.goals.secondary = expect_text(field, value)?;
        }
        ProfileField::LongTermGoal => {
            profile.profile.goals.long_term = expect_text(field, value)?;
        }
        ProfileField::CurrentPhase => {
            profile.training.current_phase = expect_text(field, value)?;
        }
        ProfileField::Energy => {
            profile.lifestyle.current_status.energy = expect_text(field, value)?;
        }
        ProfileField::Motivation => {
            profile.lifestyle.current_status.motivation = expect_text(field, value)?;
        }
        ProfileField::Soreness => {
            profile.lifestyle.current_status.soreness = expect_text(field, value)?;
        }
        ProfileField::Stress => {
            profile.lifestyle.current_status.stress = expect_text(field, value)?;
        }
        ProfileField::Confidence => {
            profile.lifestyle.current_status.confidence = expect_text(field, value)?;
        }
        ProfileField::NextCompetition => {
            profile.lifestyle.current_status.next_competition = expect_text(field, value)?;
        }
        ProfileField::NextCompetitionDate => {
            profile.lifestyle.current_status.next_competition_date =
                Some(expect_date(field, value)?);
        }
        ProfileField::DaysUntilCompetition => {
            profile.lifestyle.current_status.days_until_competition =
                expect_count(field, value)?;
        }
        ProfileField::LastCompetition => {
            profile.lifestyle.current_status.last_competition = expect_text(field, value)?;
        }
    }
    Ok(())
}

/// Clamp an RPE report into the valid 0-10 range.
#[must_use]
pub fn clamp_rpe(rpe: u8) -> u8 {
    rpe.min(RPE_MAX)
}

fn expect_text(field: ProfileField, value: FieldValue) -> CoachResult<String> {
    match value {
        FieldValue::Text(text) => Ok(text),
        _ => Err(invalid(field, "text")),
    }
}

fn expect_count(field: ProfileField, value: FieldValue) -> CoachResult<u32> {
    match value {
        FieldValue::Integer(n) if n >= 0 => u32::try_from(n).map_err(|_| invalid(field, "count")),
        _ => Err(invalid(field, "non-negative integer")),
    }
}

fn expect_decimal(field: ProfileField, value: FieldValue) -> CoachResult<f64> {
    match value {
        FieldValue::Decimal(n) if n.is_finite() && n >= 0.0 => Ok(n),
        FieldValue::Integer(n) if n >= 0 => Ok(n as f64),
        _ => Err(invalid(field, "non-negative number")),
    }
}

fn expect_date(field: ProfileField, value: FieldValue) -> CoachResult<NaiveDate> {
    match value {
        FieldValue::Date(date) => Ok(date),
        _ => Err(invalid(field, "date")),
    }
}

fn invalid(field: ProfileField, expected: &'static str) -> CoachError {
    CoachError::InvalidField {
        field: field.name(),
        expected,
    }
}
