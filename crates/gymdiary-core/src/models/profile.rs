// ABOUTME: User nutrition profile and body weight history models
// ABOUTME: Sex parsing, immutable profile snapshot, and latest-weight selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use crate::errors::NutritionError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex used to select formula intercepts and reference rows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Both recognized values, in reference table order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Wire/reference-table representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(NutritionError::UnrecognizedSex {
                value: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = NutritionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Snapshot of the profile fields the target engine reads.
///
/// Supplied by the account subsystem; never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNutritionProfile {
    /// Owning user, for log correlation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Biological sex
    pub sex: Sex,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Height in centimeters
    pub height_cm: f64,
    /// Dimensionless multiplier applied to BMR
    pub activity_level: f64,
}

impl UserNutritionProfile {
    /// Create a profile without a user ID
    #[must_use]
    pub const fn new(sex: Sex, birth_date: NaiveDate, height_cm: f64, activity_level: f64) -> Self {
        Self {
            user_id: None,
            sex,
            birth_date,
            height_cm,
            activity_level,
        }
    }

    /// Attach the owning user's ID
    #[must_use]
    pub const fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// One body weight observation from the weight tracking subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Body fat percentage, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// When the observation was taken
    pub recorded_at: DateTime<Utc>,
}

/// Weight of the most recent record, or `0.0` when there is no history.
///
/// Zero is a degenerate input the target engine accepts without rejecting.
#[must_use]
pub fn latest_weight_kg(records: &[WeightRecord]) -> f64 {
    records
        .iter()
        .max_by_key(|record| record.recorded_at)
        .map_or(0.0, |record| record.weight_kg)
}
