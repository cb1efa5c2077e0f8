// ABOUTME: Age calculation and adult age bucket classification
// ABOUTME: Maps whole-year age to the five reference intake age ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use crate::constants::age_buckets;
use crate::errors::NutritionError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adult age range used to index the micronutrient reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBucket {
    /// 18 to 29 years
    #[serde(rename = "18-29")]
    From18To29,
    /// 30 to 49 years
    #[serde(rename = "30-49")]
    From30To49,
    /// 50 to 64 years
    #[serde(rename = "50-64")]
    From50To64,
    /// 65 to 74 years
    #[serde(rename = "65-74")]
    From65To74,
    /// 75 years and over
    #[serde(rename = "75+")]
    From75,
}

impl AgeBucket {
    /// Every bucket, youngest first
    pub const ALL: [Self; 5] = [
        Self::From18To29,
        Self::From30To49,
        Self::From50To64,
        Self::From65To74,
        Self::From75,
    ];

    /// Classify a whole-year age.
    ///
    /// Ranges are inclusive on both ends; 75 and over is open-ended.
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::UnsupportedAge`] for ages under 18.
    pub fn classify(age: i32) -> Result<Self, NutritionError> {
        match age {
            18..=29 => Ok(Self::From18To29),
            30..=49 => Ok(Self::From30To49),
            50..=64 => Ok(Self::From50To64),
            65..=74 => Ok(Self::From65To74),
            75.. => Ok(Self::From75),
            _ => Err(NutritionError::UnsupportedAge { age }),
        }
    }

    /// Reference table key, e.g. `"30-49"`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From18To29 => age_buckets::AGE_18_29,
            Self::From30To49 => age_buckets::AGE_30_49,
            Self::From50To64 => age_buckets::AGE_50_64,
            Self::From65To74 => age_buckets::AGE_65_74,
            Self::From75 => age_buckets::AGE_75_PLUS,
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age in whole years on `today`.
///
/// One year is subtracted when the birthday has not yet occurred this year.
/// A birth date after `today` yields a negative age.
#[must_use]
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    today.year() - birth_date.year() - i32::from(birthday_pending)
}
