// ABOUTME: Micronutrient reference intake table keyed by sex and age bucket
// ABOUTME: Loads and validates the bundled or file-based JSON dataset once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Micronutrient reference table.
//!
//! Dataset schema: `{ "<sex>": { "<age bucket>": { "<nutrient>": <number> } } }`
//! with exactly the two sex keys and the five age bucket labels. Loading
//! validates the whole table so lookups on a constructed table never hit a
//! missing row in practice.

use super::age::AgeBucket;
use super::target_set::NutrientAmount;
use crate::config::ReferenceDataSource;
use crate::constants::nutrient_keys::MACRO_KEYS;
use crate::errors::NutritionError;
use crate::models::Sex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Dataset shipped next to this source file
pub const BUNDLED_REFERENCE_JSON: &str = include_str!("recommended_intake.json");

/// Recommended daily amounts for one sex/age bucket
pub type MicronutrientRow = BTreeMap<String, NutrientAmount>;

type RawTable = BTreeMap<String, BTreeMap<String, MicronutrientRow>>;

/// Read-only reference intakes, shared across calculators
#[derive(Debug, Clone, PartialEq)]
pub struct MicronutrientReferenceTable {
    rows: BTreeMap<(Sex, AgeBucket), MicronutrientRow>,
}

impl MicronutrientReferenceTable {
    /// Parse and validate a JSON dataset.
    ///
    /// # Errors
    ///
    /// - [`NutritionError::ReferenceDataMalformed`] for invalid JSON, unknown
    ///   sex or age bucket keys, non-numeric amounts, or rows using macro keys
    /// - [`NutritionError::ReferenceDataMissing`] when a sex or sex/age bucket
    ///   entry is absent
    pub fn from_json_str(json: &str) -> Result<Self, NutritionError> {
        let raw: RawTable =
            serde_json::from_str(json).map_err(|e| NutritionError::malformed(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a JSON dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::ReferenceDataUnreadable`] when the file cannot be
    /// read, otherwise the same errors as [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, NutritionError> {
        let json =
            fs::read_to_string(path).map_err(|e| NutritionError::ReferenceDataUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_json_str(&json)
    }

    /// Parse the bundled dataset.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file itself is defective.
    pub fn bundled() -> Result<Self, NutritionError> {
        Self::from_json_str(BUNDLED_REFERENCE_JSON)
    }

    /// Load from the configured source
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or fails validation
    pub fn load(source: &ReferenceDataSource) -> Result<Self, NutritionError> {
        let table = match source {
            ReferenceDataSource::Bundled => Self::bundled()?,
            ReferenceDataSource::File(path) => Self::from_path(path)?,
        };
        info!(
            source = %source,
            rows = table.rows.len(),
            nutrients = table.nutrient_keys().len(),
            "loaded micronutrient reference table"
        );
        Ok(table)
    }

    fn from_raw(mut raw: RawTable) -> Result<Self, NutritionError> {
        if let Some(unknown) = raw.keys().find(|key| key.parse::<Sex>().is_err()) {
            return Err(NutritionError::malformed(format!(
                "unknown sex key '{unknown}'"
            )));
        }

        let mut rows = BTreeMap::new();
        for sex in Sex::ALL {
            let mut buckets = raw
                .remove(sex.as_str())
                .ok_or_else(|| NutritionError::missing(&[sex.as_str()]))?;

            let known: BTreeSet<&str> = AgeBucket::ALL.iter().map(|b| b.label()).collect();
            if let Some(unknown) = buckets.keys().find(|key| !known.contains(key.as_str())) {
                return Err(NutritionError::malformed(format!(
                    "unknown age bucket '{unknown}' under '{sex}'"
                )));
            }

            for bucket in AgeBucket::ALL {
                let row = buckets
                    .remove(bucket.label())
                    .ok_or_else(|| NutritionError::missing(&[sex.as_str(), bucket.label()]))?;
                if let Some(collision) = MACRO_KEYS.iter().find(|key| row.contains_key(**key)) {
                    return Err(NutritionError::malformed(format!(
                        "row '{sex}/{bucket}' uses macronutrient key '{collision}'"
                    )));
                }
                rows.insert((sex, bucket), row);
            }
        }

        Ok(Self { rows })
    }

    /// Row for a sex/age bucket pair
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::ReferenceDataMissing`] naming the `sex/bucket` path
    pub fn row(&self, sex: Sex, bucket: AgeBucket) -> Result<&MicronutrientRow, NutritionError> {
        self.rows
            .get(&(sex, bucket))
            .ok_or_else(|| NutritionError::missing(&[sex.as_str(), bucket.label()]))
    }

    /// Union of nutrient keys across all rows
    #[must_use]
    pub fn nutrient_keys(&self) -> BTreeSet<&str> {
        self.rows
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect()
    }

    /// Number of sex/age bucket rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
