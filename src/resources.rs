// ABOUTME: Shared resource container for dependency injection of the reference table
// ABOUTME: Loads the micronutrient dataset once per process and hands out calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! # Nutrition Resources
//!
//! Composition root for the nutrient target engine. The reference table is
//! loaded once and shared read-only through an `Arc`, so calculators built for
//! concurrent requests never re-read the dataset and never lock.

use crate::config::NutritionConfig;
use crate::errors::NutritionError;
use crate::intelligence::nutrient_targets::{MicronutrientReferenceTable, NutrientTargetCalculator};
use crate::models::{latest_weight_kg, UserNutritionProfile, WeightRecord};
use chrono::NaiveDate;
use std::sync::{Arc, OnceLock};

/// Process-wide instance, populated by the first successful [`NutritionResources::shared`]
static SHARED_RESOURCES: OnceLock<NutritionResources> = OnceLock::new();

/// Centralized resource container for the nutrient target engine
#[derive(Debug, Clone)]
pub struct NutritionResources {
    config: Arc<NutritionConfig>,
    reference: Arc<MicronutrientReferenceTable>,
}

impl NutritionResources {
    /// Load the reference table named by `config`
    ///
    /// # Errors
    ///
    /// Returns a reference data error if the dataset is unreadable, malformed,
    /// or incomplete
    pub fn new(config: NutritionConfig) -> Result<Self, NutritionError> {
        let reference = MicronutrientReferenceTable::load(&config.reference_data)?;
        Ok(Self::with_reference_table(config, Arc::new(reference)))
    }

    /// Assemble from an already loaded table
    #[must_use]
    pub fn with_reference_table(
        config: NutritionConfig,
        reference: Arc<MicronutrientReferenceTable>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            reference,
        }
    }

    /// Process-wide resources, loaded on first use.
    ///
    /// The first successful call fixes the configuration; later calls return the
    /// cached instance and ignore their `config`. A failed load is not cached.
    ///
    /// # Errors
    ///
    /// Returns a reference data error if the first load fails
    pub fn shared(config: NutritionConfig) -> Result<&'static Self, NutritionError> {
        if let Some(resources) = SHARED_RESOURCES.get() {
            return Ok(resources);
        }
        let loaded = Self::new(config)?;
        Ok(SHARED_RESOURCES.get_or_init(|| loaded))
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Shared reference table
    #[must_use]
    pub const fn reference_table(&self) -> &Arc<MicronutrientReferenceTable> {
        &self.reference
    }

    /// Calculator for `profile` with an explicit latest weight
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::UnsupportedAge`] for users under 18 on `today`
    pub fn calculator_for(
        &self,
        profile: UserNutritionProfile,
        weight_kg: f64,
        today: NaiveDate,
    ) -> Result<NutrientTargetCalculator, NutritionError> {
        NutrientTargetCalculator::new(profile, weight_kg, Arc::clone(&self.reference), today)
    }

    /// Calculator for `profile` using the most recent record of `history`.
    ///
    /// An empty history means a weight of zero.
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::UnsupportedAge`] for users under 18 on `today`
    pub fn calculator_from_history(
        &self,
        profile: UserNutritionProfile,
        history: &[WeightRecord],
        today: NaiveDate,
    ) -> Result<NutrientTargetCalculator, NutritionError> {
        self.calculator_for(profile, latest_weight_kg(history), today)
    }
}
