// ABOUTME: Per-user nutrient target calculator combining energy, PFC, and micronutrients
// ABOUTME: Captures profile, weight, age bucket, and the injected reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use super::age::{calculate_age, AgeBucket};
use super::energy::{
    calculate_basal_metabolism, calculate_pfc_targets, calculate_total_energy, PfcTargets,
};
use super::reference::{MicronutrientReferenceTable, MicronutrientRow};
use super::target_set::{AnnotatedTargetSet, NutrientAmount, NutrientTargetSet};
use crate::constants::nutrient_keys;
use crate::errors::NutritionError;
use crate::models::UserNutritionProfile;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

/// Nutrient targets for one user at one point in time.
///
/// Construction computes the age bucket once; every getter afterwards is pure
/// arithmetic or a map lookup and returns a fresh value.
#[derive(Debug, Clone)]
pub struct NutrientTargetCalculator {
    profile: UserNutritionProfile,
    weight_kg: f64,
    age: i32,
    age_bucket: AgeBucket,
    reference: Arc<MicronutrientReferenceTable>,
}

impl NutrientTargetCalculator {
    /// Build a calculator for `profile` as of `today`.
    ///
    /// `weight_kg` is the latest recorded weight; pass `0.0` when the user has
    /// none. Zero weight is accepted and yields degenerate targets.
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::UnsupportedAge`] when the user is under 18 on `today`.
    pub fn new(
        profile: UserNutritionProfile,
        weight_kg: f64,
        reference: Arc<MicronutrientReferenceTable>,
        today: NaiveDate,
    ) -> Result<Self, NutritionError> {
        let age = calculate_age(profile.birth_date, today);
        let age_bucket = AgeBucket::classify(age)?;

        if weight_kg <= 0.0 {
            warn!(
                user_id = ?profile.user_id,
                weight_kg,
                "no usable weight recorded, targets will be degenerate"
            );
        }
        debug!(
            user_id = ?profile.user_id,
            sex = %profile.sex,
            age,
            age_bucket = %age_bucket,
            "nutrient target calculator ready"
        );

        Ok(Self {
            profile,
            weight_kg,
            age,
            age_bucket,
            reference,
        })
    }

    /// Age in whole years at construction
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Age bucket derived at construction
    #[must_use]
    pub const fn age_bucket(&self) -> AgeBucket {
        self.age_bucket
    }

    /// Profile snapshot this calculator was built from
    #[must_use]
    pub const fn profile(&self) -> &UserNutritionProfile {
        &self.profile
    }

    /// Body weight used for the calculations (kg)
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Basal metabolism, two decimals
    #[must_use]
    pub fn get_basal_metabolism(&self) -> f64 {
        calculate_basal_metabolism(
            self.weight_kg,
            self.profile.height_cm,
            self.age,
            self.profile.sex,
        )
    }

    /// Total daily energy, truncated to a whole number
    #[must_use]
    pub fn get_total_energy(&self) -> i64 {
        calculate_total_energy(self.get_basal_metabolism(), self.profile.activity_level)
    }

    /// Energy and protein/fat/carbohydrate targets
    #[must_use]
    pub fn get_pfc_targets(&self) -> PfcTargets {
        calculate_pfc_targets(self.get_total_energy(), self.weight_kg)
    }

    /// Reference row for this user's sex and age bucket, verbatim
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::ReferenceDataMissing`] if the table lacks the row
    pub fn get_micronutrient_targets(&self) -> Result<MicronutrientRow, NutritionError> {
        self.reference
            .row(self.profile.sex, self.age_bucket)
            .cloned()
    }

    /// Macro targets merged with micronutrient targets into one flat set
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::ReferenceDataMissing`] if the table lacks the row
    pub fn get_all_targets(&self) -> Result<NutrientTargetSet, NutritionError> {
        let pfc = self.get_pfc_targets();
        let micronutrients = self.get_micronutrient_targets()?;

        let macros = [
            (nutrient_keys::ENERGY, NutrientAmount::Whole(pfc.energy)),
            (nutrient_keys::PROTEIN, NutrientAmount::Fractional(pfc.protein)),
            (nutrient_keys::FAT, NutrientAmount::Fractional(pfc.fat)),
            (
                nutrient_keys::CARBOHYDRATE,
                NutrientAmount::Fractional(pfc.carbohydrate),
            ),
        ];
        let targets: NutrientTargetSet = macros
            .into_iter()
            .map(|(key, amount)| (key.to_owned(), amount))
            .chain(micronutrients)
            .collect();

        debug!(
            user_id = ?self.profile.user_id,
            targets = targets.len(),
            energy = pfc.energy,
            "assembled nutrient targets"
        );
        Ok(targets)
    }

    /// All targets with display units attached
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::ReferenceDataMissing`] if the table lacks the row
    pub fn get_all_targets_with_units(&self) -> Result<AnnotatedTargetSet, NutritionError> {
        Ok(self.get_all_targets()?.with_units())
    }
}
