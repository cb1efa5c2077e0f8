// ABOUTME: Nutrient target engine: BMR, total energy, PFC split, and micronutrient intakes
// ABOUTME: Re-exports the calculator, formulas, reference table, and output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! # Nutrient Targets
//!
//! Derives a user's daily nutrient targets from their profile and latest weight:
//!
//! 1. Age in whole years and its adult age bucket ([`age`])
//! 2. Basal metabolism, total energy, and the fixed PFC split ([`energy`])
//! 3. Micronutrient reference intakes for the user's sex and age bucket ([`reference`])
//! 4. Merge into one flat target set, optionally with display units ([`calculator`], [`units`])
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gymdiary_nutrition::intelligence::nutrient_targets::{
//!     MicronutrientReferenceTable, NutrientTargetCalculator,
//! };
//! use gymdiary_nutrition::models::{Sex, UserNutritionProfile};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let birth = NaiveDate::from_ymd_opt(1990, 4, 1).ok_or("date")?;
//! let today = NaiveDate::from_ymd_opt(2025, 4, 1).ok_or("date")?;
//! let profile = UserNutritionProfile::new(Sex::Female, birth, 160.0, 1.5);
//! let table = Arc::new(MicronutrientReferenceTable::bundled()?);
//!
//! let calculator = NutrientTargetCalculator::new(profile, 55.0, table, today)?;
//! let targets = calculator.get_all_targets_with_units()?;
//! assert_eq!(targets.get("energy").map(|t| t.unit.as_str()), Some("kcal"));
//! # Ok(())
//! # }
//! ```

/// Age calculation and age bucket classification
pub mod age;
/// Per-user calculator
pub mod calculator;
/// Energy and macronutrient formulas
pub mod energy;
/// Micronutrient reference table
pub mod reference;
/// Output target sets
pub mod target_set;
/// Nutrient display units
pub mod units;

pub use age::{calculate_age, AgeBucket};
pub use calculator::NutrientTargetCalculator;
pub use energy::{
    calculate_basal_metabolism, calculate_pfc_targets, calculate_total_energy, round_to,
    PfcTargets,
};
pub use reference::{MicronutrientReferenceTable, MicronutrientRow, BUNDLED_REFERENCE_JSON};
pub use target_set::{AnnotatedNutrient, AnnotatedTargetSet, NutrientAmount, NutrientTargetSet};
pub use units::{unit_for, NUTRIENT_UNITS};
