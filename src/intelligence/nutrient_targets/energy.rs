// ABOUTME: Basal metabolism, total energy, and PFC macro target formulas
// ABOUTME: Pure functions of weight, height, age, sex, and activity level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Energy and macronutrient formulas.
//!
//! Each step has its own numeric policy:
//! - basal metabolism is rounded to two decimals,
//! - total energy is truncated toward zero to a whole number,
//! - macro grams are rounded to one decimal.
//!
//! Rounding is half-to-even on the exact stored value, see [`round_to`].
//!
//! None of these functions validate their inputs. Zero weight, zero height or a
//! non-positive activity level flow through the arithmetic and produce
//! degenerate but deterministic results.

use crate::constants::{bmr, macro_policy, nutrient_keys};
use crate::models::Sex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round the exact binary value of `value` to `decimals` places, ties to even.
///
/// `70.25` becomes `70.2` and `70.35` (stored just below the tie) becomes `70.3`.
/// Non-finite input is returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| {
            exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Basal metabolism from the sex-specific linear regression.
///
/// `(0.0481*kg + 0.0234*cm - 0.0138*age - intercept) * 1000`, rounded to two
/// decimals. The intercept is 0.4235 for males and 0.9708 for females.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_basal_metabolism(weight_kg: f64, height_cm: f64, age: i32, sex: Sex) -> f64 {
    let intercept = match sex {
        Sex::Male => bmr::MALE_INTERCEPT,
        Sex::Female => bmr::FEMALE_INTERCEPT,
    };
    // Unfused, left to right
    let raw = bmr::WEIGHT_COEF * weight_kg + bmr::HEIGHT_COEF * height_cm
        - bmr::AGE_COEF * f64::from(age)
        - intercept;
    round_to(raw * bmr::OUTPUT_SCALE, bmr::DECIMALS)
}

/// Total daily energy: `basal * activity_level`, truncated toward zero
#[must_use]
pub fn calculate_total_energy(basal_metabolism: f64, activity_level: f64) -> i64 {
    (basal_metabolism * activity_level).trunc() as i64
}

/// Energy and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PfcTargets {
    /// Total daily energy (kcal)
    pub energy: i64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrate (g)
    pub carbohydrate: f64,
}

impl PfcTargets {
    /// Entries as `(key, value)` pairs in output order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            (nutrient_keys::ENERGY, self.energy as f64),
            (nutrient_keys::PROTEIN, self.protein),
            (nutrient_keys::FAT, self.fat),
            (nutrient_keys::CARBOHYDRATE, self.carbohydrate),
        ]
    }
}

/// Protein/fat/carbohydrate targets for a given total energy and body weight.
///
/// - protein: 1.0 g per kg
/// - fat: 25 % of energy at 9 kcal/g
/// - carbohydrate: 50 % of energy at 4 kcal/g
#[must_use]
pub fn calculate_pfc_targets(total_energy: i64, weight_kg: f64) -> PfcTargets {
    let energy = total_energy as f64;
    PfcTargets {
        energy: total_energy,
        protein: round_to(
            weight_kg * macro_policy::PROTEIN_G_PER_KG,
            macro_policy::DECIMALS,
        ),
        fat: round_to(
            energy * macro_policy::FAT_ENERGY_FRACTION / macro_policy::FAT_KCAL_PER_G,
            macro_policy::DECIMALS,
        ),
        carbohydrate: round_to(
            energy * macro_policy::CARBOHYDRATE_ENERGY_FRACTION
                / macro_policy::CARBOHYDRATE_KCAL_PER_G,
            macro_policy::DECIMALS,
        ),
    }
}
