// ABOUTME: Nutrient keys, regression coefficients, and macro split policy values
// ABOUTME: Named constants to eliminate magic numbers in target calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

/// Service names used in structured logs
pub mod service_names {
    /// Nutrient target engine
    pub const GYMDIARY_NUTRITION: &str = "gymdiary-nutrition";
}

/// Keys of the macronutrient entries in a target set
pub mod nutrient_keys {
    /// Total daily energy (kcal)
    pub const ENERGY: &str = "energy";
    /// Protein (g)
    pub const PROTEIN: &str = "protein";
    /// Fat (g)
    pub const FAT: &str = "fat";
    /// Carbohydrate (g)
    pub const CARBOHYDRATE: &str = "carbohydrate";

    /// All macronutrient keys, in output order
    pub const MACRO_KEYS: [&str; 4] = [ENERGY, PROTEIN, FAT, CARBOHYDRATE];
}

/// Basal metabolism regression coefficients.
///
/// `bmr = WEIGHT * kg + HEIGHT * cm - AGE * years - intercept(sex)`, scaled by
/// [`OUTPUT_SCALE`](bmr::OUTPUT_SCALE) and rounded to two decimals.
pub mod bmr {
    /// Per kilogram of body weight
    pub const WEIGHT_COEF: f64 = 0.0481;
    /// Per centimeter of height
    pub const HEIGHT_COEF: f64 = 0.0234;
    /// Per year of age (subtracted)
    pub const AGE_COEF: f64 = 0.0138;
    /// Male intercept (subtracted)
    pub const MALE_INTERCEPT: f64 = 0.4235;
    /// Female intercept (subtracted)
    pub const FEMALE_INTERCEPT: f64 = 0.9708;
    /// Multiplier applied to the raw regression output
    pub const OUTPUT_SCALE: f64 = 1000.0;
    /// Decimal places kept in the result
    pub const DECIMALS: u32 = 2;
}

/// Fixed protein/fat/carbohydrate split
pub mod macro_policy {
    /// Protein grams per kilogram of body weight
    pub const PROTEIN_G_PER_KG: f64 = 1.0;
    /// Share of total energy from fat
    pub const FAT_ENERGY_FRACTION: f64 = 0.25;
    /// Share of total energy from carbohydrate
    pub const CARBOHYDRATE_ENERGY_FRACTION: f64 = 0.5;
    /// Energy density of fat (kcal/g)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Energy density of carbohydrate (kcal/g)
    pub const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;
    /// Decimal places kept in macro gram targets
    pub const DECIMALS: u32 = 1;
}

/// Age bucket labels used as reference table keys
pub mod age_buckets {
    /// 18 to 29 inclusive
    pub const AGE_18_29: &str = "18-29";
    /// 30 to 49 inclusive
    pub const AGE_30_49: &str = "30-49";
    /// 50 to 64 inclusive
    pub const AGE_50_64: &str = "50-64";
    /// 65 to 74 inclusive
    pub const AGE_65_74: &str = "65-74";
    /// 75 and over
    pub const AGE_75_PLUS: &str = "75+";

    /// Youngest age covered by the reference intakes
    pub const MIN_SUPPORTED_AGE: i32 = 18;
}
