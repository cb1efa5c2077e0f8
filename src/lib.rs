// ABOUTME: Main library entry point for the Gym Diary nutrient target engine
// ABOUTME: Computes BMR, daily energy, PFC targets, and micronutrient reference intakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

#![deny(unsafe_code)]

//! # Gym Diary Nutrition
//!
//! Daily nutrient targets for adult users of the Gym Diary app, from a user
//! profile and their latest body weight.
//!
//! ## Features
//!
//! - **Energy**: basal metabolism and activity-adjusted total energy
//! - **Macronutrients**: fixed protein/fat/carbohydrate split
//! - **Micronutrients**: reference intakes by sex and age bucket from a bundled dataset
//! - **Units**: optional display unit per nutrient
//! - **Intake**: daily totals from meal logs compared against the macro targets
//!
//! ## Architecture
//!
//! - **Models** and **constants** live in the `gymdiary-core` crate and are re-exported here
//! - **Intelligence**: the calculator and its formulas
//! - **Resources**: loads the reference table once and hands out calculators
//! - **Config** / **Logging**: environment-driven settings and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use gymdiary_nutrition::config::NutritionConfig;
//! use gymdiary_nutrition::models::{Sex, UserNutritionProfile};
//! use gymdiary_nutrition::resources::NutritionResources;
//!
//! fn main() -> anyhow::Result<()> {
//!     let resources = NutritionResources::shared(NutritionConfig::from_env()?)?;
//!     let birth = NaiveDate::from_ymd_opt(1990, 1, 15).ok_or_else(|| anyhow::anyhow!("date"))?;
//!     let profile = UserNutritionProfile::new(Sex::Male, birth, 175.0, 1.5);
//!
//!     let today = chrono::Local::now().date_naive();
//!     let calculator = resources.calculator_for(profile, 75.0, today)?;
//!     println!("{}", serde_json::to_string_pretty(&calculator.get_all_targets()?)?);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Error types, re-exported from `gymdiary-core`
pub mod errors;

/// Nutrient target calculation and intake analysis
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Shared resource container and process-wide reference table
pub mod resources;

/// Nutrient keys, formula coefficients, and policy constants
pub use gymdiary_core::constants;

/// User profile, weight history, and meal logging models
pub use gymdiary_core::models;
