// ABOUTME: Intelligence module for nutrition target derivation and intake reporting
// ABOUTME: Groups the nutrient target engine and the daily intake summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! # Intelligence Module
//!
//! Domain algorithms of the nutrition engine. Everything here is synchronous,
//! allocation-light computation with no I/O once the reference table is loaded.

/// Daily intake aggregation and progress against targets
pub mod intake_summary;
/// Nutrient target engine
pub mod nutrient_targets;

pub use intake_summary::{compare_with_targets, summarize_day, DailyIntakeSummary, NutrientProgress};
pub use nutrient_targets::{
    AgeBucket, MicronutrientReferenceTable, NutrientTargetCalculator, NutrientTargetSet,
    PfcTargets,
};
