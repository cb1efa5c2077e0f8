// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, profile builders, and reference table helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `gymdiary_nutrition`

use chrono::NaiveDate;
use gymdiary_nutrition::intelligence::nutrient_targets::{
    MicronutrientReferenceTable, NutrientTargetCalculator, BUNDLED_REFERENCE_JSON,
};
use gymdiary_nutrition::models::{Sex, UserNutritionProfile};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Reference date used across tests
pub fn today() -> NaiveDate {
    date(2025, 6, 1)
}

/// Bundled reference table behind an `Arc`
pub fn bundled_table() -> Arc<MicronutrientReferenceTable> {
    Arc::new(MicronutrientReferenceTable::bundled().expect("bundled dataset is valid"))
}

/// Bundled dataset as a mutable JSON value
pub fn bundled_json() -> serde_json::Value {
    serde_json::from_str(BUNDLED_REFERENCE_JSON).expect("bundled dataset is JSON")
}

/// Profile of the given sex and age (on [`today`]) with typical adult measurements
pub fn profile_aged(sex: Sex, age: i32) -> UserNutritionProfile {
    let birth = date(2025 - age, 1, 15);
    UserNutritionProfile::new(sex, birth, 175.0, 1.5)
}

/// Calculator for a profile and weight, evaluated on [`today`]
pub fn calculator(profile: UserNutritionProfile, weight_kg: f64) -> NutrientTargetCalculator {
    init_test_logging();
    NutrientTargetCalculator::new(profile, weight_kg, bundled_table(), today())
        .expect("adult profile")
}
