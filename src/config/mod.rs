// ABOUTME: Configuration management for the nutrient target engine
// ABOUTME: Environment-only settings for reference data and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary
//! Configuration module
//!
//! All configuration comes from environment variables; there are no config files.
//!
//! - **Nutrition**: reference dataset location
//! - **Logging**: see [`crate::logging::LoggingConfig`]

/// Configuration error types
pub mod error;
/// Nutrient target engine configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{NutritionConfig, ReferenceDataSource, REFERENCE_PATH_ENV};

use std::env;

/// Read an environment variable, falling back to `default` when unset or invalid
#[must_use]
pub fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// True when an environment flag is set to anything but `false`/`0`
#[must_use]
pub fn env_flag(key: &str) -> bool {
    env::var(key).is_ok_and(|value| value != "false" && value != "0")
}
