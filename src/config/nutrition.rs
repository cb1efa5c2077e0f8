// ABOUTME: Nutrient target engine configuration loaded from the environment
// ABOUTME: Selects the micronutrient reference dataset (bundled or file override)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Nutrient Target Configuration
//!
//! The macro split and regression coefficients are fixed policy and live in
//! [`crate::constants`]; only the reference dataset location is configurable.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable overriding the bundled reference dataset
pub const REFERENCE_PATH_ENV: &str = "NUTRIENT_REFERENCE_PATH";

/// Where the micronutrient reference table is read from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ReferenceDataSource {
    /// Dataset compiled into the binary
    #[default]
    Bundled,
    /// JSON file on disk
    File(PathBuf),
}

impl fmt::Display for ReferenceDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Nutrient target engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Micronutrient reference dataset location
    pub reference_data: ReferenceDataSource,
}

impl NutritionConfig {
    /// Load configuration from environment variables.
    ///
    /// A blank `NUTRIENT_REFERENCE_PATH` is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds non-unicode data
    pub fn from_env() -> Result<Self, ConfigError> {
        let reference_data = match env::var(REFERENCE_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                ReferenceDataSource::File(PathBuf::from(path.trim()))
            }
            Ok(_) | Err(env::VarError::NotPresent) => ReferenceDataSource::Bundled,
            Err(e @ env::VarError::NotUnicode(_)) => return Err(e.into()),
        };

        Ok(Self { reference_data })
    }

    /// Use a dataset file instead of the bundled one
    #[must_use]
    pub fn with_reference_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_data = ReferenceDataSource::File(path.into());
        self
    }
}
