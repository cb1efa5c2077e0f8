// ABOUTME: Configuration error types for environment-driven settings
// ABOUTME: Defines error variants for unreadable environment values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Configuration error types.

use crate::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable access error (e.g. non-unicode value)
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
