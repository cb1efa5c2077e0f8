// ABOUTME: Error handling facade for the nutrient target engine
// ABOUTME: Re-exports AppError, ErrorCode, and NutritionError from gymdiary-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! # Error Handling
//!
//! The error types are defined in `gymdiary-core` so that models and
//! constants can use them without depending on this crate.

pub use gymdiary_core::errors::nutrition;
pub use gymdiary_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
    NutritionError,
};
