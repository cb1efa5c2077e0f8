// ABOUTME: Core types and constants for the Gym Diary nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrient constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

#![deny(unsafe_code)]

//! # Gym Diary Core
//!
//! Foundation crate providing shared types and constants for the Gym Diary
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `NutritionError`
//! - **constants**: Nutrient keys, formula coefficients, and macro policy values
//! - **models**: User profile, weight history, and meal logging records

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrient keys, formula coefficients, and policy constants
pub mod constants;

/// Core data models (profile, weight records, meal records)
pub mod models;
