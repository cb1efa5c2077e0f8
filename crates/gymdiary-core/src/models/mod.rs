// ABOUTME: Core data models for the nutrition engine
// ABOUTME: Re-exports profile, weight history, and meal logging records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

/// User profile, sex, and weight history
pub mod profile;

/// Meal logging records
pub mod meal;

pub use meal::{MealItem, MealRecord, MealRecordItem, TimeOfDay};
pub use profile::{latest_weight_kg, Sex, UserNutritionProfile, WeightRecord};
