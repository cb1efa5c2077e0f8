// ABOUTME: Meal logging models for daily intake aggregation
// ABOUTME: MealItem, MealRecord, MealRecordItem, and TimeOfDay definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meal slot within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    Snack,
}

/// Shareable food definition, values per logged unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Food name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
}

/// One food entry in a meal, with consumed quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecordItem {
    /// Food consumed
    pub meal_item: MealItem,
    /// Quantity multiplier applied to the item's values
    pub quantity: f64,
    /// Display unit of the quantity (g, ml, piece, ...)
    pub unit: String,
}

/// A user's logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// Day the meal was eaten
    pub date: NaiveDate,
    /// Meal slot
    pub time_of_day: TimeOfDay,
    /// Foods in the meal
    #[serde(default)]
    pub items: Vec<MealRecordItem>,
}
