// ABOUTME: Daily intake aggregation from meal records and comparison against targets
// ABOUTME: Sums logged energy and macros per day and reports progress toward PFC targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Daily intake summary.
//!
//! Each logged item contributes `per-unit value * quantity`. The item's serving
//! size is not consulted; quantities are multipliers of the stored values.

use crate::constants::nutrient_keys;
use crate::intelligence::nutrient_targets::{unit_for, PfcTargets};
use crate::models::MealRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Totals of everything a user logged on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntakeSummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Energy (kcal)
    pub total_calories: f64,
    /// Protein (g)
    pub total_protein: f64,
    /// Fat (g)
    pub total_fat: f64,
    /// Carbohydrate (g)
    pub total_carbs: f64,
    /// Meal records on that day
    pub record_count: usize,
}

impl DailyIntakeSummary {
    /// Intake for a macronutrient key
    #[must_use]
    pub fn intake_for(&self, key: &str) -> Option<f64> {
        match key {
            nutrient_keys::ENERGY => Some(self.total_calories),
            nutrient_keys::PROTEIN => Some(self.total_protein),
            nutrient_keys::FAT => Some(self.total_fat),
            nutrient_keys::CARBOHYDRATE => Some(self.total_carbs),
            _ => None,
        }
    }
}

/// Summarize the records logged on `date`.
///
/// Returns `None` when nothing was logged that day.
#[must_use]
pub fn summarize_day(records: &[MealRecord], date: NaiveDate) -> Option<DailyIntakeSummary> {
    let day: Vec<&MealRecord> = records.iter().filter(|record| record.date == date).collect();
    if day.is_empty() {
        return None;
    }

    let mut summary = DailyIntakeSummary {
        date,
        total_calories: 0.0,
        total_protein: 0.0,
        total_fat: 0.0,
        total_carbs: 0.0,
        record_count: day.len(),
    };
    for item in day.iter().flat_map(|record| &record.items) {
        let food = &item.meal_item;
        summary.total_calories += food.calories * item.quantity;
        summary.total_protein += food.protein * item.quantity;
        summary.total_fat += food.fat * item.quantity;
        summary.total_carbs += food.carbs * item.quantity;
    }
    Some(summary)
}

/// Progress of one nutrient toward its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    /// Nutrient key
    pub nutrient: String,
    /// Amount consumed
    pub intake: f64,
    /// Target amount
    pub target: f64,
    /// Display unit
    pub unit: String,
    /// `intake / target`; absent when the target is not positive
    pub ratio: Option<f64>,
}

/// Compare a day's intake against energy and PFC targets, in target order
#[must_use]
pub fn compare_with_targets(
    summary: &DailyIntakeSummary,
    targets: &PfcTargets,
) -> Vec<NutrientProgress> {
    targets
        .entries()
        .into_iter()
        .map(|(key, target)| {
            let intake = summary.intake_for(key).unwrap_or_default();
            NutrientProgress {
                nutrient: key.to_owned(),
                intake,
                target,
                unit: unit_for(key).unwrap_or_default().to_owned(),
                ratio: (target > 0.0).then(|| intake / target),
            }
        })
        .collect()
}
