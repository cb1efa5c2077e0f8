// ABOUTME: Output types for nutrient targets, bare or annotated with display units
// ABOUTME: NutrientAmount, NutrientTargetSet, AnnotatedNutrient, and AnnotatedTargetSet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use super::units::unit_for;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// A numeric target, kept whole when the source value was whole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientAmount {
    /// Whole number (energy, most reference intakes)
    Whole(i64),
    /// Fractional number
    Fractional(f64),
}

impl NutrientAmount {
    /// Value as a float
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(value) => value as f64,
            Self::Fractional(value) => value,
        }
    }
}

impl From<i64> for NutrientAmount {
    fn from(value: i64) -> Self {
        Self::Whole(value)
    }
}

impl From<f64> for NutrientAmount {
    fn from(value: f64) -> Self {
        Self::Fractional(value)
    }
}

impl fmt::Display for NutrientAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(value) => write!(f, "{value}"),
            Self::Fractional(value) => write!(f, "{value}"),
        }
    }
}

/// Flat nutrient key to target amount mapping.
///
/// Created fresh by each calculation; serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientTargetSet(BTreeMap<String, NutrientAmount>);

impl NutrientTargetSet {
    /// Target for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<NutrientAmount> {
        self.0.get(key).copied()
    }

    /// Whether `key` has a target
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, amount)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NutrientAmount)> {
        self.0.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    /// Nutrient keys in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Wrap every amount with its display unit.
    ///
    /// Keys without a known unit get an empty unit string.
    #[must_use]
    pub fn with_units(&self) -> AnnotatedTargetSet {
        self.0
            .iter()
            .map(|(key, amount)| {
                let unit = unit_for(key).unwrap_or_else(|| {
                    warn!(nutrient = %key, "no display unit mapped, using empty unit");
                    ""
                });
                (
                    key.clone(),
                    AnnotatedNutrient {
                        value: *amount,
                        unit: unit.to_owned(),
                    },
                )
            })
            .collect()
    }
}

impl FromIterator<(String, NutrientAmount)> for NutrientTargetSet {
    fn from_iter<I: IntoIterator<Item = (String, NutrientAmount)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for NutrientTargetSet {
    type Item = (String, NutrientAmount);
    type IntoIter = std::collections::btree_map::IntoIter<String, NutrientAmount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Target amount with its display unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedNutrient {
    /// Target amount
    pub value: NutrientAmount,
    /// Display unit, empty when unmapped
    pub unit: String,
}

/// Flat nutrient key to `{value, unit}` mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotatedTargetSet(BTreeMap<String, AnnotatedNutrient>);

impl AnnotatedTargetSet {
    /// Annotated target for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AnnotatedNutrient> {
        self.0.get(key)
    }

    /// Number of targets
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no targets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, annotated)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotatedNutrient)> {
        self.0.iter().map(|(key, annotated)| (key.as_str(), annotated))
    }
}

impl FromIterator<(String, AnnotatedNutrient)> for AnnotatedTargetSet {
    fn from_iter<I: IntoIterator<Item = (String, AnnotatedNutrient)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_deserializes_whole_and_fractional() {
        let whole: NutrientAmount = serde_json::from_str("850").unwrap();
        let fractional: NutrientAmount = serde_json::from_str("8.5").unwrap();
        assert_eq!(whole, NutrientAmount::Whole(850));
        assert_eq!(fractional, NutrientAmount::Fractional(8.5));
    }

    #[test]
    fn test_set_serializes_as_flat_object() {
        let set: NutrientTargetSet = [
            ("energy".to_owned(), NutrientAmount::Whole(2400)),
            ("fat".to_owned(), NutrientAmount::Fractional(66.7)),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({ "energy": 2400, "fat": 66.7 }));
    }

    #[test]
    fn test_unmapped_key_gets_empty_unit() {
        let set: NutrientTargetSet = [
            ("ビタミンC".to_owned(), NutrientAmount::Whole(100)),
            ("オメガ3".to_owned(), NutrientAmount::Fractional(2.0)),
        ]
        .into_iter()
        .collect();
        let annotated = set.with_units();
        assert_eq!(annotated.get("ビタミンC").unwrap().unit, "mg");
        assert_eq!(annotated.get("オメガ3").unwrap().unit, "");
        assert_eq!(
            serde_json::to_value(annotated.get("オメガ3").unwrap()).unwrap(),
            serde_json::json!({ "value": 2.0, "unit": "" })
        );
    }
}
