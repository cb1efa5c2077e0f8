// ABOUTME: Domain errors for the nutrient target engine
// ABOUTME: Separates caller input errors from reference data and configuration defects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! # Nutrition Error Types
//!
//! - Input domain errors (`UnsupportedAge`, `UnrecognizedSex`) are the caller's fault.
//! - Reference data errors (`ReferenceDataMissing`, `ReferenceDataMalformed`,
//!   `ReferenceDataUnreadable`) are deployment defects and abort construction.
//!
//! Both convert into [`AppError`] with a code from the matching HTTP status class.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while building or evaluating nutrient targets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NutritionError {
    /// Reference intakes only cover adults
    #[error("age {age} is not supported: nutrient targets are only defined for ages 18 and over")]
    UnsupportedAge {
        /// Age in whole years
        age: i32,
    },

    /// Sex value outside the two recognized values
    #[error("unrecognized sex '{value}': expected 'male' or 'female'")]
    UnrecognizedSex {
        /// Raw value supplied by the caller
        value: String,
    },

    /// Reference dataset has no entry for a required key path
    #[error("reference data missing entry '{key_path}'")]
    ReferenceDataMissing {
        /// Slash-separated path, e.g. `female/75+`
        key_path: String,
    },

    /// Reference dataset could not be parsed or violates its schema
    #[error("reference data malformed: {reason}")]
    ReferenceDataMalformed {
        /// Parser or validation message
        reason: String,
    },

    /// Reference dataset file could not be read
    #[error("reference data unreadable at {path}: {reason}")]
    ReferenceDataUnreadable {
        /// Location that was read
        path: String,
        /// I/O failure message
        reason: String,
    },
}

impl NutritionError {
    /// Build a missing-entry error from its key path segments
    #[must_use]
    pub fn missing(segments: &[&str]) -> Self {
        Self::ReferenceDataMissing {
            key_path: segments.join("/"),
        }
    }

    /// Build a malformed-data error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::ReferenceDataMalformed {
            reason: reason.into(),
        }
    }

    /// True for reference data and deployment defects, false for caller input errors
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ReferenceDataMissing { .. }
                | Self::ReferenceDataMalformed { .. }
                | Self::ReferenceDataUnreadable { .. }
        )
    }

    /// Stable error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedAge { .. } => ErrorCode::ValueOutOfRange,
            Self::UnrecognizedSex { .. } => ErrorCode::InvalidInput,
            Self::ReferenceDataMissing { .. } => ErrorCode::ConfigMissing,
            Self::ReferenceDataMalformed { .. } => ErrorCode::ConfigInvalid,
            Self::ReferenceDataUnreadable { .. } => ErrorCode::ConfigError,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(error: NutritionError) -> Self {
        let details = match &error {
            NutritionError::UnsupportedAge { age } => serde_json::json!({ "age": age }),
            NutritionError::UnrecognizedSex { value } => serde_json::json!({ "sex": value }),
            NutritionError::ReferenceDataMissing { key_path } => {
                serde_json::json!({ "key_path": key_path })
            }
            NutritionError::ReferenceDataUnreadable { path, .. } => {
                serde_json::json!({ "path": path })
            }
            NutritionError::ReferenceDataMalformed { .. } => serde_json::Value::Null,
        };
        Self::new(error.code(), error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_path_is_joined() {
        let error = NutritionError::missing(&["female", "75+"]);
        assert_eq!(
            error,
            NutritionError::ReferenceDataMissing {
                key_path: "female/75+".to_owned()
            }
        );
        assert!(error.to_string().contains("female/75+"));
    }

    #[test]
    fn test_classification() {
        assert!(!NutritionError::UnsupportedAge { age: 17 }.is_configuration());
        assert!(!NutritionError::UnrecognizedSex {
            value: "other".to_owned()
        }
        .is_configuration());
        assert!(NutritionError::malformed("not json").is_configuration());
    }

    #[test]
    fn test_conversion_to_app_error_keeps_status_class() {
        let input: AppError = NutritionError::UnsupportedAge { age: 16 }.into();
        assert_eq!(input.code, ErrorCode::ValueOutOfRange);
        assert_eq!(input.http_status(), 400);
        assert_eq!(input.context.details["age"], 16);

        let config: AppError = NutritionError::missing(&["male", "18-29"]).into();
        assert_eq!(config.code, ErrorCode::ConfigMissing);
        assert_eq!(config.http_status(), 500);
        assert_eq!(config.context.details["key_path"], "male/18-29");
    }
}
