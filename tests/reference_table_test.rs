// ABOUTME: Integration tests for loading and validating the micronutrient reference dataset
// ABOUTME: Covers file overrides, environment configuration, and malformed dataset rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use gymdiary_nutrition::config::{NutritionConfig, ReferenceDataSource, REFERENCE_PATH_ENV};
use gymdiary_nutrition::errors::{AppError, ErrorCode, NutritionError};
use gymdiary_nutrition::intelligence::nutrient_targets::{
    AgeBucket, MicronutrientReferenceTable, NutrientAmount,
};
use gymdiary_nutrition::models::Sex;
use gymdiary_nutrition::resources::NutritionResources;
use serial_test::serial;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

mod common;

use common::{bundled_json, profile_aged, today};

fn write_dataset(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// BUNDLED DATASET
// ============================================================================

#[test]
fn test_bundled_dataset_is_complete() {
    let table = MicronutrientReferenceTable::bundled().unwrap();
    assert_eq!(table.row_count(), Sex::ALL.len() * AgeBucket::ALL.len());

    for sex in Sex::ALL {
        for bucket in AgeBucket::ALL {
            let row = table.row(sex, bucket).unwrap();
            assert_eq!(row.len(), 28, "{sex}/{bucket}");
        }
    }
    assert!(!table.nutrient_keys().contains("energy"));
}

// ============================================================================
// FILE OVERRIDE
// ============================================================================

#[test]
fn test_file_dataset_overrides_values() {
    let mut json = bundled_json();
    json["female"]["30-49"]["鉄"] = serde_json::json!(12.0);
    let file = write_dataset(&json);

    let config = NutritionConfig::default().with_reference_file(file.path());
    let resources = NutritionResources::new(config).unwrap();
    let calc = resources
        .calculator_for(profile_aged(Sex::Female, 35), 55.0, today())
        .unwrap();

    let row = calc.get_micronutrient_targets().unwrap();
    assert_eq!(row["鉄"], NutrientAmount::Fractional(12.0));
}

#[test]
fn test_unreadable_file() {
    let err = MicronutrientReferenceTable::from_path(Path::new("/nonexistent/intake.json"))
        .unwrap_err();
    assert!(matches!(err, NutritionError::ReferenceDataUnreadable { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_missing_bucket_names_key_path() {
    let mut json = bundled_json();
    json["male"].as_object_mut().unwrap().remove("65-74");

    let err = MicronutrientReferenceTable::from_json_str(&json.to_string()).unwrap_err();
    assert_eq!(
        err,
        NutritionError::ReferenceDataMissing {
            key_path: "male/65-74".to_owned()
        }
    );
}

#[test]
fn test_missing_sex() {
    let mut json = bundled_json();
    json.as_object_mut().unwrap().remove("female");

    let err = MicronutrientReferenceTable::from_json_str(&json.to_string()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigMissing);
}

#[test]
fn test_malformed_datasets_rejected() {
    let mut unknown_sex = bundled_json();
    unknown_sex["other"] = unknown_sex["male"].clone();

    let mut unknown_bucket = bundled_json();
    unknown_bucket["male"]["12-17"] = unknown_bucket["male"]["18-29"].clone();

    let mut macro_key = bundled_json();
    macro_key["female"]["75+"]["protein"] = serde_json::json!(50);

    let mut non_numeric = bundled_json();
    non_numeric["male"]["18-29"]["鉄"] = serde_json::json!("7.5mg");

    for json in [unknown_sex, unknown_bucket, macro_key, non_numeric] {
        let err = MicronutrientReferenceTable::from_json_str(&json.to_string()).unwrap_err();
        assert!(
            matches!(err, NutritionError::ReferenceDataMalformed { .. }),
            "unexpected {err:?}"
        );
    }

    let err = MicronutrientReferenceTable::from_json_str("not json").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn test_nutrition_error_converts_to_app_error() {
    let app: AppError = NutritionError::UnsupportedAge { age: 16 }.into();
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
    assert_eq!(app.http_status(), 400);
}

// ============================================================================
// ENVIRONMENT CONFIGURATION
// ============================================================================

#[test]
#[serial]
fn test_env_default_is_bundled() {
    std::env::remove_var(REFERENCE_PATH_ENV);
    let config = NutritionConfig::from_env().unwrap();
    assert_eq!(config.reference_data, ReferenceDataSource::Bundled);
}

#[test]
#[serial]
fn test_env_blank_path_is_bundled() {
    std::env::set_var(REFERENCE_PATH_ENV, "   ");
    let config = NutritionConfig::from_env().unwrap();
    std::env::remove_var(REFERENCE_PATH_ENV);
    assert_eq!(config.reference_data, ReferenceDataSource::Bundled);
}

#[test]
#[serial]
fn test_env_path_selects_file() {
    let mut json = bundled_json();
    json["male"]["75+"]["亜鉛"] = serde_json::json!(11);
    let file = write_dataset(&json);

    std::env::set_var(REFERENCE_PATH_ENV, file.path());
    let config = NutritionConfig::from_env().unwrap();
    std::env::remove_var(REFERENCE_PATH_ENV);

    assert_eq!(
        config.reference_data,
        ReferenceDataSource::File(file.path().to_path_buf())
    );
    let table = MicronutrientReferenceTable::load(&config.reference_data).unwrap();
    let row = table.row(Sex::Male, AgeBucket::From75).unwrap();
    assert_eq!(row["亜鉛"], NutrientAmount::Whole(11));
}
