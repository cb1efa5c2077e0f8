// ABOUTME: nutrient-targets CLI - prints a user's daily nutrient targets as JSON
// ABOUTME: Builds a profile from arguments and runs the shared nutrient target calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary
//!
//! Usage:
//! ```bash
//! # All targets for a 35-year-old woman weighing 55 kg
//! nutrient-targets --sex female --birth-date 1990-04-01 --height-cm 160 --activity-level 1.5 --weight-kg 55
//!
//! # Same, with display units attached
//! nutrient-targets --sex female --birth-date 1990-04-01 --height-cm 160 --activity-level 1.5 --weight-kg 55 --with-units
//!
//! # Energy and PFC only, evaluated on a fixed date
//! nutrient-targets --sex male --birth-date 1985-07-20 --height-cm 175 --activity-level 1.75 --weight-kg 72 --pfc-only --today 2025-01-01
//!
//! # Use a different reference dataset
//! NUTRIENT_REFERENCE_PATH=./intake.json nutrient-targets --sex male ...
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use gymdiary_nutrition::config::NutritionConfig;
use gymdiary_nutrition::logging::LoggingConfig;
use gymdiary_nutrition::models::{Sex, UserNutritionProfile};
use gymdiary_nutrition::resources::NutritionResources;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "nutrient-targets",
    about = "Gym Diary nutrient target calculator",
    long_about = "Computes basal metabolism, daily energy, PFC targets, and micronutrient reference intakes for an adult user."
)]
struct Cli {
    /// Sex used for the formulas and reference row (male or female)
    #[arg(long)]
    sex: Sex,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: NaiveDate,

    /// Height in centimetres
    #[arg(long)]
    height_cm: f64,

    /// Activity multiplier applied to basal metabolism (e.g. 1.5)
    #[arg(long)]
    activity_level: f64,

    /// Latest body weight in kilograms (omit when none is recorded)
    #[arg(long)]
    weight_kg: Option<f64>,

    /// Evaluate as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Attach a display unit to every target
    #[arg(long)]
    with_units: bool,

    /// Print only energy and protein/fat/carbohydrate
    #[arg(long, conflicts_with = "with_units")]
    pfc_only: bool,

    /// User ID attached to log events
    #[arg(long)]
    user_id: Option<Uuid>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = NutritionConfig::from_env().context("invalid nutrition configuration")?;
    info!(reference = %config.reference_data, "loading nutrient reference data");
    let resources = NutritionResources::shared(config)?;

    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut profile =
        UserNutritionProfile::new(cli.sex, cli.birth_date, cli.height_cm, cli.activity_level);
    if let Some(user_id) = cli.user_id {
        profile = profile.with_user_id(user_id);
    }
    let calculator = resources.calculator_for(profile, cli.weight_kg.unwrap_or(0.0), today)?;

    let output = if cli.pfc_only {
        serde_json::to_string_pretty(&calculator.get_pfc_targets())?
    } else if cli.with_units {
        serde_json::to_string_pretty(&calculator.get_all_targets_with_units()?)?
    } else {
        serde_json::to_string_pretty(&calculator.get_all_targets()?)?
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    const PROFILE: [&str; 9] = [
        "nutrient-targets",
        "--sex",
        "female",
        "--birth-date",
        "1990-04-01",
        "--height-cm",
        "160",
        "--activity-level",
        "1.5",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(PROFILE.iter().chain(extra).copied())
    }

    #[test]
    fn test_weight_is_optional() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.sex, Sex::Female);
        assert!(cli.weight_kg.is_none());
        assert!(cli.today.is_none());
        assert!(!cli.with_units && !cli.pfc_only);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--weight-kg",
            "55.5",
            "--today",
            "2025-01-01",
            "--with-units",
            "--user-id",
            "7f1c2d3e-4b5a-4c6d-8e9f-0a1b2c3d4e5f",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.weight_kg, Some(55.5));
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(cli.with_units);
        assert!(cli.user_id.is_some());
        assert!(cli.verbose);
    }

    #[test]
    fn test_pfc_only_conflicts_with_units() {
        let err = parse(&["--pfc-only", "--with-units"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_sex_rejected() {
        let mut args = PROFILE;
        args[2] = "other";
        let err = Cli::try_parse_from(args).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unrecognized sex 'other'"));
    }

    #[test]
    fn test_missing_required_argument() {
        let err = Cli::try_parse_from(&PROFILE[..7]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
