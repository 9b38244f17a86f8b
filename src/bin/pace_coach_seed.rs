// ABOUTME: Demo data seeder for the PACE coach dashboard
// ABOUTME: Populates file-backed storage with the demo athlete and sample logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PACE Performance Labs

//! Demo data seeder.
//!
//! Populates the document store with the demo athlete profile and a few
//! sample training, nutrition, and performance entries so the dashboard
//! has something to render.
//!
//! Usage:
//! ```bash
//! # Seed the default data directory
//! cargo run --bin pace-coach-seed
//!
//! # Seed a specific directory, clearing existing data first
//! cargo run --bin pace-coach-seed -- --data-dir ./demo-data --reset
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pace_coach_core::config::StorageLocation;
use pace_coach_core::logbook::Logbook;
use pace_coach_core::logging::LoggingConfig;
use pace_coach_core::models::{NutritionLogEntry, PerformanceEntry, TrainingLogEntry};
use pace_coach_core::profile::ProfileStore;
use pace_coach_core::storage::factory::Storage;

#[derive(Parser)]
#[command(
    name = "pace-coach-seed",
    about = "PACE Coach demo data seeder",
    long_about = "Populate the document store with the demo athlete profile and sample logs"
)]
struct SeedArgs {
    /// Storage directory override (defaults to PACE_STORAGE_DIR, then the
    /// platform data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Clear all stored documents before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let args = SeedArgs::parse();

    let location = args
        .data_dir
        .map_or_else(StorageLocation::from_env, StorageLocation::Directory);
    let storage =
        Arc::new(Storage::from_location(&location).context("could not open document storage")?);
    let profiles = ProfileStore::new(Arc::clone(&storage));
    let logbook = Logbook::new(storage);

    if args.reset {
        info!("clearing existing documents");
        if !logbook.clear_all(&profiles).await {
            anyhow::bail!("could not clear existing documents");
        }
    }

    // Reading seeds the default profile when none exists.
    let profile = profiles.read().await;
    logbook.ensure_defaults().await;
    info!(athlete = %profile.profile.name, "athlete profile ready");

    if logbook.training_logs().await.is_empty() {
        for entry in sample_training_logs() {
            if !logbook.add_training_log(entry).await {
                anyhow::bail!("could not write sample training log");
            }
        }
        info!("seeded sample training logs");
    }

    if logbook.nutrition_logs().await.is_empty() {
        for entry in sample_nutrition_logs() {
            if !logbook.add_nutrition_log(entry).await {
                anyhow::bail!("could not write sample nutrition log");
            }
        }
        info!("seeded sample nutrition logs");
    }

    if logbook.performance_data().await.is_empty() {
        let result = PerformanceEntry::record(
            "100m",
            "10.45s (wind +1.2)",
            "Dual Meet",
            "Season opener, good block clearance",
        );
        if !logbook.add_performance(result).await {
            anyhow::bail!("could not write sample performance entry");
        }
        info!("seeded sample performance data");
    }

    info!("demo data ready");
    Ok(())
}

fn sample_training_logs() -> Vec<TrainingLogEntry> {
    vec![
        TrainingLogEntry::record(
            "2025-08-05",
            "Tempo",
            "rhythm and relaxation",
            60,
            "medium",
            "6x100m @ 75% with 90s rest",
        ),
        TrainingLogEntry::record(
            "2025-08-06",
            "Strength Training",
            "lower body power",
            75,
            "high",
            "Back Squat 5x3 @ 85%, Power Clean 4x2 @ 90%",
        ),
        TrainingLogEntry::record(
            "2025-08-08",
            "Speed Development",
            "acceleration",
            55,
            "high",
            "3x30m, 3x60m from blocks",
        ),
    ]
}

fn sample_nutrition_logs() -> Vec<NutritionLogEntry> {
    vec![
        NutritionLogEntry::record("2025-08-06", 3250, 200, 410, 90, "travel day, lighter lunch"),
        NutritionLogEntry::record("2025-08-07", 3400, 210, 430, 95, "full training day"),
        NutritionLogEntry::record("2025-08-08", 3300, 205, 420, 92, "race-week carb focus"),
    ]
}
