//! Trends command implementation.
//!
//! The trends command:
//! 1. Loads the static animal table
//! 2. Folds the dynamic animal log into trend series
//! 3. Folds the plant log into a mean-food series
//! 4. Writes the combined report

use crate::aggregator::{aggregate_animal_frames, aggregate_plant_frames, to_report};
use crate::output::write_report;
use crate::parser::frames::{animal_frames, plant_frames};
use crate::parser::static_table::StaticTable;
use crate::utils::config::{DYNAMIC_DATA_FILENAME, PLANT_DATA_FILENAME, STATIC_DATA_FILENAME};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the trends command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TrendsArgs {
    /// Path to the static animal attribute file
    pub static_data: PathBuf,

    /// Path to the dynamic animal frame log
    pub dynamic_data: PathBuf,

    /// Path to the plant frame log
    pub plant_data: PathBuf,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for TrendsArgs {
    fn default() -> Self {
        Self {
            static_data: PathBuf::from(STATIC_DATA_FILENAME),
            dynamic_data: PathBuf::from(DYNAMIC_DATA_FILENAME),
            plant_data: PathBuf::from(PLANT_DATA_FILENAME),
            output_json: PathBuf::from("trends.json"),
            print_summary: false,
        }
    }
}

/// Execute the trends command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * input decoding errors (`DataFormatError`) with context
/// * report write errors (`OutputError`) with context
pub fn execute_trends(args: TrendsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting trends analysis");
    info!("Static data:  {}", args.static_data.display());
    info!("Dynamic data: {}", args.dynamic_data.display());
    info!("Plant data:   {}", args.plant_data.display());

    // Step 1: Load the static table
    info!("Step 1/4: Loading static animal table...");
    let table = StaticTable::load(&args.static_data)
        .context("Failed to load static animal data")?;

    debug!("Static table holds {} animals", table.len());

    // Step 2: Fold the dynamic animal log
    info!("Step 2/4: Aggregating dynamic animal frames...");
    let frames = animal_frames(&args.dynamic_data)
        .context("Failed to open dynamic animal data")?;
    let trends = aggregate_animal_frames(&table, frames)
        .context("Failed to aggregate animal frames")?;

    debug!(
        "Aggregated {} frames, {} species",
        trends.frame_count(),
        trends.species_populations.len()
    );

    // Step 3: Fold the plant log
    info!("Step 3/4: Aggregating plant frames...");
    let plants = plant_frames(&args.plant_data).context("Failed to open plant data")?;
    let avg_plant_food = aggregate_plant_frames(plants)
        .context("Failed to aggregate plant frames")?;

    // Step 4: Write the report
    info!("Step 4/4: Writing trends report...");
    let report = to_report(&trends, &avg_plant_food);
    write_report(&report, &args.output_json).context("Failed to write trends report")?;

    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        print_summary(&report);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Print a text summary of the report to stdout
///
/// **Private** - internal helper for execute_trends
fn print_summary(report: &crate::parser::schema::TrendsReport) {
    println!("\n{}", "=".repeat(80));
    println!("TRENDS SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Animal Frames: {}", report.animal_frames);
    println!("Plant Frames:  {}", report.plant_frames);
    println!("Species:       {}", report.species_populations.len());

    for (species, populations) in &report.species_populations {
        let last = populations.last().copied().unwrap_or(0);
        let peak = populations.iter().copied().max().unwrap_or(0);
        println!("  {species}: final population {last}, peak {peak}");
    }

    if let Some(last_food) = report.avg_plant_food.last() {
        println!("Final mean plant food: {last_food:.2}");
    }

    println!("{}", "=".repeat(80));
}

/// Validate trends arguments
///
/// **Public** - can be called before execute_trends for early validation
pub fn validate_args(args: &TrendsArgs) -> Result<()> {
    let inputs = [
        ("Static", &args.static_data),
        ("Dynamic", &args.dynamic_data),
        ("Plant", &args.plant_data),
    ];

    for (label, path) in inputs {
        if path.as_os_str().is_empty() {
            anyhow::bail!("{} data path cannot be empty", label);
        }
        if !path.exists() {
            anyhow::bail!("{} data file not found: {}", label, path.display());
        }
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn existing_inputs() -> (tempfile::TempDir, TrendsArgs) {
        let dir = tempfile::tempdir().unwrap();
        let args = TrendsArgs {
            static_data: dir.path().join("static.json"),
            dynamic_data: dir.path().join("dynamic.json"),
            plant_data: dir.path().join("plants.json"),
            output_json: dir.path().join("trends.json"),
            print_summary: false,
        };
        fs::write(&args.static_data, "[]").unwrap();
        fs::write(&args.dynamic_data, "[]").unwrap();
        fs::write(&args.plant_data, "[]").unwrap();
        (dir, args)
    }

    #[test]
    fn test_validate_args_valid() {
        let (_dir, args) = existing_inputs();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_missing_input() {
        let (_dir, mut args) = existing_inputs();
        args.dynamic_data = PathBuf::from("does-not-exist.json");
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let (_dir, mut args) = existing_inputs();
        args.output_json = PathBuf::new();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_trends_end_to_end() {
        let (_dir, args) = existing_inputs();
        fs::write(
            &args.static_data,
            r#"[{"id": 1, "species_name": "Deer", "is_herbivore": true,
                "speed": 12.0, "stealth_level": 3.0,
                "detection_skill": 7.0, "detection_range": 100.0}]"#,
        )
        .unwrap();
        fs::write(
            &args.dynamic_data,
            r#"[{"data": [{"id": 1, "x": 0.0, "y": 0.0, "hunger": 5.0, "health": 80.0}]}]"#,
        )
        .unwrap();
        fs::write(&args.plant_data, r#"[{"plants": [{"x": 0.0, "y": 0.0, "food": 10.0}]}]"#)
            .unwrap();

        execute_trends(args.clone()).unwrap();

        let report = crate::output::read_report(&args.output_json).unwrap();
        assert_eq!(report.total_herbivores, vec![1]);
        assert_eq!(report.avg_plant_food, vec![10.0]);
    }
}
