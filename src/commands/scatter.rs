//! Scatter command implementation.
//!
//! The scatter command:
//! 1. Loads the static animal table
//! 2. Streams both frame logs in lockstep
//! 3. Writes the per-frame scatter document

use crate::output::write_scatter;
use crate::parser::frames::{animal_frames, plant_frames};
use crate::parser::static_table::StaticTable;
use crate::scatter::{build_scatter_frames, ScatterConfig};
use crate::utils::config::{DYNAMIC_DATA_FILENAME, PLANT_DATA_FILENAME, STATIC_DATA_FILENAME};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the scatter command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ScatterArgs {
    /// Path to the static animal attribute file
    pub static_data: PathBuf,

    /// Path to the dynamic animal frame log
    pub dynamic_data: PathBuf,

    /// Path to the plant frame log
    pub plant_data: PathBuf,

    /// Output path for the JSON scatter document
    pub output_json: PathBuf,

    /// Scatter configuration (world extent, fps)
    pub config: ScatterConfig,
}

impl Default for ScatterArgs {
    fn default() -> Self {
        Self {
            static_data: PathBuf::from(STATIC_DATA_FILENAME),
            dynamic_data: PathBuf::from(DYNAMIC_DATA_FILENAME),
            plant_data: PathBuf::from(PLANT_DATA_FILENAME),
            output_json: PathBuf::from("scatter.json"),
            config: ScatterConfig::default(),
        }
    }
}

/// Execute the scatter command
///
/// **Public** - main entry point called from main.rs
pub fn execute_scatter(args: ScatterArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting scatter generation");

    // Step 1: Load the static table
    info!("Step 1/3: Loading static animal table...");
    let table = StaticTable::load(&args.static_data)
        .context("Failed to load static animal data")?;

    debug!("Static table holds {} animals", table.len());

    // Step 2: Stream both logs into scatter frames
    info!("Step 2/3: Building scatter frames...");
    let animals = animal_frames(&args.dynamic_data)
        .context("Failed to open dynamic animal data")?;
    let plants = plant_frames(&args.plant_data).context("Failed to open plant data")?;
    let document = build_scatter_frames(&table, animals, plants, Some(&args.config))
        .context("Failed to build scatter frames")?;

    // Step 3: Write the document
    info!("Step 3/3: Writing scatter document...");
    write_scatter(&document, &args.output_json).context("Failed to write scatter document")?;

    info!("✓ Scatter data written to: {}", args.output_json.display());

    let elapsed = start_time.elapsed();
    info!("Scatter generation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate scatter arguments
///
/// **Public** - can be called before execute_scatter for early validation
pub fn validate_args(args: &ScatterArgs) -> Result<()> {
    let inputs = [
        ("Static", &args.static_data),
        ("Dynamic", &args.dynamic_data),
        ("Plant", &args.plant_data),
    ];

    for (label, path) in inputs {
        if !path.exists() {
            anyhow::bail!("{} data file not found: {}", label, path.display());
        }
    }

    if args.output_json.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.config.world_width <= 0.0 || args.config.world_height <= 0.0 {
        anyhow::bail!("World extent must be positive");
    }

    if args.config.fps == 0 {
        anyhow::bail!("fps must be greater than 0");
    }

    Ok(())
}
