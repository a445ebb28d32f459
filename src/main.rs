//! Ecotrend CLI
//!
//! A batch post-processing tool for ecosystem simulation logs.
//! Generates trend reports and scatter animation data from recorded runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use ecotrend::commands::{self, ScatterArgs, TrendsArgs};
use ecotrend::scatter::ScatterConfig;
use ecotrend::utils::config::{
    DEFAULT_ANIMATION_FPS, DEFAULT_WORLD_EXTENT, DYNAMIC_DATA_FILENAME, PLANT_DATA_FILENAME,
    SCHEMA_VERSION, STATIC_DATA_FILENAME,
};

/// Ecotrend - trend analysis for ecosystem simulation logs
#[derive(Parser, Debug)]
#[command(name = "ecotrend")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the frame logs into trend series
    Trends {
        /// Path to the static animal attribute file
        #[arg(long, default_value = STATIC_DATA_FILENAME)]
        static_data: PathBuf,

        /// Path to the dynamic animal frame log
        #[arg(long, default_value = DYNAMIC_DATA_FILENAME)]
        dynamic_data: PathBuf,

        /// Path to the plant frame log
        #[arg(long, default_value = PLANT_DATA_FILENAME)]
        plant_data: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "trends.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Build per-frame scatter data for the animation renderer
    Scatter {
        /// Path to the static animal attribute file
        #[arg(long, default_value = STATIC_DATA_FILENAME)]
        static_data: PathBuf,

        /// Path to the dynamic animal frame log
        #[arg(long, default_value = DYNAMIC_DATA_FILENAME)]
        dynamic_data: PathBuf,

        /// Path to the plant frame log
        #[arg(long, default_value = PLANT_DATA_FILENAME)]
        plant_data: PathBuf,

        /// Output path for the JSON scatter document
        #[arg(short, long, default_value = "scatter.json")]
        output: PathBuf,

        /// World width in simulation units
        #[arg(long, default_value_t = DEFAULT_WORLD_EXTENT)]
        width: f64,

        /// World height in simulation units
        #[arg(long, default_value_t = DEFAULT_WORLD_EXTENT)]
        height: f64,

        /// Playback rate recorded in the document
        #[arg(long, default_value_t = DEFAULT_ANIMATION_FPS)]
        fps: u32,
    },

    /// Validate a trends report JSON file
    Validate {
        /// Path to the report file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Trends {
            static_data,
            dynamic_data,
            plant_data,
            output,
            summary,
        } => {
            let args = TrendsArgs {
                static_data,
                dynamic_data,
                plant_data,
                output_json: output,
                print_summary: summary,
            };

            commands::trends::validate_args(&args)?;
            commands::execute_trends(args)?;
        }

        Commands::Scatter {
            static_data,
            dynamic_data,
            plant_data,
            output,
            width,
            height,
            fps,
        } => {
            let args = ScatterArgs {
                static_data,
                dynamic_data,
                plant_data,
                output_json: output,
                config: ScatterConfig::new().with_world(width, height).with_fps(fps),
            };

            commands::scatter::validate_args(&args)?;
            commands::execute_scatter(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a trends report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use ecotrend::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid trends report");
    println!("  Version: {}", report.version);
    println!("  Animal Frames: {}", report.animal_frames);
    println!("  Plant Frames: {}", report.plant_frames);
    println!("  Species: {}", report.species_populations.len());

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Ecotrend Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  animal_frames: number        - Dynamic frames consumed");
        println!("  plant_frames: number         - Plant frames consumed");
        println!("  total_herbivores: array      - Herbivore count per frame");
        println!("  total_carnivores: array      - Carnivore count per frame");
        println!("  hunger_herbivores: array     - Mean herbivore hunger per frame");
        println!("  health_herbivores: array     - Mean herbivore health per frame");
        println!("  hunger_carnivores: array     - Mean carnivore hunger per frame");
        println!("  health_carnivores: array     - Mean carnivore health per frame");
        println!("  species_populations: object  - Per-species population series");
        println!("  stealth_by_species: object   - Per-species mean stealth series");
        println!("  detection_by_species: object - Per-species mean detection series");
        println!("  speed_by_species: object     - Per-species mean speed series");
        println!("  avg_plant_food: array        - Mean plant food per frame");
        println!("  generated_at: string         - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Ecotrend v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("A batch post-processing tool for ecosystem simulation logs.");
}
