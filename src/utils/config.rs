//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Species name used for animals with no record in the static table
pub const UNKNOWN_SPECIES: &str = "Unknown";

// Default input file names. A simulation run writes these three files
// into its run directory; the CLI uses them as flag defaults.
pub const STATIC_DATA_FILENAME: &str = "animal_static_data.json";
pub const DYNAMIC_DATA_FILENAME: &str = "animal_dynamic_data.json";
pub const PLANT_DATA_FILENAME: &str = "plant_data1.json";

// Scatter geometry. The simulation world is a square; marker sizes are
// derived from health (animals) and food (plants).
pub const DEFAULT_WORLD_EXTENT: f64 = 4000.0;
pub const HEALTH_SIZE_DIVISOR: f64 = 2.0;
pub const FOOD_SIZE_DIVISOR: f64 = 5.0;

/// Default playback rate recorded in the scatter document
pub const DEFAULT_ANIMATION_FPS: u32 = 30;
