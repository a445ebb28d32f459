//! Output JSON schema definitions for derived artifacts.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level trends report written to JSON
///
/// Series come in two families. Scalar series hold exactly one value per
/// consumed frame. Species-keyed series follow a first-seen-append
/// policy: a species' vector gains an entry only for frames in which the
/// species appears, so it may be shorter than the frame count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of dynamic animal frames consumed
    pub animal_frames: usize,

    /// Number of plant frames consumed
    pub plant_frames: usize,

    /// Herbivore head count per frame
    pub total_herbivores: Vec<u64>,

    /// Carnivore head count per frame
    pub total_carnivores: Vec<u64>,

    /// Mean herbivore hunger per frame (0 when no herbivores)
    pub hunger_herbivores: Vec<f64>,

    /// Mean herbivore health per frame (0 when no herbivores)
    pub health_herbivores: Vec<f64>,

    /// Mean carnivore hunger per frame (0 when no carnivores)
    pub hunger_carnivores: Vec<f64>,

    /// Mean carnivore health per frame (0 when no carnivores)
    pub health_carnivores: Vec<f64>,

    /// Population per species, frames where the species appeared
    pub species_populations: BTreeMap<String, Vec<u64>>,

    /// Mean stealth level per species over time
    pub stealth_by_species: BTreeMap<String, Vec<f64>>,

    /// Mean detection skill per species over time
    pub detection_by_species: BTreeMap<String, Vec<f64>>,

    /// Mean speed per species over time
    pub speed_by_species: BTreeMap<String, Vec<f64>>,

    /// Mean plant food level per plant frame (0 when no plants)
    pub avg_plant_food: Vec<f64>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Scatter animation data written to JSON
///
/// One entry per frame up to the longer of the two logs; the shorter
/// log contributes empty point lists past its end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// World width in simulation units
    pub world_width: f64,

    /// World height in simulation units
    pub world_height: f64,

    /// Suggested playback rate for the renderer
    pub fps: u32,

    /// Per-frame scatter points, in frame order
    pub frames: Vec<ScatterFrame>,

    /// Timestamp when the document was generated
    pub generated_at: String,
}

/// Scatter points for a single frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterFrame {
    /// 0-based frame index
    pub frame: usize,

    /// Animal markers
    pub animals: Vec<AnimalPoint>,

    /// Plant markers
    pub plants: Vec<PlantPoint>,
}

/// One animal marker
///
/// The renderer maps `herbivore` to a color; `size` is the marker area
/// already scaled from the animal's health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalPoint {
    pub x: f64,
    pub y: f64,
    pub herbivore: bool,
    pub size: f64,
}

/// One plant marker, sized from its food level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}
