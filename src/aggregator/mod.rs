//! Aggregation of frame logs into named time series.
//!
//! This module folds the streamed logs into:
//! - Per-frame population counts and hunger/health means by diet group
//! - Per-species population and trait-mean series
//! - A mean plant food series
//!
//! All folds are single-pass; memory is bounded by species and frame
//! counts, never by total snapshots.

pub mod animals;
pub mod plants;

// Re-export main types and functions
pub use animals::{aggregate_animal_frames, AnimalTrends};
pub use plants::aggregate_plant_frames;

use crate::parser::schema::TrendsReport;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;

/// Assemble the versioned report handed to renderers
///
/// **Public** - used by the trends command to create final output
pub fn to_report(trends: &AnimalTrends, avg_plant_food: &[f64]) -> TrendsReport {
    TrendsReport {
        version: SCHEMA_VERSION.to_string(),
        animal_frames: trends.frame_count(),
        plant_frames: avg_plant_food.len(),
        total_herbivores: trends.total_herbivores.clone(),
        total_carnivores: trends.total_carnivores.clone(),
        hunger_herbivores: trends.hunger_herbivores.clone(),
        health_herbivores: trends.health_herbivores.clone(),
        hunger_carnivores: trends.hunger_carnivores.clone(),
        health_carnivores: trends.health_carnivores.clone(),
        species_populations: trends.species_populations.clone(),
        stealth_by_species: trends.stealth_by_species.clone(),
        detection_by_species: trends.detection_by_species.clone(),
        speed_by_species: trends.speed_by_species.clone(),
        avg_plant_food: avg_plant_food.to_vec(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
