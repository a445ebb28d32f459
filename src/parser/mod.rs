//! Input decoding and schema definitions.
//!
//! This module handles:
//! - Loading the static animal attribute table
//! - Streaming the dynamic animal and plant frame logs
//! - Defining the output artifact schema

pub mod frames;
pub mod schema;
pub mod static_table;

// Re-export main types
pub use frames::{
    animal_frames, plant_frames, AnimalFrame, AnimalSnapshot, JsonArrayReader, PlantFrame,
    PlantSnapshot,
};
pub use schema::{AnimalPoint, PlantPoint, ScatterDocument, ScatterFrame, TrendsReport};
pub use static_table::{AnimalAttributes, StaticTable, TraitValues};
