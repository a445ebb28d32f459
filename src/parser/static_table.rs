//! Static animal attribute table.
//!
//! The static file is written once per simulation run and is small
//! (bounded by the animal count), so it is decoded in full and held in
//! memory for id lookups during frame processing.

use crate::utils::error::DataFormatError;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One record of the static animal file
///
/// **Public** - returned by table lookups during aggregation
///
/// `id`, `species_name` and `is_herbivore` are required at decode time.
/// The numeric traits decode to `None` when absent; whether that is an
/// error is decided by the consumer (see `trait_values`).
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalAttributes {
    /// Animal identifier, matched against dynamic snapshots
    pub id: u64,

    /// Species display name
    pub species_name: String,

    /// Diet class: true = herbivore, false = carnivore
    pub is_herbivore: bool,

    /// Movement speed trait
    #[serde(default)]
    pub speed: Option<f64>,

    /// Stealth level trait
    #[serde(default)]
    pub stealth_level: Option<f64>,

    /// Detection skill trait
    #[serde(default)]
    pub detection_skill: Option<f64>,

    /// Detection range trait (recorded but not aggregated)
    #[serde(default)]
    pub detection_range: Option<f64>,
}

/// The trait values consumed by species-level aggregation
#[derive(Debug, Clone, Copy)]
pub struct TraitValues {
    pub speed: f64,
    pub stealth_level: f64,
    pub detection_skill: f64,
}

impl AnimalAttributes {
    /// Return the aggregated traits, or `None` if any is missing
    ///
    /// **Public** - used by the aggregator's strict trait lookup
    pub fn trait_values(&self) -> Option<TraitValues> {
        Some(TraitValues {
            speed: self.speed?,
            stealth_level: self.stealth_level?,
            detection_skill: self.detection_skill?,
        })
    }
}

/// In-memory lookup table keyed by animal id
///
/// **Public** - shared by the aggregator and the scatter builder
#[derive(Debug, Default, Clone)]
pub struct StaticTable {
    animals: HashMap<u64, AnimalAttributes>,
}

impl StaticTable {
    /// Load the static animal file
    ///
    /// **Public** - main entry point for table construction
    ///
    /// # Errors
    /// * `DataFormatError::Io` - file cannot be opened or read
    /// * `DataFormatError::Json` - malformed document or a record
    ///   missing `id`, `species_name` or `is_herbivore`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataFormatError> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let file = File::open(path).map_err(|source| DataFormatError::Io {
            path: label.clone(),
            source,
        })?;

        let records: Vec<AnimalAttributes> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| DataFormatError::Json {
                path: label.clone(),
                source,
            })?;

        debug!("Loaded {} static animal records from {}", records.len(), label);

        Ok(Self::from_records(records))
    }

    /// Build a table from already-decoded records
    ///
    /// **Public** - used by tests and embedding callers
    ///
    /// Duplicate ids keep the last record, matching the load order of
    /// the source file.
    pub fn from_records(records: Vec<AnimalAttributes>) -> Self {
        let animals = records.into_iter().map(|rec| (rec.id, rec)).collect();
        Self { animals }
    }

    /// Look up the attributes for an animal id
    pub fn get(&self, id: u64) -> Option<&AnimalAttributes> {
        self.animals.get(&id)
    }

    /// Number of animals in the table
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    /// True if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
