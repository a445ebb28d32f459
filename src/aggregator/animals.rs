//! Single-pass aggregation of the dynamic animal log.
//!
//! The fold consumes the frame stream once and keeps only derived
//! statistics, so memory stays bounded by the species count and frame
//! count rather than by total animal snapshots. The accumulator is
//! exclusively owned by the fold and returned by move on completion.

use crate::parser::frames::{AnimalFrame, AnimalSnapshot};
use crate::parser::static_table::{StaticTable, TraitValues};
use crate::utils::config::UNKNOWN_SPECIES;
use crate::utils::error::DataFormatError;
use log::debug;
use std::collections::BTreeMap;

/// Accumulated per-frame and per-species series
///
/// **Public** - the aggregator's output, consumed by report building
///
/// Scalar vectors hold one entry per consumed frame. Species-keyed maps
/// follow a first-seen-append policy: a species' vector only grows on
/// frames where the species appears, never zero-filled. Maps are sorted
/// by species name for stable serialization.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnimalTrends {
    pub total_herbivores: Vec<u64>,
    pub total_carnivores: Vec<u64>,
    pub hunger_herbivores: Vec<f64>,
    pub health_herbivores: Vec<f64>,
    pub hunger_carnivores: Vec<f64>,
    pub health_carnivores: Vec<f64>,
    pub species_populations: BTreeMap<String, Vec<u64>>,
    pub stealth_by_species: BTreeMap<String, Vec<f64>>,
    pub detection_by_species: BTreeMap<String, Vec<f64>>,
    pub speed_by_species: BTreeMap<String, Vec<f64>>,
}

impl AnimalTrends {
    /// Number of frames folded into the scalar series
    pub fn frame_count(&self) -> usize {
        self.total_herbivores.len()
    }
}

/// Running sums for one diet group within a frame
#[derive(Debug, Default)]
struct DietGroup {
    count: u64,
    hunger_total: f64,
    health_total: f64,
}

impl DietGroup {
    fn add(&mut self, animal: &AnimalSnapshot) {
        self.count += 1;
        self.hunger_total += animal.hunger;
        self.health_total += animal.health;
    }

    fn mean_hunger(&self) -> f64 {
        mean(self.hunger_total, self.count)
    }

    fn mean_health(&self) -> f64 {
        mean(self.health_total, self.count)
    }
}

/// Running sums for one species within a frame
///
/// `samples` counts only members with a static record; animals missing
/// from the table contribute to `count` but supply no trait samples.
#[derive(Debug, Default)]
struct SpeciesGroup {
    count: u64,
    samples: u64,
    stealth_total: f64,
    detection_total: f64,
    speed_total: f64,
}

impl SpeciesGroup {
    fn add_traits(&mut self, traits: TraitValues) {
        self.samples += 1;
        self.stealth_total += traits.stealth_level;
        self.detection_total += traits.detection_skill;
        self.speed_total += traits.speed;
    }

    fn mean_stealth(&self) -> f64 {
        mean(self.stealth_total, self.samples)
    }

    fn mean_detection(&self) -> f64 {
        mean(self.detection_total, self.samples)
    }

    fn mean_speed(&self) -> f64 {
        mean(self.speed_total, self.samples)
    }
}

/// Group mean with an explicit zero for empty groups instead of NaN
fn mean(total: f64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Fold the dynamic frame stream into trend series
///
/// **Public** - main entry point for animal aggregation
///
/// # Arguments
/// * `table` - static attribute table for per-animal classification
/// * `frames` - frame stream in file order, typically a `JsonArrayReader`
///
/// # Errors
/// * any `DataFormatError` from the stream, forwarded as-is
/// * `DataFormatError::MissingTraits` - an animal with a static record
///   whose trait fields are absent
pub fn aggregate_animal_frames<I>(
    table: &StaticTable,
    frames: I,
) -> Result<AnimalTrends, DataFormatError>
where
    I: IntoIterator<Item = Result<AnimalFrame, DataFormatError>>,
{
    let mut trends = AnimalTrends::default();

    for (index, frame) in frames.into_iter().enumerate() {
        let frame = frame?;
        fold_frame(&mut trends, table, index, &frame)?;
    }

    debug!(
        "Aggregated {} dynamic frames covering {} species",
        trends.frame_count(),
        trends.species_populations.len()
    );

    Ok(trends)
}

/// Fold a single frame into the accumulator
///
/// **Private** - internal step of aggregate_animal_frames
fn fold_frame(
    trends: &mut AnimalTrends,
    table: &StaticTable,
    frame_index: usize,
    frame: &AnimalFrame,
) -> Result<(), DataFormatError> {
    let mut herbivores = DietGroup::default();
    let mut carnivores = DietGroup::default();
    let mut species: BTreeMap<&str, SpeciesGroup> = BTreeMap::new();

    for animal in &frame.data {
        let record = table.get(animal.id);

        // Diet classification degrades to defaults for animals missing
        // from the static table; the trait lookup below stays strict.
        // TODO: decide whether absent trait fields should also default
        // instead of failing the run.
        let (species_name, is_herbivore) = match record {
            Some(rec) => (rec.species_name.as_str(), rec.is_herbivore),
            None => (UNKNOWN_SPECIES, false),
        };

        if is_herbivore {
            herbivores.add(animal);
        } else {
            carnivores.add(animal);
        }

        let group = species.entry(species_name).or_default();
        group.count += 1;

        if let Some(rec) = record {
            let traits =
                rec.trait_values()
                    .ok_or_else(|| DataFormatError::MissingTraits {
                        frame: frame_index,
                        id: animal.id,
                        species: species_name.to_string(),
                    })?;
            group.add_traits(traits);
        }
    }

    // Scalar series grow once per frame, zero for empty groups.
    trends.total_herbivores.push(herbivores.count);
    trends.total_carnivores.push(carnivores.count);
    trends.hunger_herbivores.push(herbivores.mean_hunger());
    trends.health_herbivores.push(herbivores.mean_health());
    trends.hunger_carnivores.push(carnivores.mean_hunger());
    trends.health_carnivores.push(carnivores.mean_health());

    // Species series grow only for species present in this frame.
    for (name, group) in species {
        trends
            .species_populations
            .entry(name.to_string())
            .or_default()
            .push(group.count);
        trends
            .stealth_by_species
            .entry(name.to_string())
            .or_default()
            .push(group.mean_stealth());
        trends
            .detection_by_species
            .entry(name.to_string())
            .or_default()
            .push(group.mean_detection());
        trends
            .speed_by_species
            .entry(name.to_string())
            .or_default()
            .push(group.mean_speed());
    }

    Ok(())
}
