//! Scatter frame generation for the animation renderer.
//!
//! Streams both frame logs in lockstep and emits per-frame point lists:
//! animal markers colored by diet class and sized by health, plant
//! markers sized by food level. The document covers the longer of the
//! two logs; the shorter one contributes empty lists past its end.

use crate::parser::frames::{AnimalFrame, PlantFrame};
use crate::parser::schema::{AnimalPoint, PlantPoint, ScatterDocument, ScatterFrame};
use crate::parser::static_table::StaticTable;
use crate::utils::config::{
    DEFAULT_ANIMATION_FPS, DEFAULT_WORLD_EXTENT, FOOD_SIZE_DIVISOR, HEALTH_SIZE_DIVISOR,
    SCHEMA_VERSION,
};
use crate::utils::error::DataFormatError;
use chrono::Utc;
use log::info;

/// Scatter document configuration
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub world_width: f64,
    pub world_height: f64,
    pub fps: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_EXTENT,
            world_height: DEFAULT_WORLD_EXTENT,
            fps: DEFAULT_ANIMATION_FPS,
        }
    }
}

impl ScatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_world(mut self, width: f64, height: f64) -> Self {
        self.world_width = width;
        self.world_height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}

/// Build scatter frames from the animal and plant logs
///
/// **Public** - main entry point for scatter generation
///
/// # Arguments
/// * `table` - static table used for diet classification
/// * `animal_frames` - dynamic animal frame stream
/// * `plant_frames` - plant frame stream
/// * `config` - world extent and playback rate, defaults when `None`
///
/// # Errors
/// * any `DataFormatError` from either stream, forwarded as-is
///
/// Diet lookup uses the same graceful default as the aggregator
/// (missing record = carnivore); trait fields are never consulted here.
pub fn build_scatter_frames<A, P>(
    table: &StaticTable,
    animal_frames: A,
    plant_frames: P,
    config: Option<&ScatterConfig>,
) -> Result<ScatterDocument, DataFormatError>
where
    A: IntoIterator<Item = Result<AnimalFrame, DataFormatError>>,
    P: IntoIterator<Item = Result<PlantFrame, DataFormatError>>,
{
    let config = config.cloned().unwrap_or_default();

    let mut animals = animal_frames.into_iter();
    let mut plants = plant_frames.into_iter();
    let mut frames = Vec::new();

    loop {
        let animal_frame = animals.next().transpose()?;
        let plant_frame = plants.next().transpose()?;

        if animal_frame.is_none() && plant_frame.is_none() {
            break;
        }

        frames.push(ScatterFrame {
            frame: frames.len(),
            animals: animal_frame
                .map(|frame| animal_points(table, &frame))
                .unwrap_or_default(),
            plants: plant_frame
                .map(|frame| plant_points(&frame))
                .unwrap_or_default(),
        });
    }

    info!("Built scatter data for {} frames", frames.len());

    Ok(ScatterDocument {
        version: SCHEMA_VERSION.to_string(),
        world_width: config.world_width,
        world_height: config.world_height,
        fps: config.fps,
        frames,
        generated_at: Utc::now().to_rfc3339(),
    })
}

/// Convert one dynamic frame to animal markers
///
/// **Private** - internal helper for build_scatter_frames
fn animal_points(table: &StaticTable, frame: &AnimalFrame) -> Vec<AnimalPoint> {
    frame
        .data
        .iter()
        .map(|animal| AnimalPoint {
            x: animal.x,
            y: animal.y,
            herbivore: table
                .get(animal.id)
                .map(|rec| rec.is_herbivore)
                .unwrap_or(false),
            size: animal.health / HEALTH_SIZE_DIVISOR,
        })
        .collect()
}

/// Convert one plant frame to plant markers
///
/// **Private** - internal helper for build_scatter_frames
fn plant_points(frame: &PlantFrame) -> Vec<PlantPoint> {
    frame
        .plants
        .iter()
        .map(|plant| PlantPoint {
            x: plant.x,
            y: plant.y,
            size: plant.food / FOOD_SIZE_DIVISOR,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::frames::{AnimalSnapshot, PlantSnapshot};
    use crate::parser::static_table::AnimalAttributes;

    fn herbivore_table() -> StaticTable {
        StaticTable::from_records(vec![AnimalAttributes {
            id: 1,
            species_name: "Deer".to_string(),
            is_herbivore: true,
            speed: None,
            stealth_level: None,
            detection_skill: None,
            detection_range: None,
        }])
    }

    fn animal_frame(data: Vec<AnimalSnapshot>) -> Result<AnimalFrame, DataFormatError> {
        Ok(AnimalFrame { data })
    }

    fn plant_frame(plants: Vec<PlantSnapshot>) -> Result<PlantFrame, DataFormatError> {
        Ok(PlantFrame { plants })
    }

    #[test]
    fn test_marker_sizes_and_diet() {
        let table = herbivore_table();
        let animals = vec![animal_frame(vec![
            AnimalSnapshot {
                id: 1,
                x: 100.0,
                y: 200.0,
                hunger: 0.0,
                health: 80.0,
            },
            AnimalSnapshot {
                id: 9, // not in the table: carnivore by default
                x: 300.0,
                y: 400.0,
                hunger: 0.0,
                health: 50.0,
            },
        ])];
        let plants = vec![plant_frame(vec![PlantSnapshot {
            x: 5.0,
            y: 6.0,
            food: 25.0,
        }])];

        let doc = build_scatter_frames(&table, animals, plants, None).unwrap();

        assert_eq!(doc.frames.len(), 1);
        let frame = &doc.frames[0];
        assert!(frame.animals[0].herbivore);
        assert_eq!(frame.animals[0].size, 40.0);
        assert!(!frame.animals[1].herbivore);
        assert_eq!(frame.animals[1].size, 25.0);
        assert_eq!(frame.plants[0].size, 5.0);
    }

    #[test]
    fn test_unequal_log_lengths_pad_with_empty_lists() {
        let table = herbivore_table();
        let animals = vec![animal_frame(vec![]), animal_frame(vec![])];
        let plants = vec![plant_frame(vec![PlantSnapshot {
            x: 0.0,
            y: 0.0,
            food: 10.0,
        }])];

        let doc = build_scatter_frames(&table, animals, plants, None).unwrap();

        assert_eq!(doc.frames.len(), 2);
        assert_eq!(doc.frames[1].frame, 1);
        assert!(doc.frames[1].plants.is_empty());
    }

    #[test]
    fn test_config_is_recorded() {
        let table = herbivore_table();
        let config = ScatterConfig::new().with_world(800.0, 600.0).with_fps(24);

        let doc = build_scatter_frames(
            &table,
            Vec::new(),
            Vec::new(),
            Some(&config),
        )
        .unwrap();

        assert_eq!(doc.world_width, 800.0);
        assert_eq!(doc.world_height, 600.0);
        assert_eq!(doc.fps, 24);
        assert!(doc.frames.is_empty());
    }

    #[test]
    fn test_stream_error_aborts_build() {
        let table = herbivore_table();
        let animals = vec![Err(DataFormatError::NotAnArray {
            path: "animals.json".to_string(),
        })];

        let result = build_scatter_frames(&table, animals, Vec::new(), None);
        assert!(result.is_err());
    }
}
