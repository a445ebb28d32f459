//! End-to-end aggregation tests over file-backed frame streams.

use ecotrend::aggregator::{aggregate_animal_frames, aggregate_plant_frames, AnimalTrends};
use ecotrend::parser::frames::{animal_frames, plant_frames, AnimalFrame, AnimalSnapshot};
use ecotrend::parser::static_table::{AnimalAttributes, StaticTable};
use ecotrend::utils::error::DataFormatError;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn attrs(id: u64, species: &str, is_herbivore: bool) -> AnimalAttributes {
    AnimalAttributes {
        id,
        species_name: species.to_string(),
        is_herbivore,
        speed: Some(10.0),
        stealth_level: Some(5.0),
        detection_skill: Some(6.0),
        detection_range: Some(100.0),
    }
}

fn snapshot(id: u64, hunger: f64, health: f64) -> AnimalSnapshot {
    AnimalSnapshot {
        id,
        x: 0.0,
        y: 0.0,
        hunger,
        health,
    }
}

fn ok_frames(data: Vec<Vec<AnimalSnapshot>>) -> Vec<Result<AnimalFrame, DataFormatError>> {
    data.into_iter()
        .map(|data| Ok(AnimalFrame { data }))
        .collect()
}

/// Concatenate two folds' series the way a single fold over the
/// concatenated log would produce them.
fn concat_trends(mut first: AnimalTrends, second: AnimalTrends) -> AnimalTrends {
    first.total_herbivores.extend(second.total_herbivores);
    first.total_carnivores.extend(second.total_carnivores);
    first.hunger_herbivores.extend(second.hunger_herbivores);
    first.health_herbivores.extend(second.health_herbivores);
    first.hunger_carnivores.extend(second.hunger_carnivores);
    first.health_carnivores.extend(second.health_carnivores);

    for (name, values) in second.species_populations {
        first.species_populations.entry(name).or_default().extend(values);
    }
    for (name, values) in second.stealth_by_species {
        first.stealth_by_species.entry(name).or_default().extend(values);
    }
    for (name, values) in second.detection_by_species {
        first.detection_by_species.entry(name).or_default().extend(values);
    }
    for (name, values) in second.speed_by_species {
        first.speed_by_species.entry(name).or_default().extend(values);
    }

    first
}

#[test]
fn test_end_to_end_from_files() {
    let static_file = write_temp(
        r#"[
            {"id": 1, "species_name": "Deer", "is_herbivore": true,
             "speed": 12.0, "stealth_level": 3.0,
             "detection_skill": 7.0, "detection_range": 120.0},
            {"id": 2, "species_name": "Wolf", "is_herbivore": false,
             "speed": 18.0, "stealth_level": 9.0,
             "detection_skill": 8.0, "detection_range": 200.0}
        ]"#,
    );
    let dynamic_file = write_temp(
        r#"[
            {"data": [{"id": 1, "x": 0.0, "y": 0.0, "hunger": 5.0, "health": 80.0},
                      {"id": 2, "x": 1.0, "y": 1.0, "hunger": 3.0, "health": 90.0}]},
            {"data": [{"id": 1, "x": 2.0, "y": 2.0, "hunger": 6.0, "health": 78.0}]}
        ]"#,
    );
    let plant_file = write_temp(
        r#"[
            {"plants": [{"x": 0.0, "y": 0.0, "food": 10.0}, {"x": 1.0, "y": 1.0, "food": 20.0}]},
            {"plants": []}
        ]"#,
    );

    let table = StaticTable::load(static_file.path()).unwrap();
    let trends =
        aggregate_animal_frames(&table, animal_frames(dynamic_file.path()).unwrap()).unwrap();
    let avg_food = aggregate_plant_frames(plant_frames(plant_file.path()).unwrap()).unwrap();

    assert_eq!(trends.total_herbivores, vec![1, 1]);
    assert_eq!(trends.total_carnivores, vec![1, 0]);
    assert_eq!(trends.hunger_herbivores, vec![5.0, 6.0]);
    assert_eq!(trends.health_carnivores, vec![90.0, 0.0]);
    assert_eq!(trends.species_populations["Deer"], vec![1, 1]);
    assert_eq!(trends.species_populations["Wolf"], vec![1]);
    assert_eq!(trends.stealth_by_species["Wolf"], vec![9.0]);
    assert_eq!(avg_food, vec![15.0, 0.0]);
}

#[test]
fn test_scalar_series_length_matches_frame_count() {
    let table = StaticTable::from_records(vec![attrs(1, "Deer", true)]);

    for frame_count in [0usize, 1, 7] {
        let stream = ok_frames(vec![vec![snapshot(1, 1.0, 1.0)]; frame_count]);
        let trends = aggregate_animal_frames(&table, stream).unwrap();

        assert_eq!(trends.total_herbivores.len(), frame_count);
        assert_eq!(trends.total_carnivores.len(), frame_count);
        assert_eq!(trends.hunger_herbivores.len(), frame_count);
        assert_eq!(trends.health_herbivores.len(), frame_count);
        assert_eq!(trends.hunger_carnivores.len(), frame_count);
        assert_eq!(trends.health_carnivores.len(), frame_count);
    }
}

#[test]
fn test_fold_is_additive_over_log_concatenation() {
    let table = StaticTable::from_records(vec![
        attrs(1, "Deer", true),
        attrs(2, "Wolf", false),
        attrs(3, "Rabbit", true),
    ]);

    let first_log = vec![
        vec![snapshot(1, 5.0, 80.0), snapshot(2, 3.0, 90.0)],
        vec![snapshot(3, 2.0, 60.0)],
    ];
    let second_log = vec![
        vec![],
        vec![snapshot(1, 6.0, 78.0), snapshot(3, 1.0, 65.0)],
    ];

    let combined: Vec<Vec<AnimalSnapshot>> = first_log
        .iter()
        .chain(second_log.iter())
        .cloned()
        .collect();

    let whole = aggregate_animal_frames(&table, ok_frames(combined)).unwrap();
    let first = aggregate_animal_frames(&table, ok_frames(first_log)).unwrap();
    let second = aggregate_animal_frames(&table, ok_frames(second_log)).unwrap();

    assert_eq!(whole, concat_trends(first, second));
}

#[test]
fn test_unknown_id_classified_without_error() {
    let table = StaticTable::from_records(vec![attrs(1, "Deer", true)]);
    let stream = ok_frames(vec![vec![snapshot(1, 2.0, 50.0), snapshot(42, 4.0, 30.0)]]);

    let trends = aggregate_animal_frames(&table, stream).unwrap();

    assert_eq!(trends.total_herbivores, vec![1]);
    assert_eq!(trends.total_carnivores, vec![1]);
    assert_eq!(trends.species_populations["Unknown"], vec![1]);
    assert_eq!(trends.speed_by_species["Unknown"], vec![0.0]);
}
