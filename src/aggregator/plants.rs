//! Aggregation of the plant frame log.
//!
//! Independent of the animal pass: one mean food level per frame.

use crate::parser::frames::PlantFrame;
use crate::utils::error::DataFormatError;
use log::debug;

/// Fold the plant frame stream into a mean-food series
///
/// **Public** - main entry point for plant aggregation
///
/// Appends one value per frame in stream order; a frame with no plants
/// contributes 0 rather than dividing by zero.
///
/// # Errors
/// * any `DataFormatError` from the stream, forwarded as-is
pub fn aggregate_plant_frames<I>(frames: I) -> Result<Vec<f64>, DataFormatError>
where
    I: IntoIterator<Item = Result<PlantFrame, DataFormatError>>,
{
    let mut avg_food = Vec::new();

    for frame in frames {
        let frame = frame?;
        let count = frame.plants.len();
        let total: f64 = frame.plants.iter().map(|plant| plant.food).sum();

        avg_food.push(if count == 0 { 0.0 } else { total / count as f64 });
    }

    debug!("Aggregated {} plant frames", avg_food.len());

    Ok(avg_food)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::frames::PlantSnapshot;

    fn plant(food: f64) -> PlantSnapshot {
        PlantSnapshot {
            x: 0.0,
            y: 0.0,
            food,
        }
    }

    fn frame(plants: Vec<PlantSnapshot>) -> Result<PlantFrame, DataFormatError> {
        Ok(PlantFrame { plants })
    }

    #[test]
    fn test_mean_food_per_frame() {
        let stream = vec![
            frame(vec![plant(10.0), plant(20.0)]),
            frame(vec![plant(30.0)]),
        ];

        let avg = aggregate_plant_frames(stream).unwrap();
        assert_eq!(avg, vec![15.0, 30.0]);
    }

    #[test]
    fn test_empty_frame_contributes_zero() {
        let avg = aggregate_plant_frames(vec![frame(vec![])]).unwrap();
        assert_eq!(avg, vec![0.0]);
    }

    #[test]
    fn test_no_frames_yields_empty_series() {
        let avg = aggregate_plant_frames(Vec::new()).unwrap();
        assert!(avg.is_empty());
    }

    #[test]
    fn test_stream_error_aborts_fold() {
        let stream = vec![
            frame(vec![plant(5.0)]),
            Err(DataFormatError::NotAnArray {
                path: "plants.json".to_string(),
            }),
        ];

        assert!(aggregate_plant_frames(stream).is_err());
    }
}
