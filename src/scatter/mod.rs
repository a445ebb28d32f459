//! Scatter animation data generation.
//!
//! Converts the frame logs into per-frame point lists an animation
//! renderer can draw directly, without re-reading the raw logs.

pub mod generator;

// Re-export main types
pub use generator::{build_scatter_frames, ScatterConfig};
