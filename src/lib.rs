//! Ecotrend
//!
//! Population and trait trend analysis for ecosystem simulation logs.
//!
//! This crate provides the core implementation for the
//! `ecotrend` CLI tool: it folds a simulation run's recorded JSON logs
//! into aggregate time series and per-frame scatter data for downstream
//! chart and animation renderers.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install ecotrend
//! ecotrend --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod scatter;
pub mod utils;
