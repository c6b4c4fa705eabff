//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the energy rating scale (`EnergyRating`)
//! - EPC column names and output file names
//! - run configuration (`ReportConfig`)

pub mod types;

pub use types::*;
