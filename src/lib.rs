//! `epc-facts` library crate.
//!
//! The binary (`epc`) is a thin wrapper around this library so that:
//!
//! - the pipeline is testable without spawning processes
//! - chart data can be checked without rasterising anything
//! - modules stay easy to navigate

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
