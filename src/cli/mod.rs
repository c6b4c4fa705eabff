//! Command-line parsing for the EPC facts reporter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline. Defaults reproduce the fixed on-disk layout, so the everyday
//! invocation is just `epc <LOCATION>`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "epc",
    version,
    about = "Chart energy ratings and property types from a cached EPC download"
)]
pub struct Cli {
    /// Location to report on, matched case-insensitively against the
    /// `domestic-*` folder names.
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Root of the data folder; certificates are read from
    /// `<DATA_ROOT>/raw/all-domestic-certificates`.
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_root: PathBuf,

    /// Folder the chart PNGs are written to.
    #[arg(long, value_name = "DIR", default_value = "plots")]
    pub plot_dir: PathBuf,

    /// File the summary sentence is written to.
    #[arg(long, value_name = "FILE", default_value = "data/processed_data/EPCfacts.md")]
    pub facts: PathBuf,

    /// Also export the computed counts to JSON.
    #[arg(long = "export-json", value_name = "FILE")]
    pub export_json: Option<PathBuf>,

    /// TrueType font for chart text (defaults to a system sans-serif font).
    #[arg(long, value_name = "TTF")]
    pub font: Option<PathBuf>,

    /// More log output (repeat for trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
