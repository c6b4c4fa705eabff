//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - runs the report pipeline
//! - writes charts and facts, then prints the summary

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing::info;

use crate::cli::Cli;
use crate::domain::ReportConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `epc` binary.
pub fn run() -> Result<(), AppError> {
    run_from(std::env::args_os())
}

/// Run with an explicit argv (first item is the program name).
pub fn run_from<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        // Any other argument problem is a usage error with exit status 1.
        Err(e) => return Err(AppError::usage(e.to_string().trim_end())),
    };

    crate::logging::init(crate::logging::level_from_flags(cli.verbose, cli.quiet));

    let config = report_config_from_args(&cli);
    let run = pipeline::run_report(&config)?;
    pipeline::write_outputs(&config, &run)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config.location, &run.dataset, &run.distribution, &run.authorities)
    );
    info!(stage = %pipeline::Stage::Done);

    Ok(())
}

pub fn report_config_from_args(cli: &Cli) -> ReportConfig {
    ReportConfig {
        location: cli.location.clone(),
        data_root: cli.data_root.clone(),
        plot_dir: cli.plot_dir.clone(),
        facts_path: cli.facts.clone(),
        export_json: cli.export_json.clone(),
        font: cli.font.clone(),
    }
}
