//! The report pipeline.
//!
//! Locate → load → transform → aggregate, then render and write. The two
//! halves are separate so the numbers can be checked without touching the
//! plot or facts outputs.

use std::path::PathBuf;

use tracing::info;

use crate::data::with_rating_categories;
use crate::domain::{PROPERTY_TYPE_PLOT_FILE, RATING_PLOT_FILE, ReportConfig};
use crate::error::AppError;
use crate::io::{ExportInput, LocatedDataset, ensure_dir, load_table, locate_certificates, write_facts, write_report_json};
use crate::plot::{property_type_chart, rating_chart, render_bar_chart};
use crate::report::{
    AuthoritySummary, RatingDistribution, authority_summary, fact_sentence, property_type_counts,
    rating_distribution,
};

/// Where a run is in its single linear pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Located,
    Loaded,
    Transformed,
    Aggregated,
    Rendered,
    Written,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Located => "located",
            Stage::Loaded => "loaded",
            Stage::Transformed => "transformed",
            Stage::Aggregated => "aggregated",
            Stage::Rendered => "rendered",
            Stage::Written => "written",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// All computed outputs of one location's report.
#[derive(Debug, Clone)]
pub struct ReportRun {
    pub dataset: LocatedDataset,
    pub rows: usize,
    pub distribution: RatingDistribution,
    pub authorities: AuthoritySummary,
    pub property_types: Vec<(String, usize)>,
    pub fact: String,
}

/// Paths of everything `write_outputs` produced.
#[derive(Debug, Clone)]
pub struct WrittenOutputs {
    pub rating_plot: PathBuf,
    pub property_type_plot: PathBuf,
    pub facts: PathBuf,
    pub json: Option<PathBuf>,
}

/// Locate, load, transform and aggregate the certificates for `config.location`.
pub fn run_report(config: &ReportConfig) -> Result<ReportRun, AppError> {
    let dataset = locate_certificates(&config.certificates_root(), &config.location)?;
    info!(
        stage = %Stage::Located,
        folder = %dataset.folder_name,
        path = %dataset.certificates_path.display()
    );

    let raw = load_table(&dataset.certificates_path)?;
    info!(stage = %Stage::Loaded, rows = raw.n_rows());

    let table = with_rating_categories(&raw)?;
    drop(raw);
    info!(stage = %Stage::Transformed);

    let distribution = rating_distribution(&table)?;
    let authorities = authority_summary(&table)?;
    let property_types = property_type_counts(&table)?;
    let fact = fact_sentence(&authorities);
    info!(
        stage = %Stage::Aggregated,
        rated = distribution.rated(),
        unrated = distribution.unrated,
        top_authority = %authorities.top_label
    );

    Ok(ReportRun {
        dataset,
        rows: table.n_rows(),
        distribution,
        authorities,
        property_types,
        fact,
    })
}

/// Render both charts and write the facts file (and JSON export, if asked).
pub fn write_outputs(config: &ReportConfig, run: &ReportRun) -> Result<WrittenOutputs, AppError> {
    crate::plot::font::ensure_font(config.font.as_deref())?;
    ensure_dir(&config.plot_dir)?;

    let rating_plot = config.plot_path(RATING_PLOT_FILE);
    render_bar_chart(&rating_chart(&run.distribution), &rating_plot)?;

    let property_type_plot = config.plot_path(PROPERTY_TYPE_PLOT_FILE);
    render_bar_chart(&property_type_chart(&run.property_types), &property_type_plot)?;
    info!(
        stage = %Stage::Rendered,
        rating_plot = %rating_plot.display(),
        property_type_plot = %property_type_plot.display()
    );

    write_facts(config.facts_path(), &run.fact)?;

    let json = match &config.export_json {
        Some(path) => Some(write_report_json(
            path,
            &ExportInput {
                location: &config.location,
                source: &run.dataset.certificates_path,
                distribution: &run.distribution,
                authorities: &run.authorities,
                property_types: &run.property_types,
                fact: &run.fact,
            },
        )?),
        None => None,
    };
    info!(stage = %Stage::Written);

    Ok(WrittenOutputs {
        rating_plot,
        property_type_plot,
        facts: config.facts_path().to_path_buf(),
        json,
    })
}
