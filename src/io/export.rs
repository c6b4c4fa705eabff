//! Export the computed report to JSON.
//!
//! The export is meant to be easy to consume in downstream scripts and keeps
//! the same A..G order and count ordering as the terminal report.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AppError;
use crate::io::output::ensure_dir;
use crate::report::{AuthoritySummary, RatingDistribution, ValueCount};

#[derive(Debug, Serialize)]
pub struct ReportFile<'a> {
    pub tool: &'static str,
    pub location: &'a str,
    pub source: &'a Path,
    pub total: usize,
    pub ratings: Vec<RatingCount>,
    pub unrated: usize,
    pub authorities: &'a [ValueCount],
    pub authority_labels: &'a [ValueCount],
    pub property_types: Vec<PropertyTypeCount<'a>>,
    pub fact: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RatingCount {
    pub rating: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PropertyTypeCount<'a> {
    pub property_type: &'a str,
    pub count: usize,
}

/// Everything the JSON export draws on.
pub struct ExportInput<'a> {
    pub location: &'a str,
    pub source: &'a Path,
    pub distribution: &'a RatingDistribution,
    pub authorities: &'a AuthoritySummary,
    pub property_types: &'a [(String, usize)],
    pub fact: &'a str,
}

pub fn build_report_file<'a>(input: &ExportInput<'a>) -> ReportFile<'a> {
    ReportFile {
        tool: "epc",
        location: input.location,
        source: input.source,
        total: input.authorities.total,
        ratings: input
            .distribution
            .iter()
            .map(|(rating, count)| RatingCount {
                rating: rating.code(),
                count,
            })
            .collect(),
        unrated: input.distribution.unrated,
        authorities: &input.authorities.by_code,
        authority_labels: &input.authorities.by_label,
        property_types: input
            .property_types
            .iter()
            .map(|(property_type, count)| PropertyTypeCount {
                property_type: property_type.as_str(),
                count: *count,
            })
            .collect(),
        fact: input.fact,
    }
}

/// Write the report JSON to `path`, creating parent folders.
pub fn write_report_json(path: &Path, input: &ExportInput<'_>) -> Result<PathBuf, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let file = File::create(path)
        .map_err(|e| AppError::write(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &build_report_file(input))
        .map_err(|e| AppError::write(format!("Failed to write report JSON: {e}")))?;

    Ok(path.to_path_buf())
}
