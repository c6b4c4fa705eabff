//! Shared domain types.
//!
//! - the ordinal energy rating scale (`EnergyRating`)
//! - the EPC column names the pipeline reads
//! - run configuration (`ReportConfig`)

use std::path::{Path, PathBuf};

/// Column holding the current energy efficiency grade.
pub const COL_RATING: &str = "CURRENT_ENERGY_RATING";
/// Column holding the free-text property type.
pub const COL_PROPERTY_TYPE: &str = "PROPERTY_TYPE";
/// Column holding the local authority code (e.g. `E09000033`).
pub const COL_AUTHORITY: &str = "LOCAL_AUTHORITY";
/// Column holding the local authority display name.
pub const COL_AUTHORITY_LABEL: &str = "LOCAL_AUTHORITY_LABEL";

/// Folder under `<data_root>/raw` that holds one `domestic-*` folder per location.
pub const CERTIFICATES_DIR: &str = "all-domestic-certificates";
pub const RAW_DIR: &str = "raw";
pub const CERTIFICATES_FILE: &str = "certificates.csv";
pub const LOCATION_FOLDER_PREFIX: &str = "domestic-";

pub const RATING_PLOT_FILE: &str = "horizontal_bar_plot_rating_records.png";
pub const PROPERTY_TYPE_PLOT_FILE: &str = "bar_chart_count_prop_by_type.png";

/// Energy efficiency grade, A (best) through G (worst).
///
/// The derived `Ord` follows declaration order, which is the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyRating {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyRating {
    pub const ALL: [EnergyRating; 7] = [
        EnergyRating::A,
        EnergyRating::B,
        EnergyRating::C,
        EnergyRating::D,
        EnergyRating::E,
        EnergyRating::F,
        EnergyRating::G,
    ];

    /// Parse an exact category letter. Anything else is not a category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(EnergyRating::A),
            "B" => Some(EnergyRating::B),
            "C" => Some(EnergyRating::C),
            "D" => Some(EnergyRating::D),
            "E" => Some(EnergyRating::E),
            "F" => Some(EnergyRating::F),
            "G" => Some(EnergyRating::G),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            EnergyRating::A => "A",
            EnergyRating::B => "B",
            EnergyRating::C => "C",
            EnergyRating::D => "D",
            EnergyRating::E => "E",
            EnergyRating::F => "F",
            EnergyRating::G => "G",
        }
    }

    /// Position on the scale, `0` for A.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for EnergyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Everything a run needs to know about where to read and write.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Location string as given on the command line.
    pub location: String,
    pub data_root: PathBuf,
    pub plot_dir: PathBuf,
    pub facts_path: PathBuf,
    pub export_json: Option<PathBuf>,
    /// Explicit TrueType font for chart text; discovered when `None`.
    pub font: Option<PathBuf>,
}

impl ReportConfig {
    /// Config with the default on-disk layout, relative to the working directory.
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            data_root: PathBuf::from("data"),
            plot_dir: PathBuf::from("plots"),
            facts_path: PathBuf::from("data/processed_data/EPCfacts.md"),
            export_json: None,
            font: None,
        }
    }

    /// `<data_root>/raw/all-domestic-certificates`
    pub fn certificates_root(&self) -> PathBuf {
        self.data_root.join(RAW_DIR).join(CERTIFICATES_DIR)
    }

    pub fn plot_path(&self, file_name: &str) -> PathBuf {
        self.plot_dir.join(file_name)
    }

    pub fn facts_path(&self) -> &Path {
        &self.facts_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_codes_are_exact() {
        assert_eq!(EnergyRating::from_code("C"), Some(EnergyRating::C));
        assert_eq!(EnergyRating::from_code("c"), None);
        assert_eq!(EnergyRating::from_code("H"), None);
        assert_eq!(EnergyRating::from_code("AB"), None);
    }

    #[test]
    fn rating_scale_order() {
        let codes: Vec<&str> = EnergyRating::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["A", "B", "C", "D", "E", "F", "G"]);
        assert!(EnergyRating::A < EnergyRating::G);
        assert_eq!(EnergyRating::G.index(), 6);
    }

    #[test]
    fn default_layout() {
        let config = ReportConfig::for_location("leeds");
        assert_eq!(
            config.certificates_root(),
            PathBuf::from("data/raw/all-domestic-certificates")
        );
        assert_eq!(
            config.plot_path(RATING_PLOT_FILE),
            PathBuf::from("plots/horizontal_bar_plot_rating_records.png")
        );
    }
}
