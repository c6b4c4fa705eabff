//! Resolve a location name to its cached certificates file.
//!
//! Locations are stored one folder each under
//! `<data_root>/raw/all-domestic-certificates/domestic-<location-ish>/`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{CERTIFICATES_FILE, LOCATION_FOLDER_PREFIX};
use crate::error::{AppError, ErrorKind};

/// The folder picked for a location and the certificates file inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedDataset {
    pub folder_name: String,
    /// Absolute path to `certificates.csv`.
    pub certificates_path: PathBuf,
}

/// Find the `domestic-*` folder under `certificates_root` whose name contains
/// `location` (case-insensitive).
///
/// When several folders match, the lexicographically smallest name wins.
pub fn locate_certificates(certificates_root: &Path, location: &str) -> Result<LocatedDataset, AppError> {
    let entries = fs::read_dir(certificates_root).map_err(|e| {
        AppError::read(format!(
            "Failed to list certificates folder '{}': {e}",
            certificates_root.display()
        ))
    })?;

    let needle = location.to_lowercase();
    let mut candidates = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            AppError::read(format!(
                "Failed to list certificates folder '{}': {e}",
                certificates_root.display()
            ))
        })?;

        // Follows symlinks, so a linked dataset folder still counts.
        if !entry.path().is_dir() {
            continue;
        }

        // Non-UTF-8 names cannot match a UTF-8 location anyway.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if folder_matches(&name, &needle) {
            candidates.push(name);
        }
    }

    candidates.sort();
    debug!(?candidates, location, "location folder candidates");

    let Some(folder_name) = candidates.first().cloned() else {
        return Err(AppError::new(
            ErrorKind::LocationNotFound,
            format!("No matching folder found for location: {location}"),
        ));
    };

    if candidates.len() > 1 {
        warn!(
            selected = %folder_name,
            ignored = ?&candidates[1..],
            "several folders match location; using the first by name"
        );
    }

    let relative = certificates_root.join(&folder_name).join(CERTIFICATES_FILE);
    let certificates_path = std::path::absolute(&relative).map_err(|e| {
        AppError::read(format!("Failed to resolve '{}': {e}", relative.display()))
    })?;

    Ok(LocatedDataset {
        folder_name,
        certificates_path,
    })
}

/// `needle` must already be lowercase.
fn folder_matches(name: &str, needle: &str) -> bool {
    let name = name.to_lowercase();
    name.starts_with(LOCATION_FOLDER_PREFIX) && name.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_with(folders: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for f in folders {
            fs::create_dir(dir.path().join(f)).unwrap();
        }
        dir
    }

    #[test]
    fn matches_case_insensitively() {
        let root = root_with(&["domestic-E08000035-Leeds", "domestic-E09000033-Westminster"]);

        let found = locate_certificates(root.path(), "LEEDS").unwrap();
        assert_eq!(found.folder_name, "domestic-E08000035-Leeds");
        assert!(found.certificates_path.is_absolute());
        assert!(found.certificates_path.ends_with("domestic-E08000035-Leeds/certificates.csv"));
    }

    #[test]
    fn prefix_is_required() {
        let root = root_with(&["non-domestic-E08000035-Leeds", "Leeds"]);
        let err = locate_certificates(root.path(), "leeds").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocationNotFound);
    }

    #[test]
    fn plain_files_are_ignored() {
        let root = root_with(&[]);
        fs::write(root.path().join("domestic-leeds.zip"), b"").unwrap();
        let err = locate_certificates(root.path(), "leeds").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LocationNotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_matched() {
        let store = root_with(&["domestic-E08000035-Leeds"]);
        let root = root_with(&[]);
        std::os::unix::fs::symlink(
            store.path().join("domestic-E08000035-Leeds"),
            root.path().join("domestic-E08000035-Leeds"),
        )
        .unwrap();

        let found = locate_certificates(root.path(), "leeds").unwrap();
        assert_eq!(found.folder_name, "domestic-E08000035-Leeds");
        assert!(found.certificates_path.starts_with(std::path::absolute(root.path()).unwrap()));
    }

    #[test]
    fn ambiguous_match_picks_smallest_name() {
        let root = root_with(&[
            "domestic-E07000117-Burnley",
            "domestic-E06000001-Hartlepool",
            "DOMESTIC-E07000009-East-Cambridgeshire",
        ]);

        let found = locate_certificates(root.path(), "e0").unwrap();
        assert_eq!(found.folder_name, "DOMESTIC-E07000009-East-Cambridgeshire");
    }

    #[test]
    fn no_match_names_the_location() {
        let root = root_with(&["domestic-E08000035-Leeds"]);
        let err = locate_certificates(root.path(), "atlantis").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("atlantis"));
    }

    #[test]
    fn missing_root_is_a_read_error() {
        let root = tempfile::tempdir().unwrap();
        let err = locate_certificates(&root.path().join("nope"), "leeds").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Read);
    }
}
