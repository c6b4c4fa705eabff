//! Filesystem writes for report artifacts.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::write(format!("Failed to create directory '{}': {e}", dir.display())))
}

/// Replace the contents of `path` with `text`, creating parent folders.
pub fn write_facts(path: &Path, text: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, text)
        .map_err(|e| AppError::write(format!("Failed to write facts '{}': {e}", path.display())))?;
    info!(path = %path.display(), "wrote facts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/processed_data/EPCfacts.md");

        write_facts(&path, "first, and much longer than the second").unwrap();
        write_facts(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn unwritable_target_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should go.
        let path = dir.path().join("EPCfacts.md");
        fs::create_dir(&path).unwrap();

        let err = write_facts(&path, "x").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
