//! Font registration for chart text.
//!
//! Plotters' `ab_glyph` backend only draws fonts registered at runtime, so we
//! load one TrueType file per process and register it as `sans-serif`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};
use tracing::{debug, info};

use crate::error::AppError;

/// Family name every chart asks for.
pub const FONT_FAMILY: &str = "sans-serif";

/// Common locations of a plain sans-serif TTF, tried in order.
const SYSTEM_FONTS: [&str; 10] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static REGISTERED: OnceLock<PathBuf> = OnceLock::new();

/// First system font file that exists.
pub fn discover_system_font() -> Option<PathBuf> {
    SYSTEM_FONTS.iter().map(|p| PathBuf::from(*p)).find(|p| p.is_file())
}

/// Register the chart font unless one already is; returns the font in use.
///
/// `explicit` wins over discovery. Only the first successful registration in a
/// process takes effect.
pub fn ensure_font(explicit: Option<&Path>) -> Result<&'static Path, AppError> {
    if let Some(path) = REGISTERED.get() {
        debug!(font = %path.display(), "chart font already registered");
        return Ok(path);
    }

    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => discover_system_font().ok_or_else(|| {
            AppError::render("No usable TrueType font found for chart text; pass one with `--font`.")
        })?,
    };

    register(&path)?;
    info!(font = %path.display(), "registered chart font");
    Ok(REGISTERED.get_or_init(|| path).as_path())
}

fn register(path: &Path) -> Result<(), AppError> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::render(format!("Failed to read font '{}': {e}", path.display())))?;
    // The registry keeps a `'static` slice; one font per process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| AppError::render(format!("Invalid font '{}'", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_font_file_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();

        let err = register(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.message(), format!("Invalid font '{}'", path.display()));
    }

    #[test]
    fn missing_font_file_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = register(&dir.path().join("absent.ttf")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().starts_with("Failed to read font"));
    }

    #[test]
    fn discovered_font_exists() {
        if let Some(path) = discover_system_font() {
            assert!(path.is_file());
        }
    }
}
