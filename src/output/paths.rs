use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

use super::OutputFormat;
use crate::error::SaveError;

/// `<home>/Pictures/Screenshots`
pub fn default_screenshots_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Pictures").join("Screenshots"))
}

/// `screenshot_<YYYYMMDD-HHMMSS>.<ext>`
pub fn screenshot_file_name(taken_at: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "screenshot_{}.{}",
        taken_at.format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Destination for a new screenshot in `dir`.
///
/// Two captures inside the same second get a numeric suffix instead of
/// overwriting each other.
pub fn screenshot_path(dir: &Path, format: OutputFormat, taken_at: NaiveDateTime) -> PathBuf {
    let path = dir.join(screenshot_file_name(taken_at, format));
    if !path.exists() {
        return path;
    }

    let stem = format!("screenshot_{}", taken_at.format("%Y%m%d-%H%M%S"));
    (1u32..)
        .map(|n| dir.join(format!("{}-{}.{}", stem, n, format.extension())))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

pub fn ensure_dir(dir: &Path) -> Result<(), SaveError> {
    fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
