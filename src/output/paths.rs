// src/output/paths.rs
//! Export path and filename generation.
//!
//! Filename rendering is pure; `resolve_export_path` performs a single
//! stat to detect a directory target. Nothing here writes — the writer
//! decides what to do with the paths.

use crate::constants::{EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};
use chrono::{DateTime, Local, Timelike};
use std::path::{Path, PathBuf};

/// The default export filename for a given local time:
/// `tabs_YYYY-MM-DD_HHMM.txt`, all components zero-padded to width 2
/// except the year.
pub fn default_export_filename(now: DateTime<Local>) -> String {
    format!(
        "{}_{}_{:02}{:02}.{}",
        EXPORT_FILE_PREFIX,
        now.format("%Y-%m-%d"),
        now.hour(),
        now.minute(),
        EXPORT_FILE_EXTENSION
    )
}

/// Resolves where the export lands on disk.
///
/// A path naming an existing directory gets the timestamped default filename
/// appended; anything else is taken verbatim as the target file.
pub fn resolve_export_path(requested: &Path, now: DateTime<Local>) -> PathBuf {
    if requested.is_dir() {
        requested.join(default_export_filename(now))
    } else {
        requested.to_path_buf()
    }
}
