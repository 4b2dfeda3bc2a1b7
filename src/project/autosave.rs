// SPDX-License-Identifier: MPL-2.0
//! Periodic autosave of the working project.
//!
//! Autosaves are ordinary project files written to `<data_dir>/autosave/`
//! under a timestamped name, pruned so the directory never grows past
//! [`MAX_AUTOSAVE_FILES`]. Failures on this path are logged to stderr and
//! never interrupt the user.

use crate::error::Result;
use crate::project::{persistence, Project};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How often the autosave subscription fires.
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(300);

/// Number of autosave files kept per directory.
pub const MAX_AUTOSAVE_FILES: usize = 10;

/// Name used in autosave files when the document code is empty.
const NO_CODE: &str = "no_code";

/// Reduces a document code to a filesystem-safe prefix.
///
/// Alphanumerics, `-` and `_` pass through; everything else becomes `_`.
/// An empty code yields `no_code`.
pub fn sanitize_code(code: &str) -> String {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return NO_CODE.to_string();
    }
    trimmed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Returns the autosave directory under the application data dir.
pub fn autosave_dir() -> Option<PathBuf> {
    crate::app::paths::get_app_data_dir().map(|dir| dir.join("autosave"))
}

/// Writes one autosave file and prunes the directory.
///
/// Returns the path of the file written.
pub fn write_autosave(project: &Project, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let file_name = format!("{}_{}.json", sanitize_code(&project.meta.code), stamp);
    let path = dir.join(file_name);

    persistence::save_to_path(project, &path)?;
    prune(dir, MAX_AUTOSAVE_FILES);

    Ok(path)
}

/// Deletes the oldest autosave files until at most `keep` remain.
///
/// Ordering is newest-first by modification time, with the file name as a
/// tie breaker (timestamped names sort chronologically).
pub fn prune(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut files: Vec<(std::time::SystemTime, PathBuf)> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                return None;
            }
            let modified = entry.metadata().ok()?.modified().ok()?;
            Some((modified, path))
        })
        .collect();

    files.sort_by(|a, b| b.cmp(a));

    for (_, path) in files.into_iter().skip(keep) {
        if let Err(err) = fs::remove_file(&path) {
            eprintln!("Failed to prune autosave {}: {err}", path.display());
        }
    }
}
