// SPDX-License-Identifier: MPL-2.0
//! Session state that survives restarts but is not user-configurable.
//!
//! Remembers the directories the user last saved to, opened from, picked
//! images in and exported to, so every file dialog reopens where the user
//! left off. Stored as CBOR in the data directory, deliberately apart from
//! the TOML preferences the user may edit by hand.
//!
//! Failures never abort startup or a save. Both directions report an
//! optional Fluent key the caller can surface as a warning toast.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

/// Last-used directories for the file dialogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Initial directory for Save As dialogs.
    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,

    /// Initial directory for Open dialogs.
    #[serde(default)]
    pub last_open_directory: Option<PathBuf>,

    /// Initial directory for the image picker.
    #[serde(default)]
    pub last_image_directory: Option<PathBuf>,

    /// Initial directory for document export and backup dialogs.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads from the default data directory.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads from `base_dir` when given, otherwise from the resolved data
    /// directory. A missing file is not an error, only an unreadable or
    /// unparsable one produces a warning key.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => {
                return (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (
                Self::default(),
                Some("notification-state-parse-error".to_string()),
            ),
        }
    }

    /// Saves to the default data directory.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves to `base_dir` when given, creating the directory as needed.
    /// Returns a Fluent warning key on failure.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(_) => return Some("notification-state-create-error".to_string()),
        };
        match ciborium::into_writer(self, BufWriter::new(file)) {
            Ok(()) => None,
            Err(_) => Some("notification-state-write-error".to_string()),
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }

    pub fn set_last_save_directory_from_file(&mut self, file_path: &Path) {
        remember(&mut self.last_save_directory, file_path);
    }

    pub fn set_last_open_directory_from_file(&mut self, file_path: &Path) {
        remember(&mut self.last_open_directory, file_path);
    }

    pub fn set_last_image_directory_from_file(&mut self, file_path: &Path) {
        remember(&mut self.last_image_directory, file_path);
    }

    pub fn set_last_export_directory_from_file(&mut self, file_path: &Path) {
        remember(&mut self.last_export_directory, file_path);
    }
}

/// Stores the parent directory of `file_path`. Paths without a parent,
/// like the filesystem root, leave the slot untouched.
fn remember(slot: &mut Option<PathBuf>, file_path: &Path) {
    if let Some(parent) = file_path.parent() {
        *slot = Some(parent.to_path_buf());
    }
}
