// SPDX-License-Identifier: MPL-2.0
//! The root message enum and the startup flags.

use crate::error::Error;
use crate::media::worker::BatchEvent;
use crate::project::Project;
use crate::ui::about;
use crate::ui::help;
use crate::ui::metadata_form;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::step_editor;
use crate::ui::step_list;
use std::path::PathBuf;
use std::time::Instant;

/// Everything `App::update` can receive: wrapped component messages plus
/// the async results of dialogs, loads and exports.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    StepList(step_list::Message),
    StepEditor(step_editor::Message),
    MetadataForm(metadata_form::Message),
    Settings(settings::Message),
    Help(help::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for the spinner and notification expiry
    /// Periodic tick driving the autosave cycle.
    AutosaveTick(Instant),
    /// Result from the open project dialog.
    OpenProjectDialogResult(Option<PathBuf>),
    /// A project file finished loading in the background.
    ProjectLoaded(Result<(PathBuf, Project), Error>),
    /// Result from the save project dialog.
    SaveProjectDialogResult(Option<PathBuf>),
    /// Result from the export document dialog.
    ExportDialogResult(Option<PathBuf>),
    /// Document generation finished in the background.
    ExportFinished(Result<PathBuf, Error>),
    /// Result from the backup destination folder dialog.
    BackupDialogResult(Option<PathBuf>),
    /// Result from the add images dialog. Empty means cancelled.
    AddImagesDialogResult(Vec<PathBuf>),
    /// Result from the replace image dialog.
    ReplaceImageDialogResult(Option<PathBuf>),
    /// Progress or completion event from the image preparation worker.
    ImageBatch(BatchEvent),
    /// The user asked to close the window; intercepted for the final save.
    WindowCloseRequested(iced::window::Id),
}

/// Startup options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pl`, `en-US`).
    pub lang: Option<String>,
    /// Optional project file to open on startup.
    pub file_path: Option<String>,
    /// Optional data directory override (for state and autosave files).
    /// Takes precedence over `STEPDOC_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STEPDOC_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
