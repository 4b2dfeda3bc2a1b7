// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for every part of
//! the application: navbar actions, step list edits, text editing with the
//! one-snapshot-per-burst undo rule, background image batches, project
//! loading and saving, document export, backup and autosave.

use super::{persistence, Message, Screen};
use crate::app::config::Config;
use crate::app::persisted_state::AppState;
use crate::error::Error;
use crate::export::docx;
use crate::i18n::fluent::I18n;
use crate::media::worker::{self, BatchEvent};
use crate::media::SUPPORTED_EXTENSIONS;
use crate::project::history::SnapshotHistory;
use crate::project::persistence as project_persistence;
use crate::project::{autosave, backup, Project};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::help::{self, Event as HelpEvent};
use crate::ui::metadata_form::{self, Event as MetadataFormEvent, Field};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Manager, Notification};
use crate::ui::progress_overlay::Activity;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::step_editor::{self, Event as StepEditorEvent};
use crate::ui::step_list::{self, Event as StepListEvent};
use crate::ui::theming::ThemeMode;
use iced::{window, Task};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Extension filter shown by the project open/save dialogs.
const PROJECT_DIALOG_EXTENSIONS: &[&str] = &["json"];

/// Extension filter shown by the document export dialog.
const DOCX_DIALOG_EXTENSIONS: &[&str] = &["docx"];

/// How long the skipped-images warning stays on screen.
const SKIPPED_IMAGES_DISMISS: Duration = Duration::from_secs(8);

/// Where the next finished image batch lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchTarget {
    /// Append one new step per prepared image.
    #[default]
    Append,
    /// Swap the image of the step at the given index.
    Replace(usize),
}

/// Mutable references to all application state a handler may touch.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub project: &'a mut Project,
    pub history: &'a mut SnapshotHistory,
    pub project_path: &'a mut Option<PathBuf>,
    pub text_dirty: &'a mut bool,
    pub unsaved_changes: &'a mut bool,
    pub editor_state: &'a mut step_editor::State,
    pub help_state: &'a mut help::State,
    pub menu_open: &'a mut bool,
    pub busy: &'a mut Option<Activity>,
    pub batch_target: &'a mut BatchTarget,
    pub theme_mode: &'a mut ThemeMode,
    pub autosave_enabled: &'a mut bool,
    pub persisted: &'a mut AppState,
    pub notifications: &'a mut Manager,
}

impl UpdateContext<'_> {
    /// Folds the pending text-edit burst into a single undo snapshot.
    ///
    /// Called before every structural action, dialog, save, export and
    /// undo/redo so a typing burst never produces more than one snapshot.
    fn flush_text_edits(&mut self) {
        if *self.text_dirty {
            self.history.record(self.project.clone());
            *self.text_dirty = false;
        }
    }

    /// Records an undo snapshot after a structural change.
    fn record_snapshot(&mut self) {
        self.history.record(self.project.clone());
        *self.unsaved_changes = true;
    }

    /// Re-syncs the description editor buffer with the selected step.
    fn sync_editor(&mut self) {
        self.editor_state.sync(self.project.selected_step());
    }

    fn mark_text_edited(&mut self) {
        *self.text_dirty = true;
        *self.unsaved_changes = true;
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::NewProject => {
            ctx.flush_text_edits();
            start_new_project(ctx);
            Task::none()
        }
        NavbarEvent::OpenProject => {
            open_project_dialog(ctx.persisted.last_open_directory.clone())
        }
        NavbarEvent::SaveProject => {
            ctx.flush_text_edits();
            if let Some(path) = ctx.project_path.clone() {
                write_project(ctx, &path);
                Task::none()
            } else {
                save_project_dialog(ctx)
            }
        }
        NavbarEvent::SaveProjectAs => {
            ctx.flush_text_edits();
            save_project_dialog(ctx)
        }
        NavbarEvent::ExportDocument => {
            ctx.flush_text_edits();
            if let Err(error) = ctx.project.validate_for_export() {
                ctx.notifications
                    .push(Notification::warning(error.i18n_key()));
                return Task::none();
            }
            export_dialog(ctx)
        }
        NavbarEvent::ExportBackup => {
            ctx.flush_text_edits();
            backup_dialog(ctx.persisted.last_export_directory.clone())
        }
        NavbarEvent::Undo => {
            handle_undo(ctx);
            Task::none()
        }
        NavbarEvent::Redo => {
            handle_redo(ctx);
            Task::none()
        }
        NavbarEvent::OpenSettings => {
            *ctx.screen = Screen::Settings;
            Task::none()
        }
        NavbarEvent::OpenHelp => {
            *ctx.screen = Screen::Help;
            Task::none()
        }
        NavbarEvent::OpenAbout => {
            *ctx.screen = Screen::About;
            Task::none()
        }
    }
}

/// Resets the workspace to an empty project seeded with the configured
/// document defaults.
fn start_new_project(ctx: &mut UpdateContext<'_>) {
    let project = Project {
        settings: ctx.config.document.document_settings(),
        ..Project::default()
    };
    ctx.history.reset(project.clone());
    *ctx.project = project;
    *ctx.project_path = None;
    *ctx.unsaved_changes = false;
    *ctx.text_dirty = false;
    ctx.notifications.clear_project_errors();
    ctx.sync_editor();
}

fn handle_undo(ctx: &mut UpdateContext<'_>) {
    ctx.flush_text_edits();
    if let Some(snapshot) = ctx.history.undo() {
        *ctx.project = snapshot.clone();
        *ctx.unsaved_changes = true;
        ctx.sync_editor();
    }
}

fn handle_redo(ctx: &mut UpdateContext<'_>) {
    ctx.flush_text_edits();
    if let Some(snapshot) = ctx.history.redo() {
        *ctx.project = snapshot.clone();
        *ctx.unsaved_changes = true;
        ctx.sync_editor();
    }
}

/// Handles step list messages.
pub fn handle_step_list_message(
    ctx: &mut UpdateContext<'_>,
    message: step_list::Message,
) -> Task<Message> {
    match step_list::update(message) {
        StepListEvent::Select(index) => {
            ctx.flush_text_edits();
            if index < ctx.project.steps.len() {
                ctx.project.selected = Some(index);
                ctx.sync_editor();
            }
            Task::none()
        }
        StepListEvent::Add => add_images_dialog(ctx.persisted.last_image_directory.clone()),
        StepListEvent::Delete => {
            ctx.flush_text_edits();
            if let Some(index) = ctx.project.selected {
                if ctx.project.remove_step(index) {
                    ctx.record_snapshot();
                    ctx.sync_editor();
                }
            }
            Task::none()
        }
        StepListEvent::MoveUp => {
            ctx.flush_text_edits();
            if let Some(index) = ctx.project.selected {
                if ctx.project.move_step_up(index) {
                    ctx.record_snapshot();
                }
            }
            Task::none()
        }
        StepListEvent::MoveDown => {
            ctx.flush_text_edits();
            if let Some(index) = ctx.project.selected {
                if ctx.project.move_step_down(index) {
                    ctx.record_snapshot();
                }
            }
            Task::none()
        }
        StepListEvent::ReplaceImage => {
            if ctx.project.selected.is_none() {
                return Task::none();
            }
            replace_image_dialog(ctx.persisted.last_image_directory.clone())
        }
    }
}

/// Handles step editor messages (name and description text edits).
pub fn handle_step_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: step_editor::Message,
) -> Task<Message> {
    match step_editor::update(ctx.editor_state, message) {
        StepEditorEvent::None => {}
        StepEditorEvent::NameEdited(name) => {
            if let Some(index) = ctx.project.selected {
                ctx.project.set_step_name(index, name);
                ctx.mark_text_edited();
            }
        }
        StepEditorEvent::DescriptionEdited(description) => {
            if let Some(index) = ctx.project.selected {
                ctx.project.set_step_description(index, description);
                ctx.mark_text_edited();
            }
        }
        StepEditorEvent::Commit => ctx.flush_text_edits(),
    }
    Task::none()
}

/// Handles metadata form messages.
pub fn handle_metadata_form_message(
    ctx: &mut UpdateContext<'_>,
    message: metadata_form::Message,
) -> Task<Message> {
    match metadata_form::update(message) {
        MetadataFormEvent::Edited(field, value) => {
            let meta = &mut ctx.project.meta;
            match field {
                Field::Code => meta.code = value,
                Field::Title => meta.title = value,
                Field::Date => meta.date = value,
                Field::Author => meta.author = value,
            }
            ctx.mark_text_edited();
        }
        MetadataFormEvent::Commit => ctx.flush_text_edits(),
    }
    Task::none()
}

/// Handles settings screen messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::Back => *ctx.screen = Screen::Editor,
        SettingsEvent::UiLanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, ctx.config, locale, ctx.notifications);
        }
        SettingsEvent::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::LayoutSelected(layout) => {
            ctx.config.document.layout = Some(layout);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::ImageWidthChanged(width) => {
            ctx.config.document.image_width_cm = Some(width);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::FontFamilySelected(family) => {
            ctx.config.document.font_family = Some(family);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::FontSizeChanged(size) => {
            ctx.config.document.font_size = Some(size);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::DocLanguageSelected(language) => {
            ctx.config.document.language = Some(language);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
        SettingsEvent::AutosaveToggled(enabled) => {
            *ctx.autosave_enabled = enabled;
            ctx.config.editor.autosave_enabled = Some(enabled);
            persistence::persist_config(ctx.config, ctx.notifications);
        }
    }
    Task::none()
}

/// Handles help screen messages.
pub fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match help::update(ctx.help_state, message) {
        HelpEvent::None => Task::none(),
        HelpEvent::BackToEditor => {
            *ctx.screen = Screen::Editor;
            Task::none()
        }
    }
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToEditor => {
            *ctx.screen = Screen::Editor;
            Task::none()
        }
    }
}

// ============================================================================
// Project open / save
// ============================================================================

fn open_project_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter("StepDoc project", PROJECT_DIALOG_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenProjectDialogResult,
    )
}

/// Handles the result of the open project dialog by loading off the UI thread.
pub fn handle_open_project_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                project_persistence::load_from_path(&path).map(|project| (path, project))
            })
            .await
            .unwrap_or_else(|join| Err(Error::Io(join.to_string())))
        },
        Message::ProjectLoaded,
    )
}

/// Installs a freshly loaded project as the working state.
pub fn handle_project_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<(PathBuf, Project), Error>,
) -> Task<Message> {
    match result {
        Ok((path, project)) => {
            ctx.history.reset(project.clone());
            *ctx.project = project;
            *ctx.project_path = Some(path.clone());
            *ctx.unsaved_changes = false;
            *ctx.text_dirty = false;
            *ctx.screen = Screen::Editor;
            ctx.notifications.clear_project_errors();
            ctx.sync_editor();
            ctx.persisted.set_last_open_directory_from_file(&path);
            persistence::persist_app_state(ctx.persisted, ctx.notifications);
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
    Task::none()
}

fn save_project_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let filename = format!("{}.json", autosave::sanitize_code(&ctx.project.meta.code));
    let last_directory = ctx.persisted.last_save_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter("StepDoc project", PROJECT_DIALOG_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveProjectDialogResult,
    )
}

/// Handles the result of the save project dialog.
pub fn handle_save_project_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(path) = path {
        write_project(ctx, &path);
    }
    Task::none()
}

fn write_project(ctx: &mut UpdateContext<'_>, path: &Path) {
    match project_persistence::save_to_path(ctx.project, path) {
        Ok(()) => {
            *ctx.project_path = Some(path.to_path_buf());
            *ctx.unsaved_changes = false;
            ctx.notifications
                .push(Notification::success("notification-save-success"));
            ctx.persisted.set_last_save_directory_from_file(path);
            persistence::persist_app_state(ctx.persisted, ctx.notifications);
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
}

// ============================================================================
// Document export and backup
// ============================================================================

fn export_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let filename = format!("{}.docx", autosave::sanitize_code(&ctx.project.meta.code));
    let last_directory = ctx.persisted.last_export_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter("Word document", DOCX_DIALOG_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ExportDialogResult,
    )
}

/// Kicks off document generation in the background with a blocking overlay.
pub fn handle_export_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    *ctx.busy = Some(Activity::Exporting);
    let project = ctx.project.clone();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                docx::export_to_path(&project, &path).map(|()| path)
            })
            .await
            .unwrap_or_else(|join| Err(Error::Export(join.to_string())))
        },
        Message::ExportFinished,
    )
}

/// Clears the export overlay and reports the outcome.
pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    *ctx.busy = None;
    match result {
        Ok(path) => {
            ctx.notifications
                .push(Notification::success("notification-export-success"));
            ctx.persisted.set_last_export_directory_from_file(&path);
            persistence::persist_app_state(ctx.persisted, ctx.notifications);
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
    Task::none()
}

fn backup_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::BackupDialogResult,
    )
}

/// Writes the plain-file backup into the chosen folder.
pub fn handle_backup_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(parent) = path else {
        return Task::none();
    };

    match backup::write_backup(ctx.project, &parent) {
        Ok(_) => {
            ctx.notifications
                .push(Notification::success("notification-backup-success"));
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
    Task::none()
}

// ============================================================================
// Image batches
// ============================================================================

fn add_images_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .pick_files()
                .await
                .map(|handles| handles.iter().map(|h| h.path().to_path_buf()).collect())
                .unwrap_or_default()
        },
        Message::AddImagesDialogResult,
    )
}

fn replace_image_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::ReplaceImageDialogResult,
    )
}

/// Starts an append batch for the picked image files.
pub fn handle_add_images_result(
    ctx: &mut UpdateContext<'_>,
    paths: Vec<PathBuf>,
) -> Task<Message> {
    if paths.is_empty() {
        // User cancelled the dialog
        return Task::none();
    }

    ctx.flush_text_edits();
    ctx.persisted.set_last_image_directory_from_file(&paths[0]);
    persistence::persist_app_state(ctx.persisted, ctx.notifications);

    *ctx.batch_target = BatchTarget::Append;
    *ctx.busy = Some(Activity::PreparingImages {
        current: 0,
        total: paths.len(),
        file_name: String::new(),
    });

    Task::run(worker::prepare_batch(paths), Message::ImageBatch)
}

/// Starts a single-image batch that will replace the selected step's image.
pub fn handle_replace_image_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let Some(index) = ctx.project.selected else {
        return Task::none();
    };

    ctx.flush_text_edits();
    ctx.persisted.set_last_image_directory_from_file(&path);
    persistence::persist_app_state(ctx.persisted, ctx.notifications);

    *ctx.batch_target = BatchTarget::Replace(index);
    *ctx.busy = Some(Activity::PreparingImages {
        current: 0,
        total: 1,
        file_name: String::new(),
    });

    Task::run(worker::prepare_batch(vec![path]), Message::ImageBatch)
}

/// Applies worker progress and, on completion, lands the prepared images.
pub fn handle_image_batch(ctx: &mut UpdateContext<'_>, event: BatchEvent) -> Task<Message> {
    match event {
        BatchEvent::Progress {
            current,
            total,
            file_name,
        } => {
            *ctx.busy = Some(Activity::PreparingImages {
                current,
                total,
                file_name,
            });
        }
        BatchEvent::Finished(outcome) => {
            *ctx.busy = None;

            if !outcome.failed.is_empty() {
                ctx.notifications.push(
                    Notification::warning("notification-images-skipped")
                        .with_arg("files", outcome.failed.join(", "))
                        .auto_dismiss(SKIPPED_IMAGES_DISMISS),
                );
            }

            if !outcome.images.is_empty() {
                match *ctx.batch_target {
                    BatchTarget::Append => {
                        let default_description = ctx.i18n.tr("step-default-description");
                        for prepared in outcome.images {
                            ctx.project.add_step(prepared, default_description.clone());
                        }
                        ctx.record_snapshot();
                        ctx.sync_editor();
                    }
                    BatchTarget::Replace(index) => {
                        if let Some(prepared) = outcome.images.into_iter().next() {
                            if ctx.project.replace_image(index, prepared) {
                                ctx.record_snapshot();
                                ctx.sync_editor();
                            }
                        }
                    }
                }
            }

            *ctx.batch_target = BatchTarget::Append;
        }
    }
    Task::none()
}

// ============================================================================
// Autosave and window close
// ============================================================================

/// Writes a periodic autosave when there are unsaved edits.
///
/// Failures only go to stderr; a missed autosave must never interrupt the
/// editing session.
pub fn handle_autosave_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !*ctx.autosave_enabled || (!*ctx.unsaved_changes && !*ctx.text_dirty) {
        return Task::none();
    }

    match autosave::autosave_dir() {
        Some(dir) => {
            if let Err(error) = autosave::write_autosave(ctx.project, &dir) {
                eprintln!("Autosave failed: {:?}", error);
            }
        }
        None => eprintln!("Autosave skipped: no data directory available"),
    }
    Task::none()
}

/// Runs a final best-effort autosave, then actually closes the window.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.flush_text_edits();

    if *ctx.autosave_enabled && *ctx.unsaved_changes {
        if let Some(dir) = autosave::autosave_dir() {
            if let Err(error) = autosave::write_autosave(ctx.project, &dir) {
                eprintln!("Final autosave failed: {:?}", error);
            }
        }
    }

    window::close(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::worker::BatchOutcome;
    use crate::project::test_support;

    struct Fixture {
        i18n: I18n,
        screen: Screen,
        config: Config,
        project: Project,
        history: SnapshotHistory,
        project_path: Option<PathBuf>,
        text_dirty: bool,
        unsaved_changes: bool,
        editor_state: step_editor::State,
        help_state: help::State,
        menu_open: bool,
        busy: Option<Activity>,
        batch_target: BatchTarget,
        theme_mode: ThemeMode,
        autosave_enabled: bool,
        persisted: AppState,
        notifications: Manager,
    }

    impl Fixture {
        fn new(project: Project) -> Self {
            let history = SnapshotHistory::new(project.clone());
            Self {
                i18n: I18n::default(),
                screen: Screen::Editor,
                config: Config::default(),
                project,
                history,
                project_path: None,
                text_dirty: false,
                unsaved_changes: false,
                editor_state: step_editor::State::new(),
                help_state: help::State::new(),
                menu_open: false,
                busy: None,
                batch_target: BatchTarget::Append,
                theme_mode: ThemeMode::Light,
                autosave_enabled: true,
                persisted: AppState::default(),
                notifications: Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                screen: &mut self.screen,
                config: &mut self.config,
                project: &mut self.project,
                history: &mut self.history,
                project_path: &mut self.project_path,
                text_dirty: &mut self.text_dirty,
                unsaved_changes: &mut self.unsaved_changes,
                editor_state: &mut self.editor_state,
                help_state: &mut self.help_state,
                menu_open: &mut self.menu_open,
                busy: &mut self.busy,
                batch_target: &mut self.batch_target,
                theme_mode: &mut self.theme_mode,
                autosave_enabled: &mut self.autosave_enabled,
                persisted: &mut self.persisted,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn delete_then_undo_restores_step() {
        let mut fx = Fixture::new(test_support::project_with_steps(&["one", "two"]));
        fx.project.selected = Some(1);

        let _ = handle_step_list_message(&mut fx.ctx(), step_list::Message::Delete);
        assert_eq!(fx.project.steps.len(), 1);
        assert!(fx.unsaved_changes);

        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::Undo);
        assert_eq!(fx.project.steps.len(), 2);
    }

    #[test]
    fn text_edit_burst_folds_into_single_snapshot() {
        let mut fx = Fixture::new(test_support::project_with_steps(&["one"]));
        fx.project.selected = Some(0);

        let _ = handle_step_editor_message(
            &mut fx.ctx(),
            step_editor::Message::NameChanged("Attach".into()),
        );
        let _ = handle_step_editor_message(
            &mut fx.ctx(),
            step_editor::Message::NameChanged("Attach bracket".into()),
        );
        assert!(fx.text_dirty);
        assert!(!fx.history.can_undo());

        let _ = handle_step_editor_message(&mut fx.ctx(), step_editor::Message::NameSubmitted);
        assert!(!fx.text_dirty);
        assert!(fx.history.can_undo());
        assert_eq!(fx.project.steps[0].name, "Attach bracket");
    }

    #[test]
    fn metadata_edit_marks_project_dirty() {
        let mut fx = Fixture::new(Project::default());

        let _ = handle_metadata_form_message(
            &mut fx.ctx(),
            metadata_form::Message::Edited(Field::Title, "Assembly manual".into()),
        );

        assert_eq!(fx.project.meta.title, "Assembly manual");
        assert!(fx.unsaved_changes);
    }

    #[test]
    fn finished_append_batch_adds_steps_in_order() {
        let mut fx = Fixture::new(Project::default());
        fx.busy = Some(Activity::PreparingImages {
            current: 0,
            total: 2,
            file_name: String::new(),
        });

        let outcome = BatchOutcome {
            images: vec![test_support::prepared("one"), test_support::prepared("two")],
            failed: Vec::new(),
        };
        let _ = handle_image_batch(&mut fx.ctx(), BatchEvent::Finished(outcome));

        assert!(fx.busy.is_none());
        assert_eq!(fx.project.steps.len(), 2);
        assert_eq!(fx.project.steps[0].name, "one");
        assert_eq!(fx.project.steps[1].name, "two");
        assert_eq!(fx.project.selected, Some(1));
        assert!(fx.unsaved_changes);
    }

    #[test]
    fn finished_replace_batch_keeps_step_text() {
        let mut fx = Fixture::new(test_support::project_with_steps(&["one"]));
        fx.project.selected = Some(0);
        fx.project.set_step_name(0, "Custom name");
        fx.batch_target = BatchTarget::Replace(0);

        let outcome = BatchOutcome {
            images: vec![test_support::prepared("two")],
            failed: Vec::new(),
        };
        let _ = handle_image_batch(&mut fx.ctx(), BatchEvent::Finished(outcome));

        assert_eq!(fx.project.steps.len(), 1);
        assert_eq!(fx.project.steps[0].name, "Custom name");
        assert_eq!(fx.batch_target, BatchTarget::Append);
    }

    #[test]
    fn failed_images_push_warning_notification() {
        let mut fx = Fixture::new(Project::default());
        fx.busy = Some(Activity::PreparingImages {
            current: 1,
            total: 1,
            file_name: "broken.png".into(),
        });

        let outcome = BatchOutcome {
            images: Vec::new(),
            failed: vec!["broken.png".into()],
        };
        let _ = handle_image_batch(&mut fx.ctx(), BatchEvent::Finished(outcome));

        assert!(fx.busy.is_none());
        assert!(fx.notifications.has_notifications());
        assert!(fx.project.steps.is_empty());
    }

    #[test]
    fn export_with_empty_project_pushes_validation_warning() {
        let mut fx = Fixture::new(Project::default());

        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::ExportDocument);

        assert!(fx.notifications.has_notifications());
        assert!(fx.busy.is_none());
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut fx = Fixture::new(test_support::project_with_steps(&["one"]));
        let before = fx.project.selected;

        let _ = handle_step_list_message(&mut fx.ctx(), step_list::Message::Select(5));

        assert_eq!(fx.project.selected, before);
    }

    #[test]
    fn settings_theme_change_updates_state_and_config() {
        let mut fx = Fixture::new(Project::default());

        let _ = handle_settings_message(
            &mut fx.ctx(),
            settings::Message::ThemeSelected(ThemeMode::Dark),
        );

        assert_eq!(fx.theme_mode, ThemeMode::Dark);
        assert_eq!(fx.config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn loaded_project_resets_history_and_path() {
        let mut fx = Fixture::new(Project::default());
        fx.unsaved_changes = true;
        let loaded = test_support::project_with_steps(&["one"]);

        let _ = handle_project_loaded(
            &mut fx.ctx(),
            Ok((PathBuf::from("/tmp/demo.json"), loaded)),
        );

        assert_eq!(fx.project.steps.len(), 1);
        assert_eq!(fx.project_path, Some(PathBuf::from("/tmp/demo.json")));
        assert!(!fx.unsaved_changes);
        assert!(!fx.history.can_undo());
        assert_eq!(
            fx.persisted.last_open_directory,
            Some(PathBuf::from("/tmp"))
        );
    }

    #[test]
    fn load_error_pushes_notification() {
        let mut fx = Fixture::new(Project::default());

        let _ = handle_project_loaded(&mut fx.ctx(), Err(Error::Io("missing".into())));

        assert!(fx.notifications.has_notifications());
        assert!(fx.project_path.is_none());
    }

    #[test]
    fn new_project_applies_configured_defaults() {
        let mut fx = Fixture::new(test_support::project_with_steps(&["one"]));
        fx.config.document.font_size = Some(14);
        fx.unsaved_changes = true;

        let _ = handle_navbar_message(&mut fx.ctx(), navbar::Message::NewProject);

        assert!(fx.project.steps.is_empty());
        assert_eq!(fx.project.settings.font_size, 14);
        assert!(!fx.unsaved_changes);
        assert!(fx.project_path.is_none());
    }
}
