// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and settings views.
//!
//! The `App` struct wires together the domains (project, localization, settings)
//! and translates messages into side effects like config persistence, document
//! export or image preparation. This file intentionally keeps policy decisions
//! (minimum window size, undo snapshot timing, autosave gating) close to the
//! main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::project::{self, Project, SnapshotHistory};
use crate::ui::help;
use crate::ui::notifications;
use crate::ui::progress_overlay::Activity;
use crate::ui::step_editor;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// The document being edited.
    project: Project,
    /// Bounded full-snapshot undo history.
    history: SnapshotHistory,
    /// Where the project was last saved or loaded from, if anywhere.
    project_path: Option<PathBuf>,
    /// Whether a text-edit burst is pending its undo snapshot.
    text_dirty: bool,
    /// Whether the project differs from its last saved state.
    unsaved_changes: bool,
    /// State of the step name/description editor widgets.
    editor_state: step_editor::State,
    /// Help screen state (tracks expanded sections).
    help_state: help::State,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Blocking activity currently shown in the progress overlay.
    busy: Option<Activity>,
    /// Where finished image batches should land (append or replace).
    batch_target: update::BatchTarget,
    /// Rotation of the progress spinner in radians.
    spinner_rotation: f32,
    theme_mode: ThemeMode,
    autosave_enabled: bool,
    /// Persisted application state (last save directory, etc.).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("step_count", &self.project.steps.len())
            .field("busy", &self.busy.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// How far the progress spinner advances per tick, in radians.
const SPINNER_STEP: f32 = 0.15;

/// Builds the window settings
pub fn window_settings() -> iced::window::Settings {
    let icon = crate::icon::load_window_icon();

    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        // Close requests are intercepted so the final autosave can run first.
        exit_on_close_request: false,
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced wants a Fn boot closure; the flags are one-shot, so they ride
    // in a RefCell<Option<_>> and the second call would be a bug.
    let boot_flags = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_flags
            .borrow_mut()
            .take()
            .expect("boot closure invoked twice");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let project = Project::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            config: Config::default(),
            history: SnapshotHistory::new(project.clone()),
            project,
            project_path: None,
            text_dirty: false,
            unsaved_changes: false,
            editor_state: step_editor::State::default(),
            help_state: help::State::default(),
            menu_open: false,
            busy: None,
            batch_target: update::BatchTarget::default(),
            spinner_rotation: 0.0,
            theme_mode: ThemeMode::default(),
            autosave_enabled: config::DEFAULT_AUTOSAVE_ENABLED,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::default(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// project loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            app_state,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.autosave_enabled = config
            .editor
            .autosave_enabled
            .unwrap_or(config::DEFAULT_AUTOSAVE_ENABLED);

        // New documents pick up the configured formatting defaults.
        app.project.settings = config.document.document_settings();
        app.history = SnapshotHistory::new(app.project.clone());
        app.config = config;

        // Unreadable config or state files degrade to defaults with a toast.
        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = if let Some(path_str) = flags.file_path {
            let path = PathBuf::from(path_str);
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || {
                        project::persistence::load_from_path(&path)
                            .map(|project| (path, project))
                    })
                    .await
                    .unwrap_or_else(|join| Err(Error::Io(join.to_string())))
                },
                Message::ProjectLoaded,
            )
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let dirty = self.unsaved_changes || self.text_dirty;

        let file_name = self
            .project_path
            .as_deref()
            .and_then(std::path::Path::file_name)
            .and_then(std::ffi::OsStr::to_str);

        match file_name {
            Some(name) if dirty => format!("*{name} - {app_name}"),
            Some(name) => format!("{name} - {app_name}"),
            None if dirty => format!("*{app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.busy.is_some(),
                self.notifications.has_notifications(),
            ),
            subscription::create_autosave_subscription(self.autosave_enabled),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
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
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(msg) => update::handle_navbar_message(&mut ctx, msg),
            Message::StepList(msg) => update::handle_step_list_message(&mut ctx, msg),
            Message::StepEditor(msg) => update::handle_step_editor_message(&mut ctx, msg),
            Message::MetadataForm(msg) => update::handle_metadata_form_message(&mut ctx, msg),
            Message::Settings(msg) => update::handle_settings_message(&mut ctx, msg),
            Message::Help(msg) => update::handle_help_message(&mut ctx, msg),
            Message::About(msg) => update::handle_about_message(&mut ctx, &msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(_instant) => {
                if self.busy.is_some() {
                    self.spinner_rotation =
                        (self.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
                }
                // Auto-dismiss of expired toasts rides on the same timer.
                self.notifications.tick();
                Task::none()
            }
            Message::AutosaveTick(_instant) => update::handle_autosave_tick(&mut ctx),
            Message::OpenProjectDialogResult(path) => {
                update::handle_open_project_dialog_result(path)
            }
            Message::ProjectLoaded(result) => update::handle_project_loaded(&mut ctx, result),
            Message::SaveProjectDialogResult(path) => {
                update::handle_save_project_dialog_result(&mut ctx, path)
            }
            Message::ExportDialogResult(path) => {
                update::handle_export_dialog_result(&mut ctx, path)
            }
            Message::ExportFinished(result) => update::handle_export_finished(&mut ctx, result),
            Message::BackupDialogResult(path) => {
                update::handle_backup_dialog_result(&mut ctx, path)
            }
            Message::AddImagesDialogResult(paths) => {
                update::handle_add_images_result(&mut ctx, paths)
            }
            Message::ReplaceImageDialogResult(path) => {
                update::handle_replace_image_result(&mut ctx, path)
            }
            Message::ImageBatch(event) => update::handle_image_batch(&mut ctx, event),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            project: &self.project,
            config: &self.config,
            editor_state: &self.editor_state,
            help_state: &self.help_state,
            menu_open: self.menu_open,
            can_undo: self.history.can_undo() || self.text_dirty,
            can_redo: self.history.can_redo(),
            busy: self.busy.as_ref(),
            spinner_rotation: self.spinner_rotation,
            notifications: &self.notifications,
        })
    }
}
