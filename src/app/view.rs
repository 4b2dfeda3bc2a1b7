// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, layering the progress overlay and toast
//! notifications on top of the active screen.

use super::{Message, Screen};
use crate::app::config::Config;
use crate::i18n::fluent::I18n;
use crate::project::Project;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::help::{self, ViewContext as HelpViewContext};
use crate::ui::metadata_form::{self, ViewContext as MetadataViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::progress_overlay::{self, Activity};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::step_editor::{self, ViewContext as StepEditorViewContext};
use crate::ui::step_list::{self, ViewContext as StepListViewContext};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub project: &'a Project,
    pub config: &'a Config,
    pub editor_state: &'a step_editor::State,
    pub help_state: &'a help::State,
    pub menu_open: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub busy: Option<&'a Activity>,
    pub spinner_rotation: f32,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Editor => view_editor(&ctx),
        Screen::Settings => view_settings(ctx.i18n, ctx.config),
        Screen::Help => view_help(ctx.help_state, ctx.i18n),
        Screen::About => view_about(ctx.i18n),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view);

    if let Some(activity) = ctx.busy {
        layers = layers.push(progress_overlay::view(progress_overlay::ViewContext {
            i18n: ctx.i18n,
            activity,
            spinner_rotation: ctx.spinner_rotation,
        }));
    }

    layers = layers.push(
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
    );

    layers.into()
}

/// The main editor: navbar on top, step list on the left, the step editor
/// in the middle and the metadata form on the right.
fn view_editor<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let busy = ctx.busy.is_some();

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        can_undo: ctx.can_undo,
        can_redo: ctx.can_redo,
        busy,
    })
    .map(Message::Navbar);

    let step_list_view = step_list::view(StepListViewContext {
        i18n: ctx.i18n,
        steps: &ctx.project.steps,
        selected: ctx.project.selected,
        busy,
    })
    .map(Message::StepList);

    let step_editor_view = Container::new(
        step_editor::view(
            StepEditorViewContext {
                i18n: ctx.i18n,
                step: ctx.project.selected_step(),
                busy,
            },
            ctx.editor_state,
        )
        .map(Message::StepEditor),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let metadata_view = metadata_panel(ctx, busy);

    let body = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(step_list_view)
        .push(step_editor_view)
        .push(metadata_view);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(body)
        .into()
}

/// The document metadata sidebar on the right side of the editor.
fn metadata_panel<'a>(ctx: &ViewContext<'a>, busy: bool) -> Element<'a, Message> {
    let header = Text::new(ctx.i18n.tr("metadata-panel-title")).size(typography::TITLE_SM);

    let form = metadata_form::view(MetadataViewContext {
        i18n: ctx.i18n,
        meta: &ctx.project.meta,
        busy,
    })
    .map(Message::MetadataForm);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(form),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn view_settings<'a>(i18n: &'a I18n, config: &'a Config) -> Element<'a, Message> {
    settings::view(SettingsViewContext { i18n, config }).map(Message::Settings)
}

fn view_help<'a>(help_state: &'a help::State, i18n: &'a I18n) -> Element<'a, Message> {
    help::view(HelpViewContext {
        i18n,
        state: help_state,
    })
    .map(Message::Help)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
