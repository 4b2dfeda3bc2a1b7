// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar of the editor screen.
//!
//! A dark strip with the hamburger menu, the frequent file actions (open,
//! save, export) and the undo/redo pair. The dropdown behind the hamburger
//! carries the remaining project actions and the Settings, Help and About
//! screens.

use crate::i18n::fluent::I18n;
use crate::ui::action_icons;
use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Whether a background batch is running (file actions are disabled).
    pub busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
    ExportDocument,
    ExportBackup,
    Undo,
    Redo,
    OpenSettings,
    OpenHelp,
    OpenAbout,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    NewProject,
    OpenProject,
    SaveProject,
    SaveProjectAs,
    ExportDocument,
    ExportBackup,
    Undo,
    Redo,
    OpenSettings,
    OpenHelp,
    OpenAbout,
}

/// Maps a navbar message to its event. Picking any action closes the
/// dropdown; undo and redo leave it alone so repeated presses stay cheap.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            return Event::None;
        }
        Message::Undo => return Event::Undo,
        Message::Redo => return Event::Redo,
        _ => *menu_open = false,
    }

    match message {
        Message::NewProject => Event::NewProject,
        Message::OpenProject => Event::OpenProject,
        Message::SaveProject => Event::SaveProject,
        Message::SaveProjectAs => Event::SaveProjectAs,
        Message::ExportDocument => Event::ExportDocument,
        Message::ExportBackup => Event::ExportBackup,
        Message::OpenSettings => Event::OpenSettings,
        Message::OpenHelp => Event::OpenHelp,
        Message::OpenAbout => Event::OpenAbout,
        Message::CloseMenu | Message::ToggleMenu | Message::Undo | Message::Redo => Event::None,
    }
}

#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill).push(top_bar(&ctx));
    if ctx.menu_open {
        content = content.push(dropdown(&ctx));
    }
    content.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let idle = !ctx.busy;
    let buttons: [(Image<Handle>, Option<Message>); 6] = [
        (action_icons::navigation::menu(), Some(Message::ToggleMenu)),
        (
            action_icons::project::toolbar::open(),
            idle.then_some(Message::OpenProject),
        ),
        (
            action_icons::project::toolbar::save(),
            idle.then_some(Message::SaveProject),
        ),
        (
            action_icons::project::toolbar::export(),
            idle.then_some(Message::ExportDocument),
        ),
        (
            action_icons::edit::toolbar::undo(),
            (ctx.can_undo && idle).then_some(Message::Undo),
        ),
        (
            action_icons::edit::toolbar::redo(),
            (ctx.can_redo && idle).then_some(Message::Redo),
        ),
    ];

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center);
    for (icon, on_press) in buttons {
        row = row.push(toolbar_button(icon, on_press));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

fn toolbar_button<'a>(icon: Image<Handle>, on_press: Option<Message>) -> Element<'a, Message> {
    let mut btn = button(icons::sized(icon, sizing::ICON_MD))
        .padding(spacing::XS)
        .style(styles::button::toolbar);
    if let Some(message) = on_press {
        btn = btn.on_press(message);
    }
    btn.into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries: [(Image<Handle>, &str, Message); 6] = [
        (
            action_icons::project::new(),
            "menu-new-project",
            Message::NewProject,
        ),
        (
            action_icons::project::save(),
            "menu-save-as",
            Message::SaveProjectAs,
        ),
        (
            action_icons::project::backup(),
            "menu-export-backup",
            Message::ExportBackup,
        ),
        (
            action_icons::navigation::settings(),
            "menu-settings",
            Message::OpenSettings,
        ),
        (
            action_icons::navigation::help(),
            "menu-help",
            Message::OpenHelp,
        ),
        (
            action_icons::navigation::about(),
            "menu-about",
            Message::OpenAbout,
        ),
    ];

    let mut menu = Column::new().spacing(spacing::XXS);
    for (icon, key, message) in entries {
        menu = menu.push(menu_item(icon, ctx.i18n.tr(key), message));
    }

    Container::new(menu)
        .padding(spacing::XS)
        .style(dropdown_style)
        .into()
}

fn menu_item<'a>(icon: Image<Handle>, label: String, message: Message) -> Element<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icons::sized(icon, sizing::ICON_SM))
            .push(Text::new(label)),
    )
    .on_press(message)
    .padding([spacing::XS, spacing::SM])
    .width(Length::Fill)
    .style(menu_item_style)
    .into()
}

fn dropdown_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, text_color) = match status {
        button::Status::Hovered => (
            Some(palette.background.strong.color),
            palette.background.base.text,
        ),
        button::Status::Pressed => (
            Some(palette.primary.strong.color),
            palette.primary.strong.text,
        ),
        button::Status::Disabled => (None, palette.background.weak.text),
        button::Status::Active => (None, palette.background.base.text),
    };

    button::Style {
        background: background.map(Into::into),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn ctx(i18n: &I18n, menu_open: bool) -> ViewContext<'_> {
        ViewContext {
            i18n,
            menu_open,
            can_undo: true,
            can_redo: false,
            busy: false,
        }
    }

    #[test]
    fn renders_with_menu_closed_and_open() {
        let i18n = I18n::default();
        let _closed = view(ctx(&i18n, false));
        let _open = view(ctx(&i18n, true));
    }

    #[test]
    fn toggle_flips_the_menu_without_an_event() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(!menu_open);
    }

    #[test]
    fn picking_an_action_closes_the_menu() {
        for (message, expect_settings) in [
            (Message::OpenSettings, true),
            (Message::ExportBackup, false),
            (Message::NewProject, false),
        ] {
            let mut menu_open = true;
            let event = update(message, &mut menu_open);
            assert!(!menu_open);
            assert_eq!(matches!(event, Event::OpenSettings), expect_settings);
        }
    }

    #[test]
    fn undo_redo_leave_the_menu_alone() {
        let mut menu_open = true;
        assert!(matches!(update(Message::Undo, &mut menu_open), Event::Undo));
        assert!(menu_open);
        assert!(matches!(update(Message::Redo, &mut menu_open), Event::Redo));
        assert!(menu_open);
    }
}
