// SPDX-License-Identifier: MPL-2.0
//! Visual rendering of notifications as toast cards.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// One toast card: severity icon, resolved message, dismiss button.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();
        let message = resolve_message(notification, i18n);

        let dismiss = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let body = Text::new(message)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icons::sized(severity_icon(severity), sizing::ICON_MD)).padding(spacing::XXS))
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss);

        Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| card_style(theme, accent))
            .into()
    }

    /// Stack of all visible toasts, anchored to the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if cards.is_empty() {
            return Container::new(text("")).width(Length::Shrink).into();
        }

        Container::new(
            Column::with_children(cards)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

/// Resolves the notification's Fluent key, passing arguments when present.
fn resolve_message(notification: &Notification, i18n: &I18n) -> String {
    let args = notification.message_args();
    if args.is_empty() {
        return i18n.tr(notification.message_key());
    }
    let args: Vec<(&str, String)> = args.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    i18n.tr_args(notification.message_key(), &args)
}

fn severity_icon(severity: Severity) -> Image<Handle> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let (background, text_color) = match status {
        button::Status::Hovered => (
            Some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Pressed => (
            Some(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            }),
            base.text,
        ),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
        button::Status::Active => (None, base.text),
    };

    button::Style {
        background: background.map(iced::Background::Color),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_border_carries_the_accent_color() {
        let style = card_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn warning_and_error_share_an_icon() {
        let _ = severity_icon(Severity::Warning);
        let _ = severity_icon(Severity::Error);
    }

    #[test]
    fn argument_toasts_resolve_through_tr_args() {
        let i18n = I18n::default();
        let toast =
            Notification::warning("notification-images-skipped").with_arg("files", "a.png");
        let message = resolve_message(&toast, &i18n);
        assert!(message.contains("a.png"));
    }

    #[test]
    fn plain_toasts_resolve_their_key() {
        let i18n = I18n::default();
        let toast = Notification::success("notification-save-success");
        assert!(!resolve_message(&toast, &i18n).starts_with("MISSING"));
    }
}
