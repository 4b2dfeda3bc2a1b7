// SPDX-License-Identifier: MPL-2.0
//! Tooltip helper used by the toolbar and step list buttons.
//!
//! Tooltips render on an inverted surface (dark on light themes, light on
//! dark themes) so they stay readable over any screen content.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Container style for the tooltip bubble, inverted against the theme.
pub fn bubble(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let is_dark = (base.r + base.g + base.b) / 3.0 < 0.5;

    let (background, text) = if is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color { a: 0.3, ..text },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` at `position`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble_content = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, bubble_content, position).gap(spacing::XS)
}
