// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Rounded panel surface behind the settings and metadata forms.
///
/// Derived from the active theme background at reduced opacity, so the
/// panel reads as a layer in both light and dark mode without hard-coded
/// colors.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark strip behind the toolbar icon buttons, identical in both theme
/// modes so the light icons stay legible.
pub fn toolbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme::toolbar_background())),
        ..Default::default()
    }
}
