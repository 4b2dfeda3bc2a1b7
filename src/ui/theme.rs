// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and container styles for the editor screens.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_100, GRAY_900, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Color, Theme};

/// Background color used by the toolbar and navbar.
pub fn toolbar_background() -> Color {
    GRAY_900
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for error icons and accents.
pub fn error_color() -> Color {
    palette::ERROR_500
}

/// Standard color for success text.
pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

// ============================================================================
// Step List Styles
// ============================================================================

/// Background color of the selected step row.
pub fn selected_step_background(is_dark: bool) -> Color {
    if is_dark {
        palette::PRIMARY_800
    } else {
        palette::PRIMARY_100
    }
}

/// Background color of a step row under the pointer.
pub fn hovered_step_background(is_dark: bool) -> Color {
    if is_dark {
        Color::from_rgb(0.2, 0.2, 0.2)
    } else {
        GRAY_100
    }
}

/// Placeholder color for steps whose image is still being prepared.
pub fn thumbnail_placeholder_color() -> Color {
    palette::GRAY_200
}

/// Style for the step list sidebar container.
pub fn step_list_panel_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        ..Default::default()
    }
}

// ============================================================================
// Progress Overlay Styles
// ============================================================================
// Shared styling for the modal overlay shown while images are prepared or a
// document export is running, so that blocking operations look consistent.

/// Darkened backdrop behind the progress card.
pub fn progress_backdrop_color() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Text color on top of the darkened backdrop.
pub fn progress_overlay_text_color() -> Color {
    WHITE
}

/// Style for the centered progress card.
pub fn progress_card_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_step_background_differs_per_mode() {
        assert_ne!(
            selected_step_background(true),
            selected_step_background(false)
        );
    }

    #[test]
    fn progress_backdrop_is_translucent() {
        let color = progress_backdrop_color();
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
