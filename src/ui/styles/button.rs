// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(
    background: Color,
    text_color: Color,
    border_color: Option<Color>,
    shadow: Shadow,
) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color.unwrap_or(Color::TRANSPARENT),
            width: if border_color.is_some() { 1.0 } else { 0.0 },
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Icon buttons on the dark toolbars.
///
/// Transparent at rest so the toolbar background shows through, with a
/// subtle lightening on hover and press.
pub fn toolbar(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    filled(Color { a: alpha, ..WHITE }, WHITE, None, shadow::NONE)
}

/// Variante destructive pour la suppression d'étape.
pub fn toolbar_destructive(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled(
            Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::ERROR_500
            },
            WHITE,
            None,
            shadow::SM,
        ),
        button::Status::Pressed => filled(palette::ERROR_500, WHITE, None, shadow::SM),
        _ => toolbar(theme, status),
    }
}

/// The active option of a toggle group, in brand colors.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            Some(palette::PRIMARY_600),
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            Some(palette::PRIMARY_500),
            shadow::MD,
        ),
        button::Status::Disabled => disabled(theme),
    }
}

/// The inactive options of a toggle group, on a neutral surface.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let light = matches!(theme, Theme::Light);
    let (surface, text) = if light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(surface, text, Some(palette::GRAY_400), shadow::NONE)
        }
        button::Status::Hovered => {
            let hover = if light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover, text, Some(palette::PRIMARY_500), shadow::SM)
        }
        button::Status::Disabled => disabled(theme),
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let surface = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };
    filled(
        surface,
        palette::GRAY_400,
        Some(palette::GRAY_400),
        shadow::NONE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background_color(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn toolbar_is_transparent_at_rest() {
        let style = toolbar(&Theme::Dark, button::Status::Active);
        assert_eq!(background_color(&style).a, 0.0);
    }

    #[test]
    fn toolbar_lightens_on_hover() {
        let rest = toolbar(&Theme::Dark, button::Status::Active);
        let hover = toolbar(&Theme::Dark, button::Status::Hovered);
        assert_ne!(rest.background, hover.background);
    }

    #[test]
    fn destructive_toolbar_turns_red_on_hover() {
        let hover = toolbar_destructive(&Theme::Dark, button::Status::Hovered);
        let color = background_color(&hover);
        assert!(color.r > color.g);
        assert!(color.r > color.b);
    }

    #[test]
    fn destructive_toolbar_rests_like_the_plain_one() {
        let plain = toolbar(&Theme::Light, button::Status::Active);
        let red = toolbar_destructive(&Theme::Light, button::Status::Active);
        assert_eq!(plain.background, red.background);
    }

    #[test]
    fn selected_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(background_color(&style), palette::PRIMARY_500);
    }

    #[test]
    fn unselected_surface_follows_the_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn disabled_states_match_across_groups() {
        let a = selected(&Theme::Light, button::Status::Disabled);
        let b = unselected(&Theme::Light, button::Status::Disabled);
        assert_eq!(a.background, b.background);
        assert_eq!(a.text_color, b.text_color);
    }
}
