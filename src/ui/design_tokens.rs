// SPDX-License-Identifier: MPL-2.0
//! Central design tokens: palette, opacity, spacing, sizing, typography,
//! border and shadow scales shared by every screen.
//!
//! Tokens keep ratios intentional (the spacing scale sits on an 8px grid,
//! type sizes step down from titles to captions). Check call sites before
//! changing a value; the compile-time asserts below catch broken ordering.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.12, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.28, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.42, 0.42, 0.44);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.72, 0.74);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.89);

    // Brand blue scale
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_800: Color = Color::from_rgb(0.1, 0.3, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.851, 0.188, 0.212);
    pub const WARNING_500: Color = Color::from_rgb(0.957, 0.62, 0.11);
    pub const SUCCESS_500: Color = Color::from_rgb(0.22, 0.66, 0.36);
    pub const INFO_500: Color = Color::from_rgb(0.36, 0.57, 0.98);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.18;
    pub const OVERLAY_MEDIUM: f32 = 0.48;
    pub const OVERLAY_STRONG: f32 = 0.72;
    pub const OVERLAY_HOVER: f32 = 0.82;
    pub const OVERLAY_PRESSED: f32 = 0.92;

    /// Semi-transparent panel surfaces.
    pub const SURFACE: f32 = 0.94;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 44.0;

    /// Thumbnail edge length in step list rows.
    pub const STEP_THUMBNAIL: f32 = 56.0;
    /// Height of a single step list row.
    pub const STEP_ROW_HEIGHT: f32 = 72.0;

    pub const SIDEBAR_WIDTH: f32 = 280.0;
    pub const TOAST_WIDTH: f32 = 336.0;
}

/// Type scale from page titles down to badge captions.
pub mod typography {
    /// Main page headings (Settings, Help, About).
    pub const TITLE_LG: f32 = 28.0;
    /// App name, prominent labels.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;
    /// Form inputs, emphasis text.
    pub const BODY_LG: f32 = 16.0;
    /// Most UI text.
    pub const BODY: f32 = 14.0;
    /// Hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;
    /// Badges, timestamps.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Emphasis borders, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 9.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE < 1.0);

    assert!(sizing::ICON_SM < sizing::ICON_MD);
    assert!(sizing::ICON_MD < sizing::ICON_XL);
    assert!(sizing::STEP_THUMBNAIL < sizing::STEP_ROW_HEIGHT);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::BODY_LG < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);

    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};
