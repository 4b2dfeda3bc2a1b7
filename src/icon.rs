// SPDX-License-Identifier: MPL-2.0
//! Window icon for the title bar and task switcher.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SVG: &[u8] = include_bytes!("../assets/branding/stepdoc.svg");
const ICON_SIZE: u32 = 128;

/// Rasterizes the embedded branding SVG to an RGBA window icon.
///
/// `None` when parsing or rendering fails; the window then simply keeps
/// the platform default icon.
pub fn load_window_icon() -> Option<Icon> {
    let tree = usvg::Tree::from_data(ICON_SVG, &usvg::Options::default()).ok()?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / size.width(),
        ICON_SIZE as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE).ok()
}
