// SPDX-License-Identifier: MPL-2.0
//! Build script for icon rasterization and platform-specific resources.
//!
//! The PNG icons consumed by `src/ui/icons.rs` are generated here from the
//! SVG sources in `assets/icons/svg/`. Each icon is rendered twice into
//! `OUT_DIR`: a dark variant (as authored, black fills) and a light variant
//! with the fill color swapped to white for toolbar buttons.
//!
//! On Windows, this additionally embeds the application icon into the
//! executable so it appears in the taskbar and file explorer.

use std::fs;
use std::path::Path;

/// Rasterization size in pixels. Icons are rendered larger than their
/// on-screen size so they stay crisp on high-DPI displays.
const ICON_SIZE: u32 = 64;

fn main() {
    println!("cargo:rerun-if-changed=assets/icons/svg");

    rasterize_icons().expect("Failed to rasterize icons");

    // Only run on Windows
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set_icon("assets/branding/stepdoc.ico");
        res.compile().expect("Failed to compile Windows resources");
    }
}

/// Renders every SVG in `assets/icons/svg/` to PNG, producing
/// `OUT_DIR/icons/dark/<name>.png` and `OUT_DIR/icons/light/<name>.png`.
fn rasterize_icons() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let dark_dir = Path::new(&out_dir).join("icons").join("dark");
    let light_dir = Path::new(&out_dir).join("icons").join("light");
    fs::create_dir_all(&dark_dir)?;
    fs::create_dir_all(&light_dir)?;

    for entry in fs::read_dir("assets/icons/svg")? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or("non-UTF-8 icon file name")?;
        let svg = fs::read_to_string(&path)?;
        let png_name = format!("{stem}.png");

        render_svg(&svg, &dark_dir.join(&png_name))?;
        // The light variant is the same shape with white fills
        let light_svg = svg.replace("#000000", "#ffffff");
        render_svg(&light_svg, &light_dir.join(&png_name))?;
    }

    Ok(())
}

/// Renders SVG markup to a PNG file at `ICON_SIZE` x `ICON_SIZE` pixels.
fn render_svg(svg: &str, target: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use resvg::usvg;

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let mut pixmap =
        tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE).ok_or("pixmap allocation failed")?;

    #[allow(clippy::cast_precision_loss)]
    let scale = ICON_SIZE as f32 / tree.size().width();
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap.save_png(target)?;
    Ok(())
}
