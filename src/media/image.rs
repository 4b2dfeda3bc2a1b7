// SPDX-License-Identifier: MPL-2.0
//! Decoding of step images.
//!
//! Everything downstream of the file pickers (previews, resizing, project
//! persistence, document embedding) works on [`EncodedImage`]: raster bytes
//! plus known pixel dimensions. Raster inputs keep their on-disk encoding;
//! SVG inputs are rasterized to PNG here so no other module has to care
//! about vector formats.

use crate::error::{Error, ImageError, Result};
use iced::widget::image;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia;

/// An image decoded far enough to know its pixel dimensions, carried as its
/// encoded raster payload.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Encoded raster bytes (PNG, JPEG, etc.).
    /// Stored in Arc to keep snapshot copies cheap.
    pub bytes: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    /// Wraps already-encoded raster bytes, decoding once to learn dimensions.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let decoded = image_rs::load_from_memory(&bytes)
            .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;
        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            bytes: Arc::new(bytes),
        })
    }

    /// Builds a widget handle for displaying this image.
    ///
    /// The handle shares the encoded payload, so cloning stays cheap.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        image::Handle::from_bytes(self.bytes.to_vec())
    }

    /// Returns the encoded payload size in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// File extensions accepted by the image pickers.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "svg",
];

/// Loads an image file as its encoded raster payload.
///
/// # Errors
///
/// [`Error::Image`] when the file cannot be read or its raster data does not
/// decode, [`Error::Svg`] when an SVG fails to parse, has an empty canvas or
/// cannot be rendered.
pub fn load_encoded<P: AsRef<Path>>(path: P) -> Result<EncodedImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ImageError::IoError(e.to_string()))?;

    if has_svg_extension(path) {
        rasterize_svg(&bytes)
    } else {
        EncodedImage::from_bytes(bytes)
    }
}

fn has_svg_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Renders SVG markup at its intrinsic size and re-encodes it as PNG.
fn rasterize_svg(svg_bytes: &[u8]) -> Result<EncodedImage> {
    let tree = usvg::Tree::from_data(svg_bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG canvas is empty".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("pixmap allocation failed".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    Ok(EncodedImage {
        bytes: Arc::new(png),
        width,
        height,
    })
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(ImageError::DecodeFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let target = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
            .save(&target)
            .expect("write png fixture");
        target
    }

    #[test]
    fn png_reports_its_dimensions_and_keeps_bytes() {
        let dir = tempdir().expect("temp dir");
        let target = write_png(dir.path(), "shot.png", 5, 7);
        let on_disk = fs::read(&target).expect("read fixture back");

        let loaded = load_encoded(&target).expect("load png");
        assert_eq!((loaded.width, loaded.height), (5, 7));
        assert_eq!(*loaded.bytes, on_disk);
        assert_eq!(loaded.byte_len(), on_disk.len());
    }

    #[test]
    fn svg_becomes_a_raster_payload() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("drawing.svg");
        fs::write(
            &target,
            "<svg xmlns='http://www.w3.org/2000/svg' width='6' height='3'>\
             <rect width='6' height='3' fill='teal'/></svg>",
        )
        .expect("write svg fixture");

        let loaded = load_encoded(&target).expect("load svg");
        assert_eq!((loaded.width, loaded.height), (6, 3));
        let decoded = image_rs::load_from_memory(&loaded.bytes).expect("payload is raster");
        assert_eq!(decoded.width(), 6);
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_svg_extension(Path::new("logo.SVG")));
        assert!(!has_svg_extension(Path::new("logo.svg.png")));
        assert!(!has_svg_extension(Path::new("no_extension")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("temp dir");
        match load_encoded(dir.path().join("absent.png")) {
            Err(Error::Image(ImageError::IoError(_))) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn garbage_raster_bytes_are_a_decode_error() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("junk.jpg");
        fs::write(&target, b"definitely not a jpeg").expect("write junk");

        match load_encoded(&target) {
            Err(Error::Image(ImageError::DecodeFailed(message))) => assert!(!message.is_empty()),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn broken_or_empty_svg_is_an_svg_error() {
        let dir = tempdir().expect("temp dir");
        for (name, markup) in [
            ("broken.svg", "<svg truncated"),
            (
                "zero.svg",
                "<svg xmlns='http://www.w3.org/2000/svg' width='0' height='4'></svg>",
            ),
        ] {
            let target = dir.path().join(name);
            fs::write(&target, markup).expect("write svg fixture");
            match load_encoded(&target) {
                Err(Error::Svg(_)) => {}
                other => panic!("expected svg error for {name}, got {other:?}"),
            }
        }
    }
}
