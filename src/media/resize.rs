// SPDX-License-Identifier: MPL-2.0
//! Byte-budget downscaling for step images.
//!
//! Every image entering a project passes through [`prepare_from_path`], which
//! keeps small files untouched and shrinks oversized ones until their encoded
//! form fits the budget.

use crate::error::{ImageError, Result};
use crate::media::image::{load_encoded, EncodedImage};
use image_rs::imageops::FilterType;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Encoded-size budget for a single step image.
pub const SIZE_BUDGET_BYTES: usize = 800 * 1024;

/// Upper bound on the linear scale factor applied to oversized images.
pub const MAX_SCALE: f32 = 0.8;

/// JPEG quality used when re-encoding a downscaled image.
const JPEG_QUALITY: u8 = 85;

/// An image prepared for insertion into a project.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// File name to carry along with the step (original name, or a derived
    /// `.jpg` name when the payload was re-encoded).
    pub file_name: String,
    /// Original file stem, used to seed the step name.
    pub stem: String,
    pub image: EncodedImage,
}

/// Shrinks `image` until its encoded form fits [`SIZE_BUDGET_BYTES`].
///
/// Inputs already at or under budget are returned unchanged, byte for byte.
/// Oversized inputs are scaled by `min(MAX_SCALE, budget / size)` on both
/// axes, resampled with Lanczos3 and re-encoded as JPEG.
///
/// # Errors
///
/// Returns an error when the payload cannot be decoded or the JPEG
/// re-encode fails. Callers treat this as non-fatal and keep the
/// original payload.
pub fn fit_to_budget(image: &EncodedImage) -> Result<EncodedImage> {
    if image.byte_len() <= SIZE_BUDGET_BYTES {
        return Ok(image.clone());
    }

    let decoded = image_rs::load_from_memory(&image.bytes)
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    let scale = (SIZE_BUDGET_BYTES as f32 / image.byte_len() as f32).min(MAX_SCALE);
    let width = ((decoded.width() as f32 * scale) as u32).max(1);
    let height = ((decoded.height() as f32 * scale) as u32).max(1);

    let resized = decoded.resize_exact(width, height, FilterType::Lanczos3);

    let mut encoded = Vec::new();
    let encoder =
        image_rs::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut encoded), JPEG_QUALITY);
    // JPEG has no alpha channel
    resized
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| ImageError::EncodeFailed(e.to_string()))?;

    Ok(EncodedImage {
        bytes: Arc::new(encoded),
        width,
        height,
    })
}

/// Loads an image from disk and fits it to the size budget.
///
/// A failed downscale falls back to the original payload (the step still
/// gets its image); a payload that cannot be decoded at all is an error.
pub fn prepare_from_path<P: AsRef<Path>>(path: P) -> Result<PreparedImage> {
    let path = path.as_ref();
    let original = load_encoded(path)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();
    let original_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string();

    if original.byte_len() <= SIZE_BUDGET_BYTES {
        return Ok(PreparedImage {
            file_name: original_name,
            stem,
            image: original,
        });
    }

    match fit_to_budget(&original) {
        Ok(image) => {
            let digest = blake3::hash(&image.bytes);
            let file_name = format!("{}_{}.jpg", stem, &digest.to_hex().as_str()[..8]);
            Ok(PreparedImage {
                file_name,
                stem,
                image,
            })
        }
        Err(err) => {
            eprintln!(
                "Downscale of {} failed, keeping original: {err:?}",
                path.display()
            );
            Ok(PreparedImage {
                file_name: original_name,
                stem,
                image: original,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn noisy_image(width: u32, height: u32) -> RgbaImage {
        // Pseudo-random pixels so PNG compression cannot collapse the payload
        let mut seed = 0x2545f491u32;
        RgbaImage::from_fn(width, height, |_, _| {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            let b = seed.to_le_bytes();
            Rgba([b[0], b[1], b[2], 255])
        })
    }

    fn encoded_png(img: &RgbaImage) -> EncodedImage {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        EncodedImage::from_bytes(bytes).expect("wrap png")
    }

    #[test]
    fn small_image_is_kept_byte_identical() {
        let img = noisy_image(32, 32);
        let encoded = encoded_png(&img);
        assert!(encoded.byte_len() <= SIZE_BUDGET_BYTES);

        let fitted = fit_to_budget(&encoded).expect("fit");
        assert_eq!(*fitted.bytes, *encoded.bytes);
        assert_eq!(fitted.width, 32);
    }

    #[test]
    fn oversized_image_shrinks_dimensions() {
        let img = noisy_image(1400, 1000);
        let encoded = encoded_png(&img);
        assert!(
            encoded.byte_len() > SIZE_BUDGET_BYTES,
            "fixture must exceed the budget (got {} bytes)",
            encoded.byte_len()
        );

        let fitted = fit_to_budget(&encoded).expect("fit");
        assert!(fitted.width < 1400);
        assert!(fitted.height < 1000);
        let expected_scale =
            (SIZE_BUDGET_BYTES as f32 / encoded.byte_len() as f32).min(MAX_SCALE);
        assert_eq!(fitted.width, (1400.0 * expected_scale) as u32);
        assert_eq!(fitted.height, (1000.0 * expected_scale) as u32);
    }

    #[test]
    fn oversized_image_reencodes_as_jpeg() {
        let img = noisy_image(1400, 1000);
        let encoded = encoded_png(&img);
        let fitted = fit_to_budget(&encoded).expect("fit");

        let format = image_rs::guess_format(&fitted.bytes).expect("format");
        assert_eq!(format, image_rs::ImageFormat::Jpeg);
        assert!(fitted.byte_len() < encoded.byte_len());
    }

    #[test]
    fn scale_never_exceeds_max() {
        // Barely over budget: budget/size close to 1.0, so MAX_SCALE must win
        let img = noisy_image(640, 640);
        let encoded = encoded_png(&img);
        if encoded.byte_len() <= SIZE_BUDGET_BYTES {
            // Payload compressed under budget on this platform; nothing to assert
            return;
        }

        let fitted = fit_to_budget(&encoded).expect("fit");
        assert!(fitted.width as f32 <= 640.0 * MAX_SCALE + 1.0);
    }

    #[test]
    fn prepare_keeps_original_name_for_small_files() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("widget.png");
        noisy_image(16, 16).save(&path).expect("write png");

        let prepared = prepare_from_path(&path).expect("prepare");
        assert_eq!(prepared.file_name, "widget.png");
        assert_eq!(prepared.image.width, 16);
    }

    #[test]
    fn prepare_renames_downscaled_files_to_jpg() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("photo.png");
        noisy_image(1400, 1000).save(&path).expect("write png");

        let prepared = prepare_from_path(&path).expect("prepare");
        assert!(prepared.file_name.starts_with("photo_"));
        assert!(prepared.file_name.ends_with(".jpg"));
        assert!(prepared.image.byte_len() <= SIZE_BUDGET_BYTES);
    }

    #[test]
    fn prepare_missing_file_is_an_error() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("gone.png");
        assert!(prepare_from_path(&path).is_err());
    }
}
