// SPDX-License-Identifier: MPL-2.0
//! A single illustrated instruction step.

use crate::media::{EncodedImage, PreparedImage};
use iced::widget::image;

/// Image payload attached to a step.
///
/// The encoded bytes are `Arc`-shared, so cloning a step (and therefore a
/// whole project snapshot) stays cheap.
#[derive(Debug, Clone)]
pub struct StepImage {
    /// File name the payload travels under (project files, backups).
    pub file_name: String,
    pub image: EncodedImage,
}

impl StepImage {
    /// Builds a widget handle for displaying this image.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        self.image.handle()
    }
}

/// One illustrated instruction unit. Identity is positional: a step is
/// addressed by its index in the project's step list.
#[derive(Debug, Clone)]
pub struct Step {
    pub image: StepImage,
    pub name: String,
    pub description: String,
}

impl Step {
    /// Creates a step from a prepared image. The name defaults to the image
    /// file stem; the description is supplied by the caller (a localized
    /// template in the app).
    pub fn from_prepared(prepared: PreparedImage, description: impl Into<String>) -> Self {
        let name = prepared.stem.clone();
        Self {
            image: StepImage {
                file_name: prepared.file_name,
                image: prepared.image,
            },
            name,
            description: description.into(),
        }
    }

    /// Swaps in a new image, keeping the step's name and description.
    pub fn replace_image(&mut self, prepared: PreparedImage) {
        self.image = StepImage {
            file_name: prepared.file_name,
            image: prepared.image,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::EncodedImage;
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;

    pub(crate) fn test_prepared(stem: &str) -> PreparedImage {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        PreparedImage {
            file_name: format!("{stem}.png"),
            stem: stem.to_string(),
            image: EncodedImage::from_bytes(bytes).expect("wrap"),
        }
    }

    #[test]
    fn step_name_defaults_to_file_stem() {
        let step = Step::from_prepared(test_prepared("mount_bracket"), "desc");
        assert_eq!(step.name, "mount_bracket");
        assert_eq!(step.image.file_name, "mount_bracket.png");
        assert_eq!(step.description, "desc");
    }

    #[test]
    fn replace_image_keeps_name_and_description() {
        let mut step = Step::from_prepared(test_prepared("before"), "keep me");
        step.name = "custom name".into();

        step.replace_image(test_prepared("after"));

        assert_eq!(step.name, "custom name");
        assert_eq!(step.description, "keep me");
        assert_eq!(step.image.file_name, "after.png");
    }
}
