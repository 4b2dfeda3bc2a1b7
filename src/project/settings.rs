// SPDX-License-Identifier: MPL-2.0
//! Formatting options applied to the generated document.

use serde::{Deserialize, Serialize};

/// Placement of the step image relative to its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Image on the left, description on the right (side-by-side table).
    #[default]
    ImageLeft,
    /// Image above the description.
    ImageTop,
    /// Image below the description.
    ImageBottom,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::ImageLeft, Layout::ImageTop, Layout::ImageBottom];

    /// Returns the i18n key for the settings dropdown label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Layout::ImageLeft => "layout-image-left",
            Layout::ImageTop => "layout-image-top",
            Layout::ImageBottom => "layout-image-bottom",
        }
    }
}

/// Language the generated document is written in. Independent of the
/// interface language: a Polish UI can produce an English document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentLanguage {
    #[default]
    Pl,
    En,
}

impl DocumentLanguage {
    pub const ALL: [DocumentLanguage; 2] = [DocumentLanguage::Pl, DocumentLanguage::En];

    /// Returns the i18n key for the settings dropdown label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentLanguage::Pl => "doc-language-pl",
            DocumentLanguage::En => "doc-language-en",
        }
    }
}

/// Fallback image width applied when the configured value is unusable.
pub const FALLBACK_IMAGE_WIDTH_IN: f32 = 3.15;

/// Valid range for the configured image width, in centimeters.
pub const MIN_IMAGE_WIDTH_CM: f32 = 2.0;
pub const MAX_IMAGE_WIDTH_CM: f32 = 14.0;

/// Formatting options for the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSettings {
    pub layout: Layout,
    pub image_width_cm: f32,
    pub font_family: String,
    pub font_size: u16,
    pub language: DocumentLanguage,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            image_width_cm: 8.0,
            font_family: "Calibri".to_string(),
            font_size: 11,
            language: DocumentLanguage::default(),
        }
    }
}

impl DocumentSettings {
    /// Returns the configured image width in inches, falling back to
    /// [`FALLBACK_IMAGE_WIDTH_IN`] when the value is out of range or not
    /// finite.
    #[must_use]
    pub fn image_width_in(&self) -> f32 {
        let cm = self.image_width_cm;
        if cm.is_finite() && (MIN_IMAGE_WIDTH_CM..=MAX_IMAGE_WIDTH_CM).contains(&cm) {
            cm / 2.54
        } else {
            FALLBACK_IMAGE_WIDTH_IN
        }
    }
}
