// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Font**: Document font family and size bounds
//! - **Image width**: Embedded image width bounds and slider step
//! - **Autosave**: Autosave toggle default

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Default font family for generated documents.
pub const DEFAULT_FONT_FAMILY: &str = "Calibri";

/// Font families offered in the settings dropdown.
/// Ordered by how commonly they are installed; the first entry is the default.
pub const FONT_FAMILY_PRESETS: &[&str] = &[
    "Calibri",
    "Arial",
    "Times New Roman",
    "Verdana",
    "Cambria",
];

/// Default document font size in points.
pub const DEFAULT_FONT_SIZE_PT: u16 = 11;

/// Minimum allowed document font size in points.
pub const MIN_FONT_SIZE_PT: u16 = 8;

/// Maximum allowed document font size in points.
pub const MAX_FONT_SIZE_PT: u16 = 24;

// ==========================================================================
// Image Width Defaults
// ==========================================================================

/// Default embedded image width in centimeters.
pub const DEFAULT_IMAGE_WIDTH_CM: f32 = 8.0;

/// Step applied by the image width slider, in centimeters.
pub const IMAGE_WIDTH_STEP_CM: f32 = 0.5;

// ==========================================================================
// Autosave Defaults
// ==========================================================================

/// Whether periodic autosave is enabled by default.
pub const DEFAULT_AUTOSAVE_ENABLED: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    use crate::project::settings::{MAX_IMAGE_WIDTH_CM, MIN_IMAGE_WIDTH_CM};

    // Font size validation
    assert!(MIN_FONT_SIZE_PT > 0);
    assert!(MAX_FONT_SIZE_PT > MIN_FONT_SIZE_PT);
    assert!(DEFAULT_FONT_SIZE_PT >= MIN_FONT_SIZE_PT);
    assert!(DEFAULT_FONT_SIZE_PT <= MAX_FONT_SIZE_PT);

    // Image width validation
    assert!(MIN_IMAGE_WIDTH_CM > 0.0);
    assert!(MAX_IMAGE_WIDTH_CM > MIN_IMAGE_WIDTH_CM);
    assert!(DEFAULT_IMAGE_WIDTH_CM >= MIN_IMAGE_WIDTH_CM);
    assert!(DEFAULT_IMAGE_WIDTH_CM <= MAX_IMAGE_WIDTH_CM);
    assert!(IMAGE_WIDTH_STEP_CM > 0.0);
    assert!(IMAGE_WIDTH_STEP_CM < MAX_IMAGE_WIDTH_CM - MIN_IMAGE_WIDTH_CM);

    // Ensure presets array is not empty and starts with the default
    assert!(!FONT_FAMILY_PRESETS.is_empty());
    assert!(
        // str equality is not const, compare the byte slices
        {
            let a = FONT_FAMILY_PRESETS[0].as_bytes();
            let b = DEFAULT_FONT_FAMILY.as_bytes();
            let mut equal = a.len() == b.len();
            let mut i = 0;
            while equal && i < a.len() {
                equal = a[i] == b[i];
                i += 1;
            }
            equal
        }
    );
};
