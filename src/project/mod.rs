// SPDX-License-Identifier: MPL-2.0
//! Project domain model: document metadata, the ordered step list and the
//! operations the editor performs on them.

pub mod autosave;
pub mod backup;
pub mod history;
pub mod persistence;
pub mod settings;
pub mod step;

pub use history::{SnapshotHistory, HISTORY_CAPACITY};
pub use settings::{DocumentLanguage, DocumentSettings, Layout};
pub use step::{Step, StepImage};

use crate::media::PreparedImage;
use chrono::Local;

/// Document-level metadata rendered on the cover page and in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub code: String,
    pub title: String,
    /// Free-form date string; defaults to today.
    pub date: String,
    pub author: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            code: String::new(),
            title: String::new(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            author: String::new(),
        }
    }
}

/// Reasons a project cannot be exported yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoSteps,
    EmptyCode,
    EmptyTitle,
}

impl ValidationError {
    /// Returns the i18n message key shown when export is refused.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::NoSteps => "validation-no-steps",
            ValidationError::EmptyCode => "validation-empty-code",
            ValidationError::EmptyTitle => "validation-empty-title",
        }
    }
}

/// The full editing state: metadata, ordered steps, formatting options and
/// the current selection. Cloning a project is cheap enough to snapshot on
/// every edit (image payloads are shared).
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub meta: DocumentMeta,
    pub steps: Vec<Step>,
    pub settings: DocumentSettings,
    pub selected: Option<usize>,
}

impl Project {
    /// Appends a step built from a prepared image and selects it.
    pub fn add_step(&mut self, prepared: PreparedImage, default_description: impl Into<String>) {
        self.steps
            .push(Step::from_prepared(prepared, default_description));
        self.selected = Some(self.steps.len() - 1);
    }

    /// Removes the step at `index`. Later steps shift down one position;
    /// the selection clamps to the nearest surviving step.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.steps.remove(index);
        self.selected = if self.steps.is_empty() {
            None
        } else {
            Some(index.min(self.steps.len() - 1))
        };
        true
    }

    /// Swaps the step at `index` with its predecessor.
    pub fn move_step_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.steps.len() {
            return false;
        }
        self.steps.swap(index, index - 1);
        self.selected = Some(index - 1);
        true
    }

    /// Swaps the step at `index` with its successor.
    pub fn move_step_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.steps.len() {
            return false;
        }
        self.steps.swap(index, index + 1);
        self.selected = Some(index + 1);
        true
    }

    /// Swaps the image of the step at `index`, keeping name and description.
    pub fn replace_image(&mut self, index: usize, prepared: PreparedImage) -> bool {
        match self.steps.get_mut(index) {
            Some(step) => {
                step.replace_image(prepared);
                true
            }
            None => false,
        }
    }

    pub fn set_step_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(step) = self.steps.get_mut(index) {
            step.name = name.into();
        }
    }

    pub fn set_step_description(&mut self, index: usize, description: impl Into<String>) {
        if let Some(step) = self.steps.get_mut(index) {
            step.description = description.into();
        }
    }

    /// Returns the currently selected step, if any.
    pub fn selected_step(&self) -> Option<&Step> {
        self.selected.and_then(|i| self.steps.get(i))
    }

    /// Checks the project is complete enough to generate a document.
    pub fn validate_for_export(&self) -> Result<(), ValidationError> {
        if self.steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }
        if self.meta.code.trim().is_empty() {
            return Err(ValidationError::EmptyCode);
        }
        if self.meta.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::media::{EncodedImage, PreparedImage};
    use image_rs::{Rgba, RgbaImage};
    use std::io::Cursor;

    pub fn prepared(stem: &str) -> PreparedImage {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]))
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        PreparedImage {
            file_name: format!("{stem}.png"),
            stem: stem.to_string(),
            image: EncodedImage::from_bytes(bytes).expect("wrap"),
        }
    }

    pub fn project_with_steps(stems: &[&str]) -> Project {
        let mut project = Project {
            meta: DocumentMeta {
                code: "PRJ-001".into(),
                title: "Assembly manual".into(),
                ..DocumentMeta::default()
            },
            ..Project::default()
        };
        for stem in stems {
            project.add_step(prepared(stem), format!("describe {stem}"));
        }
        project
    }
}
