// SPDX-License-Identifier: MPL-2.0
//! Project file reading and writing.
//!
//! A project is stored as a single JSON document with every image embedded
//! as base64, so a `.json` file is self-contained and survives the source
//! images being moved or deleted.

use crate::error::{ProjectError, Result};
use crate::media::EncodedImage;
use crate::project::{DocumentMeta, DocumentSettings, Project, Step, StepImage};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current project file format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    code: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    steps: Vec<StepRecord>,
    #[serde(default)]
    settings: DocumentSettings,
}

#[derive(Debug, Serialize, Deserialize)]
struct StepRecord {
    name: String,
    description: String,
    image: ImageRecord,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImageRecord {
    file_name: String,
    data: String,
}

fn to_file(project: &Project) -> ProjectFile {
    ProjectFile {
        version: FORMAT_VERSION,
        code: project.meta.code.clone(),
        title: project.meta.title.clone(),
        date: project.meta.date.clone(),
        author: project.meta.author.clone(),
        steps: project
            .steps
            .iter()
            .map(|step| StepRecord {
                name: step.name.clone(),
                description: step.description.clone(),
                image: ImageRecord {
                    file_name: step.image.file_name.clone(),
                    data: BASE64.encode(step.image.image.bytes.as_slice()),
                },
            })
            .collect(),
        settings: project.settings.clone(),
    }
}

fn from_file(file: ProjectFile) -> Result<Project> {
    if file.version != FORMAT_VERSION {
        return Err(ProjectError::UnsupportedVersion(file.version).into());
    }

    let mut steps = Vec::with_capacity(file.steps.len());
    for (index, record) in file.steps.into_iter().enumerate() {
        let bytes = BASE64
            .decode(record.image.data.as_bytes())
            .map_err(|e| ProjectError::BadImagePayload {
                step: index,
                reason: e.to_string(),
            })?;
        let image =
            EncodedImage::from_bytes(bytes).map_err(|e| ProjectError::BadImagePayload {
                step: index,
                reason: e.to_string(),
            })?;
        steps.push(Step {
            image: StepImage {
                file_name: record.image.file_name,
                image,
            },
            name: record.name,
            description: record.description,
        });
    }

    Ok(Project {
        meta: DocumentMeta {
            code: file.code,
            title: file.title,
            date: file.date,
            author: file.author,
        },
        steps,
        settings: file.settings,
        selected: None,
    })
}

/// Serializes the project to pretty-printed JSON.
pub fn to_json(project: &Project) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_file(project))?)
}

/// Writes the project file at `path`, replacing any existing file.
pub fn save_to_path(project: &Project, path: &Path) -> Result<()> {
    let json = to_json(project)?;
    fs::write(path, json).map_err(|e| ProjectError::IoError(e.to_string()))?;
    Ok(())
}

/// Reads and validates a project file.
///
/// # Errors
///
/// - [`ProjectError::IoError`] when the file cannot be read
/// - [`ProjectError::InvalidFormat`] for malformed JSON
/// - [`ProjectError::UnsupportedVersion`] for unknown format versions
/// - [`ProjectError::BadImagePayload`] when an embedded image does not
///   decode, naming the offending step
pub fn load_from_path(path: &Path) -> Result<Project> {
    let json = fs::read_to_string(path).map_err(|e| ProjectError::IoError(e.to_string()))?;
    let file: ProjectFile = serde_json::from_str(&json)?;
    from_file(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::project::test_support::project_with_steps;
    use crate::project::Layout;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn save_load_round_trips_everything() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("manual.json");

        let mut project = project_with_steps(&["insert", "tighten"]);
        project.meta.author = "QA".into();
        project.settings.layout = Layout::ImageTop;
        project.settings.image_width_cm = 6.5;
        project.steps[1].description = "Machine: press\n1. do it".into();

        save_to_path(&project, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded.meta.code, "PRJ-001");
        assert_eq!(loaded.meta.author, "QA");
        assert_eq!(loaded.settings.layout, Layout::ImageTop);
        assert_eq!(loaded.settings.image_width_cm, 6.5);
        assert_eq!(loaded.steps.len(), 2);
        assert_eq!(loaded.steps[0].name, "insert");
        assert_eq!(loaded.steps[1].description, "Machine: press\n1. do it");
        assert_eq!(
            *loaded.steps[0].image.image.bytes,
            *project.steps[0].image.image.bytes
        );
        assert_eq!(loaded.selected, None);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("future.json");
        fs::write(&path, r#"{"version": 99, "steps": []}"#).expect("write");

        match load_from_path(&path) {
            Err(Error::Project(ProjectError::UnsupportedVersion(99))) => {}
            other => panic!("expected unsupported version, got {other:?}"),
        }
    }

    #[test]
    fn missing_version_is_rejected() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("old.json");
        fs::write(&path, r#"{"code": "X", "steps": []}"#).expect("write");

        match load_from_path(&path) {
            Err(Error::Project(ProjectError::UnsupportedVersion(0))) => {}
            other => panic!("expected unsupported version, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_reports_invalid_format() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        match load_from_path(&path) {
            Err(Error::Project(ProjectError::InvalidFormat(_))) => {}
            other => panic!("expected invalid format, got {other:?}"),
        }
    }

    #[test]
    fn bad_base64_names_the_offending_step() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("bad.json");
        let json = r#"{
            "version": 1,
            "code": "X", "title": "T", "date": "", "author": "",
            "steps": [
                { "name": "ok", "description": "",
                  "image": { "file_name": "a.png", "data": "%%%" } }
            ]
        }"#;
        fs::write(&path, json).expect("write");

        match load_from_path(&path) {
            Err(Error::Project(ProjectError::BadImagePayload { step: 0, .. })) => {}
            other => panic!("expected bad image payload, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_image_bytes_abort_the_load() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("notimage.json");
        let payload = BASE64.encode(b"plain text, not an image");
        let json = format!(
            r#"{{
                "version": 1,
                "code": "X", "title": "T", "date": "", "author": "",
                "steps": [
                    {{ "name": "s1", "description": "",
                       "image": {{ "file_name": "a.png", "data": "ignored" }} }},
                    {{ "name": "s2", "description": "",
                       "image": {{ "file_name": "b.png", "data": "{payload}" }} }}
                ]
            }}"#
        );
        // Make the first step valid so the failure index is meaningful
        let valid = BASE64.encode(
            crate::project::test_support::prepared("s1")
                .image
                .bytes
                .as_slice(),
        );
        let json = json.replace("ignored", &valid);
        fs::write(&path, json).expect("write");

        match load_from_path(&path) {
            Err(Error::Project(ProjectError::BadImagePayload { step: 1, .. })) => {}
            other => panic!("expected bad image payload for step 1, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_io_error() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("absent.json");
        match load_from_path(&path) {
            Err(Error::Project(ProjectError::IoError(_))) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("nosettings.json");
        fs::write(
            &path,
            r#"{"version": 1, "code": "X", "title": "T", "steps": []}"#,
        )
        .expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.settings, DocumentSettings::default());
        assert_eq!(loaded.meta.date, "");
    }
}
