// SPDX-License-Identifier: MPL-2.0
//! On-demand backup export.
//!
//! A backup is a plain directory the user can inspect without the
//! application: every step image written out as a file, plus a small JSON
//! manifest with the document metadata and step texts (no embedded image
//! data).

use crate::error::Result;
use crate::project::Project;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a timestamped backup directory under `parent`.
///
/// Returns the created directory path.
pub fn write_backup(project: &Project, parent: &Path) -> Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let dir = parent.join(format!("backup_{stamp}"));
    fs::create_dir_all(&dir)?;

    let mut manifest_steps = Vec::with_capacity(project.steps.len());
    for (index, step) in project.steps.iter().enumerate() {
        let image_file = format!("step_{}_{}", index + 1, step.image.file_name);
        fs::write(dir.join(&image_file), step.image.image.bytes.as_slice())?;
        manifest_steps.push(serde_json::json!({
            "name": step.name,
            "description": step.description,
            "image_file": image_file,
        }));
    }

    let manifest = serde_json::json!({
        "code": project.meta.code,
        "title": project.meta.title,
        "date": project.meta.date,
        "author": project.meta.author,
        "steps": manifest_steps,
        "created_at": Local::now().to_rfc3339(),
    });

    fs::write(
        dir.join("project.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::test_support::project_with_steps;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn backup_writes_images_and_manifest() {
        let temp_dir = tempdir().expect("temp dir");
        let project = project_with_steps(&["align", "fasten"]);

        let dir = write_backup(&project, temp_dir.path()).expect("backup");

        assert!(dir
            .file_name()
            .and_then(|s| s.to_str())
            .expect("dir name")
            .starts_with("backup_"));
        assert!(dir.join("step_1_align.png").exists());
        assert!(dir.join("step_2_fasten.png").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("project.json")).expect("read"))
                .expect("parse");
        assert_eq!(manifest["code"], "PRJ-001");
        assert_eq!(manifest["steps"][0]["name"], "align");
        assert_eq!(manifest["steps"][1]["image_file"], "step_2_fasten.png");
        assert!(manifest["created_at"].as_str().is_some());
        assert!(manifest["steps"][0].get("data").is_none());
    }

    #[test]
    fn backup_image_bytes_match_the_project() {
        let temp_dir = tempdir().expect("temp dir");
        let project = project_with_steps(&["only"]);

        let dir = write_backup(&project, temp_dir.path()).expect("backup");
        let written = fs::read(dir.join("step_1_only.png")).expect("read image");
        assert_eq!(written, *project.steps[0].image.image.bytes);
    }

    #[test]
    fn backup_of_empty_project_still_writes_manifest() {
        let temp_dir = tempdir().expect("temp dir");
        let project = Project::default();

        let dir = write_backup(&project, temp_dir.path()).expect("backup");
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("project.json")).expect("read"))
                .expect("parse");
        assert_eq!(manifest["steps"].as_array().map(Vec::len), Some(0));
    }
}
