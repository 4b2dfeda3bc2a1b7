// SPDX-License-Identifier: MPL-2.0
//! Background preparation of image batches.
//!
//! Dropping a handful of screenshots into a project should not freeze the
//! window, so decoding and budget-fitting run on the blocking pool, one file
//! at a time, in the order the user picked them. Each completed file emits a
//! progress event and the batch ends with a single `Finished` event.

use crate::media::resize::{self, PreparedImage};
use futures_util::stream::Stream;
use futures_util::SinkExt;
use std::path::PathBuf;

/// Events emitted while a batch of images is being prepared.
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// One file finished (successfully or not). `current` is 1-based.
    Progress {
        current: usize,
        total: usize,
        file_name: String,
    },
    /// The whole batch is done.
    Finished(BatchOutcome),
}

/// Final result of a preparation batch. Prepared images appear in the
/// order the paths were given; unusable files are reported by name.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub images: Vec<PreparedImage>,
    pub failed: Vec<String>,
}

fn display_name(path: &PathBuf) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("?")
        .to_string()
}

/// Prepares `paths` sequentially on the blocking pool, streaming progress.
pub fn prepare_batch(paths: Vec<PathBuf>) -> impl Stream<Item = BatchEvent> {
    iced::stream::channel(16, |mut output: iced::futures::channel::mpsc::Sender<BatchEvent>| async move {
        let total = paths.len();
        let mut outcome = BatchOutcome::default();

        for (index, path) in paths.into_iter().enumerate() {
            let name = display_name(&path);
            let worked = tokio::task::spawn_blocking(move || resize::prepare_from_path(&path))
                .await
                .unwrap_or_else(|join_err| {
                    Err(crate::error::Error::Io(join_err.to_string()))
                });

            match worked {
                Ok(prepared) => outcome.images.push(prepared),
                Err(err) => {
                    eprintln!("Skipping {name}: {err}");
                    outcome.failed.push(name.clone());
                }
            }

            let _ = output
                .send(BatchEvent::Progress {
                    current: index + 1,
                    total,
                    file_name: name,
                })
                .await;
        }

        let _ = output.send(BatchEvent::Finished(outcome)).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("write png");
        path
    }

    #[tokio::test]
    async fn batch_preserves_input_order_and_reports_failures() {
        let temp_dir = tempdir().expect("temp dir");
        let first = write_png(temp_dir.path(), "first.png");
        let missing = temp_dir.path().join("missing.png");
        let last = write_png(temp_dir.path(), "last.png");

        let events: Vec<BatchEvent> =
            prepare_batch(vec![first, missing, last]).collect().await;

        assert_eq!(events.len(), 4);
        for (i, event) in events.iter().take(3).enumerate() {
            match event {
                BatchEvent::Progress { current, total, .. } => {
                    assert_eq!(*current, i + 1);
                    assert_eq!(*total, 3);
                }
                other => panic!("expected progress event, got {other:?}"),
            }
        }

        match &events[3] {
            BatchEvent::Finished(outcome) => {
                let names: Vec<&str> =
                    outcome.images.iter().map(|p| p.file_name.as_str()).collect();
                assert_eq!(names, vec!["first.png", "last.png"]);
                assert_eq!(outcome.failed, vec!["missing.png".to_string()]);
            }
            other => panic!("expected finished event, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_batch_finishes_immediately() {
        let events: Vec<BatchEvent> = prepare_batch(Vec::new()).collect().await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            BatchEvent::Finished(outcome) => {
                assert!(outcome.images.is_empty());
                assert!(outcome.failed.is_empty());
            }
            other => panic!("expected finished event, got {other:?}"),
        }
    }
}
