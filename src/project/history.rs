// SPDX-License-Identifier: MPL-2.0
//! Snapshot history bookkeeping (undo/redo).
//!
//! Every completed edit records a full copy of the project. Image payloads
//! are `Arc`-shared, so a snapshot costs a handful of string clones rather
//! than a re-encode of every image.

use crate::project::Project;

/// Maximum number of snapshots kept. Older entries are dropped first.
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded list of full project copies with a cursor for linear undo/redo.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: Vec<Project>,
    /// Index of the snapshot matching the current project state.
    cursor: usize,
}

impl SnapshotHistory {
    /// Starts a fresh history whose sole entry is the given state.
    pub fn new(initial: Project) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Discards everything and restarts from the given state. Used after
    /// loading a project file.
    pub fn reset(&mut self, state: Project) {
        self.snapshots.clear();
        self.snapshots.push(state);
        self.cursor = 0;
    }

    /// Whether an undo operation is currently possible.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo operation is currently possible.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Records a new snapshot after an edit.
    ///
    /// Any redo tail past the cursor is discarded. When the capacity is
    /// exceeded the oldest snapshot is dropped.
    pub fn record(&mut self, state: Project) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state);
        if self.snapshots.len() > HISTORY_CAPACITY {
            self.snapshots.remove(0);
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps the cursor back and returns the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Project> {
        if self.can_undo() {
            self.cursor -= 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    /// Steps the cursor forward and returns the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Project> {
        if self.can_redo() {
            self.cursor += 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_code(code: &str) -> Project {
        let mut project = Project::default();
        project.meta.code = code.to_string();
        project
    }

    #[test]
    fn undo_redo_restore_prior_field_values() {
        let mut history = SnapshotHistory::new(project_with_code("A"));
        history.record(project_with_code("B"));
        history.record(project_with_code("C"));

        assert_eq!(history.undo().expect("undo").meta.code, "B");
        assert_eq!(history.undo().expect("undo").meta.code, "A");
        assert!(history.undo().is_none());

        assert_eq!(history.redo().expect("redo").meta.code, "B");
        assert_eq!(history.redo().expect("redo").meta.code, "C");
        assert!(history.redo().is_none());
    }

    #[test]
    fn recording_after_undo_discards_redo_tail() {
        let mut history = SnapshotHistory::new(project_with_code("A"));
        history.record(project_with_code("B"));
        history.record(project_with_code("C"));

        history.undo();
        assert!(history.can_redo());

        history.record(project_with_code("D"));
        assert!(!history.can_redo());
        assert_eq!(history.undo().expect("undo").meta.code, "B");
    }

    #[test]
    fn capacity_drops_oldest_snapshot() {
        let mut history = SnapshotHistory::new(project_with_code("0"));
        for i in 1..=30 {
            history.record(project_with_code(&i.to_string()));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);

        // Walk all the way back; the oldest surviving snapshot is not "0"
        let mut last_code = String::new();
        while history.can_undo() {
            last_code = history.undo().expect("undo").meta.code.clone();
        }
        assert_eq!(last_code, "11");
    }

    #[test]
    fn reset_clears_both_directions() {
        let mut history = SnapshotHistory::new(project_with_code("A"));
        history.record(project_with_code("B"));
        history.undo();

        history.reset(project_with_code("fresh"));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn cursor_stays_consistent_at_capacity_boundary() {
        let mut history = SnapshotHistory::new(project_with_code("seed"));
        for i in 0..HISTORY_CAPACITY + 5 {
            history.record(project_with_code(&format!("s{i}")));
        }

        // After overflowing, undo must still walk a contiguous chain
        assert!(history.can_undo());
        assert!(!history.can_redo());
        let first_back = history.undo().expect("undo").meta.code.clone();
        assert_eq!(first_back, format!("s{}", HISTORY_CAPACITY + 3));
    }
}
