//! Open-document model.
//!
//! This module defines [`FileMetadataRecord`], one per open file tracked by the
//! document set, together with the value types that feed it: the editor's
//! [`FileDescriptor`] snapshot, the immutable [`ProjectNameData`] and the
//! [`PinState`] sum type.
//!
//! Identity is the `full_path` as reported by the editor. Everything else on a
//! record is either fixed at construction (`corrected_path`, `project`) or
//! derived and recomputed by the document set and the view reactions.

use super::color::Brush;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one open file, as enumerated by the editor integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub full_path: String,
    pub project_display_name: String,
    pub project_key: String,
    /// False for documents that are loaded but have no live window.
    pub has_active_window: bool,
}

impl FileDescriptor {
    /// Creates a descriptor for a file with a live window.
    pub fn new(
        full_path: impl Into<String>,
        project_display_name: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            full_path: full_path.into(),
            project_display_name: project_display_name.into(),
            project_key: project_key.into(),
            has_active_window: true,
        }
    }

    /// Marks the descriptor as having no live window.
    #[must_use]
    pub fn without_window(mut self) -> Self {
        self.has_active_window = false;
        self
    }

    #[must_use]
    pub fn project(&self) -> ProjectNameData {
        ProjectNameData::new(self.project_display_name.clone(), self.project_key.clone())
    }
}

/// Display name and stable key of the project containing a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectNameData {
    display_name: String,
    key: String,
}

impl ProjectNameData {
    pub fn new(display_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Whether a record is pinned, and where among the pinned records it sits.
///
/// Only the relative order of ranks is meaningful. The derived `Ord` puts every
/// pinned record ahead of every unpinned one, and unpinned records compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PinState {
    Pinned(u32),
    #[default]
    Unpinned,
}

impl PinState {
    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned(_))
    }

    #[must_use]
    pub const fn rank(self) -> Option<u32> {
        match self {
            Self::Pinned(rank) => Some(rank),
            Self::Unpinned => None,
        }
    }
}

/// Direction of an in-progress drag reorder, for the drop indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderDirection {
    Up,
    Down,
}

/// One tracked open file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadataRecord {
    full_path: String,
    corrected_path: String,
    project: ProjectNameData,
    pub(crate) display_name: String,
    pub(crate) activated_at: DateTime<Utc>,
    pub(crate) is_active: bool,
    pub(crate) usage_rank: f64,
    pub(crate) pin: PinState,
    pub(crate) brush: Brush,
    pub(crate) reorder: Option<ReorderDirection>,
}

impl FileMetadataRecord {
    /// Builds a record with fresh derived state: inactive, unpinned, unranked.
    ///
    /// The record factory is the normal entry point; it resolves casing, the
    /// display name and the brush before calling this.
    pub fn new(
        full_path: impl Into<String>,
        corrected_path: impl Into<String>,
        display_name: impl Into<String>,
        project: ProjectNameData,
        activated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            full_path: full_path.into(),
            corrected_path: corrected_path.into(),
            project,
            display_name: display_name.into(),
            activated_at,
            is_active: false,
            usage_rank: 0.0,
            pin: PinState::Unpinned,
            brush: Brush::Transparent,
            reorder: None,
        }
    }

    #[must_use]
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    #[must_use]
    pub fn corrected_path(&self) -> &str {
        &self.corrected_path
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub const fn activated_at(&self) -> DateTime<Utc> {
        self.activated_at
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Normalized recency in `[0, 1]`, 1.0 being the most recently activated.
    #[must_use]
    pub const fn usage_rank(&self) -> f64 {
        self.usage_rank
    }

    #[must_use]
    pub const fn pin(&self) -> PinState {
        self.pin
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }

    #[must_use]
    pub const fn project(&self) -> &ProjectNameData {
        &self.project
    }

    #[must_use]
    pub const fn brush(&self) -> Brush {
        self.brush
    }

    #[must_use]
    pub const fn is_reordering(&self) -> bool {
        self.reorder.is_some()
    }

    #[must_use]
    pub const fn reorder_direction(&self) -> Option<ReorderDirection> {
        self.reorder
    }

    /// True if `path` names this record, either as reported or as case-corrected.
    #[must_use]
    pub fn matches_path(&self, path: &str) -> bool {
        self.full_path == path || self.corrected_path == path
    }

    pub(crate) fn set_project(&mut self, project: ProjectNameData) {
        self.project = project;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pinned_sorts_before_unpinned() {
        let mut states = vec![
            PinState::Unpinned,
            PinState::Pinned(7),
            PinState::Unpinned,
            PinState::Pinned(2),
        ];
        states.sort();
        assert_eq!(
            states,
            vec![
                PinState::Pinned(2),
                PinState::Pinned(7),
                PinState::Unpinned,
                PinState::Unpinned
            ]
        );
    }

    #[test]
    fn record_matches_reported_and_corrected_path() {
        let at = Utc.timestamp_opt(100, 0).unwrap();
        let record = FileMetadataRecord::new(
            "c:\\src\\app\\main.rs",
            "C:\\src\\App\\main.rs",
            "main.rs",
            ProjectNameData::new("App", "app-guid"),
            at,
        );

        assert!(record.matches_path("c:\\src\\app\\main.rs"));
        assert!(record.matches_path("C:\\src\\App\\main.rs"));
        assert!(!record.matches_path("C:\\SRC\\APP\\MAIN.RS"));
        assert!(!record.is_pinned());
        assert!(!record.is_active());
    }

    #[test]
    fn descriptor_without_window_is_flagged() {
        let descriptor = FileDescriptor::new("/a.rs", "Core", "core").without_window();
        assert!(!descriptor.has_active_window);
        assert_eq!(descriptor.project().key(), "core");
    }
}
