//! The bindable document view.
//!
//! [`DocumentView`] is the projection the presentation layer renders: the
//! tracked records filtered by a fuzzy query, ordered by the active sort
//! descriptors and optionally grouped by project. The view holds only
//! projection state (descriptors, grouping, filter, the projected rows); the
//! records themselves stay owned by the document set and are passed in on
//! every [`refresh`](DocumentView::refresh).
//!
//! # Ordering
//!
//! Rows are ordered by, in priority:
//!
//! 1. the project descriptor, when grouping by project
//! 2. the order in which projects first appear in the collection, when grouping
//! 3. every other descriptor, in the order they were added
//! 4. the canonical collection order (the sort is stable)

use crate::domain::{
    Brush, FileMetadataRecord, PinState, ProjectNameData, ReorderDirection, SortDescriptor,
    SortDirection, SortKey,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::cmp::Ordering;
use std::collections::HashMap;

/// How rows are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupDescriptor {
    Project,
}

/// Display-ready copy of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub full_path: String,
    pub display_name: String,
    pub project: ProjectNameData,
    pub is_active: bool,
    pub pin: PinState,
    pub usage_rank: f64,
    pub brush: Brush,
    pub reorder: Option<ReorderDirection>,
}

impl From<&FileMetadataRecord> for ViewRow {
    fn from(record: &FileMetadataRecord) -> Self {
        Self {
            full_path: record.full_path().to_string(),
            display_name: record.display_name().to_string(),
            project: record.project().clone(),
            is_active: record.is_active(),
            pin: record.pin(),
            usage_rank: record.usage_rank(),
            brush: record.brush(),
            reorder: record.reorder_direction(),
        }
    }
}

/// A run of rows sharing a project, or every row when not grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGroup {
    /// `None` for the single anonymous group of an ungrouped view.
    pub project: Option<ProjectNameData>,
    pub rows: Vec<ViewRow>,
}

/// Ordered, filtered, grouped projection of the tracked records.
#[derive(Debug, Clone, Default)]
pub struct DocumentView {
    sort_descriptors: Vec<SortDescriptor>,
    group_descriptors: Vec<GroupDescriptor>,
    filter: String,
    groups: Vec<ViewGroup>,
    refresh_count: u64,
}

impl DocumentView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort_descriptors(&self) -> &[SortDescriptor] {
        &self.sort_descriptors
    }

    pub fn clear_sort_descriptors(&mut self) {
        self.sort_descriptors.clear();
    }

    pub fn push_sort_descriptor(&mut self, descriptor: SortDescriptor) {
        self.sort_descriptors.push(descriptor);
    }

    #[must_use]
    pub fn group_descriptors(&self) -> &[GroupDescriptor] {
        &self.group_descriptors
    }

    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.group_descriptors.contains(&GroupDescriptor::Project)
    }

    /// Adds or removes the project group descriptor.
    pub fn set_grouped(&mut self, grouped: bool) {
        self.group_descriptors.clear();
        if grouped {
            self.group_descriptors.push(GroupDescriptor::Project);
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    #[must_use]
    pub fn groups(&self) -> &[ViewGroup] {
        &self.groups
    }

    /// Every visible row, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ViewRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display position of the row for `full_path`, if visible.
    #[must_use]
    pub fn position_of(&self, full_path: &str) -> Option<usize> {
        self.rows().position(|row| row.full_path == full_path)
    }

    /// Number of times the projection has been rebuilt.
    #[must_use]
    pub const fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    /// Rebuilds the projection from `records`.
    pub fn refresh(&mut self, records: &[FileMetadataRecord]) {
        let _span = tracing::debug_span!(
            "refresh_view",
            total_records = records.len(),
            query_len = self.filter.len(),
            grouped = self.is_grouped()
        )
        .entered();

        let mut visible: Vec<&FileMetadataRecord> = self.apply_filter(records);

        let grouped = self.is_grouped();
        let group_order = first_appearance(records);
        visible.sort_by(|a, b| self.compare(a, b, grouped, &group_order));

        self.groups = if grouped {
            let mut groups: Vec<ViewGroup> = Vec::new();
            for record in visible {
                let continues_group = groups
                    .last()
                    .and_then(|g| g.project.as_ref())
                    .is_some_and(|p| p.key() == record.project().key());

                if let (true, Some(group)) = (continues_group, groups.last_mut()) {
                    group.rows.push(ViewRow::from(record));
                    continue;
                }
                groups.push(ViewGroup {
                    project: Some(record.project().clone()),
                    rows: vec![ViewRow::from(record)],
                });
            }
            groups
        } else {
            vec![ViewGroup {
                project: None,
                rows: visible.into_iter().map(ViewRow::from).collect(),
            }]
        };

        self.refresh_count += 1;
        tracing::debug!(visible = self.len(), groups = self.groups.len(), "view refreshed");
    }

    /// Keeps records whose display name fuzzy-matches every query token.
    fn apply_filter<'r>(&self, records: &'r [FileMetadataRecord]) -> Vec<&'r FileMetadataRecord> {
        use fuzzy_matcher::FuzzyMatcher;

        let tokens: Vec<String> = self
            .filter
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            return records.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        records
            .iter()
            .filter(|record| {
                let name_lower = record.display_name().to_lowercase();
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&name_lower, token).is_some())
            })
            .collect()
    }

    fn compare(
        &self,
        a: &FileMetadataRecord,
        b: &FileMetadataRecord,
        grouped: bool,
        group_order: &HashMap<&str, usize>,
    ) -> Ordering {
        let mut ordering = Ordering::Equal;

        if grouped {
            for descriptor in self.sort_descriptors.iter().filter(|d| d.key == SortKey::ProjectName) {
                ordering = ordering.then_with(|| compare_by(descriptor, a, b));
            }
            ordering = ordering.then_with(|| {
                let ga = group_order.get(a.project().key()).copied().unwrap_or(usize::MAX);
                let gb = group_order.get(b.project().key()).copied().unwrap_or(usize::MAX);
                ga.cmp(&gb)
            });
        }

        for descriptor in &self.sort_descriptors {
            if grouped && descriptor.key == SortKey::ProjectName {
                continue;
            }
            ordering = ordering.then_with(|| compare_by(descriptor, a, b));
        }

        ordering
    }
}

fn first_appearance(records: &[FileMetadataRecord]) -> HashMap<&str, usize> {
    let mut order = HashMap::new();
    for record in records {
        let next = order.len();
        order.entry(record.project().key()).or_insert(next);
    }
    order
}

fn compare_by(descriptor: &SortDescriptor, a: &FileMetadataRecord, b: &FileMetadataRecord) -> Ordering {
    let ordering = match descriptor.key {
        SortKey::DisplayName => compare_text(a.display_name(), b.display_name()),
        SortKey::ActivatedAt => a.activated_at().cmp(&b.activated_at()),
        SortKey::ProjectName => {
            compare_text(a.project().display_name(), b.project().display_name())
        }
        SortKey::PinOrder => a.pin().cmp(&b.pin()),
    };

    match descriptor.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Case-insensitive first, ordinal as the tie-break.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
