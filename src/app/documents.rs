//! The canonical set of tracked documents.
//!
//! [`DocumentSetManager`] owns the ordered collection of
//! [`FileMetadataRecord`]s and is the only code that mutates it. Editor events
//! (open, close, activate, rename, pin) arrive here, as do the derived-field
//! recomputations the view reactions request.
//!
//! # Failure Semantics
//!
//! The editor reports events racily relative to this collection: a rename can
//! name a file already closed, an activation can arrive for a window never
//! reported as open. Such inconsistencies are absorbed as no-ops and logged at
//! debug level; none of the mutation methods return errors.
//!
//! # Reconciliation
//!
//! [`synchronize`](DocumentSetManager::synchronize) diffs the collection against
//! an enumerated snapshot of open files. If enumeration fails part-way, the
//! pass is treated as having yielded no files, which empties the collection.

use super::factory::{brush_for, RecordFactory};
use crate::domain::{
    usage, DocketError, FileDescriptor, FileMetadataRecord, PinState, Preferences,
    ProjectNameData, ReorderDirection,
};
use crate::infrastructure::Services;
use crate::ui::ProjectColorAssigner;
use std::collections::HashSet;

/// What a synchronization pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub added: usize,
    pub removed: usize,
    /// Retained records whose project data was re-read (forced passes only).
    pub refreshed: usize,
}

impl SyncOutcome {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.added > 0 || self.removed > 0 || self.refreshed > 0
    }
}

/// Owner and sole mutator of the tracked documents.
#[derive(Debug)]
pub struct DocumentSetManager {
    records: Vec<FileMetadataRecord>,
    services: Services,
    colors: ProjectColorAssigner,
}

impl DocumentSetManager {
    #[must_use]
    pub fn new(services: Services, colors: ProjectColorAssigner) -> Self {
        Self {
            records: Vec::new(),
            services,
            colors,
        }
    }

    /// The tracked records, in canonical (insertion) order.
    #[must_use]
    pub fn records(&self) -> &[FileMetadataRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks a record up by reported or case-corrected path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileMetadataRecord> {
        self.index_of(path).map(|i| &self.records[i])
    }

    /// The active record, if any.
    #[must_use]
    pub fn active(&self) -> Option<&FileMetadataRecord> {
        self.records.iter().find(|r| r.is_active())
    }

    #[must_use]
    pub const fn colors(&self) -> &ProjectColorAssigner {
        &self.colors
    }

    /// An exact `full_path` match wins over a case-corrected one.
    fn index_of(&self, path: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.full_path() == path)
            .or_else(|| self.records.iter().position(|r| r.matches_path(path)))
    }

    fn contains_key(&self, full_path: &str) -> bool {
        self.records.iter().any(|r| r.full_path() == full_path)
    }

    /// Reconciles the collection against an enumeration of open files.
    ///
    /// Only descriptors with a live window count as open. Files not yet
    /// tracked are added with the current time as activation timestamp;
    /// tracked files missing from the snapshot are removed. Without
    /// `force_full_rebuild` an unchanged key set returns immediately; a forced
    /// pass always runs and also re-reads the project data of retained records.
    ///
    /// An `Err` item aborts enumeration and the pass proceeds as if no files
    /// were open.
    pub fn synchronize<I>(
        &mut self,
        open_files: I,
        force_full_rebuild: bool,
        preferences: &Preferences,
    ) -> SyncOutcome
    where
        I: IntoIterator<Item = Result<FileDescriptor, DocketError>>,
    {
        let _span = tracing::debug_span!(
            "synchronize",
            tracked = self.records.len(),
            force = force_full_rebuild
        )
        .entered();

        let snapshot = match collect_open(open_files) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // TODO: confirm with product whether a failed enumeration should keep the set instead of emptying it.
                tracing::warn!(error = %e, "open file enumeration failed, treating pass as empty");
                Vec::new()
            }
        };

        let keys: HashSet<&str> = snapshot.iter().map(|d| d.full_path.as_str()).collect();

        if !force_full_rebuild
            && keys.len() == self.records.len()
            && self.records.iter().all(|r| keys.contains(r.full_path()))
        {
            tracing::trace!("open files unchanged, skipping reconciliation");
            return SyncOutcome::default();
        }

        let mut outcome = SyncOutcome::default();

        let before = self.records.len();
        self.records.retain(|r| keys.contains(r.full_path()));
        outcome.removed = before - self.records.len();

        if force_full_rebuild {
            for descriptor in &snapshot {
                let project = descriptor.project();
                if let Some(record) = self
                    .records
                    .iter_mut()
                    .find(|r| r.full_path() == descriptor.full_path && *r.project() != project)
                {
                    record.set_project(project);
                    record.brush = brush_for(&mut self.colors, descriptor.project_key.as_str(), preferences);
                    outcome.refreshed += 1;
                }
            }
        }

        for descriptor in &snapshot {
            if self.contains_key(&descriptor.full_path) {
                continue;
            }
            let record =
                RecordFactory::new(&self.services, &mut self.colors).create(descriptor, preferences, None);
            self.records.push(record);
            outcome.added += 1;
        }

        if outcome.changed() {
            self.recompute_usage_ranks();
        }

        tracing::debug!(
            added = outcome.added,
            removed = outcome.removed,
            refreshed = outcome.refreshed,
            tracked = self.records.len(),
            "documents synchronized"
        );
        outcome
    }

    /// Starts tracking one file and reranks usage. Returns false if it is
    /// already tracked.
    pub fn add(&mut self, descriptor: &FileDescriptor, preferences: &Preferences) -> bool {
        if self.contains_key(&descriptor.full_path) {
            tracing::debug!(full_path = %descriptor.full_path, "document already tracked");
            return false;
        }

        let record =
            RecordFactory::new(&self.services, &mut self.colors).create(descriptor, preferences, None);
        self.records.push(record);
        self.recompute_usage_ranks();
        tracing::debug!(full_path = %descriptor.full_path, tracked = self.records.len(), "document added");
        true
    }

    /// Stops tracking one file and reranks usage. Returns false if it was not
    /// tracked.
    pub fn remove(&mut self, full_path: &str) -> bool {
        let Some(index) = self.index_of(full_path) else {
            tracing::debug!(full_path = %full_path, "close for untracked document ignored");
            return false;
        };

        self.records.remove(index);
        self.recompute_usage_ranks();
        tracing::debug!(full_path = %full_path, tracked = self.records.len(), "document removed");
        true
    }

    /// Makes `full_path` the single active record and stamps it with now.
    ///
    /// Usage ranks are recomputed on success. Returns false, leaving every
    /// record untouched, if no record matches.
    pub fn activate(&mut self, full_path: &str) -> bool {
        let Some(index) = self.index_of(full_path) else {
            tracing::debug!(full_path = %full_path, "activation for untracked document ignored");
            return false;
        };

        let now = self.services.clock.now_utc();
        for (i, record) in self.records.iter_mut().enumerate() {
            record.is_active = i == index;
        }
        self.records[index].activated_at = now;

        self.recompute_usage_ranks();
        tracing::debug!(full_path = %full_path, "document activated");
        true
    }

    /// Replaces the record for `old_path` with one for `new_path`.
    ///
    /// The replacement keeps the old record's position, activation time,
    /// active flag, pin state and usage rank; casing and display name are
    /// resolved afresh for the new path. Returns false if `old_path` is not
    /// tracked. If `new_path` is already tracked by another record, the old
    /// record is dropped instead so paths stay unique.
    pub fn update_full_name(&mut self, new_path: &str, old_path: &str, preferences: &Preferences) -> bool {
        let Some(index) = self.index_of(old_path) else {
            tracing::debug!(old_path = %old_path, new_path = %new_path, "rename for untracked document ignored");
            return false;
        };

        if self.records[index].full_path() != new_path && self.contains_key(new_path) {
            tracing::debug!(old_path = %old_path, new_path = %new_path, "rename target already tracked, dropping old record");
            self.records.remove(index);
            self.recompute_usage_ranks();
            return true;
        }

        let old = &self.records[index];
        let descriptor = FileDescriptor::new(
            new_path,
            old.project().display_name(),
            old.project().key(),
        );
        let activated_at = old.activated_at();
        let (is_active, pin, usage_rank) = (old.is_active(), old.pin(), old.usage_rank());

        let mut renamed = RecordFactory::new(&self.services, &mut self.colors).create(
            &descriptor,
            preferences,
            Some(activated_at),
        );
        renamed.is_active = is_active;
        renamed.pin = pin;
        renamed.usage_rank = usage_rank;

        self.records[index] = renamed;
        tracing::debug!(old_path = %old_path, new_path = %new_path, "document renamed");
        true
    }

    /// Pins an unpinned record after every pinned one, or unpins a pinned one.
    ///
    /// Pinning renumbers the existing pins to `0..n` first, so the new pin
    /// always takes rank `n`.
    ///
    /// Returns the new pin state, or `None` if the path is not tracked.
    pub fn toggle_pinned_status(&mut self, full_path: &str) -> Option<PinState> {
        let Some(index) = self.index_of(full_path) else {
            tracing::debug!(full_path = %full_path, "pin toggle for untracked document ignored");
            return None;
        };

        let next = match self.records[index].pin() {
            PinState::Pinned(_) => PinState::Unpinned,
            PinState::Unpinned => PinState::Pinned(self.renumber_pins()),
        };

        self.records[index].pin = next;
        tracing::debug!(full_path = %full_path, pin = ?next, "pin toggled");
        Some(next)
    }

    /// Moves pinned record `source` to the pin position of pinned `target`.
    ///
    /// Pin ranks are renumbered `0..n` in the new order. Returns false unless
    /// both records are tracked, pinned and distinct.
    pub fn move_pinned(&mut self, source: &str, target: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(target)) else {
            tracing::debug!(source = %source, target = %target, "pin move for untracked document ignored");
            return false;
        };
        if from == to || !self.records[from].is_pinned() || !self.records[to].is_pinned() {
            return false;
        }

        let mut order = self.pin_order();
        let Some(from_pos) = order.iter().position(|&i| i == from) else {
            return false;
        };
        let Some(to_pos) = order.iter().position(|&i| i == to) else {
            return false;
        };
        let moved = order.remove(from_pos);
        order.insert(to_pos, moved);

        self.assign_pin_ranks(&order);

        tracing::debug!(source = %source, target = %target, "pinned document moved");
        true
    }

    /// Indices of the pinned records, in pin order.
    fn pin_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len())
            .filter(|&i| self.records[i].is_pinned())
            .collect();
        order.sort_by_key(|&i| self.records[i].pin());
        order
    }

    /// Renumbers `order` to pin ranks `0..n` and returns `n`.
    fn assign_pin_ranks(&mut self, order: &[usize]) -> u32 {
        let mut next = 0u32;
        for &i in order {
            self.records[i].pin = PinState::Pinned(next);
            next += 1;
        }
        next
    }

    /// Compacts the existing pin ranks and returns the next free one.
    fn renumber_pins(&mut self) -> u32 {
        let order = self.pin_order();
        self.assign_pin_ranks(&order)
    }

    /// Marks `full_path` as being dragged in `direction`, clearing any other drag.
    pub fn begin_reorder(&mut self, full_path: &str, direction: ReorderDirection) -> bool {
        let Some(index) = self.index_of(full_path) else {
            return false;
        };
        for (i, record) in self.records.iter_mut().enumerate() {
            record.reorder = (i == index).then_some(direction);
        }
        true
    }

    /// Clears drag state from every record.
    pub fn end_reorder(&mut self) {
        for record in &mut self.records {
            record.reorder = None;
        }
    }

    /// Moves every record of project `old_key` to `project`, keeping its colour.
    ///
    /// Returns the number of records updated.
    pub fn rename_project(&mut self, old_key: &str, project: &ProjectNameData) -> usize {
        self.colors.rekey(old_key, project.key());

        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.project().key() == old_key) {
            record.set_project(project.clone());
            updated += 1;
        }

        tracing::debug!(old_key = %old_key, new_key = %project.key(), updated, "project renamed");
        updated
    }

    /// Drops every record and colour assignment, as when the workspace closes.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.records.len(), "workspace closed, clearing documents");
        self.records.clear();
        self.colors.clear();
    }

    /// Recomputes every record's usage rank from the current timestamps.
    pub fn recompute_usage_ranks(&mut self) {
        let timestamps: Vec<_> = self.records.iter().map(FileMetadataRecord::activated_at).collect();
        let ranks = usage::normalize(&timestamps);
        for (record, rank) in self.records.iter_mut().zip(ranks) {
            record.usage_rank = rank;
        }
    }

    /// Recomputes every display name for `segment_count` trailing segments.
    pub fn reapply_display_names(&mut self, segment_count: u32) {
        for record in &mut self.records {
            record.display_name = self.services.reducer.reduce(record.corrected_path(), segment_count);
        }
    }

    /// Recomputes every record's brush under `preferences`.
    pub fn recolor(&mut self, preferences: &Preferences) {
        for record in &mut self.records {
            let key = record.project().key().to_string();
            record.brush = brush_for(&mut self.colors, &key, preferences);
        }
    }
}

/// Collects live-window descriptors, first occurrence of a path wins.
fn collect_open<I>(open_files: I) -> Result<Vec<FileDescriptor>, DocketError>
where
    I: IntoIterator<Item = Result<FileDescriptor, DocketError>>,
{
    let mut seen = HashSet::new();
    let mut open = Vec::new();
    for item in open_files {
        let descriptor = item?;
        if descriptor.has_active_window && seen.insert(descriptor.full_path.clone()) {
            open.push(descriptor);
        }
    }
    Ok(open)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Brush;
    use crate::infrastructure::ManualClock;
    use chrono::{Duration, TimeZone, Utc};

    fn manager() -> (DocumentSetManager, ManualClock) {
        let clock = ManualClock::new(Utc.timestamp_opt(1_000, 0).unwrap());
        let manager = DocumentSetManager::new(
            Services::with_clock(clock.clone()),
            ProjectColorAssigner::default(),
        );
        (manager, clock)
    }

    fn open(path: &str) -> Result<FileDescriptor, DocketError> {
        Ok(FileDescriptor::new(path, "Core", "core"))
    }

    fn paths(manager: &DocumentSetManager) -> Vec<&str> {
        manager.records().iter().map(FileMetadataRecord::full_path).collect()
    }

    #[test]
    fn synchronize_adds_and_removes_to_match_snapshot() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();

        docs.synchronize(vec![open("/a"), open("/b")], false, &prefs);
        let outcome = docs.synchronize(vec![open("/b"), open("/c")], false, &prefs);

        assert_eq!(outcome, SyncOutcome { added: 1, removed: 1, refreshed: 0 });
        assert_eq!(paths(&docs), vec!["/b", "/c"]);
    }

    #[test]
    fn synchronize_ignores_windowless_and_duplicate_descriptors() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();

        docs.synchronize(
            vec![
                open("/a"),
                Ok(FileDescriptor::new("/hidden", "Core", "core").without_window()),
                open("/a"),
            ],
            false,
            &prefs,
        );

        assert_eq!(paths(&docs), vec!["/a"]);
    }

    #[test]
    fn failed_enumeration_empties_the_set() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.synchronize(vec![open("/a"), open("/b")], false, &prefs);

        let outcome = docs.synchronize(
            vec![open("/a"), Err(DocketError::Enumeration("window list changed".into()))],
            false,
            &prefs,
        );

        assert_eq!(outcome.removed, 2);
        assert!(docs.is_empty());
    }

    #[test]
    fn forced_pass_refreshes_project_data() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.synchronize(vec![open("/a")], false, &prefs);

        let moved = FileDescriptor::new("/a", "Tools", "tools");
        assert_eq!(
            docs.synchronize(vec![Ok(moved.clone())], false, &prefs),
            SyncOutcome::default()
        );

        let outcome = docs.synchronize(vec![Ok(moved)], true, &prefs);
        assert_eq!(outcome.refreshed, 1);
        assert_eq!(docs.records()[0].project().key(), "tools");
    }

    #[test]
    fn add_never_duplicates() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        let descriptor = FileDescriptor::new("/a", "Core", "core");

        assert!(docs.add(&descriptor, &prefs));
        assert!(!docs.add(&descriptor, &prefs));
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn activate_sets_single_active_and_ranks() {
        let (mut docs, clock) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        clock.advance(Duration::seconds(1));
        docs.add(&FileDescriptor::new("/b", "Core", "core"), &prefs);

        clock.advance(Duration::seconds(1));
        assert!(docs.activate("/b"));
        clock.advance(Duration::seconds(1));
        assert!(docs.activate("/a"));

        let active: Vec<_> = docs.records().iter().filter(|r| r.is_active()).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].full_path(), "/a");
        assert_eq!(docs.get("/a").unwrap().usage_rank(), 1.0);
        assert_eq!(docs.get("/b").unwrap().usage_rank(), 0.0);
    }

    #[test]
    fn activate_unknown_path_changes_nothing() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        docs.activate("/a");
        let before = docs.records().to_vec();

        assert!(!docs.activate("/missing"));
        assert_eq!(docs.records(), before.as_slice());
    }

    #[test]
    fn rename_preserves_history_and_position() {
        let (mut docs, clock) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/src/old.rs", "Core", "core"), &prefs);
        docs.add(&FileDescriptor::new("/src/other.rs", "Core", "core"), &prefs);
        docs.activate("/src/old.rs");
        docs.toggle_pinned_status("/src/old.rs");
        let activated_at = docs.get("/src/old.rs").unwrap().activated_at();

        clock.advance(Duration::minutes(5));
        assert!(docs.update_full_name("/src/new.rs", "/src/old.rs", &prefs));

        let renamed = &docs.records()[0];
        assert_eq!(renamed.full_path(), "/src/new.rs");
        assert_eq!(renamed.display_name(), "new.rs");
        assert_eq!(renamed.activated_at(), activated_at);
        assert!(renamed.is_pinned());
        assert!(renamed.is_active());
        assert!(docs.get("/src/old.rs").is_none());
    }

    #[test]
    fn rename_of_unknown_path_is_ignored() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);

        assert!(!docs.update_full_name("/b", "/missing", &prefs));
        assert_eq!(paths(&docs), vec!["/a"]);
    }

    #[test]
    fn rename_onto_tracked_path_keeps_paths_unique() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        docs.add(&FileDescriptor::new("/b", "Core", "core"), &prefs);

        assert!(docs.update_full_name("/b", "/a", &prefs));
        assert_eq!(paths(&docs), vec!["/b"]);
    }

    #[test]
    fn pinning_appends_after_existing_pins() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        for path in ["/a", "/b", "/c"] {
            docs.add(&FileDescriptor::new(path, "Core", "core"), &prefs);
        }

        let b = docs.toggle_pinned_status("/b").unwrap();
        let a = docs.toggle_pinned_status("/a").unwrap();
        assert!(b < a);

        assert_eq!(docs.toggle_pinned_status("/b"), Some(PinState::Unpinned));
        let c = docs.toggle_pinned_status("/c").unwrap();
        assert!(docs.get("/a").unwrap().pin() < c);
        assert_eq!(docs.toggle_pinned_status("/missing"), None);
    }

    #[test]
    fn pinning_after_maximum_rank_keeps_order_strict() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        for path in ["/a", "/b", "/c"] {
            docs.add(&FileDescriptor::new(path, "Core", "core"), &prefs);
        }
        docs.records[0].pin = PinState::Pinned(7);
        docs.records[1].pin = PinState::Pinned(u32::MAX);

        assert_eq!(docs.toggle_pinned_status("/c"), Some(PinState::Pinned(2)));
        assert_eq!(docs.get("/a").unwrap().pin(), PinState::Pinned(0));
        assert_eq!(docs.get("/b").unwrap().pin(), PinState::Pinned(1));
    }

    #[test]
    fn membership_changes_rerank_usage() {
        let (mut docs, clock) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        docs.add(&FileDescriptor::new("/b", "Core", "core"), &prefs);
        clock.set(Utc.timestamp_opt(1, 0).unwrap());
        docs.activate("/a");
        clock.set(Utc.timestamp_opt(2, 0).unwrap());
        docs.activate("/b");

        assert!(docs.remove("/b"));
        assert_eq!(docs.get("/a").unwrap().usage_rank(), 1.0);

        clock.set(Utc.timestamp_opt(10, 0).unwrap());
        docs.add(&FileDescriptor::new("/c", "Core", "core"), &prefs);
        assert_eq!(docs.get("/a").unwrap().usage_rank(), 0.0);
        assert_eq!(docs.get("/c").unwrap().usage_rank(), 1.0);

        clock.set(Utc.timestamp_opt(20, 0).unwrap());
        docs.synchronize(vec![open("/a"), open("/c"), open("/d")], false, &prefs);
        assert_eq!(docs.get("/d").unwrap().usage_rank(), 1.0);
        assert_eq!(docs.get("/c").unwrap().usage_rank(), 0.5);
        assert_eq!(docs.get("/a").unwrap().usage_rank(), 0.0);
    }

    struct Lowercase;

    impl crate::infrastructure::PathCorrectionService for Lowercase {
        fn restore_casing(&self, path: &str) -> String {
            path.to_lowercase()
        }
    }

    #[test]
    fn exact_path_wins_over_corrected_match() {
        let (_, clock) = manager();
        let services = Services {
            casing: Box::new(Lowercase),
            reducer: Box::new(crate::infrastructure::SegmentReducer),
            clock: Box::new(clock),
        };
        let mut docs = DocumentSetManager::new(services, ProjectColorAssigner::default());
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/Src/A.rs", "Core", "core"), &prefs);
        docs.add(&FileDescriptor::new("/src/a.rs", "Core", "core"), &prefs);

        assert!(docs.activate("/src/a.rs"));
        assert_eq!(docs.active().unwrap().full_path(), "/src/a.rs");
        assert_eq!(docs.get("/src/a.rs").unwrap().full_path(), "/src/a.rs");
        assert_eq!(docs.get("/Src/A.rs").unwrap().full_path(), "/Src/A.rs");
    }

    #[test]
    fn move_pinned_renumbers_ranks() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        for path in ["/a", "/b", "/c", "/d"] {
            docs.add(&FileDescriptor::new(path, "Core", "core"), &prefs);
        }
        for path in ["/a", "/b", "/c"] {
            docs.toggle_pinned_status(path);
        }

        assert!(docs.move_pinned("/c", "/a"));
        assert_eq!(docs.get("/c").unwrap().pin(), PinState::Pinned(0));
        assert_eq!(docs.get("/a").unwrap().pin(), PinState::Pinned(1));
        assert_eq!(docs.get("/b").unwrap().pin(), PinState::Pinned(2));

        assert!(!docs.move_pinned("/d", "/a"));
    }

    #[test]
    fn reorder_state_is_exclusive() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        docs.add(&FileDescriptor::new("/b", "Core", "core"), &prefs);

        docs.begin_reorder("/a", ReorderDirection::Down);
        docs.begin_reorder("/b", ReorderDirection::Up);
        assert!(!docs.get("/a").unwrap().is_reordering());
        assert_eq!(docs.get("/b").unwrap().reorder_direction(), Some(ReorderDirection::Up));

        docs.end_reorder();
        assert!(docs.records().iter().all(|r| !r.is_reordering()));
    }

    #[test]
    fn project_rename_keeps_colour() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);
        let brush = docs.get("/a").unwrap().brush();

        let updated = docs.rename_project("core", &ProjectNameData::new("Kernel", "kernel"));
        docs.recolor(&prefs);

        assert_eq!(updated, 1);
        assert_eq!(docs.get("/a").unwrap().project().display_name(), "Kernel");
        assert_eq!(docs.get("/a").unwrap().brush(), brush);
        assert!(matches!(brush, Brush::Solid(_)));
    }

    #[test]
    fn clear_drops_records_and_colours() {
        let (mut docs, _) = manager();
        let prefs = Preferences::default();
        docs.add(&FileDescriptor::new("/a", "Core", "core"), &prefs);

        docs.clear();

        assert!(docs.is_empty());
        assert_eq!(docs.colors().assigned_count(), 0);
    }
}
