//! Reaction coordination.
//!
//! The coordinator owns the bound [`DocumentView`] and the receiving end of
//! the preference subscription. Each queued [`PreferenceChanged`] is routed
//! through [`ReactionRouter`] and the resulting reactions run in order.
//! Without a bound view, queued changes are drained and discarded.

use super::documents::DocumentSetManager;
use super::reactions::{ApplyReactions, ReactionExecutor, ViewReaction};
use super::router::ReactionRouter;
use crate::domain::{PreferenceChanged, Preferences, Result};
use crate::ui::DocumentView;
use std::sync::mpsc::Receiver;

/// Dispatches preference changes to the view reactions.
pub struct ReactionCoordinator<E = ApplyReactions> {
    changes: Receiver<PreferenceChanged>,
    executor: E,
    view: Option<DocumentView>,
}

impl ReactionCoordinator<ApplyReactions> {
    /// Creates an unbound coordinator reading from `changes`.
    #[must_use]
    pub fn new(changes: Receiver<PreferenceChanged>) -> Self {
        Self::with_executor(changes, ApplyReactions)
    }
}

impl<E: ReactionExecutor> ReactionCoordinator<E> {
    /// Creates an unbound coordinator that runs reactions through `executor`.
    pub fn with_executor(changes: Receiver<PreferenceChanged>, executor: E) -> Self {
        Self {
            changes,
            executor,
            view: None,
        }
    }

    /// Binds `view` and runs every registered reaction once so it matches
    /// the current preferences before any change arrives.
    ///
    /// Changes already queued when the view is bound are superseded by the
    /// full pass and are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first reaction error. The view stays bound.
    pub fn initialize(
        &mut self,
        view: DocumentView,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<()> {
        let _span = tracing::debug_span!("initialize_view", records = documents.len()).entered();

        let stale = self.discard_pending();
        if stale > 0 {
            tracing::debug!(stale, "discarded changes queued before view was bound");
        }

        let view = self.view.insert(view);
        for &reaction in ReactionRouter::ALL {
            self.executor.execute(reaction, view, documents, preferences)?;
        }
        Ok(())
    }

    /// Runs the reactions for one change.
    ///
    /// A no-op when no view is bound.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first reaction error.
    pub fn handle(
        &mut self,
        change: PreferenceChanged,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<()> {
        let Some(view) = self.view.as_mut() else {
            tracing::trace!(field = ?change.field, "no view bound, change ignored");
            return Ok(());
        };

        let reactions: &[ViewReaction] = ReactionRouter::reactions_for(change.field);
        tracing::debug!(field = ?change.field, reactions = reactions.len(), "preference changed");

        for &reaction in reactions {
            self.executor.execute(reaction, view, documents, preferences)?;
        }
        Ok(())
    }

    /// Drains queued changes in arrival order, returning how many were handled.
    ///
    /// # Errors
    ///
    /// Stops at the first failing change. Later changes stay queued.
    pub fn process_pending(
        &mut self,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<usize> {
        if self.view.is_none() {
            self.discard_pending();
            return Ok(0);
        }

        let mut handled = 0;
        while let Ok(change) = self.changes.try_recv() {
            self.handle(change, documents, preferences)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Re-projects the bound view from the current records.
    pub fn refresh(&mut self, documents: &DocumentSetManager) {
        if let Some(view) = self.view.as_mut() {
            view.refresh(documents.records());
        }
    }

    /// Replaces the filter text and re-projects the bound view.
    ///
    /// Returns `false` when no view is bound.
    pub fn set_filter(&mut self, query: &str, documents: &DocumentSetManager) -> bool {
        let Some(view) = self.view.as_mut() else {
            return false;
        };
        view.set_filter(query);
        view.refresh(documents.records());
        true
    }

    #[must_use]
    pub fn view(&self) -> Option<&DocumentView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.view.is_some()
    }

    /// Unbinds and returns the view.
    pub fn detach(&mut self) -> Option<DocumentView> {
        self.view.take()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    fn discard_pending(&mut self) -> usize {
        self.changes.try_iter().count()
    }
}

impl<E> std::fmt::Debug for ReactionCoordinator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactionCoordinator")
            .field("bound", &self.view.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileDescriptor, PreferenceField, PreferenceUpdate, PreferencesStore};
    use crate::infrastructure::{ManualClock, Services};
    use crate::ui::ProjectColorAssigner;
    use chrono::{TimeZone, Utc};

    /// Records reactions instead of running them.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<ViewReaction>,
    }

    impl ReactionExecutor for Recorder {
        fn execute(
            &mut self,
            reaction: ViewReaction,
            _view: &mut DocumentView,
            _documents: &mut DocumentSetManager,
            _preferences: &Preferences,
        ) -> Result<()> {
            self.calls.push(reaction);
            Ok(())
        }
    }

    fn documents() -> DocumentSetManager {
        let clock = ManualClock::new(Utc.timestamp_opt(0, 0).unwrap());
        DocumentSetManager::new(Services::with_clock(clock), ProjectColorAssigner::default())
    }

    #[test]
    fn initialize_runs_every_reaction_once() {
        let mut store = PreferencesStore::default();
        let mut docs = documents();
        let mut coordinator = ReactionCoordinator::with_executor(store.subscribe(), Recorder::default());

        coordinator
            .initialize(DocumentView::new(), &mut docs, store.get())
            .unwrap();

        assert_eq!(coordinator.executor().calls, ReactionRouter::ALL);
    }

    #[test]
    fn unbound_coordinator_discards_changes() {
        let mut store = PreferencesStore::default();
        let mut docs = documents();
        let mut coordinator = ReactionCoordinator::with_executor(store.subscribe(), Recorder::default());

        store.apply(PreferenceUpdate::GroupByProject(true)).unwrap();
        let handled = coordinator.process_pending(&mut docs, store.get()).unwrap();

        assert_eq!(handled, 0);
        assert!(coordinator.executor().calls.is_empty());
    }

    #[test]
    fn recent_usage_change_runs_ranks_then_colours() {
        let mut store = PreferencesStore::default();
        let mut docs = documents();
        let mut coordinator = ReactionCoordinator::with_executor(store.subscribe(), Recorder::default());
        coordinator
            .initialize(DocumentView::new(), &mut docs, store.get())
            .unwrap();
        let baseline = coordinator.executor().calls.len();

        store.apply(PreferenceUpdate::ShowRecentUsage(true)).unwrap();
        store.apply(PreferenceUpdate::PathSegmentCount(3)).unwrap();
        let handled = coordinator.process_pending(&mut docs, store.get()).unwrap();

        assert_eq!(handled, 2);
        assert_eq!(
            &coordinator.executor().calls[baseline..],
            &[
                ViewReaction::UsageRank,
                ViewReaction::ProjectColor,
                ViewReaction::PathSegments
            ]
        );
    }

    #[test]
    fn unchanged_value_schedules_nothing() {
        let mut store = PreferencesStore::default();
        let mut docs = documents();
        let mut coordinator = ReactionCoordinator::with_executor(store.subscribe(), Recorder::default());
        coordinator
            .initialize(DocumentView::new(), &mut docs, store.get())
            .unwrap();
        let baseline = coordinator.executor().calls.len();

        store.apply(PreferenceUpdate::GroupByProject(false)).unwrap();
        assert_eq!(coordinator.process_pending(&mut docs, store.get()).unwrap(), 0);
        assert_eq!(coordinator.executor().calls.len(), baseline);
    }

    #[test]
    fn segment_change_updates_bound_view() {
        let mut store = PreferencesStore::default();
        let mut docs = documents();
        docs.add(&FileDescriptor::new("/repo/src/main.rs", "Repo", "repo"), store.get());

        let mut coordinator = ReactionCoordinator::new(store.subscribe());
        coordinator
            .initialize(DocumentView::new(), &mut docs, store.get())
            .unwrap();

        store.apply(PreferenceUpdate::PathSegmentCount(2)).unwrap();
        coordinator.process_pending(&mut docs, store.get()).unwrap();

        let view = coordinator.view().unwrap();
        assert_eq!(view.rows().next().unwrap().display_name, "src/main.rs");
        assert_eq!(docs.records()[0].display_name(), "src/main.rs");
    }

    #[test]
    fn handle_routes_single_change() {
        let store = PreferencesStore::default();
        let mut docs = documents();
        let (_tx, rx) = std::sync::mpsc::channel();
        let mut coordinator = ReactionCoordinator::with_executor(rx, Recorder::default());
        coordinator
            .initialize(DocumentView::new(), &mut docs, store.get())
            .unwrap();
        let baseline = coordinator.executor().calls.len();

        let change = PreferenceChanged {
            field: PreferenceField::GroupByProject,
        };
        coordinator.handle(change, &mut docs, store.get()).unwrap();

        assert_eq!(
            &coordinator.executor().calls[baseline..],
            &[ViewReaction::Grouping, ViewReaction::Sort]
        );
    }
}
