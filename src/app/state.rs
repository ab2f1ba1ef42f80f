//! Application state container.
//!
//! [`AppState`] wires the three long-lived parts together: the observable
//! [`PreferencesStore`], the [`DocumentSetManager`] that owns the records, and
//! the [`ReactionCoordinator`] that keeps the bound view in line with both.
//! The coordinator subscribes to the store when the state is built, so every
//! preference change applied through [`AppState::apply_preference`] reaches
//! the view before the call returns.
//!
//! # Example
//!
//! ```rust
//! use docket::app::AppState;
//! use docket::domain::{FileDescriptor, PreferenceUpdate, Preferences};
//! use docket::infrastructure::Services;
//! use docket::ui::{DocumentView, Palette};
//!
//! let mut state = AppState::new(Preferences::default(), Services::system(), Palette::default())?;
//! state.bind_view(DocumentView::new())?;
//!
//! state.open_document(&FileDescriptor::new("/repo/src/lib.rs", "Repo", "repo"));
//! state.apply_preference(PreferenceUpdate::PathSegmentCount(2))?;
//!
//! let row = state.view().and_then(|v| v.rows().next()).map(|r| r.display_name.clone());
//! assert_eq!(row.as_deref(), Some("src/lib.rs"));
//! # Ok::<(), docket::DocketError>(())
//! ```

use super::coordinator::ReactionCoordinator;
use super::documents::DocumentSetManager;
use crate::domain::{FileDescriptor, PreferenceUpdate, Preferences, PreferencesStore, Result};
use crate::infrastructure::Services;
use crate::ui::{DocumentView, Palette, ProjectColorAssigner};

/// Central state of the document list.
#[derive(Debug)]
pub struct AppState {
    /// Current preferences and their change notifications.
    pub preferences: PreferencesStore,

    /// The tracked documents.
    pub documents: DocumentSetManager,

    /// Owner of the bound view.
    ///
    /// Unbound until [`bind_view`](Self::bind_view) is called; until then
    /// record changes are tracked but nothing is projected.
    pub coordinator: ReactionCoordinator,
}

impl AppState {
    /// Creates state with no records and no bound view.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Config`](crate::DocketError::Config) if
    /// `preferences` fails validation.
    pub fn new(preferences: Preferences, services: Services, palette: Palette) -> Result<Self> {
        preferences.validate()?;

        let mut store = PreferencesStore::new(preferences);
        let coordinator = ReactionCoordinator::new(store.subscribe());
        let documents = DocumentSetManager::new(services, ProjectColorAssigner::new(palette));

        Ok(Self {
            preferences: store,
            documents,
            coordinator,
        })
    }

    /// Binds `view` and brings it in line with the current preferences.
    ///
    /// # Errors
    ///
    /// Propagates the first reaction failure.
    pub fn bind_view(&mut self, view: DocumentView) -> Result<()> {
        self.coordinator
            .initialize(view, &mut self.documents, self.preferences.get())
    }

    #[must_use]
    pub fn view(&self) -> Option<&DocumentView> {
        self.coordinator.view()
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        self.preferences.get()
    }

    /// Applies a preference update and runs the reactions it triggers.
    ///
    /// Returns whether the value changed.
    ///
    /// # Errors
    ///
    /// Returns the validation error for an invalid value, leaving preferences
    /// untouched, or the first reaction failure.
    pub fn apply_preference(&mut self, update: PreferenceUpdate) -> Result<bool> {
        let changed = self.preferences.apply(update)?.is_some();
        self.process_pending()?;
        Ok(changed)
    }

    /// Runs reactions for every queued preference change.
    ///
    /// # Errors
    ///
    /// Propagates the first reaction failure.
    pub fn process_pending(&mut self) -> Result<usize> {
        self.coordinator
            .process_pending(&mut self.documents, self.preferences.get())
    }

    /// Starts tracking `descriptor` and re-projects the view.
    pub fn open_document(&mut self, descriptor: &FileDescriptor) -> bool {
        let added = self.documents.add(descriptor, self.preferences.get());
        if added {
            self.refresh_view();
        }
        added
    }

    /// Re-projects the bound view from the current records.
    pub fn refresh_view(&mut self) {
        self.coordinator.refresh(&self.documents);
    }
}
