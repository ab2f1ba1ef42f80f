//! Event handling and state transitions.
//!
//! The editor integration translates its notifications (window opened,
//! document renamed, workspace closed, settings changed) into [`Event`]s and
//! feeds them through [`handle_event`] one at a time on the owning thread.
//! The handler mutates the document set, runs any reactions the change calls
//! for, and reports whether the bound view needs repainting.
//!
//! # Example
//!
//! ```rust
//! use docket::app::{handle_event, AppState, Event};
//! use docket::domain::{FileDescriptor, Preferences};
//! use docket::infrastructure::Services;
//! use docket::ui::{DocumentView, Palette};
//!
//! let mut state = AppState::new(Preferences::default(), Services::system(), Palette::default())?;
//! state.bind_view(DocumentView::new())?;
//!
//! let opened = Event::DocumentOpened(FileDescriptor::new("/repo/main.rs", "Repo", "repo"));
//! assert!(handle_event(&mut state, &opened)?);
//! assert_eq!(state.view().map(|v| v.len()), Some(1));
//! # Ok::<(), docket::DocketError>(())
//! ```

use super::state::AppState;
use crate::domain::{
    DocketError, FileDescriptor, PreferenceUpdate, ProjectNameData, ReorderDirection, Result,
};

/// Notifications from the editor integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A fresh enumeration of the editor's open files.
    Synchronize {
        files: Vec<FileDescriptor>,
        /// Re-reads project data of retained records and skips the
        /// unchanged-set shortcut.
        force_full_rebuild: bool,
    },

    /// Enumerating open files failed; the pass is treated as empty.
    EnumerationFailed {
        reason: String,
    },

    /// A document window opened.
    DocumentOpened(FileDescriptor),

    /// A document window closed.
    DocumentClosed {
        full_path: String,
    },

    /// A document window received focus.
    DocumentActivated {
        full_path: String,
    },

    /// A document was saved under a new path.
    DocumentRenamed {
        old_path: String,
        new_path: String,
    },

    TogglePin {
        full_path: String,
    },

    /// A pinned row was dropped onto another pinned row.
    MovePinned {
        source: String,
        target: String,
    },

    /// A drag started or changed direction over a row.
    BeginReorder {
        full_path: String,
        direction: ReorderDirection,
    },

    /// The drag finished or was cancelled.
    EndReorder,

    /// A project was renamed in the workspace.
    ProjectRenamed {
        old_key: String,
        project: ProjectNameData,
    },

    /// The workspace closed; every record goes away.
    WorkspaceClosed,

    /// The user typed into the filter box.
    FilterChanged {
        query: String,
    },

    /// A setting changed in the editor's options page.
    PreferenceChanged(PreferenceUpdate),
}

/// Processes one event and returns whether the view changed.
///
/// # Errors
///
/// Returns [`DocketError::Config`] for an invalid preference value, or a
/// reaction failure. Inconsistent editor notifications (closing an untracked
/// file, activating an unknown path) are not errors; they return `Ok(false)`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let changed = match event {
        Event::Synchronize {
            files,
            force_full_rebuild,
        } => {
            let outcome = state.documents.synchronize(
                files.iter().cloned().map(Ok),
                *force_full_rebuild,
                state.preferences.get(),
            );
            outcome.changed()
        }
        Event::EnumerationFailed { reason } => {
            let failed = std::iter::once(Err(DocketError::Enumeration(reason.clone())));
            state
                .documents
                .synchronize(failed, false, state.preferences.get())
                .changed()
        }
        Event::DocumentOpened(descriptor) => {
            state.documents.add(descriptor, state.preferences.get())
        }
        Event::DocumentClosed { full_path } => state.documents.remove(full_path),
        // Usage ranks and chronological order both move on activation.
        Event::DocumentActivated { full_path } => state.documents.activate(full_path),
        Event::DocumentRenamed { old_path, new_path } => {
            state
                .documents
                .update_full_name(new_path, old_path, state.preferences.get())
        }
        Event::TogglePin { full_path } => state.documents.toggle_pinned_status(full_path).is_some(),
        Event::MovePinned { source, target } => state.documents.move_pinned(source, target),
        Event::BeginReorder {
            full_path,
            direction,
        } => state.documents.begin_reorder(full_path, *direction),
        Event::EndReorder => {
            state.documents.end_reorder();
            true
        }
        Event::ProjectRenamed { old_key, project } => {
            state.documents.rename_project(old_key, project) > 0
        }
        Event::WorkspaceClosed => {
            let had_records = !state.documents.is_empty();
            state.documents.clear();
            had_records
        }
        Event::FilterChanged { query } => {
            return Ok(state.coordinator.set_filter(query, &state.documents));
        }
        Event::PreferenceChanged(update) => {
            let changed = state.apply_preference(*update)?;
            return Ok(changed && state.coordinator.is_bound());
        }
    };

    if changed {
        state.refresh_view();
    } else {
        tracing::trace!("event left documents unchanged");
    }
    Ok(changed && state.coordinator.is_bound())
}
