//! User preferences and their change notifications.
//!
//! [`Preferences`] is a plain value. [`PreferencesStore`] wraps it, validates
//! typed [`PreferenceUpdate`]s, and notifies every subscriber with a
//! [`PreferenceChanged`] event when a field actually changes value. Subscribers
//! receive events over an `mpsc` channel and drain them in order on the owning
//! thread.

use super::error::{DocketError, Result};
use super::sort::{SortCriterion, SortTarget};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Snapshot of every preference the core reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Number of trailing path segments shown as a record's display name.
    pub path_segment_count: u32,
    pub group_by_project: bool,
    pub show_recent_usage: bool,
    pub assign_project_colours: bool,
    pub selected_document_sort_option: SortCriterion,
    pub selected_project_sort_option: SortCriterion,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            path_segment_count: 1,
            group_by_project: false,
            show_recent_usage: false,
            assign_project_colours: true,
            selected_document_sort_option: SortCriterion::Alphabetical,
            selected_project_sort_option: SortCriterion::ProjectAlphabetical,
        }
    }
}

impl Preferences {
    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Config`] if the segment count is zero or a sort
    /// option is not applicable to its list kind.
    pub fn validate(&self) -> Result<()> {
        if self.path_segment_count == 0 {
            return Err(DocketError::Config(
                "path_segment_count must be at least 1".to_string(),
            ));
        }
        check_target(self.selected_document_sort_option, SortTarget::Document)?;
        check_target(self.selected_project_sort_option, SortTarget::Project)?;
        Ok(())
    }
}

fn check_target(criterion: SortCriterion, target: SortTarget) -> Result<()> {
    if criterion.applies_to(target) {
        Ok(())
    } else {
        Err(DocketError::Config(format!(
            "sort option '{criterion}' cannot order {target:?} lists"
        )))
    }
}

/// Identifies one preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    PathSegmentCount,
    GroupByProject,
    ShowRecentUsage,
    AssignProjectColours,
    SelectedDocumentSortOption,
    SelectedProjectSortOption,
}

/// Notification that a field of the store changed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceChanged {
    pub field: PreferenceField,
}

/// A typed request to change one preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceUpdate {
    PathSegmentCount(u32),
    GroupByProject(bool),
    ShowRecentUsage(bool),
    AssignProjectColours(bool),
    SelectedDocumentSortOption(SortCriterion),
    SelectedProjectSortOption(SortCriterion),
}

impl PreferenceUpdate {
    #[must_use]
    pub const fn field(self) -> PreferenceField {
        match self {
            Self::PathSegmentCount(_) => PreferenceField::PathSegmentCount,
            Self::GroupByProject(_) => PreferenceField::GroupByProject,
            Self::ShowRecentUsage(_) => PreferenceField::ShowRecentUsage,
            Self::AssignProjectColours(_) => PreferenceField::AssignProjectColours,
            Self::SelectedDocumentSortOption(_) => PreferenceField::SelectedDocumentSortOption,
            Self::SelectedProjectSortOption(_) => PreferenceField::SelectedProjectSortOption,
        }
    }
}

/// Observable preferences.
///
/// The store never persists anything; the embedding editor owns persistence and
/// feeds values in through [`apply`](Self::apply).
#[derive(Debug, Default)]
pub struct PreferencesStore {
    current: Preferences,
    subscribers: Vec<Sender<PreferenceChanged>>,
}

impl PreferencesStore {
    #[must_use]
    pub fn new(preferences: Preferences) -> Self {
        Self {
            current: preferences,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn get(&self) -> &Preferences {
        &self.current
    }

    /// Registers a new subscriber and returns its end of the channel.
    pub fn subscribe(&mut self) -> Receiver<PreferenceChanged> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Applies an update and notifies subscribers if the value changed.
    ///
    /// Returns the emitted notification, or `None` when the new value equals
    /// the current one.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Config`] for a zero segment count or a sort option
    /// applied to the wrong list kind. The store is left unchanged.
    pub fn apply(&mut self, update: PreferenceUpdate) -> Result<Option<PreferenceChanged>> {
        let prefs = &mut self.current;
        let changed = match update {
            PreferenceUpdate::PathSegmentCount(count) => {
                if count == 0 {
                    return Err(DocketError::Config(
                        "path_segment_count must be at least 1".to_string(),
                    ));
                }
                replace(&mut prefs.path_segment_count, count)
            }
            PreferenceUpdate::GroupByProject(value) => replace(&mut prefs.group_by_project, value),
            PreferenceUpdate::ShowRecentUsage(value) => replace(&mut prefs.show_recent_usage, value),
            PreferenceUpdate::AssignProjectColours(value) => {
                replace(&mut prefs.assign_project_colours, value)
            }
            PreferenceUpdate::SelectedDocumentSortOption(criterion) => {
                check_target(criterion, SortTarget::Document)?;
                replace(&mut prefs.selected_document_sort_option, criterion)
            }
            PreferenceUpdate::SelectedProjectSortOption(criterion) => {
                check_target(criterion, SortTarget::Project)?;
                replace(&mut prefs.selected_project_sort_option, criterion)
            }
        };

        if !changed {
            tracing::trace!(field = ?update.field(), "preference unchanged");
            return Ok(None);
        }

        let event = PreferenceChanged {
            field: update.field(),
        };
        tracing::debug!(field = ?event.field, "preference changed");

        // Subscribers that dropped their receiver are forgotten.
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        Ok(Some(event))
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
