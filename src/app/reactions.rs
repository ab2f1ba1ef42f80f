//! View reactions: the transforms re-run when preferences change.
//!
//! Each reaction reads the current preferences and brings one aspect of the
//! view (sorting, grouping, display names, colours, usage ranks) back in line
//! with them. Reactions hold no state between invocations; the document set
//! and the view are handed in on every call.

use super::documents::DocumentSetManager;
use crate::domain::{Preferences, Result, SortDescriptor, SortDirection, SortKey};
use crate::ui::DocumentView;

/// The fixed set of view reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewReaction {
    /// Adds or removes the project group descriptor.
    Grouping,
    /// Clears and re-derives the sort descriptors.
    Sort,
    /// Recomputes display names for the configured segment count.
    PathSegments,
    /// Recomputes usage ranks across the whole collection.
    UsageRank,
    /// Recomputes every record's project brush.
    ProjectColor,
}

impl ViewReaction {
    /// Applies this reaction to `view` and the records behind it.
    ///
    /// # Errors
    ///
    /// Propagates [`DocketError::UnsupportedOperation`](crate::domain::DocketError)
    /// if a sort descriptor is requested from a criterion without ordering.
    pub fn update_view(
        self,
        view: &mut DocumentView,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<()> {
        let _span = tracing::debug_span!("update_view", reaction = ?self).entered();

        match self {
            Self::Grouping => {
                view.set_grouped(preferences.group_by_project);
            }
            Self::Sort => {
                view.clear_sort_descriptors();
                for descriptor in sort_descriptors(preferences)? {
                    view.push_sort_descriptor(descriptor);
                }
            }
            Self::PathSegments => {
                documents.reapply_display_names(preferences.path_segment_count);
            }
            Self::UsageRank => {
                documents.recompute_usage_ranks();
            }
            Self::ProjectColor => {
                documents.recolor(preferences);
            }
        }

        // Display names feed the alphabetical order, so every reaction re-projects.
        view.refresh(documents.records());
        Ok(())
    }
}

/// Descriptors for `preferences`: project order when grouping, then pins, then documents.
fn sort_descriptors(preferences: &Preferences) -> Result<Vec<SortDescriptor>> {
    let mut descriptors = Vec::with_capacity(3);

    let project = preferences.selected_project_sort_option;
    if preferences.group_by_project && project.has_ordering() {
        descriptors.push(project.descriptor()?);
    }

    descriptors.push(SortDescriptor::new(SortKey::PinOrder, SortDirection::Ascending));

    let document = preferences.selected_document_sort_option;
    if document.has_ordering() {
        descriptors.push(document.descriptor()?);
    }

    Ok(descriptors)
}

/// Runs reactions on behalf of the coordinator.
///
/// The default [`ApplyReactions`] simply calls
/// [`ViewReaction::update_view`]; other executors can observe or replace
/// individual reactions.
pub trait ReactionExecutor {
    /// Runs `reaction` against the bound view.
    ///
    /// # Errors
    ///
    /// Returns whatever the reaction returns.
    fn execute(
        &mut self,
        reaction: ViewReaction,
        view: &mut DocumentView,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<()>;
}

/// Executes each reaction as defined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyReactions;

impl ReactionExecutor for ApplyReactions {
    fn execute(
        &mut self,
        reaction: ViewReaction,
        view: &mut DocumentView,
        documents: &mut DocumentSetManager,
        preferences: &Preferences,
    ) -> Result<()> {
        reaction.update_view(view, documents, preferences)
    }
}
