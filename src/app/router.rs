//! Static routing from preference fields to the reactions they require.

use super::reactions::ViewReaction;
use crate::domain::PreferenceField;

/// Fixed table of which reactions a preference change must run, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionRouter;

impl ReactionRouter {
    /// Every registered reaction, each once, in initialization order.
    pub const ALL: &'static [ViewReaction] = &[
        ViewReaction::Grouping,
        ViewReaction::Sort,
        ViewReaction::PathSegments,
        ViewReaction::UsageRank,
        ViewReaction::ProjectColor,
    ];

    /// Reactions to run when `field` changes, in the order they must run.
    #[must_use]
    pub const fn reactions_for(field: PreferenceField) -> &'static [ViewReaction] {
        match field {
            PreferenceField::PathSegmentCount => &[ViewReaction::PathSegments],
            PreferenceField::GroupByProject => &[ViewReaction::Grouping, ViewReaction::Sort],
            // Brushes depend on whether recency is shown, so colours follow ranks.
            PreferenceField::ShowRecentUsage => &[ViewReaction::UsageRank, ViewReaction::ProjectColor],
            PreferenceField::AssignProjectColours => &[ViewReaction::ProjectColor],
            PreferenceField::SelectedDocumentSortOption
            | PreferenceField::SelectedProjectSortOption => &[ViewReaction::Sort],
        }
    }
}
