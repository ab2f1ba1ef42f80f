//! Sort criteria offered to the user and the descriptors they produce.
//!
//! A [`SortCriterion`] is what the preferences store persists (by display name).
//! A [`SortDescriptor`] is what the view consumes: a field key plus a direction.
//! `DisableSorting` is the one criterion without an ordering; asking it for a
//! descriptor is a contract violation.

use super::error::{DocketError, Result};
use serde::{Deserialize, Serialize};

/// The kind of list a criterion can order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortTarget {
    /// The flat list of documents.
    Document,
    /// The project groups of the list.
    Project,
}

/// Record field a descriptor orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    DisplayName,
    ActivatedAt,
    ProjectName,
    PinOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A field key and a direction, ready to be applied by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortDescriptor {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortDescriptor {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Named ordering strategies selectable in preferences.
///
/// Serialized by display name so persisted settings survive variant reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortCriterion {
    #[serde(rename = "Alphabetical")]
    Alphabetical,
    #[serde(rename = "Reverse alphabetical")]
    ReverseAlphabetical,
    #[serde(rename = "Chronological")]
    Chronological,
    #[serde(rename = "Project alphabetical")]
    ProjectAlphabetical,
    #[serde(rename = "Project reverse alphabetical")]
    ProjectReverseAlphabetical,
    #[serde(rename = "None")]
    DisableSorting,
}

impl SortCriterion {
    /// Every criterion, in the order they are offered to the user.
    pub const ALL: [Self; 6] = [
        Self::Alphabetical,
        Self::ReverseAlphabetical,
        Self::Chronological,
        Self::ProjectAlphabetical,
        Self::ProjectReverseAlphabetical,
        Self::DisableSorting,
    ];

    /// Human-readable name, also used as the persistence key.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Alphabetical => "Alphabetical",
            Self::ReverseAlphabetical => "Reverse alphabetical",
            Self::Chronological => "Chronological",
            Self::ProjectAlphabetical => "Project alphabetical",
            Self::ProjectReverseAlphabetical => "Project reverse alphabetical",
            Self::DisableSorting => "None",
        }
    }

    /// Looks a criterion up by its display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }

    /// Returns true if this criterion can order lists of the given kind.
    #[must_use]
    pub const fn applies_to(self, target: SortTarget) -> bool {
        match self {
            Self::Alphabetical | Self::ReverseAlphabetical | Self::Chronological => {
                matches!(target, SortTarget::Document)
            }
            Self::ProjectAlphabetical | Self::ProjectReverseAlphabetical | Self::DisableSorting => {
                matches!(target, SortTarget::Project)
            }
        }
    }

    /// Criteria applicable to `target`, in presentation order.
    pub fn available_for(target: SortTarget) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |c| c.applies_to(target))
    }

    /// Returns false for the pass-through criterion.
    #[must_use]
    pub const fn has_ordering(self) -> bool {
        !matches!(self, Self::DisableSorting)
    }

    /// Produces the descriptor the view applies for this criterion.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::UnsupportedOperation`] for `DisableSorting`. Check
    /// [`has_ordering`](Self::has_ordering) before calling.
    pub fn descriptor(self) -> Result<SortDescriptor> {
        use SortDirection::{Ascending, Descending};

        let descriptor = match self {
            Self::Alphabetical => SortDescriptor::new(SortKey::DisplayName, Ascending),
            Self::ReverseAlphabetical => SortDescriptor::new(SortKey::DisplayName, Descending),
            Self::Chronological => SortDescriptor::new(SortKey::ActivatedAt, Descending),
            Self::ProjectAlphabetical => SortDescriptor::new(SortKey::ProjectName, Ascending),
            Self::ProjectReverseAlphabetical => SortDescriptor::new(SortKey::ProjectName, Descending),
            Self::DisableSorting => {
                return Err(DocketError::UnsupportedOperation(format!(
                    "sort criterion '{}' has no ordering",
                    self.display_name()
                )))
            }
        };
        Ok(descriptor)
    }
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
