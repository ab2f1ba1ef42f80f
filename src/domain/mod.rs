//! Domain layer for docket.
//!
//! Core value types and pure logic, independent of any editor integration or
//! service implementation.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`record`]: Open-file records, descriptors, project data and pin state
//! - [`sort`]: Sort criteria and the descriptors they produce
//! - [`preferences`]: User preferences and typed change notifications
//! - [`color`]: Colour and brush value types
//! - [`usage`]: Usage recency normalization
//!
//! # Examples
//!
//! ```
//! use docket::domain::{FileDescriptor, PinState};
//!
//! let descriptor = FileDescriptor::new("/src/lib.rs", "Core", "core");
//! assert!(descriptor.has_active_window);
//! assert!(PinState::Pinned(0) < PinState::Unpinned);
//! ```

pub mod color;
pub mod error;
pub mod preferences;
pub mod record;
pub mod sort;
pub mod usage;

pub use color::{Brush, Rgb};
pub use error::{DocketError, Result};
pub use preferences::{
    PreferenceChanged, PreferenceField, PreferenceUpdate, Preferences, PreferencesStore,
};
pub use record::{FileDescriptor, FileMetadataRecord, PinState, ProjectNameData, ReorderDirection};
pub use sort::{SortCriterion, SortDescriptor, SortDirection, SortKey, SortTarget};
