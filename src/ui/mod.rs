//! Presentation-facing layer: the bindable view and colour assignment.
//!
//! Nothing here draws anything. The editor's presentation layer binds to
//! [`DocumentView`] and paints rows with the brushes the
//! [`ProjectColorAssigner`] hands out.
//!
//! # Modules
//!
//! - [`view`]: Ordered, filtered, grouped projection of the tracked records
//! - [`colors`]: Stable per-project colour assignment
//! - [`palette`]: Built-in and TOML-loaded colour palettes
//!
//! # Example
//!
//! ```rust
//! use docket::ui::{DocumentView, ProjectColorAssigner};
//!
//! let mut colors = ProjectColorAssigner::default();
//! let brush = colors.color_for("core", true);
//! assert!(brush.color().is_some());
//!
//! let mut view = DocumentView::new();
//! view.refresh(&[]);
//! assert!(view.is_empty());
//! ```

pub mod colors;
pub mod palette;
pub mod view;

pub use colors::ProjectColorAssigner;
pub use palette::Palette;
pub use view::{DocumentView, GroupDescriptor, ViewGroup, ViewRow};
