//! Application layer: the document set and the reactive view pipeline.
//!
//! This layer sits between the editor integration and the domain/ui types.
//! Editor notifications arrive as [`Event`]s; preference edits travel through
//! the observable store to the [`ReactionCoordinator`].
//!
//! # Architecture
//!
//! ```text
//! Editor → Event → handle_event → DocumentSetManager ──────────────┐
//!                       │                                          ↓
//!                       └→ PreferencesStore → PreferenceChanged → ReactionCoordinator
//!                                                                  │ (ReactionRouter)
//!                                                                  ↓
//!                                                   ViewReaction → DocumentView
//! ```
//!
//! # Modules
//!
//! - [`documents`]: The canonical record collection and its mutations
//! - [`factory`]: Record construction from editor descriptors
//! - [`reactions`]: The view reactions and the executor seam
//! - [`router`]: Which reactions each preference field triggers
//! - [`coordinator`]: Dispatch of queued preference changes to the bound view
//! - [`state`]: The container wiring the above together
//! - [`handler`]: Event processing

pub mod coordinator;
pub mod documents;
pub mod factory;
pub mod handler;
pub mod reactions;
pub mod router;
pub mod state;

pub use coordinator::ReactionCoordinator;
pub use documents::{DocumentSetManager, SyncOutcome};
pub use factory::RecordFactory;
pub use handler::{handle_event, Event};
pub use reactions::{ApplyReactions, ReactionExecutor, ViewReaction};
pub use router::ReactionRouter;
pub use state::AppState;
