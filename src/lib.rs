//! Docket: the state core behind an editor's open-documents list.
//!
//! Docket tracks the files a user has open and keeps an ordered, filterable,
//! groupable projection of them in step with user preferences:
//! - Reconciliation of tracked records against the editor's open windows
//! - Single-active tracking with normalized usage recency
//! - Pinning with a strict pin order, plus drag-reorder state
//! - Alphabetical, chronological and project-grouped ordering
//! - Stable per-project colours from a TOML palette
//! - Reactive view updates routed from typed preference changes
//!
//! The editor integration (window enumeration, settings persistence, drawing)
//! lives outside this crate and talks to it through [`Event`]s and the
//! service traits in [`infrastructure`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Editor integration (host)                          │  ← Events, services
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Document set reconciliation                      │
//! │  - Reaction routing and coordination                │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────────┐
//! │ UI Layer      │   │ Domain        │   │ Infrastructure    │
//! │ (ui/)         │   │ (domain/)     │   │ (infrastructure/) │
//! │ - View        │   │ - Records     │   │ - Clock           │
//! │ - Palettes    │   │ - Preferences │   │ - Casing          │
//! │ - Colours     │   │ - Sorting     │   │ - Data dir        │
//! └───────────────┘   └───────────────┘   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotated OTLP file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Hosts either hand over their flat settings map:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use docket::Config;
//!
//! let mut settings = BTreeMap::new();
//! settings.insert("path_segment_count".to_string(), "2".to_string());
//! settings.insert("document_sort".to_string(), "Chronological".to_string());
//!
//! let config = Config::from_settings(&settings);
//! assert_eq!(config.preferences.path_segment_count, 2);
//! ```
//!
//! or a TOML document:
//!
//! ```toml
//! palette_name = "catppuccin-latte"
//! trace_level = "debug"
//!
//! [preferences]
//! path_segment_count = 2
//! group_by_project = true
//! selected_document_sort_option = "Reverse alphabetical"
//! ```
//!
//! # Example
//!
//! ```rust
//! use docket::{handle_event, initialize, Config, Event};
//! use docket::domain::FileDescriptor;
//!
//! let mut state = initialize(&Config::default())?;
//!
//! let events = vec![
//!     Event::Synchronize {
//!         files: vec![
//!             FileDescriptor::new("/repo/src/main.rs", "Repo", "repo"),
//!             FileDescriptor::new("/repo/src/lib.rs", "Repo", "repo"),
//!         ],
//!         force_full_rebuild: false,
//!     },
//!     Event::DocumentActivated { full_path: "/repo/src/lib.rs".to_string() },
//! ];
//! for event in &events {
//!     handle_event(&mut state, event)?;
//! }
//!
//! assert_eq!(state.documents.active().map(|r| r.display_name()), Some("lib.rs"));
//! # Ok::<(), docket::DocketError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, AppState, DocumentSetManager, Event, ReactionCoordinator};
pub use domain::{DocketError, Preferences, Result};

use domain::SortCriterion;
use infrastructure::Services;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use ui::{DocumentView, Palette};

/// Host configuration.
///
/// # Example
///
/// ```rust
/// use docket::Config;
///
/// let config = Config::from_toml_str(r#"
///     palette_name = "catppuccin-latte"
///     [preferences]
///     show_recent_usage = true
/// "#)?;
/// assert!(config.preferences.show_recent_usage);
/// assert_eq!(config.palette().name(), "catppuccin-latte");
/// # Ok::<(), docket::DocketError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial preference values.
    pub preferences: Preferences,

    /// Built-in palette name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `palette_file` is set.
    pub palette_name: Option<String>,

    /// Path to a custom TOML palette. Takes precedence over `palette_name`.
    pub palette_file: Option<String>,

    /// Filter directive for exported spans, e.g. `debug` or `docket=trace`.
    pub trace_level: Option<String>,

    /// Directory for the trace file; the platform data directory when unset.
    pub trace_dir: Option<PathBuf>,
}

impl Config {
    /// Parses the flat string map a settings store hands over.
    ///
    /// Unknown keys are ignored. A value that fails to parse, or a sort
    /// option that does not apply to its list, falls back to the default
    /// for that key alone.
    ///
    /// # Keys
    ///
    /// - `path_segment_count`: integer ≥ 1
    /// - `group_by_project`, `show_recent_usage`, `assign_project_colours`: `true` / `false`
    /// - `document_sort`, `project_sort`: sort option display names
    /// - `palette`, `palette_file`, `trace_level`, `trace_dir`
    #[must_use]
    pub fn from_settings(settings: &BTreeMap<String, String>) -> Self {
        let defaults = Preferences::default();
        let flag = |key: &str, default: bool| {
            settings
                .get(key)
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(default)
        };
        let criterion = |key: &str, target: domain::SortTarget, default: SortCriterion| {
            settings
                .get(key)
                .and_then(|v| SortCriterion::from_display_name(v.trim()))
                .filter(|c| c.applies_to(target))
                .unwrap_or(default)
        };

        let preferences = Preferences {
            path_segment_count: settings
                .get("path_segment_count")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|&n| n >= 1)
                .unwrap_or(defaults.path_segment_count),
            group_by_project: flag("group_by_project", defaults.group_by_project),
            show_recent_usage: flag("show_recent_usage", defaults.show_recent_usage),
            assign_project_colours: flag("assign_project_colours", defaults.assign_project_colours),
            selected_document_sort_option: criterion(
                "document_sort",
                domain::SortTarget::Document,
                defaults.selected_document_sort_option,
            ),
            selected_project_sort_option: criterion(
                "project_sort",
                domain::SortTarget::Project,
                defaults.selected_project_sort_option,
            ),
        };

        Self {
            preferences,
            palette_name: settings.get("palette").cloned(),
            palette_file: settings.get("palette_file").cloned(),
            trace_level: settings.get("trace_level").cloned(),
            trace_dir: settings.get("trace_dir").map(PathBuf::from),
        }
    }

    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Config`] for malformed TOML or invalid
    /// preference values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| DocketError::Config(format!("failed to parse config: {e}")))?;
        config.preferences.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Resolves the configured palette, falling back to the default.
    #[must_use]
    pub fn palette(&self) -> Palette {
        if let Some(file) = &self.palette_file {
            return Palette::from_file(file).unwrap_or_else(|e| {
                tracing::debug!(palette_file = %file, error = %e, "failed to load palette from file, using default");
                Palette::default()
            });
        }

        self.palette_name
            .as_deref()
            .map_or_else(Palette::default, |name| {
                Palette::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(palette_name = %name, "unknown palette, using default");
                    Palette::default()
                })
            })
    }
}

/// Builds application state with system services and a bound view.
///
/// Tracing is not installed here; hosts that want the trace file call
/// [`observability::init_tracing`] first.
///
/// # Errors
///
/// Returns [`DocketError::Config`] if the configured preferences are invalid.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing docket");

    let mut state = AppState::new(config.preferences.clone(), Services::system(), config.palette())?;
    state.bind_view(DocumentView::new())?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn settings_parse_with_per_key_fallback() {
        let config = Config::from_settings(&settings(&[
            ("path_segment_count", "0"),
            ("group_by_project", "true"),
            ("show_recent_usage", "maybe"),
            ("document_sort", "Project alphabetical"),
            ("project_sort", "None"),
            ("palette", "catppuccin-latte"),
        ]));

        assert_eq!(config.preferences.path_segment_count, 1);
        assert!(config.preferences.group_by_project);
        assert!(!config.preferences.show_recent_usage);
        assert_eq!(config.preferences.selected_document_sort_option, SortCriterion::Alphabetical);
        assert_eq!(config.preferences.selected_project_sort_option, SortCriterion::DisableSorting);
        assert_eq!(config.palette().name(), "catppuccin-latte");
    }

    #[test]
    fn toml_rejects_invalid_preferences() {
        let err = Config::from_toml_str("[preferences]\npath_segment_count = 0\n").unwrap_err();
        assert!(matches!(err, DocketError::Config(_)));

        assert!(Config::from_toml_str("palette_name = [").is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trace_level = \"debug\"\n[preferences]\ngroup_by_project = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!(config.preferences.group_by_project);

        assert!(matches!(
            Config::load(file.path().with_extension("missing")),
            Err(DocketError::Io(_))
        ));
    }

    #[test]
    fn palette_falls_back_to_default() {
        let config = Config {
            palette_name: Some("no-such-palette".to_string()),
            ..Config::default()
        };
        assert_eq!(config.palette(), Palette::default());

        let config = Config {
            palette_file: Some("/definitely/not/here.toml".to_string()),
            palette_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(config.palette(), Palette::default());
    }

    #[test]
    fn initialize_binds_view() {
        let state = initialize(&Config::default()).unwrap();
        assert!(state.coordinator.is_bound());
        assert!(state.view().is_some_and(DocumentView::is_empty));
    }
}
