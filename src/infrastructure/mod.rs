//! Infrastructure layer: the services the core consumes from its host.
//!
//! The editor integration supplies path casing correction, display-name
//! reduction and the clock. Each is a small trait so the host, or a test, can
//! inject its own implementation. [`Services`] bundles them for constructor
//! injection into the document set.

pub mod clock;
pub mod paths;

pub use clock::{ManualClock, SystemClock};
pub use paths::{get_data_dir, FsCasingCorrector, PreserveCasing, SegmentReducer};

use chrono::{DateTime, Utc};

/// Restores the on-disk casing of a path.
pub trait PathCorrectionService {
    /// Returns `path` with each existing component in its on-disk casing.
    /// Implementations fall back to the input when the path cannot be resolved.
    fn restore_casing(&self, path: &str) -> String;
}

/// Shortens a path to the form shown in the list.
pub trait PathDisplayReducer {
    /// Keeps the trailing `segment_count` segments of `path`.
    fn reduce(&self, path: &str, segment_count: u32) -> String;
}

/// Source of the current time.
pub trait ClockService {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The service set injected into the document set.
pub struct Services {
    pub casing: Box<dyn PathCorrectionService>,
    pub reducer: Box<dyn PathDisplayReducer>,
    pub clock: Box<dyn ClockService>,
}

impl Services {
    /// Filesystem casing correction, segment reduction and the system clock.
    #[must_use]
    pub fn system() -> Self {
        Self {
            casing: Box::new(FsCasingCorrector),
            reducer: Box::new(SegmentReducer),
            clock: Box::new(SystemClock),
        }
    }

    /// Services that leave paths untouched and read time from `clock`.
    #[must_use]
    pub fn with_clock(clock: impl ClockService + 'static) -> Self {
        Self {
            casing: Box::new(PreserveCasing),
            reducer: Box::new(SegmentReducer),
            clock: Box::new(clock),
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
