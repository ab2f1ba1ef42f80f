//! Record construction.
//!
//! Every record the document set tracks is built here, so casing correction,
//! display reduction and the initial brush are applied the same way on open,
//! synchronization and rename.

use crate::domain::{Brush, FileDescriptor, FileMetadataRecord, Preferences};
use crate::infrastructure::Services;
use crate::ui::ProjectColorAssigner;
use chrono::{DateTime, Utc};

/// Builds fully-initialized records from editor descriptors.
pub struct RecordFactory<'a> {
    services: &'a Services,
    colors: &'a mut ProjectColorAssigner,
}

impl<'a> RecordFactory<'a> {
    pub fn new(services: &'a Services, colors: &'a mut ProjectColorAssigner) -> Self {
        Self { services, colors }
    }

    /// Creates a record for `descriptor`.
    ///
    /// The activation timestamp defaults to the clock's current time.
    pub fn create(
        &mut self,
        descriptor: &FileDescriptor,
        preferences: &Preferences,
        activated_at: Option<DateTime<Utc>>,
    ) -> FileMetadataRecord {
        let corrected = self.services.casing.restore_casing(&descriptor.full_path);
        let display_name = self
            .services
            .reducer
            .reduce(&corrected, preferences.path_segment_count);
        let activated_at = activated_at.unwrap_or_else(|| self.services.clock.now_utc());

        let mut record = FileMetadataRecord::new(
            descriptor.full_path.clone(),
            corrected,
            display_name,
            descriptor.project(),
            activated_at,
        );
        record.brush = brush_for(self.colors, descriptor.project_key.as_str(), preferences);

        tracing::trace!(
            full_path = %record.full_path(),
            display_name = %record.display_name(),
            project_key = %descriptor.project_key,
            "record created"
        );
        record
    }
}

/// The brush a record of `project_key` gets under `preferences`.
///
/// Recency highlighting and project tinting share the row background, so the
/// tint is dropped while recent usage is shown.
pub(crate) fn brush_for(
    colors: &mut ProjectColorAssigner,
    project_key: &str,
    preferences: &Preferences,
) -> Brush {
    if preferences.show_recent_usage {
        Brush::Transparent
    } else {
        colors.color_for(project_key, preferences.assign_project_colours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ManualClock;
    use chrono::TimeZone;

    #[test]
    fn create_applies_reduction_brush_and_clock() {
        let clock = ManualClock::new(Utc.timestamp_opt(42, 0).unwrap());
        let services = Services::with_clock(clock);
        let mut colors = ProjectColorAssigner::default();
        let prefs = Preferences {
            path_segment_count: 2,
            ..Preferences::default()
        };

        let descriptor = FileDescriptor::new("/repo/src/app/state.rs", "Repo", "repo");
        let record = RecordFactory::new(&services, &mut colors).create(&descriptor, &prefs, None);

        assert_eq!(record.display_name(), "app/state.rs");
        assert_eq!(record.activated_at().timestamp(), 42);
        assert!(matches!(record.brush(), Brush::Solid(_)));
        assert_eq!(colors.assigned_count(), 1);
    }

    #[test]
    fn recent_usage_suppresses_tint() {
        let mut colors = ProjectColorAssigner::default();
        let prefs = Preferences {
            show_recent_usage: true,
            ..Preferences::default()
        };
        assert_eq!(brush_for(&mut colors, "repo", &prefs), Brush::Transparent);

        let prefs = Preferences {
            assign_project_colours: false,
            ..Preferences::default()
        };
        assert_eq!(brush_for(&mut colors, "repo", &prefs), Brush::Neutral);
    }
}
