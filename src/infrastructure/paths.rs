//! Path services: casing correction, display reduction and the data directory.
//!
//! Paths arrive from the editor as strings using either `/` or `\` separators,
//! so the reducer works on the string form rather than on `std::path` components
//! of the host platform.

use super::{PathCorrectionService, PathDisplayReducer};
use std::path::{Component, Path, PathBuf};

/// Returns the directory docket writes its own files (traces) into.
///
/// Resolves to the platform's local data directory, e.g.
/// `~/.local/share/docket` on Linux, falling back to the temp directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("docket")
}

/// Restores casing by looking each component up in its parent directory.
///
/// An exact match wins; otherwise the first case-insensitive match is used.
/// Components that cannot be resolved (missing, unreadable) are kept as given,
/// and so is everything after them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCasingCorrector;

impl PathCorrectionService for FsCasingCorrector {
    fn restore_casing(&self, path: &str) -> String {
        let input = Path::new(path);
        let mut resolved = PathBuf::new();
        let mut components = input.components();

        for component in components.by_ref() {
            match component {
                Component::Normal(name) => {
                    let Some(actual) = find_entry(&resolved, name.to_string_lossy().as_ref()) else {
                        resolved.push(name);
                        break;
                    };
                    resolved.push(actual);
                }
                other => resolved.push(other.as_os_str()),
            }
        }

        for rest in components {
            resolved.push(rest.as_os_str());
        }

        let restored = resolved.to_string_lossy().into_owned();
        if restored != path {
            tracing::trace!(original = %path, restored = %restored, "restored path casing");
        }
        restored
    }
}

fn find_entry(dir: &Path, name: &str) -> Option<String> {
    let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
    let mut fallback = None;

    for entry in std::fs::read_dir(dir).ok()?.filter_map(std::result::Result::ok) {
        let entry_name = entry.file_name().to_string_lossy().into_owned();
        if entry_name == name {
            return Some(entry_name);
        }
        if fallback.is_none() && entry_name.eq_ignore_ascii_case(name) {
            fallback = Some(entry_name);
        }
    }

    fallback
}

/// Leaves paths as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreserveCasing;

impl PathCorrectionService for PreserveCasing {
    fn restore_casing(&self, path: &str) -> String {
        path.to_string()
    }
}

/// Keeps the last N segments of a path, joined with the path's own separator.
///
/// # Examples
///
/// ```
/// use docket::infrastructure::{PathDisplayReducer, SegmentReducer};
///
/// assert_eq!(SegmentReducer.reduce("/src/app/ui/view.rs", 2), "ui/view.rs");
/// assert_eq!(SegmentReducer.reduce("C:\\src\\App\\Main.cs", 1), "Main.cs");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentReducer;

impl PathDisplayReducer for SegmentReducer {
    fn reduce(&self, path: &str, segment_count: u32) -> String {
        let separator = if path.contains('\\') { '\\' } else { '/' };
        let segments: Vec<&str> = path
            .split(|c: char| c == '/' || c == '\\')
            .filter(|s| !s.is_empty())
            .collect();

        let keep = usize::try_from(segment_count.max(1)).unwrap_or(usize::MAX);
        if keep >= segments.len() {
            return segments.join(&separator.to_string());
        }

        segments[segments.len() - keep..].join(&separator.to_string())
    }
}
