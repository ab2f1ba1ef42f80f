//! Stable per-project colour assignment.

use super::palette::Palette;
use crate::domain::Brush;
use std::collections::HashMap;

/// Hands out palette colours to projects, round-robin, and remembers them.
///
/// A project keeps its colour for as long as the assigner lives, across
/// preference toggles and project renames (see [`rekey`](Self::rekey)). Closing
/// the workspace calls [`clear`](Self::clear) so the next workspace starts from
/// the first palette colour again.
#[derive(Debug, Clone)]
pub struct ProjectColorAssigner {
    palette: Palette,
    assignments: HashMap<String, usize>,
    assigned_count: usize,
}

impl ProjectColorAssigner {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            assignments: HashMap::new(),
            assigned_count: 0,
        }
    }

    /// Returns the brush for `project_key`.
    ///
    /// With colouring disabled every project gets the shared neutral brush and
    /// no assignment is made.
    pub fn color_for(&mut self, project_key: &str, enable_coloring: bool) -> Brush {
        if !enable_coloring {
            return Brush::Neutral;
        }

        let index = match self.assignments.get(project_key) {
            Some(&index) => index,
            None => {
                let index = self.assigned_count % self.palette.len();
                self.assignments.insert(project_key.to_string(), index);
                self.assigned_count += 1;
                tracing::debug!(project_key = %project_key, palette_index = index, "assigned project colour");
                index
            }
        };

        Brush::Solid(self.palette.color_at(index))
    }

    /// Forgets every assignment.
    pub fn clear(&mut self) {
        tracing::debug!(cleared = self.assignments.len(), "clearing project colours");
        self.assignments.clear();
        self.assigned_count = 0;
    }

    /// Moves the assignment of `old_key` to `new_key`.
    ///
    /// No-op if `old_key` has no assignment. An existing assignment under
    /// `new_key` is replaced.
    pub fn rekey(&mut self, old_key: &str, new_key: &str) {
        if let Some(index) = self.assignments.remove(old_key) {
            self.assignments.insert(new_key.to_string(), index);
        }
    }

    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assigned_count
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for ProjectColorAssigner {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_colour_assigner() -> ProjectColorAssigner {
        ProjectColorAssigner::new(
            Palette::from_toml_str("name = \"duo\"\ncolors = [\"#ff0000\", \"#00ff00\"]").unwrap(),
        )
    }

    #[test]
    fn assignments_are_stable_and_cycle() {
        let mut colors = two_colour_assigner();
        let a = colors.color_for("a", true);
        let b = colors.color_for("b", true);
        let c = colors.color_for("c", true);

        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(colors.color_for("b", true), b);
        assert_eq!(colors.assigned_count(), 3);
    }

    #[test]
    fn disabled_colouring_is_neutral_and_assigns_nothing() {
        let mut colors = two_colour_assigner();
        assert_eq!(colors.color_for("a", false), Brush::Neutral);
        assert_eq!(colors.assigned_count(), 0);
    }

    #[test]
    fn rekey_preserves_colour() {
        let mut colors = two_colour_assigner();
        colors.color_for("a", true);
        let before = colors.color_for("old", true);

        colors.rekey("old", "new");

        assert_eq!(colors.color_for("new", true), before);
        assert_eq!(colors.assigned_count(), 2);
    }

    #[test]
    fn clear_restarts_from_first_colour() {
        let mut colors = two_colour_assigner();
        let first = colors.color_for("a", true);
        colors.color_for("b", true);

        colors.clear();

        assert_eq!(colors.color_for("b", true), first);
    }
}
