//! Color assignment capability.
//!
//! Grid construction treats `Section::color` as an opaque string assigned
//! upstream; this module defines the seam that assigns it. Palette and
//! theme management are orthogonal to interval geometry, so the assigner
//! is a supplied capability rather than an inline computation — conflict
//! logic and color logic evolve and test independently.

use std::collections::BTreeSet;

use crate::models::Section;

/// Picks display colors for sections.
pub trait ColorAssigner {
    /// Chooses a color for `section` given the sections already present
    /// on its worklist.
    fn color_for(&self, section: &Section, worklist_sections: &[Section]) -> String;
}

/// Deterministic palette cycle with parent-course grouping.
///
/// Sections sharing a [`course_key`](Section::course_key) with an
/// already-colored peer reuse that peer's color; otherwise the next
/// palette entry is chosen by the number of distinct course groups
/// already on the worklist. The color strings themselves are opaque —
/// themes supply whatever palette they like.
#[derive(Debug, Clone)]
pub struct CyclingPalette {
    colors: Vec<String>,
}

impl CyclingPalette {
    /// Creates a palette from theme-supplied color strings.
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }
}

impl ColorAssigner for CyclingPalette {
    fn color_for(&self, section: &Section, worklist_sections: &[Section]) -> String {
        if let Some(peer) = worklist_sections
            .iter()
            .find(|s| s.course_key() == section.course_key() && !s.color.is_empty())
        {
            return peer.color.clone();
        }
        if self.colors.is_empty() {
            return String::new();
        }
        let groups: BTreeSet<&str> = worklist_sections.iter().map(Section::course_key).collect();
        self.colors[groups.len() % self.colors.len()].clone()
    }
}

/// Recolors a whole collection in place, worklist by worklist.
///
/// Each section is colored against the sections preceding it on the same
/// worklist, so repeated calls with the same assigner and ordering are
/// idempotent.
pub fn assign_colors<A: ColorAssigner>(sections: &mut [Section], assigner: &A) {
    for i in 0..sections.len() {
        let peers: Vec<Section> = sections[..i]
            .iter()
            .filter(|s| s.worklist == sections[i].worklist)
            .cloned()
            .collect();
        let color = assigner.color_for(&sections[i], &peers);
        sections[i].color = color;
    }
}
