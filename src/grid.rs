//! Weekly grid construction.
//!
//! Projects a worklist's committed sections — plus, while the add-form is
//! open, one not-yet-committed candidate — onto per-day columns of
//! [`GridCell`]s aligned to the 07:00–20:00 slot axis, and flags whether
//! the candidate collides with anything already committed.
//!
//! # Algorithm
//!
//! 1. Keep committed sections matching the worklist and active in the term.
//! 2. Expand survivors into occurrences for that term.
//! 3. Expand the candidate the same way, tagged as candidate.
//! 4. Test the candidate group against the committed group for overlap.
//! 5. Project every occurrence into a cell carrying the owner's color
//!    and label.
//! 6. Group cells by weekday, ordered by start slot within a column.
//!
//! The candidate is placed on the grid even when it conflicts — the user
//! sees what the collision looks like; the boolean gates the add action.
//! Overlapping cells in one column are both retained; visual stacking is
//! the renderer's concern.
//!
//! # Complexity
//! O(c · k) occurrence pairs for conflict testing plus a per-column sort,
//! where c = candidate occurrences and k = committed occurrences. Both are
//! small bounded counts in practice.

use serde::Serialize;

use crate::conflict::has_conflict;
use crate::models::{expand, Section, Term, Weekday};
use crate::timeline::InvalidTimeError;

/// One visually contiguous occurrence block in a day column.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridCell<'a> {
    /// Column this cell belongs to.
    pub day: Weekday,
    /// First occupied slot (inclusive).
    pub start_slot: u8,
    /// Past-the-end slot (exclusive).
    pub end_slot: u8,
    /// The owning section.
    pub section: &'a Section,
    /// Whether this cell belongs to the previewed candidate rather than
    /// a committed section.
    pub candidate: bool,
}

impl<'a> GridCell<'a> {
    /// Text shown in the cell: the section's title, or its code when the
    /// title is empty.
    pub fn label(&self) -> &'a str {
        self.section.display_label()
    }

    /// Cell background color, opaque to this crate.
    pub fn color(&self) -> &'a str {
        &self.section.color
    }

    /// Number of half-hour slots the cell spans.
    #[inline]
    pub fn span(&self) -> u8 {
        self.end_slot - self.start_slot
    }
}

/// Render-ready weekly grid: one ordered cell sequence per weekday column.
#[derive(Debug, Clone, Serialize)]
pub struct WeekGrid<'a> {
    columns: [Vec<GridCell<'a>>; 5],
}

impl<'a> WeekGrid<'a> {
    fn new() -> Self {
        Self {
            columns: Default::default(),
        }
    }

    fn push(&mut self, cell: GridCell<'a>) {
        self.columns[cell.day.index()].push(cell);
    }

    /// Stable per-column order: start slot ascending. Ties keep insertion
    /// order, so committed cells precede the candidate's.
    fn sort_columns(&mut self) {
        for column in &mut self.columns {
            column.sort_by_key(|cell| cell.start_slot);
        }
    }

    /// Cells of one day column, ordered by start slot.
    pub fn column(&self, day: Weekday) -> &[GridCell<'a>] {
        &self.columns[day.index()]
    }

    /// Iterates columns in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[GridCell<'a>])> {
        Weekday::ALL.into_iter().map(|day| (day, self.column(day)))
    }

    /// Whether no cell exists on any day.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    /// Total cell count across all columns.
    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// Result of one grid build.
#[derive(Debug, Clone, Serialize)]
pub struct GridOutput<'a> {
    /// The render-ready grid, candidate cells included.
    pub grid: WeekGrid<'a>,
    /// Whether the candidate collides with a committed section. Always
    /// `false` when no candidate was supplied.
    pub conflict: bool,
}

/// Builds weekly grids from a section collection.
///
/// Stateless and side-effect-free: every [`build`](GridBuilder::build)
/// recomputes from its inputs, so identical inputs always produce
/// structurally identical output. Re-invocation policy (on every section
/// or term change, debounced or not) belongs to the caller.
///
/// # Example
///
/// ```
/// use course_grid::grid::GridBuilder;
/// use course_grid::models::{MeetingPattern, Section, Term, Weekday};
///
/// let committed = vec![Section::new("CPSC 110 101")
///     .with_meeting(MeetingPattern::new(Term::One, "9:00", "10:30").on(Weekday::Mon))];
/// let candidate = Section::new("MATH 100 102")
///     .with_meeting(MeetingPattern::new(Term::One, "10:00", "11:00").on(Weekday::Mon));
///
/// let output = GridBuilder::new()
///     .build(&committed, Some(&candidate), 0, Term::One)
///     .unwrap();
/// assert!(output.conflict);
/// assert_eq!(output.grid.column(Weekday::Mon).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridBuilder;

impl GridBuilder {
    /// Creates a builder.
    pub fn new() -> Self {
        Self
    }

    /// Builds the grid for one worklist and term.
    ///
    /// `committed` may span several worklists and terms; only sections on
    /// `worklist` and active in `term` contribute. The optional `candidate`
    /// is the in-progress section previewed by the add-form; it bypasses
    /// the worklist filter (it has not been committed to one yet) and is
    /// expanded for `term` like everything else.
    ///
    /// Zero matching sections yield an empty grid, not an error. Malformed
    /// meeting times surface as [`InvalidTimeError`] before any output is
    /// produced.
    pub fn build<'a>(
        &self,
        committed: &'a [Section],
        candidate: Option<&'a Section>,
        worklist: u32,
        term: Term,
    ) -> Result<GridOutput<'a>, InvalidTimeError> {
        let mut committed_occurrences = Vec::new();
        for section in committed
            .iter()
            .filter(|s| s.worklist == worklist && s.is_active_in(term))
        {
            committed_occurrences.extend(expand(section, term)?);
        }

        let candidate_occurrences = match candidate {
            Some(section) => expand(section, term)?,
            None => Vec::new(),
        };

        let conflict = has_conflict(&candidate_occurrences, &committed_occurrences);

        let mut grid = WeekGrid::new();
        for occurrence in &committed_occurrences {
            grid.push(GridCell {
                day: occurrence.day,
                start_slot: occurrence.start_slot,
                end_slot: occurrence.end_slot,
                section: occurrence.section,
                candidate: false,
            });
        }
        for occurrence in &candidate_occurrences {
            grid.push(GridCell {
                day: occurrence.day,
                start_slot: occurrence.start_slot,
                end_slot: occurrence.end_slot,
                section: occurrence.section,
                candidate: true,
            });
        }
        grid.sort_columns();

        Ok(GridOutput { grid, conflict })
    }
}
