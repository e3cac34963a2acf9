//! Course section and meeting-pattern models.
//!
//! A [`Section`] is one offering a student has added to a worklist. It
//! carries display metadata (code, name, instructors, color) and one or
//! more [`MeetingPattern`]s describing when it meets each week.
//!
//! # Term Representation
//! `terms` is a set: a section active in the whole winter session is a
//! member of both terms, never a sentinel value. Term filtering is plain
//! set membership everywhere downstream. Records from older exports that
//! still use a single-enum encoding go through
//! [`legacy`](crate::legacy) before they reach this model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Academic term within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    /// First term (e.g. September–December).
    One,
    /// Second term (e.g. January–April).
    Two,
}

/// Weekday column on the grid. Weekend meetings are outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in column order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Column index on the weekly grid.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

/// One recurring weekly meeting of a section.
///
/// Each weekday in `days` is an independent occurrence sharing the
/// pattern's time range. `location` and `date_range` are display-only:
/// conflict logic sees day-of-week and term, not calendar sub-ranges,
/// so two patterns on disjoint date ranges within the same term still
/// collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingPattern {
    /// Term this pattern is active in.
    pub term: Term,
    /// Weekdays the meeting repeats on.
    pub days: BTreeSet<Weekday>,
    /// Wall-clock start on the half-hour axis (e.g. `"9:00"`).
    pub start_time: String,
    /// Wall-clock end, strictly after `start_time`.
    pub end_time: String,
    /// Meeting room, display only.
    #[serde(default)]
    pub location: Option<String>,
    /// Calendar date range, display only.
    #[serde(default)]
    pub date_range: Option<String>,
}

impl MeetingPattern {
    /// Creates a pattern with no days yet.
    pub fn new(term: Term, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            term,
            days: BTreeSet::new(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: None,
            date_range: None,
        }
    }

    /// Adds a weekday.
    pub fn on(mut self, day: Weekday) -> Self {
        self.days.insert(day);
        self
    }

    /// Adds several weekdays.
    pub fn on_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.days.extend(days);
        self
    }

    /// Sets the meeting location.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the display date range.
    pub fn with_date_range(mut self, range: impl Into<String>) -> Self {
        self.date_range = Some(range.into());
        self
    }
}

/// A course section on a student's worklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section code, e.g. `"CPSC 110 101"`.
    pub code: String,
    /// Course title, display only.
    pub name: String,
    /// Instructor names, display only.
    pub instructors: Vec<String>,
    /// Session identifier, e.g. `"2024W"`. Opaque to the scheduler.
    pub session: String,
    /// Terms this section is active in. Cardinality 2 means whole session.
    pub terms: BTreeSet<Term>,
    /// Weekly meeting patterns; a section may meet differently per term.
    pub meetings: Vec<MeetingPattern>,
    /// Worklist this section belongs to. Builds never mix worklists.
    pub worklist: u32,
    /// Assigned display color, opaque. See [`color`](crate::color).
    #[serde(default)]
    pub color: String,
    /// Stable identifier shared by sections of the same parent course.
    /// Used for color grouping, never for conflict detection.
    #[serde(default)]
    pub course_id: Option<String>,
}

impl Section {
    /// Creates a section with the given code, on worklist 0.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            instructors: Vec::new(),
            session: String::new(),
            terms: BTreeSet::new(),
            meetings: Vec::new(),
            worklist: 0,
            color: String::new(),
            course_id: None,
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructors.push(instructor.into());
        self
    }

    /// Sets the session identifier.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Marks the section active in a term.
    pub fn in_term(mut self, term: Term) -> Self {
        self.terms.insert(term);
        self
    }

    /// Adds a meeting pattern and registers its term as active.
    pub fn with_meeting(mut self, pattern: MeetingPattern) -> Self {
        self.terms.insert(pattern.term);
        self.meetings.push(pattern);
        self
    }

    /// Sets the owning worklist.
    pub fn on_worklist(mut self, worklist: u32) -> Self {
        self.worklist = worklist;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the parent-course identifier.
    pub fn with_course_id(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Whether this section is active in `term`. Pure set membership —
    /// a whole-session section passes for either value.
    #[inline]
    pub fn is_active_in(&self, term: Term) -> bool {
        self.terms.contains(&term)
    }

    /// Whether this section spans the whole session.
    pub fn spans_both_terms(&self) -> bool {
        self.terms.len() == 2
    }

    /// Grouping key for color assignment: the parent course when known,
    /// otherwise the section's own code.
    pub fn course_key(&self) -> &str {
        self.course_id.as_deref().unwrap_or(&self.code)
    }

    /// Grid label: the title when present, otherwise the code.
    pub fn display_label(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}
