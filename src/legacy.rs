//! Versioned-input adapter for records exported before the set-based
//! term representation.
//!
//! Older exports encode a section's term as a single enum with a
//! whole-winter sentinel ([`LegacyTerm::WinterFull`]). The adapter
//! normalizes such records into the current [`Section`] model — a terms
//! set, with cardinality 2 standing for "whole session" — before they
//! reach any scheduling code. Nothing downstream of this module ever
//! sees the sentinel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{MeetingPattern, Section, Term, Weekday};

/// Term encoding used by pre-set-representation exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegacyTerm {
    One,
    Two,
    /// Sentinel: active in both terms of the winter session.
    WinterFull,
}

impl LegacyTerm {
    /// The equivalent term set.
    pub fn to_terms(self) -> BTreeSet<Term> {
        match self {
            LegacyTerm::One => BTreeSet::from([Term::One]),
            LegacyTerm::Two => BTreeSet::from([Term::Two]),
            LegacyTerm::WinterFull => BTreeSet::from([Term::One, Term::Two]),
        }
    }
}

/// Meeting pattern as stored by older exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyMeetingPattern {
    pub term: LegacyTerm,
    pub days: BTreeSet<Weekday>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date_range: Option<String>,
}

/// Section record as stored by older exports: one term enum, no set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySection {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub instructors: Vec<String>,
    #[serde(default)]
    pub session: String,
    pub term: LegacyTerm,
    pub meetings: Vec<LegacyMeetingPattern>,
    #[serde(default)]
    pub worklist: u32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub course_id: Option<String>,
}

/// Normalizes one legacy record into the current model.
///
/// A `WinterFull` meeting pattern becomes one pattern per term with the
/// same days and times, so occurrence expansion stays a plain equality
/// filter with no sentinel case.
pub fn migrate(legacy: LegacySection) -> Section {
    let mut section = Section {
        code: legacy.code,
        name: legacy.name,
        instructors: legacy.instructors,
        session: legacy.session,
        terms: legacy.term.to_terms(),
        meetings: Vec::new(),
        worklist: legacy.worklist,
        color: legacy.color,
        course_id: legacy.course_id,
    };
    for pattern in legacy.meetings {
        for &term in pattern.term.to_terms().iter() {
            let mut meeting =
                MeetingPattern::new(term, pattern.start_time.as_str(), pattern.end_time.as_str())
                    .on_days(pattern.days.iter().copied());
            meeting.location = pattern.location.clone();
            meeting.date_range = pattern.date_range.clone();
            section.terms.insert(term);
            section.meetings.push(meeting);
        }
    }
    section
}

/// Normalizes a whole exported collection.
pub fn migrate_all(legacy: Vec<LegacySection>) -> Vec<Section> {
    legacy.into_iter().map(migrate).collect()
}
