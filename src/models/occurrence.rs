//! Occurrence expansion: from weekly meeting patterns to concrete
//! per-day slot intervals.
//!
//! An [`Occurrence`] is derived data — it borrows its owning section and
//! is recomputed from the section collection on every build, never stored.
//! That keeps the scheduling core stateless: the same inputs always expand
//! to the same occurrences.

use serde::Serialize;

use crate::models::{Section, Term, Weekday};
use crate::timeline::{self, InvalidTimeError};

/// One weekly occurrence of a section on a specific day.
///
/// Spans the half-open slot range `[start_slot, end_slot)` on the
/// 07:00–20:00 axis. Invariant: `start_slot < end_slot`, both within
/// the axis (enforced by [`expand`]).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Occurrence<'a> {
    /// The owning section.
    pub section: &'a Section,
    /// Weekday this occurrence falls on.
    pub day: Weekday,
    /// Term this occurrence is active in.
    pub term: Term,
    /// First occupied slot (inclusive).
    pub start_slot: u8,
    /// Past-the-end slot (exclusive).
    pub end_slot: u8,
}

impl<'a> Occurrence<'a> {
    /// Number of half-hour slots this occurrence covers.
    #[inline]
    pub fn duration_slots(&self) -> u8 {
        self.end_slot - self.start_slot
    }

    /// Whether two occurrences collide: same day, same term, and
    /// half-open slot ranges intersecting. Back-to-back occurrences
    /// share only a boundary and do not overlap.
    pub fn overlaps(&self, other: &Occurrence<'_>) -> bool {
        self.day == other.day
            && self.term == other.term
            && self.start_slot < other.end_slot
            && other.start_slot < self.end_slot
    }
}

/// Expands a section into its occurrences for one term.
///
/// Only patterns whose term matches `term` contribute; each weekday in a
/// matching pattern yields one occurrence with the pattern's slot range.
/// A pattern with no days contributes nothing. Output order is
/// deterministic: pattern order, then weekday order within a pattern.
///
/// Malformed meeting times surface as [`InvalidTimeError`]; nothing is
/// returned for a section whose data fails to convert.
pub fn expand(section: &Section, term: Term) -> Result<Vec<Occurrence<'_>>, InvalidTimeError> {
    let mut occurrences = Vec::new();
    for pattern in &section.meetings {
        if pattern.term != term {
            continue;
        }
        let (start_slot, end_slot) =
            timeline::slot_range_of(&pattern.start_time, &pattern.end_time)?;
        for &day in &pattern.days {
            occurrences.push(Occurrence {
                section,
                day,
                term,
                start_slot,
                end_slot,
            });
        }
    }
    Ok(occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeetingPattern;

    fn two_term_section() -> Section {
        Section::new("CHEM 121 101")
            .with_meeting(
                MeetingPattern::new(Term::One, "9:00", "10:30")
                    .on_days([Weekday::Mon, Weekday::Wed, Weekday::Fri]),
            )
            .with_meeting(MeetingPattern::new(Term::Two, "14:00", "15:00").on(Weekday::Tue))
    }

    #[test]
    fn test_expand_filters_by_term() {
        let section = two_term_section();

        let first = expand(&section, Term::One).unwrap();
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|o| o.term == Term::One));
        assert!(first.iter().all(|o| o.start_slot == 4 && o.end_slot == 7));

        let second = expand(&section, Term::Two).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].day, Weekday::Tue);
        assert_eq!(second[0].start_slot, 14);
        assert_eq!(second[0].end_slot, 16);
    }

    #[test]
    fn test_expand_keeps_owner_reference() {
        let section = two_term_section();
        let occurrences = expand(&section, Term::One).unwrap();
        assert!(occurrences.iter().all(|o| o.section.code == section.code));
    }

    #[test]
    fn test_expand_empty_days() {
        let section =
            Section::new("THTR 120 001").with_meeting(MeetingPattern::new(Term::One, "9:00", "10:00"));
        assert!(expand(&section, Term::One).unwrap().is_empty());
    }

    #[test]
    fn test_expand_propagates_bad_times() {
        let section = Section::new("BAD 100")
            .with_meeting(MeetingPattern::new(Term::One, "9:15", "10:00").on(Weekday::Mon));
        assert!(matches!(
            expand(&section, Term::One),
            Err(InvalidTimeError::OffAxis(_))
        ));

        let inverted = Section::new("BAD 200")
            .with_meeting(MeetingPattern::new(Term::One, "11:00", "10:00").on(Weekday::Mon));
        assert!(matches!(
            expand(&inverted, Term::One),
            Err(InvalidTimeError::EmptyRange { .. })
        ));
    }

    #[test]
    fn test_overlap_rule() {
        let section = two_term_section();
        let base = Occurrence {
            section: &section,
            day: Weekday::Mon,
            term: Term::One,
            start_slot: 4,
            end_slot: 7,
        };

        let overlapping = Occurrence { start_slot: 6, end_slot: 8, ..base };
        assert!(base.overlaps(&overlapping));
        assert!(overlapping.overlaps(&base));

        let back_to_back = Occurrence { start_slot: 7, end_slot: 9, ..base };
        assert!(!base.overlaps(&back_to_back));

        let other_day = Occurrence { day: Weekday::Tue, ..base };
        assert!(!base.overlaps(&other_day));

        let other_term = Occurrence { term: Term::Two, ..base };
        assert!(!base.overlaps(&other_term));
    }

    #[test]
    fn test_duration() {
        let section = two_term_section();
        let occurrences = expand(&section, Term::One).unwrap();
        assert_eq!(occurrences[0].duration_slots(), 3); // 9:00-10:30
    }
}
