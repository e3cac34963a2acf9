//! Meeting-time conflict detection.
//!
//! Decides whether a candidate section's occurrences collide with the
//! occurrences already committed to a worklist. The relation is an
//! existence test: the first overlap settles it. Callers that want the
//! set of conflicting sections would need an enumerating variant; the
//! add-form only needs the boolean.
//!
//! # Overlap Rule
//! Two occurrences conflict iff they share a weekday and a term and their
//! half-open slot ranges `[s1, e1)`, `[s2, e2)` satisfy
//! `s1 < e2 && s2 < e1`. Back-to-back meetings (`e1 == s2`) do not
//! conflict, so a section ending at 10:00 and one starting at 10:00 are
//! schedulable together.

use crate::models::Occurrence;

/// Whether any candidate occurrence overlaps any committed occurrence.
///
/// Symmetric in its arguments and short-circuiting. Term filtering has
/// already happened during expansion, but the per-occurrence term check
/// in [`Occurrence::overlaps`] keeps cross-term inputs inert regardless
/// of how the lists were assembled.
pub fn has_conflict(candidate: &[Occurrence<'_>], committed: &[Occurrence<'_>]) -> bool {
    candidate
        .iter()
        .any(|c| committed.iter().any(|s| c.overlaps(s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{expand, MeetingPattern, Section, Term, Weekday};

    fn section(code: &str, term: Term, day: Weekday, start: &str, end: &str) -> Section {
        Section::new(code).with_meeting(MeetingPattern::new(term, start, end).on(day))
    }

    #[test]
    fn test_overlapping_sections_conflict() {
        let a = section("A", Term::One, Weekday::Mon, "9:00", "10:30");
        let b = section("B", Term::One, Weekday::Mon, "10:00", "11:00");
        let a_occ = expand(&a, Term::One).unwrap();
        let b_occ = expand(&b, Term::One).unwrap();

        assert!(has_conflict(&b_occ, &a_occ));
    }

    #[test]
    fn test_back_to_back_never_conflicts() {
        let a = section("A", Term::One, Weekday::Mon, "9:00", "10:30");
        let c = section("C", Term::One, Weekday::Mon, "10:30", "11:30");
        let a_occ = expand(&a, Term::One).unwrap();
        let c_occ = expand(&c, Term::One).unwrap();

        assert!(!has_conflict(&c_occ, &a_occ));
    }

    #[test]
    fn test_symmetry() {
        let a = section("A", Term::One, Weekday::Wed, "13:00", "15:00");
        let b = section("B", Term::One, Weekday::Wed, "14:00", "16:00");
        let a_occ = expand(&a, Term::One).unwrap();
        let b_occ = expand(&b, Term::One).unwrap();

        assert_eq!(has_conflict(&a_occ, &b_occ), has_conflict(&b_occ, &a_occ));
        assert!(has_conflict(&a_occ, &b_occ));
    }

    #[test]
    fn test_different_days_do_not_conflict() {
        let a = section("A", Term::One, Weekday::Mon, "9:00", "10:00");
        let b = section("B", Term::One, Weekday::Tue, "9:00", "10:00");
        let a_occ = expand(&a, Term::One).unwrap();
        let b_occ = expand(&b, Term::One).unwrap();

        assert!(!has_conflict(&a_occ, &b_occ));
    }

    #[test]
    fn test_term_isolation() {
        // Identical weekday and time range, different terms.
        let a = section("A", Term::One, Weekday::Mon, "9:00", "10:00");
        let b = section("B", Term::Two, Weekday::Mon, "9:00", "10:00");
        let a_occ = expand(&a, Term::One).unwrap();
        let b_occ = expand(&b, Term::Two).unwrap();

        assert!(!has_conflict(&a_occ, &b_occ));
    }

    #[test]
    fn test_empty_lists() {
        let a = section("A", Term::One, Weekday::Mon, "9:00", "10:00");
        let a_occ = expand(&a, Term::One).unwrap();

        assert!(!has_conflict(&[], &a_occ));
        assert!(!has_conflict(&a_occ, &[]));
        assert!(!has_conflict(&[], &[]));
    }

    #[test]
    fn test_containment_conflicts() {
        let long = section("A", Term::One, Weekday::Fri, "9:00", "17:00");
        let short = section("B", Term::One, Weekday::Fri, "12:00", "12:30");
        let long_occ = expand(&long, Term::One).unwrap();
        let short_occ = expand(&short, Term::One).unwrap();

        assert!(has_conflict(&short_occ, &long_occ));
    }
}
