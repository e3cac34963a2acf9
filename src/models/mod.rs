//! Domain models for the weekly timetable.
//!
//! [`Section`] and [`MeetingPattern`] are the stored representation a
//! caller maintains; [`Occurrence`] is the derived per-day interval the
//! scheduling core actually reasons about.

mod occurrence;
mod section;

pub use occurrence::{expand, Occurrence};
pub use section::{MeetingPattern, Section, Term, Weekday};
