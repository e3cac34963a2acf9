//! Course timetable core.
//!
//! Converts a worklist of course sections into a render-ready weekly slot
//! grid and flags meeting-time conflicts between a candidate section and
//! the sections already committed. The calling layer (UI, storage,
//! import/export) owns section lifecycle and persistence; this crate is a
//! pure function library over the collection it is handed.
//!
//! # Modules
//!
//! - **`timeline`**: the fixed 07:00–20:00 half-hour slot axis and
//!   clock-string conversions
//! - **`models`**: `Section`, `MeetingPattern`, `Term`, `Weekday`, and
//!   derived `Occurrence` expansion
//! - **`conflict`**: half-open interval overlap between candidate and
//!   committed occurrences
//! - **`grid`**: `GridBuilder` — per-day grid-cell projection plus the
//!   conflict signal
//! - **`color`**: the color-assignment capability seam (opaque palettes)
//! - **`legacy`**: adapter normalizing old single-term-enum exports
//! - **`validation`**: integrity checks for imported section data
//!
//! # Design
//!
//! The core is synchronous, single-threaded, and stateless: every build
//! recomputes occurrences and cells from the current section collection,
//! so identical inputs give structurally identical output and there is
//! nothing to lock or invalidate. Conflict detection uses half-open slot
//! ranges — back-to-back meetings never conflict.

pub mod color;
pub mod conflict;
pub mod grid;
pub mod legacy;
pub mod models;
pub mod timeline;
pub mod validation;
