//! Fixed time axis for the weekly grid.
//!
//! The scheduling day runs 07:00–20:00 in 30-minute slots. Slot 0 is the
//! 07:00 boundary, each increment advances 30 minutes, and slot 26 is the
//! 20:00 boundary. Meeting occurrences span half-open slot ranges
//! `[start, end)`, so an occurrence ending on a boundary leaves that
//! boundary free for the next one.
//!
//! Clock times arrive as wall-clock strings (`"9:00"`, `"13:30"`); anything
//! that is not a half-hour boundary inside the axis is rejected rather than
//! silently snapped, so malformed upstream data surfaces at the ingestion
//! point instead of misplacing a cell.

use thiserror::Error;

/// Minutes covered by one slot.
pub const SLOT_MINUTES: u32 = 30;
/// Axis start (07:00) in minutes since midnight.
pub const AXIS_START_MIN: u32 = 7 * 60;
/// Axis end (20:00) in minutes since midnight.
pub const AXIS_END_MIN: u32 = 20 * 60;
/// Highest valid slot index — the 20:00 boundary.
pub const LAST_SLOT: u8 = ((AXIS_END_MIN - AXIS_START_MIN) / SLOT_MINUTES) as u8;

/// A time that cannot be placed on the fixed half-hour axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTimeError {
    /// The string does not parse as `H:MM` / `HH:MM`.
    #[error("unparseable time '{0}': expected H:MM or HH:MM")]
    Unparseable(String),
    /// The instant parses but is not a half-hour boundary within 07:00–20:00.
    #[error("time '{0}' is off the axis: must be a half-hour boundary between 07:00 and 20:00")]
    OffAxis(String),
    /// A meeting range whose start does not precede its end.
    #[error("empty time range: '{start}' does not precede '{end}'")]
    EmptyRange { start: String, end: String },
    /// A slot index past the 20:00 boundary.
    #[error("slot {0} is out of range on the 07:00-20:00 axis")]
    SlotOutOfRange(u8),
}

/// Converts a wall-clock string to its slot index.
///
/// Accepts `"7:00"` and `"07:00"` alike. Fails with [`InvalidTimeError`]
/// when the string is unparseable or the instant is off the axis.
pub fn slot_of(time: &str) -> Result<u8, InvalidTimeError> {
    let (hours, minutes) = parse_clock(time)?;
    if minutes % SLOT_MINUTES != 0 {
        return Err(InvalidTimeError::OffAxis(time.to_string()));
    }
    let total = hours * 60 + minutes;
    if !(AXIS_START_MIN..=AXIS_END_MIN).contains(&total) {
        return Err(InvalidTimeError::OffAxis(time.to_string()));
    }
    Ok(((total - AXIS_START_MIN) / SLOT_MINUTES) as u8)
}

/// Converts a slot index back to its wall-clock label.
///
/// Inverse of [`slot_of`]. Hours are not zero-padded (`"7:00"`, `"13:30"`),
/// matching the labels the axis is rendered with.
pub fn time_of(slot: u8) -> Result<String, InvalidTimeError> {
    if slot > LAST_SLOT {
        return Err(InvalidTimeError::SlotOutOfRange(slot));
    }
    Ok(label_for(slot))
}

/// Converts a meeting's start/end pair to a half-open slot range.
///
/// Enforces `start < end`; a zero-length or inverted range is
/// [`InvalidTimeError::EmptyRange`].
pub fn slot_range_of(start: &str, end: &str) -> Result<(u8, u8), InvalidTimeError> {
    let start_slot = slot_of(start)?;
    let end_slot = slot_of(end)?;
    if start_slot >= end_slot {
        return Err(InvalidTimeError::EmptyRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start_slot, end_slot))
}

/// All 27 boundary labels in axis order, for rendering the time column.
pub fn axis_labels() -> Vec<String> {
    (0..=LAST_SLOT).map(label_for).collect()
}

fn label_for(slot: u8) -> String {
    let total = AXIS_START_MIN + slot as u32 * SLOT_MINUTES;
    format!("{}:{:02}", total / 60, total % 60)
}

fn parse_clock(time: &str) -> Result<(u32, u32), InvalidTimeError> {
    let unparseable = || InvalidTimeError::Unparseable(time.to_string());
    let (hh, mm) = time.trim().split_once(':').ok_or_else(unparseable)?;
    if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
        return Err(unparseable());
    }
    let hours: u32 = hh.parse().map_err(|_| unparseable())?;
    let minutes: u32 = mm.parse().map_err(|_| unparseable())?;
    if minutes >= 60 {
        return Err(unparseable());
    }
    Ok((hours, minutes))
}
