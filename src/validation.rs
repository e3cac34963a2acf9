//! Input validation for section collections.
//!
//! Checks structural integrity of sections arriving from the import
//! boundary before they are handed to grid construction. Detects:
//! - Meeting times that do not sit on the half-hour axis
//! - Empty or inverted time ranges
//! - Patterns filed under a term the section is not active in
//! - Sections with no meeting patterns
//! - Patterns with no weekdays (schedulable nowhere)
//!
//! The core never repairs data: callers decide whether to skip an
//! offending section or surface the report to the user.

use crate::models::Section;
use crate::timeline;

/// Validation result: all detected issues, not just the first.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A meeting time is unparseable or off the half-hour axis.
    MalformedTime,
    /// A meeting's start does not precede its end.
    EmptyTimeRange,
    /// A pattern's term is missing from the section's terms set.
    TermNotOffered,
    /// A section has no meeting patterns at all.
    NoMeetings,
    /// A pattern has an empty days set and yields no occurrences.
    NoDays,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an imported section collection.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();

    for section in sections {
        if section.meetings.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoMeetings,
                format!("Section '{}' has no meeting patterns", section.code),
            ));
        }

        for pattern in &section.meetings {
            if !section.terms.contains(&pattern.term) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::TermNotOffered,
                    format!(
                        "Section '{}' has a {:?} pattern but is not active in that term",
                        section.code, pattern.term
                    ),
                ));
            }

            if pattern.days.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NoDays,
                    format!(
                        "Section '{}' has a pattern with no weekdays ({}-{})",
                        section.code, pattern.start_time, pattern.end_time
                    ),
                ));
            }

            match timeline::slot_range_of(&pattern.start_time, &pattern.end_time) {
                Ok(_) => {}
                Err(timeline::InvalidTimeError::EmptyRange { start, end }) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EmptyTimeRange,
                        format!(
                            "Section '{}': '{start}' does not precede '{end}'",
                            section.code
                        ),
                    ));
                }
                Err(err) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedTime,
                        format!("Section '{}': {err}", section.code),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
