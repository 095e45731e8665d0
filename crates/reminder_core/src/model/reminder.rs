//! Reminder domain model.
//!
//! # Responsibility
//! - Define the canonical reminder record (`id`, `text`, `date`).
//! - Validate text on every construction and edit path.
//!
//! # Invariants
//! - `id` is assigned by the store and immutable afterwards.
//! - `text` is never empty or whitespace-only.
//! - `date` has day precision; time-of-day is not representable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned reminder identifier.
///
/// Monotonically increasing within one store, starting at 1.
pub type ReminderId = u64;

/// Validation failures for reminder fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderValidationError {
    /// Text is empty after trimming whitespace.
    EmptyText,
}

impl Display for ReminderValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "reminder text must not be empty"),
        }
    }
}

impl Error for ReminderValidationError {}

/// One due-dated reminder.
///
/// Fields are read through accessors; only `text` can change after
/// creation, and only through [`Reminder::set_text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReminderWire")]
pub struct Reminder {
    id: ReminderId,
    text: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    date: NaiveDate,
}

/// Unvalidated serde shape, converted through `TryFrom`.
#[derive(Deserialize)]
struct ReminderWire {
    id: ReminderId,
    text: String,
    date: NaiveDate,
}

impl TryFrom<ReminderWire> for Reminder {
    type Error = ReminderValidationError;

    fn try_from(value: ReminderWire) -> Result<Self, Self::Error> {
        Self::new(value.id, value.text, value.date)
    }
}

impl Reminder {
    /// Creates a reminder with a caller-provided id.
    ///
    /// The store is the only production caller; ids passed here must be
    /// unique within the owning store.
    ///
    /// # Errors
    /// - `ReminderValidationError::EmptyText` when `text` is blank.
    pub fn new(
        id: ReminderId,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ReminderValidationError> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self { id, text, date })
    }

    pub fn id(&self) -> ReminderId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Replaces the text, leaving `id` and `date` untouched.
    ///
    /// On error the previous text is kept.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ReminderValidationError> {
        let text = text.into();
        validate_text(&text)?;
        self.text = text;
        Ok(())
    }

    /// Returns whether this reminder is due strictly before `today`.
    pub fn is_outdated(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

/// Checks the non-empty text rule shared by create and edit paths.
pub fn validate_text(text: &str) -> Result<(), ReminderValidationError> {
    if text.trim().is_empty() {
        return Err(ReminderValidationError::EmptyText);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_text, Reminder, ReminderValidationError};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
    }

    #[test]
    fn validate_text_rejects_whitespace_only() {
        assert_eq!(
            validate_text(" \t\n"),
            Err(ReminderValidationError::EmptyText)
        );
        assert!(validate_text(" x ").is_ok());
    }

    #[test]
    fn set_text_keeps_previous_value_on_error() {
        let mut reminder = Reminder::new(7, "call mom", day(5)).expect("valid reminder");
        let err = reminder.set_text("   ").unwrap_err();

        assert_eq!(err, ReminderValidationError::EmptyText);
        assert_eq!(reminder.text(), "call mom");
        assert_eq!(reminder.id(), 7);
        assert_eq!(reminder.date(), day(5));
    }

    #[test]
    fn outdated_is_strictly_before_today() {
        let reminder = Reminder::new(1, "x", day(5)).expect("valid reminder");
        assert!(reminder.is_outdated(day(6)));
        assert!(!reminder.is_outdated(day(5)));
        assert!(!reminder.is_outdated(day(4)));
    }
}
