//! Date-ordered reminder store.
//!
//! # Responsibility
//! - Own the sorted reminder sequence and the id counter.
//! - Provide insert, window query, outdated removal and id-keyed edits.
//!
//! # Invariants
//! - Sequence is sorted by `date` ascending.
//! - Equal dates keep insertion order: a new record lands after every
//!   existing record with the same date.
//! - "Today" always comes from the injected `Clock`.

use crate::clock::Clock;
use crate::model::reminder::{validate_text, Reminder, ReminderId, ReminderValidationError};
use chrono::{Days, NaiveDate};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No reminder with this id exists (never inserted or already removed).
    NotFound(ReminderId),
    /// Reminder text failed validation.
    Validation(ReminderValidationError),
    /// Window day count was below 1.
    InvalidWindow { days: i64 },
}

/// Coarse error category for callers that only branch on condition kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    NotFound,
    InvalidArgument,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::NotFound(_) => StoreErrorKind::NotFound,
            Self::Validation(_) | Self::InvalidWindow { .. } => StoreErrorKind::InvalidArgument,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "reminder not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::InvalidWindow { days } => {
                write!(f, "day count must be at least 1, got {days}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::InvalidWindow { .. } => None,
        }
    }
}

impl From<ReminderValidationError> for StoreError {
    fn from(value: ReminderValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Snapshot split at the outdated prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    /// Records dated strictly before today, ascending.
    pub outdated: Vec<Reminder>,
    /// Records dated today or later, ascending.
    pub upcoming: Vec<Reminder>,
}

impl Agenda {
    pub fn is_empty(&self) -> bool {
        self.outdated.is_empty() && self.upcoming.is_empty()
    }
}

/// Sorted reminder collection bound to one clock.
#[derive(Debug)]
pub struct ReminderStore<C: Clock> {
    reminders: Vec<Reminder>,
    next_id: ReminderId,
    clock: C,
}

impl<C: Clock> ReminderStore<C> {
    /// Creates an empty store. The first assigned id is 1.
    pub fn new(clock: C) -> Self {
        Self {
            reminders: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Inserts a new reminder and returns its freshly assigned id.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `text` is blank; no id is consumed.
    pub fn insert(&mut self, text: impl Into<String>, date: NaiveDate) -> StoreResult<ReminderId> {
        let reminder = Reminder::new(self.next_id, text, date)?;
        let id = reminder.id();
        self.next_id += 1;

        let index = self.reminders.partition_point(|existing| existing.date() <= date);
        self.reminders.insert(index, reminder);

        debug!(
            "event=reminder_insert module=store status=ok id={} date={} index={} len={}",
            id,
            date,
            index,
            self.reminders.len()
        );
        Ok(id)
    }

    /// Returns reminders dated in `[today, today + days_ahead)`, ascending.
    ///
    /// Runs two binary searches plus a copy of the matched slice.
    ///
    /// # Errors
    /// - `StoreError::InvalidWindow` when `days_ahead < 1`.
    pub fn window(&self, days_ahead: i64) -> StoreResult<Vec<Reminder>> {
        if days_ahead < 1 {
            return Err(StoreError::InvalidWindow { days: days_ahead });
        }

        let today = self.clock.today();
        let start = self.lower_bound(today);
        // Past the last representable date the window has no upper edge.
        let end = u64::try_from(days_ahead)
            .ok()
            .and_then(|days| today.checked_add_days(Days::new(days)))
            .map_or(self.reminders.len(), |border| self.lower_bound(border));

        Ok(self.reminders[start..end].to_vec())
    }

    /// Reminders dated today.
    pub fn today(&self) -> Vec<Reminder> {
        let today = self.clock.today();
        let start = self.lower_bound(today);
        let end = start + self.reminders[start..].partition_point(|r| r.date() == today);
        self.reminders[start..end].to_vec()
    }

    /// Number of leading reminders dated strictly before today.
    pub fn count_outdated(&self) -> usize {
        self.lower_bound(self.clock.today())
    }

    /// Removes the outdated prefix and returns how many records were dropped.
    pub fn remove_outdated(&mut self) -> usize {
        let outdated = self.count_outdated();
        self.reminders.drain(..outdated);

        debug!(
            "event=reminder_remove_outdated module=store status=ok removed={} len={}",
            outdated,
            self.reminders.len()
        );
        outdated
    }

    /// Removes one reminder by id.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no reminder has this id.
    pub fn remove_by_id(&mut self, id: ReminderId) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.reminders.remove(index);

        debug!(
            "event=reminder_remove module=store status=ok id={} len={}",
            id,
            self.reminders.len()
        );
        Ok(())
    }

    /// Replaces the text of one reminder; id and date stay as they are.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `text` is blank (checked first).
    /// - `StoreError::NotFound` when no reminder has this id.
    pub fn edit_text(&mut self, id: ReminderId, text: impl Into<String>) -> StoreResult<()> {
        let text = text.into();
        validate_text(&text)?;
        let index = self.index_of(id)?;
        self.reminders[index].set_text(text)?;

        debug!("event=reminder_edit module=store status=ok id={}", id);
        Ok(())
    }

    /// Returns a copy of one reminder.
    pub fn get(&self, id: ReminderId) -> Option<Reminder> {
        self.reminders.iter().find(|r| r.id() == id).cloned()
    }

    /// Copy of the full sorted sequence.
    pub fn snapshot(&self) -> Vec<Reminder> {
        self.reminders.clone()
    }

    /// Snapshot split into outdated and upcoming parts.
    pub fn agenda(&self) -> Agenda {
        let (outdated, upcoming) = self.reminders.split_at(self.count_outdated());
        Agenda {
            outdated: outdated.to_vec(),
            upcoming: upcoming.to_vec(),
        }
    }

    /// First index whose date is not before `date`.
    fn lower_bound(&self, date: NaiveDate) -> usize {
        self.reminders.partition_point(|r| r.date() < date)
    }

    fn index_of(&self, id: ReminderId) -> StoreResult<usize> {
        self.reminders
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| {
                debug!("event=reminder_lookup module=store status=not_found id={}", id);
                StoreError::NotFound(id)
            })
    }
}
