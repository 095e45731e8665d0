//! Shared reminder service.
//!
//! # Responsibility
//! - Guard one `ReminderStore` behind a single exclusive lock.
//! - Provide `&self` entry points usable from several threads via `Arc`.
//!
//! # Invariants
//! - Every public call takes the lock exactly once and never blocks on I/O.
//! - Service APIs never bypass store validation.

use crate::clock::{Clock, SystemClock};
use crate::model::reminder::{Reminder, ReminderId};
use crate::store::reminder_store::{Agenda, ReminderStore, StoreResult};
use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialized facade over one reminder store.
#[derive(Debug)]
pub struct ReminderService<C: Clock = SystemClock> {
    store: Mutex<ReminderStore<C>>,
}

impl ReminderService<SystemClock> {
    /// Service reading "today" from the local wall clock.
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ReminderService<C> {
    /// Creates a service owning an empty store bound to `clock`.
    pub fn new(clock: C) -> Self {
        Self::from_store(ReminderStore::new(clock))
    }

    /// Wraps an existing store.
    pub fn from_store(store: ReminderStore<C>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Consumes the service and returns the inner store.
    pub fn into_store(self) -> ReminderStore<C> {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, text: impl Into<String>, date: NaiveDate) -> StoreResult<ReminderId> {
        self.lock().insert(text, date)
    }

    /// Reminders due in the next `days_ahead` days, starting today.
    pub fn for_days(&self, days_ahead: i64) -> StoreResult<Vec<Reminder>> {
        self.lock().window(days_ahead)
    }

    pub fn today(&self) -> Vec<Reminder> {
        self.lock().today()
    }

    pub fn count_outdated(&self) -> usize {
        self.lock().count_outdated()
    }

    pub fn remove_outdated(&self) -> usize {
        self.lock().remove_outdated()
    }

    pub fn remove(&self, id: ReminderId) -> StoreResult<()> {
        self.lock().remove_by_id(id)
    }

    pub fn edit(&self, id: ReminderId, text: impl Into<String>) -> StoreResult<()> {
        self.lock().edit_text(id, text)
    }

    pub fn get(&self, id: ReminderId) -> Option<Reminder> {
        self.lock().get(id)
    }

    pub fn snapshot(&self) -> Vec<Reminder> {
        self.lock().snapshot()
    }

    /// Outdated and upcoming reminders read under one lock.
    pub fn agenda(&self) -> Agenda {
        self.lock().agenda()
    }

    /// Current day according to the store clock.
    pub fn current_day(&self) -> NaiveDate {
        self.lock().clock().today()
    }

    fn lock(&self) -> MutexGuard<'_, ReminderStore<C>> {
        // Store mutations are single Vec operations, so a panic elsewhere
        // cannot leave the sequence unsorted.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ReminderService<SystemClock> {
    fn default() -> Self {
        Self::with_system_clock()
    }
}
