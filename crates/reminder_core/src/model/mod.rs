//! Domain model for date-ordered reminders.
//!
//! # Responsibility
//! - Define the reminder record owned by the store.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every reminder is identified by a `ReminderId` that is never reused.
//! - Reminder dates carry day precision only.

pub mod reminder;
