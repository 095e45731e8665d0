//! Ordered in-memory reminder storage.
//!
//! # Responsibility
//! - Keep reminders sorted by date under every mutation.
//! - Answer date-window and outdated-prefix queries by binary search.
//!
//! # Invariants
//! - The backing sequence is sorted by `date` ascending between calls.
//! - Ids are unique and never reused within one store.
//! - Failed operations leave the store unchanged.

pub mod reminder_store;
