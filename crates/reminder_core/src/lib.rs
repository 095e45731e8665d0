//! Core domain logic for the reminder manager.
//! This crate owns the date-ordering invariants; front ends only call in.

pub mod clock;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogLevel, LoggingConfig,
    LoggingError,
};
pub use model::reminder::{Reminder, ReminderId, ReminderValidationError};
pub use service::reminder_service::ReminderService;
pub use store::reminder_store::{Agenda, ReminderStore, StoreError, StoreErrorKind, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
