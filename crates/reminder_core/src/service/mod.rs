//! Core use-case services.
//!
//! # Responsibility
//! - Expose store operations to callers that share one store.
//! - Serialize access so every operation observes a sorted sequence.

pub mod reminder_service;
