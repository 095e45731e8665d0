//! Environment-driven CLI settings.
//!
//! # Responsibility
//! - Resolve logging level and directory before the store is created.
//!
//! # Invariants
//! - Missing variables fall back to defaults; invalid ones are reported,
//!   never silently replaced.

use reminder_core::{default_log_level, LogLevel, LoggingError};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "REMINDERS_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "REMINDERS_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: LogLevel,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LoggingError> {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(raw) if !raw.trim().is_empty() => LogLevel::parse(&raw)?,
            _ => default_log_level(),
        };
        let log_dir = lookup(LOG_DIR_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { log_level, log_dir })
    }
}
