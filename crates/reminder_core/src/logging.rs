//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start one size-rotated file logger per process.
//! - Keep store diagnostics metadata-only (`key=value`, no reminder text).
//!
//! # Invariants
//! - Initialization is idempotent for an identical config.
//! - A second init with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "reminders";
const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_KEPT_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: LogLevel,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parses a case-insensitive level name; `warning` is accepted for `warn`.
    pub fn parse(value: &str) -> Result<Self, LoggingError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::UnsupportedLevel(other.to_string())),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging bootstrap failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyLogDir,
    RelativeLogDir(String),
    CreateDir { dir: PathBuf, message: String },
    Backend(String),
    AlreadyInitialized { field: &'static str, active: String, requested: String },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(value) => {
                write!(f, "log_dir must be an absolute path, got `{value}`")
            }
            Self::CreateDir { dir, message } => write!(
                f,
                "failed to create log directory `{}`: {message}",
                dir.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
            Self::AlreadyInitialized {
                field,
                active,
                requested,
            } => write!(
                f,
                "logging already initialized with {field} `{active}`; refusing to switch to `{requested}`"
            ),
        }
    }
}

impl Error for LoggingError {}

/// File logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Absolute directory for rotated log files.
    pub log_dir: PathBuf,
    pub max_file_bytes: u64,
    pub kept_files: usize,
}

impl LoggingConfig {
    /// Validates raw level and directory strings into a config with default
    /// rotation settings.
    pub fn from_raw(level: &str, log_dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: LogLevel::parse(level)?,
            log_dir: normalize_log_dir(log_dir)?,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            kept_files: DEFAULT_KEPT_FILES,
        })
    }
}

/// Initializes logging from raw strings, see [`init_logging_with`].
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    init_logging_with(&LoggingConfig::from_raw(level, log_dir)?)
}

/// Initializes the process logger.
///
/// # Errors
/// - `LoggingError::AlreadyInitialized` when a different level or directory
///   is already active.
/// - `LoggingError::CreateDir` / `LoggingError::Backend` on setup failure.
pub fn init_logging_with(config: &LoggingConfig) -> Result<(), LoggingError> {
    let active = ACTIVE.get_or_try_init(|| start_logger(config))?;

    if active.log_dir != config.log_dir {
        return Err(LoggingError::AlreadyInitialized {
            field: "directory",
            active: active.log_dir.display().to_string(),
            requested: config.log_dir.display().to_string(),
        });
    }
    if active.level != config.level {
        return Err(LoggingError::AlreadyInitialized {
            field: "level",
            active: active.level.to_string(),
            requested: config.level.to_string(),
        });
    }
    Ok(())
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(LogLevel, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `Debug` in debug builds, `Info` in release builds.
pub fn default_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

fn start_logger(config: &LoggingConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| LoggingError::CreateDir {
        dir: config.log_dir.clone(),
        message: err.to_string(),
    })?;

    let handle = Logger::try_with_str(config.level.as_str())
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(config.max_file_bytes),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.kept_files),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook();

    info!(
        "event=logging_start module=logging status=ok version={} level={} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        config.level,
        config.log_dir.display()
    );

    Ok(ActiveLogger {
        level: config.level,
        log_dir: config.log_dir.clone(),
        _handle: handle,
    })
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::RelativeLogDir(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Payload may carry reminder text; strip newlines and cap length.
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(info);
    }));
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut out: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
