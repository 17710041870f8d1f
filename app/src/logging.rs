//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging for the host and the engine.
// FORMAT: seq|level|category|message

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub use log::Level;
use log::{Log, Metadata, Record};
use once_cell::sync::Lazy;

use crate::config::LoggingConfig;
use crate::error::AppError;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle; None means stderr
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Bridges `log` records (the engine logs through the facade) into write_log.
static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Build one log line in the unified format
pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Open (truncating) the unified log file
pub fn init_log_file(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    Ok(())
}

/// Install the logger for the whole process. Call once at startup.
pub fn init(config: &LoggingConfig) -> Result<(), AppError> {
    if let Some(path) = &config.file {
        init_log_file(path)?;
    }

    log::set_logger(&LOGGER)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Write a log line in unified format
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
            return;
        }
    }

    eprintln!("{}", line);
}

/// Single-letter level tag used in the unified format
pub fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_log(level_tag(record.level()), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// True when a host-level message at `level` should be written.
pub fn level_enabled(level: Level) -> bool {
    level <= log::max_level()
}

// ============================================================================
// MACRO DEFINITIONS & EXPORTS
// ============================================================================

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::level_enabled($crate::logging::Level::Debug) {
            $crate::logging::write_log("D", $cat, &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($cat:expr, $($arg:tt)*) => {
        if $crate::logging::level_enabled($crate::logging::Level::Info) {
            $crate::logging::write_log("I", $cat, &format!($($arg)*))
        }
    };
}

// Re-export the macros so they can be imported via `use crate::logging::log_info;`
pub use log_debug;
pub use log_info;
