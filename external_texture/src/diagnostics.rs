/// Diagnostics - process-wide logger slot for external textures
///
/// Textures are painted from the render thread and notified from producer
/// threads, so the active logger lives in thread-safe static storage. Every
/// `texture_*` macro dispatches through here.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Global logging entry point
///
/// # Example
///
/// ```no_run
/// use external_texture::xtex::{Diagnostics, log::{Logger, LogEntry}};
///
/// struct CompositorLogger;
/// impl Logger for CompositorLogger {
///     fn log(&self, _entry: &LogEntry) {
///         // Forward to the compositor's log...
///     }
/// }
///
/// Diagnostics::set_logger(CompositorLogger);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the active logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without source location
    ///
    /// Used by `texture_trace!` through `texture_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Log with file:line information
    ///
    /// Used by `texture_error!`, `texture_err!`, `texture_bail!` and `texture_fatal!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        // A logger that panicked poisons the lock; keep logging through it anyway
        let lock = match logger_slot().read() {
            Ok(lock) => lock,
            Err(poisoned) => poisoned.into_inner(),
        };
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file,
            line,
        });
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
