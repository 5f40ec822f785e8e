//! Logging for external textures
//!
//! This module provides:
//! - A `Logger` trait so embedders can route diagnostics into their own sink
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - A colored console `DefaultLogger`
//! - `texture_*` macros that dispatch through the process-wide logger slot
//!   held by `Diagnostics`

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use external_texture::xtex::log::{Logger, LogEntry};
///
/// struct CompositorLogger;
///
/// impl Logger for CompositorLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the platform log...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "xtex::ExternalTexture", "xtex::Attachment")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame chatter (refresh decisions, draw calls)
    Trace,

    /// Lifecycle transitions
    Debug,

    /// Registration events
    Info,

    /// Recoverable anomalies (paint without an image)
    Warn,

    /// Failed collaborator calls and fatal invariant violations
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger writing colored lines to the console
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - With location: `[timestamp] [SEVERITY] [source] message (file:line)`
///
/// Warn and Error go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    /// Format an entry without colors
    pub fn format_plain(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        let line = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            ),
            _ => format!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message),
        };

        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! texture_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::xtex::Diagnostics::log(
            $crate::xtex::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! texture_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::xtex::Diagnostics::log(
            $crate::xtex::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! texture_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::xtex::Diagnostics::log(
            $crate::xtex::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// # Example
///
/// ```ignore
/// texture_warn!("xtex::ExternalTexture", "No image available for texture {}", id);
/// ```
#[macro_export]
macro_rules! texture_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::xtex::Diagnostics::log(
            $crate::xtex::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! texture_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::xtex::Diagnostics::log_detailed(
            $crate::xtex::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and evaluate to an `Error::BackendError` carrying the same message
///
/// # Example
///
/// ```ignore
/// gpu.create_texture_slot()
///     .map_err(|e| texture_err!("xtex::Attachment", "Slot creation failed: {}", e))?;
/// ```
#[macro_export]
macro_rules! texture_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::xtex::Diagnostics::log_detailed(
            $crate::xtex::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::xtex::Error::BackendError(message)
    }};
}

/// Log an ERROR and return early with `Err(Error::BackendError(..))`
#[macro_export]
macro_rules! texture_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::texture_err!($source, $($arg)*))
    };
}

/// Log an ERROR with file:line, then abort the current thread with the same message
///
/// Reserved for invariant violations after which painting would show corrupt
/// content.
#[macro_export]
macro_rules! texture_fatal {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::xtex::Diagnostics::log_detailed(
            $crate::xtex::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        panic!("[{}] {}", $source, message)
    }};
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
