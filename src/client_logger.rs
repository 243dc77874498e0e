//! Logging trait for journal turn outcomes.
//!
//! The end user only ever sees the gentle, non-technical turn messages;
//! implement [`SessionLogger`] to capture the raw completion text and the
//! full error descriptions operators need.

use crate::error::Error;

/// A trait for logging journal session activity.
///
/// # Example
///
/// ```rust,ignore
/// use mindful::{Error, SessionLogger};
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl SessionLogger for FileLogger {
///     fn log_completion(&self, raw: &str) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Completion: {}", raw).unwrap();
///     }
///
///     fn log_error(&self, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Reflection Error: {}", error).unwrap();
///     }
/// }
/// ```
pub trait SessionLogger: Send + Sync {
    /// Log the raw completion text from a successful turn, before any
    /// rendering is applied.
    fn log_completion(&self, raw: &str);

    /// Log a failed turn.
    ///
    /// Called with the full typed error; the session surfaces only the
    /// fixed gentle-retry message to the user.
    fn log_error(&self, error: &Error);
}

/// A logger that writes error descriptions to stderr.
pub struct StderrLogger;

impl SessionLogger for StderrLogger {
    fn log_completion(&self, _raw: &str) {}

    fn log_error(&self, error: &Error) {
        eprintln!("Reflection Error: {}", error);
    }
}
