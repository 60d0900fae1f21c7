//! Diagnostic sink for the UI.
//!
//! The app root provides a `Signal<ActivityLog>` as context. Fetch failures are
//! appended to it by [`ActivitySink`] and also written to `tracing`; nothing in
//! the log is rendered into the gallery itself.

use dioxus::prelude::*;
use profiles::{DiagnosticSink, FetchError, TracingSink};

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
}

impl ActivityLog {
    /// Number of entries at `level`.
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Like [`use_activity_log`], but `None` when no ancestor provides a log.
pub fn try_use_activity_log() -> Option<Signal<ActivityLog>> {
    try_use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let ts = current_time();
    log.write().entries.push(LogEntry {
        timestamp: ts,
        level,
        message: message.to_string(),
    });
}

/// Reports fetch failures to `tracing` and, if present, the activity log.
#[derive(Clone, Copy)]
pub struct ActivitySink {
    log: Option<Signal<ActivityLog>>,
}

impl ActivitySink {
    pub fn new(log: Option<Signal<ActivityLog>>) -> Self {
        Self { log }
    }
}

impl DiagnosticSink for ActivitySink {
    fn report(&mut self, error: &FetchError) {
        TracingSink.report(error);
        if let Some(log) = self.log.as_mut() {
            log_activity(log, LogLevel::Error, &format!("Error fetching profiles: {error}"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
