//! Log level handling and the activity logger.
//!
//! The terminal UI owns stdout, so `log` records are turned into activity
//! events and shown inside the dashboard (or printed by headless mode).

use crate::events::Event;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::env;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Forwards `log` records at or above a threshold as activity events.
pub struct ActivityLogger {
    threshold: LogLevel,
    sender: mpsc::Sender<Event>,
}

impl ActivityLogger {
    pub fn new(threshold: LogLevel, sender: mpsc::Sender<Event>) -> Self {
        Self { threshold, sender }
    }
}

impl Log for ActivityLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A full queue drops the record rather than stalling the caller
        let _ = self.sender.try_send(Event::activity(
            record.args().to_string(),
            record.level().into(),
        ));
    }

    fn flush(&self) {}
}

/// Install the activity logger as the global `log` backend, filtered by `RUST_LOG`.
pub fn init_activity_logger(sender: mpsc::Sender<Event>) -> Result<(), SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(ActivityLogger::new(threshold, sender)))?;
    log::set_max_level(threshold.into());
    Ok(())
}
