//! Event System
//!
//! Events flowing from background tasks and the logger into the UI loop

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The quote rotation timer.
    QuoteTicker,
    /// A `log` record forwarded by the activity logger.
    Logger,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// The carousel should step to its next quote.
    Tick,
    /// Something worth showing in the activity line.
    Activity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn quote_tick() -> Self {
        Self::new(
            Source::QuoteTicker,
            "Rotating to next quote".to_string(),
            EventType::Tick,
            LogLevel::Debug,
        )
    }

    pub fn activity(msg: String, log_level: LogLevel) -> Self {
        Self::new(Source::Logger, msg, EventType::Activity, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Ticks drive the carousel; they are not log lines
        if self.event_type == EventType::Tick {
            return false;
        }
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
