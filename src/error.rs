//! Error types for widget construction and configuration loading

use thiserror::Error;

/// Invalid widget configuration, rejected when the widget is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    /// A carousel needs at least one quote to rotate through.
    #[error("carousel requires at least one quote")]
    EmptyQuotes,

    /// Pages must hold at least one row.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::config::Config`].
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// A value is outside its accepted range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}
