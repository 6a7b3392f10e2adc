//! Status lines printed around a TUI or headless session

use crate::ui::dashboard::DashboardState;
use std::fmt;
use std::time::Duration;

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

/// Session lifecycle lines, printed outside the alternate screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// What the session is about to show.
    Starting {
        mode: &'static str,
        projects: usize,
        pages: usize,
        quote_interval: Duration,
    },
    ShuttingDown,
    Exited,
}

impl SessionMessage {
    /// Describe the mounted dashboard for the start line.
    pub fn starting(mode: &'static str, state: &DashboardState, quote_interval: Duration) -> Self {
        let (projects, pages) = state
            .home
            .as_ref()
            .map_or((0, 1), |home| (home.table.len(), home.table.total_pages()));
        Self::Starting {
            mode,
            projects,
            pages,
            quote_interval,
        }
    }

    pub fn print(&self) {
        let (color, tag) = match self {
            Self::Exited => (COLOR_SUCCESS, "[SUCCESS]"),
            Self::Starting { .. } | Self::ShuttingDown => (COLOR_INFO, "[INFO]"),
        };
        println!("{}{}{} {}", color, tag, COLOR_RESET, self);
    }
}

impl fmt::Display for SessionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Starting {
                mode,
                projects,
                pages,
                quote_interval,
            } => write!(
                f,
                "Starting {} mode: {} projects on {} pages, quotes rotate every {} ms",
                mode,
                projects,
                pages,
                quote_interval.as_millis()
            ),
            Self::ShuttingDown => f.write_str("Shutting down..."),
            Self::Exited => f.write_str("Product HQ exited successfully"),
        }
    }
}
