//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::data::ProjectStatus;
use ratatui::prelude::Color;

/// Chart palette: indigo, cyan, amber, emerald.
pub const PALETTE: [Color; 4] = [
    Color::Rgb(0x4F, 0x46, 0xE5),
    Color::Rgb(0x06, 0xB6, 0xD4),
    Color::Rgb(0xF5, 0x9E, 0x0B),
    Color::Rgb(0x10, 0xB9, 0x81),
];

/// Card surface colour used when the background is painted.
pub const SURFACE: Color = Color::Rgb(16, 20, 24);

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Get a ratatui color for a project status
pub fn get_status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Active => Color::Green,
        ProjectStatus::Paused => Color::Yellow,
        ProjectStatus::Completed => Color::Cyan,
    }
}

/// Text progress bar, e.g. `██████░░░░  60%`.
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (usize::from(progress.min(100)) * width).div_ceil(100).min(width);
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        progress
    )
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_width() {
        assert_eq!(progress_bar(50, 10), "█████░░░░░  50%");
        assert_eq!(progress_bar(99, 4), "████  99%");
        assert_eq!(progress_bar(10, 4), "█░░░  10%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("gallery", 10), "gallery");
        assert_eq!(truncate("images.unsplash.com", 8), "images.…");
    }
}
