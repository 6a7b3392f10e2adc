//! Dashboard footer component
//!
//! Renders the copyright line, key hints and the latest activity

use super::super::state::DashboardState;
use crate::widgets::Viewport;

use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn copyright_line(year: i32) -> String {
    format!("© {} Product HQ — Built with care", year)
}

fn key_hints(state: &DashboardState) -> &'static str {
    let paging = state.home.is_some();
    match (state.viewport, paging) {
        (Viewport::Desktop, true) => "[1-4] Navigate  [←/→] Page  [Q] Quit",
        (Viewport::Desktop, false) => "[1-4] Navigate  [Q] Quit",
        (Viewport::Mobile, true) => "[M] Menu  [←/→] Page  [Q] Quit",
        (Viewport::Mobile, false) => "[M] Menu  [Q] Quit",
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            copyright_line(Local::now().year()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(key_hints(state), Style::default().fg(Color::DarkGray)),
    ])];
    if let Some(event) = state.last_activity() {
        lines.push(Line::from(Span::styled(
            event.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }

    let footer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Product HQ — Built with care");
    }
}
