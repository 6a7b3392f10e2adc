//! Body shown for routes other than Home

use crate::router::Route;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_placeholder(f: &mut Frame, area: Rect, route: Route) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            route.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Nothing here yet ({})", route.path()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Choose Home in the navigation to return to the dashboard",
            Style::default().fg(Color::Gray),
        )),
    ];
    let page = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(page, area);
}
