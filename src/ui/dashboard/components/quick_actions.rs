//! Quick actions component

use crate::data::QUICK_ACTIONS;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_quick_actions(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for action in QUICK_ACTIONS {
        spans.push(Span::styled(
            format!("[ {} ]", action),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .title(Span::styled(
            "Quick Actions",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
