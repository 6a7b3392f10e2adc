//! Stat card components

use crate::data::{STAT_CARDS, StatCardSpec};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the row of stat cards.
pub fn render_stat_cards(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(STAT_CARDS.iter().map(|_| Constraint::Ratio(1, STAT_CARDS.len() as u32)))
        .split(area);

    for (card, chunk) in STAT_CARDS.iter().zip(chunks.iter()) {
        render_stat_card(f, *chunk, card);
    }
}

/// Render one card; the subtitle line only appears when the card has one.
pub fn render_stat_card(f: &mut Frame, area: Rect, card: &StatCardSpec) {
    let mut lines = vec![
        Line::from(Span::styled(card.title, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            card.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(subtitle) = card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(Line::from(card.icon).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_card(card: &StatCardSpec) -> String {
        let mut terminal = Terminal::new(TestBackend::new(24, 5)).unwrap();
        terminal
            .draw(|f| render_stat_card(f, f.area(), card))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_subtitle_shown_when_present() {
        let text = render_card(&STAT_CARDS[0]);
        assert!(text.contains("Revenue"));
        assert!(text.contains("$1.2M"));
        assert!(text.contains("+12% MoM"));
    }

    #[test]
    fn test_subtitle_omitted_when_absent() {
        let card = StatCardSpec {
            subtitle: None,
            ..STAT_CARDS[2]
        };
        let text = render_card(&card);
        assert!(text.contains("Bugs"));
        assert!(!text.contains("Critical"));
    }
}
