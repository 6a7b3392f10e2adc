//! Quote carousel component

use crate::widgets::QuoteCarousel;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Render the current quote, its author and one dot per quote.
pub fn render_quotes(f: &mut Frame, area: Rect, carousel: &QuoteCarousel) {
    let quote = carousel.current();

    let dots: Vec<Span> = (0..carousel.len())
        .map(|i| {
            if i == carousel.index() {
                Span::styled("● ", Style::default().fg(Color::White))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            format!("“{}”", quote.text),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("— {}", quote.author),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right),
        Line::from(dots).alignment(Alignment::Center),
    ];

    let block = Block::default()
        .title(Span::styled(
            "Wisdom & Quotes",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QUOTES;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(carousel: &QuoteCarousel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 7)).unwrap();
        terminal
            .draw(|f| render_quotes(f, f.area(), carousel))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_current_quote() {
        let mut carousel = QuoteCarousel::new(QUOTES.to_vec()).unwrap();
        assert!(render(&carousel).contains("Joe Sparano"));

        carousel.advance();
        let text = render(&carousel);
        assert!(text.contains("Simplicity is the ultimate sophistication."));
        assert!(text.contains("Leonardo da Vinci"));
        assert!(!text.contains("Joe Sparano"));
    }
}
