//! Image gallery component
//!
//! Images can't be drawn, so each tile shows its label and a shortened URL

use super::super::utils::truncate;
use crate::data::IMAGES;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const COLUMNS: usize = 2;

/// Render the images as a two-column grid of tiles.
pub fn render_gallery(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            "Gallery",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let row_count = IMAGES.len().div_ceil(COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Ratio(1, row_count as u32)))
        .split(inner);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (c, tile) in cols.iter().enumerate() {
            let i = r * COLUMNS + c;
            if let Some(url) = IMAGES.get(i) {
                render_tile(f, *tile, i, url);
            }
        }
    }
}

fn render_tile(f: &mut Frame, area: Rect, index: usize, url: &str) {
    let block = Block::default()
        .title(format!("gallery-{}", index))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(Color::DarkGray));
    let width = block.inner(area).width as usize;
    let text = Paragraph::new(Span::styled(
        truncate(url, width),
        Style::default().fg(Color::DarkGray),
    ))
    .block(block);
    f.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_every_image_has_a_labelled_tile() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| render_gallery(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for i in 0..IMAGES.len() {
            assert!(text.contains(&format!("gallery-{}", i)));
        }
    }
}
