//! Hero banner component

use super::super::utils::truncate;
use crate::data::IMAGES;
use crate::widgets::Viewport;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const TITLE: &str = "Product HQ Dashboard";
pub const TAGLINE: &str = "Scalable, reusable components with resilient edge-case handling.";

/// Render the title, tagline, call-to-action buttons and hero image.
pub fn render_hero(f: &mut Frame, area: Rect, viewport: Viewport) {
    let chunks = match viewport {
        Viewport::Desktop => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Percentage(40)])
            .split(area),
        Viewport::Mobile => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1)])
            .split(area),
    };

    let button = |label: &'static str, primary: bool| {
        let style = if primary {
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0x4F, 0x46, 0xE5))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            button("Get Started", true),
            Span::raw("  "),
            button("Learn More", false),
        ]),
    ];
    let copy = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    f.render_widget(copy, chunks[0]);

    if chunks.len() > 1 {
        let image_block = Block::default()
            .title("hero")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let width = image_block.inner(chunks[1]).width as usize;
        let image = Paragraph::new(Span::styled(
            truncate(IMAGES[0], width),
            Style::default().fg(Color::DarkGray),
        ))
        .block(image_block);
        f.render_widget(image, chunks[1]);
    }
}
