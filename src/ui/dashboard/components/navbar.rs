//! Navigation bar component
//!
//! Renders the brand, the inline links (desktop) or the menu button and
//! stacked link panel (mobile)

use super::super::state::DashboardState;
use crate::router::NAV_LINKS;
use crate::widgets::Viewport;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const BRAND: &str = "MyBrand";

/// Height of the open mobile link panel, borders included.
pub fn mobile_menu_height() -> u16 {
    NAV_LINKS.len() as u16 + 2
}

/// Render the bar itself.
pub fn render_navbar(f: &mut Frame, area: Rect, state: &DashboardState, viewport: Viewport) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BRAND.len() as u16 + 2), Constraint::Fill(1)])
        .split(inner);

    let brand = Paragraph::new(BRAND).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(brand, chunks[0]);

    let right = match viewport {
        Viewport::Desktop => desktop_links(state),
        Viewport::Mobile => {
            let icon = if state.navbar.is_menu_open() { "✕" } else { "≡" };
            Line::from(vec![
                Span::styled("[M] ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    icon,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
    };
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

fn desktop_links(state: &DashboardState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let style = if state.router.is_active(link) {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(link.label, style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

/// Render the stacked link list shown under the bar while the menu is open.
pub fn render_mobile_menu(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .navbar
        .links()
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let highlighted = i == state.navbar.cursor();
            let marker = if highlighted { "▶ " } else { "  " };
            let mut style = Style::default().fg(Color::White);
            if highlighted {
                style = style.bg(Color::Blue);
            }
            if state.router.is_active(link) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(format!("{}{}", marker, link.label), style))
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(panel, area);
}
