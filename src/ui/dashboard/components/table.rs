//! Project table component
//!
//! Renders the visible page of project rows and the pager beneath it

use super::super::utils::{PALETTE, get_status_color, progress_bar};
use crate::widgets::DataTable;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Width of the progress bar, excluding the percentage.
const PROGRESS_WIDTH: usize = 10;

/// Rows needed around the data rows: borders, toolbar, header and pager.
pub const CHROME_HEIGHT: u16 = 5;

/// Render the projects table for the current page.
pub fn render_table(f: &mut Frame, area: Rect, table: &DataTable) {
    let block = Block::default()
        .title(Span::styled(
            "Active Projects",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search and filters
            Constraint::Fill(1),   // Rows
            Constraint::Length(1), // Pager
        ])
        .split(inner);

    render_toolbar(f, chunks[0]);
    render_rows(f, chunks[1], table);
    render_pager(f, chunks[2], table);
}

fn render_toolbar(f: &mut Frame, area: Rect) {
    let toolbar = Line::from(vec![
        Span::styled("⌕ ", Style::default().fg(Color::DarkGray)),
        Span::styled("Search projects", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("[ Filters ]", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(toolbar).alignment(Alignment::Right), area);
}

fn render_rows(f: &mut Frame, area: Rect, table: &DataTable) {
    if table.is_empty() {
        let empty = Paragraph::new("No projects to show")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(["#", "Name", "Owner", "Progress", "Status"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .current_slice()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.id.to_string()),
                Cell::from(row.name.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(row.owner),
                Cell::from(progress_bar(row.progress, PROGRESS_WIDTH))
                    .style(Style::default().fg(PALETTE[1])),
                Cell::from(row.status.label())
                    .style(Style::default().fg(get_status_color(row.status))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(PROGRESS_WIDTH as u16 + 6),
        Constraint::Min(9),
    ];
    let widget = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(widget, area);
}

/// Prev/Next are drawn dimmed when they would do nothing.
fn render_pager(f: &mut Frame, area: Rect, table: &DataTable) {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };

    let pager = Line::from(vec![
        button("[◀ Prev]", table.has_prev()),
        Span::raw(format!(
            "  Page {} of {}  ",
            table.page(),
            table.total_pages()
        )),
        button("[Next ▶]", table.has_next()),
    ]);
    f.render_widget(Paragraph::new(pager).alignment(Alignment::Right), area);
}
