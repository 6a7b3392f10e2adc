//! Charts panel component
//!
//! Renders the "Monthly Active Users" line chart and the "Product Mix" share chart

use super::super::utils::{PALETTE, palette_color};
use crate::data::{LINE_DATA, PIE_DATA};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
};

/// Render both charts side by side.
pub fn render_charts_panel(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_line_chart(f, chunks[0]);
    render_product_mix(f, chunks[1]);
}

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Round `value` up to the next multiple of 100.
fn axis_ceiling(value: f64) -> f64 {
    (value / 100.0).ceil() * 100.0
}

pub fn render_line_chart(f: &mut Frame, area: Rect) {
    let points: Vec<(f64, f64)> = LINE_DATA
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();
    let y_max = axis_ceiling(LINE_DATA.iter().map(|p| p.value).fold(0.0, f64::max));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(PALETTE[0]))
        .data(&points);

    let x_labels: Vec<Span> = LINE_DATA.iter().map(|p| Span::raw(p.label)).collect();
    let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| Span::raw(format!("{:.0}", v)))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(panel("Monthly Active Users"))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (LINE_DATA.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

pub fn render_product_mix(f: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = PIE_DATA
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Bar::default()
                .value(slice.value)
                .label(Line::from(slice.name))
                .text_value(format!("{}%", slice.value))
                .style(Style::default().fg(palette_color(i)))
                .value_style(Style::default().fg(Color::Black).bg(palette_color(i)))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Product Mix"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(100);
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_ceiling() {
        assert_eq!(axis_ceiling(820.0), 900.0);
        assert_eq!(axis_ceiling(800.0), 800.0);
    }
}
