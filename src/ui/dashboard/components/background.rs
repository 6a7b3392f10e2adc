//! Floating background component
//!
//! Optional surface fill plus an ornament that advances with the UI tick and
//! turns once every `ORNAMENT_PERIOD_SECS` at the idle frame rate

use super::super::state::DashboardState;
use super::super::utils::SURFACE;
use crate::consts::cli_consts::ui::{ORNAMENT_PERIOD_SECS, POLL_INTERVAL_MS};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

/// Quarter-turn glyphs, in rotation order.
const ORNAMENT_FRAMES: [&str; 4] = ["◜", "◝", "◞", "◟"];

/// UI ticks in one full turn, one tick per polled frame.
const TICKS_PER_TURN: usize = (ORNAMENT_PERIOD_SECS * 1000 / POLL_INTERVAL_MS) as usize;

/// Ornament glyph for the given UI tick.
pub fn ornament_frame(tick: usize) -> &'static str {
    let phase = tick % TICKS_PER_TURN;
    ORNAMENT_FRAMES[phase * ORNAMENT_FRAMES.len() / TICKS_PER_TURN]
}

/// Paint the surface colour behind the page, if enabled.
pub fn render_background(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(Block::default().style(Style::default().bg(SURFACE)), area);
    }
}

/// Draw the ornament in the bottom-right corner. Called after the page so it stays on top.
pub fn render_ornament(f: &mut Frame, area: Rect, state: &DashboardState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let glyph = ornament_frame(state.tick);
    let corner = Rect::new(area.right() - 1, area.bottom() - 1, 1, 1);
    f.render_widget(
        Paragraph::new(glyph).style(Style::default().fg(Color::Indexed(60))),
        corner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::state::tests::test_state;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    // One full turn per period, a quarter turn per frame.
    fn test_ornament_turns_once_per_period() {
        let quarter = TICKS_PER_TURN / 4;
        assert_eq!(TICKS_PER_TURN, 1200);
        assert_eq!(ornament_frame(0), "◜");
        assert_eq!(ornament_frame(quarter - 1), "◜");
        assert_eq!(ornament_frame(quarter), "◝");
        assert_eq!(ornament_frame(quarter * 2), "◞");
        assert_eq!(ornament_frame(quarter * 3), "◟");
        assert_eq!(ornament_frame(TICKS_PER_TURN), "◜");
    }

    #[test]
    fn test_ornament_follows_state_tick() {
        let mut state = test_state(10);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();

        terminal.draw(|f| render_ornament(f, f.area(), &state)).unwrap();
        assert_eq!(terminal.backend().buffer()[(19, 4)].symbol(), "◜");

        for _ in 0..TICKS_PER_TURN / 2 {
            state.update();
        }
        terminal.draw(|f| render_ornament(f, f.area(), &state)).unwrap();
        assert_eq!(terminal.backend().buffer()[(19, 4)].symbol(), "◞");
    }
}
