//! Dashboard main renderer

use super::components::table::CHROME_HEIGHT;
use super::components::{
    background, charts, footer, gallery, hero, navbar, placeholder, quick_actions, quotes,
    stat_cards, table,
};
use super::state::{DashboardState, HomePage};
use crate::widgets::Viewport;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    background::render_background(f, f.area(), state);

    let viewport = state.viewport;
    let menu_height = if viewport == Viewport::Mobile && state.navbar.is_menu_open() {
        navbar::mobile_menu_height()
    } else {
        0
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Navigation bar
            Constraint::Length(menu_height), // Mobile link panel
            Constraint::Fill(1),             // Page body
            Constraint::Length(3),           // Footer
        ])
        .split(f.area());

    navbar::render_navbar(f, main_chunks[0], state, viewport);
    if menu_height > 0 {
        navbar::render_mobile_menu(f, main_chunks[1], state);
    }

    match &state.home {
        Some(home) => match viewport {
            Viewport::Desktop => render_home_desktop(f, main_chunks[2], home),
            Viewport::Mobile => render_home_mobile(f, main_chunks[2], home),
        },
        None => placeholder::render_placeholder(f, main_chunks[2], state.router.active()),
    }

    footer::render_footer(f, main_chunks[3], state);
    background::render_ornament(f, f.area(), state);
}

fn render_home_desktop(f: &mut Frame, area: Rect, home: &HomePage) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Fill(1)])
        .split(area);
    hero::render_hero(f, rows[0], Viewport::Desktop);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Stat cards
            Constraint::Length(12), // Charts
            Constraint::Min(CHROME_HEIGHT + 1),
        ])
        .split(columns[0]);
    stat_cards::render_stat_cards(f, left[0]);
    charts::render_charts_panel(f, left[1]);
    table::render_table(f, left[2], &home.table);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Quotes
            Constraint::Length(5), // Quick actions
            Constraint::Fill(1),   // Gallery
        ])
        .split(columns[1]);
    quotes::render_quotes(f, right[0], &home.carousel);
    quick_actions::render_quick_actions(f, right[1]);
    gallery::render_gallery(f, right[2]);
}

/// Single column; sections shrink when the terminal is too short for all of them.
fn render_home_mobile(f: &mut Frame, area: Rect, home: &HomePage) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(CHROME_HEIGHT + 1),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(8),
        ])
        .split(area);
    hero::render_hero(f, rows[0], Viewport::Mobile);
    stat_cards::render_stat_cards(f, rows[1]);
    table::render_table(f, rows[2], &home.table);
    quotes::render_quotes(f, rows[3], &home.carousel);
    charts::render_charts_panel(f, rows[4]);
    quick_actions::render_quick_actions(f, rows[5]);
    gallery::render_gallery(f, rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use crate::ui::dashboard::state::tests::test_state;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &DashboardState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_desktop_home_shows_every_section() {
        let mut state = test_state(200);
        state.set_viewport_width(140);
        let text = render(&state, 140, 50);

        for expected in [
            "MyBrand",
            "Services",
            "Product HQ Dashboard",
            "Revenue",
            "Monthly Active Users",
            "Product Mix",
            "Active Projects",
            "Page 1 of 20",
            "Wisdom & Quotes",
            "Joe Sparano",
            "Quick Actions",
            "gallery-3",
            "Product HQ — Built with care",
        ] {
            assert!(text.contains(expected), "missing {:?}", expected);
        }
    }

    #[test]
    fn test_mobile_menu_panel_follows_toggle() {
        let mut state = test_state(200);
        state.set_viewport_width(60);

        let closed = render(&state, 60, 50);
        assert!(closed.contains("≡"));
        assert!(!closed.contains("Services"));

        state.navbar.toggle_menu();
        let open = render(&state, 60, 50);
        assert!(open.contains("✕"));
        assert!(open.contains("Services"));
        assert!(open.contains("▶ Home"));
    }

    #[test]
    fn test_other_route_shows_placeholder() {
        let mut state = test_state(200);
        state.set_viewport_width(140);
        state.navigate(Route::About);

        let text = render(&state, 140, 50);
        assert!(text.contains("Nothing here yet (/about)"));
        assert!(!text.contains("Active Projects"));
        assert!(!text.contains("Wisdom & Quotes"));
    }
}
