//! Dashboard state update logic
//!
//! Contains the methods that apply queued events and key presses

use super::state::DashboardState;

use crate::events::{Event, EventType};
use crate::router::{NAV_LINKS, NavLink};
use crate::widgets::Viewport;
use crossterm::event::KeyCode;

impl DashboardState {
    /// Advance the animation tick and apply all queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &Event) {
        if event.event_type == EventType::Tick {
            // Ticks that arrive after the page unmounted have nothing to move
            if let Some(home) = self.home.as_mut() {
                home.carousel.advance();
            }
        }
    }

    /// Apply a key press. Quit keys are handled by the caller.
    pub fn handle_key(&mut self, code: KeyCode) {
        match self.viewport {
            Viewport::Mobile => {
                if self.handle_mobile_menu_key(code) {
                    return;
                }
            }
            Viewport::Desktop => {
                if let KeyCode::Char(c) = code {
                    if let Some(link) = Self::link_for_digit(c) {
                        self.follow(link);
                        return;
                    }
                }
            }
        }

        if let Some(home) = self.home.as_mut() {
            match code {
                KeyCode::Left | KeyCode::Char('h') => home.table.prev_page(),
                KeyCode::Right | KeyCode::Char('l') => home.table.next_page(),
                _ => {}
            }
        }
    }

    /// Keys owned by the menu button and the open link panel.
    fn handle_mobile_menu_key(&mut self, code: KeyCode) -> bool {
        if code == KeyCode::Char('m') {
            self.navbar.toggle_menu();
            return true;
        }
        if !self.navbar.is_menu_open() {
            return false;
        }
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.navbar.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.navbar.cursor_down(),
            KeyCode::Enter => {
                let link = self.navbar.select_highlighted();
                self.follow(link);
            }
            KeyCode::Char(c) => {
                let Some(index) = Self::link_index_for_digit(c) else {
                    return false;
                };
                if let Some(link) = self.navbar.select_mobile_link(index) {
                    self.follow(link);
                }
            }
            _ => return false,
        }
        true
    }

    fn follow(&mut self, link: &NavLink) {
        self.navigate(link.route());
    }

    fn link_index_for_digit(c: char) -> Option<usize> {
        let digit = c.to_digit(10)? as usize;
        (1..=NAV_LINKS.len()).contains(&digit).then(|| digit - 1)
    }

    fn link_for_digit(c: char) -> Option<&'static NavLink> {
        Self::link_index_for_digit(c).map(|i| &NAV_LINKS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::tests::test_state;
    use super::*;
    use crate::logging::LogLevel;
    use crate::router::Route;

    #[test]
    fn test_ticks_advance_carousel_on_update() {
        let mut state = test_state(20);
        for _ in 0..7 {
            state.add_event(Event::quote_tick());
        }
        state.update();
        assert_eq!(state.home.as_ref().unwrap().carousel.index(), 1);
        // Ticks are not kept as activity
        assert!(state.activity_logs.is_empty());
    }

    #[test]
    fn test_ticks_after_unmount_are_ignored() {
        let mut state = test_state(20);
        state.navigate(Route::Contact);
        state.add_event(Event::quote_tick());
        state.update();
        assert!(state.home.is_none());
        assert!(state.pending_events.is_empty());
    }

    #[test]
    fn test_activity_events_are_logged() {
        let mut state = test_state(20);
        state.add_event(Event::activity("Navigating".to_string(), LogLevel::Info));
        state.update();
        assert_eq!(state.last_activity().unwrap().msg, "Navigating");
    }

    #[test]
    fn test_arrow_keys_page_the_table() {
        let mut state = test_state(200);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Char('l'));
        assert_eq!(state.home.as_ref().unwrap().table.page(), 3);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.home.as_ref().unwrap().table.page(), 2);
    }

    #[test]
    fn test_prev_on_first_page_and_next_on_last_do_nothing() {
        let mut state = test_state(15);
        state.handle_key(KeyCode::Left);
        assert_eq!(state.home.as_ref().unwrap().table.page(), 1);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.home.as_ref().unwrap().table.page(), 2);
    }

    #[test]
    fn test_desktop_digits_follow_links() {
        let mut state = test_state(20);
        state.set_viewport_width(120);
        state.handle_key(KeyCode::Char('3'));
        assert_eq!(state.router.active(), Route::Services);
        state.handle_key(KeyCode::Char('1'));
        assert_eq!(state.router.active(), Route::Home);
    }

    #[test]
    // The menu button is hidden on desktop, so `m` does nothing there.
    fn test_menu_key_ignored_on_desktop() {
        let mut state = test_state(20);
        state.set_viewport_width(120);
        state.handle_key(KeyCode::Char('m'));
        assert!(!state.navbar.is_menu_open());
    }

    #[test]
    fn test_mobile_menu_selection_navigates_and_closes() {
        let mut state = test_state(20);
        state.set_viewport_width(60);

        state.handle_key(KeyCode::Char('m'));
        assert!(state.navbar.is_menu_open());
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Enter);

        assert_eq!(state.router.active(), Route::About);
        assert!(!state.navbar.is_menu_open());
        assert!(!state.carousel_mounted());
    }

    #[test]
    fn test_mobile_digit_selects_link_when_menu_open() {
        let mut state = test_state(20);
        state.set_viewport_width(60);

        // Closed menu: digits do not navigate
        state.handle_key(KeyCode::Char('4'));
        assert_eq!(state.router.active(), Route::Home);

        state.handle_key(KeyCode::Char('m'));
        state.handle_key(KeyCode::Char('4'));
        assert_eq!(state.router.active(), Route::Contact);
        assert!(!state.navbar.is_menu_open());
    }

    #[test]
    fn test_mobile_toggle_twice_closes_menu() {
        let mut state = test_state(20);
        state.set_viewport_width(60);
        state.handle_key(KeyCode::Char('m'));
        state.handle_key(KeyCode::Char('m'));
        assert!(!state.navbar.is_menu_open());
    }
}
