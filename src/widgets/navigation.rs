//! Navigation bar state: the mobile menu flag and its link cursor.

use crate::consts::cli_consts::DESKTOP_MIN_WIDTH;
use crate::router::{NAV_LINKS, NavLink};
use log::debug;

/// Layout chosen from the terminal width.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Viewport {
    /// Links shown inline.
    #[default]
    Desktop,
    /// Links hidden behind the menu button.
    Mobile,
}

impl Viewport {
    pub fn from_width(width: u16) -> Self {
        if width < DESKTOP_MIN_WIDTH {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// The menu starts closed. Only [`NavigationBar::toggle_menu`] opens it;
/// choosing a link from the open menu closes it again.
#[derive(Debug, Clone, Default)]
pub struct NavigationBar {
    menu_open: bool,
    /// Highlighted entry in the mobile link panel.
    cursor: usize,
}

impl NavigationBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(
            "Mobile menu {}",
            if self.menu_open { "opened" } else { "closed" }
        );
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % NAV_LINKS.len();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = (self.cursor + NAV_LINKS.len() - 1) % NAV_LINKS.len();
    }

    /// Follow the highlighted mobile link. Closes the menu.
    pub fn select_highlighted(&mut self) -> &'static NavLink {
        let link = &NAV_LINKS[self.cursor];
        self.menu_open = false;
        link
    }

    /// Follow the mobile link at `index`, closing the menu.
    /// Returns `None` (menu untouched) if there is no such link.
    pub fn select_mobile_link(&mut self, index: usize) -> Option<&'static NavLink> {
        let link = NAV_LINKS.get(index)?;
        self.cursor = index;
        self.menu_open = false;
        Some(link)
    }
}
