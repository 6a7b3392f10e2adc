//! Dashboard state management
//!
//! Contains the main dashboard state struct and the home page it mounts

use crate::config::DashboardSettings;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::data::{ProjectRow, QUOTES};
use crate::error::WidgetError;
use crate::events::Event;
use crate::router::{Route, Router};
use crate::widgets::{DataTable, NavigationBar, QuoteCarousel, Viewport};

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Widget state that lives only while the Home route is shown.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub table: DataTable,
    pub carousel: QuoteCarousel,
}

/// State for the whole page: navigation plus whichever page is mounted.
#[derive(Debug)]
pub struct DashboardState {
    /// Navigation bar and its mobile menu.
    pub navbar: NavigationBar,
    /// Active route.
    pub router: Router,
    /// Mounted dashboard widgets; `None` while another route is active.
    pub home: Option<HomePage>,
    /// Layout the key bindings follow, updated from the terminal width.
    pub viewport: Viewport,
    /// Frames updated so far; drives the background ornament.
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,

    rows: Arc<[ProjectRow]>,
    page_size: NonZeroUsize,
    /// Carousel rewound to its first quote, cloned on every mount.
    fresh_carousel: QuoteCarousel,
}

impl DashboardState {
    /// Creates a new dashboard state with the Home page mounted.
    pub fn new(
        rows: Arc<[ProjectRow]>,
        settings: &DashboardSettings,
    ) -> Result<Self, WidgetError> {
        let fresh_carousel = QuoteCarousel::new(QUOTES.to_vec())?;
        let mut state = Self {
            navbar: NavigationBar::new(),
            router: Router::new(Route::Home),
            home: None,
            viewport: Viewport::default(),
            tick: 0,
            with_background_color: settings.with_background_color,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            rows,
            page_size: settings.page_size,
            fresh_carousel,
        };
        state.mount_home();
        Ok(state)
    }

    /// Build a fresh Home page: table on page 1, carousel on its first quote.
    fn mount_home(&mut self) {
        self.home = Some(HomePage {
            table: DataTable::new(Arc::clone(&self.rows), self.page_size),
            carousel: self.fresh_carousel.restarted(),
        });
    }

    /// Switch routes, mounting or unmounting the Home page as needed.
    pub fn navigate(&mut self, route: Route) {
        if !self.router.navigate(route) {
            return;
        }
        if route == Route::Home {
            self.mount_home();
        } else {
            self.home = None;
        }
    }

    /// Whether the quote carousel is currently on screen.
    pub fn carousel_mounted(&self) -> bool {
        self.home.is_some()
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport = Viewport::from_width(width);
    }

    /// Most recent displayable activity line, if any.
    pub fn last_activity(&self) -> Option<&Event> {
        self.activity_logs.back()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
