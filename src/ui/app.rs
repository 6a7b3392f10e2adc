//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::events::Event as DashboardEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::ticker::QuoteTicker;
use crossterm::event::{self, Event, KeyCode};
use log::info;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The navigation bar and whichever page is routed.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Navigation, routing and the mounted page.
    state: DashboardState,

    /// Receives activity events from the logger.
    activity_receiver: mpsc::Receiver<DashboardEvent>,

    /// Time each quote stays on screen.
    quote_interval: Duration,

    /// Running only while the dashboard is shown with the Home page mounted.
    ticker: Option<QuoteTicker>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: DashboardState,
        activity_receiver: mpsc::Receiver<DashboardEvent>,
        quote_interval: Duration,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            state,
            activity_receiver,
            quote_interval,
            ticker: None,
        }
    }

    fn show_dashboard(&mut self) {
        if self.current_screen != Screen::Dashboard {
            self.current_screen = Screen::Dashboard;
            info!("Dashboard ready");
        }
    }

    /// Start or stop the quote ticker so it runs exactly while the carousel is visible.
    async fn sync_ticker(&mut self) {
        let wanted = self.current_screen == Screen::Dashboard && self.state.carousel_mounted();
        let running = self.ticker.as_ref().is_some_and(QuoteTicker::is_running);
        if wanted && !running {
            self.ticker = Some(QuoteTicker::start(self.quote_interval));
        } else if !wanted && self.ticker.is_some() {
            self.stop_ticker().await;
        }
    }

    async fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop().await;
        }
    }

    /// Move everything the ticker and the logger produced into the dashboard queue.
    fn drain_events(&mut self) {
        while let Ok(event) = self.activity_receiver.try_recv() {
            self.state.add_event(event);
        }
        if let Some(ticker) = self.ticker.as_mut() {
            while let Some(event) = ticker.try_next() {
                self.state.add_event(event);
            }
        }
    }

    /// Apply a key press. Returns `false` when the application should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            return false;
        }
        match self.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => self.show_dashboard(),
            Screen::Dashboard => self.state.handle_key(code),
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// The quote ticker is stopped on every exit path, including draw errors.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let result = event_loop(terminal, &mut app).await;
    app.stop_ticker().await;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        app.drain_events();

        if app.current_screen == Screen::Dashboard {
            app.state.update();
        }
        let size = terminal.size()?;
        app.state.set_viewport_width(size.width);
        terminal.draw(|f| render(f, app.current_screen, &app.state))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration() {
            app.show_dashboard();
        }
        app.sync_ticker().await;

        // Poll for key events
        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
