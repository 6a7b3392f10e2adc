//! Session setup and initialization

use crate::config::DashboardSettings;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::data::{ProjectRow, generate_projects};
use crate::error::WidgetError;
use crate::events::Event;
use crate::logging::init_activity_logger;
use crate::ui::dashboard::DashboardState;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Resolved settings
    pub settings: DashboardSettings,
    /// Dashboard state with the Home page mounted
    pub state: DashboardState,
    /// Activity events forwarded by the logger
    pub activity_receiver: mpsc::Receiver<Event>,
}

/// Generate the project rows once, from the configured seed or from entropy.
pub fn generate_rows(settings: &DashboardSettings) -> Arc<[ProjectRow]> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_projects(settings.rows, &mut rng).into()
}

/// Build the initial dashboard state from settings.
pub fn build_state(settings: &DashboardSettings) -> Result<DashboardState, WidgetError> {
    DashboardState::new(generate_rows(settings), settings)
}

/// Sets up a dashboard session
///
/// This function handles the setup shared by TUI and headless modes:
/// 1. Installs the activity logger
/// 2. Generates the sample data
/// 3. Mounts the Home page
pub fn setup_session(settings: DashboardSettings) -> Result<SessionData, Box<dyn Error>> {
    let (sender, activity_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    init_activity_logger(sender)?;

    let state = build_state(&settings)?;
    match settings.seed {
        Some(seed) => info!("Generated {} project rows (seed {})", settings.rows, seed),
        None => info!("Generated {} project rows", settings.rows),
    }

    Ok(SessionData {
        settings,
        state,
        activity_receiver,
    })
}
