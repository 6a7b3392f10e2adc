mod cli_messages;
mod config;
mod consts;
mod data;
mod error;
mod events;
mod logging;
mod router;
mod session;
mod ui;
mod widgets;
mod workers;

use crate::config::{Config, DashboardSettings, load_config};
use crate::session::{run_headless_mode, run_snapshot_mode, run_tui_mode, setup_session};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Flags shared by every command that builds the dashboard data.
#[derive(ClapArgs, Debug)]
struct DataArgs {
    /// Seed for the generated project rows.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of project rows to generate.
    #[arg(long, value_name = "ROWS")]
    rows: Option<usize>,

    /// Rows per table page (at least 1).
    #[arg(long, value_name = "SIZE")]
    page_size: Option<usize>,

    /// Configuration file to read instead of ~/.producthq/config.json.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl DataArgs {
    fn overrides(&self) -> Config {
        Config {
            seed: self.seed,
            rows: self.rows,
            page_size: self.page_size,
            ..Config::default()
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        #[command(flatten)]
        data: DataArgs,

        /// Run without the terminal UI, printing events to stdout.
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Time each quote stays on screen, in milliseconds (at least 100).
        #[arg(long, value_name = "MS")]
        quote_interval_ms: Option<u64>,

        /// Paint the dashboard background.
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Headless only: exit after this many quote rotations.
        #[arg(long, value_name = "N")]
        max_rotations: Option<u32>,
    },
    /// Print one table page and the quotes, then exit
    Snapshot {
        #[command(flatten)]
        data: DataArgs,

        /// Page to print; out-of-range pages are clamped.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Merge the config file with command-line overrides and validate the result.
fn resolve_settings(
    explicit: Option<&Path>,
    overrides: Config,
) -> Result<DashboardSettings, Box<dyn Error>> {
    let resolved = load_config(explicit)
        .and_then(|file| file.merge(overrides).resolve());
    match resolved {
        Ok(settings) => Ok(settings),
        Err(e) => {
            print_cmd_error!("Invalid configuration", &e.to_string());
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            data,
            headless,
            quote_interval_ms,
            with_background,
            max_rotations,
        } => {
            let overrides = Config {
                quote_interval_ms,
                // Only an explicit flag overrides the file
                with_background_color: with_background.then_some(true),
                ..data.overrides()
            };
            let settings = resolve_settings(data.config.as_deref(), overrides)?;
            let session = setup_session(settings)?;
            if headless {
                run_headless_mode(session, max_rotations).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Snapshot { data, page, json } => {
            let settings = resolve_settings(data.config.as_deref(), data.overrides())?;
            run_snapshot_mode(&settings, page, json)
        }
    }
}
