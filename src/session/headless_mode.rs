//! Headless mode execution

use super::{SessionData, messages::SessionMessage, snapshot_mode::render_navigation};
use crate::data::Quote;
use crate::print_cmd_info;
use crate::workers::ticker::QuoteTicker;
use std::error::Error;
use tokio::sync::broadcast;

fn print_quote(index: usize, count: usize, quote: &Quote) {
    println!(
        "Quote {}/{}: “{}” — {}",
        index + 1,
        count,
        quote.text,
        quote.author
    );
}

/// Whether `rotations` has reached the optional limit. A limit of 0 allows none.
fn rotation_limit_reached(rotations: u32, max_rotations: Option<u32>) -> bool {
    max_rotations.is_some_and(|max| rotations >= max)
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Printing the navigation and page 1 summary
/// 2. Printing each carousel rotation and activity event
/// 3. Ctrl+C shutdown handling
///
/// When `max_rotations` is set the session ends after that many rotations.
pub async fn run_headless_mode(
    mut session: SessionData,
    max_rotations: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    SessionMessage::starting("headless", &session.state, session.settings.quote_interval).print();
    println!("{}", render_navigation(&session.state.router));

    if let Some(home) = session.state.home.as_ref() {
        print_cmd_info!(
            "Active Projects",
            "Page {} of {} ({} projects)",
            home.table.page(),
            home.table.total_pages(),
            home.table.len()
        );
        print_quote(home.carousel.index(), home.carousel.len(), home.carousel.current());
    }

    // Trigger shutdown on Ctrl+C
    let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender.send(());
        }
    });

    let mut ticker = QuoteTicker::start(session.settings.quote_interval);
    let mut rotations: u32 = 0;

    // Event loop: print events to console until shutdown or the rotation limit
    while !rotation_limit_reached(rotations, max_rotations) {
        tokio::select! {
            biased;

            _ = shutdown_receiver.recv() => {
                break;
            }
            Some(event) = ticker.next() => {
                println!("{}", event);
                session.state.add_event(event);
                session.state.update();
                if let Some(home) = session.state.home.as_ref() {
                    print_quote(home.carousel.index(), home.carousel.len(), home.carousel.current());
                }
                rotations += 1;
            }
            Some(event) = session.activity_receiver.recv() => {
                if event.should_display() {
                    println!("{}", event);
                }
            }
        }
    }

    SessionMessage::ShuttingDown.print();
    ticker.stop().await;
    SessionMessage::Exited.print();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_limit() {
        assert!(!rotation_limit_reached(5, None));
        assert!(rotation_limit_reached(0, Some(0)));
        assert!(!rotation_limit_reached(1, Some(2)));
        assert!(rotation_limit_reached(2, Some(2)));
    }
}
