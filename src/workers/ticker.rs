//! Quote rotation timer
//!
//! A background task that emits one [`Event::quote_tick`] per interval while
//! the carousel is on screen. [`QuoteTicker::start`] and [`QuoteTicker::stop`]
//! bracket its lifetime; dropping a running ticker stops it as well.

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use log::debug;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Handle to a running quote rotation task.
#[derive(Debug)]
pub struct QuoteTicker {
    shutdown_sender: broadcast::Sender<()>,
    handle: Option<JoinHandle<()>>,
    event_receiver: mpsc::Receiver<Event>,
}

impl QuoteTicker {
    /// Spawn the rotation task. The first tick fires one `interval` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(interval: Duration) -> Self {
        let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let handle = tokio::spawn(rotate_quotes(interval, event_sender, shutdown_receiver));
        debug!("Quote rotation started ({}ms)", interval.as_millis());
        Self {
            shutdown_sender,
            handle: Some(handle),
            event_receiver,
        }
    }

    /// Whether the rotation task is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Next tick, if one is already waiting.
    pub fn try_next(&mut self) -> Option<Event> {
        self.event_receiver.try_recv().ok()
    }

    /// Wait for the next tick. Returns `None` once the ticker has stopped
    /// and every pending tick has been taken.
    pub async fn next(&mut self) -> Option<Event> {
        self.event_receiver.recv().await
    }

    /// Cancel the rotation task and wait for it to exit.
    ///
    /// Returns `true` if this call did the cancelling, `false` if the
    /// ticker was already stopped.
    pub async fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        let _ = self.shutdown_sender.send(());
        let _ = handle.await;
        debug!("Quote rotation stopped");
        true
    }
}

impl Drop for QuoteTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.shutdown_sender.send(());
            handle.abort();
        }
    }
}

async fn rotate_quotes(
    interval: Duration,
    event_sender: mpsc::Sender<Event>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = shutdown.recv() => {
                break;
            }
            _ = ticker.tick() => {
                if event_sender.send(Event::quote_tick()).await.is_err() {
                    // Nobody is listening any more
                    break;
                }
            }
        }
    }
}
