use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{FetchRequest, FetchResponse};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop and the
///   background workers. The fetch request receiver is handed to the fetch worker.
pub struct Channels {
    /// Terminal events from the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the event thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests for the fetch worker.
    pub fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Taken by the fetch worker on spawn.
    pub fetch_rx: Option<mpsc::UnboundedReceiver<FetchRequest>>,
    /// Fetch results reported by the worker.
    pub result_tx: mpsc::UnboundedSender<FetchResponse>,
    /// Receiver side of fetch results.
    pub result_rx: mpsc::UnboundedReceiver<FetchResponse>,
    /// Periodic redraw ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver side of ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels used for runtime communication.
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel::<FetchRequest>();
        let (result_tx, result_rx) = mpsc::unbounded_channel::<FetchResponse>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_tx,
            fetch_rx: Some(fetch_rx),
            result_tx,
            result_rx,
            tick_tx,
            tick_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
