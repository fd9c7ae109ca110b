use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::sources::CatalogClient;
use crate::state::{FetchRequest, FetchResponse};

/// Spinner redraw interval while loading.
const TICK_MS: u64 = 120;

/// What: Spawn background worker for fetch requests.
///
/// Inputs:
/// - `client`: shared catalog client
/// - `fetch_rx`: Channel receiver for fetch requests
/// - `result_tx`: Channel sender for fetch responses
///
/// Details:
/// - Each request runs in its own task; in-flight requests are never cancelled, so a
///   later request may finish first. The main loop discards stale responses by id.
pub fn spawn_fetch_worker(
    client: Arc<CatalogClient>,
    mut fetch_rx: mpsc::UnboundedReceiver<FetchRequest>,
    result_tx: mpsc::UnboundedSender<FetchResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = fetch_rx.recv().await {
            let client = Arc::clone(&client);
            let tx = result_tx.clone();
            tokio::spawn(async move {
                let outcome = client
                    .fetch_records(&req.params)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(FetchResponse {
                    id: req.id,
                    outcome,
                });
            });
        }
        tracing::debug!("fetch worker stopped");
    });
}

/// What: Spawn the tick worker that drives spinner redraws.
///
/// Inputs:
/// - `tick_tx`: Channel sender for ticks; the worker stops when the receiver is dropped
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(TICK_MS));
        loop {
            ticker.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: skip spawning entirely (tests)
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: flag checked between polls so the thread exits promptly
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // ignore transient read errors and continue
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchParams, FilterCriteria};
    use crate::theme::Settings;

    #[tokio::test]
    /// What: The fetch worker answers every request with its own id
    ///
    /// - Input: Two requests against an unreachable endpoint
    /// - Output: Two failed responses carrying ids 7 and 8
    async fn fetch_worker_echoes_ids() {
        let settings = Settings {
            endpoint: "http://127.0.0.1:9/graphql".into(),
            connect_timeout_secs: 1,
            request_timeout_secs: 2,
            ..Settings::default()
        };
        let client = Arc::new(CatalogClient::from_settings(&settings).expect("client"));
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(client, req_rx, res_tx);
        let params = FetchParams::from(&FilterCriteria::default());
        for id in [7, 8] {
            req_tx
                .send(FetchRequest {
                    id,
                    params: params.clone(),
                })
                .expect("send");
        }
        let mut ids = Vec::new();
        for _ in 0..2 {
            let resp = tokio::time::timeout(Duration::from_secs(5), res_rx.recv())
                .await
                .ok()
                .flatten()
                .expect("response");
            assert!(resp.outcome.is_err());
            ids.push(resp.id);
        }
        ids.sort_unstable();
        assert_eq!(ids, vec![7, 8]);
    }
}
