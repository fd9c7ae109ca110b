use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic::send_fetch;
use crate::sources::CatalogClient;
use crate::state::AppState;
use crate::ui::ui;

use super::RunOptions;
use super::channels::Channels;
use super::handlers::handle_fetch_response;
use super::terminal::{restore_terminal, setup_terminal};
use super::workers::{spawn_event_thread, spawn_fetch_worker, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the Pokedex TUI end-to-end: initialize terminal and state, spawn the fetch,
/// tick and event workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: effective settings and the initial filter criteria
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - `POKEDEX_TEST_HEADLESS=1` skips raw mode, the alternate screen and the event thread.
/// - The first page is requested before the first frame, so the UI starts in `Loading`.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("POKEDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    let client = Arc::new(CatalogClient::from_settings(&options.settings)?);
    tracing::info!(
        endpoint = client.endpoint(),
        headless,
        page = options.criteria.page,
        "starting pokedex"
    );

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::with_criteria(options.criteria);
    let mut channels = Channels::new();

    if let Some(fetch_rx) = channels.fetch_rx.take() {
        spawn_fetch_worker(Arc::clone(&client), fetch_rx, channels.result_tx.clone());
    }
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    send_fetch(&mut app, &channels.fetch_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.fetch_tx) {
                    break;
                }
            }
            Some(resp) = channels.result_rx.recv() => {
                handle_fetch_response(&mut app, resp);
            }
            Some(()) = channels.tick_rx.recv() => {
                if app.is_loading() {
                    app.spinner_frame = app.spinner_frame.wrapping_add(1);
                }
            }
            else => break,
        }
    }

    tracing::debug!("main loop exited");
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
