//! Event handling layer for the Pokedex TUI.
//!
//! `handle_event` deals with global keys (quit, help, focus ring) and delegates to the
//! search form or the card grid depending on the focused element.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest};

mod browse;
mod form;

pub use browse::GRID_COLUMNS;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if is_ctrl_c(ke) {
        tracing::debug!("quit via ctrl+c");
        return true;
    }

    if app.show_help {
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return false;
    }

    match ke.code {
        KeyCode::Tab => {
            app.focus = app.focus.cycled(1);
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.cycled(-1);
            return false;
        }
        _ => {}
    }

    if app.focus.is_form() {
        form::handle_form_key(*ke, app, fetch_tx);
        false
    } else {
        browse::handle_cards_key(*ke, app, fetch_tx)
    }
}

fn is_ctrl_c(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(ke.code, KeyCode::Char('c' | 'C'))
}
