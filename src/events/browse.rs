use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{
    cycle_sort_key, cycle_type_filter, next_page, prev_page, toggle_order, trigger_search,
};
use crate::state::{AppState, FetchRequest, Focus};

/// Cards per grid row; keep in sync with the renderer's column count.
pub const GRID_COLUMNS: usize = 4;

/// What: Handle a key press while the card grid is focused.
///
/// Inputs:
/// - `ke`: key event
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel for paging/order/search fetches
///
/// Output:
/// - `true` when the user asked to quit.
pub(super) fn handle_cards_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Left => move_selection(app, -1),
        KeyCode::Right => move_selection(app, 1),
        KeyCode::Up => move_selection(app, -GRID_COLUMNS.cast_signed()),
        KeyCode::Down => move_selection(app, GRID_COLUMNS.cast_signed()),
        KeyCode::Home => app.selected = 0,
        KeyCode::End => app.selected = app.displayed.len().saturating_sub(1),
        KeyCode::Char('n') | KeyCode::PageDown => next_page(app, fetch_tx),
        KeyCode::Char('p') | KeyCode::PageUp => {
            if !prev_page(app, fetch_tx) {
                tracing::debug!("already on the first page");
            }
        }
        KeyCode::Char('o') => toggle_order(app, fetch_tx),
        KeyCode::Char('t') => cycle_type_filter(app, 1),
        KeyCode::Char('T') => cycle_type_filter(app, -1),
        KeyCode::Char('s') => cycle_sort_key(app, 1),
        KeyCode::Char('S') => cycle_sort_key(app, -1),
        KeyCode::Char('/') => app.focus = Focus::Name,
        KeyCode::Char('f') => trigger_search(app, fetch_tx),
        _ => {}
    }
    false
}

/// Move the selection by `delta` cards, clamped to the displayed list.
fn move_selection(app: &mut AppState, delta: isize) {
    if app.displayed.is_empty() {
        app.selected = 0;
        return;
    }
    let last = app.displayed.len() - 1;
    app.selected = app.selected.saturating_add_signed(delta).min(last);
}
