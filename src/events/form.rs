use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::trigger_search;
use crate::state::{AppState, FetchRequest, Focus};

/// What: Handle a key press while one of the search form inputs is focused.
///
/// Inputs:
/// - `ke`: key event
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel used when Enter triggers the search
///
/// Details:
/// - The name field accepts any printable character; min/max accept digits only.
/// - Left/Right cycle the stat selector regardless of which form field is focused.
/// - Enter runs the search and moves focus to the cards; Esc only moves focus.
pub(super) fn handle_form_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) {
    match ke.code {
        KeyCode::Enter => {
            trigger_search(app, fetch_tx);
            app.focus = Focus::Cards;
        }
        KeyCode::Esc => app.focus = Focus::Cards,
        KeyCode::Left => app.criteria.stat = app.criteria.stat.cycled(-1),
        KeyCode::Right => app.criteria.stat = app.criteria.stat.cycled(1),
        KeyCode::Backspace => {
            if let Some(field) = focused_text(app) {
                field.pop();
            }
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            insert_char(app, ch);
        }
        _ => {}
    }
}

fn focused_text(app: &mut AppState) -> Option<&mut String> {
    match app.focus {
        Focus::Name => Some(&mut app.criteria.search_text),
        Focus::Min => Some(&mut app.criteria.min_value),
        Focus::Max => Some(&mut app.criteria.max_value),
        Focus::Stat | Focus::Cards => None,
    }
}

fn insert_char(app: &mut AppState, ch: char) {
    let digits_only = matches!(app.focus, Focus::Min | Focus::Max);
    if digits_only && !ch.is_ascii_digit() {
        return;
    }
    if let Some(field) = focused_text(app) {
        field.push(ch);
    }
}
