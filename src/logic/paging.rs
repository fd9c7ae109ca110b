use tokio::sync::mpsc;

use crate::logic::send_fetch;
use crate::state::{AppState, FetchRequest};

/// What: Advance to the next page and fetch it.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to send the `FetchRequest`
///
/// Details:
/// - There is no upper bound: paging past the last record yields an empty list.
pub fn next_page(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    app.criteria.page = app.criteria.page.saturating_add(1);
    send_fetch(app, fetch_tx);
}

/// What: Go back one page and fetch it.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to send the `FetchRequest`
///
/// Output:
/// - `false` without fetching when already on page 1.
pub fn prev_page(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    if app.criteria.page <= 1 {
        app.criteria.page = 1;
        return false;
    }
    app.criteria.page -= 1;
    send_fetch(app, fetch_tx);
    true
}

/// Flip the remote order and refetch; the local sort key is untouched.
pub fn toggle_order(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    app.criteria.order = app.criteria.order.toggled();
    send_fetch(app, fetch_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OrderDirection, SortKey};

    #[tokio::test]
    /// What: Page never drops below 1 and going back from 1 sends nothing
    async fn prev_page_floor() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!prev_page(&mut app, &tx));
        assert_eq!(app.criteria.page, 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    /// What: Next then previous reissues identical params
    ///
    /// - Input: page 1 → next → prev
    /// - Output: second and third requests differ only by id; first == third
    async fn next_then_prev_reissues_same_params() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_fetch(&mut app, &tx);
        next_page(&mut app, &tx);
        assert!(prev_page(&mut app, &tx));
        let first = rx.recv().await.expect("first");
        let second = rx.recv().await.expect("second");
        let third = rx.recv().await.expect("third");
        assert_eq!(second.params.offset, 16);
        assert_eq!(first.params, third.params);
        assert_ne!(first.id, third.id);
    }

    #[tokio::test]
    /// What: Order toggle refetches with the new order and leaves the sort key alone
    async fn toggle_order_refetches() {
        let mut app = AppState::default();
        app.criteria.sort_key = SortKey::Hp;
        let (tx, mut rx) = mpsc::unbounded_channel();
        toggle_order(&mut app, &tx);
        let req = rx.recv().await.expect("request");
        assert_eq!(req.params.order, OrderDirection::Desc);
        assert_eq!(app.criteria.sort_key, SortKey::Hp);
    }
}
