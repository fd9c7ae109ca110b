use tokio::sync::mpsc;

use crate::state::{AppState, FetchParams, FetchRequest, LoadStatus, SortKey};

/// What: Send a fetch for the current criteria with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_request_id`, `latest_request_id`, `status`
/// - `fetch_tx`: Channel to send the `FetchRequest`
///
/// Output:
/// - Sends a `FetchRequest` built from `app.criteria` and enters the loading state.
///
/// Details:
/// - The id allows correlating responses so late answers to superseded requests can be
///   discarded. No caching: identical criteria always produce a new request.
pub fn send_fetch(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let id = app.next_request_id;
    app.next_request_id += 1;
    app.latest_request_id = id;
    app.status = LoadStatus::Loading;
    let params = FetchParams::from(&app.criteria);
    tracing::debug!(
        id,
        page = app.criteria.page,
        offset = params.offset,
        limit = params.limit,
        order = params.order.as_graphql(),
        pattern = %params.name_pattern,
        stat = params.stat.as_api_name(),
        min = params.min_stat,
        max = params.max_stat,
        "sending fetch"
    );
    if fetch_tx.send(FetchRequest { id, params }).is_err() {
        tracing::warn!(id, "fetch worker is gone; request dropped");
    }
}

/// What: Run the explicit search with the current text and stat range.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to send the `FetchRequest`
///
/// Details:
/// - Resets the type filter to all and the sort key to name before fetching, discarding any
///   custom filter/sort the user had applied. The page number is kept.
pub fn trigger_search(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    app.criteria.selected_type_id = None;
    app.criteria.sort_key = SortKey::Name;
    tracing::info!(
        text = %app.criteria.search_text,
        stat = app.criteria.stat.as_api_name(),
        min = %app.criteria.min_value,
        max = %app.criteria.max_value,
        "search triggered"
    );
    send_fetch(app, fetch_tx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OrderDirection;

    #[tokio::test]
    /// What: Ensure `send_fetch` increments identifiers and forwards page-derived params.
    ///
    /// Inputs:
    /// - Default `AppState` (page 1, page size 16, ascending).
    ///
    /// Output:
    /// - `latest_request_id` is `0`, then `1`; the request has offset 0, limit 16.
    async fn send_fetch_increments_and_sends() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        send_fetch(&mut app, &tx);
        assert_eq!(app.latest_request_id, 0);
        assert_eq!(app.status, LoadStatus::Loading);
        let req = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("request sent");
        assert_eq!(req.id, 0);
        assert_eq!(req.params.offset, 0);
        assert_eq!(req.params.limit, 16);
        assert_eq!(req.params.order, OrderDirection::Asc);
        assert_eq!(req.params.name_pattern, "%");

        send_fetch(&mut app, &tx);
        assert_eq!(app.latest_request_id, 1);
        assert_eq!(rx.recv().await.map(|r| r.id), Some(1));
    }

    #[tokio::test]
    /// What: Search resets type filter and sort key but keeps page and text.
    async fn search_resets_filter_and_sort() {
        let mut app = AppState::default();
        app.criteria.selected_type_id = Some(12);
        app.criteria.sort_key = SortKey::Defense;
        app.criteria.page = 3;
        app.criteria.search_text = "saur".into();
        let (tx, mut rx) = mpsc::unbounded_channel();
        trigger_search(&mut app, &tx);
        assert_eq!(app.criteria.selected_type_id, None);
        assert_eq!(app.criteria.sort_key, SortKey::Name);
        let req = rx.recv().await.expect("request sent");
        assert_eq!(req.params.offset, 32);
        assert_eq!(req.params.name_pattern, "%saur%");
    }
}
