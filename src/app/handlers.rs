use crate::logic::{collect_type_catalog, recompute_displayed};
use crate::state::{AppState, FetchResponse, LoadStatus};

/// What: Apply a fetch response to the state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `resp`: response from the fetch worker
///
/// Output:
/// - `true` when the response was applied; `false` when it was stale and discarded.
///
/// Details:
/// - Only the response to the latest request is applied, so a slow earlier request can
///   never overwrite newer results.
/// - Success replaces the raw dataset wholesale, rebuilds the type catalog, clears a type
///   filter that no longer exists on the page and recomputes the displayed list.
/// - Any applied response moves the selection back to the first card.
/// - Failure empties the dataset and records `LoadStatus::Failed` so the UI can tell it
///   apart from an empty page.
pub fn handle_fetch_response(app: &mut AppState, resp: FetchResponse) -> bool {
    if resp.id != app.latest_request_id {
        tracing::debug!(
            id = resp.id,
            latest = app.latest_request_id,
            "discarding stale fetch response"
        );
        return false;
    }
    match resp.outcome {
        Ok(records) => {
            tracing::info!(
                id = resp.id,
                count = records.len(),
                page = app.criteria.page,
                "page loaded"
            );
            app.raw = records;
            app.displayed.clear();
            app.selected = 0;
            app.type_catalog = collect_type_catalog(&app.raw);
            if let Some(type_id) = app.criteria.selected_type_id
                && !app.type_catalog.iter().any(|t| t.id == type_id)
            {
                tracing::debug!(type_id, "type filter not present on new page; clearing");
                app.criteria.selected_type_id = None;
            }
            app.status = LoadStatus::Ready;
        }
        Err(message) => {
            tracing::warn!(id = resp.id, error = %message, "page failed to load");
            app.raw.clear();
            app.displayed.clear();
            app.selected = 0;
            app.type_catalog.clear();
            app.criteria.selected_type_id = None;
            app.status = LoadStatus::Failed(message);
        }
    }
    recompute_displayed(app);
    true
}
