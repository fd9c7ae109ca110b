//! Non-interactive modes: `--list-types` and `--print`.

use std::io::Write;

use crate::app::RunOptions;
use crate::logic::{project, sort_projected};
use crate::sources::{CatalogClient, FetchError};
use crate::state::{FetchParams, ProjectedRecord};
use crate::theme::Settings;
use crate::ui::card_text;

/// What: Print every type known to the endpoint as `id  name` lines.
///
/// Inputs:
/// - `settings`: effective settings (endpoint, timeouts)
///
/// Output:
/// - `Ok(count)` with the number of types printed, or the fetch error.
///
/// # Errors
/// - Client construction or the types query failed.
pub async fn run_list_types(settings: &Settings) -> Result<usize, FetchError> {
    let client = CatalogClient::from_settings(settings)?;
    let types = client.fetch_all_types().await?;
    let mut out = std::io::stdout().lock();
    for t in &types {
        let _ = writeln!(out, "{:>4}  {}", t.id, t.name);
    }
    tracing::info!(count = types.len(), "listed types");
    Ok(types.len())
}

/// What: Fetch one page and return it projected and sorted by the configured sort key.
///
/// # Errors
/// - Client construction or the records query failed.
pub async fn fetch_page(options: &RunOptions) -> Result<Vec<ProjectedRecord>, FetchError> {
    let client = CatalogClient::from_settings(&options.settings)?;
    let records = client
        .fetch_records(&FetchParams::from(&options.criteria))
        .await?;
    let mut projected: Vec<ProjectedRecord> = records.iter().map(project).collect();
    sort_projected(&mut projected, options.criteria.sort_key);
    Ok(projected)
}

/// What: Print one page as text cards.
///
/// Inputs:
/// - `options`: effective settings and criteria
///
/// Output:
/// - `Ok(count)` with the number of cards printed, or the fetch error.
///
/// # Errors
/// - Client construction or the records query failed.
pub async fn run_print(options: &RunOptions) -> Result<usize, FetchError> {
    let cards = fetch_page(options).await?;
    let mut out = std::io::stdout().lock();
    if cards.is_empty() {
        let _ = writeln!(out, "No matches found");
    }
    for rec in &cards {
        let _ = writeln!(out, "{}", card_text(rec));
    }
    let _ = writeln!(out, "Page {}", options.criteria.page);
    Ok(cards.len())
}
