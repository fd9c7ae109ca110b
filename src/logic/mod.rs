//! Core non-UI logic: projection, type catalog, filtering, sorting and paging.

pub mod catalog;
pub mod filter;
pub mod paging;
pub mod project;
pub mod query;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use catalog::collect_type_catalog;
pub use filter::{cycle_type_filter, recompute_displayed, set_type_filter};
pub use paging::{next_page, prev_page, toggle_order};
pub use project::{DEFAULT_COLOR, clean_flavor_text, project, stat_value};
pub use query::{send_fetch, trigger_search};
pub use sort::{compare_names, cycle_sort_key, set_sort_key, sort_projected};
