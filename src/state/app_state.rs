//! Central `AppState` container owned by the runtime loop.

use crate::state::records::{ProjectedRecord, RawRecord, TypeRef};
use crate::state::types::{FilterCriteria, Focus, LoadStatus};

/// Global application state shared by the event, fetch, and UI layers.
///
/// Only the main loop mutates it. Background fetches report back through
/// channels and are applied by [`crate::app`] handlers.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current filter, sort and paging inputs.
    pub criteria: FilterCriteria,
    /// Records of the last accepted fetch.
    pub raw: Vec<RawRecord>,
    /// Filtered, projected and sorted records shown as cards.
    pub displayed: Vec<ProjectedRecord>,
    /// Types observed in `raw`, used by the type filter.
    pub type_catalog: Vec<TypeRef>,
    /// Loading indicator.
    pub status: LoadStatus,
    /// Index into `displayed` of the highlighted card.
    pub selected: usize,
    /// Which input receives key presses.
    pub focus: Focus,
    /// Whether the help overlay is shown.
    pub show_help: bool,

    // Fetch coordination
    /// Identifier of the latest fetch whose response will be accepted.
    pub latest_request_id: u64,
    /// Next fetch identifier to allocate.
    pub next_request_id: u64,

    /// Spinner frame advanced by the tick worker while loading.
    pub spinner_frame: usize,
}

impl AppState {
    /// What: Build a state seeded with `criteria`.
    ///
    /// Inputs:
    /// - `criteria`: initial filter criteria (e.g. from settings and CLI flags)
    ///
    /// Output:
    /// - Fresh state in `Loading` with nothing displayed.
    #[must_use]
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Currently highlighted card, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&ProjectedRecord> {
        self.displayed.get(self.selected)
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Label of the active type filter, `"All"` when none.
    #[must_use]
    pub fn type_filter_label(&self) -> String {
        match self.criteria.selected_type_id {
            None => "All".to_string(),
            Some(id) => self
                .type_catalog
                .iter()
                .find(|t| t.id == id)
                .map_or_else(|| format!("#{id}"), |t| t.name.clone()),
        }
    }
}
