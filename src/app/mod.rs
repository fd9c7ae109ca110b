//! Pokedex application runtime.
//!
//! The main loop owns [`crate::state::AppState`]; background workers fetch pages, read
//! terminal events and emit redraw ticks, reporting back through channels.

use crate::state::FilterCriteria;
use crate::theme::Settings;

/// Channel bundle shared by the loop and the workers.
mod channels;
/// Applying fetch responses to the state.
mod handlers;
/// Event loop.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;
/// Background workers.
mod workers;

pub use handlers::handle_fetch_response;
pub use runtime::run;

/// Inputs of a TUI session, after merging settings with command-line overrides.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Effective settings (endpoint, timeouts, language).
    pub settings: Settings,
    /// Filter criteria for the first fetch.
    pub criteria: FilterCriteria,
}
