//! Command-line argument parsing and the non-interactive modes.

pub mod definition;
pub mod oneshot;

pub use definition::{Args, determine_log_level};
pub use oneshot::{fetch_page, run_list_types, run_print};
