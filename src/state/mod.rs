//! Application state and the value types it is built from.

pub mod app_state;
pub mod records;
pub mod types;

// Public re-exports to keep paths short (crate::state::...)
pub use app_state::AppState;
pub use records::{
    NamedRef, ProjectedRecord, RawAbilitySlot, RawEvolutionChain, RawFlavorText, RawMoveSlot,
    RawRecord, RawSpecies, RawStat, RawTypeSlot, TypeRef,
};
pub use types::{
    DEFAULT_MAX_STAT, DEFAULT_MIN_STAT, DEFAULT_PAGE_SIZE, FetchParams, FetchRequest,
    FetchResponse, FilterCriteria, Focus, LoadStatus, OrderDirection, SortKey, StatName,
};
