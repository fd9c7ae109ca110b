//! Test utilities for common test setup.
//!
//! This module provides shared record builders used across multiple test modules.

#[cfg(test)]
use crate::state::{
    AppState, NamedRef, RawRecord, RawSpecies, RawStat, RawTypeSlot, TypeRef,
};

#[cfg(test)]
/// What: Build a raw record with the given types and stats.
///
/// Inputs:
/// - `id`, `name`: identity
/// - `types`: `(type_id, type_name)` pairs in slot order
/// - `stats`: `(stat_name, base_stat)` pairs
///
/// Output: `RawRecord` with no species data, abilities or moves
pub fn raw(id: i64, name: &str, types: &[(i64, &str)], stats: &[(&str, i64)]) -> RawRecord {
    RawRecord {
        id,
        name: name.to_string(),
        height: Some(7),
        weight: Some(69),
        types: types
            .iter()
            .map(|(tid, tname)| RawTypeSlot {
                kind: Some(TypeRef {
                    id: *tid,
                    name: (*tname).to_string(),
                }),
            })
            .collect(),
        stats: stats
            .iter()
            .map(|(sname, v)| RawStat {
                base_stat: *v,
                stat: Some(NamedRef {
                    name: (*sname).to_string(),
                }),
            })
            .collect(),
        abilities: Vec::new(),
        moves: Vec::new(),
        species: Some(RawSpecies::default()),
    }
}

#[cfg(test)]
/// What: A small mixed page: two grass, one fire, one water/flying record.
///
/// Output: Records named with mixed case so name sorting is observable
pub fn sample_page() -> Vec<RawRecord> {
    vec![
        raw(
            3,
            "venusaur",
            &[(12, "grass"), (4, "poison")],
            &[("hp", 80), ("attack", 82), ("defense", 83)],
        ),
        raw(
            4,
            "Charmander",
            &[(10, "fire")],
            &[("hp", 39), ("attack", 52), ("defense", 43)],
        ),
        raw(
            1,
            "bulbasaur",
            &[(12, "grass"), (4, "poison")],
            &[("hp", 45), ("attack", 49), ("defense", 49)],
        ),
        raw(
            130,
            "gyarados",
            &[(11, "water"), (3, "flying")],
            &[("hp", 95), ("attack", 125), ("defense", 79)],
        ),
    ]
}

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}
