use std::collections::HashSet;

use crate::state::{RawRecord, TypeRef};

/// What: Collect the unique types referenced by a page of records.
///
/// Inputs:
/// - `raw`: records of the last fetch
///
/// Output:
/// - Types deduplicated by id, in order of first appearance.
///
/// Details:
/// - Reflects only the given page, not every type the remote source knows.
#[must_use]
pub fn collect_type_catalog(raw: &[RawRecord]) -> Vec<TypeRef> {
    let mut seen = HashSet::new();
    raw.iter()
        .flat_map(RawRecord::type_refs)
        .filter(|t| seen.insert(t.id))
        .cloned()
        .collect()
}
