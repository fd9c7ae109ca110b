use std::cmp::Ordering;

use crate::state::{AppState, ProjectedRecord, SortKey};

/// Case-insensitive name order with a raw-string tiebreak.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stat value used for ordering; a missing stat counts as zero.
fn sort_value(r: &ProjectedRecord, key: SortKey) -> i64 {
    match key {
        SortKey::Name => 0,
        SortKey::Hp => r.hp.unwrap_or(0),
        SortKey::Attack => r.attack.unwrap_or(0),
        SortKey::Defense => r.defense.unwrap_or(0),
    }
}

/// What: Sort projected records in place by `key`.
///
/// Inputs:
/// - `records`: projected records to reorder
/// - `key`: sort key
///
/// Output:
/// - `Name` sorts ascending; every stat key sorts descending (highest first).
///
/// Details:
/// - Independent of the remote order toggle. The sort is stable, so equal stats keep
///   their previous relative order.
pub fn sort_projected(records: &mut [ProjectedRecord], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
        _ => records.sort_by(|a, b| sort_value(b, key).cmp(&sort_value(a, key))),
    }
}

/// What: Change the sort key and recompute the displayed list without refetching.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `key`: new sort key
pub fn set_sort_key(app: &mut AppState, key: SortKey) {
    app.criteria.sort_key = key;
    tracing::debug!(sort = key.as_config_key(), "sort key changed");
    crate::logic::recompute_displayed(app);
}

/// Step the sort key by `delta` and recompute.
pub fn cycle_sort_key(app: &mut AppState, delta: isize) {
    let key = app.criteria.sort_key.cycled(delta);
    set_sort_key(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::project;
    use crate::test_utils::sample_page;

    fn projected() -> Vec<ProjectedRecord> {
        sample_page().iter().map(project).collect()
    }

    fn names(v: &[ProjectedRecord]) -> Vec<&str> {
        v.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    /// What: Name sort is ascending and ignores case
    ///
    /// - Input: "venusaur", "Charmander", "bulbasaur", "gyarados"
    /// - Output: bulbasaur, Charmander, gyarados, venusaur
    fn name_sort_case_insensitive() {
        let mut v = projected();
        sort_projected(&mut v, SortKey::Name);
        assert_eq!(
            names(&v),
            vec!["bulbasaur", "Charmander", "gyarados", "venusaur"]
        );
    }

    #[test]
    /// What: Stat sorts are descending
    fn stat_sort_descending() {
        let mut v = projected();
        sort_projected(&mut v, SortKey::Attack);
        assert_eq!(
            names(&v),
            vec!["gyarados", "venusaur", "Charmander", "bulbasaur"]
        );
        sort_projected(&mut v, SortKey::Hp);
        assert_eq!(
            names(&v),
            vec!["gyarados", "venusaur", "bulbasaur", "Charmander"]
        );
    }

    #[test]
    /// What: Missing stats sort as zero, after every present value
    fn missing_stat_sorts_last() {
        let mut v = projected();
        v[0].defense = None;
        let without = v[0].name.clone();
        sort_projected(&mut v, SortKey::Defense);
        assert_eq!(v.last().map(|p| p.name.clone()), Some(without));
    }

    #[test]
    /// What: Equal names differing only in case have a deterministic order
    fn name_tiebreak_is_stable() {
        assert_eq!(compare_names("Abra", "abra"), Ordering::Less);
        assert_eq!(compare_names("abra", "abra"), Ordering::Equal);
    }
}
