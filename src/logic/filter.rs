use crate::state::{AppState, ProjectedRecord};

/// What: Recompute `app.displayed` from the raw dataset and the current criteria.
///
/// Inputs:
/// - `app`: Mutable application state containing `raw`, the type filter and sort key
///
/// Output:
/// - Updates `app.displayed` and keeps `app.selected` in range.
///
/// Details:
/// - Filters raw records by type membership, projects them, then sorts by the sort key.
/// - Selection is restored by name when the record is still displayed; otherwise clamped,
///   or reset to zero when the list is empty.
pub fn recompute_displayed(app: &mut AppState) {
    let prev_name = app.selected_record().map(|p| p.name.clone());

    let type_id = app.criteria.selected_type_id;
    let mut displayed: Vec<ProjectedRecord> = app
        .raw
        .iter()
        .filter(|r| type_id.is_none_or(|id| r.has_type(id)))
        .map(crate::logic::project)
        .collect();
    crate::logic::sort_projected(&mut displayed, app.criteria.sort_key);
    app.displayed = displayed;

    if let Some(name) = prev_name
        && let Some(pos) = app.displayed.iter().position(|p| p.name == name)
    {
        app.selected = pos;
    } else if app.displayed.is_empty() {
        app.selected = 0;
    } else {
        app.selected = app.selected.min(app.displayed.len() - 1);
    }
}

/// What: Set the type filter and recompute the displayed list without refetching.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `type_id`: type to keep, `None` for all
pub fn set_type_filter(app: &mut AppState, type_id: Option<i64>) {
    app.criteria.selected_type_id = type_id;
    tracing::debug!(type_id = ?type_id, "type filter changed");
    recompute_displayed(app);
}

/// What: Step the type filter through "All" followed by the catalog entries.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: `1` for next, `-1` for previous
///
/// Details:
/// - A filter id missing from the catalog is treated as "All" for positioning.
pub fn cycle_type_filter(app: &mut AppState, delta: isize) {
    let options: Vec<Option<i64>> = std::iter::once(None)
        .chain(app.type_catalog.iter().map(|t| Some(t.id)))
        .collect();
    let len = options.len().cast_signed();
    let pos = options
        .iter()
        .position(|o| *o == app.criteria.selected_type_id)
        .unwrap_or(0)
        .cast_signed();
    let next = options[(pos + delta).rem_euclid(len).cast_unsigned()];
    set_type_filter(app, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::collect_type_catalog;
    use crate::state::SortKey;
    use crate::test_utils::{new_app, sample_page};

    fn loaded_app() -> AppState {
        let mut app = new_app();
        app.raw = sample_page();
        app.type_catalog = collect_type_catalog(&app.raw);
        recompute_displayed(&mut app);
        app
    }

    #[test]
    /// What: Type filter keeps only members, sorted by name by default
    fn type_filter_keeps_members() {
        let mut app = loaded_app();
        set_type_filter(&mut app, Some(12));
        let names: Vec<&str> = app.displayed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "venusaur"]);
        set_type_filter(&mut app, None);
        assert_eq!(app.displayed.len(), 4);
    }

    #[test]
    /// What: Stat sort after a type filter keeps the filter
    fn stat_sort_preserves_type_filter() {
        let mut app = loaded_app();
        set_type_filter(&mut app, Some(12));
        crate::logic::set_sort_key(&mut app, SortKey::Attack);
        let names: Vec<&str> = app.displayed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["venusaur", "bulbasaur"]);
        assert_eq!(app.criteria.selected_type_id, Some(12));
    }

    #[test]
    /// What: Selection follows the highlighted record across recomputes
    fn selection_preserved_by_name() {
        let mut app = loaded_app();
        app.selected = app
            .displayed
            .iter()
            .position(|p| p.name == "gyarados")
            .unwrap_or_default();
        crate::logic::set_sort_key(&mut app, SortKey::Hp);
        assert_eq!(app.displayed[app.selected].name, "gyarados");

        set_type_filter(&mut app, Some(10));
        assert_eq!(app.selected, 0);
        set_type_filter(&mut app, Some(999));
        assert!(app.displayed.is_empty());
        assert_eq!(app.selected, 0);
    }

    #[test]
    /// What: Cycling visits All then each catalog type, wrapping both ways
    fn cycle_type_filter_wraps() {
        let mut app = loaded_app();
        cycle_type_filter(&mut app, 1);
        assert_eq!(app.criteria.selected_type_id, Some(12));
        cycle_type_filter(&mut app, -1);
        assert_eq!(app.criteria.selected_type_id, None);
        cycle_type_filter(&mut app, -1);
        assert_eq!(app.criteria.selected_type_id, Some(3));
        cycle_type_filter(&mut app, 1);
        assert_eq!(app.criteria.selected_type_id, None);
    }
}
