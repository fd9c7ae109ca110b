use crate::state::{ProjectedRecord, RawRecord};

/// Color used when a species has no color.
pub const DEFAULT_COLOR: &str = "transparent";

/// What: Look up a base stat by its remote name.
///
/// Inputs:
/// - `raw`: record to search
/// - `stat_name`: remote stat name such as `"hp"` or `"special-attack"`
///
/// Output:
/// - `Some(value)` for the first matching stat row; `None` when absent.
#[must_use]
pub fn stat_value(raw: &RawRecord, stat_name: &str) -> Option<i64> {
    raw.stats
        .iter()
        .find(|s| s.stat.as_ref().is_some_and(|n| n.name == stat_name))
        .map(|s| s.base_stat)
}

/// Collapse line feeds and form feeds in flavor text to spaces.
#[must_use]
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\n', '\u{c}'], " ")
}

/// What: Project a raw record into its flat display shape.
///
/// Inputs:
/// - `raw`: record as received from the remote source
///
/// Output:
/// - `ProjectedRecord` with looked-up stats, joined names, cleaned description and color.
///
/// Details:
/// - Pure and total: absent stats become `None`, a missing description becomes an empty
///   string and a missing species color becomes [`DEFAULT_COLOR`].
/// - Name lists keep the order of the remote lists and skip null entries.
#[must_use]
pub fn project(raw: &RawRecord) -> ProjectedRecord {
    let species = raw.species.as_ref();
    let description = species
        .and_then(|s| s.flavor_texts.first())
        .map(|f| clean_flavor_text(&f.flavor_text))
        .unwrap_or_default();
    let color = species
        .and_then(|s| s.color.as_ref())
        .map(|c| c.name.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());
    let evolution_chain = species
        .and_then(|s| s.evolution_chain.as_ref())
        .map(|chain| chain.species.iter().map(|n| n.name.clone()).collect())
        .unwrap_or_default();

    ProjectedRecord {
        id: raw.id,
        name: raw.name.clone(),
        hp: stat_value(raw, "hp"),
        attack: stat_value(raw, "attack"),
        defense: stat_value(raw, "defense"),
        special_attack: stat_value(raw, "special-attack"),
        height: raw.height,
        weight: raw.weight,
        types: raw.type_refs().map(|t| t.name.clone()).collect(),
        abilities: raw
            .abilities
            .iter()
            .filter_map(|a| a.ability.as_ref().map(|n| n.name.clone()))
            .collect(),
        moves: raw
            .moves
            .iter()
            .filter_map(|m| m.move_ref.as_ref().map(|n| n.name.clone()))
            .collect(),
        evolution_chain,
        description,
        color,
    }
}
