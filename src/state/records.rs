//! Typed shapes of the remote records and their display projection.
//!
//! The remote schema nests everything under `pokemon_v2_*` relation names;
//! the serde renames below keep the Rust field names readable. Object
//! relations may come back `null` and decode to `None`; array relations
//! default to empty.

use serde::{Deserialize, Serialize};

/// `{id, name}` descriptor of a creature type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct TypeRef {
    /// Remote type id.
    pub id: i64,
    /// Type name, e.g. `"grass"`.
    pub name: String,
}

/// A bare `{name}` object as returned for stats, abilities, moves, colors.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    /// Name field.
    pub name: String,
}

/// One entry of a record's type list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawTypeSlot {
    /// Referenced type.
    #[serde(rename = "pokemon_v2_type")]
    pub kind: Option<TypeRef>,
}

/// One entry of a record's stat list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawStat {
    /// Base value.
    pub base_stat: i64,
    /// Stat descriptor (`hp`, `attack`, ...).
    #[serde(rename = "pokemon_v2_stat")]
    pub stat: Option<NamedRef>,
}

/// One entry of a record's ability list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawAbilitySlot {
    /// Ability descriptor.
    #[serde(rename = "pokemon_v2_ability")]
    pub ability: Option<NamedRef>,
}

/// One entry of a record's move list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawMoveSlot {
    /// Move descriptor.
    #[serde(rename = "pokemon_v2_move")]
    pub move_ref: Option<NamedRef>,
}

/// Flavor text entry (already filtered to one language by the query).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawFlavorText {
    /// Text, possibly containing `\n` and form feeds.
    pub flavor_text: String,
}

/// Evolution chain of a species.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawEvolutionChain {
    /// Species in the chain.
    #[serde(rename = "pokemon_v2_pokemonspecies", default)]
    pub species: Vec<NamedRef>,
}

/// Species data attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawSpecies {
    /// Species color.
    #[serde(rename = "pokemon_v2_pokemoncolor")]
    pub color: Option<NamedRef>,
    /// Evolution chain.
    #[serde(rename = "pokemon_v2_evolutionchain")]
    pub evolution_chain: Option<RawEvolutionChain>,
    /// Flavor texts in the configured language.
    #[serde(rename = "pokemon_v2_pokemonspeciesflavortexts", default)]
    pub flavor_texts: Vec<RawFlavorText>,
}

/// A record exactly as returned by the remote query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// Remote id.
    pub id: i64,
    /// Lowercase name.
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: Option<i64>,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: Option<i64>,
    /// Types in slot order.
    #[serde(rename = "pokemon_v2_pokemontypes", default)]
    pub types: Vec<RawTypeSlot>,
    /// Base stats.
    #[serde(rename = "pokemon_v2_pokemonstats", default)]
    pub stats: Vec<RawStat>,
    /// Abilities.
    #[serde(rename = "pokemon_v2_pokemonabilities", default)]
    pub abilities: Vec<RawAbilitySlot>,
    /// First few moves.
    #[serde(rename = "pokemon_v2_pokemonmoves", default)]
    pub moves: Vec<RawMoveSlot>,
    /// Species info.
    #[serde(rename = "pokemon_v2_pokemonspecy", default)]
    pub species: Option<RawSpecies>,
}

impl RawRecord {
    /// Type references in slot order, skipping null slots.
    pub fn type_refs(&self) -> impl Iterator<Item = &TypeRef> {
        self.types.iter().filter_map(|t| t.kind.as_ref())
    }

    /// Whether this record carries the type `type_id`.
    #[must_use]
    pub fn has_type(&self, type_id: i64) -> bool {
        self.type_refs().any(|t| t.id == type_id)
    }
}

/// Flat, display-ready view of a [`RawRecord`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectedRecord {
    /// Remote id.
    pub id: i64,
    /// Name.
    pub name: String,
    /// HP, `None` when the stat is absent.
    pub hp: Option<i64>,
    /// Attack.
    pub attack: Option<i64>,
    /// Defense.
    pub defense: Option<i64>,
    /// Special attack.
    pub special_attack: Option<i64>,
    /// Height.
    pub height: Option<i64>,
    /// Weight.
    pub weight: Option<i64>,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Ability names.
    pub abilities: Vec<String>,
    /// Move names.
    pub moves: Vec<String>,
    /// Species names of the evolution chain.
    pub evolution_chain: Vec<String>,
    /// Single-line description, empty when unavailable.
    pub description: String,
    /// Species color name, `"transparent"` when unset.
    pub color: String,
}
