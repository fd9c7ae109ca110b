//! GraphQL documents, request bodies and response envelopes.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::FetchError;
use crate::state::{FetchParams, RawRecord, TypeRef};

/// Records query: name `_ilike` match plus an inclusive range on one stat row.
pub const RECORDS_QUERY: &str = r"query GetPokemons(
  $orderBy: order_by!,
  $limit: Int!,
  $offset: Int!,
  $searchQuery: String,
  $selectedStat: String,
  $minStat: Int = 0,
  $maxStat: Int = 9999,
  $languageId: Int!,
  $movesLimit: Int!
) {
  pokemon_v2_pokemon(
    where: {
      name: { _ilike: $searchQuery },
      pokemon_v2_pokemonstats: {
        pokemon_v2_stat: { name: { _eq: $selectedStat } },
        base_stat: { _gte: $minStat, _lte: $maxStat }
      }
    }
    order_by: { name: $orderBy }
    limit: $limit
    offset: $offset
  ) {
    id
    name
    height
    weight
    pokemon_v2_pokemontypes { pokemon_v2_type { id name } }
    pokemon_v2_pokemonstats { base_stat pokemon_v2_stat { name } }
    pokemon_v2_pokemonabilities { pokemon_v2_ability { name } }
    pokemon_v2_pokemonmoves(limit: $movesLimit) { pokemon_v2_move { name } }
    pokemon_v2_pokemonspecy {
      pokemon_v2_pokemoncolor { name }
      pokemon_v2_evolutionchain { pokemon_v2_pokemonspecies { name } }
      pokemon_v2_pokemonspeciesflavortexts(
        where: { language_id: { _eq: $languageId } }
        limit: 1
      ) { flavor_text }
    }
  }
}";

/// Every type descriptor, independent of paging.
pub const TYPES_QUERY: &str = r"query GetTypes {
  pokemon_v2_type(order_by: { id: asc }) { id name }
}";

/// What: Build the JSON body of a records query.
///
/// Inputs:
/// - `params`: paging window, order, name pattern and stat range
/// - `language_id`: flavor text language
/// - `moves_limit`: number of moves to include per record
///
/// Output:
/// - `{"query": ..., "variables": {...}}` ready to POST.
#[must_use]
pub fn records_request_body(params: &FetchParams, language_id: i64, moves_limit: u32) -> Value {
    json!({
        "query": RECORDS_QUERY,
        "operationName": "GetPokemons",
        "variables": {
            "orderBy": params.order,
            "limit": params.limit,
            "offset": params.offset,
            "searchQuery": params.name_pattern,
            "selectedStat": params.stat.as_api_name(),
            "minStat": params.min_stat,
            "maxStat": params.max_stat,
            "languageId": language_id,
            "movesLimit": moves_limit,
        }
    })
}

/// JSON body of the types query.
#[must_use]
pub fn types_request_body() -> Value {
    json!({ "query": TYPES_QUERY, "operationName": "GetTypes", "variables": {} })
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RecordsData {
    pokemon_v2_pokemon: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct TypesData {
    pokemon_v2_type: Vec<TypeRef>,
}

/// Parse an envelope; reported errors win over partial data.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let env: Envelope<T> = serde_json::from_str(body)?;
    if !env.errors.is_empty() {
        return Err(FetchError::Graphql(
            env.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    env.data.ok_or(FetchError::MissingData)
}

/// What: Decode the body of a records query.
///
/// Inputs:
/// - `body`: raw response text
///
/// Output:
/// - `Ok(records)` in server order; `Err` for invalid JSON, GraphQL errors or missing data.
///
/// # Errors
/// - `FetchError::Decode` when the body is not the expected shape
/// - `FetchError::Graphql` when the `errors` array is non-empty
/// - `FetchError::MissingData` when `data` is absent or null
pub fn decode_records(body: &str) -> Result<Vec<RawRecord>, FetchError> {
    decode_envelope::<RecordsData>(body).map(|d| d.pokemon_v2_pokemon)
}

/// What: Decode the body of the types query.
///
/// # Errors
/// - Same cases as [`decode_records`]
pub fn decode_types(body: &str) -> Result<Vec<TypeRef>, FetchError> {
    decode_envelope::<TypesData>(body).map(|d| d.pokemon_v2_type)
}
