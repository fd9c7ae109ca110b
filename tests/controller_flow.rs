//! End-to-end list controller flows through the public API.
//!
//! Records are decoded from GraphQL-shaped JSON fixtures, fed through
//! `handle_fetch_response`, then filtered, sorted and paged the way the
//! event layer does it.

use serde_json::json;
use tokio::sync::mpsc;

use pokedex::app::handle_fetch_response;
use pokedex::logic::{
    cycle_type_filter, next_page, prev_page, send_fetch, set_sort_key, set_type_filter,
    toggle_order, trigger_search,
};
use pokedex::sources::decode_records;
use pokedex::state::{
    AppState, FetchRequest, FetchResponse, LoadStatus, OrderDirection, RawRecord, SortKey,
};

fn record(
    id: i64,
    name: &str,
    types: &[(i64, &str)],
    hp: i64,
    attack: i64,
    defense: i64,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 100,
        "pokemon_v2_pokemontypes": types
            .iter()
            .map(|(tid, tname)| json!({"pokemon_v2_type": {"id": tid, "name": tname}}))
            .collect::<Vec<_>>(),
        "pokemon_v2_pokemonstats": [
            {"base_stat": hp, "pokemon_v2_stat": {"name": "hp"}},
            {"base_stat": attack, "pokemon_v2_stat": {"name": "attack"}},
            {"base_stat": defense, "pokemon_v2_stat": {"name": "defense"}},
        ],
        "pokemon_v2_pokemonabilities": [],
        "pokemon_v2_pokemonmoves": [],
        "pokemon_v2_pokemonspecy": {
            "pokemon_v2_pokemoncolor": {"name": "green"},
            "pokemon_v2_evolutionchain": null,
            "pokemon_v2_pokemonspeciesflavortexts": [
                {"flavor_text": "A strange seed was\nplanted on its\u{c}back at birth."}
            ]
        }
    })
}

fn page(records: Vec<serde_json::Value>) -> Vec<RawRecord> {
    let body = json!({"data": {"pokemon_v2_pokemon": records}}).to_string();
    decode_records(&body).expect("fixture decodes")
}

fn first_page() -> Vec<RawRecord> {
    page(vec![
        record(1, "bulbasaur", &[(12, "grass"), (4, "poison")], 45, 49, 49),
        record(4, "Charmander", &[(10, "fire")], 39, 52, 43),
        record(3, "venusaur", &[(12, "grass"), (4, "poison")], 80, 82, 83),
        record(7, "squirtle", &[(11, "water")], 44, 48, 65),
    ])
}

fn second_page() -> Vec<RawRecord> {
    page(vec![
        record(25, "pikachu", &[(13, "electric")], 35, 55, 40),
        record(43, "oddish", &[(12, "grass"), (4, "poison")], 45, 50, 55),
    ])
}

fn answer(app: &mut AppState, req: &FetchRequest, records: Vec<RawRecord>) -> bool {
    handle_fetch_response(
        app,
        FetchResponse {
            id: req.id,
            outcome: Ok(records),
        },
    )
}

fn names(app: &AppState) -> Vec<&str> {
    app.displayed.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn initial_fetch_then_local_filter_and_sort() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    send_fetch(&mut app, &tx);
    assert_eq!(app.status, LoadStatus::Loading);
    let req = rx.recv().await.expect("initial request");
    assert_eq!(req.params.offset, 0);
    assert_eq!(req.params.limit, 16);
    assert_eq!(req.params.order, OrderDirection::Asc);
    assert_eq!(req.params.name_pattern, "%");

    assert!(answer(&mut app, &req, first_page()));
    assert_eq!(app.status, LoadStatus::Ready);
    assert_eq!(names(&app), vec!["bulbasaur", "Charmander", "squirtle", "venusaur"]);
    assert_eq!(app.displayed[0].description, "A strange seed was planted on its back at birth.");

    set_type_filter(&mut app, Some(12));
    set_sort_key(&mut app, SortKey::Attack);
    assert_eq!(names(&app), vec!["venusaur", "bulbasaur"]);
    assert!(rx.try_recv().is_err(), "local changes never refetch");
}

#[tokio::test]
async fn paging_keeps_filter_and_sort_until_type_disappears() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    send_fetch(&mut app, &tx);
    let req = rx.recv().await.expect("request");
    answer(&mut app, &req, first_page());
    set_type_filter(&mut app, Some(12));
    set_sort_key(&mut app, SortKey::Defense);

    next_page(&mut app, &tx);
    let req = rx.recv().await.expect("next page");
    assert_eq!(req.params.offset, 16);
    answer(&mut app, &req, second_page());
    assert_eq!(app.criteria.selected_type_id, Some(12));
    assert_eq!(app.criteria.sort_key, SortKey::Defense);
    assert_eq!(names(&app), vec!["oddish"]);

    assert!(prev_page(&mut app, &tx));
    let req = rx.recv().await.expect("prev page");
    assert_eq!(req.params.offset, 0);
    answer(&mut app, &req, page(vec![record(25, "pikachu", &[(13, "electric")], 35, 55, 40)]));
    assert_eq!(app.criteria.selected_type_id, None);
    assert_eq!(names(&app), vec!["pikachu"]);
}

#[tokio::test]
async fn search_resets_filter_and_sort_and_keeps_page() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    send_fetch(&mut app, &tx);
    let req = rx.recv().await.expect("request");
    answer(&mut app, &req, first_page());
    cycle_type_filter(&mut app, 1);
    set_sort_key(&mut app, SortKey::Hp);
    next_page(&mut app, &tx);
    let _ = rx.recv().await;

    app.criteria.search_text = "saur".into();
    app.criteria.min_value = "40".into();
    app.criteria.max_value = "oops".into();
    trigger_search(&mut app, &tx);
    let req = rx.recv().await.expect("search");
    assert_eq!(app.criteria.selected_type_id, None);
    assert_eq!(app.criteria.sort_key, SortKey::Name);
    assert_eq!(app.criteria.page, 2);
    assert_eq!(req.params.name_pattern, "%saur%");
    assert_eq!(req.params.min_stat, 40);
    assert_eq!(req.params.max_stat, 9999);
}

#[tokio::test]
async fn slow_stale_response_cannot_overwrite_newer_page() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    send_fetch(&mut app, &tx);
    let first = rx.recv().await.expect("first");
    toggle_order(&mut app, &tx);
    let second = rx.recv().await.expect("second");
    assert_eq!(second.params.order, OrderDirection::Desc);

    assert!(answer(&mut app, &second, second_page()));
    assert!(!answer(&mut app, &first, first_page()));
    assert_eq!(names(&app), vec!["oddish", "pikachu"]);
}

#[tokio::test]
async fn failure_is_reported_not_shown_as_empty() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    send_fetch(&mut app, &tx);
    let req = rx.recv().await.expect("request");
    handle_fetch_response(
        &mut app,
        FetchResponse {
            id: req.id,
            outcome: Err("HTTP status 502".into()),
        },
    );
    assert!(app.displayed.is_empty());
    assert_eq!(app.status, LoadStatus::Failed("HTTP status 502".into()));
}
