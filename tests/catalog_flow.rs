//! End-to-end flow tests over a recorded catalog response
//!
//! Drives the decoded fixture through the update loop the same way a live
//! fetch resolution would arrive, without touching the network.

use wares_app::{filter_products, update, Message, UpdateAction};
use wares_catalog::decode_products;
use wares_core::{LoadState, FETCH_FAILED_MSG, MAX_PRODUCTS};

const FIXTURE: &str = include_str!("fixtures/products.json");

/// Start a reload and return the generation its fetch was tagged with
fn start_reload(state: &mut wares_app::AppState) -> u64 {
    match update(state, Message::Reload).action {
        Some(UpdateAction::FetchProducts { generation }) => generation,
        other => panic!("expected a fetch action, got {other:?}"),
    }
}

#[test]
fn test_fixture_is_a_valid_catalog_envelope() {
    let envelope: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(envelope["products"].as_array().unwrap().len(), 25);
    assert_eq!(envelope["total"], 100);
    assert_eq!(envelope["products"][0]["id"], 1);
    assert_eq!(envelope["products"][0]["title"], "iPhone 9");
}

#[test]
fn test_fixture_decodes_and_caps_at_twenty() {
    let products = decode_products(FIXTURE).unwrap();

    // 25 products in the body, capped to 20 in server order
    assert_eq!(products.len(), MAX_PRODUCTS);
    assert_eq!(products[0].title, "iPhone 9");
    assert_eq!(products[19].title, "Freckle Treatment Cream- 15gm");
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
}

#[test]
fn test_fixture_passthrough_fields_survive_decode() {
    let products = decode_products(FIXTURE).unwrap();
    let first = &products[0];
    assert_eq!(first.price, 549.0);
    assert_eq!(first.brand.as_deref(), Some("Apple"));
    assert_eq!(first.category.as_deref(), Some("smartphones"));
    assert!(first.thumbnail.as_deref().unwrap().starts_with("https://"));
}

#[test]
fn test_successful_load_flow() {
    let mut state = wares_app::AppState::new();
    assert_eq!(state.load_state, LoadState::Idle);

    let generation = start_reload(&mut state);
    assert_eq!(state.load_state, LoadState::Loading);

    let products = decode_products(FIXTURE).unwrap();
    update(
        &mut state,
        Message::ProductsFetched {
            generation,
            products,
        },
    );

    assert_eq!(state.load_state, LoadState::Loaded);
    assert_eq!(state.products.len(), MAX_PRODUCTS);
    assert_eq!(state.visible_len(), MAX_PRODUCTS);
}

#[test]
fn test_search_narrows_loaded_fixture() {
    let mut state = wares_app::AppState::new();
    let generation = start_reload(&mut state);
    update(
        &mut state,
        Message::ProductsFetched {
            generation,
            products: decode_products(FIXTURE).unwrap(),
        },
    );

    for c in "perfume".chars() {
        update(&mut state, Message::QueryPush(c));
    }

    let visible = state.visible();
    assert!(!visible.is_empty());
    assert!(visible
        .iter()
        .all(|p| p.title.to_lowercase().contains("perfume")));

    // Clearing the query restores the full view in original order
    update(&mut state, Message::QueryClear);
    assert_eq!(state.visible_len(), MAX_PRODUCTS);
    assert_eq!(state.visible()[0].title, "iPhone 9");
}

#[test]
fn test_filter_is_a_pure_view_over_the_fixture() {
    let products = decode_products(FIXTURE).unwrap();

    let once = filter_products(&products, "apple");
    let twice = filter_products(&products, "apple");
    assert_eq!(once, twice);

    // The underlying collection is untouched
    assert_eq!(products.len(), MAX_PRODUCTS);
}

#[test]
fn test_failed_load_flow_shows_fixed_message() {
    let mut state = wares_app::AppState::new();
    let generation = start_reload(&mut state);

    update(
        &mut state,
        Message::ProductsFetchFailed {
            generation,
            message: FETCH_FAILED_MSG.to_string(),
        },
    );

    assert_eq!(state.load_state.error_message(), Some(FETCH_FAILED_MSG));
    assert!(!state.load_state.is_loading());
    // Nothing was ever loaded, so the list is empty but the app is alive
    assert!(state.products.is_empty());
    assert!(!state.should_quit());
}

#[test]
fn test_reload_after_failure_then_success() {
    let mut state = wares_app::AppState::new();
    let generation = start_reload(&mut state);
    update(
        &mut state,
        Message::ProductsFetchFailed {
            generation,
            message: FETCH_FAILED_MSG.to_string(),
        },
    );

    // Reload clears the error and eventually lands the fixture
    let generation = start_reload(&mut state);
    assert_eq!(state.load_state, LoadState::Loading);
    assert_eq!(state.load_state.error_message(), None);

    update(
        &mut state,
        Message::ProductsFetched {
            generation,
            products: decode_products(FIXTURE).unwrap(),
        },
    );
    assert_eq!(state.load_state, LoadState::Loaded);
    assert_eq!(state.products.len(), MAX_PRODUCTS);
}
