//! Acceptance tests for the catalog example scenarios.
//!
//! Ten products loaded from `tests/fixtures/products.json`, page size 8:
//! ids 1-3 are "electronics", the rest "misc". Scenarios run in order on a
//! single catalog, the way one browsing session would drive it.

use catalog_view::model::{CatalogError, ProductId};
use catalog_view::source::FileSource;
use catalog_view::state::CatalogState;

const PRODUCTS_FIXTURE: &str = "tests/fixtures/products.json";

fn load_fixture() -> CatalogState {
    let mut source = FileSource::new(PRODUCTS_FIXTURE).expect("fixture should load");
    let mut state = CatalogState::default();
    state.load(source.drain_products());
    state
}

fn visible_ids(state: &CatalogState) -> Vec<u64> {
    state.visible_items().iter().map(|p| p.id().get()).collect()
}

#[test]
fn scenario1_load_shows_first_page() {
    // GIVEN: ten products from the source
    // WHEN: they are loaded
    let state = load_fixture();

    // THEN: the first eight are visible and two remain
    assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(state.remaining_count(), 2);
}

#[test]
fn scenario2_load_more_reaches_end_once() {
    let mut state = load_fixture();

    // WHEN: "load more" is requested
    assert!(state.load_more(), "first load more should advance");

    // THEN: all ten are visible
    assert_eq!(visible_ids(&state), (1..=10).collect::<Vec<_>>());
    assert_eq!(state.remaining_count(), 0);

    // AND: a second request changes nothing
    let before = state.clone();
    assert!(!state.load_more(), "second load more should not advance");
    assert_eq!(state, before);
}

#[test]
fn scenario3_search_by_category() {
    let mut state = load_fixture();
    state.load_more();

    // WHEN: searching for a category
    state.search("electronics");

    // THEN: exactly its products show, from page 1
    assert_eq!(visible_ids(&state), vec![1, 2, 3]);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn scenario4_empty_title_is_rejected() {
    let mut state = load_fixture();
    state.search("electronics");
    let title_before = state
        .find(ProductId::new(2))
        .map(|p| p.title().to_string());

    // WHEN: product 2 is renamed to ""
    let result = state.update(ProductId::new(2), "");

    // THEN: validation fails and the title is unchanged
    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(
        state.find(ProductId::new(2)).map(|p| p.title().to_string()),
        title_before
    );
}

#[test]
fn scenario5_delete_under_filter() {
    let mut state = load_fixture();
    state.search("electronics");

    // WHEN: product 2 is deleted while the filter is active
    state
        .delete(ProductId::new(2))
        .expect("delete should succeed");

    // THEN: the filtered view shows 1 and 3 on page 1
    assert_eq!(visible_ids(&state), vec![1, 3]);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn scenario6_delete_unknown_id() {
    let mut state = load_fixture();

    // WHEN: deleting a product that does not exist
    let result = state.delete(ProductId::new(99));

    // THEN: NotFound and nothing removed
    assert_eq!(
        result,
        Err(CatalogError::NotFound {
            id: ProductId::new(99)
        })
    );
    assert_eq!(state.total_count(), 10);
}

#[test]
fn full_session_in_sequence() {
    let mut state = load_fixture();

    assert_eq!(state.remaining_count(), 2);
    assert!(state.load_more());
    assert!(!state.load_more());

    state.search("electronics");
    assert_eq!(visible_ids(&state), vec![1, 2, 3]);

    assert!(state.update(ProductId::new(2), "").is_err());
    state
        .update(ProductId::new(1), "Electronics Bundle")
        .expect("rename should succeed");
    assert_eq!(state.visible_items()[0].title(), "Electronics Bundle");

    state
        .delete(ProductId::new(2))
        .expect("delete should succeed");
    assert_eq!(visible_ids(&state), vec![1, 3]);

    assert!(state.delete(ProductId::new(99)).is_err());
    assert_eq!(state.total_count(), 9);

    // Clearing the filter reveals the edit in the full view too.
    state.search("");
    assert_eq!(
        state.find(ProductId::new(1)).map(|p| p.title()),
        Some("Electronics Bundle")
    );
    assert_eq!(state.effective_count(), 9);
    assert_eq!(state.current_page(), 1);
}
