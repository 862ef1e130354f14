// tests/listing_filter_tests.rs - Listing search and detail selection scenarios
//
// Uses the fixture catalogues to walk through what a shopper sees when
// searching, clearing the search and opening a product.

use falsedisk_store::fixtures::products::{electronics_catalogue, phone_and_cable};
use falsedisk_store::web_app::model::Product;
use falsedisk_store::web_app::routes::{detail_href, listing_href, LISTING};
use falsedisk_store::web_app::state::listing::{
    empty_message, is_searching, query_from_param, results_summary,
};
use falsedisk_store::web_app::state::{filter_products, Selection};

fn ids(products: &[Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

#[test]
fn test_phone_matches_title_and_description() {
    let base = phone_and_cable();
    let visible = filter_products(&base, "phone");

    assert_eq!(ids(&visible), vec![1, 2]);
    assert_eq!(results_summary(visible.len(), "phone"), "2 products found for \"phone\"");
}

#[test]
fn test_cable_matches_one() {
    let base = phone_and_cable();
    assert_eq!(ids(&filter_products(&base, "CABLE")), vec![2]);
}

#[test]
fn test_no_match_shows_empty_state() {
    let base = phone_and_cable();
    let visible = filter_products(&base, "xyz");

    assert!(visible.is_empty());
    assert_eq!(
        empty_message("xyz"),
        "No products match \"xyz\". Try searching something else."
    );
}

#[test]
fn test_catalogue_searches() {
    let base = electronics_catalogue();

    assert_eq!(ids(&filter_products(&base, "ssd")), vec![10, 11]);
    assert_eq!(ids(&filter_products(&base, "WD")), vec![9, 12]);
    assert_eq!(ids(&filter_products(&base, "gaming")), vec![12, 14]);
    assert_eq!(ids(&filter_products(&base, "monitor")), vec![14]);
}

#[test]
fn test_clear_search_restores_full_collection() {
    let base = electronics_catalogue();

    // Clear Search links to the bare listing path, which carries no query
    assert_eq!(listing_href(""), LISTING);
    let query = query_from_param(None);
    assert!(!is_searching(&query));
    assert_eq!(filter_products(&base, &query), base);
}

#[test]
fn test_search_param_round_trip() {
    let href = listing_href("usb cable");
    assert_eq!(href, "/products?search=usb+cable");
    assert_eq!(detail_href(2, "usb cable"), "/products/2?search=usb+cable");
}

#[test]
fn test_open_detail_from_filtered_view() {
    let base = phone_and_cable();
    let visible = filter_products(&base, "cable");
    let mut selection = Selection::default();

    assert!(selection.select(visible[0].id, &base));
    assert_eq!(selection.visible_product().map(|p| p.title.as_str()), Some("Cable"));

    selection.close();
    assert!(!selection.is_open());
    assert_eq!(selection.visible_product(), None);
    assert_eq!(selection.selected_id(), None);
}

#[test]
fn test_unknown_id_keeps_modal_closed() {
    let base = phone_and_cable();
    let mut selection = Selection::default();

    assert!(!selection.select(99, &base));
    assert!(!selection.is_open());
}
