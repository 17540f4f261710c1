//! Integration tests for the cart/session reducer.

#![allow(clippy::unwrap_used)]

use sebastian_clothes_core::{
    Catalog, FreeShipping, LineId, Price, ProductId, Session, Size, Theme,
};
use sebastian_clothes_integration_tests::product;

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_same_product_and_size_merge_into_one_line() {
    let catalog = Catalog::demo();
    let mut session = Session::default();

    let first = session.add_to_cart(product(&catalog, "d6"), Size::XL);
    let second = session.add_to_cart(product(&catalog, "d6"), Size::XL);

    assert_eq!(first, second);
    assert_eq!(session.cart().line_count(), 1);
    assert_eq!(session.cart().get(&first).unwrap().quantity, 2);
}

#[test]
fn test_sizes_are_separate_lines() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    session.add_to_cart(product(&catalog, "d1"), Size::S);
    session.add_to_cart(product(&catalog, "d1"), Size::M);

    let ids: Vec<&str> = session.cart().lines().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["d1-S", "d1-M"]);
    assert_eq!(session.total_quantity(), 2);
}

#[test]
fn test_quantity_never_drops_below_one() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    let line = session.add_to_cart(product(&catalog, "d2"), Size::L);
    session.change_quantity(&line, 2);
    assert_eq!(session.cart().get(&line).unwrap().quantity, 3);

    assert_eq!(session.change_quantity(&line, -100), Some(1));
    assert_eq!(session.cart().line_count(), 1);
    assert_eq!(session.subtotal(), Price::from_minor(28_900));
}

#[test]
fn test_unknown_lines_are_ignored() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    session.add_to_cart(product(&catalog, "d2"), Size::L);
    let before = session.cart().clone();

    assert_eq!(session.change_quantity(&LineId::new("d9-XS"), 1), None);
    assert!(!session.remove_line(&LineId::new("d9-XS")));
    assert_eq!(session.cart(), &before);
}

#[test]
fn test_remove_then_add_starts_fresh() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    let line = session.add_to_cart(product(&catalog, "d3"), Size::XS);
    session.change_quantity(&line, 4);
    assert!(session.remove_line(&line));
    assert!(session.cart().is_empty());

    session.add_to_cart(product(&catalog, "d3"), Size::XS);
    assert_eq!(session.cart().get(&line).unwrap().quantity, 1);
}

#[test]
fn test_line_snapshots_product() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    let line = session.add_to_cart(product(&catalog, "d9"), Size::M);
    let line = session.cart().get(&line).unwrap();

    assert_eq!(line.product_id, ProductId::new("d9"));
    assert_eq!(line.name, "Sukienka Hana – dzianinowa midi • M");
    assert_eq!(line.price, Price::from_minor(22_900));
    assert_eq!(line.size, Size::M);
}

// =============================================================================
// Free Shipping
// =============================================================================

#[test]
fn test_double_add_reaches_free_shipping() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    session.add_to_cart(product(&catalog, "d1"), Size::M);
    session.add_to_cart(product(&catalog, "d1"), Size::M);

    assert_eq!(session.cart().line_count(), 1);
    assert_eq!(session.subtotal(), Price::from_minor(43_800));
    assert_eq!(session.shipping_remaining(), Price::ZERO);
    assert_eq!(session.shipping_progress_percent(), 100);
}

#[test]
fn test_progress_below_threshold() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    assert_eq!(session.shipping_progress_percent(), 0);
    assert_eq!(session.shipping_remaining(), Price::from_minor(20_000));

    session.add_to_cart(product(&catalog, "d10"), Size::XS);
    assert_eq!(session.shipping_remaining(), Price::from_minor(7_100));
    assert_eq!(session.shipping_progress_percent(), 65);
}

#[test]
fn test_custom_threshold() {
    let catalog = Catalog::demo();
    let shipping = FreeShipping::new(Price::from_minor(50_000)).unwrap();
    let mut session = Session::new(shipping);
    session.add_to_cart(product(&catalog, "d8"), Size::L);

    let summary = session.summary();
    assert!(!summary.free_shipping);
    assert_eq!(summary.shipping_remaining, Price::from_minor(15_100));
    assert_eq!(summary.shipping_progress_percent, 70);
}

#[test]
fn test_summary_serializes_minor_units() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    session.add_to_cart(product(&catalog, "d4"), Size::S);

    let json = serde_json::to_value(session.summary()).unwrap();
    assert_eq!(json["subtotal"], 24_900);
    assert_eq!(json["shipping_remaining"], 0);
    assert_eq!(json["free_shipping"], true);
    assert_eq!(json["line_count"], 1);
}

// =============================================================================
// Favorites, History and UI
// =============================================================================

#[test]
fn test_favorite_toggle_is_involution() {
    let mut session = Session::default();
    let id = ProductId::new("d5");

    assert!(session.toggle_favorite(&id));
    assert!(session.favorites().contains(&id));
    assert!(!session.toggle_favorite(&id));
    assert!(!session.favorites().contains(&id));
}

#[test]
fn test_quick_view_feeds_recently_viewed() {
    let catalog = Catalog::demo();
    let mut session = Session::default();

    for id in ["d1", "d2", "d1"] {
        session.open_quick_view(product(&catalog, id));
    }
    assert_eq!(session.ui().quick_view, Some(ProductId::new("d1")));

    let recent: Vec<&str> = session.recently_viewed().iter().map(ProductId::as_str).collect();
    assert_eq!(recent, vec!["d1", "d2"]);

    session.close_quick_view();
    assert_eq!(session.ui().quick_view, None);
}

#[test]
fn test_recently_viewed_is_bounded() {
    let catalog = Catalog::demo();
    let mut session = Session::default();
    for product in catalog.products() {
        session.record_viewed(&product.id);
    }
    assert_eq!(session.recently_viewed().len(), 8);
    assert_eq!(
        session.recently_viewed().iter().next(),
        Some(&ProductId::new("d10"))
    );
}

#[test]
fn test_add_opens_cart_and_toggles_flip() {
    let catalog = Catalog::demo();
    let mut session = Session::default().with_theme(Theme::Dark);
    assert!(!session.ui().cart_open);

    session.add_to_cart(product(&catalog, "d7"), Size::S);
    assert!(session.ui().cart_open);

    session.set_cart_open(false);
    assert!(!session.ui().cart_open);

    assert!(session.toggle_menu());
    assert!(!session.toggle_menu());
    assert_eq!(session.toggle_theme(), Theme::Light);
}
