//! Integration tests for SebastianClothes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sebastian-clothes-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_query` - search, size filter and sort properties over the catalog
//! - `session_flow` - cart, favorites, recently viewed and shipping progress
//! - `checkout_and_images` - provider seams and their fallbacks
//!
//! This crate only holds fixtures shared by the test files.

use sebastian_clothes_core::{Catalog, Price, Product, ProductId, Size};

/// Search strings exercised by the property tests.
pub const SEARCHES: &[&str] = &["", "a", "MIDI", "mini", "lea", "ó", "sukienka", "zzz"];

/// Size filters exercised by the property tests, `None` meaning any size.
#[must_use]
pub fn size_filters() -> Vec<Option<Size>> {
    std::iter::once(None)
        .chain(Size::ALL.into_iter().map(Some))
        .collect()
}

/// A minimal product for hand-built catalogs.
#[must_use]
pub fn dress(id: &str, name: &str, price: u64, sizes: &[Size]) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_minor(price),
        old_price: None,
        rating: 4.0,
        reviews: 10,
        sizes: sizes.to_vec(),
        colors: vec!["czarny".to_owned()],
        category: "Sukienki".to_owned(),
        image: format!("https://images.unsplash.com/{id}"),
        tags: Vec::new(),
    }
}

/// Look up a demo product, panicking if the id is unknown.
///
/// # Panics
///
/// Panics if `id` is not in the catalog.
#[must_use]
pub fn product<'a>(catalog: &'a Catalog, id: &str) -> &'a Product {
    catalog
        .get(&ProductId::new(id))
        .unwrap_or_else(|| panic!("no product {id} in catalog"))
}
