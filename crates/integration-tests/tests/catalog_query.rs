//! Integration tests for catalog listing queries.
//!
//! Properties are checked over every combination of a handful of searches,
//! every size filter and every sort mode.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use sebastian_clothes_core::{Catalog, CatalogError, CatalogQuery, ProductId, Size, SortMode};
use sebastian_clothes_integration_tests::{SEARCHES, dress, size_filters};

const SORTS: [SortMode; 3] = [
    SortMode::Popular,
    SortMode::PriceAscending,
    SortMode::PriceDescending,
];

fn ids(products: &[&sebastian_clothes_core::Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

// =============================================================================
// Filter Properties
// =============================================================================

#[test]
fn test_search_is_exact_case_insensitive_subset() {
    let catalog = Catalog::demo();
    for search in SEARCHES {
        let needle = search.to_lowercase();
        let expected: Vec<String> = catalog
            .products()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .map(|p| p.id.to_string())
            .collect();

        let found = catalog.query(&CatalogQuery::search(*search));
        assert_eq!(ids(&found), expected, "search {search:?}");
    }
}

#[test]
fn test_empty_query_returns_everything() {
    let catalog = Catalog::demo();
    let all = catalog.query(&CatalogQuery::default());
    assert_eq!(all.len(), catalog.len());
}

#[test]
fn test_size_filter_only_returns_offered_sizes() {
    let catalog = Catalog::demo();
    for size in Size::ALL {
        for sort in SORTS {
            let found = catalog.query(&CatalogQuery::new("", Some(size), sort));
            assert!(found.iter().all(|p| p.sizes.contains(&size)));
            let offered = catalog.products().iter().filter(|p| p.has_size(size)).count();
            assert_eq!(found.len(), offered, "size {size}");
        }
    }
}

#[test]
fn test_xxl_has_no_results() {
    let catalog = Catalog::demo();
    assert!(catalog
        .query(&CatalogQuery::new("", Some(Size::XXL), SortMode::Popular))
        .is_empty());
}

// =============================================================================
// Sort Properties
// =============================================================================

#[test]
fn test_price_sorts_are_monotonic() {
    let catalog = Catalog::demo();
    for search in SEARCHES {
        for size in size_filters() {
            let asc = catalog.query(&CatalogQuery::new(*search, size, SortMode::PriceAscending));
            assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

            let desc = catalog.query(&CatalogQuery::new(*search, size, SortMode::PriceDescending));
            assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
        }
    }
}

#[test]
fn test_popular_is_declaration_order_of_subset() {
    let catalog = Catalog::demo();
    for search in SEARCHES {
        for size in size_filters() {
            let found = catalog.query(&CatalogQuery::new(*search, size, SortMode::Popular));
            let positions: Vec<usize> = found
                .iter()
                .filter_map(|p| catalog.products().iter().position(|q| q.id == p.id))
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_sort_does_not_change_membership() {
    let catalog = Catalog::demo();
    for size in size_filters() {
        let mut popular = ids(&catalog.query(&CatalogQuery::new("i", size, SortMode::Popular)));
        let mut asc = ids(&catalog.query(&CatalogQuery::new("i", size, SortMode::PriceAscending)));
        popular.sort();
        asc.sort();
        assert_eq!(popular, asc);
    }
}

#[test]
fn test_equal_prices_keep_declaration_order() {
    let catalog = Catalog::new(vec![
        dress("a", "Alfa", 10_000, &[Size::M]),
        dress("b", "Beta", 5_000, &[Size::M]),
        dress("c", "Gamma", 10_000, &[Size::M]),
    ])
    .unwrap();

    let asc = catalog.query(&CatalogQuery::new("", None, SortMode::PriceAscending));
    assert_eq!(ids(&asc), vec!["b", "a", "c"]);

    let desc = catalog.query(&CatalogQuery::new("", None, SortMode::PriceDescending));
    assert_eq!(ids(&desc), vec!["a", "c", "b"]);
}

// =============================================================================
// Examples
// =============================================================================

#[test]
fn test_lea_search() {
    let catalog = Catalog::demo();
    let found = catalog.query(&CatalogQuery::new("lea", None, SortMode::Popular));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Sukienka Lea – kopertowa maxi");
}

#[test]
fn test_unmatched_search_is_empty_not_error() {
    let catalog = Catalog::demo();
    assert!(catalog.query(&CatalogQuery::search("kurtka")).is_empty());
}

#[test]
fn test_sizes_lists_offered_sizes_in_order() {
    let catalog = Catalog::demo();
    assert_eq!(
        catalog.sizes(),
        vec![Size::XS, Size::S, Size::M, Size::L, Size::XL]
    );
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_catalog_rejects_invalid_products() {
    let duplicate = Catalog::new(vec![
        dress("x", "One", 100, &[Size::S]),
        dress("x", "Two", 200, &[Size::S]),
    ]);
    assert_eq!(duplicate, Err(CatalogError::DuplicateId(ProductId::new("x"))));

    let sizeless = Catalog::new(vec![dress("y", "Bez rozmiaru", 100, &[])]);
    assert_eq!(sizeless, Err(CatalogError::NoSizes(ProductId::new("y"))));

    let mut loved = dress("z", "Za dobra", 100, &[Size::S]);
    loved.rating = 5.5;
    assert!(matches!(
        Catalog::new(vec![loved]),
        Err(CatalogError::RatingOutOfRange { .. })
    ));
}

#[test]
fn test_demo_catalog_passes_validation() {
    let demo = Catalog::demo();
    let rebuilt = Catalog::new(demo.products().to_vec()).unwrap();
    assert_eq!(rebuilt, demo);
}
