//! Catalog store: the immutable product list and its read-only queries.
//!
//! The catalog never changes after construction. Every listing the UI shows is
//! produced by [`Catalog::query`], which filters by name and size first and
//! then sorts.

pub mod demo;
pub mod product;
pub mod query;

use std::collections::HashSet;

use crate::types::{ProductId, Size};

pub use product::Product;
pub use query::{CatalogQuery, SortMode};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Errors raised when a product list violates catalog invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A product has an empty id.
    #[error("product at position {0} has an empty id")]
    EmptyId(usize),
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product offers no size at all.
    #[error("product {0} offers no sizes")]
    NoSizes(ProductId),
    /// A rating is outside 0..=5.
    #[error("product {id} has rating {rating}, expected 0 to 5")]
    RatingOutOfRange {
        /// Offending product.
        id: ProductId,
        /// Rating found.
        rating: f64,
    },
}

/// The product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating that ids are unique and non-empty, that
    /// every product offers at least one size, and that ratings are in range.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, scanning in declaration order.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if product.id.as_str().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.sizes.is_empty() {
                return Err(CatalogError::NoSizes(product.id.clone()));
            }
            if !(0.0..=MAX_RATING).contains(&product.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
        }

        Ok(Self { products })
    }

    /// The built-in ten-dress catalog.
    #[must_use]
    pub fn demo() -> Self {
        // The demo data is fixed and satisfies every invariant checked in `new`.
        Self {
            products: demo::products(),
        }
    }

    /// All products in declaration order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Every size offered by at least one product, smallest first.
    #[must_use]
    pub fn sizes(&self) -> Vec<Size> {
        Size::ALL
            .into_iter()
            .filter(|size| self.products.iter().any(|p| p.has_size(*size)))
            .collect()
    }

    /// Filter and sort the catalog.
    ///
    /// Products must match the name search and, when set, offer the size.
    /// `Popular` keeps declaration order; the price sorts are stable, so
    /// equally priced products keep their relative order. An empty result is
    /// a valid answer.
    #[must_use]
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let needle = query.search.to_lowercase();
        let mut list: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.name_contains_lowercase(&needle))
            .filter(|p| query.size.is_none_or(|size| p.has_size(size)))
            .collect();

        match query.sort {
            SortMode::Popular => {}
            SortMode::PriceAscending => list.sort_by_key(|p| p.price),
            SortMode::PriceDescending => list.sort_by_key(|p| core::cmp::Reverse(p.price)),
        }

        tracing::debug!(
            search = %query.search,
            size = ?query.size,
            sort = %query.sort,
            results = list.len(),
            "catalog queried"
        );

        list
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}
