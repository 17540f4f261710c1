//! Catalog queries: name search, size filter and sorting.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Size;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Catalog declaration order. No popularity metric is computed.
    #[default]
    Popular,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::PriceAscending => write!(f, "price-asc"),
            Self::PriceDescending => write!(f, "price-desc"),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Self::Popular),
            "price-asc" | "price_ascending" | "priceAsc" => Ok(Self::PriceAscending),
            "price-desc" | "price_descending" | "priceDesc" => Ok(Self::PriceDescending),
            _ => Err(format!("invalid sort mode: {s}")),
        }
    }
}

/// Parameters of a catalog listing.
///
/// The default query matches every product in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the product name. Empty matches all.
    pub search: String,
    /// Only keep products offered in this size.
    pub size: Option<Size>,
    /// Ordering of the result.
    pub sort: SortMode,
}

impl CatalogQuery {
    /// Create a query from its three parts.
    #[must_use]
    pub fn new(search: impl Into<String>, size: Option<Size>, sort: SortMode) -> Self {
        Self {
            search: search.into(),
            size,
            sort,
        }
    }

    /// Query matching names containing `search`.
    #[must_use]
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    /// Replace the size filter.
    #[must_use]
    pub const fn with_size(mut self, size: Option<Size>) -> Self {
        self.size = size;
        self
    }

    /// Replace the sort mode.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}
