//! Product definitions.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, Size};

/// A purchasable product.
///
/// Products are defined once when the catalog is built and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Price before the discount, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Available sizes, in display order.
    pub sizes: Vec<Size>,
    /// Available color names.
    pub colors: Vec<String>,
    /// Category label.
    pub category: String,
    /// Opaque image reference, resolved by an [`ImageProvider`](crate::images::ImageProvider).
    pub image: String,
    /// Marketing tags ("nowość", "bestseller", ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Whether the product is offered in `size`.
    #[must_use]
    pub fn has_size(&self, size: Size) -> bool {
        self.sizes.contains(&size)
    }

    /// Whether the name contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }

    /// Discount in whole percent, if the product carries a valid old price.
    ///
    /// A discount only exists when `old_price > price`; an old price equal to
    /// or below the current price is ignored.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        let old = self.old_price?.minor();
        let now = self.price.minor();
        if old <= now {
            return None;
        }

        let saved = u128::from(old - now) * 100;
        let old = u128::from(old);
        let percent = (saved + old / 2) / old;
        u8::try_from(percent).ok()
    }
}
