//! Favorite products.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Set of favorite product ids with toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<ProductId>,
}

impl Favorites {
    /// Whether `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Favorite ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id`. Returns whether it is a favorite afterwards.
    pub(crate) fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }
}
