//! Recently viewed products.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// How many product ids are remembered.
pub const RECENTLY_VIEWED_CAPACITY: usize = 8;

/// Most-recent-first list of viewed product ids, deduplicated and capped at
/// [`RECENTLY_VIEWED_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: VecDeque<ProductId>,
}

impl RecentlyViewed {
    /// Ids, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of remembered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing was viewed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Move or insert `id` at the front, evicting the oldest entries.
    pub(crate) fn record(&mut self, id: &ProductId) {
        self.ids.retain(|seen| seen != id);
        self.ids.push_front(id.clone());
        self.ids.truncate(RECENTLY_VIEWED_CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(recent: &RecentlyViewed) -> Vec<String> {
        recent.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_most_recent_first() {
        let mut recent = RecentlyViewed::default();
        recent.record(&ProductId::new("d1"));
        recent.record(&ProductId::new("d2"));
        assert_eq!(ids(&recent), vec!["d2", "d1"]);
    }

    #[test]
    fn test_revisit_moves_to_front() {
        let mut recent = RecentlyViewed::default();
        for id in ["d1", "d2", "d3"] {
            recent.record(&ProductId::new(id));
        }
        recent.record(&ProductId::new("d1"));
        assert_eq!(ids(&recent), vec!["d1", "d3", "d2"]);
    }

    #[test]
    fn test_capped_and_evicts_oldest() {
        let mut recent = RecentlyViewed::default();
        for n in 1..=10 {
            recent.record(&ProductId::new(format!("d{n}")));
        }
        assert_eq!(recent.len(), RECENTLY_VIEWED_CAPACITY);
        assert_eq!(
            ids(&recent),
            vec!["d10", "d9", "d8", "d7", "d6", "d5", "d4", "d3"]
        );
    }
}
