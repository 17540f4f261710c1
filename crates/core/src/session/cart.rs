//! Cart lines and their quantity rules.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{LineId, Price, ProductId, Size};

/// One product-size pairing in the cart.
///
/// Name, price and image are copied from the product when the line is
/// created and are not re-synced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Composite key, `"<product>-<size>"`.
    pub id: LineId,
    /// Product the line was created from.
    pub product_id: ProductId,
    /// `"<product name> • <size>"`.
    pub name: String,
    /// Unit price at the time the line was created.
    pub price: Price,
    /// Image reference at the time the line was created.
    pub image: String,
    /// Selected size.
    pub size: Size,
    /// Quantity, never below 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: &Product, size: Size) -> Self {
        Self {
            id: LineId::for_item(&product.id, size),
            product_id: product.id.clone(),
            name: format!("{} • {size}", product.name),
            price: product.price,
            image: product.image.clone(),
            size,
            quantity: 1,
        }
    }

    /// `quantity * price`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered cart lines.
///
/// Lines keep the order in which they were first added. Mutation is only
/// reachable through [`Session`](super::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `quantity * price` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product` in `size`, merging into an existing line.
    ///
    /// Returns the line's quantity after the add.
    pub(crate) fn add(&mut self, product: &Product, size: Size) -> u32 {
        let id = LineId::for_item(&product.id, size);
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::new(product, size));
        1
    }

    /// Shift a line's quantity by `delta`, flooring at 1.
    ///
    /// Returns the new quantity, or `None` when no such line exists.
    pub(crate) fn change_quantity(&mut self, id: &LineId, delta: i64) -> Option<u32> {
        let line = self.lines.iter_mut().find(|line| &line.id == id)?;
        let wanted = i64::from(line.quantity).saturating_add(delta).max(1);
        line.quantity = u32::try_from(wanted).unwrap_or(u32::MAX);
        Some(line.quantity)
    }

    /// Remove a line. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: &LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.id != id);
        self.lines.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::demo().get(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_creates_snapshot_line() {
        let mut cart = Cart::default();
        let d1 = product("d1");
        assert_eq!(cart.add(&d1, Size::M), 1);
        let line = cart.get(&LineId::new("d1-M")).unwrap();

        assert_eq!(line.id.as_str(), "d1-M");
        assert_eq!(line.name, "Sukienka Mila – satynowa midi • M");
        assert_eq!(line.price, Price::from_minor(21_900));
        assert_eq!(line.image, d1.image);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_add_same_key_merges() {
        let mut cart = Cart::default();
        let d1 = product("d1");
        cart.add(&d1, Size::M);

        assert_eq!(cart.add(&d1, Size::M), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal(), Price::from_minor(43_800));
    }

    #[test]
    fn test_add_other_size_appends() {
        let mut cart = Cart::default();
        let d1 = product("d1");
        cart.add(&d1, Size::M);
        cart.add(&d1, Size::S);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["d1-M", "d1-S"]);
    }

    #[test]
    fn test_price_snapshot_not_resynced() {
        let mut cart = Cart::default();
        let mut d1 = product("d1");
        cart.add(&d1, Size::M);

        d1.price = Price::from_minor(1);
        cart.add(&d1, Size::M);

        let line = cart.get(&LineId::new("d1-M")).unwrap();
        assert_eq!(line.price, Price::from_minor(21_900));
    }

    #[test]
    fn test_change_quantity_floors_at_one() {
        let mut cart = Cart::default();
        let d3 = product("d3");
        for _ in 0..3 {
            cart.add(&d3, Size::S);
        }
        let id = LineId::new("d3-S");

        assert_eq!(cart.change_quantity(&id, -100), Some(1));
        assert_eq!(cart.change_quantity(&id, -1), Some(1));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.change_quantity(&id, 4), Some(5));
    }

    #[test]
    fn test_change_quantity_unknown_line() {
        let mut cart = Cart::default();
        assert_eq!(cart.change_quantity(&LineId::new("x-M"), 1), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_saturates() {
        let mut cart = Cart::default();
        cart.add(&product("d2"), Size::L);
        let id = LineId::new("d2-L");
        assert_eq!(cart.change_quantity(&id, i64::MAX), Some(u32::MAX));
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::default();
        cart.add(&product("d2"), Size::L);
        assert!(!cart.remove(&LineId::new("d2-M")));
        assert!(cart.remove(&LineId::new("d2-L")));
        assert!(cart.is_empty());
        assert!(!cart.remove(&LineId::new("d2-L")));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add(&product("d1"), Size::M);
        cart.add(&product("d1"), Size::M);
        cart.add(&product("d7"), Size::XS);

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.subtotal(), Price::from_minor(2 * 21_900 + 15_900));
    }
}
