//! Per-visit session state.
//!
//! A [`Session`] owns the cart, favorites, recently viewed list and UI
//! toggles of one visitor. It is an explicitly owned value handed to the
//! rendering layer by reference; every mutation goes through one of its
//! methods. Aggregates such as the subtotal are recomputed on each read.

pub mod cart;
pub mod favorites;
pub mod recently_viewed;
pub mod shipping;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Product;
use crate::types::{LineId, Price, ProductId, Size, Theme};

pub use cart::{Cart, CartLine};
pub use favorites::Favorites;
pub use recently_viewed::{RECENTLY_VIEWED_CAPACITY, RecentlyViewed};
pub use shipping::{DEFAULT_FREE_SHIPPING_THRESHOLD, FreeShipping, ShippingError};

/// UI toggles. Presentation-only state with no invariants of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Cart drawer visible.
    pub cart_open: bool,
    /// Navigation menu visible.
    pub menu_open: bool,
    /// Product shown in the quick view overlay.
    pub quick_view: Option<ProductId>,
    /// Active display theme.
    pub theme: Theme,
}

/// Derived cart figures, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Number of distinct lines (the header badge).
    pub line_count: usize,
    /// Sum of quantities.
    pub total_quantity: u64,
    /// Sum of `quantity * price`.
    pub subtotal: Price,
    /// Amount missing for free shipping.
    pub shipping_remaining: Price,
    /// Progress towards free shipping, 0 to 100.
    pub shipping_progress_percent: u8,
    /// Whether shipping is free.
    pub free_shipping: bool,
}

/// One visitor's transient state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cart: Cart,
    favorites: Favorites,
    recently_viewed: RecentlyViewed,
    ui: UiState,
    shipping: FreeShipping,
}

impl Session {
    /// Create an empty session using the given free-shipping policy.
    #[must_use]
    pub fn new(shipping: FreeShipping) -> Self {
        Self {
            shipping,
            ..Self::default()
        }
    }

    /// Start with the given theme instead of the default.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.ui.theme = theme;
        self
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of `product` in `size` and open the cart drawer.
    ///
    /// A second add of the same product and size increments the existing
    /// line. Returns the line id.
    pub fn add_to_cart(&mut self, product: &Product, size: Size) -> LineId {
        let quantity = self.cart.add(product, size);
        self.ui.cart_open = true;

        let id = LineId::for_item(&product.id, size);
        debug!(line = %id, quantity, "added to cart");
        id
    }

    /// Shift a line's quantity by `delta`, never going below 1.
    ///
    /// Unknown lines are ignored. Returns the new quantity if the line exists.
    pub fn change_quantity(&mut self, line: &LineId, delta: i64) -> Option<u32> {
        let quantity = self.cart.change_quantity(line, delta);
        debug!(line = %line, delta, ?quantity, "cart quantity changed");
        quantity
    }

    /// Remove a line. Removing an unknown line is a no-op.
    pub fn remove_line(&mut self, line: &LineId) -> bool {
        let removed = self.cart.remove(line);
        debug!(line = %line, removed, "cart line removed");
        removed
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `quantity * price` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.cart.subtotal()
    }

    /// `max(0, threshold - subtotal)`.
    #[must_use]
    pub fn shipping_remaining(&self) -> Price {
        self.shipping.remaining(self.subtotal())
    }

    /// `min(100, round(subtotal / threshold * 100))`.
    #[must_use]
    pub fn shipping_progress_percent(&self) -> u8 {
        self.shipping.progress_percent(self.subtotal())
    }

    /// The free-shipping policy in effect.
    #[must_use]
    pub const fn shipping(&self) -> &FreeShipping {
        &self.shipping
    }

    /// All derived cart figures at once.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let subtotal = self.subtotal();
        CartSummary {
            line_count: self.cart.line_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            shipping_remaining: self.shipping.remaining(subtotal),
            shipping_progress_percent: self.shipping.progress_percent(subtotal),
            free_shipping: self.shipping.qualifies(subtotal),
        }
    }

    // =========================================================================
    // Favorites and history
    // =========================================================================

    /// Flip favorite membership. Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> bool {
        let favorite = self.favorites.toggle(id);
        debug!(product = %id, favorite, "favorite toggled");
        favorite
    }

    /// Favorite products.
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Put `id` at the front of the recently viewed list.
    pub fn record_viewed(&mut self, id: &ProductId) {
        self.recently_viewed.record(id);
    }

    /// Recently viewed products, most recent first.
    #[must_use]
    pub const fn recently_viewed(&self) -> &RecentlyViewed {
        &self.recently_viewed
    }

    // =========================================================================
    // UI toggles
    // =========================================================================

    /// Current UI toggles.
    #[must_use]
    pub const fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Show `product` in the quick view overlay and record the view.
    pub fn open_quick_view(&mut self, product: &Product) {
        self.ui.quick_view = Some(product.id.clone());
        self.record_viewed(&product.id);
    }

    /// Hide the quick view overlay.
    pub fn close_quick_view(&mut self) {
        self.ui.quick_view = None;
    }

    /// Show or hide the cart drawer.
    pub const fn set_cart_open(&mut self, open: bool) {
        self.ui.cart_open = open;
    }

    /// Flip the navigation menu. Returns whether it is open afterwards.
    pub const fn toggle_menu(&mut self) -> bool {
        self.ui.menu_open = !self.ui.menu_open;
        self.ui.menu_open
    }

    /// Switch between light and dark. Returns the new theme.
    pub const fn toggle_theme(&mut self) -> Theme {
        self.ui.theme = self.ui.theme.toggled();
        self.ui.theme
    }
}
