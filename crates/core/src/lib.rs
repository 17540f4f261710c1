//! SebastianClothes Core - Catalog and session state library.
//!
//! This crate holds the logic of the SebastianClothes dress shop storefront:
//! - the immutable product catalog and its listing queries
//! - per-visit session state: cart, favorites, recently viewed, UI toggles
//! - derived cart figures (subtotal, free-shipping progress)
//!
//! # Architecture
//!
//! The core crate contains only types, state transitions and traits - no
//! file or network I/O. Rendering, configuration and persistence of the
//! theme preference live in the `cli` crate. Image loading and payment are
//! external collaborators behind the [`ImageProvider`] and
//! [`CheckoutProvider`] traits.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, sizes and the theme
//! - [`catalog`] - Product list and `query` (search, size filter, sort)
//! - [`session`] - Cart/session state and its operations
//! - [`images`] - Image provider with fallback substitution
//! - [`checkout`] - Checkout provider seam and the demo stub
//! - [`presentation`] - Promo countdown and incremental reveal window
//!
//! # Example
//!
//! ```
//! use sebastian_clothes_core::{Catalog, CatalogQuery, ProductId, Session, Size};
//!
//! let catalog = Catalog::demo();
//! let mut session = Session::default();
//!
//! let lea = catalog.query(&CatalogQuery::search("lea"));
//! assert_eq!(lea.len(), 1);
//!
//! let d1 = catalog.get(&ProductId::new("d1")).unwrap();
//! session.add_to_cart(d1, Size::M);
//! session.add_to_cart(d1, Size::M);
//! assert_eq!(session.subtotal().minor(), 43_800);
//! assert_eq!(session.shipping_progress_percent(), 100);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod images;
pub mod presentation;
pub mod session;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogQuery, Product, SortMode};
pub use checkout::{CheckoutError, CheckoutOutcome, CheckoutProvider, CheckoutRequest, StubCheckout};
pub use images::{DisplayImage, ImageError, ImageProvider, ImageResolver, RemoteImageProvider};
pub use presentation::{PromoCountdown, RevealWindow};
pub use session::{
    Cart, CartLine, CartSummary, Favorites, FreeShipping, RecentlyViewed, Session, ShippingError,
    UiState,
};
pub use types::*;
