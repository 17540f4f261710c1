//! Cosmetic scheduling helpers: the promo countdown and the incremental
//! "reveal more" window. Both are pure and safe to call repeatedly.

pub mod countdown;
pub mod reveal;

pub use countdown::PromoCountdown;
pub use reveal::{DEFAULT_PAGE_SIZE, RevealWindow};
