//! Core types for SebastianClothes.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod size;
pub mod theme;

pub use id::*;
pub use price::{CURRENCY_CODE, Price};
pub use size::{Size, SizeError};
pub use theme::Theme;
