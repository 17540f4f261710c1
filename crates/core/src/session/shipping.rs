//! Free-shipping threshold and progress.

use serde::Serialize;

use crate::types::Price;

/// Default free-shipping threshold: 200,00 zł.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Price = Price::from_minor(20_000);

/// Errors building a [`FreeShipping`] policy.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingError {
    /// The threshold must be positive.
    #[error("free-shipping threshold must be greater than zero")]
    ZeroThreshold,
}

/// Subtotal above which shipping is free.
///
/// The threshold is never zero, so progress can always be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreeShipping {
    threshold: Price,
}

impl FreeShipping {
    /// Create a policy with the given threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError::ZeroThreshold`] for a zero threshold.
    pub const fn new(threshold: Price) -> Result<Self, ShippingError> {
        if threshold.is_zero() {
            return Err(ShippingError::ZeroThreshold);
        }
        Ok(Self { threshold })
    }

    /// The threshold amount.
    #[must_use]
    pub const fn threshold(&self) -> Price {
        self.threshold
    }

    /// Amount still missing for free shipping, zero once reached.
    #[must_use]
    pub const fn remaining(&self, subtotal: Price) -> Price {
        self.threshold.saturating_sub(subtotal)
    }

    /// Progress towards the threshold in whole percent, rounded half up and
    /// capped at 100.
    #[must_use]
    pub fn progress_percent(&self, subtotal: Price) -> u8 {
        let threshold = u128::from(self.threshold.minor());
        let scaled = u128::from(subtotal.minor()) * 100;
        let percent = ((scaled + threshold / 2) / threshold).min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Whether `subtotal` ships for free.
    #[must_use]
    pub const fn qualifies(&self, subtotal: Price) -> bool {
        subtotal.minor() >= self.threshold.minor()
    }
}

impl Default for FreeShipping {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
        }
    }
}
