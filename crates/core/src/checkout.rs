//! Checkout provider seam.
//!
//! Payment is not implemented. [`StubCheckout`] stands where a real payment
//! integration (Stripe, Przelewy24/BLIK) would redirect the customer.

use serde::Serialize;
use uuid::Uuid;

use crate::session::{CartLine, Session};
use crate::types::{CURRENCY_CODE, Price};

/// Notice returned by the stub provider.
pub const DEMO_CHECKOUT_NOTICE: &str =
    "Payment (Stripe / Przelewy24 BLIK) is not connected. This is a demo storefront.";

/// Errors returned by a checkout provider.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to pay for.
    #[error("cannot check out an empty cart")]
    EmptyCart,
    /// The provider refused the request.
    #[error("checkout provider error: {0}")]
    Provider(String),
}

/// What is handed to the checkout provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    /// Cart lines at the moment of checkout.
    pub lines: Vec<CartLine>,
    /// Cart subtotal.
    pub subtotal: Price,
    /// ISO 4217 currency code.
    pub currency: &'static str,
}

impl CheckoutRequest {
    /// Snapshot the session's cart.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            lines: session.cart().lines().to_vec(),
            subtotal: session.subtotal(),
            currency: CURRENCY_CODE,
        }
    }
}

/// Result of starting a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Send the customer to a payment page.
    Redirect {
        /// Payment page URL.
        url: String,
    },
    /// Payment completed.
    Completed {
        /// Order reference.
        reference: Uuid,
    },
    /// Nothing was charged; demo mode.
    Demo {
        /// Reference of the simulated checkout.
        reference: Uuid,
        /// Message to show the customer.
        notice: String,
    },
}

/// Starts checkouts.
pub trait CheckoutProvider {
    /// Begin a checkout for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the checkout cannot be started.
    fn begin(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError>;
}

/// Provider that performs no transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCheckout;

impl CheckoutProvider for StubCheckout {
    fn begin(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome, CheckoutError> {
        if request.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let reference = Uuid::new_v4();
        tracing::info!(
            %reference,
            lines = request.lines.len(),
            subtotal = request.subtotal.minor(),
            "demo checkout started"
        );

        Ok(CheckoutOutcome::Demo {
            reference,
            notice: DEMO_CHECKOUT_NOTICE.to_owned(),
        })
    }
}
