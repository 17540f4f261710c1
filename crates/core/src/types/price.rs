//! Type-safe price representation in minor currency units.
//!
//! The shop sells in Polish złoty only, so a [`Price`] is a count of grosze
//! (1/100 PLN). Decimal conversion goes through `rust_decimal` so that display
//! never touches floating point.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 code of the shop currency.
pub const CURRENCY_CODE: &str = "PLN";

/// Currency symbol used after the amount.
const CURRENCY_SYMBOL: &str = "zł";

/// Non-breaking space used by Polish number formatting.
const NBSP: char = '\u{a0}';

/// Integer parts shorter than this are not grouped (`1234,00 zł`).
const MIN_GROUPED_DIGITS: usize = 5;

/// A price in grosze.
///
/// ```
/// use sebastian_clothes_core::Price;
///
/// let price = Price::from_minor(21_900);
/// assert_eq!(price.to_string(), "219,00\u{a0}zł");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Create a price from minor units (grosze).
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.0
    }

    /// Amount in the currency's standard unit (złoty, two decimal places).
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Price of `quantity` units, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Difference clamped at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Whether the price is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = format!("{:.2}", self.as_decimal());
        let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        write!(f, "{},{fraction}{NBSP}{CURRENCY_SYMBOL}", group_thousands(whole))
    }
}

/// Insert non-breaking spaces between thousands groups.
fn group_thousands(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_owned();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(NBSP);
        }
        out.push(c);
    }
    out
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(minor: u64) -> Self {
        Self(minor)
    }
}
