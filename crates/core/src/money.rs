//! Currency amounts.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative amount of the virtual economy's currency.
///
/// Stored as an integer number of the smallest unit. Arithmetic saturates
/// instead of wrapping, so aggregating a large inventory never overflows.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Currency(u64);

impl Currency {
    pub const ZERO: Currency = Currency(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Currency) -> Currency {
        Currency(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Currency {}

impl From<u64> for Currency {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::ops::Add for Currency {
    type Output = Currency;

    fn add(self, rhs: Currency) -> Currency {
        self.saturating_add(rhs)
    }
}

impl core::iter::Sum for Currency {
    fn sum<I: Iterator<Item = Currency>>(iter: I) -> Currency {
        iter.fold(Currency::ZERO, Currency::saturating_add)
    }
}

impl<'a> core::iter::Sum<&'a Currency> for Currency {
    fn sum<I: Iterator<Item = &'a Currency>>(iter: I) -> Currency {
        iter.copied().sum()
    }
}
