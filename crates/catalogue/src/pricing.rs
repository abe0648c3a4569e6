//! Pricing oracle boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use vaultledger_core::{Currency, ValueObject};

/// Opaque token handed to the pricing oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceKey(String);

impl PriceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for PriceKey {}

impl From<&str> for PriceKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PriceKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for PriceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// External valuation subsystem: converts a price key into a currency amount.
///
/// The resolver only ever calls this with a key it actually resolved from the
/// catalogue.
pub trait PricingOracle: Send + Sync {
    fn appraise(&self, price_key: &PriceKey) -> Currency;
}

impl<F> PricingOracle for F
where
    F: Fn(&PriceKey) -> Currency + Send + Sync,
{
    fn appraise(&self, price_key: &PriceKey) -> Currency {
        self(price_key)
    }
}

impl<O> PricingOracle for Arc<O>
where
    O: PricingOracle + ?Sized,
{
    fn appraise(&self, price_key: &PriceKey) -> Currency {
        (**self).appraise(price_key)
    }
}

/// Table-driven oracle for tests/dev. Unknown keys appraise to zero.
#[derive(Debug, Default)]
pub struct FixedPriceOracle {
    prices: RwLock<HashMap<PriceKey, Currency>>,
}

impl FixedPriceOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, key: impl Into<PriceKey>, amount: u64) -> Self {
        self.set_price(key, amount);
        self
    }

    pub fn set_price(&self, key: impl Into<PriceKey>, amount: u64) {
        if let Ok(mut prices) = self.prices.write() {
            prices.insert(key.into(), Currency::new(amount));
        }
    }
}

impl PricingOracle for FixedPriceOracle {
    fn appraise(&self, price_key: &PriceKey) -> Currency {
        self.prices
            .read()
            .ok()
            .and_then(|prices| prices.get(price_key).copied())
            .unwrap_or(Currency::ZERO)
    }
}
