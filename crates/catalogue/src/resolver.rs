//! Catalogue resolver: names → identifiers → buckets → values.
//!
//! Every lookup goes straight to the injected [`Catalogue`]; nothing is
//! cached between calls, so a reloaded document is visible immediately.
//!
//! Lookups return `Option` (NotFound is `None`). The `value_of_*` family is
//! the single place where a missing entry is coerced to [`Currency::ZERO`].

use tracing::debug;

use vaultledger_core::Currency;

use crate::catalogue::{Catalogue, CatalogueKey};
use crate::item::{ItemId, TypeBucket};
use crate::pricing::{PriceKey, PricingOracle};

/// Resolves item names and identifiers against the catalogue and appraises
/// them through the pricing oracle.
#[derive(Debug, Clone)]
pub struct CatalogueResolver<C, O> {
    catalogue: C,
    oracle: O,
}

impl<C, O> CatalogueResolver<C, O>
where
    C: Catalogue,
    O: PricingOracle,
{
    pub fn new(catalogue: C, oracle: O) -> Self {
        Self { catalogue, oracle }
    }

    pub fn catalogue(&self) -> &C {
        &self.catalogue
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Look up the identifier registered for `name`.
    pub fn item_id_from_name(&self, name: &str) -> Option<ItemId> {
        let id = self
            .catalogue
            .lookup(&CatalogueKey::name(name))
            .and_then(|value| value.as_item_id());
        if id.is_none() {
            debug!(item_name = name, "item name not in catalogue");
        }
        id
    }

    pub fn type_bucket_of(&self, id: ItemId) -> TypeBucket {
        id.type_bucket()
    }

    pub fn type_bucket_of_name(&self, name: &str) -> Option<TypeBucket> {
        self.item_id_from_name(name).map(ItemId::type_bucket)
    }

    pub fn price_key_for_bucket(&self, bucket: TypeBucket) -> Option<PriceKey> {
        let key = self
            .catalogue
            .lookup(&CatalogueKey::Bucket(bucket))
            .and_then(|value| value.as_text().map(PriceKey::new));
        if key.is_none() {
            debug!(%bucket, "type bucket has no price key");
        }
        key
    }

    /// Appraise a bucket. Zero when the bucket has no price key; the oracle
    /// is not consulted in that case.
    pub fn value_of_bucket(&self, bucket: TypeBucket) -> Currency {
        self.price_key_for_bucket(bucket)
            .map(|key| self.oracle.appraise(&key))
            .unwrap_or(Currency::ZERO)
    }

    pub fn value_of_identifier(&self, id: ItemId) -> Currency {
        self.value_of_bucket(id.type_bucket())
    }

    /// Appraise an item by name. An unknown name is worth zero, the same as
    /// an unpriced bucket.
    pub fn value_of_name(&self, name: &str) -> Currency {
        self.type_bucket_of_name(name)
            .map(|bucket| self.value_of_bucket(bucket))
            .unwrap_or(Currency::ZERO)
    }

    pub fn display_name_of_identifier(&self, id: ItemId) -> Option<String> {
        let name = self
            .catalogue
            .lookup(&CatalogueKey::Id(id))
            .and_then(|value| value.as_text().map(str::to_string));
        if name.is_none() {
            debug!(item_id = %id, "item has no display name");
        }
        name
    }

    pub fn display_name_of_name(&self, name: &str) -> Option<String> {
        self.item_id_from_name(name)
            .and_then(|id| self.display_name_of_identifier(id))
    }
}
