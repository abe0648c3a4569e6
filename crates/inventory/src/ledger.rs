//! Inventory ledger: ownership records with point-in-time value snapshots.
//!
//! The ledger is stateless logic over a [`RecordStore`] and a
//! [`CatalogueResolver`]. Graceful degradation is part of the contract:
//!
//! - an identifier the catalogue cannot price is inserted with value zero;
//! - removing a missing record succeeds;
//! - only name-based insertion fails, with [`DomainError::InvalidItemName`].

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use vaultledger_catalogue::{Catalogue, CatalogueResolver, ItemId, PricingOracle, TypeBucket};
use vaultledger_core::{Currency, DomainError, DomainResult, EntryId, UserId};

use crate::clock::{Clock, SystemClock};
use crate::record::{InventoryRecord, NewInventoryRecord};
use crate::store::RecordStore;

/// Ownership ledger over an injected record store, valued through the
/// catalogue resolver at insertion time.
#[derive(Debug)]
pub struct InventoryLedger<S, C, O, K = SystemClock> {
    store: S,
    resolver: CatalogueResolver<C, O>,
    clock: K,
}

impl<S, C, O> InventoryLedger<S, C, O, SystemClock>
where
    S: RecordStore,
    C: Catalogue,
    O: PricingOracle,
{
    pub fn new(store: S, resolver: CatalogueResolver<C, O>) -> Self {
        Self {
            store,
            resolver,
            clock: SystemClock,
        }
    }
}

impl<S, C, O, K> InventoryLedger<S, C, O, K>
where
    S: RecordStore,
    C: Catalogue,
    O: PricingOracle,
    K: Clock,
{
    pub fn with_clock<K2: Clock>(self, clock: K2) -> InventoryLedger<S, C, O, K2> {
        InventoryLedger {
            store: self.store,
            resolver: self.resolver,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolver(&self) -> &CatalogueResolver<C, O> {
        &self.resolver
    }

    /// Give `item_id` to `user_id`.
    ///
    /// The record's value is the catalogue value right now, or zero when the
    /// identifier cannot be priced. The identifier itself is not validated.
    #[instrument(skip(self))]
    pub fn add_item(
        &self,
        user_id: UserId,
        item_id: ItemId,
        expiration: Option<DateTime<Utc>>,
    ) -> DomainResult<EntryId> {
        let value = self.resolver.value_of_identifier(item_id);
        let entry_id = self.store.insert(NewInventoryRecord {
            owner_user_id: user_id,
            item_id,
            timestamp: self.clock.now(),
            expiration,
            value,
        })?;

        info!(%user_id, item_id = %item_id, %entry_id, %value, "inventory item added");
        Ok(entry_id)
    }

    /// Give the item named `item_name` to `user_id`.
    ///
    /// Fails with [`DomainError::InvalidItemName`] if the catalogue does not
    /// know the name; nothing is inserted in that case.
    #[instrument(skip(self))]
    pub fn add_item_by_name(
        &self,
        user_id: UserId,
        item_name: &str,
        expiration: Option<DateTime<Utc>>,
    ) -> DomainResult<EntryId> {
        let item_id = self
            .resolver
            .item_id_from_name(item_name)
            .ok_or_else(|| DomainError::invalid_item_name(item_name))?;
        self.add_item(user_id, item_id, expiration)
    }

    /// Delete a record. Removing a record that does not exist is a no-op.
    #[instrument(skip(self))]
    pub fn remove_item(&self, entry_id: EntryId) -> DomainResult<()> {
        if self.store.delete(entry_id)? {
            info!(%entry_id, "inventory item removed");
        } else {
            debug!(%entry_id, "no inventory record to remove");
        }
        Ok(())
    }

    /// All records owned by `user_id`, optionally restricted to one type
    /// bucket.
    #[instrument(skip(self))]
    pub fn get_inventory(
        &self,
        user_id: UserId,
        bucket: Option<TypeBucket>,
    ) -> DomainResult<Vec<InventoryRecord>> {
        self.store.select(user_id, bucket)
    }

    /// Records in the same type bucket as the item named `type_name`.
    ///
    /// An unknown name matches nothing.
    #[instrument(skip(self))]
    pub fn get_inventory_of_type_name(
        &self,
        user_id: UserId,
        type_name: &str,
    ) -> DomainResult<Vec<InventoryRecord>> {
        match self.resolver.type_bucket_of_name(type_name) {
            Some(bucket) => self.get_inventory(user_id, Some(bucket)),
            None => Ok(Vec::new()),
        }
    }

    /// Records whose expiration is at or before `at`. Read-only.
    #[instrument(skip(self))]
    pub fn get_expired_items(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> DomainResult<Vec<InventoryRecord>> {
        let mut records = self.store.select(user_id, None)?;
        records.retain(|r| r.is_expired_at(at));
        Ok(records)
    }

    /// Sum of the value snapshots across all of the user's records.
    #[instrument(skip(self))]
    pub fn get_inventory_value(&self, user_id: UserId) -> DomainResult<Currency> {
        self.store.sum_value(user_id)
    }

    #[instrument(skip(self))]
    pub fn item_count(&self, user_id: UserId) -> DomainResult<usize> {
        self.store.count(user_id)
    }

    /// Every user that owns at least one record. Intended for batch jobs.
    #[instrument(skip(self))]
    pub fn get_users_with_inventory(&self) -> DomainResult<BTreeSet<UserId>> {
        self.store.distinct_owners()
    }
}
