use std::collections::BTreeSet;
use std::sync::Arc;

use vaultledger_catalogue::TypeBucket;
use vaultledger_core::{Currency, DomainResult, EntryId, UserId};

use crate::record::{InventoryRecord, NewInventoryRecord};

/// Relation of inventory records.
///
/// The store owns consistency: each method is a single atomic operation, and
/// the ledger layers no locking or read-modify-write on top.
pub trait RecordStore: Send + Sync {
    /// Insert one record, assigning a fresh [`EntryId`].
    fn insert(&self, record: NewInventoryRecord) -> DomainResult<EntryId>;

    /// Delete the record with `entry_id`. Returns whether a record was
    /// removed; a missing record is not an error.
    fn delete(&self, entry_id: EntryId) -> DomainResult<bool>;

    /// Records owned by `owner`, optionally restricted to identifiers in the
    /// bucket's half-open range. Ordering is store-defined.
    fn select(
        &self,
        owner: UserId,
        bucket: Option<TypeBucket>,
    ) -> DomainResult<Vec<InventoryRecord>>;

    /// Sum of `value` over records owned by `owner`.
    fn sum_value(&self, owner: UserId) -> DomainResult<Currency>;

    /// Distinct owners across the whole store.
    fn distinct_owners(&self) -> DomainResult<BTreeSet<UserId>>;

    /// Number of records owned by `owner`.
    fn count(&self, owner: UserId) -> DomainResult<usize> {
        self.select(owner, None).map(|records| records.len())
    }
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert(&self, record: NewInventoryRecord) -> DomainResult<EntryId> {
        (**self).insert(record)
    }

    fn delete(&self, entry_id: EntryId) -> DomainResult<bool> {
        (**self).delete(entry_id)
    }

    fn select(
        &self,
        owner: UserId,
        bucket: Option<TypeBucket>,
    ) -> DomainResult<Vec<InventoryRecord>> {
        (**self).select(owner, bucket)
    }

    fn sum_value(&self, owner: UserId) -> DomainResult<Currency> {
        (**self).sum_value(owner)
    }

    fn distinct_owners(&self) -> DomainResult<BTreeSet<UserId>> {
        (**self).distinct_owners()
    }

    fn count(&self, owner: UserId) -> DomainResult<usize> {
        (**self).count(owner)
    }
}
