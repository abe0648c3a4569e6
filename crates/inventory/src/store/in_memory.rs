use std::collections::BTreeSet;
use std::sync::RwLock;

use vaultledger_catalogue::TypeBucket;
use vaultledger_core::{Currency, DomainError, DomainResult, EntryId, UserId};

use super::r#trait::RecordStore;
use crate::record::{InventoryRecord, NewInventoryRecord};

/// In-memory record store.
///
/// Intended for tests/dev. Not optimized for performance: records are kept
/// in insertion order and every query is a scan.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<InventoryRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all owners.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, entry_id: EntryId) -> Option<InventoryRecord> {
        let records = self.records.read().ok()?;
        records.iter().find(|r| r.entry_id == entry_id).cloned()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::store("lock poisoned")
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: NewInventoryRecord) -> DomainResult<EntryId> {
        let mut records = self.records.write().map_err(poisoned)?;

        let entry_id = EntryId::new();
        records.push(record.into_record(entry_id));
        Ok(entry_id)
    }

    fn delete(&self, entry_id: EntryId) -> DomainResult<bool> {
        let mut records = self.records.write().map_err(poisoned)?;
        let before = records.len();
        records.retain(|r| r.entry_id != entry_id);
        Ok(records.len() != before)
    }

    fn select(
        &self,
        owner: UserId,
        bucket: Option<TypeBucket>,
    ) -> DomainResult<Vec<InventoryRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .filter(|r| r.owner_user_id == owner)
            .filter(|r| bucket.is_none_or(|b| b.contains(r.item_id)))
            .cloned()
            .collect())
    }

    fn sum_value(&self, owner: UserId) -> DomainResult<Currency> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .filter(|r| r.owner_user_id == owner)
            .map(|r| r.value)
            .sum())
    }

    fn distinct_owners(&self) -> DomainResult<BTreeSet<UserId>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().map(|r| r.owner_user_id).collect())
    }

    fn count(&self, owner: UserId) -> DomainResult<usize> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().filter(|r| r.owner_user_id == owner).count())
    }
}
