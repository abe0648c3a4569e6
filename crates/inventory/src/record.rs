use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vaultledger_catalogue::{ItemId, TypeBucket};
use vaultledger_core::{Currency, Entity, EntryId, UserId};

/// A record about to be inserted. The store assigns the [`EntryId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryRecord {
    pub owner_user_id: UserId,
    pub item_id: ItemId,
    pub timestamp: DateTime<Utc>,
    pub expiration: Option<DateTime<Utc>>,
    /// Catalogue value at insertion time.
    pub value: Currency,
}

impl NewInventoryRecord {
    pub fn into_record(self, entry_id: EntryId) -> InventoryRecord {
        InventoryRecord {
            entry_id,
            owner_user_id: self.owner_user_id,
            item_id: self.item_id,
            timestamp: self.timestamp,
            expiration: self.expiration,
            value: self.value,
        }
    }
}

/// One ownership fact: a user, an item, and a value snapshot taken when the
/// item was acquired.
///
/// Records are never updated in place. Later catalogue price changes do not
/// touch `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub entry_id: EntryId,
    pub owner_user_id: UserId,
    pub item_id: ItemId,
    pub timestamp: DateTime<Utc>,
    /// Informational only; nothing in the ledger evicts expired records.
    pub expiration: Option<DateTime<Utc>>,
    pub value: Currency,
}

impl InventoryRecord {
    pub fn type_bucket(&self) -> TypeBucket {
        self.item_id.type_bucket()
    }

    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|exp| exp <= at)
    }
}

impl Entity for InventoryRecord {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.entry_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn record(expiration: Option<DateTime<Utc>>) -> InventoryRecord {
        NewInventoryRecord {
            owner_user_id: UserId::new(1),
            item_id: ItemId::new(0x1005),
            timestamp: test_time(),
            expiration,
            value: Currency::new(50),
        }
        .into_record(EntryId::new())
    }

    #[test]
    fn records_without_expiration_never_expire() {
        let r = record(None);
        assert!(!r.is_expired_at(test_time() + Duration::days(365 * 100)));
    }

    #[test]
    fn expiration_is_inclusive() {
        let exp = test_time();
        let r = record(Some(exp));
        assert!(!r.is_expired_at(exp - Duration::seconds(1)));
        assert!(r.is_expired_at(exp));
        assert!(r.is_expired_at(exp + Duration::seconds(1)));
    }

    #[test]
    fn record_reports_bucket_and_identity() {
        let r = record(None);
        assert_eq!(r.type_bucket().get(), 0x1000);
        assert_eq!(r.id(), &r.entry_id);
    }

    #[test]
    fn identical_holdings_are_distinct_entities() {
        let a = record(None);
        let b = InventoryRecord {
            entry_id: EntryId::new(),
            ..a.clone()
        };
        assert!(a.is_same_entity(&a.clone()));
        assert!(!a.is_same_entity(&b));
    }
}
