//! Integration tests for the full valuation pipeline.
//!
//! Tests: JSON catalogue file → CatalogueResolver → InventoryLedger → RecordStore
//!
//! Verifies:
//! - Name-based insertion resolves through the on-disk document
//! - Edits to the document apply to the next call without a restart
//! - An unreadable document degrades to zero values, not errors

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use vaultledger_catalogue::{FixedPriceOracle, ItemId, TypeBucket};
    use vaultledger_core::{Currency, DomainError, UserId};
    use vaultledger_inventory::{InMemoryRecordStore, InventoryLedger};

    use crate::catalogue::JsonFileCatalogue;
    use crate::config::{CATALOGUE_PATH_VAR, InfraConfig};

    const CATALOGUE: &str = r#"{
        "items": { "sword": 4101, "shield": 8193 },
        "names": { "0x1005": "Sword", "0x2001": "Shield" },
        "price_keys": { "0x1000": "priceKeySword" }
    }"#;

    /// Catalogue file in the system temp dir, removed on drop.
    struct TempCatalogue {
        path: PathBuf,
    }

    impl TempCatalogue {
        fn new(contents: &str) -> Self {
            let path = std::env::temp_dir()
                .join(format!("vaultledger-catalogue-{}.json", uuid::Uuid::now_v7()));
            std::fs::write(&path, contents).unwrap();
            Self { path }
        }

        fn rewrite(&self, contents: &str) {
            std::fs::write(&self.path, contents).unwrap();
        }
    }

    impl Drop for TempCatalogue {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    fn test_user_id() -> UserId {
        UserId::new(1)
    }

    fn setup(
        file: &TempCatalogue,
    ) -> (
        InventoryLedger<Arc<InMemoryRecordStore>, JsonFileCatalogue, Arc<FixedPriceOracle>>,
        Arc<InMemoryRecordStore>,
    ) {
        let path = file.path.to_string_lossy().into_owned();
        let config = InfraConfig::from_lookup(|key| {
            (key == CATALOGUE_PATH_VAR).then(|| path.clone())
        })
        .unwrap();

        let store = Arc::new(InMemoryRecordStore::new());
        let oracle = Arc::new(
            FixedPriceOracle::new()
                .with_price("priceKeySword", 50)
                .with_price("priceKeyShield", 30),
        );
        (crate::build_ledger(&config, store.clone(), oracle), store)
    }

    #[test]
    fn sword_scenario_through_json_catalogue() {
        let file = TempCatalogue::new(CATALOGUE);
        let (ledger, store) = setup(&file);

        let entry_id = ledger.add_item_by_name(test_user_id(), "sword", None).unwrap();
        let record = store.get(entry_id).unwrap();
        assert_eq!(record.item_id, ItemId::new(0x1005));
        assert_eq!(record.value, Currency::new(50));

        assert_eq!(ledger.get_inventory_value(test_user_id()).unwrap(), Currency::new(50));
        let swords = ledger
            .get_inventory(test_user_id(), TypeBucket::new(0x1000))
            .unwrap();
        assert_eq!(swords, vec![record]);
        assert!(ledger
            .get_inventory(test_user_id(), TypeBucket::new(0x2000))
            .unwrap()
            .is_empty());

        assert_eq!(
            ledger.resolver().display_name_of_identifier(ItemId::new(0x1005)),
            Some("Sword".to_string())
        );
    }

    #[test]
    fn unknown_name_is_rejected_and_nothing_is_stored() {
        let file = TempCatalogue::new(CATALOGUE);
        let (ledger, store) = setup(&file);

        let err = ledger
            .add_item_by_name(test_user_id(), "unknown_item", None)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidItemName(_)));
        assert_eq!(ledger.item_count(test_user_id()).unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn edits_on_disk_apply_to_the_next_insert() {
        let file = TempCatalogue::new(CATALOGUE);
        let (ledger, _store) = setup(&file);

        let before = ledger.add_item_by_name(test_user_id(), "shield", None).unwrap();

        file.rewrite(
            r#"{
                "items": { "sword": 4101, "shield": 8193 },
                "price_keys": { "0x1000": "priceKeySword", "0x2000": "priceKeyShield" }
            }"#,
        );
        let after = ledger.add_item_by_name(test_user_id(), "shield", None).unwrap();

        let records = ledger.get_inventory(test_user_id(), None).unwrap();
        let value_of = |id| {
            records
                .iter()
                .find(|r| r.entry_id == id)
                .map(|r| r.value)
                .unwrap()
        };
        assert_eq!(value_of(before), Currency::ZERO);
        assert_eq!(value_of(after), Currency::new(30));
        assert_eq!(ledger.get_inventory_value(test_user_id()).unwrap(), Currency::new(30));
    }

    #[test]
    fn unreadable_catalogue_degrades_to_zero_value() {
        let file = TempCatalogue::new("{ this is not json");
        let (ledger, _store) = setup(&file);

        let entry_id = ledger.add_item(test_user_id(), ItemId::new(0x1005), None).unwrap();
        let records = ledger.get_inventory(test_user_id(), None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entry_id, entry_id);
        assert_eq!(records[0].value, Currency::ZERO);

        let err = ledger.add_item_by_name(test_user_id(), "sword", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidItemName(_)));
    }

    #[test]
    fn one_malformed_entry_does_not_disable_the_catalogue() {
        let file = TempCatalogue::new(
            r#"{
                "items": { "sword": 4101, "gem": "not an id" },
                "price_keys": { "0x1000": "priceKeySword" }
            }"#,
        );
        let (ledger, store) = setup(&file);

        let entry_id = ledger.add_item_by_name(test_user_id(), "sword", None).unwrap();
        assert_eq!(store.get(entry_id).unwrap().value, Currency::new(50));

        let err = ledger.add_item_by_name(test_user_id(), "gem", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidItemName(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removal_and_owner_listing() {
        let file = TempCatalogue::new(CATALOGUE);
        let (ledger, store) = setup(&file);

        let a = ledger.add_item_by_name(UserId::new(1), "sword", None).unwrap();
        ledger.add_item_by_name(UserId::new(2), "shield", None).unwrap();
        assert_eq!(
            ledger.get_users_with_inventory().unwrap().into_iter().collect::<Vec<_>>(),
            vec![UserId::new(1), UserId::new(2)]
        );

        ledger.remove_item(a).unwrap();
        ledger.remove_item(a).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            ledger.get_users_with_inventory().unwrap().into_iter().collect::<Vec<_>>(),
            vec![UserId::new(2)]
        );
    }
}
