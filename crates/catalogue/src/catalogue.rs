//! Catalogue document abstraction.
//!
//! The catalogue is an external, read-only document. The resolver never
//! builds string keys by concatenation; it asks for one of three tagged keys
//! and receives a typed value back.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::item::{ItemId, TypeBucket};
use crate::pricing::PriceKey;

/// Lookup key into the catalogue document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogueKey {
    /// Item name → item identifier (the document's `"{name}_id"` entry).
    Name(String),
    /// Item identifier → display name.
    Id(ItemId),
    /// Type bucket → price key.
    Bucket(TypeBucket),
}

impl CatalogueKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// Value stored under a [`CatalogueKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValue {
    ItemId(ItemId),
    Text(String),
}

impl CatalogueValue {
    pub fn as_item_id(&self) -> Option<ItemId> {
        match self {
            CatalogueValue::ItemId(id) => Some(*id),
            CatalogueValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CatalogueValue::Text(s) => Some(s),
            CatalogueValue::ItemId(_) => None,
        }
    }
}

/// Read-only key/value view of the catalogue document.
///
/// Implementations must reflect the document's latest contents on every
/// call; a lookup never observes a value that has since been replaced.
/// A missing key (or a document that cannot be read) is `None`.
pub trait Catalogue: Send + Sync {
    fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue>;
}

impl<C> Catalogue for Arc<C>
where
    C: Catalogue + ?Sized,
{
    fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        (**self).lookup(key)
    }
}

impl<C> Catalogue for &C
where
    C: Catalogue + ?Sized,
{
    fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        (**self).lookup(key)
    }
}

/// In-memory catalogue for tests/dev.
///
/// Entries may be changed after construction to simulate a hot-reloaded
/// document; lookups always see the current entries.
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    entries: RwLock<HashMap<CatalogueKey, CatalogueValue>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, name: impl Into<String>, id: ItemId) -> Self {
        self.set_item(name, id);
        self
    }

    pub fn with_display_name(self, id: ItemId, display_name: impl Into<String>) -> Self {
        self.set_display_name(id, display_name);
        self
    }

    pub fn with_price_key(self, bucket: TypeBucket, price_key: impl Into<PriceKey>) -> Self {
        self.set_price_key(bucket, price_key);
        self
    }

    pub fn set_item(&self, name: impl Into<String>, id: ItemId) {
        self.insert(CatalogueKey::Name(name.into()), CatalogueValue::ItemId(id));
    }

    pub fn set_display_name(&self, id: ItemId, display_name: impl Into<String>) {
        self.insert(CatalogueKey::Id(id), CatalogueValue::Text(display_name.into()));
    }

    pub fn set_price_key(&self, bucket: TypeBucket, price_key: impl Into<PriceKey>) {
        let key: PriceKey = price_key.into();
        self.insert(
            CatalogueKey::Bucket(bucket),
            CatalogueValue::Text(key.into_inner()),
        );
    }

    pub fn insert(&self, key: CatalogueKey, value: CatalogueValue) {
        if let Ok(mut map) = self.entries.write() {
            map.insert(key, value);
        }
    }

    pub fn remove(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        self.entries.write().ok()?.remove(key)
    }
}

impl Catalogue for InMemoryCatalogue {
    fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        let map = self.entries.read().ok()?;
        map.get(key).cloned()
    }
}
