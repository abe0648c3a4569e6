//! JSON file-backed catalogue document.
//!
//! The file is re-read on every lookup so edits on disk take effect on the
//! next call without a restart. Layout:
//!
//! ```json
//! {
//!   "items":      { "sword": 4101 },
//!   "names":      { "0x1005": "Sword" },
//!   "price_keys": { "0x1000": "priceKeySword" }
//! }
//! ```
//!
//! Integer keys may be decimal or `0x`-prefixed hexadecimal.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use vaultledger_catalogue::{Catalogue, CatalogueKey, CatalogueValue, ItemId, TypeBucket};

/// Sections as they appear on disk, before any entry is interpreted.
#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    items: Map<String, Value>,
    #[serde(default)]
    names: Map<String, Value>,
    #[serde(default)]
    price_keys: Map<String, Value>,
}

/// Parsed contents of the catalogue file.
///
/// Entries are interpreted one by one: a malformed entry is dropped on its
/// own and never invalidates its neighbours. When two keys in `names` or
/// `price_keys` denote the same number (`"4101"` and `"0x1005"`), that number
/// is ambiguous and resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogueDocument {
    /// Item name → identifier.
    pub items: HashMap<String, ItemId>,
    /// Identifier → display name.
    pub names: HashMap<ItemId, String>,
    /// Type bucket → price key.
    pub price_keys: HashMap<TypeBucket, String>,
}

impl CatalogueDocument {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let raw: RawDocument =
            serde_json::from_str(json).context("failed to parse catalogue document")?;

        let items = raw
            .items
            .into_iter()
            .filter_map(|(name, value)| match item_id_from_value(&value) {
                Some(id) => Some((name, id)),
                None => {
                    debug!(item_name = %name, %value, "skipping catalogue item with unusable identifier");
                    None
                }
            })
            .collect();

        Ok(Self {
            items,
            names: numeric_section("names", raw.names, |k| ItemId::parse(k).ok()),
            price_keys: numeric_section("price_keys", raw.price_keys, |k| {
                TypeBucket::parse(k).ok()
            }),
        })
    }

    pub fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        match key {
            CatalogueKey::Name(name) => self.items.get(name).copied().map(CatalogueValue::ItemId),
            CatalogueKey::Id(id) => self.names.get(id).cloned().map(CatalogueValue::Text),
            CatalogueKey::Bucket(bucket) => {
                self.price_keys.get(bucket).cloned().map(CatalogueValue::Text)
            }
        }
    }
}

/// Identifiers may be integers, integral floats, or decimal/hex strings.
fn item_id_from_value(value: &Value) -> Option<ItemId> {
    match value {
        Value::Number(n) => {
            if let Some(raw) = n.as_u64() {
                return u16::try_from(raw).ok().map(ItemId::new);
            }
            let f = n.as_f64()?;
            (f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&f))
                .then(|| ItemId::new(f as u16))
        }
        Value::String(s) => ItemId::parse(s).ok(),
        _ => None,
    }
}

/// Normalize a section keyed by numbers written as strings. Entries with an
/// unparsable key or a non-string value are dropped; keys that collide after
/// parsing are dropped together.
fn numeric_section<K>(
    section: &str,
    raw: Map<String, Value>,
    parse_key: impl Fn(&str) -> Option<K>,
) -> HashMap<K, String>
where
    K: Copy + Eq + core::hash::Hash + core::fmt::Display,
{
    let mut entries: HashMap<K, Option<String>> = HashMap::new();
    for (raw_key, value) in raw {
        let (Some(key), Value::String(text)) = (parse_key(&raw_key), value) else {
            debug!(section, key = %raw_key, "skipping malformed catalogue entry");
            continue;
        };
        match entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Some(text));
            }
            Entry::Occupied(mut slot) => {
                warn!(section, %key, "catalogue key defined more than once; ignoring it");
                slot.insert(None);
            }
        }
    }
    entries
        .into_iter()
        .filter_map(|(key, text)| text.map(|t| (key, t)))
        .collect()
}

/// Catalogue backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogue {
    path: PathBuf,
}

impl JsonFileCatalogue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the current file contents.
    pub fn load(&self) -> anyhow::Result<CatalogueDocument> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read catalogue {}", self.path.display()))?;
        CatalogueDocument::parse(&raw)
            .with_context(|| format!("invalid catalogue {}", self.path.display()))
    }
}

impl Catalogue for JsonFileCatalogue {
    fn lookup(&self, key: &CatalogueKey) -> Option<CatalogueValue> {
        match self.load() {
            Ok(doc) => doc.lookup(key),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "catalogue unavailable; treating lookup as not found");
                None
            }
        }
    }
}
