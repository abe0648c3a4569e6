//! Item identifiers and type buckets.

use core::ops::Range;
use serde::{Deserialize, Serialize};

use vaultledger_core::{DomainError, ValueObject};

/// Mask selecting the type-bucket nibble of an identifier.
pub const TYPE_BUCKET_MASK: u16 = 0xF000;

/// Number of identifiers that share one type bucket.
pub const TYPE_BUCKET_WIDTH: u32 = 0x1000;

/// Numeric code naming a catalogue item.
///
/// The high nibble is the item's [`TypeBucket`]; the low twelve bits select
/// the item within that bucket.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u16);

impl ItemId {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// `id & 0xF000`. Pure, never fails.
    pub const fn type_bucket(self) -> TypeBucket {
        TypeBucket(self.0 & TYPE_BUCKET_MASK)
    }

    /// Position of the item inside its bucket (`id & 0x0FFF`).
    pub const fn index_in_bucket(self) -> u16 {
        self.0 & !TYPE_BUCKET_MASK
    }

    /// Parse a decimal or `0x`-prefixed hexadecimal identifier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        parse_u16(s)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("ItemId: {s:?}")))
    }
}

impl ValueObject for ItemId {}

impl From<u16> for ItemId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// The `0xF000`-masked portion of an identifier, grouping items into priced
/// categories.
///
/// Always has its low twelve bits clear.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct TypeBucket(u16);

impl TypeBucket {
    /// Build a bucket from its raw value. Returns `None` when any of the low
    /// twelve bits are set.
    pub const fn new(raw: u16) -> Option<Self> {
        if raw & !TYPE_BUCKET_MASK == 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn of(id: ItemId) -> Self {
        id.type_bucket()
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Half-open identifier range `[bucket, bucket + 0x1000)`.
    ///
    /// Widened to `u32` so the top bucket's end bound (`0x10000`) is
    /// representable.
    pub const fn range(self) -> Range<u32> {
        let start = self.0 as u32;
        start..start + TYPE_BUCKET_WIDTH
    }

    pub const fn contains(self, id: ItemId) -> bool {
        let raw = id.get() as u32;
        let start = self.0 as u32;
        raw >= start && raw < start + TYPE_BUCKET_WIDTH
    }

    /// Parse a decimal or `0x`-prefixed hexadecimal bucket.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        parse_u16(s)
            .and_then(Self::new)
            .ok_or_else(|| DomainError::invalid_id(format!("TypeBucket: {s:?}")))
    }
}

impl ValueObject for TypeBucket {}

impl From<ItemId> for TypeBucket {
    fn from(value: ItemId) -> Self {
        value.type_bucket()
    }
}

impl TryFrom<u16> for TypeBucket {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            DomainError::validation(format!("type bucket {value:#06x} has low bits set"))
        })
    }
}

impl From<TypeBucket> for u16 {
    fn from(value: TypeBucket) -> Self {
        value.0
    }
}

impl core::fmt::Display for TypeBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

fn parse_u16(s: &str) -> Option<u16> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => s.parse::<u16>().ok(),
    }
}
