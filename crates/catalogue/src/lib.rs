//! Item catalogue resolution and valuation.
//!
//! Maps item names to identifiers, identifiers to type buckets, and buckets
//! to currency values through an external pricing oracle. Pure domain logic:
//! the catalogue document and the oracle are injected.

pub mod catalogue;
pub mod item;
pub mod pricing;
pub mod resolver;

pub use catalogue::{Catalogue, CatalogueKey, CatalogueValue, InMemoryCatalogue};
pub use item::{ItemId, TYPE_BUCKET_MASK, TYPE_BUCKET_WIDTH, TypeBucket};
pub use pricing::{FixedPriceOracle, PriceKey, PricingOracle};
pub use resolver::CatalogueResolver;
