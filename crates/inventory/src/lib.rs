//! Inventory ledger.
//!
//! Tracks which user owns which catalogue items and what they were worth
//! when acquired. Storage is injected through [`RecordStore`]; valuation goes
//! through [`vaultledger_catalogue::CatalogueResolver`].

pub mod clock;
pub mod ledger;
pub mod record;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::InventoryLedger;
pub use record::{InventoryRecord, NewInventoryRecord};
pub use store::{InMemoryRecordStore, RecordStore};
