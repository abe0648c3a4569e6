//! Infrastructure layer: catalogue documents on disk, configuration, wiring.

pub mod catalogue;
pub mod config;

mod integration_tests;

pub use catalogue::{CatalogueDocument, JsonFileCatalogue};
pub use config::InfraConfig;

use vaultledger_catalogue::{CatalogueResolver, PricingOracle};
use vaultledger_inventory::{InventoryLedger, RecordStore};

/// Assemble a ledger over `store`, valued through the configured catalogue
/// file and `oracle`.
pub fn build_ledger<S, O>(
    config: &InfraConfig,
    store: S,
    oracle: O,
) -> InventoryLedger<S, JsonFileCatalogue, O>
where
    S: RecordStore,
    O: PricingOracle,
{
    tracing::info!(catalogue = %config.catalogue_path.display(), "building inventory ledger");
    InventoryLedger::new(store, CatalogueResolver::new(config.catalogue(), oracle))
}
