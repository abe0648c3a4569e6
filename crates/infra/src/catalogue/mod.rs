//! Catalogue document adapters.

pub mod json_file;

pub use json_file::{CatalogueDocument, JsonFileCatalogue};
