//! Catalog pipeline
//!
//! - Source: ordered entries from the bundled asset, an HTTP endpoint, or
//!   fixed test data
//! - Loader: one fetch per activation, last activation wins

pub mod loader;
pub mod source;

pub use loader::CatalogLoader;
pub use source::{
    BundledCatalog, CatalogError, CatalogSource, FixedCatalog, HttpCatalog, SelectedSource,
};
