//! Video library: the catalog and how it is loaded.
//!
//! The catalog is built once at start-up, either from the bundled list or
//! from a file given on the command line or in the config.

pub mod catalog;
pub mod loader;

pub use catalog::{sort_by_title, CatalogError, VideoCatalog};
pub use loader::{bundled_catalog, load_catalog, CatalogFormat};
