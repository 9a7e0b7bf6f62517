//! Catalog sources supplying the read-only listing data.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait abstraction
//! - `json`: JSON file source and document parser
//! - `builtin`: sample catalog embedded at compile time
//! - `models`: on-disk document format

pub mod builtin;
pub mod json;
pub mod models;
pub mod source;

pub use builtin::BuiltinCatalogSource;
pub use json::{parse_catalog, JsonCatalogSource};
pub use models::{CatalogDocument, CATALOG_FORMAT_VERSION};
pub use source::CatalogSource;

use crate::infrastructure::paths::expand_tilde;

/// Chooses the catalog source for a configured file path.
///
/// `None` or a blank path selects the built-in sample catalog.
#[must_use]
pub fn from_config(catalog_file: Option<&str>) -> Box<dyn CatalogSource> {
    match catalog_file.map(str::trim).filter(|path| !path.is_empty()) {
        Some(path) => Box::new(JsonCatalogSource::new(expand_tilde(path))),
        None => Box::new(BuiltinCatalogSource),
    }
}
