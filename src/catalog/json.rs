//! JSON file catalog source.
//!
//! The whole document is read into memory on every load. Catalogs are small
//! and read-only, so nothing is cached between loads.

use crate::catalog::models::CatalogDocument;
use crate::catalog::source::CatalogSource;
use crate::domain::{Catalog, Result};
use crate::infrastructure::paths::strip_host_prefix;
use std::path::PathBuf;

/// Catalog source reading a JSON document from disk.
///
/// # Examples
///
/// ```no_run
/// use propview::catalog::{CatalogSource, JsonCatalogSource};
///
/// let source = JsonCatalogSource::new("/host/listings.json");
/// let catalog = source.load()?;
/// # Ok::<(), propview::domain::PropviewError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    file_path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("json_catalog_load", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let catalog = parse_catalog(&contents)?;

        tracing::debug!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file {}", strip_host_prefix(&self.file_path))
    }
}

/// Parses and validates a catalog document.
///
/// # Errors
///
/// Returns [`PropviewError::Parse`](crate::domain::PropviewError::Parse) for
/// malformed JSON and [`PropviewError::Catalog`](crate::domain::PropviewError::Catalog)
/// for an unsupported version or invalid listings.
pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    Catalog::new(CatalogDocument::from_json(contents)?.into_properties()?)
}
