//! Sample catalog compiled into the plugin.

use crate::catalog::json::parse_catalog;
use crate::catalog::source::CatalogSource;
use crate::domain::{Catalog, Result};

const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Catalog source used when no `catalog_file` is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load(&self) -> Result<Catalog> {
        parse_catalog(SAMPLE_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{DEFAULT_PRICE_MAX, DEFAULT_ROI_MAX};

    #[test]
    fn sample_fits_default_filters() {
        let catalog = BuiltinCatalogSource.load().unwrap();
        assert_eq!(catalog.len(), 8);
        assert!(catalog
            .as_slice()
            .iter()
            .all(|p| p.price <= DEFAULT_PRICE_MAX && p.roi <= DEFAULT_ROI_MAX));
    }
}
