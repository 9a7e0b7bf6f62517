//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait hides where listings come from. The plugin asks
//! its source once, after permissions are granted, and hands the result to the
//! event handler as `CatalogLoaded` or `CatalogFailed`.

use crate::domain::{Catalog, Result};

/// Supplier of a validated, read-only catalog.
///
/// # Implementations
///
/// - [`JsonCatalogSource`](super::JsonCatalogSource): reads a JSON file
/// - [`BuiltinCatalogSource`](super::BuiltinCatalogSource): sample data compiled in
///
/// # Examples
///
/// ```
/// use propview::catalog::{BuiltinCatalogSource, CatalogSource};
///
/// let catalog = BuiltinCatalogSource.load()?;
/// assert!(!catalog.is_empty());
/// # Ok::<(), propview::domain::PropviewError>(())
/// ```
pub trait CatalogSource {
    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read, parsed, or violates a
    /// catalog invariant.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}
