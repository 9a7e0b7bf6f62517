//! Domain layer for the propview plugin.
//!
//! Core listing types and the filter pipeline, independent of Zellij APIs,
//! rendering, and catalog file formats.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`property`]: Listing model and validated catalog
//! - [`filter`]: Filter specification value types and input coercion
//! - [`engine`]: The filter-then-sort pipeline
//!
//! # Examples
//!
//! ```
//! use propview::domain::{apply, Catalog, FilterSpec};
//!
//! let catalog = Catalog::new(vec![])?;
//! let results = apply(catalog.as_slice(), &FilterSpec::default());
//! assert!(results.is_empty());
//! # Ok::<(), propview::domain::PropviewError>(())
//! ```

pub mod engine;
pub mod error;
pub mod filter;
pub mod property;

pub use engine::apply;
pub use error::{PropviewError, Result};
pub use filter::{FilterSpec, NumericRange, SortKey, TypeFilter};
pub use property::{Catalog, Property, PropertyId, PropertyType};
