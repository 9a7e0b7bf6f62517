//! On-disk catalog document format.
//!
//! These types describe the JSON as it is stored, separate from the validated
//! domain [`Catalog`](crate::domain::Catalog).

use crate::domain::{Property, PropviewError, Result};
use serde::Deserialize;

/// Newest catalog document version this build understands.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// A catalog document in either supported shape.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "properties": [
///     {
///       "id": 1,
///       "title": "Modern Downtown Loft",
///       "location": "Downtown, Austin",
///       "price": 425000,
///       "roi": 7.5,
///       "type": "apartment",
///       "image": "images/downtown-loft.jpg"
///     }
///   ]
/// }
/// ```
///
/// A bare array of properties is accepted as an unversioned document.
#[derive(Debug, Clone)]
pub enum CatalogDocument {
    Versioned {
        version: u32,
        properties: Vec<Property>,
    },
    Bare(Vec<Property>),
}

#[derive(Deserialize)]
struct VersionedDocument {
    version: u32,
    #[serde(default)]
    properties: Vec<Property>,
}

impl CatalogDocument {
    /// Parses a document, choosing the shape from its first token.
    ///
    /// Each shape is deserialized directly, so a bad listing is reported with
    /// the offending field and its line and column.
    ///
    /// # Errors
    ///
    /// Returns [`PropviewError::Parse`] for malformed JSON or listings.
    pub fn from_json(contents: &str) -> Result<Self> {
        if contents.trim_start().starts_with('[') {
            return Ok(Self::Bare(serde_json::from_str(contents)?));
        }

        let VersionedDocument { version, properties } = serde_json::from_str(contents)?;
        Ok(Self::Versioned { version, properties })
    }

    /// Unwraps the listings, rejecting versions newer than this build.
    ///
    /// # Errors
    ///
    /// Returns [`PropviewError::Catalog`] for an unsupported version.
    pub fn into_properties(self) -> Result<Vec<Property>> {
        match self {
            Self::Versioned { version, properties } => {
                if version == 0 || version > CATALOG_FORMAT_VERSION {
                    return Err(PropviewError::Catalog(format!(
                        "unsupported catalog version {version} (expected {CATALOG_FORMAT_VERSION})"
                    )));
                }
                Ok(properties)
            }
            Self::Bare(properties) => Ok(properties),
        }
    }
}
