//! Property listing model and the validated catalog.
//!
//! A [`Property`] is an investment listing supplied by a catalog source. The
//! [`Catalog`] wraps the ordered listing sequence and guarantees it is usable
//! by the filter engine: ids are unique, prices and ROI values are finite and
//! non-negative. A catalog is never mutated after construction.

use super::error::{PropviewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Unique identifier of a listing within a catalog.
pub type PropertyId = u64;

/// Kind of real estate offered by a listing.
///
/// Serialized in lowercase. Unrecognized kinds deserialize to
/// [`PropertyType::Other`] so that a catalog with new kinds still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Villa,
    Office,
    #[serde(other)]
    Other,
}

impl PropertyType {
    /// Kinds offered by the type selector, in display order.
    pub const SELECTABLE: [Self; 3] = [Self::Apartment, Self::Villa, Self::Office];

    /// Lowercase wire name, also used for the card badge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Office => "office",
            Self::Other => "other",
        }
    }

    /// Capitalized label for the filter panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Office => "Office",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single investment listing.
///
/// # Fields
///
/// - `id`: unique key within the catalog
/// - `title`, `location`: free text, both searchable
/// - `price`: asking price in currency units
/// - `roi`: expected return on investment, in percent
/// - `kind`: property type, serialized as `type`
/// - `image`: opaque image reference resolved outside this crate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub roi: f64,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub image: String,
}

impl Property {
    /// Route of the detail view for this listing.
    ///
    /// ```
    /// use propview::domain::{Property, PropertyType};
    ///
    /// let property = Property {
    ///     id: 42,
    ///     title: "Harbor Loft".into(),
    ///     location: "Lisbon".into(),
    ///     price: 250_000.0,
    ///     roi: 6.1,
    ///     kind: PropertyType::Apartment,
    ///     image: String::new(),
    /// };
    /// assert_eq!(property.detail_route(), "/property/42");
    /// ```
    #[must_use]
    pub fn detail_route(&self) -> String {
        format!("/property/{}", self.id)
    }
}

/// Immutable, validated sequence of listings in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Validates and wraps a listing sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PropviewError::Catalog`] if an id appears twice or a price or
    /// ROI value is negative, NaN or infinite.
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(properties.len());

        for property in &properties {
            if !seen.insert(property.id) {
                return Err(PropviewError::Catalog(format!(
                    "duplicate property id {}",
                    property.id
                )));
            }
            if !property.price.is_finite() || property.price < 0.0 {
                return Err(PropviewError::Catalog(format!(
                    "property {} has invalid price {}",
                    property.id, property.price
                )));
            }
            if !property.roi.is_finite() || property.roi < 0.0 {
                return Err(PropviewError::Catalog(format!(
                    "property {} has invalid roi {}",
                    property.id, property.roi
                )));
            }
        }

        Ok(Self { properties })
    }

    /// Listings in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: PropertyId, price: f64, roi: f64) -> Property {
        Property {
            id,
            title: format!("Listing {id}"),
            location: "Anywhere".into(),
            price,
            roi,
            kind: PropertyType::Villa,
            image: String::new(),
        }
    }

    #[test]
    fn catalog_accepts_valid_listings() {
        let catalog = Catalog::new(vec![listing(1, 100.0, 5.0), listing(2, 0.0, 0.0)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.as_slice()[1].price, 0.0);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let err = Catalog::new(vec![listing(1, 100.0, 5.0), listing(1, 200.0, 4.0)]).unwrap_err();
        assert!(matches!(err, PropviewError::Catalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn catalog_rejects_negative_and_nan_numbers() {
        assert!(Catalog::new(vec![listing(1, -1.0, 5.0)]).is_err());
        assert!(Catalog::new(vec![listing(1, 10.0, f64::NAN)]).is_err());
    }

    #[test]
    fn unknown_type_deserializes_to_other() {
        let json = r#"{"id":9,"title":"Barn","location":"Farm","price":1,"roi":1,"type":"barn"}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.kind, PropertyType::Other);
        assert!(property.image.is_empty());
    }

    #[test]
    fn type_serializes_lowercase_under_type_key() {
        let json = serde_json::to_value(listing(3, 1.0, 1.0)).unwrap();
        assert_eq!(json["type"], "villa");
    }
}
