//! Filter specification value types.
//!
//! A [`FilterSpec`] is an immutable value: every `with_*` method consumes the
//! spec and returns a new one with exactly one field replaced. The filter engine
//! reads it, the view state replaces it.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | search | empty |
//! | price | `[0, 1_000_000]` |
//! | roi | `[0, 10]` |
//! | property type | all |
//! | sort | price ascending |
//!
//! Range bounds are inclusive and are not checked for `min <= max`; an
//! inverted range simply matches nothing.

use super::error::PropviewError;
use super::property::{Property, PropertyType};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 1_000_000.0;
pub const DEFAULT_ROI_MIN: f64 = 0.0;
pub const DEFAULT_ROI_MAX: f64 = 10.0;

/// Parses a numeric bound typed by the user.
///
/// Empty, malformed and non-finite input yields `fallback`. This never fails:
/// a bad bound means "use the default" rather than a validation error.
///
/// ```
/// use propview::domain::filter::{parse_bound, DEFAULT_PRICE_MAX};
///
/// assert_eq!(parse_bound("250000", DEFAULT_PRICE_MAX), 250_000.0);
/// assert_eq!(parse_bound("", DEFAULT_PRICE_MAX), 1_000_000.0);
/// assert_eq!(parse_bound("12k", 0.0), 0.0);
/// ```
#[must_use]
pub fn parse_bound(input: &str, fallback: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => fallback,
    }
}

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `min <= value <= max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub const fn with_min(self, min: f64) -> Self {
        Self { min, max: self.max }
    }

    #[must_use]
    pub const fn with_max(self, max: f64) -> Self {
        Self { min: self.min, max }
    }
}

/// Property type constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, kind: PropertyType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }

    /// Next option of the type selector: All, Apartment, Villa, Office, All, ...
    #[must_use]
    pub fn cycle(self) -> Self {
        let options = PropertyType::SELECTABLE;
        match self {
            Self::All => Self::Only(options[0]),
            Self::Only(current) => options
                .iter()
                .position(|k| *k == current)
                .and_then(|i| options.get(i + 1))
                .map_or(Self::All, |next| Self::Only(*next)),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Types",
            Self::Only(kind) => kind.label(),
        }
    }
}

/// Result ordering.
///
/// `CatalogOrder` is the explicit pass-through case: results keep the order in
/// which the catalog supplied them. Unknown sort names parsed leniently land
/// here instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAscending,
    PriceDescending,
    RoiDescending,
    CatalogOrder,
}

impl SortKey {
    /// Keys offered by the sort selector, in display order.
    pub const SELECTABLE: [Self; 3] = [Self::PriceAscending, Self::PriceDescending, Self::RoiDescending];

    /// Wire name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
            Self::RoiDescending => "roi-high",
            Self::CatalogOrder => "catalog",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::RoiDescending => "Highest ROI",
            Self::CatalogOrder => "Catalog Order",
        }
    }

    /// Parses a wire name, mapping anything unrecognized to `CatalogOrder`.
    #[must_use]
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(sort_key = %name, "unrecognized sort key, keeping catalog order");
            Self::CatalogOrder
        })
    }

    /// Next option of the sort selector. `CatalogOrder` cycles back to the default.
    #[must_use]
    pub fn cycle(self) -> Self {
        let options = Self::SELECTABLE;
        options
            .iter()
            .position(|k| *k == self)
            .and_then(|i| options.get(i + 1))
            .copied()
            .unwrap_or(options[0])
    }
}

impl FromStr for SortKey {
    type Err = PropviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-low" => Ok(Self::PriceAscending),
            "price-high" => Ok(Self::PriceDescending),
            "roi-high" => Ok(Self::RoiDescending),
            "catalog" => Ok(Self::CatalogOrder),
            other => Err(PropviewError::Config(format!("unknown sort key '{other}'"))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete filter specification.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub search: String,
    pub price: NumericRange,
    pub roi: NumericRange,
    pub property_type: TypeFilter,
    pub sort: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            price: NumericRange::new(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
            roi: NumericRange::new(DEFAULT_ROI_MIN, DEFAULT_ROI_MAX),
            property_type: TypeFilter::All,
            sort: SortKey::PriceAscending,
        }
    }
}

impl FilterSpec {
    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self { search: search.into(), ..self }
    }

    #[must_use]
    pub fn with_price(self, price: NumericRange) -> Self {
        Self { price, ..self }
    }

    #[must_use]
    pub fn with_roi(self, roi: NumericRange) -> Self {
        Self { roi, ..self }
    }

    #[must_use]
    pub fn with_property_type(self, property_type: TypeFilter) -> Self {
        Self { property_type, ..self }
    }

    #[must_use]
    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    /// Evaluates the four filter conjuncts against one listing.
    ///
    /// `needle` is the already-lowercased search text so that a filter pass
    /// lowercases the query once rather than per listing.
    #[must_use]
    pub fn matches(&self, property: &Property, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || property.title.to_lowercase().contains(needle)
            || property.location.to_lowercase().contains(needle);

        matches_search
            && self.price.contains(property.price)
            && self.roi.contains(property.roi)
            && self.property_type.matches(property.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bound_falls_back_on_bad_input() {
        assert_eq!(parse_bound("", DEFAULT_PRICE_MAX), DEFAULT_PRICE_MAX);
        assert_eq!(parse_bound("   ", DEFAULT_PRICE_MIN), DEFAULT_PRICE_MIN);
        assert_eq!(parse_bound("abc", DEFAULT_ROI_MAX), DEFAULT_ROI_MAX);
        assert_eq!(parse_bound("NaN", DEFAULT_ROI_MIN), DEFAULT_ROI_MIN);
        assert_eq!(parse_bound("inf", DEFAULT_PRICE_MAX), DEFAULT_PRICE_MAX);
    }

    #[test]
    fn parse_bound_accepts_decimals_and_whitespace() {
        assert_eq!(parse_bound(" 7.5 ", DEFAULT_ROI_MAX), 7.5);
        assert_eq!(parse_bound("0", DEFAULT_PRICE_MAX), 0.0);
    }

    #[test]
    fn range_is_inclusive_and_inverted_range_is_empty() {
        let range = NumericRange::new(5.0, 8.0);
        assert!(range.contains(5.0));
        assert!(range.contains(8.0));
        assert!(!range.contains(8.01));

        let inverted = NumericRange::new(8.0, 5.0);
        assert!(!inverted.contains(5.0));
        assert!(!inverted.contains(6.5));
        assert!(!inverted.contains(8.0));
    }

    #[test]
    fn type_filter_cycles_through_selector_options() {
        let mut filter = TypeFilter::All;
        let mut seen = vec![];
        for _ in 0..4 {
            filter = filter.cycle();
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                TypeFilter::Only(PropertyType::Apartment),
                TypeFilter::Only(PropertyType::Villa),
                TypeFilter::Only(PropertyType::Office),
                TypeFilter::All,
            ]
        );
    }

    #[test]
    fn sort_key_strict_and_lenient_parsing() {
        assert_eq!("roi-high".parse::<SortKey>().unwrap(), SortKey::RoiDescending);
        assert!("newest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_lenient("newest"), SortKey::CatalogOrder);
        assert_eq!(SortKey::parse_lenient("price-high"), SortKey::PriceDescending);
    }

    #[test]
    fn sort_key_cycle_returns_to_default() {
        assert_eq!(SortKey::PriceAscending.cycle(), SortKey::PriceDescending);
        assert_eq!(SortKey::RoiDescending.cycle(), SortKey::PriceAscending);
        assert_eq!(SortKey::CatalogOrder.cycle(), SortKey::PriceAscending);
    }

    #[test]
    fn with_methods_replace_one_field() {
        let spec = FilterSpec::default().with_search("loft").with_sort(SortKey::RoiDescending);
        assert_eq!(spec.search, "loft");
        assert_eq!(spec.sort, SortKey::RoiDescending);
        assert_eq!(spec.price, FilterSpec::default().price);
        assert_eq!(spec.property_type, TypeFilter::All);
    }
}
