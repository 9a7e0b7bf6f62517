//! Filter engine: the filter-then-sort pipeline over a catalog.
//!
//! [`apply`] is a pure function of `(catalog, spec)`. It borrows both inputs,
//! never mutates them, and returns a fresh vector on every call, so calling it
//! twice with the same inputs yields the same output.

use super::filter::{FilterSpec, SortKey};
use super::property::Property;
use std::cmp::Ordering;

/// Filters `catalog` by `spec` and orders the survivors by `spec.sort`.
///
/// The sort is stable: listings that compare equal keep their catalog order.
///
/// # Example
///
/// ```
/// use propview::domain::{apply, FilterSpec, Property, PropertyType};
///
/// let catalog = vec![
///     Property { id: 1, title: "Lake House".into(), location: "X".into(),
///                price: 100_000.0, roi: 5.0, kind: PropertyType::Villa, image: String::new() },
///     Property { id: 2, title: "Downtown Loft".into(), location: "Y".into(),
///                price: 50_000.0, roi: 8.0, kind: PropertyType::Apartment, image: String::new() },
/// ];
///
/// let ids: Vec<u64> = apply(&catalog, &FilterSpec::default()).iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
#[must_use]
pub fn apply(catalog: &[Property], spec: &FilterSpec) -> Vec<Property> {
    let _span = tracing::debug_span!(
        "filter_engine_apply",
        catalog_len = catalog.len(),
        query_len = spec.search.len(),
        sort = %spec.sort
    )
    .entered();

    let needle = spec.search.to_lowercase();

    let mut results: Vec<Property> = catalog
        .iter()
        .filter(|property| spec.matches(property, &needle))
        .cloned()
        .collect();

    if spec.sort != SortKey::CatalogOrder {
        results.sort_by(|a, b| compare(spec.sort, a, b));
    }

    tracing::debug!(result_count = results.len(), "filter pass complete");
    results
}

/// Ordering of two listings under a sort key.
fn compare(sort: SortKey, a: &Property, b: &Property) -> Ordering {
    match sort {
        SortKey::PriceAscending => a.price.total_cmp(&b.price),
        SortKey::PriceDescending => b.price.total_cmp(&a.price),
        SortKey::RoiDescending => b.roi.total_cmp(&a.roi),
        SortKey::CatalogOrder => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{NumericRange, TypeFilter, DEFAULT_PRICE_MAX};
    use crate::domain::property::PropertyType;

    fn listing(id: u64, title: &str, location: &str, price: f64, roi: f64, kind: PropertyType) -> Property {
        Property {
            id,
            title: title.into(),
            location: location.into(),
            price,
            roi,
            kind,
            image: format!("/images/{id}.jpg"),
        }
    }

    fn worked_example() -> Vec<Property> {
        vec![
            listing(1, "Lake House", "X", 100_000.0, 5.0, PropertyType::Villa),
            listing(2, "Downtown Loft", "Y", 50_000.0, 8.0, PropertyType::Apartment),
        ]
    }

    fn sample() -> Vec<Property> {
        vec![
            listing(1, "Sea View Villa", "Marbella, Spain", 850_000.0, 6.5, PropertyType::Villa),
            listing(2, "City Studio", "Berlin, Germany", 210_000.0, 4.2, PropertyType::Apartment),
            listing(3, "Tech Hub Office", "Austin, USA", 640_000.0, 7.8, PropertyType::Office),
            listing(4, "Garden Flat", "Porto, Portugal", 210_000.0, 5.9, PropertyType::Apartment),
            listing(5, "Hillside Villa", "Tuscany, Italy", 990_000.0, 3.1, PropertyType::Villa),
            listing(6, "Harbor Offices", "Lisbon, Portugal", 480_000.0, 7.8, PropertyType::Office),
        ]
    }

    fn ids(results: &[Property]) -> Vec<u64> {
        results.iter().map(|p| p.id).collect()
    }

    #[test]
    fn worked_example_default_spec_sorts_by_price() {
        assert_eq!(ids(&apply(&worked_example(), &FilterSpec::default())), vec![2, 1]);
    }

    #[test]
    fn worked_example_roi_descending() {
        let spec = FilterSpec::default().with_sort(SortKey::RoiDescending);
        assert_eq!(ids(&apply(&worked_example(), &spec)), vec![2, 1]);
    }

    #[test]
    fn worked_example_type_filter() {
        let spec = FilterSpec::default().with_property_type(TypeFilter::Only(PropertyType::Villa));
        assert_eq!(ids(&apply(&worked_example(), &spec)), vec![1]);
    }

    #[test]
    fn worked_example_search_is_case_insensitive() {
        let spec = FilterSpec::default().with_search("loft");
        assert_eq!(ids(&apply(&worked_example(), &spec)), vec![2]);

        let spec = FilterSpec::default().with_search("LAKE");
        assert_eq!(ids(&apply(&worked_example(), &spec)), vec![1]);
    }

    #[test]
    fn search_matches_location() {
        let spec = FilterSpec::default().with_search("portugal");
        assert_eq!(ids(&apply(&sample(), &spec)), vec![4, 6]);
    }

    #[test]
    fn results_are_a_subset_satisfying_every_conjunct() {
        let catalog = sample();
        let spec = FilterSpec::default()
            .with_search("a")
            .with_price(NumericRange::new(200_000.0, 900_000.0))
            .with_roi(NumericRange::new(4.0, 7.0))
            .with_property_type(TypeFilter::Only(PropertyType::Apartment));

        let results = apply(&catalog, &spec);
        assert!(!results.is_empty());
        for property in &results {
            assert!(catalog.contains(property));
            assert!(
                property.title.to_lowercase().contains('a')
                    || property.location.to_lowercase().contains('a')
            );
            assert!(spec.price.contains(property.price));
            assert!(spec.roi.contains(property.roi));
            assert_eq!(property.kind, PropertyType::Apartment);
        }
    }

    #[test]
    fn apply_is_idempotent_and_leaves_inputs_untouched() {
        let catalog = sample();
        let spec = FilterSpec::default().with_sort(SortKey::PriceDescending);
        let before = catalog.clone();

        let first = apply(&catalog, &spec);
        let second = apply(&catalog, &spec);

        assert_eq!(first, second);
        assert_eq!(catalog, before);
        assert_eq!(spec, FilterSpec::default().with_sort(SortKey::PriceDescending));
    }

    #[test]
    fn sorting_laws_hold_for_each_key() {
        let catalog = sample();

        let asc = apply(&catalog, &FilterSpec::default());
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = apply(&catalog, &FilterSpec::default().with_sort(SortKey::PriceDescending));
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

        let roi = apply(&catalog, &FilterSpec::default().with_sort(SortKey::RoiDescending));
        assert!(roi.windows(2).all(|w| w[0].roi >= w[1].roi));
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let catalog = sample();
        // listings 2 and 4 share a price, 3 and 6 share an roi
        assert_eq!(ids(&apply(&catalog, &FilterSpec::default()))[..2], [2, 4]);
        let roi = apply(&catalog, &FilterSpec::default().with_sort(SortKey::RoiDescending));
        assert_eq!(ids(&roi)[..2], [3, 6]);
    }

    #[test]
    fn catalog_order_keeps_input_order() {
        let spec = FilterSpec::default().with_sort(SortKey::CatalogOrder);
        assert_eq!(ids(&apply(&sample(), &spec)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bounds_are_inclusive() {
        let spec = FilterSpec::default()
            .with_price(NumericRange::new(210_000.0, 480_000.0))
            .with_sort(SortKey::CatalogOrder);
        assert_eq!(ids(&apply(&sample(), &spec)), vec![2, 4, 6]);
    }

    #[test]
    fn inverted_range_yields_no_results() {
        let spec = FilterSpec::default().with_price(NumericRange::new(DEFAULT_PRICE_MAX, 0.0));
        assert!(apply(&sample(), &spec).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        assert!(apply(&[], &FilterSpec::default()).is_empty());
    }
}
