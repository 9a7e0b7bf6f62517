//! View state controller: the filter specification plus the layout mode.
//!
//! Every setter replaces one field and nothing else, so setters commute. The
//! filter specification itself is replaced wholesale on each change rather than
//! patched in place. Recomputing results after a change is the caller's job
//! (see [`crate::app::AppState::refresh`]).

use super::modes::{BoundField, ViewMode};
use crate::domain::filter::{parse_bound, FilterSpec, NumericRange, SortKey, TypeFilter};

/// Filter specification and layout owned by the browsing view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    spec: FilterSpec,
    view_mode: ViewMode,
}

impl ViewState {
    #[must_use]
    pub fn new(spec: FilterSpec, view_mode: ViewMode) -> Self {
        Self { spec, view_mode }
    }

    #[must_use]
    pub const fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.spec.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.replace_spec(|spec| spec.with_search(text));
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.replace_spec(|spec| spec.with_price(NumericRange::new(min, max)));
    }

    pub fn set_roi_range(&mut self, min: f64, max: f64) {
        self.replace_spec(|spec| spec.with_roi(NumericRange::new(min, max)));
    }

    pub fn set_property_type(&mut self, filter: TypeFilter) {
        self.replace_spec(|spec| spec.with_property_type(filter));
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.replace_spec(|spec| spec.with_sort(key));
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Applies typed text to one bound, keeping the opposite bound.
    ///
    /// Malformed or empty text falls back to the bound's default, e.g. an empty
    /// maximum price becomes 1,000,000.
    pub fn set_bound_text(&mut self, field: BoundField, text: &str) {
        let value = parse_bound(text, field.fallback());
        let FilterSpec { price, roi, .. } = self.spec;

        match field {
            BoundField::PriceMin => self.set_price_range(value, price.max),
            BoundField::PriceMax => self.set_price_range(price.min, value),
            BoundField::RoiMin => self.set_roi_range(value, roi.max),
            BoundField::RoiMax => self.set_roi_range(roi.min, value),
        }
    }

    /// Current value of one bound.
    #[must_use]
    pub const fn bound(&self, field: BoundField) -> f64 {
        match field {
            BoundField::PriceMin => self.spec.price.min,
            BoundField::PriceMax => self.spec.price.max,
            BoundField::RoiMin => self.spec.roi.min,
            BoundField::RoiMax => self.spec.roi.max,
        }
    }

    /// Restores the default filter specification and clears the search text.
    /// The view mode is kept.
    pub fn reset(&mut self) {
        tracing::debug!(view_mode = ?self.view_mode, "resetting filters");
        self.spec = FilterSpec::default();
    }

    fn replace_spec(&mut self, update: impl FnOnce(FilterSpec) -> FilterSpec) {
        let current = std::mem::take(&mut self.spec);
        self.spec = update(current);
    }
}
