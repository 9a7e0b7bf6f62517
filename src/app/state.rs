//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the browsing pane. It owns
//! the catalog, the [`ViewState`] controller, the result set of the last filter
//! pass, the selection cursor and the input mode.
//!
//! # Recompute Model
//!
//! Every mutation that touches the filter specification is followed by
//! [`AppState::refresh`], which re-runs the whole filter-then-sort pipeline
//! synchronously. The catalog is small and read-only, so nothing is cached.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot and the terminal size
//! into a [`UIViewModel`]: visible cards for the current layout, the filter
//! panel text, the result summary and an optional empty state.
//!
//! # Example
//!
//! ```rust
//! use propview::app::{AppState, ViewState};
//! use propview::domain::Catalog;
//! use propview::ui::Theme;
//!
//! let mut state = AppState::new(ViewState::default(), Theme::default());
//! assert!(state.results.is_pending());
//!
//! state.load_catalog(Catalog::default());
//! assert!(state.results.is_empty_result());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::{BoundField, InputMode, ViewMode};
use super::view_state::ViewState;
use crate::domain::{apply, Catalog, Property};
use crate::ui::helpers::{format_bound, format_price, format_roi, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FilterPanelInfo, FooterInfo, HeaderInfo, PropertyCard, UIViewModel,
};

/// Rows used by header, summary, filter panel, borders and footer.
const CHROME_ROWS: usize = 9;

/// Width of one grid card including its border.
pub const GRID_CARD_WIDTH: usize = 36;

/// Rows of one grid card including its border and the gap below it.
pub const GRID_ROW_HEIGHT: usize = 6;

/// Horizontal gap between grid cards.
pub const GRID_GAP: usize = 2;

/// Outcome of the most recent filter pass.
///
/// `Pending` means no pass has run yet (the catalog has not arrived).
/// `Ready` with an empty vector is the explicit "no results" state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultSet {
    #[default]
    Pending,
    Ready(Vec<Property>),
}

impl ResultSet {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// True only when filters ran and matched nothing.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Ready(results) if results.is_empty())
    }

    /// Matching listings; empty while pending.
    #[must_use]
    pub fn as_slice(&self) -> &[Property] {
        match self {
            Self::Pending => &[],
            Self::Ready(results) => results,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listings supplied by the catalog source, in catalog order.
    pub catalog: Catalog,

    /// Filter specification and layout.
    pub view: ViewState,

    /// Result of the last filter pass.
    pub results: ResultSet,

    /// Zero-based cursor into `results`. Clamped by `refresh`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Text typed into the range bound being edited.
    pub bound_input: String,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Reason the catalog could not be loaded, shown in the empty state.
    pub catalog_error: Option<String>,
}

impl AppState {
    /// Creates a state with no catalog yet; results start out `Pending`.
    #[must_use]
    pub fn new(view: ViewState, theme: Theme) -> Self {
        Self {
            catalog: Catalog::default(),
            view,
            results: ResultSet::Pending,
            selected_index: 0,
            input_mode: InputMode::Normal,
            bound_input: String::new(),
            theme,
            catalog_error: None,
        }
    }

    /// Installs a catalog and runs the first filter pass.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(catalog_len = catalog.len(), "catalog installed");
        self.catalog = catalog;
        self.catalog_error = None;
        self.refresh();
    }

    /// Records a catalog load failure. Results stay `Pending`.
    pub fn fail_catalog(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(error = %error, "catalog unavailable");
        self.catalog_error = Some(error);
    }

    /// Re-runs the filter pipeline and clamps the selection.
    pub fn refresh(&mut self) {
        let results = apply(self.catalog.as_slice(), self.view.spec());

        self.selected_index = if results.is_empty() {
            0
        } else {
            self.selected_index.min(results.len() - 1)
        };
        self.results = ResultSet::Ready(results);
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_property(&self) -> Option<&Property> {
        self.results.as_slice().get(self.selected_index)
    }

    /// Enters bound editing, seeding the buffer with the current value.
    ///
    /// A zero price bound starts out blank so that typing replaces it.
    pub fn begin_bound_edit(&mut self, field: BoundField) {
        let value = self.view.bound(field);
        let is_price = matches!(field, BoundField::PriceMin | BoundField::PriceMax);

        self.bound_input = if is_price && value == 0.0 {
            String::new()
        } else {
            format_bound(value)
        };
        self.input_mode = InputMode::EditBound(field);
    }

    /// Computes a renderable UI view model from current state and terminal size.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Derive the number of card rows that fit below the chrome
    /// 2. Center the window on the row holding the selection
    /// 3. Pull the window back if it runs past the last row
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let view_mode = self.view.view_mode();
        let columns = match view_mode {
            ViewMode::Grid => grid_columns(cols),
            ViewMode::List => 1,
        };

        let mut viewmodel = UIViewModel {
            header: self.compute_header(),
            filter_panel: self.compute_filter_panel(),
            view_mode,
            columns,
            cards: vec![],
            selected_index: 0,
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        };

        let results = self.results.as_slice();
        if results.is_empty() {
            return viewmodel;
        }

        let visible_rows = self.visible_card_rows(view_mode, rows);
        let total_rows = (results.len() + columns - 1) / columns;
        let selected_row = self.selected_index / columns;

        let mut start_row = selected_row.saturating_sub(visible_rows / 2);
        let end_row = (start_row + visible_rows).min(total_rows);
        if end_row - start_row < visible_rows && total_rows >= visible_rows {
            start_row = end_row.saturating_sub(visible_rows);
        }

        let visible_start = start_row * columns;
        let visible_end = (end_row * columns).min(results.len());

        let text_width = match view_mode {
            ViewMode::Grid => GRID_CARD_WIDTH.saturating_sub(4),
            ViewMode::List => list_title_width(cols),
        };

        viewmodel.cards = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, property)| {
                self.compute_card(property, visible_start + offset == self.selected_index, text_width)
            })
            .collect();
        viewmodel.selected_index = self.selected_index - visible_start;

        viewmodel
    }

    fn compute_card(&self, property: &Property, is_selected: bool, text_width: usize) -> PropertyCard {
        let title = truncate(&property.title, text_width);
        let highlight_ranges = match_ranges(&title, self.view.search());

        PropertyCard {
            id: property.id,
            title,
            location: truncate(&property.location, text_width),
            price: format_price(property.price),
            roi: format_roi(property.roi),
            badge: property.kind.as_str().to_string(),
            image: property.image.clone(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let summary = match &self.results {
            ResultSet::Pending => None,
            ResultSet::Ready(results) => Some(format!(
                "Showing {} of {} properties",
                results.len(),
                self.catalog.len()
            )),
        };

        HeaderInfo {
            title: " Available Properties ".to_string(),
            subtitle: "Find your next investment opportunity".to_string(),
            summary,
        }
    }

    fn compute_filter_panel(&self) -> FilterPanelInfo {
        let spec = self.view.spec();
        let bound_text = |field: BoundField, value: f64, render: fn(f64) -> String| {
            if self.input_mode == InputMode::EditBound(field) {
                self.bound_input.clone()
            } else {
                render(value)
            }
        };

        FilterPanelInfo {
            search: spec.search.clone(),
            price_min: bound_text(BoundField::PriceMin, spec.price.min, format_price),
            price_max: bound_text(BoundField::PriceMax, spec.price.max, format_price),
            roi_min: bound_text(BoundField::RoiMin, spec.roi.min, format_roi),
            roi_max: bound_text(BoundField::RoiMax, spec.roi.max, format_roi),
            property_type: spec.property_type.label().to_string(),
            sort: spec.sort.label().to_string(),
            view_mode: self.view.view_mode().label().to_string(),
            focus: self.input_mode,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match &self.results {
            ResultSet::Pending => Some(self.catalog_error.as_ref().map_or_else(
                || EmptyState {
                    message: "Loading catalog...".to_string(),
                    subtitle: "Listings appear once the catalog source responds".to_string(),
                },
                |error| EmptyState {
                    message: "Catalog unavailable".to_string(),
                    subtitle: error.clone(),
                },
            )),
            ResultSet::Ready(results) if results.is_empty() => Some(EmptyState {
                message: "No properties found matching your criteria.".to_string(),
                subtitle: "Press r to reset filters".to_string(),
            }),
            ResultSet::Ready(_) => None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to search  Backspace: delete  Enter/ESC: done".to_string(),
            InputMode::EditBound(field) => {
                format!("{}: type a number (blank = default)  Enter/ESC: done", field.label())
            }
            InputMode::Normal => {
                "j/k: move  /: search  p/P: price  o/O: roi  t: type  s: sort  v: layout  r: reset  Enter: details  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Card rows that fit between the chrome rows.
    const fn visible_card_rows(&self, view_mode: ViewMode, total_rows: usize) -> usize {
        let body = total_rows.saturating_sub(CHROME_ROWS);
        let rows = match view_mode {
            ViewMode::Grid => body / GRID_ROW_HEIGHT,
            // one row for the column headers
            ViewMode::List => body.saturating_sub(1),
        };
        if rows == 0 {
            1
        } else {
            rows
        }
    }
}

/// Number of grid cards that fit side by side.
#[must_use]
pub const fn grid_columns(cols: usize) -> usize {
    let columns = (cols + GRID_GAP) / (GRID_CARD_WIDTH + GRID_GAP);
    if columns == 0 {
        1
    } else {
        columns
    }
}

/// Width of the title column in list layout.
#[must_use]
pub fn list_title_width(cols: usize) -> usize {
    // location, type, price and roi columns take a fixed share
    cols.saturating_sub(60).clamp(12, 40)
}

/// Character ranges of `text` matching `needle` case-insensitively.
///
/// Ranges are `(start, end)` character indices into `text` with exclusive end
/// and never overlap. Case folding is `str::to_lowercase`, the same folding
/// the filter engine uses, so every listing it matches gets a highlight.
fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let pattern: Vec<char> = needle.to_lowercase().chars().collect();
    let hay: Vec<char> = text.to_lowercase().chars().collect();

    if pattern.is_empty() || pattern.len() > hay.len() {
        return vec![];
    }

    // origin[k] is the index in `text` of the char that lowercased to hay[k]
    let origin: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(index, c)| std::iter::repeat(index).take(c.to_lowercase().count()))
        .collect();
    if origin.len() != hay.len() {
        return vec![];
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i + pattern.len() <= hay.len() {
        if hay[i..i + pattern.len()] == pattern[..] {
            let start = origin[i];
            let end = origin[i + pattern.len() - 1] + 1;
            if ranges.last().map_or(true, |&(_, last_end)| start >= last_end) {
                ranges.push((start, end));
            }
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    ranges
}
