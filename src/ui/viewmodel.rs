//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings only: prices
//! are already formatted, titles already truncated, highlight ranges already
//! computed.

use crate::app::modes::{InputMode, ViewMode};
use crate::domain::PropertyId;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title, subtitle and result summary.
    pub header: HeaderInfo,

    /// Current filter values as displayed in the filter panel.
    pub filter_panel: FilterPanelInfo,

    /// Layout of the result area.
    pub view_mode: ViewMode,

    /// Cards per row (1 in list layout).
    pub columns: usize,

    /// Visible window of result cards, in result order.
    pub cards: Vec<PropertyCard>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Shown instead of cards when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Display data for one listing.
#[derive(Debug, Clone)]
pub struct PropertyCard {
    pub id: PropertyId,
    pub title: String,
    pub location: String,
    /// Formatted price, e.g. `$1,250,000`.
    pub price: String,
    /// Formatted ROI, e.g. `7.5%`.
    pub roi: String,
    /// Property type badge.
    pub badge: String,
    /// Opaque image reference, shown as text.
    pub image: String,
    pub is_selected: bool,
    /// Character ranges of `title` matching the search text.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
    /// "Showing N of M properties"; `None` until the first filter pass.
    pub summary: Option<String>,
}

/// Filter panel display information.
#[derive(Debug, Clone)]
pub struct FilterPanelInfo {
    pub search: String,
    pub price_min: String,
    pub price_max: String,
    pub roi_min: String,
    pub roi_max: String,
    pub property_type: String,
    pub sort: String,
    pub view_mode: String,
    /// Field receiving typed characters, if any.
    pub focus: InputMode,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown while the catalog is pending, when it failed to load, and when the
/// filters match nothing.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
