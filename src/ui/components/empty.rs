//! Empty state component renderer.
//!
//! Renders the message shown in the result area while the catalog is loading,
//! when it failed, or when no listing matches the filters. The filter panel
//! stays visible above it so the user can adjust or reset.

use super::header::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message two rows below `row`.
///
/// # Layout
///
/// ```text
/// [blank]
/// [blank]
///        No properties found matching your criteria.
///                 Press r to reset filters
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    render_centered(
        row + 2,
        &empty.message,
        &Theme::fg(&theme.colors.empty_state_fg),
        cols,
    );

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + 3, &empty.subtitle, &subtitle_style, cols);
}
