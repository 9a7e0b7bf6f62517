//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component layout
//!
//! # Example
//!
//! ```rust
//! use propview::app::{AppState, ViewState};
//! use propview::ui::{render, Theme};
//!
//! let state = AppState::new(ViewState::default(), Theme::default());
//! render(&state, 24, 80); // Renders the loading state to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; the host redraws the pane on every render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        cards = viewmodel.cards.len(),
        columns = viewmodel.columns,
        rows,
        cols,
        "rendering"
    );

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
