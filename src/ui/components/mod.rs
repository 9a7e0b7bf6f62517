//! Composable UI component renderers.
//!
//! Each component draws one region of the pane at an explicit row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title, subtitle and result summary
//! - [`filters`]: Search text, ranges, type, sort and layout controls
//! - [`grid`]: Framed cards, several per row
//! - [`list`]: One listing per line with column headers
//! - [`empty`]: Loading, failure and no-results messages
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header - 3 lines]
//! [Border]
//! [Filter panel - 2 lines]
//! [Border]
//! [Grid cards | List headers + rows | Empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod list;

use crate::app::modes::ViewMode;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filters::render_filter_panel;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use list::{render_list_headers, render_list_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane for a computed view model.
///
/// The chrome (header, filter panel, borders, footer) is always drawn so the
/// filters stay reachable while the result area shows an empty state.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_panel(current_row, &vm.filter_panel, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        match vm.view_mode {
            ViewMode::Grid => {
                render_grid(current_row, &vm.cards, vm.columns, theme);
            }
            ViewMode::List => {
                current_row = render_list_headers(current_row, theme, cols);
                render_list_rows(current_row, &vm.cards, theme, cols);
            }
        }
    }

    let footer_row = rows.max(current_row + 2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
