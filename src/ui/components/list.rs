//! List layout renderer.
//!
//! One listing per line under a row of column headers (TITLE, LOCATION,
//! TYPE, PRICE, ROI). The title column absorbs spare width.

use crate::app::state::list_title_width;
use crate::ui::helpers::{self, pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PropertyCard;

const LOCATION_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 14;
const ROI_WIDTH: usize = 8;
const COLUMN_GAP: &str = "  ";

/// Renders the column headers at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let title_width = list_title_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    let line = format!(
        " {:<title_width$}{COLUMN_GAP}{:<LOCATION_WIDTH$}{COLUMN_GAP}{:<TYPE_WIDTH$}{COLUMN_GAP}{:>PRICE_WIDTH$}{COLUMN_GAP}{:>ROI_WIDTH$}",
        "TITLE", "LOCATION", "TYPE", "PRICE", "ROI"
    );
    print!("{}", pad(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one line per card starting at `row`.
///
/// # Returns
///
/// The row below the last rendered card.
pub fn render_list_rows(row: usize, cards: &[PropertyCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_list_row(current_row, card, theme, cols);
    }
    current_row
}

/// # Styling Precedence
///
/// 1. Selection colors across the whole line (if `is_selected`)
/// 2. Search match highlights in the title (unless selected)
/// 3. Per-column colors
fn render_list_row(row: usize, card: &PropertyCard, theme: &Theme, cols: usize) -> usize {
    let title_width = list_title_width(cols);
    let colored = |color: &str| {
        if !card.is_selected {
            print!("{}", Theme::fg(color));
        }
    };

    position_cursor(row, 1);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);
    print!("{}", " ".repeat(title_width.saturating_sub(text_width(&card.title))));
    print!("{COLUMN_GAP}");

    colored(&theme.colors.text_dim);
    print!("{}{COLUMN_GAP}", pad(&card.location, LOCATION_WIDTH));
    colored(&theme.colors.badge_fg);
    print!("{}{COLUMN_GAP}", pad(&card.badge, TYPE_WIDTH));
    colored(&theme.colors.price_fg);
    print!("{:>PRICE_WIDTH$}{COLUMN_GAP}", card.price);
    colored(&theme.colors.roi_fg);
    print!("{:>ROI_WIDTH$}", card.roi);

    let line_len = 1 + title_width + LOCATION_WIDTH + TYPE_WIDTH + PRICE_WIDTH + ROI_WIDTH + 4 * COLUMN_GAP.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
