//! Grid layout renderer.
//!
//! Cards are framed boxes of [`GRID_CARD_WIDTH`] columns laid out left to
//! right, `columns` per row, in result order.

use crate::app::state::{GRID_CARD_WIDTH, GRID_GAP, GRID_ROW_HEIGHT};
use crate::ui::helpers::{self, pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PropertyCard;

/// Renders the visible cards starting at `row`.
///
/// # Card Layout
///
/// ```text
/// ┌──────────────────────────────────┐
/// │ Modern Loft                      │
/// │ Downtown                         │
/// │ $250,000  7.5% ROI     apartment │
/// └─ loft.jpg ───────────────────────┘
/// ```
///
/// The bottom frame carries the image reference when the listing has one.
///
/// # Returns
///
/// The row below the last card row.
pub fn render_grid(row: usize, cards: &[PropertyCard], columns: usize, theme: &Theme) -> usize {
    let columns = columns.max(1);
    let mut current_row = row;

    for card_row in cards.chunks(columns) {
        for (slot, card) in card_row.iter().enumerate() {
            let col = 1 + slot * (GRID_CARD_WIDTH + GRID_GAP);
            render_card(current_row, col, card, theme);
        }
        current_row += GRID_ROW_HEIGHT;
    }

    current_row
}

fn render_card(row: usize, col: usize, card: &PropertyCard, theme: &Theme) {
    let inner = GRID_CARD_WIDTH - 2;
    let text = inner - 2;
    let frame = if card.is_selected {
        Theme::fg(&theme.colors.filter_border)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let body = || {
        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }
    };

    position_cursor(row, col);
    print!("{frame}┌{}┐{}", "─".repeat(inner), Theme::reset());

    position_cursor(row + 1, col);
    print!("{frame}│{} ", Theme::reset());
    body();
    print!("{}", Theme::bold());
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    helpers::render_highlighted_text(&card.title, &card.highlight_ranges, theme, card.is_selected);
    body();
    print!("{}", " ".repeat(text.saturating_sub(text_width(&card.title))));
    print!("{} {frame}│{}", Theme::reset(), Theme::reset());

    position_cursor(row + 2, col);
    print!("{frame}│{} ", Theme::reset());
    body();
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad(&card.location, text));
    print!("{} {frame}│{}", Theme::reset(), Theme::reset());

    position_cursor(row + 3, col);
    print!("{frame}│{} ", Theme::reset());
    body();
    let figures_len = text_width(&card.price) + 2 + text_width(&card.roi) + 4;
    let badge_width = text.saturating_sub(figures_len);
    if card.is_selected {
        print!("{}  {} ROI", card.price, card.roi);
    } else {
        print!("{}{}", Theme::fg(&theme.colors.price_fg), card.price);
        print!("  {}{} ROI", Theme::fg(&theme.colors.roi_fg), card.roi);
        print!("{}", Theme::fg(&theme.colors.badge_fg));
    }
    print!("{:>badge_width$}", helpers::truncate(&card.badge, badge_width));
    print!("{} {frame}│{}", Theme::reset(), Theme::reset());

    position_cursor(row + 4, col);
    if card.image.is_empty() {
        print!("{frame}└{}┘{}", "─".repeat(inner), Theme::reset());
    } else {
        let label = helpers::truncate(&format!(" {} ", card.image), inner.saturating_sub(2));
        let rest = inner.saturating_sub(1 + text_width(&label));
        print!("{frame}└─{}", Theme::reset());
        print!("{}{label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        print!("{frame}{}┘{}", "─".repeat(rest), Theme::reset());
    }
}
