//! Filter panel component renderer.
//!
//! Shows every filter control on two lines. The field receiving typed input is
//! drawn in the `filter_border` color with a trailing cursor.

use crate::app::modes::{BoundField, InputMode};
use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

/// Left margin of both panel lines.
const PANEL_MARGIN: usize = 1;

/// One `label: value` pair on a panel line.
struct Field<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
}

/// Renders the filter panel starting at `row`.
///
/// # Layout
///
/// ```text
///  Search: loft_   Type: All Types   Sort: Price: Low to High   View: Grid
///  Price: $0 - $1,000,000   ROI: 0% - 10%
/// ```
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_filter_panel(row: usize, panel: &FilterPanelInfo, theme: &Theme, cols: usize) -> usize {
    let editing = |field: BoundField| panel.focus == InputMode::EditBound(field);

    let controls = [
        Field {
            label: "Search",
            value: &panel.search,
            focused: panel.focus == InputMode::Search,
        },
        Field {
            label: "Type",
            value: &panel.property_type,
            focused: false,
        },
        Field {
            label: "Sort",
            value: &panel.sort,
            focused: false,
        },
        Field {
            label: "View",
            value: &panel.view_mode,
            focused: false,
        },
    ];
    render_line(row, &controls, theme, cols);

    let ranges = [
        Field {
            label: "Min price",
            value: &panel.price_min,
            focused: editing(BoundField::PriceMin),
        },
        Field {
            label: "Max price",
            value: &panel.price_max,
            focused: editing(BoundField::PriceMax),
        },
        Field {
            label: "Min ROI",
            value: &panel.roi_min,
            focused: editing(BoundField::RoiMin),
        },
        Field {
            label: "Max ROI",
            value: &panel.roi_max,
            focused: editing(BoundField::RoiMax),
        },
    ];
    render_line(row + 1, &ranges, theme, cols);

    row + 2
}

fn render_line(row: usize, fields: &[Field<'_>], theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(PANEL_MARGIN));
    let mut used = PANEL_MARGIN;

    for field in fields {
        let value = if field.focused {
            format!("{}_", field.value)
        } else {
            field.value.to_string()
        };
        let segment_len = text_width(field.label) + 2 + text_width(&value) + 3;
        if used + segment_len > cols {
            break;
        }

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}: ", field.label);
        if field.focused {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.filter_border));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", truncate(&value, cols.saturating_sub(used)));
        print!("{}   ", Theme::reset());
        used += segment_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
}
