//! Header component renderer.
//!
//! Renders the centered title, the subtitle and the result summary line.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the three header lines starting at `row`.
///
/// # Layout
///
/// ```text
///                  Available Properties
///          Find your next investment opportunity
///               Showing 4 of 6 properties
/// ```
///
/// The summary line stays blank until the first filter pass has run.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        title_style.push_str(&Theme::bg(bg));
    }
    render_centered(row, &header.title, &title_style, cols);

    let subtitle_style = Theme::fg(&theme.colors.text_dim);
    render_centered(row + 1, &header.subtitle, &subtitle_style, cols);

    let summary = header.summary.as_deref().unwrap_or("");
    render_centered(row + 2, summary, &Theme::fg(&theme.colors.text_normal), cols);

    row + 3
}

/// Prints `text` centered on `row`, padding the line to the full width.
pub(super) fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let text_len = text_width(&text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
