//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, search match highlighting, and the number formatting
//! used by cards and the filter panel.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges.
///
/// Ranges are `(start, end)` character indices, end exclusive. Highlighting is
/// skipped for the selected card so it does not fight the selection colors.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Number of terminal cells a string occupies, counted in chars.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` chars, ending in "..." when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Pads `text` with spaces to exactly `width` chars, truncating if longer.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text_width(&text));
    format!("{text}{}", " ".repeat(fill))
}

/// Formats a price as dollars with thousands separators.
///
/// Whole amounts print without decimals; fractional amounts keep two.
///
/// ```
/// use propview::ui::helpers::format_price;
///
/// assert_eq!(format_price(1_250_000.0), "$1,250,000");
/// assert_eq!(format_price(999.5), "$999.50");
/// assert_eq!(format_price(0.0), "$0");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let cents = (price.abs() * 100.0).round();
    // truncation is intended: cents is a rounded, non-negative whole number
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;

    if fraction == 0 {
        format!("{sign}${whole}")
    } else {
        format!("{sign}${whole}.{fraction:02}")
    }
}

/// Formats an ROI percentage, e.g. `7.5%` or `8%`.
#[must_use]
pub fn format_roi(roi: f64) -> String {
    format!("{}%", format_bound(roi))
}

/// Formats a bound for the edit buffer: shortest form without a trailing `.0`.
#[must_use]
pub fn format_bound(value: f64) -> String {
    format!("{value}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(1_000_000.0), "$1,000,000");
        assert_eq!(format_price(50_000.0), "$50,000");
        assert_eq!(format_price(100.0), "$100");
        assert_eq!(format_price(1234.567), "$1,234.57");
        assert_eq!(format_price(-2500.0), "-$2,500");
    }

    #[test]
    fn roi_and_bound_formatting() {
        assert_eq!(format_roi(8.0), "8%");
        assert_eq!(format_roi(7.5), "7.5%");
        assert_eq!(format_bound(10.0), "10");
        assert_eq!(format_bound(250_000.0), "250000");
    }

    #[test]
    fn truncate_and_pad_count_chars() {
        assert_eq!(truncate("Château Blanc", 10), "Château...");
        assert_eq!(truncate("Loft", 10), "Loft");
        assert_eq!(truncate("Loft", 2), "Lo");
        assert_eq!(pad("Loft", 6), "Loft  ");
        assert_eq!(pad("Penthouse", 6), "Pen...");
    }
}
