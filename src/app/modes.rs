//! Input and view mode state types for the application.
//!
//! These enums decide how a key press is interpreted and how results are laid
//! out. Input modes are:
//! - **Normal**: navigation and filter shortcuts
//! - **Search**: typing into the search text
//! - **`EditBound`**: typing into one numeric range bound
//!
//! # Example
//!
//! ```rust
//! use propview::app::modes::{BoundField, InputMode, ViewMode};
//!
//! let input_mode = InputMode::EditBound(BoundField::PriceMax);
//! let view_mode = ViewMode::default();
//! assert_eq!(view_mode, ViewMode::Grid);
//! ```

use crate::domain::filter::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, DEFAULT_ROI_MAX, DEFAULT_ROI_MIN};

/// One editable bound of the price or ROI range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundField {
    PriceMin,
    PriceMax,
    RoiMin,
    RoiMax,
}

impl BoundField {
    /// Value used when the typed text is empty or malformed.
    #[must_use]
    pub const fn fallback(self) -> f64 {
        match self {
            Self::PriceMin => DEFAULT_PRICE_MIN,
            Self::PriceMax => DEFAULT_PRICE_MAX,
            Self::RoiMin => DEFAULT_ROI_MIN,
            Self::RoiMax => DEFAULT_ROI_MAX,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceMin => "Min Price",
            Self::PriceMax => "Max Price",
            Self::RoiMin => "Min ROI",
            Self::RoiMax => "Max ROI",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), p/P/o/O (range
    /// bounds), t (type), s (sort), g/l/v (layout), r (reset), enter (details),
    /// q (quit).
    Normal,

    /// Characters are appended to the search text.
    Search,

    /// Characters are appended to the text of one range bound.
    EditBound(BoundField),
}

/// Result layout. Purely presentational; filter reset leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Cards arranged in as many columns as the terminal width allows.
    #[default]
    Grid,

    /// One row per listing with price and ROI columns.
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Parses the `view` configuration value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }
}
