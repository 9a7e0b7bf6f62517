//! Propview: a Zellij plugin for browsing real-estate investment listings.
//!
//! Propview shows a read-only catalog of listings and lets the user narrow it
//! down interactively:
//! - Case-insensitive search over titles and locations
//! - Inclusive price and ROI ranges with forgiving numeric input
//! - Property type filter and three sort orders
//! - Grid and list layouts with a wrap-around selection cursor
//! - Detail navigation handed to a configurable command

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - ViewState controller                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │
//! │ (ui/)         │   │ (catalog/)    │
//! │ - Rendering   │   │ - JSON file   │
//! │ - Theming     │   │ - Built-in    │
//! │ - Components  │   │ - Source API  │
//! └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Pure logic
//! │  - Property and Catalog                             │
//! │  - FilterSpec and coercion                          │
//! │  - Filter engine                                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Listings, filter specification, filter engine, errors
//! - [`catalog`]: Catalog sources (JSON file, built-in sample)
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/propview.wasm" {
//!         catalog_file "~/listings.json"
//!         view "list"
//!         sort "roi-high"
//!         theme "catppuccin-latte"
//!         detail_command "xdg-open https://listings.example{route}"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use propview::catalog::{BuiltinCatalogSource, CatalogSource};
//! use propview::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let catalog = BuiltinCatalogSource.load()?;
//! handle_event(&mut state, &Event::CatalogLoaded(catalog));
//!
//! for c in "villa".chars() {
//!     handle_event(&mut state, &Event::SearchMode);
//!     handle_event(&mut state, &Event::Char(c));
//! }
//! assert!(state.results.as_slice().iter().all(|p| p.title.to_lowercase().contains("villa")
//!     || p.location.to_lowercase().contains("villa")));
//! # Ok::<(), propview::PropviewError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewMode, ViewState};
pub use domain::{FilterSpec, Property, PropviewError, Result, SortKey};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/propview.wasm" {
///     catalog_file "~/listings.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     view "grid"
///     sort "price-low"
///     detail_command "less /host/listings/{id}.md"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON catalog to browse; the built-in sample catalog when unset.
    pub catalog_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Initial layout. Default: grid
    pub view_mode: ViewMode,

    /// Initial sort order. Default: price ascending
    pub sort: SortKey,

    /// Command run in a floating pane for detail navigation.
    ///
    /// `{id}` and `{route}` are substituted. When unset, navigation intents
    /// are only logged.
    pub detail_command: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// An unknown `view` falls back to grid. An unrecognized `sort` name keeps
    /// the catalog order. Blank strings count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use propview::{Config, SortKey, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("view".to_string(), "list".to_string());
    /// map.insert("sort".to_string(), "roi-high".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.view_mode, ViewMode::List);
    /// assert_eq!(config.sort, SortKey::RoiDescending);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let view_mode = value("view").map_or_else(ViewMode::default, |view| {
            ViewMode::from_config(&view).unwrap_or_else(|| {
                tracing::debug!(view = %view, "unknown view mode, using default");
                ViewMode::default()
            })
        });

        let sort = value("sort")
            .as_deref()
            .map_or_else(SortKey::default, SortKey::parse_lenient);

        Self {
            catalog_file: value("catalog_file"),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            view_mode,
            sort,
            detail_command: value("detail_command"),
        }
    }
}

/// Creates the initial `AppState` for a configuration.
///
/// Resolves the theme (file, then name, then default) and seeds the view
/// state with the configured layout and sort order. The catalog is not loaded
/// here; results stay `Pending` until `Event::CatalogLoaded` arrives.
///
/// ```rust
/// use propview::{initialize, Config, SortKey};
///
/// let config = Config { sort: SortKey::PriceDescending, ..Default::default() };
/// let state = initialize(&config);
/// assert_eq!(state.view.spec().sort, SortKey::PriceDescending);
/// assert!(state.results.is_pending());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing propview plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let view = ViewState::new(FilterSpec::default().with_sort(config.sort), config.view_mode);
    AppState::new(view, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.catalog_file.is_none());
        assert!(config.detail_command.is_none());
        assert_eq!(config.view_mode, ViewMode::Grid);
        assert_eq!(config.sort, SortKey::PriceAscending);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("view", "carousel"),
            ("sort", "newest"),
            ("catalog_file", "   "),
        ]));
        assert_eq!(config.view_mode, ViewMode::Grid);
        assert_eq!(config.sort, SortKey::CatalogOrder);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn values_are_trimmed() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", " ~/listings.json "),
            ("view", "List"),
            ("sort", "catalog"),
            ("detail_command", "echo {id}"),
        ]));
        assert_eq!(config.catalog_file.as_deref(), Some("~/listings.json"));
        assert_eq!(config.view_mode, ViewMode::List);
        assert_eq!(config.sort, SortKey::CatalogOrder);
        assert_eq!(config.detail_command.as_deref(), Some("echo {id}"));
    }

    #[test]
    fn initialize_resolves_theme_and_view() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            view_mode: ViewMode::List,
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.view.view_mode(), ViewMode::List);

        let fallback = initialize(&Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        });
        assert_eq!(fallback.theme.name, ui::theme::DEFAULT_THEME);
    }
}
