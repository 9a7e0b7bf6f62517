//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the propview library and the Zellij plugin
//! system. Everything host-specific lives here; the library never calls into
//! Zellij.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Catalog**: Once permissions are granted, load the configured catalog
//! 4. **Update**: Translate keys to library events, execute returned actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`/`Down`: Move down
//! - `Ctrl+p`/`Up`: Move up
//!
//! In normal mode:
//! - `j`/`k`: Move down/up
//! - `Enter`: Open details of the selected listing
//! - `/`: Edit search text
//! - `p`/`P`: Edit minimum/maximum price
//! - `o`/`O`: Edit minimum/maximum ROI
//! - `t`: Cycle property type
//! - `s`: Cycle sort order
//! - `g`/`l`/`v`: Grid, list, toggle layout
//! - `r`: Reset filters
//! - `q`: Close plugin
//!
//! While editing search or a bound:
//! - Characters are typed into the field
//! - `Backspace`: Delete last character
//! - `Enter`/`Esc`: Return to normal mode keeping the value
//!
//! Native builds (used for the library's tests) compile only a stub `main`;
//! the plugin itself targets `wasm32-wasip1`.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use std::path::PathBuf;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use propview::app::{AppState, BoundField};
#[cfg(target_family = "wasm")]
use propview::{catalog, handle_event, Action, Config, Event, InputMode, ViewMode};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("propview is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the configuration the shim needs
/// after load: where the catalog comes from and how details are opened.
#[cfg(target_family = "wasm")]
struct State {
    app: AppState,
    catalog_file: Option<String>,
    detail_command: Option<String>,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: propview::initialize(&Config::default()),
            catalog_file: None,
            detail_command: None,
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`/`ChangeApplicationState`: hide the pane
    /// - `RunCommands`: run the detail command
    /// - `FullHdAccess`: read the catalog file under `/host`
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        propview::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_file = ?config.catalog_file,
            view = ?config.view_mode,
            sort = %config.sort,
            "parsed configuration"
        );
        self.app = propview::initialize(&config);
        self.catalog_file = config.catalog_file;
        self.detail_command = config.detail_command;

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, runs it through `handle_event` and executes
    /// the resulting actions. Returns `true` if the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard =
            tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status)
            }
            _ => return false,
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(
            action_count = actions.len(),
            should_render,
            "event handled"
        );
        for action in &actions {
            self.execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        propview::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Down => return Some(Event::KeyDown),
            BareKey::Up => return Some(Event::KeyUp),
            _ => {}
        }

        if self.app.input_mode != InputMode::Normal {
            return match key.bare_key {
                BareKey::Enter | BareKey::Esc => Some(Event::FinishInput),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('p') => Event::EditBound(BoundField::PriceMin),
            BareKey::Char('P') => Event::EditBound(BoundField::PriceMax),
            BareKey::Char('o') => Event::EditBound(BoundField::RoiMin),
            BareKey::Char('O') => Event::EditBound(BoundField::RoiMax),
            BareKey::Char('t') => Event::CyclePropertyType,
            BareKey::Char('s') => Event::CycleSortKey,
            BareKey::Char('g') => Event::SetViewMode(ViewMode::Grid),
            BareKey::Char('l') => Event::SetViewMode(ViewMode::List),
            BareKey::Char('v') => Event::ToggleViewMode,
            BareKey::Char('r') => Event::ResetFilters,
            _ => return None,
        })
    }

    /// Loads the catalog once the host has answered the permission request.
    fn handle_permission_result(&self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                let source = catalog::from_config(self.catalog_file.as_deref());
                let _guard =
                    tracing::debug_span!("catalog_load", source = %source.describe()).entered();

                match source.load() {
                    Ok(catalog) => Event::CatalogLoaded(catalog),
                    Err(e) => Event::CatalogFailed {
                        error: e.to_string(),
                    },
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be loaded");
                Event::CatalogFailed {
                    error: "permission to read the catalog was denied".to_string(),
                }
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::OpenDetail { id, route } => {
                let argv = self
                    .detail_command
                    .as_deref()
                    .and_then(|template| action.detail_command(template));

                let Some((program, args)) = argv.as_deref().and_then(<[String]>::split_first)
                else {
                    tracing::info!(property_id = id, route = %route, "detail view requested");
                    return;
                };

                tracing::debug!(program = %program, args = ?args, "opening detail command");
                open_command_pane_floating(
                    CommandToRun {
                        path: PathBuf::from(program),
                        args: args.to_vec(),
                        cwd: None,
                    },
                    None,
                    BTreeMap::new(),
                );
            }
        }
    }
}
