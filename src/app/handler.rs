//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (key presses, catalog load results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations go through [`AppState`] and its [`ViewState`](super::ViewState)
//! 4. Any filter change is followed by a synchronous filter pass
//! 5. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenDetail`
//! - **Text input**: `SearchMode`, `EditBound`, `Char`, `Backspace`, `FinishInput`
//! - **Filter controls**: `CyclePropertyType`, `CycleSortKey`, `ResetFilters`
//! - **Layout**: `SetViewMode`, `ToggleViewMode`
//! - **Catalog**: `CatalogLoaded`, `CatalogFailed`
//!
//! # Example
//!
//! ```rust
//! use propview::app::{handle_event, AppState, Event, ViewState};
//! use propview::ui::Theme;
//!
//! let mut state = AppState::new(ViewState::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ResetFilters);
//! assert!(should_render);
//! assert!(actions.is_empty());
//! ```

use super::modes::{BoundField, InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::Catalog;

/// Events triggered by user input or by the catalog source.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Emits a detail navigation intent for the selected listing.
    OpenDetail,
    /// Starts typing into the search text.
    SearchMode,
    /// Starts typing into one range bound.
    EditBound(BoundField),
    /// Leaves search or bound editing, keeping the typed value.
    FinishInput,
    /// Appends a character to the field being edited.
    Char(char),
    /// Removes the last character from the field being edited.
    Backspace,
    /// Advances the property type selector.
    CyclePropertyType,
    /// Advances the sort selector.
    CycleSortKey,
    /// Switches to the given layout.
    SetViewMode(ViewMode),
    /// Switches between grid and list layouts.
    ToggleViewMode,
    /// Restores default filters and clears the search text.
    ResetFilters,
    /// The catalog source delivered a validated catalog.
    CatalogLoaded(Catalog),
    /// The catalog source failed.
    CatalogFailed {
        /// Error message describing the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the pane needs redrawing, and the side
/// effects to run in order. No event can fail; malformed numeric input is
/// coerced by the view state.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_selection_up();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::OpenDetail => {
            let Some(property) = state.selected_property() else {
                tracing::debug!("no property selected");
                return (false, vec![]);
            };

            tracing::debug!(property_id = property.id, title = %property.title, "opening detail view");
            (
                false,
                vec![Action::OpenDetail {
                    id: property.id,
                    route: property.detail_route(),
                }],
            )
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            (true, vec![])
        }
        Event::EditBound(field) => {
            tracing::debug!(field = ?field, "editing range bound");
            state.begin_bound_edit(*field);
            (true, vec![])
        }
        Event::FinishInput => {
            if state.input_mode == InputMode::Normal {
                return (false, vec![]);
            }
            state.input_mode = InputMode::Normal;
            state.bound_input.clear();
            (true, vec![])
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Normal => (false, vec![]),
            InputMode::Search => {
                let mut search = state.view.search().to_string();
                search.push(*c);
                tracing::trace!(query = %search, "search query updated");
                state.view.set_search(search);
                state.refresh();
                (true, vec![])
            }
            InputMode::EditBound(field) => {
                state.bound_input.push(*c);
                state.view.set_bound_text(field, &state.bound_input);
                state.refresh();
                (true, vec![])
            }
        },
        Event::Backspace => match state.input_mode {
            InputMode::Normal => (false, vec![]),
            InputMode::Search => {
                let mut search = state.view.search().to_string();
                search.pop();
                state.view.set_search(search);
                state.refresh();
                (true, vec![])
            }
            InputMode::EditBound(field) => {
                state.bound_input.pop();
                state.view.set_bound_text(field, &state.bound_input);
                state.refresh();
                (true, vec![])
            }
        },
        Event::CyclePropertyType => {
            let next = state.view.spec().property_type.cycle();
            tracing::debug!(property_type = ?next, "property type changed");
            state.view.set_property_type(next);
            state.refresh();
            (true, vec![])
        }
        Event::CycleSortKey => {
            let next = state.view.spec().sort.cycle();
            tracing::debug!(sort = %next, "sort key changed");
            state.view.set_sort_key(next);
            state.refresh();
            (true, vec![])
        }
        Event::SetViewMode(mode) => {
            if state.view.view_mode() == *mode {
                return (false, vec![]);
            }
            state.view.set_view_mode(*mode);
            (true, vec![])
        }
        Event::ToggleViewMode => {
            let next = state.view.view_mode().toggled();
            state.view.set_view_mode(next);
            (true, vec![])
        }
        Event::ResetFilters => {
            state.view.reset();
            state.input_mode = InputMode::Normal;
            state.bound_input.clear();
            if !state.results.is_pending() {
                state.refresh();
            }
            (true, vec![])
        }
        Event::CatalogLoaded(catalog) => {
            state.load_catalog(catalog.clone());
            (true, vec![])
        }
        Event::CatalogFailed { error } => {
            state.fail_catalog(error.clone());
            (true, vec![])
        }
    }
}
