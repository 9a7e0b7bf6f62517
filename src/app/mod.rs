//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain layer.
//!
//! ```text
//! Key press → Event → handle_event → ViewState setter → filter pass → Actions
//!                                                            ↓
//!                                                    compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode, editable bounds, and layout mode
//! - [`state`]: Application state, result set, and view model computation
//! - [`view_state`]: The filter specification and layout controller
//!
//! # Example
//!
//! ```rust
//! use propview::app::{handle_event, AppState, Event, ViewState};
//! use propview::ui::Theme;
//!
//! let mut state = AppState::new(ViewState::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::KeyDown);
//! assert!(actions.is_empty());
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;
pub mod view_state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{BoundField, InputMode, ViewMode};
pub use state::{AppState, ResultSet};
pub use view_state::ViewState;
