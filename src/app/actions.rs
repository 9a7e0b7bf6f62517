//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. Actions
//! are the boundary between pure state transitions and effects owned by the host:
//! closing the pane and handing a detail navigation intent to whatever renders
//! the detail view.
//!
//! # Example
//!
//! ```rust
//! use propview::app::Action;
//!
//! let actions = vec![Action::OpenDetail { id: 7, route: "/property/7".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::PropertyId;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Navigation intent towards the detail view of one listing.
    ///
    /// The core does not render the detail view; the runtime decides how to
    /// open `route`.
    OpenDetail {
        /// Identifier of the selected listing.
        id: PropertyId,
        /// Detail route, `/property/{id}`.
        route: String,
    },
}

impl Action {
    /// Expands a detail command template for an [`Action::OpenDetail`].
    ///
    /// The template is split on whitespace and `{id}` and `{route}` are
    /// substituted in every word. Returns `None` for other actions and for a
    /// blank template.
    ///
    /// ```rust
    /// use propview::app::Action;
    ///
    /// let action = Action::OpenDetail { id: 7, route: "/property/7".to_string() };
    /// let argv = action.detail_command("xdg-open https://listings.example{route}").unwrap();
    /// assert_eq!(argv, vec!["xdg-open", "https://listings.example/property/7"]);
    /// ```
    #[must_use]
    pub fn detail_command(&self, template: &str) -> Option<Vec<String>> {
        let Self::OpenDetail { id, route } = self else {
            return None;
        };

        let id = id.to_string();
        let argv: Vec<String> = template
            .split_whitespace()
            .map(|word| word.replace("{id}", &id).replace("{route}", route))
            .collect();

        if argv.is_empty() {
            None
        } else {
            Some(argv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(id: PropertyId) -> Action {
        Action::OpenDetail {
            id,
            route: format!("/property/{id}"),
        }
    }

    #[test]
    fn substitutes_every_placeholder() {
        let argv = open(12).detail_command("show --id {id} --path {route}").unwrap();
        assert_eq!(argv, vec!["show", "--id", "12", "--path", "/property/12"]);
    }

    #[test]
    fn blank_template_or_other_action_yields_nothing() {
        assert!(open(1).detail_command("   ").is_none());
        assert!(Action::CloseFocus.detail_command("echo {id}").is_none());
    }
}
