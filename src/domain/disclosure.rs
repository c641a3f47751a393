//! Two-state model for the prompting-details disclosure widget.
//!
//! The DOM's `hidden` flag on the content element is the only record of the
//! current state. A click reads that flag, derives the next state here, and
//! mirrors it back onto the three elements. There is deliberately no stored
//! boolean that could drift out of sync with the rendered page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    /// Content hidden, trigger reads `aria-expanded="false"`, no open marker.
    Collapsed,
    /// Content visible, trigger reads `aria-expanded="true"`, marker present.
    Expanded,
}

impl Disclosure {
    /// Derive the current state from the content element's hidden flag.
    pub fn from_content_hidden(hidden: bool) -> Self {
        if hidden {
            Disclosure::Collapsed
        } else {
            Disclosure::Expanded
        }
    }

    /// The state after one trigger click.
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    /// Whether the content element carries the hidden flag in this state.
    pub fn content_hidden(self) -> bool {
        matches!(self, Disclosure::Collapsed)
    }

    // ARIA wants the string forms, not booleans.
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Disclosure::Expanded => "true",
            Disclosure::Collapsed => "false",
        }
    }

    /// Value for the wrapper's open marker, or `None` to remove the attribute.
    pub fn open_marker(self) -> Option<&'static str> {
        match self {
            Disclosure::Expanded => Some("true"),
            Disclosure::Collapsed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_content_means_collapsed() {
        assert_eq!(Disclosure::from_content_hidden(true), Disclosure::Collapsed);
        assert_eq!(Disclosure::from_content_hidden(false), Disclosure::Expanded);
    }

    #[test]
    fn toggle_is_an_involution() {
        for state in [Disclosure::Collapsed, Disclosure::Expanded] {
            assert_eq!(state.toggled().toggled(), state);
            assert_ne!(state.toggled(), state, "a click must actually change state");
        }
    }

    #[test]
    fn expanded_attribute_views() {
        let open = Disclosure::Expanded;
        assert!(!open.content_hidden());
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.open_marker(), Some("true"));
    }

    #[test]
    fn collapsed_attribute_views() {
        let closed = Disclosure::Collapsed;
        assert!(closed.content_hidden());
        assert_eq!(closed.aria_expanded(), "false");
        assert_eq!(closed.open_marker(), None, "marker is removed, not emptied");
    }

    #[test]
    fn first_click_from_the_shipped_markup_expands() {
        // The canonical page ships the content with the hidden attribute set.
        let next = Disclosure::from_content_hidden(true).toggled();
        assert_eq!(next, Disclosure::Expanded);
        assert!(!next.content_hidden());
    }
}
