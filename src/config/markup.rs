//! The markup contract: every id, class, and attribute the configurator
//! touches lives here so the page templates and the glue only have to agree
//! in one place.
//!
//! A mismatch is not an error. Elements the page does not ship are skipped
//! and keep their authored state.

/// Selector for anchors that should point at the hosted demo (zero or more).
pub const DEMO_LINK_SELECTOR: &str = ".js-demo-link";

/// Anchor for the optional report document.
pub const REPORT_LINK_ID: &str = "report-link";
/// List item wrapping the report anchor; hidden when no report is configured.
pub const REPORT_ITEM_ID: &str = "report-item";

/// Anchor for the source repository.
pub const GITHUB_LINK_ID: &str = "github-link";
/// List item wrapping the repository anchor.
pub const GITHUB_ITEM_ID: &str = "github-item";

/// Button that toggles the prompting-details panel.
pub const PROMPTING_TRIGGER_ID: &str = "prompting-trigger";
/// The collapsible panel body. Ships with the `hidden` attribute set.
pub const PROMPTING_CONTENT_ID: &str = "prompting-content";
/// Wrapper around trigger + content; carries the open marker for styling.
pub const PROMPTING_EXPANDER_ID: &str = "prompting-expander";

/// Class the stylesheet uses to suppress a list item.
pub const HIDDEN_CLASS: &str = "hidden";

/// Boolean content attribute that hides the expander panel. Same word as
/// `HIDDEN_CLASS`, different mechanism: the class styles list items away, the
/// attribute collapses the panel.
pub const HIDDEN_ATTR: &str = "hidden";

/// Accessibility state mirrored onto the expander trigger ("true"/"false").
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";

/// Styling hook present on the wrapper only while the panel is open.
pub const DATA_OPEN_ATTR: &str = "data-open";
