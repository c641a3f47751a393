//! Pure resolution of the configured URLs into per-element actions.
//!
//! The plan is computed in full before any DOM access, so the browser layer
//! only ever *applies* decisions. Resolution is deterministic and total,
//! which is what makes the configuration step idempotent: the same config
//! always yields the same plan, and applying a plan twice writes the same
//! attribute values twice.

use crate::config::SiteConfig;

/// What to do with an optional link slot (an anchor plus its list item).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction<'a> {
    /// Point the anchor at this URL and leave the item visible.
    Retarget(&'a str),
    /// No URL configured: suppress the whole list item.
    Hide,
}

impl<'a> SlotAction<'a> {
    /// Empty string means "absent". Anything else, including whitespace, is
    /// treated as a configured URL.
    pub fn resolve(url: &'a str) -> Self {
        if url.is_empty() {
            SlotAction::Hide
        } else {
            SlotAction::Retarget(url)
        }
    }
}

/// Every mutation the configurator will make, decided up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPlan<'a> {
    /// Applied to every demo anchor that already carries an href.
    pub demo_url: &'a str,
    /// Report document slot (anchor + list item).
    pub report: SlotAction<'a>,
    /// Source repository slot (anchor + list item).
    pub github: SlotAction<'a>,
}

impl<'a> LinkPlan<'a> {
    pub fn from_site(site: &'a SiteConfig) -> Self {
        Self {
            demo_url: site.demo_url,
            report: SlotAction::resolve(site.report_url),
            github: SlotAction::resolve(site.github_url),
        }
    }
}
