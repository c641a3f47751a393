//! Applies a resolved [`LinkPlan`] to the live document.
//!
//! The page may ship without any of these elements (partial renders, interim
//! templates), so every lookup tolerates absence: found elements are updated,
//! missing ones are skipped without comment. Worst case the page keeps a
//! placeholder link, which is exactly what the markup authored.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::debug::{PRINT_LINK_SUMMARY, PRINT_SKIPPED_LOOKUPS};
use crate::config::markup;
use crate::domain::{LinkPlan, SlotAction};

/// Rewrites the demo anchors and the two optional link slots. Safe to run
/// more than once; the same plan always writes the same attribute values.
pub fn apply_link_plan(document: &Document, plan: &LinkPlan) {
    if PRINT_LINK_SUMMARY {
        log::info!(
            "[links] demo={} report={:?} github={:?}",
            plan.demo_url,
            plan.report,
            plan.github
        );
    }

    retarget_demo_links(document, plan.demo_url);
    apply_slot(
        document,
        "report",
        markup::REPORT_LINK_ID,
        markup::REPORT_ITEM_ID,
        plan.report,
    );
    apply_slot(
        document,
        "github",
        markup::GITHUB_LINK_ID,
        markup::GITHUB_ITEM_ID,
        plan.github,
    );
}

/// Points every marked demo anchor at the configured URL.
fn retarget_demo_links(document: &Document, demo_url: &str) {
    let Ok(anchors) = document.query_selector_all(markup::DEMO_LINK_SELECTOR) else {
        return;
    };

    for index in 0..anchors.length() {
        let Some(node) = anchors.get(index) else {
            continue;
        };
        let Some(el) = node.dyn_ref::<Element>() else {
            continue;
        };

        // Marked elements without an href are decorative; retargeting them
        // would mint navigable links the page never shipped.
        if el.has_attribute("href") {
            let _ = el.set_attribute("href", demo_url);
        }
    }
}

/// Retarget-or-hide for one optional slot. The anchor and its list item must
/// both be present before either branch runs.
fn apply_slot(document: &Document, label: &str, link_id: &str, item_id: &str, action: SlotAction) {
    let (Some(link), Some(item)) = (
        document.get_element_by_id(link_id),
        document.get_element_by_id(item_id),
    ) else {
        if PRINT_SKIPPED_LOOKUPS {
            log::debug!("[links] {label} slot not in this markup; skipped");
        }
        return;
    };

    match action {
        SlotAction::Retarget(url) => {
            let _ = link.set_attribute("href", url);
        }
        SlotAction::Hide => {
            let _ = item.class_list().add_1(markup::HIDDEN_CLASS);
        }
    }
}
