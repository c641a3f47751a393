// Core modules
pub mod config;
pub mod domain;

// Browser-only DOM layer. Everything that names web_sys lives under here.
#[cfg(target_arch = "wasm32")]
pub mod page;

// Re-export commonly used types
pub use config::{SITE, SiteConfig};
pub use domain::{Disclosure, LinkPlan, SlotAction};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Page entry point, invoked by the wasm-bindgen loader as soon as the module
/// is instantiated. All the work happens behind the document-ready barrier:
/// link targets are rewritten from [`config::SITE`] and the prompting-details
/// expander gets its click handler.
///
/// Every failure mode here is cosmetic (a link keeps its placeholder target,
/// a panel never expands), so missing pieces are skipped rather than raised.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // A. Route panics and log records to the browser console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🔗 Factuality pages glue starting in WASM mode...");

    // B. Grab the document; outside a browser page there is nothing to wire
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[boot] no window/document in this environment; nothing to do");
        return;
    };

    // C. Defer until the markup is fully parsed, then run the one-time setup
    let doc = document.clone();
    page::run_when_ready(&document, move || {
        page::apply_link_plan(&doc, &domain::LinkPlan::from_site(&config::SITE));
        page::init_expander(&doc);
    });
}

/// Non-wasm builds only expose the pure model so `cargo test` stays green;
/// the page glue itself is wasm-only.
#[cfg(not(target_arch = "wasm32"))]
pub fn start() {}
