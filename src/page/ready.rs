//! One-shot "run after the document is ready" barrier.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Runs `task` once the document's structure is fully parsed.
///
/// If parsing has already finished the task runs immediately and
/// synchronously; otherwise it is registered for `DOMContentLoaded`, which
/// fires at most once. Either way the task runs exactly once, so DOM lookups
/// scheduled through here can never race the parser.
pub fn run_when_ready<F>(document: &Document, task: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        #[cfg(debug_assertions)]
        log::debug!("[boot] document still loading; deferring setup to DOMContentLoaded");

        let once = Closure::once(task);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())
            .is_ok()
        {
            // The browser still holds the listener after this scope ends.
            once.forget();
        }
    } else {
        task();
    }
}
