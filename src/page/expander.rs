//! Click-to-toggle wiring for the prompting-details panel.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

use crate::config::debug::PRINT_SKIPPED_LOOKUPS;
use crate::config::markup;
use crate::domain::Disclosure;

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_EXPANDER_EVENTS;

/// Wires the disclosure toggle onto the trigger. The full trigger/content/
/// wrapper triple must be present; otherwise the page is left untouched.
pub fn init_expander(document: &Document) {
    let (Some(trigger), Some(content), Some(wrapper)) = (
        document.get_element_by_id(markup::PROMPTING_TRIGGER_ID),
        document.get_element_by_id(markup::PROMPTING_CONTENT_ID),
        document.get_element_by_id(markup::PROMPTING_EXPANDER_ID),
    ) else {
        if PRINT_SKIPPED_LOOKUPS {
            log::debug!("[expander] trigger/content/wrapper not in this markup; skipped");
        }
        return;
    };

    let listener_target = trigger.clone();
    let on_click = Closure::wrap(Box::new(move || {
        toggle(&trigger, &content, &wrapper);
    }) as Box<dyn FnMut()>);

    if listener_target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        // The listener lives for the rest of the page's lifetime.
        on_click.forget();
    }
}

/// One transition. The content's hidden attribute is read fresh on every
/// click, so state changes made outside this handler are honoured rather
/// than overridden.
fn toggle(trigger: &Element, content: &Element, wrapper: &Element) {
    let was_hidden = content.has_attribute(markup::HIDDEN_ATTR);
    let next = Disclosure::from_content_hidden(was_hidden).toggled();

    if next.content_hidden() {
        let _ = content.set_attribute(markup::HIDDEN_ATTR, "");
    } else {
        let _ = content.remove_attribute(markup::HIDDEN_ATTR);
    }

    let _ = trigger.set_attribute(markup::ARIA_EXPANDED_ATTR, next.aria_expanded());

    match next.open_marker() {
        Some(value) => {
            let _ = wrapper.set_attribute(markup::DATA_OPEN_ATTR, value);
        }
        None => {
            let _ = wrapper.remove_attribute(markup::DATA_OPEN_ATTR);
        }
    }

    #[cfg(debug_assertions)]
    if PRINT_EXPANDER_EVENTS {
        log::debug!("[expander] now {next:?}");
    }
}
