//! Internal DOM lookup, focus, and event-path helpers for panel-backed components.

use ui_core::ElementLookup;
use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Looks up an element by id in the live document.
pub(crate) fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

/// Resolves panel element ids against the live document.
pub(crate) struct DocumentLookup;

impl ElementLookup for DocumentLookup {
    fn has_element(&self, id: &str) -> bool {
        element_by_id(id).is_some()
    }
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Id of the focused element, if it has one.
pub(crate) fn active_element_id() -> Option<String> {
    document()
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .filter(|id| !id.is_empty())
}

/// Ids on the path from the event target up to the document root, innermost first.
/// Elements without ids are skipped.
pub(crate) fn event_id_path(ev: &web_sys::Event) -> Vec<String> {
    let mut path = Vec::new();
    let mut cursor = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    while let Some(element) = cursor {
        let id = element.id();
        if !id.is_empty() {
            path.push(id);
        }
        cursor = element.parent_element();
    }
    path
}

/// Removes the `hidden` attribute.
pub(crate) fn reveal(id: &str) {
    if let Some(element) = element_by_id(id) {
        let _ = element.remove_attribute("hidden");
    }
}

/// Sets the `hidden` attribute.
pub(crate) fn conceal(id: &str) {
    if let Some(element) = element_by_id(id) {
        let _ = element.set_attribute("hidden", "");
    }
}

/// Removes then adds classes.
pub(crate) fn swap_classes(id: &str, remove: &[&str], add: &[&str]) {
    let Some(element) = element_by_id(id) else {
        return;
    };
    let classes = element.class_list();
    for class in remove {
        let _ = classes.remove_1(class);
    }
    for class in add {
        let _ = classes.add_1(class);
    }
}

/// Writes an attribute.
pub(crate) fn set_attribute(id: &str, name: &str, value: &str) {
    if let Some(element) = element_by_id(id) {
        let _ = element.set_attribute(name, value);
    }
}
