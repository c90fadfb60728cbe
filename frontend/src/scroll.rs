use log::warn;
use web_sys::window;
use yew::prelude::*;

pub fn scroll_to_section(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id));
    match element {
        Some(element) => element.scroll_into_view_with_bool(true),
        None => warn!("No section with id {} to scroll to", id),
    }
}

/// Click handler that scrolls to a section instead of jumping to the anchor.
pub fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}
