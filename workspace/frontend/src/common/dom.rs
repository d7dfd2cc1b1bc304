//! Small DOM helpers for the layout and scroll effects.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(e) = element.focus() {
            log::debug!("Could not focus element: {:?}", e);
        }
    }
}

/// Rendered height of the first element matching `selector`.
/// Missing or zero-height elements give `None`.
pub fn offset_height(selector: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(selector).ok()??;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_height())).filter(|h| *h > 0.0)
}

pub fn set_height(node: &NodeRef, height: &str) {
    if let Some(element) = node.cast::<HtmlElement>() {
        if let Err(e) = element.style().set_property("height", height) {
            log::debug!("Could not set height: {:?}", e);
        }
    }
}
