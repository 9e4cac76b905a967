// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Small DOM lookups shared by the page components.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

/// Current window, or a JS error when running outside a browser page.
pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Current document.
pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element by id, cast to `T`; `None` when absent or of another type.
pub(crate) fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements under `root` matching `selector`, in document order.
/// Invalid selectors yield an empty list.
pub(crate) fn query_all(root: &impl AsRef<JsValue>, selector: &str) -> Vec<Element> {
    let root = root.as_ref();
    let list = if let Some(doc) = root.dyn_ref::<Document>() {
        doc.query_selector_all(selector)
    } else if let Some(el) = root.dyn_ref::<Element>() {
        el.query_selector_all(selector)
    } else {
        return Vec::new();
    };
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set one inline style property; failures are ignored (the element keeps
/// its previous style).
pub(crate) fn set_style(el: &Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(name, value);
    }
}

/// Viewport width in CSS pixels (0 when unavailable).
pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
