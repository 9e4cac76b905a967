// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Required-field validation for contact forms.

use folio_app_core::form::{FormReport, INVALID_FIELD_CLASS};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;

const REQUIRED_SELECTOR: &str = "input[required], textarea[required]";

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Flag empty required fields and report whether all are filled.
pub(crate) fn validate_form(form: &Element) -> bool {
    let fields = dom::query_all(form, REQUIRED_SELECTOR);
    let values: Vec<String> = fields.iter().map(field_value).collect();
    let report = FormReport::check(values.iter().map(String::as_str));
    for (el, filled) in fields.iter().zip(report.fields()) {
        let _ = el
            .class_list()
            .toggle_with_force(INVALID_FIELD_CLASS, !filled);
    }
    report.is_valid()
}
