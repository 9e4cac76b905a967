// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fire-and-forget clipboard write with a notification for either outcome.

use folio_app_core::clipboard::CopyOutcome;
use js_sys::{Function, Promise, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::notify::Notifier;

/// `navigator.clipboard.writeText(text)`, looked up dynamically so browsers
/// without the API (or insecure contexts) reject instead of trapping.
async fn write_text(text: &str) -> Result<(), JsValue> {
    let navigator = dom::window()?.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("clipboard API unavailable"));
    }
    let write = Reflect::get(&clipboard, &"writeText".into())?.dyn_into::<Function>()?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Copy `text` and report the outcome through `notifier`. No retry.
pub(crate) fn copy_with_notice(text: String, notifier: Notifier) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = write_text(&text).await;
        if let Err(err) = &result {
            warn!(?err, "clipboard write rejected");
        }
        let (message, kind) = CopyOutcome::from(result).notification();
        notifier.show(message, kind);
    });
}
