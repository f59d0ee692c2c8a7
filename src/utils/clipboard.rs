//! Clipboard access through the Web Clipboard API

use wasm_bindgen::JsValue;

/// Write text to the system clipboard
///
/// Resolves once the browser has accepted the write. Fails when there is no
/// window or the page lacks clipboard permission; the error carries the
/// browser's message so it can be logged and shown.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);

    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| describe_js_error(&e))
}

fn describe_js_error(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}
