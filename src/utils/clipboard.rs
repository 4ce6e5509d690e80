//! Clipboard access for the dashboard's copy controls.

use wasm_bindgen_futures::JsFuture;

/// Write `text` to the system clipboard.
///
/// Suspends until the browser confirms or rejects the write. Failures come
/// back as error strings, same convention as the stores; the dashboard only
/// logs them.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let pending = window.navigator().clipboard().write_text(text);
    JsFuture::from(pending)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write rejected: {:?}", e))
}
