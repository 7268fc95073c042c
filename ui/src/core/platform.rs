//! Browser glue. Every helper here is a no-op (or a neutral default) off
//! wasm so the core modules stay testable on the host.

use super::theme::Theme;

/// BCP-47 tag reported by the browser, if any.
#[cfg(target_arch = "wasm32")]
pub fn navigator_language() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().language())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigator_language() -> Option<String> {
    None
}

/// Mirror the active language on `<html lang>`.
pub fn set_document_lang(code: &str) {
    set_root_attribute("lang", code);
}

/// Reflect the active theme on `<html data-theme>`.
pub fn set_document_theme(value: &str) {
    set_root_attribute("data-theme", value);
}

#[cfg(target_arch = "wasm32")]
fn set_root_attribute(name: &str, value: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = root.set_attribute(name, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_root_attribute(_name: &str, _value: &str) {}

/// Current operating-system color scheme.
#[cfg(target_arch = "wasm32")]
pub fn system_theme() -> Theme {
    match prefers_dark_query() {
        Some(query) if query.matches() => Theme::Dark,
        _ => Theme::Light,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_theme() -> Theme {
    Theme::Light
}

#[cfg(target_arch = "wasm32")]
pub fn prefers_dark_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

/// Run a future to completion. On the web this schedules onto the browser
/// event loop; elsewhere it blocks the caller, since native builds have no
/// browser event loop to yield to.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(future),
        Err(err) => eprintln!("[platform] failed to start runtime: {err}"),
    }
}
