//! Browser-location binding for the routed region.
//!
//! On the web the current URL comes from `window.location`, in-app
//! navigation goes through `history.pushState`, and back/forward arrives
//! as `popstate` events. On native builds the location is an in-memory
//! path only: push is a no-op and no listener exists, which keeps the
//! desktop build compiling and the routing core testable off-browser.

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, error};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Current routed URL: the location's path plus query string.
#[cfg(target_arch = "wasm32")]
pub fn current_url() -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{path}{search}")
}

/// Current routed URL (native: always the root path).
#[cfg(not(target_arch = "wasm32"))]
pub fn current_url() -> String {
    "/".to_string()
}

/// Push a new URL onto the session history without a page load.
#[cfg(target_arch = "wasm32")]
pub fn push_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                error!("Failed to push history entry for {url}: {err:?}");
            } else {
                debug!("Pushed history entry: {url}");
            }
        }
        Err(err) => error!("Browser history unavailable: {err:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn push_url(_url: &str) {}

/// Invoke `on_change` with the new URL whenever the user moves through
/// session history (back/forward).
///
/// The listener is installed once and lives for the lifetime of the page.
#[cfg(target_arch = "wasm32")]
pub fn listen_popstate(mut on_change: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let url = current_url();
        debug!("popstate: {url}");
        on_change(url);
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) =
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
    {
        error!("Failed to attach popstate listener: {err:?}");
    }
    closure.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn listen_popstate(_on_change: impl FnMut(String) + 'static) {}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_location_is_root() {
        assert_eq!(current_url(), "/");
    }
}
