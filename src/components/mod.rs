//! UI components for the Waypoint application.
//!
//! - `app_shell`: Nav, Header
//! - `pages`: HomeView, ProfileView
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // The most recently routed URL, recorded for informational use
//! let active_route = use_active_route();
//! ```

mod app_shell;
mod pages;

pub use app_shell::{Header, Nav};
pub use pages::{HomeView, ProfileView};

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::routing::{history, route_table, Page};

/// The most recently routed URL.
///
/// `None` until the first route change, then overwritten verbatim on
/// every navigation. Tracked for informational purposes only; nothing in
/// this codebase reads it back.
pub fn use_active_route() -> Signal<Option<String>> {
    use_context::<Signal<Option<String>>>()
}

#[component]
pub fn App() -> Element {
    // Current routed URL, seeded from the browser location.
    let mut current_url = use_signal(history::current_url);

    // Active-route record, written only by the route-change handler below.
    let active_route = use_signal(|| None::<String>);
    use_context_provider(|| active_route);

    // Route-change handler: store the routed URL exactly as given. Runs
    // for the initial resolution on load and for every navigation after.
    let mut active = active_route;
    use_effect(move || {
        let url = current_url.read().clone();
        debug!("Routed to {url}");
        active.set(Some(url));
    });

    // Browser back/forward updates the current URL (web only).
    let mut popstate_hooked = use_signal(|| false);
    use_effect(move || {
        if !*popstate_hooked.peek() {
            popstate_hooked.set(true);
            let mut url_signal = current_url;
            history::listen_popstate(move |url| url_signal.set(url));
        }
    });

    // Routed region: first declared pattern matching the current location
    // decides the mounted page.
    let page_view = match route_table().resolve(&current_url.read()) {
        Some(Page::Home) => rsx! { HomeView {} },
        Some(Page::Profile { user }) => rsx! { ProfileView { user } },
        // No fallback route is declared; an unmatched path mounts nothing.
        None => rsx! { Fragment {} },
    };

    rsx! {
        div { id: "app", class: "wp-app",
            Nav {
                current_path: current_url,
                on_navigate: move |url: String| {
                    if url == *current_url.peek() {
                        return;
                    }
                    history::push_url(&url);
                    current_url.set(url);
                },
            }
            Header {}
            main { class: "wp-main", {page_view} }
        }
    }
}
