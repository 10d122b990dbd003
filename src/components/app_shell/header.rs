use dioxus::prelude::*;

/// Static page banner shown between the navigation bar and the routed
/// region.
#[component]
pub fn Header() -> Element {
    rsx! {
        section { class: "wp-header",
            h1 { class: "wp-header-title", "Waypoint" }
            p { class: "wp-header-tagline", "A small shell with places to go." }
        }
    }
}
