use dioxus::prelude::*;

/// Placeholder home page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "wp-page wp-page--home",
            h2 { "Home" }
            p { "This is the Home page." }
            p { class: "wp-page-hint",
                "Pick a profile from the navigation bar to see a routed parameter in action."
            }
        }
    }
}
