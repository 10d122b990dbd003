use dioxus::prelude::*;

/// Profile page for a single user.
///
/// The `user` value comes from the matched route, or is the literal
/// default when the route carries no parameter. It is displayed as-is;
/// this layer enforces no format or existence invariant on it.
#[component]
pub fn ProfileView(user: String) -> Element {
    let mut clicks = use_signal(|| 10usize);

    rsx! {
        div { class: "wp-page wp-page--profile",
            h2 { "Profile: {user}" }
            p { "This is the profile page for a user named {user}." }
            p {
                button {
                    class: "wp-button",
                    onclick: move |_| clicks.set(clicks() + 1),
                    "Click Me"
                }
                span { class: "wp-click-count", " Clicked {clicks} times." }
            }
        }
    }
}
