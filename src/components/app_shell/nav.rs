use dioxus::prelude::*;

use crate::routing::route_table;

/// Site links shown in the bar: label plus target URL.
const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Me", "/profile/"),
    ("John", "/profile/john"),
];

/// Global navigation bar with wordmark and site links.
///
/// Link clicks are intercepted and routed through `on_navigate`; the page
/// never reloads.
#[component]
pub fn Nav(current_path: ReadOnlySignal<String>, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        header { class: "wp-nav",
            div { class: "wp-nav-left",
                div { class: "wp-logo",
                    span { class: "wp-logo-word", "Way" }
                    span { class: "wp-logo-word wp-logo-word--accent", "point" }
                }
            }
            nav { class: "wp-nav-links",
                for (label, target) in NAV_LINKS {
                    a {
                        class: if is_active(&current_path(), target) {
                            "wp-nav-link wp-nav-link--active"
                        } else {
                            "wp-nav-link"
                        },
                        href: target,
                        onclick: move |event: MouseEvent| {
                            event.prevent_default();
                            on_navigate.call(target.to_string());
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

/// A link is active when it resolves to the same page as the current path.
fn is_active(current_path: &str, target: &str) -> bool {
    match (
        route_table().resolve(current_path),
        route_table().resolve(target),
    ) {
        (Some(current_page), Some(target_page)) => current_page == target_page,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_active_on_matching_page() {
        assert!(is_active("/", "/"));
        assert!(is_active("/profile/john", "/profile/john"));
        // The bare profile link resolves to the default user, which the
        // parameterized spelling of the same user also reaches
        assert!(is_active("/profile/me", "/profile/"));
    }

    #[test]
    fn test_link_inactive_on_other_page() {
        assert!(!is_active("/", "/profile/"));
        assert!(!is_active("/profile/john", "/profile/"));
    }

    #[test]
    fn test_unmatched_path_activates_nothing() {
        assert!(!is_active("/nonexistent", "/"));
        assert!(!is_active("/nonexistent", "/nonexistent"));
    }
}
