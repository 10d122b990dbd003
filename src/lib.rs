//! Waypoint - a minimal client-side application shell.
//!
//! A navigation bar, a header banner, and a client-side routed region
//! switching between placeholder pages. Routing is an app-local ordered
//! route table: the first declared pattern matching the current browser
//! location decides which page is mounted.
//!
//! # Architecture
//!
//! - **Components**: Dioxus component tree - persistent chrome (Nav,
//!   Header) around the routed region
//! - **Routing**: path templates with at most one `:param` segment, an
//!   ordered (pattern, target) table, and a browser-location binding
//! - **Platform support**: browser (WASM) with session-history
//!   integration; native desktop webview with an in-memory location
//!
//! # Examples
//!
//! ```ignore
//! use waypoint::routing::{route_table, Page};
//!
//! // Resolve a location against the declared routes
//! match route_table().resolve("/profile/alice") {
//!     Some(Page::Profile { user }) => println!("profile of {user}"),
//!     Some(Page::Home) => println!("home"),
//!     None => println!("nothing mounted"),
//! }
//! ```

pub mod components;
pub mod error;
pub mod routing;
