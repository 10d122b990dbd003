//! The ordered route table: (pattern, target) pairs, first match wins.

use once_cell::sync::Lazy;

use crate::error::RouteError;
use crate::routing::pattern::{RouteMatch, RoutePattern};

/// User identifier bound when the profile route carries no parameter.
pub const DEFAULT_PROFILE_USER: &str = "me";

/// The outcome of route resolution: which page to mount, with its props.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Profile { user: String },
}

/// What a route entry mounts when its pattern matches.
#[derive(Clone, Copy, Debug)]
enum PageTarget {
    Home,
    /// Profile with the literal default user
    ProfileDefault,
    /// Profile with the user taken from the `:user` segment
    ProfileFromParam,
}

impl PageTarget {
    fn build(self, matched: &RouteMatch) -> Page {
        match self {
            PageTarget::Home => Page::Home,
            PageTarget::ProfileDefault => Page::Profile {
                user: DEFAULT_PROFILE_USER.to_string(),
            },
            PageTarget::ProfileFromParam => Page::Profile {
                user: matched
                    .param("user")
                    .unwrap_or(DEFAULT_PROFILE_USER)
                    .to_string(),
            },
        }
    }
}

struct RouteEntry {
    pattern: RoutePattern,
    target: PageTarget,
}

/// An ordered list of route entries.
///
/// Resolution walks the entries in declaration order and the first pattern
/// that matches decides the page; later entries cannot override earlier
/// ones.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    fn declare(&mut self, template: &str, target: PageTarget) -> Result<(), RouteError> {
        self.entries.push(RouteEntry {
            pattern: RoutePattern::parse(template)?,
            target,
        });
        Ok(())
    }

    /// Resolve a path to the page the first matching entry mounts.
    ///
    /// Returns `None` for an undeclared path; no fallback entry exists.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|m| entry.target.build(&m)))
    }
}

/// The application's route table.
///
/// `/profile/` must stay declared before `/profile/:user`: the literal
/// default entry wins for the bare profile path only because it comes
/// first.
pub fn route_table() -> &'static RouteTable {
    static TABLE: Lazy<RouteTable> = Lazy::new(|| {
        let mut table = RouteTable {
            entries: Vec::new(),
        };
        table
            .declare("/", PageTarget::Home)
            .expect("Invalid home route template");
        table
            .declare("/profile/", PageTarget::ProfileDefault)
            .expect("Invalid profile route template");
        table
            .declare("/profile/:user", PageTarget::ProfileFromParam)
            .expect("Invalid profile route template");
        table
    });
    &TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_home() {
        assert_eq!(route_table().resolve("/"), Some(Page::Home));
    }

    #[test]
    fn test_bare_profile_resolves_default_user() {
        assert_eq!(
            route_table().resolve("/profile/"),
            Some(Page::Profile {
                user: "me".to_string()
            })
        );
        // Same path without the trailing slash
        assert_eq!(
            route_table().resolve("/profile"),
            Some(Page::Profile {
                user: "me".to_string()
            })
        );
    }

    #[test]
    fn test_profile_param_is_extracted() {
        assert_eq!(
            route_table().resolve("/profile/alice"),
            Some(Page::Profile {
                user: "alice".to_string()
            })
        );
    }

    #[test]
    fn test_undeclared_path_resolves_nothing() {
        assert_eq!(route_table().resolve("/nonexistent"), None);
        assert_eq!(route_table().resolve("/profile/alice/settings"), None);
    }

    #[test]
    fn test_first_declared_match_wins() {
        let mut table = RouteTable {
            entries: Vec::new(),
        };
        table
            .declare("/profile/:user", PageTarget::ProfileFromParam)
            .unwrap();
        table
            .declare("/profile/admin", PageTarget::ProfileDefault)
            .unwrap();

        // The parameterized entry is declared first here, so the literal
        // entry behind it never fires
        assert_eq!(
            table.resolve("/profile/admin"),
            Some(Page::Profile {
                user: "admin".to_string()
            })
        );
    }

    #[test]
    fn test_query_string_does_not_affect_resolution() {
        assert_eq!(
            route_table().resolve("/profile/alice?tab=posts"),
            Some(Page::Profile {
                user: "alice".to_string()
            })
        );
    }
}
