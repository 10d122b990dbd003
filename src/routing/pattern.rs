//! URL path templates and segment-wise matching.

use crate::error::RouteError;

/// One segment of a parsed template.
#[derive(Clone, Debug, PartialEq)]
enum Segment {
    /// Must equal the path segment exactly
    Literal(String),
    /// Matches any single non-empty path segment, capturing it under the name
    Param(String),
}

/// A parsed URL path template, e.g. `/profile/:user`.
///
/// A template contains zero or one named parameter segment. Matching is
/// segment-wise: empty segments are ignored on both sides, so `/profile`
/// and `/profile/` are the same path.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

/// Captured parameter of a successful match.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMatch {
    param: Option<(String, String)>,
}

impl RouteMatch {
    /// Value captured for the parameter `name`, if the pattern has one.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.param
            .as_ref()
            .and_then(|(param_name, value)| (param_name == name).then_some(value.as_str()))
    }
}

impl RoutePattern {
    /// Parse a path template.
    ///
    /// Fails if the template does not begin with `/`, contains a bare `:`
    /// segment, or names more than one parameter.
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        if !template.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(template.to_string()));
        }

        let mut segments = Vec::new();
        let mut saw_param = false;
        for part in template.split('/').filter(|part| !part.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::UnnamedParam(template.to_string()));
                }
                if saw_param {
                    return Err(RouteError::ExtraParam(template.to_string()));
                }
                saw_param = true;
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self { segments })
    }

    /// Match a concrete path against this pattern.
    ///
    /// Any query string or fragment on the path is ignored. The captured
    /// parameter value is passed through opaquely (no decoding).
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let end = path.find(['?', '#']).unwrap_or(path.len());
        let parts: Vec<&str> = path[..end]
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut matched = RouteMatch::default();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal.as_str() != *part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    matched.param = Some((name.clone(), (*part).to_string()));
                }
            }
        }

        Some(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pattern_matches_root_only() {
        let pattern = RoutePattern::parse("/").unwrap();

        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/profile").is_none());
    }

    #[test]
    fn test_literal_segments_match_exactly() {
        let pattern = RoutePattern::parse("/profile/").unwrap();

        assert!(pattern.matches("/profile").is_some());
        assert!(pattern.matches("/settings").is_none());
    }

    #[test]
    fn test_param_segment_captures_value() {
        let pattern = RoutePattern::parse("/profile/:user").unwrap();

        let matched = pattern.matches("/profile/alice").unwrap();
        assert_eq!(matched.param("user"), Some("alice"));
        // Only the declared name resolves
        assert_eq!(matched.param("id"), None);
    }

    #[test]
    fn test_param_requires_nonempty_segment() {
        let pattern = RoutePattern::parse("/profile/:user").unwrap();

        // "/profile/" has a single segment once empties are dropped,
        // so the two-segment pattern cannot match it
        assert!(pattern.matches("/profile/").is_none());
        assert!(pattern.matches("/profile").is_none());
    }

    #[test]
    fn test_trailing_slash_equivalence() {
        let pattern = RoutePattern::parse("/profile/").unwrap();

        assert!(pattern.matches("/profile").is_some());
        assert!(pattern.matches("/profile/").is_some());
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let pattern = RoutePattern::parse("/profile/:user").unwrap();

        let matched = pattern.matches("/profile/alice?tab=posts#top").unwrap();
        assert_eq!(matched.param("user"), Some("alice"));
    }

    #[test]
    fn test_segment_count_must_agree() {
        let pattern = RoutePattern::parse("/profile/:user").unwrap();

        assert!(pattern.matches("/profile/alice/settings").is_none());
        assert!(pattern.matches("/").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_leading_slash() {
        assert!(matches!(
            RoutePattern::parse("profile/:user"),
            Err(RouteError::MissingLeadingSlash(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unnamed_param() {
        assert!(matches!(
            RoutePattern::parse("/profile/:"),
            Err(RouteError::UnnamedParam(_))
        ));
    }

    #[test]
    fn test_parse_rejects_second_param() {
        assert!(matches!(
            RoutePattern::parse("/:section/:user"),
            Err(RouteError::ExtraParam(_))
        ));
    }
}
