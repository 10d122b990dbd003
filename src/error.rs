//! Error types for the Waypoint application.

use thiserror::Error;

/// Errors that can occur while parsing a route template.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Template does not begin with a `/`
    #[error("route template must begin with '/': {0}")]
    MissingLeadingSlash(String),
    /// A parameter segment has no name (bare `:`)
    #[error("route template has an unnamed parameter segment: {0}")]
    UnnamedParam(String),
    /// More than one named parameter segment
    #[error("route template may name at most one parameter segment: {0}")]
    ExtraParam(String),
}
