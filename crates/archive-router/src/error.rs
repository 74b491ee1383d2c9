//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
///
/// An unmatched path is not an error: [`RouteTable::resolve`] returns
/// `None` for it. These variants cover configuration mistakes, which are
/// detected when a table is built or loaded.
///
/// [`RouteTable::resolve`]: crate::RouteTable::resolve
#[derive(Debug, Error)]
pub enum RouterError {
    /// The table has no routes.
    #[error("route table is empty")]
    EmptyTable,

    /// Invalid path pattern.
    #[error("invalid path pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A route can never match because an earlier one already matches
    /// every path it would.
    #[error("route `{pattern}` is unreachable: shadowed by `{shadowed_by}`")]
    UnreachableRoute {
        pattern: String,
        shadowed_by: String,
    },

    /// Two routes share a name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// Route name not found.
    #[error("route not found: {0}")]
    RouteNotFound(String),

    /// A parameter needed to build a URL was not supplied.
    #[error("missing parameter `{param}` for route `{route}`")]
    MissingParam { route: String, param: String },

    /// A parameter value cannot be placed in a single path segment.
    #[error("invalid value for parameter `{param}` of route `{route}`: must be non-empty and contain no `/`")]
    InvalidParam { route: String, param: String },

    /// A route configuration document could not be parsed.
    #[error("invalid route configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A route configuration file could not be read.
    #[error("failed to read route configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
