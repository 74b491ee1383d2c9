//! Path pattern matching.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, RouterError};
use crate::params::PathParams;

static PARAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid param name regex"));

/// A segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A literal string segment.
    Literal(String),
    /// A parameter segment (e.g., `:id` or `{id}`).
    Param(String),
}

/// Splits a path into its `/`-delimited segments.
///
/// Only `/` itself has no segments. One trailing slash is ignored
/// elsewhere, so `//` is a single empty segment.
/// Returns `None` if the path does not start with `/`.
pub(crate) fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(Vec::new());
    }
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    Some(rest.split('/').collect())
}

/// A compiled path pattern for matching URLs.
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original pattern string.
    pattern: String,
    /// Parsed segments.
    segments: Vec<PathSegment>,
    /// Parameter names in order.
    param_names: Vec<String>,
}

impl PathPattern {
    /// Parses a path pattern string.
    ///
    /// Pattern syntax:
    /// - `/accounts` - Literal path
    /// - `/accounts/:fqn` - Path with parameter
    /// - `/accounts/{fqn}` - Same parameter, brace form
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] if the pattern does not
    /// start with `/`, has an empty segment, or declares an invalid or
    /// repeated parameter name.
    ///
    /// # Example
    ///
    /// ```
    /// use archive_router::PathPattern;
    ///
    /// let pattern = PathPattern::parse("/campaigns/accounts/:fqn").unwrap();
    /// let params = pattern.match_path("/campaigns/accounts/acme.example").unwrap();
    /// assert_eq!(params.get("fqn"), Some("acme.example"));
    /// ```
    pub fn parse(pattern: &str) -> Result<Self> {
        let parts = split_path(pattern)
            .ok_or_else(|| RouterError::invalid_pattern(pattern, "must start with `/`"))?;

        let mut segments = Vec::with_capacity(parts.len());
        let mut param_names: Vec<String> = Vec::new();

        for part in parts {
            if part.is_empty() {
                return Err(RouterError::invalid_pattern(pattern, "empty segment"));
            }

            let name = if let Some(name) = part.strip_prefix(':') {
                Some(name)
            } else if let Some(inner) = part.strip_prefix('{') {
                let name = inner.strip_suffix('}').ok_or_else(|| {
                    RouterError::invalid_pattern(pattern, format!("unterminated `{{` in `{part}`"))
                })?;
                Some(name)
            } else {
                None
            };

            let Some(name) = name else {
                segments.push(PathSegment::Literal(part.to_string()));
                continue;
            };

            if name.starts_with('*') {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    "wildcard segments are not supported",
                ));
            }
            if !PARAM_NAME.is_match(name) {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    format!("invalid parameter name `{name}`"),
                ));
            }
            if param_names.iter().any(|n| n == name) {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    format!("duplicate parameter `{name}`"),
                ));
            }
            param_names.push(name.to_string());
            segments.push(PathSegment::Param(name.to_string()));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            param_names,
        })
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns extracted parameters if the path matches.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let parts = split_path(path)?;
        self.match_segments(&parts)
    }

    pub(crate) fn match_segments(&self, parts: &[&str]) -> Option<PathParams> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();

        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                PathSegment::Literal(s) if s.as_str() == *part => {}
                PathSegment::Param(name) if !part.is_empty() => {
                    params.insert(name.as_str(), *part);
                }
                _ => return None,
            }
        }

        Some(params)
    }

    /// Returns `true` if every path matched by `other` is also matched
    /// by `self`.
    #[must_use]
    pub fn shadows(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(mine, theirs)| match (mine, theirs) {
                    (PathSegment::Param(_), _) => true,
                    (PathSegment::Literal(a), PathSegment::Literal(b)) => a == b,
                    (PathSegment::Literal(_), PathSegment::Param(_)) => false,
                })
    }

    /// Returns the original pattern string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the parameter names.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Generates a path from parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use archive_router::{PathParams, PathPattern};
    ///
    /// let pattern = PathPattern::parse("/posts/:id").unwrap();
    /// let params: PathParams = [("id", "123")].into_iter().collect();
    /// assert_eq!(pattern.reverse(&params).unwrap(), "/posts/123");
    /// ```
    #[must_use]
    pub fn reverse(&self, params: &PathParams) -> Option<String> {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                PathSegment::Literal(s) => path.push_str(s),
                PathSegment::Param(name) => path.push_str(params.get(name)?),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Some(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.pattern)
    }
}
