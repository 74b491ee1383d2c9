//! Route table construction and resolution.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, RouterError};
use crate::params::PathParams;
use crate::path::{PathPattern, split_path};

/// A single route definition.
#[derive(Debug, Clone)]
pub struct Route<V> {
    /// Optional route name for reverse URL lookup.
    pub name: Option<String>,
    /// Path pattern.
    pub pattern: PathPattern,
    /// View bound to the pattern.
    pub view: V,
}

/// The outcome of a successful lookup.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, V> {
    /// The view bound to the matched route.
    pub view: &'a V,
    /// Parameters captured from the request path.
    pub params: PathParams,
    /// The matched route.
    pub route: &'a Route<V>,
}

/// Collects route definitions and validates them into a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V> {
    routes: Vec<(Option<String>, String, V)>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RouteTableBuilder<V> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Adds a route. Routes are matched in the order they are added.
    #[must_use]
    pub fn route(mut self, pattern: &str, view: V) -> Self {
        self.routes.push((None, pattern.to_string(), view));
        self
    }

    /// Adds a named route.
    #[must_use]
    pub fn named_route(mut self, name: &str, pattern: &str, view: V) -> Self {
        self.routes
            .push((Some(name.to_string()), pattern.to_string(), view));
        self
    }

    /// Validates the collected routes and builds the table.
    ///
    /// # Errors
    ///
    /// - [`RouterError::EmptyTable`] if no route was added.
    /// - [`RouterError::InvalidPattern`] for a malformed pattern.
    /// - [`RouterError::UnreachableRoute`] if an earlier route matches
    ///   every path a later one does.
    /// - [`RouterError::DuplicateName`] if two routes share a name.
    pub fn build(self) -> Result<RouteTable<V>> {
        if self.routes.is_empty() {
            return Err(RouterError::EmptyTable);
        }

        let mut routes: Vec<Route<V>> = Vec::with_capacity(self.routes.len());
        let mut named = HashMap::new();

        for (name, pattern, view) in self.routes {
            let pattern = PathPattern::parse(&pattern)?;

            if let Some(earlier) = routes.iter().find(|r| r.pattern.shadows(&pattern)) {
                return Err(RouterError::UnreachableRoute {
                    pattern: pattern.pattern().to_string(),
                    shadowed_by: earlier.pattern.pattern().to_string(),
                });
            }

            if let Some(name) = &name {
                if named.insert(name.clone(), routes.len()).is_some() {
                    return Err(RouterError::DuplicateName(name.clone()));
                }
            }

            routes.push(Route {
                name,
                pattern,
                view,
            });
        }

        debug!(routes = routes.len(), named = named.len(), "built route table");

        Ok(RouteTable { routes, named })
    }
}

/// An ordered, immutable set of routes.
///
/// Built once through [`RouteTableBuilder`] and then only read, so it can
/// be shared across threads freely.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    named: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Starts a new table.
    #[must_use]
    pub const fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// Finds the first route matching `path`.
    ///
    /// `path` must start with `/` and carry no query string. A single
    /// trailing slash is ignored. Returns `None` when nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use archive_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/", "index")
    ///     .route("/accounts/:fqn", "account")
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.resolve("/accounts/acme.example").unwrap();
    /// assert_eq!(*m.view, "account");
    /// assert_eq!(m.params.get("fqn"), Some("acme.example"));
    /// assert!(table.resolve("/unknown/path").is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let Some(parts) = split_path(path) else {
            trace!(path, "path is not absolute");
            return None;
        };

        let found = self.routes.iter().find_map(|route| {
            route
                .pattern
                .match_segments(&parts)
                .map(|params| RouteMatch {
                    view: &route.view,
                    params,
                    route,
                })
        });

        match &found {
            Some(m) => trace!(path, pattern = m.route.pattern.pattern(), "route matched"),
            None => trace!(path, "no route matched"),
        }

        found
    }

    /// Resolves a location that may carry a query string or fragment.
    #[must_use]
    pub fn resolve_location(&self, location: &str) -> Option<RouteMatch<'_, V>> {
        let end = location.find(['?', '#']).unwrap_or(location.len());
        self.resolve(&location[..end])
    }

    /// Generates a URL for a named route.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::RouteNotFound`] for an unknown name,
    /// [`RouterError::MissingParam`] if `params` lacks a parameter the
    /// route's pattern needs, and [`RouterError::InvalidParam`] if a value
    /// is empty or contains `/`.
    pub fn url_for(&self, name: &str, params: &PathParams) -> Result<String> {
        let route = self
            .named(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))?;

        for param in route.pattern.param_names() {
            match params.get(param) {
                None => {
                    return Err(RouterError::MissingParam {
                        route: name.to_string(),
                        param: param.clone(),
                    });
                }
                // A value must stay one segment for the URL to resolve back.
                Some(value) if value.is_empty() || value.contains('/') => {
                    return Err(RouterError::InvalidParam {
                        route: name.to_string(),
                        param: param.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        route
            .pattern
            .reverse(params)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_string()))
    }

    /// Looks up a route by name.
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Route<V>> {
        self.named.get(name).map(|&i| &self.routes[i])
    }

    /// Returns the routes in match order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Returns an iterator over the routes in match order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Route<V>> {
        self.routes.iter()
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a, V> IntoIterator for &'a RouteTable<V> {
    type Item = &'a Route<V>;
    type IntoIter = std::slice::Iter<'a, Route<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl<V: fmt::Display> fmt::Display for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in &self.routes {
            write!(f, "{:<32} {}", route.pattern, route.view)?;
            if let Some(name) = &route.name {
                write!(f, " ({name})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
