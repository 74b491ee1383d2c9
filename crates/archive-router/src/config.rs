//! Route tables loaded from JSON.
//!
//! ```json
//! {
//!   "routes": [
//!     { "path": "/", "view": "index", "name": "index" },
//!     { "path": "/posts/:id", "view": "post" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::table::{RouteTable, RouteTableBuilder};
use crate::view::View;

/// One configured route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// Path pattern, e.g. `/accounts/:fqn`.
    pub path: String,
    /// View bound to the pattern.
    pub view: View,
    /// Optional name for reverse URL lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A route configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Routes in match order.
    pub routes: Vec<RouteEntry>,
}

impl RouteConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Config`](crate::RouterError::Config) for
    /// malformed JSON or an unknown view.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Io`](crate::RouterError::Io) if the file
    /// cannot be read, or the errors of [`RouteConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading route configuration");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns a builder holding the configured routes.
    #[must_use]
    pub fn builder(&self) -> RouteTableBuilder<View> {
        self.routes
            .iter()
            .fold(RouteTable::builder(), |builder, entry| match &entry.name {
                Some(name) => builder.named_route(name, &entry.path, entry.view),
                None => builder.route(&entry.path, entry.view),
            })
    }

    /// Builds the configured route table.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteTableBuilder::build`] errors.
    pub fn into_table(self) -> Result<RouteTable<View>> {
        self.builder().build()
    }
}

impl From<&RouteTable<View>> for RouteConfig {
    fn from(table: &RouteTable<View>) -> Self {
        Self {
            routes: table
                .iter()
                .map(|route| RouteEntry {
                    path: route.pattern.pattern().to_string(),
                    view: route.view,
                    name: route.name.clone(),
                })
                .collect(),
        }
    }
}
