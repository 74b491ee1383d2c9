//! # archive-router
//!
//! Route table resolution for the archive front end.
//!
//! This crate provides:
//! - Path pattern matching with parameters
//! - Ordered, immutable route tables with first-match-wins lookup
//! - Fail-fast validation of tables when they are built
//! - Named routes for reverse URL lookup
//! - The archive's views and its named route configurations
//!
//! ## Quick Start
//!
//! ```
//! use archive_router::{Variant, View};
//!
//! let table = Variant::Full.table().unwrap();
//!
//! let m = table.resolve("/accounts/acme.example").unwrap();
//! assert_eq!(*m.view, View::Account);
//! assert_eq!(m.params.get("fqn"), Some("acme.example"));
//!
//! // An unmatched path is a normal outcome, not an error.
//! assert!(table.resolve("/unknown/path").is_none());
//! ```
//!
//! ## Custom Tables
//!
//! The table is generic over the view type:
//!
//! ```
//! use archive_router::RouteTable;
//!
//! let table = RouteTable::builder()
//!     .route("/", "home")
//!     .named_route("post", "/posts/:id", "post")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(*table.resolve("/posts/42").unwrap().view, "post");
//! ```
//!
//! ## Named Routes
//!
//! ```
//! use archive_router::{PathParams, Variant};
//!
//! let table = Variant::Full.table().unwrap();
//! let params: PathParams = [("id", "42")].into_iter().collect();
//! assert_eq!(table.url_for("post", &params).unwrap(), "/posts/42");
//! ```

mod config;
mod error;
mod params;
mod path;
mod table;
mod variants;
mod view;

pub use config::{RouteConfig, RouteEntry};
pub use error::{Result, RouterError};
pub use params::PathParams;
pub use path::{PathPattern, PathSegment};
pub use table::{Route, RouteMatch, RouteTable, RouteTableBuilder};
pub use variants::Variant;
pub use view::View;
