#![allow(dead_code)]

use archive_router::{PathParams, RouteTable};

/// Views of the reference table used across the integration tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Index,
    AccountsList,
    AccountDetail,
    PostDetail,
}

pub fn reference_table() -> RouteTable<Screen> {
    RouteTable::builder()
        .route("/", Screen::Index)
        .route("/accounts", Screen::AccountsList)
        .route("/accounts/:fqn", Screen::AccountDetail)
        .route("/posts/:id", Screen::PostDetail)
        .build()
        .unwrap_or_else(|e| panic!("Failed to build reference table: {e}"))
}

pub fn params(pairs: &[(&str, &str)]) -> PathParams {
    pairs.iter().copied().collect()
}

pub fn resolve_ok<V: Copy>(table: &RouteTable<V>, path: &str) -> (V, PathParams) {
    let m = table
        .resolve(path)
        .unwrap_or_else(|| panic!("Expected a match for: {path}"));
    (*m.view, m.params)
}
