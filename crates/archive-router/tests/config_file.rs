//! Tests for loading route tables from configuration files.

mod common;
use common::*;

use std::io::Write;

use archive_router::{RouteConfig, RouterError, Variant, View};

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "routes": [
                {{ "path": "/", "view": "index", "name": "index" }},
                {{ "path": "/accounts/:fqn", "view": "account", "name": "account" }}
            ]
        }}"#
    )
    .unwrap();

    let table = RouteConfig::load(file.path())
        .unwrap()
        .into_table()
        .unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        resolve_ok(&table, "/accounts/acme.example"),
        (View::Account, params(&[("fqn", "acme.example")]))
    );
    assert!(table.resolve("/posts/1").is_none());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteConfig::load(dir.path().join("routes.json")).unwrap_err();
    assert!(matches!(err, RouterError::Io(_)));
}

#[test]
fn malformed_json_is_config_error() {
    let err = RouteConfig::from_json("{\"routes\": [").unwrap_err();
    assert!(matches!(err, RouterError::Config(_)));
}

#[test]
fn unknown_field_is_config_error() {
    let err = RouteConfig::from_json(r#"{"routes": [{"path": "/", "view": "index", "component": "x"}]}"#)
        .unwrap_err();
    assert!(matches!(err, RouterError::Config(_)));
}

#[test]
fn ambiguous_config_fails_fast() {
    let config = RouteConfig::from_json(
        r#"{"routes": [
            {"path": "/posts/:id", "view": "post"},
            {"path": "/posts/:slug", "view": "posts"}
        ]}"#,
    )
    .unwrap();
    let err = config.into_table().unwrap_err();
    assert!(matches!(err, RouterError::UnreachableRoute { .. }));
}

#[test]
fn variant_exports_as_equivalent_config() {
    let table = Variant::Full.table().unwrap();
    let json = serde_json::to_string(&RouteConfig::from(&table)).unwrap();
    let reloaded = RouteConfig::from_json(&json).unwrap().into_table().unwrap();

    assert_eq!(reloaded.len(), table.len());
    for (a, b) in table.iter().zip(&reloaded) {
        assert_eq!(a.pattern.pattern(), b.pattern.pattern());
        assert_eq!(a.view, b.view);
        assert_eq!(a.name, b.name);
    }
}
