//! Tests for path resolution against a route table.

mod common;
use common::*;

#[test]
fn resolve_root() {
    let table = reference_table();
    assert_eq!(resolve_ok(&table, "/"), (Screen::Index, params(&[])));
}

#[test]
fn resolve_literal() {
    let table = reference_table();
    assert_eq!(
        resolve_ok(&table, "/accounts"),
        (Screen::AccountsList, params(&[]))
    );
}

#[test]
fn resolve_account_fqn() {
    let table = reference_table();
    assert_eq!(
        resolve_ok(&table, "/accounts/acme.example"),
        (Screen::AccountDetail, params(&[("fqn", "acme.example")]))
    );
}

#[test]
fn resolve_post_id() {
    let table = reference_table();
    assert_eq!(
        resolve_ok(&table, "/posts/42"),
        (Screen::PostDetail, params(&[("id", "42")]))
    );
}

#[test]
fn unknown_path_is_not_found() {
    let table = reference_table();
    assert!(table.resolve("/unknown/path").is_none());
}

#[test]
fn extra_segment_is_not_found() {
    let table = reference_table();
    assert!(table.resolve("/accounts/acme.example/extra").is_none());
}

#[test]
fn segment_count_mismatch_is_not_found() {
    let table = reference_table();
    for path in ["/posts", "/posts/1/2", "/a/b/c/d", "/accounts/x/y/z"] {
        assert!(table.resolve(path).is_none(), "expected no match for {path}");
    }
}

#[test]
fn trailing_slash_is_normalized() {
    let table = reference_table();
    assert_eq!(
        resolve_ok(&table, "/accounts/"),
        (Screen::AccountsList, params(&[]))
    );
    assert_eq!(
        resolve_ok(&table, "/posts/42/"),
        (Screen::PostDetail, params(&[("id", "42")]))
    );
}

#[test]
fn captured_values_are_literal() {
    let table = reference_table();
    for fqn in ["user@mastodon.social", "a%20b", "x.y.z", "ünïcode"] {
        let path = format!("/accounts/{fqn}");
        assert_eq!(
            resolve_ok(&table, &path),
            (Screen::AccountDetail, params(&[("fqn", fqn)]))
        );
    }
}

#[test]
fn empty_segment_does_not_capture() {
    let table = reference_table();
    assert!(table.resolve("/accounts//").is_none());
    assert!(table.resolve("//accounts").is_none());
    assert!(table.resolve("//").is_none());
}

#[test]
fn resolve_is_idempotent() {
    let table = reference_table();
    for path in ["/", "/accounts/acme.example", "/posts/42", "/nope"] {
        let first = table.resolve(path).map(|m| (*m.view, m.params));
        for _ in 0..3 {
            let again = table.resolve(path).map(|m| (*m.view, m.params));
            assert_eq!(first, again);
        }
    }
}

#[test]
fn earlier_route_wins_on_overlap() {
    let table = archive_router::RouteTable::builder()
        .route("/accounts/featured", Screen::AccountsList)
        .route("/accounts/:fqn", Screen::AccountDetail)
        .build()
        .unwrap();

    assert_eq!(
        resolve_ok(&table, "/accounts/featured"),
        (Screen::AccountsList, params(&[]))
    );
    assert_eq!(
        resolve_ok(&table, "/accounts/other"),
        (Screen::AccountDetail, params(&[("fqn", "other")]))
    );
}
