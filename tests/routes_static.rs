use prefix_router_rs::path::PathError;
use prefix_router_rs::radix::RadixError;
use prefix_router_rs::{HttpMethod, Router, RouterError};

#[test]
fn router_when_static_route_registered_then_returns_match() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/hello", "hello")
        .expect("static route should register");
    router.seal();

    let (handler, params) = router
        .find(HttpMethod::Get, "/hello")
        .expect("static route should match");

    assert_eq!(*handler, "hello");
    assert!(params.is_empty());
}

#[test]
fn router_when_root_registered_then_root_matches() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/", "root")
        .expect("root should register");
    router.seal();

    let (handler, _) = router
        .find(HttpMethod::Get, "/")
        .expect("root should match");
    assert_eq!(*handler, "root");
}

#[test]
fn router_when_same_path_registered_for_two_methods_then_each_resolves() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/items", "list")
        .expect("get should register");
    router
        .add(HttpMethod::Post, "/items", "create")
        .expect("post should register");
    router.seal();

    let (get, _) = router.find(HttpMethod::Get, "/items").expect("get");
    let (post, _) = router.find(HttpMethod::Post, "/items").expect("post");
    assert_eq!(*get, "list");
    assert_eq!(*post, "create");

    let err = router.find(HttpMethod::Delete, "/items");
    match err.expect_err("unregistered method should miss") {
        RouterError::RouteNotFound { method, path } => {
            assert_eq!(method, HttpMethod::Delete);
            assert_eq!(path, "/items");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_trailing_and_duplicate_slashes_then_normalized() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/docs/guide", "guide")
        .expect("route should register");
    router.seal();

    for path in ["/docs/guide/", "//docs//guide", "/docs/guide//"] {
        let (handler, _) = router
            .find(HttpMethod::Get, path)
            .unwrap_or_else(|err| panic!("{path} should match: {err:?}"));
        assert_eq!(*handler, "guide");
    }
}

#[test]
fn router_when_static_route_duplicated_then_returns_error() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/dup", 1)
        .expect("first add should succeed");

    let err = router.add(HttpMethod::Get, "/dup/", 2);
    match err.expect_err("normalized duplicate should be rejected") {
        RouterError::Radix(RadixError::DuplicateRoute { shape }) => {
            assert_eq!(shape, "/dup");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_pattern_contains_whitespace_then_returns_path_error() {
    let router = Router::<u8>::new(None);
    let err = router.add(HttpMethod::Get, "/bad path", 0);

    match err.expect_err("whitespace should be rejected") {
        RouterError::Radix(RadixError::Path(PathError::ControlOrWhitespace { byte, .. })) => {
            assert_eq!(byte, b' ');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_lookup_path_traverses_parent_then_returns_path_error() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/public/file", ())
        .expect("route should register");
    router.seal();

    let err = router.find(HttpMethod::Get, "/public/../secret");
    match err.expect_err("parent traversal should be rejected") {
        RouterError::Path(PathError::InvalidParentTraversal { input }) => {
            assert_eq!(input, "/public/../secret");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_matches_called_then_reports_without_building_params() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Head, "/health", ())
        .expect("route should register");
    router.seal();

    assert_eq!(router.matches(HttpMethod::Head, "/health"), Ok(true));
    assert_eq!(router.matches(HttpMethod::Head, "/healthz"), Ok(false));
    assert_eq!(router.matches(HttpMethod::Get, "/health"), Ok(false));
}
