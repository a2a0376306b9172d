use prefix_router_rs::path::PathError;
use prefix_router_rs::router::{DEFAULT_MAX_PATH_LENGTH, RouterOptionsError};
use prefix_router_rs::{HttpMethod, Router, RouterError, RouterOptions};

#[test]
fn router_when_default_options_then_values_match_defaults() {
    let router = Router::<()>::new(None);
    let options = router.options();

    assert!(options.normalize_path);
    assert!(!options.strict_trailing_slash);
    assert!(!options.allow_duplicate_slash);
    assert_eq!(options.max_path_length, DEFAULT_MAX_PATH_LENGTH);
}

#[test]
fn router_when_normalization_disabled_then_trailing_slash_misses() {
    let options = RouterOptions::builder()
        .normalize_path(false)
        .build()
        .expect("options should build");
    let router = Router::new(Some(options));
    router
        .add(HttpMethod::Get, "/exact", ())
        .expect("route should register");
    router.seal();

    assert_eq!(router.matches(HttpMethod::Get, "/exact"), Ok(true));
    assert_eq!(router.matches(HttpMethod::Get, "/exact/"), Ok(false));
    assert_eq!(router.matches(HttpMethod::Get, "//exact"), Ok(false));
}

#[test]
fn router_when_strict_trailing_slash_then_slash_is_significant() {
    let options = RouterOptions::builder()
        .strict_trailing_slash(true)
        .build()
        .expect("options should build");
    let router = Router::new(Some(options));
    router
        .add(HttpMethod::Get, "/dir/", "dir")
        .expect("slash route should register");
    router
        .add(HttpMethod::Get, "/dir", "file")
        .expect("bare route should register");
    router.seal();

    let (dir, _) = router.find(HttpMethod::Get, "/dir/").expect("dir");
    let (file, _) = router.find(HttpMethod::Get, "/dir").expect("file");
    assert_eq!((*dir, *file), ("dir", "file"));
}

#[test]
fn router_when_duplicate_slash_allowed_then_slashes_are_kept() {
    let options = RouterOptions::builder()
        .allow_duplicate_slash(true)
        .build()
        .expect("options should build");
    let router = Router::new(Some(options));
    router
        .add(HttpMethod::Get, "/a//b", ())
        .expect("route should register");
    router.seal();

    assert_eq!(router.matches(HttpMethod::Get, "/a//b"), Ok(true));
    assert_eq!(router.matches(HttpMethod::Get, "/a/b"), Ok(false));
}

#[test]
fn router_when_path_exceeds_limit_then_returns_too_long() {
    let options = RouterOptions::builder()
        .max_path_length(16)
        .build()
        .expect("options should build");
    let router = Router::new(Some(options));
    router
        .add(HttpMethod::Get, "/short", ())
        .expect("route should register");
    router.seal();

    let long = format!("/{}", "x".repeat(20));
    match router.find(HttpMethod::Get, &long).expect_err("too long") {
        RouterError::Path(PathError::TooLong { length, limit }) => {
            assert_eq!(length, 21);
            assert_eq!(limit, 16);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_default_options_then_patterns_are_normalized_too() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/a//b/", "ab")
        .expect("route should register");
    router
        .add(HttpMethod::Get, "/assets/*file", "assets")
        .expect("catch-all should register");
    router.seal();

    let snapshot = router.get_readonly().expect("snapshot");
    assert_eq!(snapshot.tree(HttpMethod::Get).shapes(), vec!["/a/b", "/assets/*"]);

    let (handler, _) = router.find(HttpMethod::Get, "/a/b").expect("normalized route");
    assert_eq!(*handler, "ab");

    // "/assets/" is trimmed to "/assets" before matching
    assert!(matches!(
        router.find(HttpMethod::Get, "/assets/"),
        Err(RouterError::RouteNotFound { .. })
    ));
}

#[test]
fn router_when_empty_path_looked_up_then_returns_error() {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, "/", ())
        .expect("route should register");
    router.seal();

    assert_eq!(
        router.find(HttpMethod::Get, ""),
        Err(RouterError::Path(PathError::Empty))
    );
}

#[test]
fn router_options_when_zero_length_limit_then_build_fails() {
    let err = RouterOptions::builder()
        .max_path_length(0)
        .build()
        .expect_err("zero limit should be rejected");
    assert_eq!(err, RouterOptionsError::MaxPathLengthInvalid { provided: 0 });
}

#[test]
fn router_when_pattern_reused_across_methods_then_compiled_once() {
    let router = Router::new(None);
    for method in [HttpMethod::Get, HttpMethod::Put, HttpMethod::Delete] {
        router
            .add(method, "/things/:id", method.as_str())
            .expect("route should register");
    }

    let metrics = router.metrics().expect("metrics while building");
    assert_eq!(metrics.total_routes_registered, 3);
    assert_eq!(metrics.patterns_compiled, 1);
    assert_eq!(metrics.pattern_cache_hits, 2);

    router.seal();
    assert!(router.metrics().is_none());
    let (handler, _) = router
        .find(HttpMethod::Put, "/things/5")
        .expect("put should match");
    assert_eq!(*handler, "PUT");
}
