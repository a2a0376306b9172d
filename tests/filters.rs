use prefix_router_rs::path::PathError;
use prefix_router_rs::{FilterSet, RouterError};

#[test]
fn filters_when_patterns_overlap_then_all_matching_filters_apply() {
    let mut filters = FilterSet::default();
    filters.add("/*", "trace").expect("filter should register");
    filters.add("/api/*rest", "auth").expect("filter should register");
    filters.add("/api/:version/users", "users").expect("filter should register");
    filters.add("/api/*rest", "rate_limit").expect("same pattern may repeat");

    let hits = filters.matching("/api/v1/users").expect("path should be valid");
    assert_eq!(hits.as_slice(), &[&"trace", &"auth", &"users", &"rate_limit"]);

    let hits = filters.matching("/static/app.js").expect("path should be valid");
    assert_eq!(hits.as_slice(), &[&"trace"]);
    assert_eq!(filters.len(), 4);
}

#[test]
fn filters_when_path_is_not_normalized_then_normalized_before_matching() {
    let mut filters = FilterSet::default();
    filters.add("/admin/:page", 1u8).expect("filter should register");

    let hits = filters.matching("//admin//settings/").expect("path should be valid");
    assert_eq!(hits.as_slice(), &[&1u8]);
}

#[test]
fn filters_when_path_invalid_then_returns_error() {
    let mut filters = FilterSet::default();
    filters.add("/*", ()).expect("filter should register");

    assert!(matches!(
        filters.matching("/a/../b"),
        Err(RouterError::Path(PathError::InvalidParentTraversal { .. }))
    ));
}

#[test]
fn filters_when_registered_then_sources_listed_in_order() {
    let mut filters = FilterSet::default();
    assert!(filters.is_empty());
    filters.add("/b", ()).expect("filter should register");
    filters.add("/a/", ()).expect("filter should register");

    let sources: Vec<_> = filters.pattern_sources().collect();
    assert_eq!(sources, vec!["/b", "/a"]);
}
