//! Router inclusion test suite: ordering, prefixing, tag union and the
//! clone semantics of merging a router into an application.

use gantry::web::define::HttpMethod;
use gantry::web::route::{Handler, RouteOptions, Router};
use gantry::Application;
use std::sync::Arc;

struct Handler1;
struct Handler2;

gantry::impl_endpoint!(Handler1);
gantry::impl_endpoint!(Handler2);

fn h1() -> Handler {
    Arc::new(Handler1)
}

fn h2() -> Handler {
    Arc::new(Handler2)
}

fn items_router() -> Router {
    let mut router = Router::named("items");
    router.add_route("/items", h1(), RouteOptions::new().tag("x")).unwrap();
    router
        .add_route("/items/{id}", h2(), RouteOptions::new().methods(&[HttpMethod::GET, HttpMethod::DELETE]))
        .unwrap();
    router
}

#[test]
fn include_appends_all_routes_in_order() {
    let mut app = Application::new();
    assert_eq!(app.route_count(), 0);

    let router = items_router();
    app.include_router(&router, "/api/v1", &["v1"]).unwrap();

    assert_eq!(app.route_count(), 2);

    let routes: Vec<_> = app.table().routes().collect();
    assert_eq!(routes[0].path, "/api/v1/items");
    assert_eq!(routes[1].path, "/api/v1/items/{id}");
}

#[test]
fn worked_example_from_reference() {
    let mut app = Application::new();
    app.include_router(&items_router(), "/api/v1", &["v1"]).unwrap();

    let routes: Vec<_> = app.table().routes().collect();

    assert_eq!(routes[0].path, "/api/v1/items");
    assert_eq!(routes[0].methods.len(), 1);
    assert!(routes[0].methods.contains(&HttpMethod::GET));
    let tags0: Vec<&str> = routes[0].tags.iter().map(|t| t.as_str()).collect();
    assert_eq!(tags0.len(), 2);
    assert!(tags0.contains(&"x"));
    assert!(tags0.contains(&"v1"));

    assert_eq!(routes[1].path, "/api/v1/items/{id}");
    assert_eq!(routes[1].methods.len(), 2);
    assert!(routes[1].methods.contains(&HttpMethod::GET));
    assert!(routes[1].methods.contains(&HttpMethod::DELETE));
    let tags1: Vec<&str> = routes[1].tags.iter().map(|t| t.as_str()).collect();
    assert_eq!(tags1, vec!["v1"]);
}

#[test]
fn prefix_is_literal_concatenation() {
    // no slash normalization between prefix and path
    let mut router = Router::new();
    router.get("/items", h1()).unwrap();

    let mut app = Application::new();
    app.include_router(&router, "/api", &[]).unwrap();
    assert_eq!(app.table().routes().next().unwrap().path, "/api/items");

    // an empty prefix leaves the path untouched
    let mut app = Application::new();
    app.include_router(&router, "", &[]).unwrap();
    assert_eq!(app.table().routes().next().unwrap().path, "/items");
}

#[test]
fn tag_union_collapses_duplicates() {
    let mut router = Router::new();
    router.add_route("/items", h1(), RouteOptions::new().tag("x").tag("v1")).unwrap();

    let mut app = Application::new();
    app.include_router(&router, "", &["v1", "y", "y"]).unwrap();

    let route = app.table().routes().next().unwrap();
    let tags: Vec<&str> = route.tags.iter().map(|t| t.as_str()).collect();
    assert_eq!(tags, vec!["x", "v1", "y"]);
}

#[test]
fn empty_router_is_noop() {
    let mut app = Application::new();
    app.include_router(&items_router(), "", &[]).unwrap();
    assert_eq!(app.route_count(), 2);

    app.include_router(&Router::new(), "/api", &["v1"]).unwrap();
    assert_eq!(app.route_count(), 2);
}

#[test]
fn source_router_is_never_mutated() {
    let router = items_router();

    let mut first = Application::new();
    first.include_router(&router, "/api/v1", &["v1"]).unwrap();

    // second inclusion under a different prefix must observe the original
    // paths, not the already-prefixed ones
    let mut second = Application::new();
    second.include_router(&router, "/api/v2", &["v2"]).unwrap();

    let paths: Vec<_> = second.table().routes().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec!["/api/v2/items", "/api/v2/items/{id}"]);

    let source_paths: Vec<_> = router.table().routes().map(|r| r.path.clone()).collect();
    assert_eq!(source_paths, vec!["/items", "/items/{id}"]);
    assert!(router.table().routes().all(|r| !r.tags.contains("v1") && !r.tags.contains("v2")));
}

#[test]
fn imported_route_metadata_survives() {
    let mut router = Router::new();
    router
        .add_route("/internal", h1(), RouteOptions::new().name("internal_probe").hidden())
        .unwrap();

    let mut app = Application::new();
    app.include_router(&router, "/ops", &[]).unwrap();

    let route = app.table().routes().next().unwrap();
    assert_eq!(route.name.as_deref(), Some("internal_probe"));
    assert!(!route.visible_in_schema);
}

#[test]
fn malformed_prefix_is_rejected() {
    let mut app = Application::new();
    let router = items_router();

    assert!(app.include_router(&router, "api", &[]).is_err());
    assert!(app.include_router(&router, "/api/", &[]).is_err());
    assert_eq!(app.route_count(), 0);
}

#[test]
fn router_into_router_composition() {
    let mut inner = Router::named("inner");
    inner.get("/leaf", h1()).unwrap();

    let mut outer = Router::named("outer");
    outer.get("/top", h2()).unwrap();
    outer.include_router(&inner, "/nested", &["deep"]).unwrap();

    let mut app = Application::new();
    app.include_router(&outer, "/api", &[]).unwrap();

    let paths: Vec<_> = app.table().routes().map(|r| r.path.clone()).collect();
    assert_eq!(paths, vec!["/api/top", "/api/nested/leaf"]);
}

#[test]
fn duplicate_paths_are_allowed() {
    let mut a = Router::new();
    a.get("/same", h1()).unwrap();
    let mut b = Router::new();
    b.get("/same", h2()).unwrap();

    let mut app = Application::new();
    app.include_router(&a, "", &[]).unwrap();
    app.include_router(&b, "", &[]).unwrap();

    // both survive, precedence is table order
    assert_eq!(app.route_count(), 2);
}
