//! End-to-end tests of the HTTP surface against fixture assets.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use vizdeck_config::Config;
use vizdeck_slides::{Assets, Deck};
use vizdeck_test_utils::write_assets;
use vizdeck_web::{build_router, AppState, DeckEvent};

struct TestApp {
    app: Router,
    _dir: TempDir,
}

fn test_app() -> TestApp {
    let (app, _, dir) = test_app_with_state();
    TestApp { app, _dir: dir }
}

fn test_app_with_state() -> (Router, tokio::sync::broadcast::Receiver<DeckEvent>, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.assets = write_assets(dir.path());

    let assets = Assets::load(&config.assets).unwrap();
    let state = AppState::new(Deck::build(&assets).unwrap()).unwrap();
    let events = state.subscribe();
    (build_router(state, &config), events, dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

#[tokio::test]
async fn test_page_shell_is_served_for_client_paths() {
    let t = test_app();
    for path in ["/", "/merit", "/not-a-slide"] {
        let (status, body) = send(&t.app, Method::GET, path, None).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("deck-layout"));
        assert!(html.contains(r#""id":"contents""#));
    }
}

#[tokio::test]
async fn test_unmatched_post_is_not_found() {
    let t = test_app();
    let (status, _) = send(&t.app, Method::POST, "/nowhere", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_routes_in_navigation_order() {
    let t = test_app();
    let (status, routes) = send_json(&t.app, Method::GET, "/_deck/routes", None).await;
    assert_eq!(status, StatusCode::OK);
    let routes = routes.as_array().unwrap();
    assert_eq!(routes.len(), 15);
    assert_eq!(routes[0], json!("/web-app"));
    assert_eq!(routes[14], json!("/matome"));
}

#[tokio::test]
async fn test_dependencies_start_with_router() {
    let t = test_app();
    let (status, deps) = send_json(&t.app, Method::GET, "/_deck/dependencies", None).await;
    assert_eq!(status, StatusCode::OK);
    let router = deps
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == json!("router"))
        .unwrap();
    assert_eq!(router["inputs"], json!(["url.pathname"]));
    assert_eq!(router["outputs"], json!(["contents.children"]));
}

#[tokio::test]
async fn test_mounting_a_route_returns_slide_and_cell_outputs() {
    let (app, mut events, _dir) = test_app_with_state();
    let (status, body) =
        send_json(&app, Method::POST, "/_deck/route", Some(json!({"pathname": "/merit"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], json!("/merit"));
    let outputs = body["outputs"].as_object().unwrap();
    assert!(outputs.contains_key("contents.children"));
    assert!(outputs.contains_key("year_tourist_rank.children"));
    assert_eq!(
        outputs["year-number.children"],
        json!("Number of Kyoto hotels (2018/12)： 4")
    );

    assert_eq!(
        events.recv().await.unwrap(),
        DeckEvent::RouteChanged { pathname: "/merit".into(), route: Some("/merit".into()) }
    );
    assert!(matches!(events.recv().await.unwrap(), DeckEvent::PortsUpdated { .. }));
}

#[tokio::test]
async fn test_unknown_route_mounts_the_title() {
    let t = test_app();
    let (_, title) =
        send_json(&t.app, Method::POST, "/_deck/route", Some(json!({"pathname": "/"}))).await;
    let (status, unknown) =
        send_json(&t.app, Method::POST, "/_deck/route", Some(json!({"pathname": "/nope"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown["route"], Value::Null);
    assert_eq!(unknown["outputs"]["contents.children"], title["outputs"]["contents.children"]);
}

#[tokio::test]
async fn test_update_returns_outputs() {
    let t = test_app();
    let (status, body) = send_json(
        &t.app,
        Method::POST,
        "/_deck/update",
        Some(json!({"changed": [{"port": "daq-powerbutton.on", "value": true}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outputs"]["daq-interval.disabled"], json!(false));
}

#[tokio::test]
async fn test_update_without_changes_is_no_content() {
    let t = test_app();
    let (status, body) = send(
        &t.app,
        Method::POST,
        "/_deck/update",
        Some(json!({"changed": [{"port": "daq-interval.n_intervals", "value": 0}]})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_malformed_port_is_bad_request() {
    let t = test_app();
    let (status, body) = send_json(
        &t.app,
        Method::POST,
        "/_deck/update",
        Some(json!({"changed": [{"port": "no-property", "value": 1}]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) =
        send_json(&t.app, Method::POST, "/_deck/update", Some(json!({"changed": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assets_are_served() {
    let t = test_app();
    let (status, body) = send(&t.app, Method::GET, "/assets/mol2d.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vizdeck_test_utils::MOLECULE_JSON.as_bytes());
}

#[tokio::test]
async fn test_events_endpoint_streams() {
    let t = test_app();
    let req = Request::builder().uri("/_deck/events").body(Body::empty()).unwrap();
    let res = t.app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "text/event-stream");
}
