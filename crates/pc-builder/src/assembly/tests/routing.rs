use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

use crate::assembly::router;
use crate::assembly::service::BuildSessionService;
use crate::assembly::store::BuildSettings;

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn create_build(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(empty_request("POST", "/api/v1/builds"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    payload
        .get("build_id")
        .and_then(Value::as_str)
        .expect("build id returned")
        .to_string()
}

#[tokio::test]
async fn catalog_route_groups_parts_by_kind() {
    let (service, _) = build_service();
    let app = router_with_service(service);

    let response = app
        .oneshot(empty_request("GET", "/api/v1/catalog"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload["motherboard"]["socket"], json!("AM4"));
    let sections = payload["sections"].as_array().expect("sections array");
    assert_eq!(sections[0]["label"], json!("CPU"));
    assert!(sections
        .iter()
        .all(|section| section["kind"] != json!("motherboard")));
}

#[tokio::test]
async fn place_route_accepts_valid_parts() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/builds/{build_id}/parts"),
            json!({ "part_id": "cpu-1", "zone": "cpu" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["placed"][0]["zone"], json!("cpu"));
    assert_eq!(payload["placed"][0]["zone_label"], json!("CPU Socket"));
    assert_eq!(payload["specs"]["cpu"], json!("AMD Ryzen 5 5600X"));
    assert_eq!(payload["status"], json!("missing_power_supply"));
}

#[tokio::test]
async fn place_route_reports_rejections() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/builds/{build_id}/parts"),
            json!({ "part_id": "gpu-1", "zone": "ram-2" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("GPU must go in the PCIe x16 slot"));

    let response = app
        .oneshot(empty_request("GET", &format!("/api/v1/builds/{build_id}")))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["validation_error"],
        json!("GPU must go in the PCIe x16 slot")
    );
}

#[tokio::test]
async fn bad_part_or_zone_is_a_bad_request() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;
    let uri = format!("/api/v1/builds/{build_id}/parts");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &uri,
            json!({ "part_id": "cpu-1", "zone": "ram-9" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "POST",
            &uri,
            json!({ "part_id": "nope", "zone": "cpu" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn removing_cpu_under_cooler_conflicts() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;
    let parts_uri = format!("/api/v1/builds/{build_id}/parts");

    for (part_id, zone) in [("cpu-1", "cpu"), ("cooler-1", "cooler")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &parts_uri,
                json!({ "part_id": part_id, "zone": zone }),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("{parts_uri}/cpu")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(empty_request("DELETE", &format!("{parts_uri}/cooler")))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn random_route_produces_a_bootable_build() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;

    let response = app
        .oneshot(empty_request(
            "POST",
            &format!("/api/v1/builds/{build_id}/random"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["ready"], json!(true));
    assert_eq!(payload["status_label"], json!("Ready to Boot"));
    assert_eq!(payload["specs"]["system_type_label"], json!("Gaming Rig"));
}

#[tokio::test]
async fn selection_routes_place_the_selected_part() {
    let (service, _) = build_service();
    let app = router_with_service(service);
    let build_id = create_build(&app).await;
    let selection_uri = format!("/api/v1/builds/{build_id}/selection");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &selection_uri,
            json!({ "part_id": "psu-2" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["selected_part"], json!("psu-2"));

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("{selection_uri}/place"),
            json!({ "zone": "psu" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("selected_part").is_none());
    assert_eq!(payload["specs"]["supplied_power_watts"], json!(750));
}

#[tokio::test]
async fn status_handler_returns_not_found_for_unknown_builds() {
    let (service, _) = build_service();
    let response = router::status_handler::<MemoryRepository>(
        State(Arc::new(service)),
        Path("build-unknown".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_handler_reports_unavailable_storage() {
    let service = Arc::new(BuildSessionService::new(
        Arc::new(UnavailableRepository),
        catalog(),
        BuildSettings::default(),
    ));
    let response = router::create_handler::<UnavailableRepository>(State(service)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
