use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::PartId;
use super::repository::{BuildId, BuildRecord, BuildRepository, RepositoryError};
use super::service::{BuildServiceError, BuildSessionService};
use super::store::BuildError;
use super::views::CatalogView;
use super::zone::Zone;

/// Router builder exposing the catalog and build session endpoints.
pub fn build_router<R>(service: Arc<BuildSessionService<R>>) -> Router
where
    R: BuildRepository + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<R>))
        .route("/api/v1/builds", post(create_handler::<R>))
        .route("/api/v1/builds/:build_id", get(status_handler::<R>))
        .route("/api/v1/builds/:build_id/parts", post(place_handler::<R>))
        .route(
            "/api/v1/builds/:build_id/parts/:zone",
            delete(remove_handler::<R>),
        )
        .route("/api/v1/builds/:build_id/reset", post(reset_handler::<R>))
        .route("/api/v1/builds/:build_id/random", post(random_handler::<R>))
        .route(
            "/api/v1/builds/:build_id/selection",
            post(select_handler::<R>).delete(clear_selection_handler::<R>),
        )
        .route(
            "/api/v1/builds/:build_id/selection/place",
            post(place_selected_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlacePartRequest {
    pub part_id: String,
    pub zone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectPartRequest {
    pub part_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneRequest {
    pub zone: String,
}

type ServiceState<R> = State<Arc<BuildSessionService<R>>>;

pub(crate) async fn catalog_handler<R>(State(service): ServiceState<R>) -> Response
where
    R: BuildRepository + 'static,
{
    let view = CatalogView::from(service.catalog());
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn create_handler<R>(State(service): ServiceState<R>) -> Response
where
    R: BuildRepository + 'static,
{
    respond(service.create(), StatusCode::CREATED)
}

pub(crate) async fn status_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
) -> Response
where
    R: BuildRepository + 'static,
{
    respond(service.get(&BuildId(build_id)), StatusCode::OK)
}

pub(crate) async fn place_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
    Json(request): Json<PlacePartRequest>,
) -> Response
where
    R: BuildRepository + 'static,
{
    let zone = match parse_zone(&request.zone) {
        Ok(zone) => zone,
        Err(response) => return response,
    };
    let part_id = PartId::new(request.part_id);
    respond(
        service.place(&BuildId(build_id), &part_id, zone),
        StatusCode::OK,
    )
}

pub(crate) async fn remove_handler<R>(
    State(service): ServiceState<R>,
    Path((build_id, zone)): Path<(String, String)>,
) -> Response
where
    R: BuildRepository + 'static,
{
    let zone = match parse_zone(&zone) {
        Ok(zone) => zone,
        Err(response) => return response,
    };
    respond(service.remove(&BuildId(build_id), zone), StatusCode::OK)
}

pub(crate) async fn reset_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
) -> Response
where
    R: BuildRepository + 'static,
{
    respond(service.reset(&BuildId(build_id)), StatusCode::OK)
}

pub(crate) async fn random_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
) -> Response
where
    R: BuildRepository + 'static,
{
    respond(service.random_build(&BuildId(build_id)), StatusCode::OK)
}

pub(crate) async fn select_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
    Json(request): Json<SelectPartRequest>,
) -> Response
where
    R: BuildRepository + 'static,
{
    let part_id = PartId::new(request.part_id);
    respond(
        service.select_part(&BuildId(build_id), &part_id),
        StatusCode::OK,
    )
}

pub(crate) async fn clear_selection_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
) -> Response
where
    R: BuildRepository + 'static,
{
    respond(service.clear_selection(&BuildId(build_id)), StatusCode::OK)
}

pub(crate) async fn place_selected_handler<R>(
    State(service): ServiceState<R>,
    Path(build_id): Path<String>,
    Json(request): Json<ZoneRequest>,
) -> Response
where
    R: BuildRepository + 'static,
{
    let zone = match parse_zone(&request.zone) {
        Ok(zone) => zone,
        Err(response) => return response,
    };
    respond(
        service.place_selected(&BuildId(build_id), zone),
        StatusCode::OK,
    )
}

fn parse_zone(raw: &str) -> Result<Zone, Response> {
    raw.parse::<Zone>().map_err(|error| {
        let payload = json!({ "error": error.to_string() });
        (StatusCode::BAD_REQUEST, Json(payload)).into_response()
    })
}

fn respond(
    result: Result<BuildRecord, BuildServiceError>,
    success: StatusCode,
) -> Response {
    match result {
        Ok(record) => {
            let view = record.view(Utc::now());
            (success, Json(view)).into_response()
        }
        Err(error) => {
            let status = match &error {
                BuildServiceError::Build(BuildError::Rejected(_)) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                BuildServiceError::Build(BuildError::UnknownPart(_)) => StatusCode::BAD_REQUEST,
                BuildServiceError::Build(BuildError::CoolerAttached) => StatusCode::CONFLICT,
                BuildServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                BuildServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
                BuildServiceError::Repository(RepositoryError::Unavailable(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
            };
            let payload = json!({ "error": error.to_string() });
            (status, Json(payload)).into_response()
        }
    }
}
