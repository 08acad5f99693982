//! # API REST
//!
//! REST API implementation for the smart inbox.
//!
//! Handles:
//! - HTTP endpoints with axum (`/health`, `/requests`, `/requests/:id`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Request data comes from `inbox-core`; shared response bodies from `api-shared`.

#![warn(rust_2018_idioms)]

use api_shared::{HealthRes, HealthService, MessageRes};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use inbox_core::constants::REQUEST_NOT_FOUND_MESSAGE;
use inbox_core::{Assignment, InboxRequest, Recommendation, RequestService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the REST API server
///
/// Holds the request store shared by every handler. `RequestService` is a cheap handle over
/// an immutable list, so cloning per request is fine.
#[derive(Clone)]
pub struct AppState {
    request_service: RequestService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_requests, get_request),
    components(schemas(HealthRes, MessageRes, InboxRequest, Assignment, Recommendation))
)]
pub struct ApiDoc;

/// Build the REST router over `request_service`.
///
/// Includes Swagger UI at `/swagger-ui` and the OpenAPI document at `/api-docs/openapi.json`.
pub fn router(request_service: RequestService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/requests", get(list_requests))
        .route("/requests/:id", get(get_request))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { request_service })
}

/// Bind `addr` and serve the REST API until the server stops.
///
/// # Errors
/// Returns an error if:
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(addr: &str, request_service: RequestService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_on(listener, request_service).await
}

/// Serve the REST API on an already bound listener.
pub async fn serve_on(
    listener: tokio::net::TcpListener,
    request_service: RequestService,
) -> anyhow::Result<()> {
    tracing::info!("-- Inbox REST API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(request_service)).await?;
    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/requests",
    responses(
        (status = 200, description = "All inbox requests", body = [InboxRequest])
    )
)]
/// List every inbox request in fixture order.
#[axum::debug_handler]
async fn list_requests(State(state): State<AppState>) -> Json<Vec<InboxRequest>> {
    Json(state.request_service.list_requests())
}

#[utoipa::path(
    get,
    path = "/requests/{id}",
    params(
        ("id" = String, Path, description = "Request identifier")
    ),
    responses(
        (status = 200, description = "The inbox request", body = InboxRequest),
        (status = 404, description = "Request not found", body = MessageRes)
    )
)]
/// Fetch one inbox request by id
///
/// # Errors
/// Returns `404 Not Found` with a `MessageRes` body if no request has this id.
#[axum::debug_handler]
async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InboxRequest>, (StatusCode, Json<MessageRes>)> {
    match state.request_service.get_request(&id) {
        Some(request) => Ok(Json(request)),
        None => {
            tracing::debug!("request {} not found", id);
            Err((
                StatusCode::NOT_FOUND,
                Json(MessageRes::new(REQUEST_NOT_FOUND_MESSAGE)),
            ))
        }
    }
}
