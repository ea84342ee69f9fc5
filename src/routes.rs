//! Router assembly: example resource routes plus health, readiness, version.

use crate::error::AppError;
use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

const BODY_LIMIT: usize = 64 * 1024;

pub fn example_routes(state: AppState) -> Router {
    Router::new()
        .route("/example", get(list).post(create))
        .route(
            "/example/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    if sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_err()
    {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: Some("unavailable"),
            }),
        );
    }
    (
        StatusCode::OK,
        Json(ReadyBody {
            status: "ok",
            database: Some("ok"),
        }),
    )
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes including readiness with DB check. Requires AppState.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

/// Full application router with CORS and a request body cap applied.
///
/// Credentialed CORS requires an exact origin; tower-http panics on the
/// wildcard + credentials combination, so the origin is parsed up front.
pub fn app(state: AppState, cors_origin: &str) -> Result<Router, AppError> {
    let origin: HeaderValue = cors_origin
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid CORS origin: {cors_origin}")))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(example_routes(state))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT)))
}
