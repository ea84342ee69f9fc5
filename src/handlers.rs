//! HTTP handlers for the example resource.

use crate::error::AppError;
use crate::model::{Example, ExamplePayload};
use crate::response::Message;
use crate::service::ExampleService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Example>>, AppError> {
    let rows = ExampleService::list(&state.pool).await?;
    Ok(Json(rows))
}

/// A missing id answers 200 with a null body, matching the original wire
/// contract for this route.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Option<Example>>, AppError> {
    let id = parse_id(&id_str)?;
    let row = ExampleService::get(&state.pool, id).await?;
    Ok(Json(row))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ExamplePayload>,
) -> Result<Json<Example>, AppError> {
    let row = ExampleService::create(&state.pool, &body.name).await?;
    tracing::info!(id = row.id, "created example");
    Ok(Json(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<ExamplePayload>,
) -> Result<Json<Example>, AppError> {
    let id = parse_id(&id_str)?;
    let row = ExampleService::update(&state.pool, id, &body.name).await?;
    Ok(Json(row))
}

/// Idempotent: a second delete of the same id still reports success.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id_str)?;
    let removed = ExampleService::delete(&state.pool, id).await?;
    if !removed {
        tracing::debug!(id, "delete matched no row");
    }
    Ok(Json(Message::new("Example deleted")))
}
