//! Villa API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use json_patch::Patch;

use crate::errors::AppError;
use crate::models::{VillaCreateDto, VillaDto, VillaUpdateDto};
use crate::AppState;

/// GET /api/villas - List all villas.
pub async fn list_villas(State(state): State<AppState>) -> Result<Json<Vec<VillaDto>>, AppError> {
    Ok(Json(state.villas.list().await?))
}

/// GET /api/villas/:id - Get a single villa.
pub async fn get_villa(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<VillaDto>, AppError> {
    let Path(id) = path?;
    Ok(Json(state.villas.get(id).await?))
}

/// POST /api/villas - Create a villa.
pub async fn create_villa(
    State(state): State<AppState>,
    payload: Result<Json<VillaCreateDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;

    let villa = state.villas.create(request).await?;
    let location = format!("/api/villas/{}", villa.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(villa)))
}

/// PUT /api/villas/:id - Replace a villa.
pub async fn update_villa(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<VillaUpdateDto>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Json(request) = payload?;

    state.villas.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/villas/:id - Apply a JSON patch to a villa.
pub async fn partial_update_villa(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Patch>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    let Json(patch) = payload?;

    state.villas.partial_update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/villas/:id - Delete a villa.
pub async fn delete_villa(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.villas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
