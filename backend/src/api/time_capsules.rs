//! Time capsule API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::ApiResult;
use crate::models::{Ack, CreateTimeCapsuleRequest, TimeCapsule};
use crate::AppState;

/// GET /timecapsule - List all time capsules.
pub async fn list_time_capsules(State(state): State<AppState>) -> Json<Vec<TimeCapsule>> {
    Json(state.repo.list_time_capsules().await)
}

/// POST /timecapsule - Create a new time capsule.
pub async fn create_time_capsule(
    State(state): State<AppState>,
    payload: Result<Json<CreateTimeCapsuleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let Json(request) = payload?;
    let capsule = state.repo.create_time_capsule(&request).await?;
    Ok((StatusCode::CREATED, Json(Ack::created(capsule.id))))
}

/// GET /timecapsule/:id - Get a single time capsule.
pub async fn get_time_capsule(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<TimeCapsule>> {
    let Path(id) = id?;
    Ok(Json(state.repo.get_time_capsule(id).await?))
}

/// DELETE /timecapsule/:id - Delete a time capsule.
pub async fn delete_time_capsule(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Ack>> {
    let Path(id) = id?;
    state.repo.delete_time_capsule(id).await?;
    Ok(Json(Ack::ok()))
}
