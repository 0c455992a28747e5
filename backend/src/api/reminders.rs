//! Location reminder API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::ApiResult;
use crate::models::{Ack, CreateReminderRequest, LocationReminder};
use crate::AppState;

/// GET /reminder/location - List all location reminders.
pub async fn list_reminders(State(state): State<AppState>) -> Json<Vec<LocationReminder>> {
    Json(state.repo.list_reminders().await)
}

/// POST /reminder/location - Create a new location reminder.
pub async fn create_reminder(
    State(state): State<AppState>,
    payload: Result<Json<CreateReminderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let Json(request) = payload?;
    let reminder = state.repo.create_reminder(&request).await?;
    Ok((StatusCode::CREATED, Json(Ack::created(reminder.id))))
}

/// GET /reminder/location/:id - Get a single location reminder.
pub async fn get_reminder(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<LocationReminder>> {
    let Path(id) = id?;
    Ok(Json(state.repo.get_reminder(id).await?))
}

/// DELETE /reminder/location/:id - Delete a location reminder.
pub async fn delete_reminder(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Ack>> {
    let Path(id) = id?;
    state.repo.delete_reminder(id).await?;
    Ok(Json(Ack::ok()))
}
