//! User location and geocoding endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{
    GeocodeQuery, GeocodeResult, LocationUpdateRequest, LocationUpdateResponse, UserLocation,
};
use crate::AppState;

/// POST /location/update - Record the user's position and report nearby reminders.
pub async fn update_location(
    State(state): State<AppState>,
    payload: Result<Json<LocationUpdateRequest>, JsonRejection>,
) -> ApiResult<Json<LocationUpdateResponse>> {
    let Json(request) = payload?;
    let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
        return Err(AppError::BadRequest(
            "Missing latitude or longitude".to_string(),
        ));
    };

    let nearby_reminders = state
        .repo
        .update_location(UserLocation {
            latitude,
            longitude,
        })
        .await;

    Ok(Json(LocationUpdateResponse {
        success: true,
        nearby_reminders,
    }))
}

/// GET /location - The last reported user position.
pub async fn current_location(State(state): State<AppState>) -> Json<UserLocation> {
    Json(state.repo.current_location().await)
}

/// GET /geocode - Resolve an address against the fixed city table.
pub async fn geocode(
    State(state): State<AppState>,
    query: Result<Query<GeocodeQuery>, QueryRejection>,
) -> ApiResult<Json<GeocodeResult>> {
    let Query(query) = query?;
    let address = query
        .address
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest("No address provided".to_string()))?;

    Ok(Json(state.geocoder.geocode(&address)))
}
