//! Places search and detail endpoints.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{Place, PlaceDetail, PlaceSearchQuery};
use crate::AppState;

/// GET /places/search - Places of a category within a radius of a point.
pub async fn search_places(
    State(state): State<AppState>,
    query: Result<Query<PlaceSearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Place>>> {
    let Query(params) = query?;
    let (Some(latitude), Some(longitude)) = (params.latitude, params.longitude) else {
        return Err(AppError::BadRequest(
            "Missing latitude or longitude".to_string(),
        ));
    };

    let places = state
        .catalog
        .search(latitude, longitude, &params.place_type, params.radius);
    tracing::debug!(
        category = %params.place_type,
        radius = params.radius,
        found = places.len(),
        "Places search"
    );
    Ok(Json(places))
}

/// GET /places/detail/:place_id - Rich information about one place.
pub async fn place_detail(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> ApiResult<Json<PlaceDetail>> {
    Ok(Json(state.catalog.detail(&place_id)?.clone()))
}
