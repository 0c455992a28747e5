//! Health check endpoint.

use axum::{extract::State, Json};

use crate::models::HealthStatus;
use crate::AppState;

/// GET /health - Liveness and provider configuration flags.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let config = &state.config;
    Json(HealthStatus {
        status: "healthy",
        openai_api_key_set: config.openai_api_key.is_some(),
        elevenlabs_api_key_set: config.elevenlabs_api_key.is_some(),
        gwen_voice_id_set: config.voice_id.is_some(),
        google_api_key_set: false,
        using_apple_mapkit: true,
    })
}
