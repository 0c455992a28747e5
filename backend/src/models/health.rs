//! Health check model.

use serde::Serialize;

/// Liveness plus which provider settings are present.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub openai_api_key_set: bool,
    pub elevenlabs_api_key_set: bool,
    pub gwen_voice_id_set: bool,
    /// Places come from the local catalog, never from Google.
    pub google_api_key_set: bool,
    pub using_apple_mapkit: bool,
}
