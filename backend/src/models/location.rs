//! User location and geocoding models.

use serde::{Deserialize, Serialize};

use super::LocationReminder;

/// The most recently reported position of the user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Request body for `POST /location/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdateRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Reminders whose trigger radius contains the new location.
#[derive(Debug, Clone, Serialize)]
pub struct LocationUpdateResponse {
    pub success: bool,
    pub nearby_reminders: Vec<LocationReminder>,
}

/// Result of a geocoding lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query parameters for `GET /geocode`.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    #[serde(default)]
    pub address: Option<String>,
}
