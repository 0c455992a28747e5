//! Places catalog models.

use serde::{Deserialize, Serialize};

/// A searchable place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub name: String,
    pub place_id: String,
    pub vicinity: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub types: Vec<String>,
}

/// A named group of places, e.g. `restaurant`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceCategory {
    pub name: String,
    pub places: Vec<Place>,
}

/// Rich information about a single place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetail {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub website: String,
    pub rating: f64,
    /// One entry per weekday, Monday first.
    pub opening_hours: Vec<String>,
    pub reviews: Vec<PlaceReview>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceReview {
    pub author: String,
    pub rating: u8,
    pub text: String,
    /// Seconds since the epoch.
    pub time: i64,
}

/// Query parameters for `GET /places/search`.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "type", default = "default_place_type")]
    pub place_type: String,
    #[serde(default = "default_search_radius")]
    pub radius: f64,
}

fn default_place_type() -> String {
    "restaurant".to_string()
}

fn default_search_radius() -> f64 {
    1000.0
}
