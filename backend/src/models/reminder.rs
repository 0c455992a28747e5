//! Location reminder model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Trigger radius used when the client does not send one.
pub const DEFAULT_REMINDER_RADIUS_METERS: f64 = 100.0;

/// A reminder bound to a coordinate and a trigger radius.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationReminder {
    pub id: u64,
    pub reminder: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Empty when the client did not name the place.
    #[serde(default)]
    pub place_name: String,
    pub radius: f64,
    pub created_at: f64,
}

impl Record for LocationReminder {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request body for creating a location reminder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminderRequest {
    #[serde(default)]
    pub reminder: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub radius: Option<f64>,
}
