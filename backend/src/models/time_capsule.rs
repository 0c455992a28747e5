//! Time capsule model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A timestamped note stored for later retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeCapsule {
    pub id: u64,
    pub note: String,
    /// Target time chosen by the client, seconds since the epoch.
    pub timestamp: f64,
    pub created_at: f64,
}

impl Record for TimeCapsule {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Request body for creating a time capsule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimeCapsuleRequest {
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub timestamp: Option<f64>,
}
