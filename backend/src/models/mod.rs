//! Data models for the GWEN backend.
//!
//! Field names follow the snake_case JSON the iOS and watchOS clients decode.

mod assistant;
mod health;
mod location;
mod place;
mod reminder;
mod time_capsule;

pub use assistant::*;
pub use health::*;
pub use location::*;
pub use place::*;
pub use reminder::*;
pub use time_capsule::*;

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by create and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl Ack {
    pub fn created(id: u64) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}
