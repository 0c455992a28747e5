//! REST API module.
//!
//! Handlers for every route the GWEN clients call. Success bodies are the bare
//! resource (or an [`Ack`](crate::models::Ack)); failures are [`AppError`] envelopes.

mod assistant;
mod health;
mod location;
mod places;
mod reminders;
mod time_capsules;

pub use assistant::*;
pub use health::*;
pub use location::*;
pub use places::*;
pub use reminders::*;
pub use time_capsules::*;

use crate::errors::AppError;

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<T, AppError>;
