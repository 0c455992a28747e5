//! Assistant request model.

use serde::Deserialize;

/// Request body for `POST /gwen`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}
