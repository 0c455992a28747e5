//! Voice assistant endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use super::ApiResult;
use crate::assistant::SpooledAudio;
use crate::errors::AppError;
use crate::models::PromptRequest;
use crate::AppState;

/// Header carrying the text the audio was generated from.
pub const RESPONSE_TEXT_HEADER: &str = "x-gwen-response-text";

const AUDIO_DISPOSITION: &str = "attachment; filename=\"gwen_response.mp3\"";

/// POST /gwen - Answer a prompt with spoken audio.
pub async fn gwen(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    let prompt = request.prompt.unwrap_or_default();

    let reply = state.assistant.respond(&prompt).await?;
    let text = response_text_header(&reply.text)?;

    let spooled = SpooledAudio::write(&reply.audio).await?;
    tracing::debug!(path = ?spooled.path(), "Audio spooled");
    let audio = spooled.into_bytes().await?;

    tracing::info!(
        text_len = reply.text.len(),
        audio_len = audio.len(),
        "Assistant reply sent"
    );

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg")),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static(AUDIO_DISPOSITION),
            ),
            (HeaderName::from_static(RESPONSE_TEXT_HEADER), text),
        ],
        audio,
    )
        .into_response())
}

/// Header values cannot hold control characters; they become spaces.
fn response_text_header(text: &str) -> Result<HeaderValue, AppError> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    HeaderValue::from_bytes(cleaned.as_bytes())
        .map_err(|e| AppError::Internal(format!("Invalid response text header: {}", e)))
}
