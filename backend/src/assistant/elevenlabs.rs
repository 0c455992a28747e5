//! ElevenLabs text-to-speech client.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Serialize;

use super::SpeechSynthesis;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

/// Speech over `POST {base_url}/v1/text-to-speech/{voice_id}`.
pub struct ElevenLabsSpeech {
    client: Client,
    base_url: String,
    api_key: String,
    voice_id: String,
    model: String,
}

impl ElevenLabsSpeech {
    pub fn new(client: Client, base_url: &str, api_key: &str, voice_id: &str, model: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            voice_id: voice_id.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesis for ElevenLabsSpeech {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .post(format!(
                "{}/v1/text-to-speech/{}",
                self.base_url, self.voice_id
            ))
            .header("xi-api-key", &self.api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&SpeechRequest {
                text,
                model_id: &self.model,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "ElevenLabs returned {}: {}",
                status, body
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::Value;

    use super::*;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_synthesize_returns_audio_bytes() {
        let app = Router::new().route(
            "/v1/text-to-speech/{voice}",
            post(
                |Path(voice): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    assert_eq!(voice, "gwen-voice");
                    assert_eq!(headers["xi-api-key"], "el-test");
                    assert_eq!(body["text"], "Hello there");
                    assert_eq!(body["model_id"], "eleven_monolingual_v1");
                    vec![0xFFu8, 0xFB, 0x90, 0x00]
                },
            ),
        );
        let base_url = serve(app).await;

        let speech = ElevenLabsSpeech::new(
            Client::new(),
            &base_url,
            "el-test",
            "gwen-voice",
            "eleven_monolingual_v1",
        );
        let audio = speech.synthesize("Hello there").await.unwrap();
        assert_eq!(audio, vec![0xFF, 0xFB, 0x90, 0x00]);
    }

    #[tokio::test]
    async fn test_error_status_is_internal() {
        let app = Router::new().route(
            "/v1/text-to-speech/{voice}",
            post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
        );
        let base_url = serve(app).await;

        let speech = ElevenLabsSpeech::new(Client::new(), &base_url, "bad", "v", "m");
        let err = speech.synthesize("hi").await.unwrap_err();
        assert_eq!(
            err,
            AppError::Internal("ElevenLabs returned 401 Unauthorized: invalid api key".to_string())
        );
    }
}
