//! Voice assistant pipeline: prompt → chat completion → speech.

mod elevenlabs;
mod openai;
mod spool;

pub use elevenlabs::ElevenLabsSpeech;
pub use openai::OpenAiChat;
pub use spool::SpooledAudio;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::errors::AppError;

/// System persona sent ahead of every prompt.
pub const GWEN_PERSONA: &str = "You are GWEN, a helpful AI assistant similar to Jarvis from Iron Man. \
You are concise, helpful, and slightly witty. You assist with day-to-day tasks, answer questions, \
and provide useful information.";

/// A chat-completion provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Reply to a single user turn under the given system message.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, AppError>;
}

/// A text-to-speech provider.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Render `text` as MP3 audio.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, AppError>;
}

/// Text reply plus its spoken rendition.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub audio: Vec<u8>,
}

/// Pairs a chat provider with a speech provider. Either may be absent when
/// its configuration is missing.
#[derive(Clone, Default)]
pub struct Assistant {
    chat: Option<Arc<dyn ChatCompletion>>,
    speech: Option<Arc<dyn SpeechSynthesis>>,
}

impl Assistant {
    pub fn new(
        chat: Option<Arc<dyn ChatCompletion>>,
        speech: Option<Arc<dyn SpeechSynthesis>>,
    ) -> Self {
        Self { chat, speech }
    }

    /// Build the HTTP-backed providers that `config` has credentials for.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let chat = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiChat::new(
                client.clone(),
                &config.openai_base_url,
                key,
                &config.openai_model,
            )) as Arc<dyn ChatCompletion>
        });

        let speech = match (&config.elevenlabs_api_key, &config.voice_id) {
            (Some(key), Some(voice_id)) => Some(Arc::new(ElevenLabsSpeech::new(
                client,
                &config.elevenlabs_base_url,
                key,
                voice_id,
                &config.elevenlabs_model,
            )) as Arc<dyn SpeechSynthesis>),
            _ => None,
        };

        Ok(Self::new(chat, speech))
    }

    /// Answer `prompt` and speak the answer.
    ///
    /// Both providers must be configured before anything is sent upstream.
    /// Upstream failures are returned as-is, without retry or a text-only fallback.
    pub async fn respond(&self, prompt: &str) -> Result<AssistantReply, AppError> {
        if prompt.is_empty() {
            return Err(AppError::BadRequest("No prompt provided".to_string()));
        }
        let speech = self.speech.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable(
                "ElevenLabs API key or voice ID not configured".to_string(),
            )
        })?;
        let chat = self.chat.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("OpenAI API key not configured".to_string())
        })?;

        let text = chat.complete(GWEN_PERSONA, prompt).await?;
        tracing::debug!(chars = text.len(), "Chat completion received");

        let audio = speech.synthesize(&text).await?;
        tracing::debug!(bytes = audio.len(), "Speech synthesized");

        Ok(AssistantReply { text, audio })
    }
}
