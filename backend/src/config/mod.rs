//! Configuration module for the GWEN backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::store::IdPolicy;

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_ELEVENLABS_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_ELEVENLABS_MODEL: &str = "eleven_monolingual_v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5050";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat-completion service
    pub openai_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    pub openai_base_url: String,
    /// Chat model name
    pub openai_model: String,
    /// API key for the text-to-speech service
    pub elevenlabs_api_key: Option<String>,
    /// Base URL of the text-to-speech API
    pub elevenlabs_base_url: String,
    /// Text-to-speech model id
    pub elevenlabs_model: String,
    /// Voice used for every spoken reply
    pub voice_id: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Timeout applied to every upstream AI request
    pub upstream_timeout: Duration,
    /// How stores assign ids to new entries
    pub id_policy: IdPolicy,
    /// Optional JSON file replacing the built-in places catalog
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("GWEN_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()?;

        let upstream_timeout = env::var("GWEN_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        let id_policy = env::var("GWEN_ID_POLICY")
            .ok()
            .and_then(|s| IdPolicy::parse(&s))
            .unwrap_or_default();

        Ok(Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            elevenlabs_api_key: non_empty_var("ELEVENLABS_API_KEY"),
            elevenlabs_base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_URL.to_string()),
            elevenlabs_model: env::var("ELEVENLABS_MODEL")
                .unwrap_or_else(|_| DEFAULT_ELEVENLABS_MODEL.to_string()),
            voice_id: non_empty_var("GWEN_VOICE_ID"),
            bind_addr,
            log_level: env::var("GWEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("GWEN_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            upstream_timeout: Duration::from_secs(upstream_timeout),
            id_policy,
            catalog_path: non_empty_var("GWEN_CATALOG_PATH").map(PathBuf::from),
        })
    }

    /// Whether both the TTS key and voice are present.
    pub fn speech_configured(&self) -> bool {
        self.elevenlabs_api_key.is_some() && self.voice_id.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            elevenlabs_api_key: None,
            elevenlabs_base_url: DEFAULT_ELEVENLABS_URL.to_string(),
            elevenlabs_model: DEFAULT_ELEVENLABS_MODEL.to_string(),
            voice_id: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5050)),
            log_level: "info".to_string(),
            log_json: false,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            id_policy: IdPolicy::default(),
            catalog_path: None,
        }
    }
}

/// Read an environment variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: &[&str] = &[
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_MODEL",
        "ELEVENLABS_API_KEY",
        "ELEVENLABS_BASE_URL",
        "ELEVENLABS_MODEL",
        "GWEN_VOICE_ID",
        "GWEN_BIND_ADDR",
        "GWEN_LOG_LEVEL",
        "GWEN_LOG_JSON",
        "GWEN_UPSTREAM_TIMEOUT_SECS",
        "GWEN_ID_POLICY",
        "GWEN_CATALOG_PATH",
    ];

    // Both scenarios share one test so they never race on the process environment.
    #[test]
    fn test_config_from_env() {
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();

        assert!(config.openai_api_key.is_none());
        assert!(config.elevenlabs_api_key.is_none());
        assert!(config.voice_id.is_none());
        assert!(!config.speech_configured());
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.elevenlabs_model, "eleven_monolingual_v1");
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5050");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.upstream_timeout, Duration::from_secs(60));
        assert_eq!(config.id_policy, IdPolicy::LengthPlusOne);
        assert!(config.catalog_path.is_none());

        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("ELEVENLABS_API_KEY", "el-test");
        env::set_var("GWEN_VOICE_ID", "   ");
        env::set_var("GWEN_UPSTREAM_TIMEOUT_SECS", "not-a-number");
        env::set_var("GWEN_ID_POLICY", "monotonic");

        let config = Config::from_env().unwrap();

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert!(config.voice_id.is_none());
        assert!(!config.speech_configured());
        assert_eq!(config.upstream_timeout, Duration::from_secs(60));
        assert_eq!(config.id_policy, IdPolicy::Monotonic);

        env::set_var("GWEN_BIND_ADDR", "not an address");
        assert!(Config::from_env().is_err());

        for var in VARS {
            env::remove_var(var);
        }
    }
}
