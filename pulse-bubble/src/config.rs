use std::env;
use std::time::Duration;

use tracing::{info, warn};
use url::Url;

use crate::error::ConfigError;

/// Chat endpoint: checked at compile time via option_env!, falls back to runtime env var, then default
const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:3000/api/chat";
const CHAT_ENDPOINT_VAR: &str = "PULSE_CHAT_ENDPOINT";
const REACTION_TIMEOUT_VAR: &str = "PULSE_REACTION_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleConfig {
    /// Where reaction intents are POSTed
    pub chat_endpoint: Url,
    /// None means the request runs until the transport resolves it
    pub reaction_timeout: Option<Duration>,
}

impl BubbleConfig {
    /// Load from the process environment (and `.env` if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Failed to load .env: {}", e);
            }
        }

        // Priority: build-time env -> runtime env -> default
        let build_time = option_env!("PULSE_CHAT_ENDPOINT");
        let runtime = env::var(CHAT_ENDPOINT_VAR).ok();

        info!(
            build_time = ?build_time,
            runtime = ?runtime,
            "Chat endpoint sources"
        );

        let endpoint = build_time.map(String::from).or(runtime);
        let timeout = env::var(REACTION_TIMEOUT_VAR).ok();

        Self::resolve(endpoint.as_deref(), timeout.as_deref())
    }

    /// Build a config from raw values, applying defaults for anything missing
    pub fn resolve(endpoint: Option<&str>, timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let raw = endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CHAT_ENDPOINT);

        let chat_endpoint = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
            value: raw.to_string(),
            source,
        })?;

        if !matches!(chat_endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(chat_endpoint.scheme().to_string()));
        }

        let reaction_timeout = match timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(raw.to_string()));
                }
                Some(Duration::from_secs(secs))
            }
        };

        info!(endpoint = %chat_endpoint, timeout = ?reaction_timeout, "Using chat endpoint");

        Ok(Self {
            chat_endpoint,
            reaction_timeout,
        })
    }
}
