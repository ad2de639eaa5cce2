use thiserror::Error;

/// Why a reaction did not make it to the chat endpoint
#[derive(Debug, Error)]
pub enum ReactionError {
    #[error("invalid reaction request: {0}")]
    InvalidRequest(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat endpoint responded with HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid chat endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported endpoint scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("invalid reaction timeout {0:?}")]
    InvalidTimeout(String),
}
