use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::BubbleConfig;
use crate::error::ReactionError;
use crate::models::input::ReactionRequest;

/// The remote chat endpoint, as far as reactions are concerned.
///
/// Implementations only report whether the write was accepted; any body the
/// server sends back is ignored.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_reaction(&self, request: &ReactionRequest) -> Result<(), ReactionError>;
}

/// `ChatApi` over HTTP: POSTs the request as JSON
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpChatApi {
    pub fn new(config: &BubbleConfig) -> Result<Self, ReactionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.reaction_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ReactionError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.chat_endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn send_reaction(&self, request: &ReactionRequest) -> Result<(), ReactionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReactionError::Status(status.as_u16()));
        }

        debug!(status = status.as_u16(), "Reaction accepted");
        Ok(())
    }
}
