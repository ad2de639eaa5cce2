use std::sync::Arc;

use tracing::{error, info};

use super::{next_reactions, ChatApi};
use crate::error::ReactionError;
use crate::events::BubbleEvents;
use crate::models::input::{ReactionRequest, ValidateExt};
use crate::models::{ChatContext, Message, Reactions};
use crate::notify::{Notifier, Toast};

pub const REACTION_FAILED: &str = "Failed to react to message";

/// Sends reactions for one chat and applies them optimistically.
///
/// On success the new counts are computed here, not read back from the
/// server. Two people reacting at once can therefore see different totals
/// until the thread reloads.
pub struct ReactionController {
    chat: ChatContext,
    api: Arc<dyn ChatApi>,
    notifier: Arc<dyn Notifier>,
}

impl ReactionController {
    pub fn new(chat: ChatContext, api: Arc<dyn ChatApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { chat, api, notifier }
    }

    /// React to `message` with `reaction`.
    ///
    /// Failures are logged and surfaced as a toast before being returned; the
    /// reaction map is left alone in that case. Every success increments by
    /// exactly one.
    pub async fn react_to_message(
        &self,
        message: &Message,
        reaction: &str,
        events: &dyn BubbleEvents,
    ) -> Result<Reactions, ReactionError> {
        match self.send(message, reaction).await {
            Ok(()) => {
                let next = next_reactions(&message.reactions, reaction);
                info!(
                    message_id = %message.message_id,
                    reaction = %reaction,
                    count = next.get(reaction).copied().unwrap_or(0),
                    "Reaction applied"
                );
                events.update_message_reactions(&message.message_id, next.clone());
                Ok(next)
            }
            Err(e) => {
                error!(
                    message_id = %message.message_id,
                    reaction = %reaction,
                    "Error reacting to message: {}",
                    e
                );
                self.notifier.notify(Toast::error(REACTION_FAILED));
                Err(e)
            }
        }
    }

    async fn send(&self, message: &Message, reaction: &str) -> Result<(), ReactionError> {
        let request = ReactionRequest::new(&self.chat, message, reaction);
        request
            .validate_input()
            .map_err(ReactionError::InvalidRequest)?;
        self.api.send_reaction(&request).await
    }
}
