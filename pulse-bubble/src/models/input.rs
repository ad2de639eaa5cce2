//! Outbound DTOs with garde validation.
//!
//! Requests are checked before they leave the client so a malformed intent
//! fails locally instead of round-tripping to the chat endpoint. Only the ids
//! are constrained; the reaction symbol is passed through as given.

use garde::Validate;
use serde::Serialize;

use super::{ChatContext, Message};

/// Validation constants
const MAX_CHAT_ID_LENGTH: usize = 256;
const MAX_CHAT_TYPE_LENGTH: usize = 64;
const MAX_MESSAGE_ID_LENGTH: usize = 256;

/// Body of the reaction POST sent to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[garde(context(()))]
pub struct ReactionRequest {
    #[garde(length(min = 1, max = MAX_CHAT_ID_LENGTH))]
    pub chat_id: String,
    #[garde(length(min = 1, max = MAX_CHAT_TYPE_LENGTH))]
    pub chat_type: String,
    /// Any symbol; the menu's fixed set is a UI concern
    #[garde(skip)]
    pub reaction: String,
    /// Id of the message being reacted to
    #[garde(length(min = 1, max = MAX_MESSAGE_ID_LENGTH))]
    pub reply_id: String,
}

impl ReactionRequest {
    pub fn new(chat: &ChatContext, message: &Message, reaction: &str) -> Self {
        Self {
            chat_id: chat.chat_id.clone(),
            chat_type: chat.chat_type.clone(),
            reaction: reaction.to_string(),
            reply_id: message.message_id.clone(),
        }
    }
}

/// Helper trait to convert garde validation errors to String
pub trait ValidateExt {
    fn validate_input(&self) -> Result<(), String>;
}

impl<T: Validate<Context = ()>> ValidateExt for T {
    fn validate_input(&self) -> Result<(), String> {
        self.validate().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageAuthor;
    use chrono::Utc;
    use serde_json::json;

    fn message(id: &str) -> Message {
        Message {
            message_id: id.to_string(),
            user: MessageAuthor {
                id: "u-1".to_string(),
                name: Some("Ada".to_string()),
                image: None,
            },
            message: "hello".to_string(),
            timestamp: Utc::now(),
            reactions: Default::default(),
            reply_id: None,
        }
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let chat = ChatContext::new("chat-9", "direct");
        let request = ReactionRequest::new(&chat, &message("m-1"), "👍");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "chatId": "chat-9",
                "chatType": "direct",
                "reaction": "👍",
                "replyId": "m-1"
            })
        );
    }

    #[test]
    fn test_any_symbol_is_accepted() {
        let chat = ChatContext::new("chat-9", "group");
        let request = ReactionRequest::new(&chat, &message("m-1"), ":partyparrot:");
        assert!(request.validate_input().is_ok());
    }

    #[test]
    fn test_long_zwj_symbol_accepted() {
        let chat = ChatContext::new("chat-9", "group");
        let family = "👨‍👩‍👧‍👦".repeat(3);
        assert!(family.len() > 64);

        let request = ReactionRequest::new(&chat, &message("m-1"), &family);
        assert!(request.validate_input().is_ok());
    }

    #[test]
    fn test_empty_symbol_passes_through() {
        let chat = ChatContext::new("chat-9", "group");
        let request = ReactionRequest::new(&chat, &message("m-1"), "");
        assert!(request.validate_input().is_ok());
    }

    #[test]
    fn test_missing_chat_id_rejected() {
        let chat = ChatContext::new("", "group");
        let request = ReactionRequest::new(&chat, &message("m-1"), "❤️");
        assert!(request.validate_input().is_err());
    }
}
