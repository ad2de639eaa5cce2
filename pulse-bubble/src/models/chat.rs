use serde::{Deserialize, Serialize};

/// Destination for reaction intents. Fixed for the lifetime of a bubble.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
   pub chat_id: String,
   pub chat_type: String,
}

impl ChatContext {
   pub fn new(chat_id: impl Into<String>, chat_type: impl Into<String>) -> Self {
      Self {
         chat_id: chat_id.into(),
         chat_type: chat_type.into(),
      }
   }
}
