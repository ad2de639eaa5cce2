use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::MessageAuthor;

/// Reaction symbol -> count. A symbol missing from the map counts as zero.
pub type Reactions = HashMap<String, u32>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
   pub message_id: String,
   pub user: MessageAuthor,
   pub message: String,
   pub timestamp: DateTime<Utc>,
   #[serde(default)]
   pub reactions: Reactions,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub reply_id: Option<String>,
}

impl Message {
   /// Current count for `reaction`, zero when nobody has used it yet
   pub fn reaction_count(&self, reaction: &str) -> u32 {
      self.reactions.get(reaction).copied().unwrap_or(0)
   }

   pub fn is_reply(&self) -> bool {
      self.reply_id.is_some()
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use serde_json::json;

   #[test]
   fn test_deserialize_wire_message() {
      let raw = json!({
         "messageId": "m-1",
         "user": { "id": "u-1", "name": "Ada", "image": null },
         "message": "hello",
         "timestamp": "2024-03-01T12:30:00Z",
         "reactions": { "👍": 2 },
         "replyId": "m-0"
      });

      let msg: Message = serde_json::from_value(raw).unwrap();
      assert_eq!(msg.message_id, "m-1");
      assert_eq!(msg.user.name.as_deref(), Some("Ada"));
      assert_eq!(msg.reaction_count("👍"), 2);
      assert_eq!(msg.reply_id.as_deref(), Some("m-0"));
   }

   #[test]
   fn test_missing_optional_fields_default() {
      let raw = json!({
         "messageId": "m-2",
         "user": { "id": "u-2" },
         "message": "",
         "timestamp": "2024-03-01T12:30:00Z"
      });

      let msg: Message = serde_json::from_value(raw).unwrap();
      assert!(msg.reactions.is_empty());
      assert!(!msg.is_reply());
      assert!(msg.user.name.is_none());
      assert!(msg.user.image.is_none());
   }

   #[test]
   fn test_absent_reaction_counts_as_zero() {
      let raw = json!({
         "messageId": "m-3",
         "user": { "id": "u-3" },
         "message": "hi",
         "timestamp": "2024-03-01T12:30:00Z",
         "reactions": { "❤️": 1 }
      });

      let msg: Message = serde_json::from_value(raw).unwrap();
      assert_eq!(msg.reaction_count("😡"), 0);
   }
}
