use std::collections::HashMap;

use serde::Serialize;

use crate::models::Message;

const ELLIPSIS: char = '…';

/// Resolves a `reply_id` back-reference to the message it points at
pub trait ReplyLookup {
    fn resolve(&self, message_id: &str) -> Option<&Message>;
}

impl ReplyLookup for HashMap<String, Message> {
    fn resolve(&self, message_id: &str) -> Option<&Message> {
        self.get(message_id)
    }
}

impl ReplyLookup for [Message] {
    fn resolve(&self, message_id: &str) -> Option<&Message> {
        self.iter().find(|m| m.message_id == message_id)
    }
}

/// The quote card shown above a reply. The frame is always drawn; `content`
/// is None until the quoted message is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    pub reply_id: String,
    pub content: Option<QuoteContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteContent {
    pub author_name: String,
    pub preview: String,
}

/// Cap `quoted` at `limit` characters, marking the cut with an ellipsis.
///
/// `limit` is the length of the replying message, so a short reply never sits
/// under a long quote. A zero limit leaves only the ellipsis.
pub fn truncate_quote(quoted: &str, limit: usize) -> String {
    match quoted.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len_utf8());
            preview.push_str(&quoted[..cut]);
            preview.push(ELLIPSIS);
            preview
        }
        None => quoted.to_string(),
    }
}

/// Quote card for `message`, if it is a reply
pub fn quote_view(message: &Message, reply_message: Option<&Message>) -> Option<QuoteView> {
    let reply_id = message.reply_id.as_ref()?;
    let limit = message.message.chars().count();

    let content = reply_message.map(|quoted| QuoteContent {
        author_name: quoted.user.name.clone().unwrap_or_default(),
        preview: truncate_quote(&quoted.message, limit),
    });

    Some(QuoteView {
        reply_id: reply_id.clone(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageAuthor;
    use chrono::Utc;

    fn message(id: &str, text: &str, reply_id: Option<&str>) -> Message {
        Message {
            message_id: id.to_string(),
            user: MessageAuthor {
                id: format!("author-{}", id),
                name: Some(format!("Author {}", id)),
                image: None,
            },
            message: text.to_string(),
            timestamp: Utc::now(),
            reactions: Default::default(),
            reply_id: reply_id.map(String::from),
        }
    }

    #[test]
    fn test_truncate_longer_quote() {
        assert_eq!(truncate_quote("Hello there", 5), "Hello…");
    }

    #[test]
    fn test_truncate_zero_limit() {
        assert_eq!(truncate_quote("Hi", 0), "…");
    }

    #[test]
    fn test_short_quote_verbatim() {
        assert_eq!(truncate_quote("Hi", 5), "Hi");
        // equal length is not truncated
        assert_eq!(truncate_quote("Hello", 5), "Hello");
        assert_eq!(truncate_quote("", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_quote("héllo wörld", 4), "héll…");
        assert_eq!(truncate_quote("👍👍👍", 2), "👍👍…");
    }

    #[test]
    fn test_quote_view_absent_without_reply_id() {
        let msg = message("m-2", "ok", None);
        assert!(quote_view(&msg, None).is_none());
    }

    #[test]
    fn test_quote_frame_without_resolved_message() {
        let msg = message("m-2", "ok", Some("m-1"));
        let view = quote_view(&msg, None).unwrap();
        assert_eq!(view.reply_id, "m-1");
        assert!(view.content.is_none());
    }

    #[test]
    fn test_quote_view_bounded_by_reply_length() {
        let quoted = message("m-1", "Hello there", None);
        let reply = message("m-2", "Sure!", Some("m-1"));

        let content = quote_view(&reply, Some(&quoted)).unwrap().content.unwrap();
        assert_eq!(content.author_name, "Author m-1");
        assert_eq!(content.preview, "Hello…");
    }

    #[test]
    fn test_quote_view_missing_author_name() {
        let mut quoted = message("m-1", "Hi", None);
        quoted.user.name = None;
        let reply = message("m-2", "Hi back", Some("m-1"));

        let content = quote_view(&reply, Some(&quoted)).unwrap().content.unwrap();
        assert_eq!(content.author_name, "");
        assert_eq!(content.preview, "Hi");
    }

    #[test]
    fn test_lookup_by_slice_and_map() {
        let messages = vec![message("m-1", "first", None), message("m-2", "second", None)];
        assert_eq!(messages.resolve("m-2").map(|m| m.message.as_str()), Some("second"));
        assert!(messages.resolve("m-9").is_none());

        let by_id: HashMap<String, Message> = messages
            .into_iter()
            .map(|m| (m.message_id.clone(), m))
            .collect();
        assert_eq!(by_id.resolve("m-1").map(|m| m.message.as_str()), Some("first"));
    }
}
