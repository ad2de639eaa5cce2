use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::events::BubbleEvents;
use crate::models::{Message, Reactions};
use crate::quote::ReplyLookup;

/// Messages of one open chat, owned by the thread view.
///
/// Bubbles read from it and request changes through `ThreadEvents`; the mutex
/// around it serializes those changes.
#[derive(Debug, Default, Clone)]
pub struct Thread {
    messages: Vec<Message>,
    replying_to: Option<String>,
}

impl Thread {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            replying_to: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.message_id == message_id)
    }

    /// Replace the reactions of `message_id` wholesale. Returns false when the
    /// message is no longer in the thread.
    pub fn apply_reactions(&mut self, message_id: &str, reactions: Reactions) -> bool {
        match self.messages.iter_mut().find(|m| m.message_id == message_id) {
            Some(message) => {
                message.reactions = reactions;
                true
            }
            None => {
                debug!(message_id = %message_id, "Reaction update for a message no longer loaded");
                false
            }
        }
    }

    pub fn begin_reply(&mut self, message_id: &str) {
        self.replying_to = Some(message_id.to_string());
    }

    pub fn cancel_reply(&mut self) {
        self.replying_to = None;
    }

    /// Message currently being replied to, if any
    pub fn replying_to(&self) -> Option<&Message> {
        self.replying_to.as_deref().and_then(|id| self.get(id))
    }
}

impl ReplyLookup for Thread {
    fn resolve(&self, message_id: &str) -> Option<&Message> {
        self.get(message_id)
    }
}

/// Callbacks for one bubble, bound to its message and the shared thread
#[derive(Debug, Clone)]
pub struct ThreadEvents {
    thread: Arc<Mutex<Thread>>,
    message_id: String,
}

impl ThreadEvents {
    pub fn new(thread: Arc<Mutex<Thread>>, message_id: impl Into<String>) -> Self {
        Self {
            thread,
            message_id: message_id.into(),
        }
    }
}

impl BubbleEvents for ThreadEvents {
    fn reply_to_message(&self) {
        match self.thread.lock() {
            Ok(mut thread) => thread.begin_reply(&self.message_id),
            Err(e) => warn!("Thread lock poisoned: {}", e),
        }
    }

    fn update_message_reactions(&self, message_id: &str, reactions: Reactions) {
        match self.thread.lock() {
            Ok(mut thread) => {
                thread.apply_reactions(message_id, reactions);
            }
            Err(e) => warn!("Thread lock poisoned: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageAuthor;
    use chrono::Utc;

    fn message(id: &str) -> Message {
        Message {
            message_id: id.to_string(),
            user: MessageAuthor {
                id: "u-1".to_string(),
                name: None,
                image: None,
            },
            message: format!("text of {}", id),
            timestamp: Utc::now(),
            reactions: Reactions::from([("👍".to_string(), 1)]),
            reply_id: None,
        }
    }

    #[test]
    fn test_apply_reactions_replaces_not_merges() {
        let mut thread = Thread::new(vec![message("m-1")]);
        let replacement = Reactions::from([("❤️".to_string(), 2)]);

        assert!(thread.apply_reactions("m-1", replacement.clone()));
        assert_eq!(thread.get("m-1").unwrap().reactions, replacement);
        assert_eq!(thread.messages().len(), 1);
    }

    #[test]
    fn test_apply_reactions_to_unknown_message() {
        let mut thread = Thread::new(vec![message("m-1")]);
        assert!(!thread.apply_reactions("gone", Reactions::new()));
        assert_eq!(thread.get("m-1").unwrap().reactions.get("👍"), Some(&1));
    }

    #[test]
    fn test_reply_tracking() {
        let mut thread = Thread::new(vec![message("m-1"), message("m-2")]);
        assert!(thread.replying_to().is_none());

        thread.begin_reply("m-2");
        assert_eq!(thread.replying_to().unwrap().message_id, "m-2");

        thread.cancel_reply();
        assert!(thread.replying_to().is_none());
    }

    #[test]
    fn test_thread_events_route_to_thread() {
        let thread = Arc::new(Mutex::new(Thread::new(vec![message("m-1")])));
        let events = ThreadEvents::new(thread.clone(), "m-1");

        events.reply_to_message();
        events.update_message_reactions("m-1", Reactions::from([("😂".to_string(), 1)]));

        let thread = thread.lock().unwrap();
        assert_eq!(thread.replying_to().unwrap().message_id, "m-1");
        assert_eq!(
            thread.get("m-1").unwrap().reactions,
            Reactions::from([("😂".to_string(), 1)])
        );
    }
}
