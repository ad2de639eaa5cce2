use crate::models::Reactions;

/// Callbacks a bubble raises toward the thread view that owns its message.
///
/// The bubble never mutates its message; it asks the owner to.
pub trait BubbleEvents: Send + Sync {
    /// Start composing a reply to the bubble's message
    fn reply_to_message(&self);

    /// Replace the reaction map of `message_id` with `reactions` (not a delta)
    fn update_message_reactions(&self, message_id: &str, reactions: Reactions);
}
