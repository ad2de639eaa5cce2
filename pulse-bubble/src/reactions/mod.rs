mod api;
mod controller;

pub use api::{ChatApi, HttpChatApi};
pub use controller::{ReactionController, REACTION_FAILED};

use crate::models::Reactions;

/// Reaction map after one more `reaction`, computed locally.
///
/// The chat endpoint only acknowledges the write; this is what the UI shows
/// until the thread is refreshed.
pub fn next_reactions(current: &Reactions, reaction: &str) -> Reactions {
    let mut next = current.clone();
    let count = next.entry(reaction.to_string()).or_insert(0);
    *count = count.saturating_add(1);
    next
}
