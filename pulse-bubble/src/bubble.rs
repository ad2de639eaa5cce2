use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use chrono::{Local, TimeZone};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::ReactionError;
use crate::events::BubbleEvents;
use crate::gesture::{SwipeAdapter, SwipeEvent};
use crate::menu::{build_context_menu, MenuAction, MenuItem};
use crate::models::{Message, MessageAuthor, Reactions, Viewer};
use crate::ownership::{BubbleLayout, Ownership};
use crate::quote::{quote_view, QuoteView, ReplyLookup};
use crate::reactions::ReactionController;

const MISSING_INITIAL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarView {
    /// Empty when the author has no picture; the host draws a blank avatar
    pub image_url: String,
    pub fallback: String,
}

impl AvatarView {
    fn for_author(author: &MessageAuthor) -> Self {
        let fallback = author
            .name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(String::from)
            .unwrap_or_else(|| MISSING_INITIAL.to_string());

        Self {
            image_url: author.image.clone().unwrap_or_default(),
            fallback,
        }
    }
}

/// Everything the host UI needs to draw one bubble
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BubbleView {
    pub message_id: String,
    pub layout: BubbleLayout,
    pub avatar: AvatarView,
    pub author_name: String,
    pub body: String,
    pub quote: Option<QuoteView>,
    /// Input for the reaction badge; None when nobody has reacted
    pub reactions: Option<Reactions>,
}

/// One message in a thread, plus the interactions hanging off it.
///
/// The thread view hands in a fresh copy of the message with `set_message`
/// after it applies an update; reactions are always counted from the latest
/// copy received.
pub struct MessageBubble {
    viewer: Viewer,
    message: RwLock<Message>,
    reply_message: Option<Message>,
    controller: Arc<ReactionController>,
    events: Arc<dyn BubbleEvents>,
}

impl MessageBubble {
    pub fn new(
        viewer: Viewer,
        message: Message,
        controller: Arc<ReactionController>,
        events: Arc<dyn BubbleEvents>,
    ) -> Self {
        Self {
            viewer,
            message: RwLock::new(message),
            reply_message: None,
            controller,
            events,
        }
    }

    /// Supply the message this one quotes, if the caller already resolved it
    pub fn with_reply_message(mut self, reply_message: Option<Message>) -> Self {
        self.reply_message = reply_message;
        self
    }

    /// Resolve the quoted message through `lookup`. Leaves the quote empty when
    /// it is not loaded yet.
    pub fn resolve_reply<L: ReplyLookup + ?Sized>(mut self, lookup: &L) -> Self {
        let reply_id = self.read_message().reply_id.clone();
        self.reply_message = reply_id
            .as_deref()
            .and_then(|id| lookup.resolve(id))
            .cloned();
        self
    }

    fn read_message(&self) -> RwLockReadGuard<'_, Message> {
        self.message.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the message as last handed in by the thread
    pub fn message(&self) -> Message {
        self.read_message().clone()
    }

    /// Re-render with the thread's current copy of the message
    pub fn set_message(&self, message: Message) {
        let mut current = self.message.write().unwrap_or_else(PoisonError::into_inner);
        if current.message_id != message.message_id {
            warn!(
                bubble = %current.message_id,
                incoming = %message.message_id,
                "Bubble re-rendered with a different message"
            );
        }
        *current = message;
    }

    pub fn ownership(&self) -> Ownership {
        Ownership::classify(&self.viewer.id, &self.read_message().user.id)
    }

    pub fn view(&self) -> BubbleView {
        let layout = self.ownership().layout();
        let message = self.read_message();
        let reactions = if message.reactions.is_empty() {
            None
        } else {
            Some(message.reactions.clone())
        };

        BubbleView {
            message_id: message.message_id.clone(),
            layout,
            avatar: AvatarView::for_author(&message.user),
            author_name: message.user.name.clone().unwrap_or_default(),
            body: message.message.clone(),
            quote: quote_view(&message, self.reply_message.as_ref()),
            reactions,
        }
    }

    /// Feed a recognized swipe in; returns whether it started a reply
    pub fn handle_swipe(&self, event: &SwipeEvent) -> bool {
        let direction = self.ownership().swipe_direction();
        let adapter = SwipeAdapter::new(direction, || self.events.reply_to_message());
        adapter.handle(event)
    }

    /// Context menu with the timestamp in the device's local time zone
    pub fn context_menu(&self) -> Vec<MenuItem> {
        self.context_menu_in(&Local)
    }

    pub fn context_menu_in<Tz>(&self, tz: &Tz) -> Vec<MenuItem>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        build_context_menu(&self.read_message().timestamp, tz)
    }

    /// Run a menu action. Errors have already been surfaced to the user by
    /// the time this returns.
    pub async fn select(&self, action: &MenuAction) {
        match action {
            MenuAction::Reply => self.reply(),
            MenuAction::React(reaction) => {
                let _ = self.react_to_message(reaction).await;
            }
            MenuAction::Report => {
                debug!(message_id = %self.read_message().message_id, "Report selected, no handler wired");
            }
        }
    }

    pub fn reply(&self) {
        info!(message_id = %self.read_message().message_id, "Reply requested");
        self.events.reply_to_message();
    }

    /// React using the reactions of the latest message copy. The lock is not
    /// held across the request, so overlapping calls start from the same counts.
    pub async fn react_to_message(&self, reaction: &str) -> Result<Reactions, ReactionError> {
        let message = self.message();
        self.controller
            .react_to_message(&message, reaction, self.events.as_ref())
            .await
    }

    /// Send a reaction in the background so the UI stays responsive.
    ///
    /// Nothing cancels the task if the bubble goes away; a late completion
    /// still reaches the thread's callback.
    pub fn spawn_reaction(self: &Arc<Self>, reaction: impl Into<String>) -> JoinHandle<()> {
        let bubble = Arc::clone(self);
        let reaction = reaction.into();
        tokio::spawn(async move {
            let _ = bubble.react_to_message(&reaction).await;
        })
    }
}
