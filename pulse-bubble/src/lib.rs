//! Pulse message bubble
//!
//! Headless model of a single chat bubble: who wrote it, how it lays out,
//! the quote card above replies, swipe-to-reply, the context menu, and
//! optimistic emoji reactions against the chat endpoint.

mod bubble;
mod config;
mod error;
mod events;
mod gesture;
mod logging;
mod menu;
pub mod models;
mod notify;
mod ownership;
mod quote;
pub mod reactions;
mod thread;

pub use bubble::{AvatarView, BubbleView, MessageBubble};
pub use config::BubbleConfig;
pub use error::{ConfigError, ReactionError};
pub use events::BubbleEvents;
pub use gesture::{SwipeAdapter, SwipeDirection, SwipeEvent, SwipePhase};
pub use logging::{init_logging, LogConfig};
pub use menu::{build_context_menu, format_timestamp, MenuAction, MenuItem, ReactionChoice};
pub use notify::{Notifier, Toast, ToastChannel};
pub use ownership::{Alignment, AvatarSlot, BubbleLayout, BubbleTone, Ownership};
pub use quote::{quote_view, truncate_quote, QuoteContent, QuoteView, ReplyLookup};
pub use reactions::{ChatApi, HttpChatApi, ReactionController};
pub use thread::{Thread, ThreadEvents};
