mod chat;
pub mod input;
mod message;
mod user;

pub use chat::ChatContext;
pub use message::{Message, Reactions};
pub use user::{MessageAuthor, Viewer};
