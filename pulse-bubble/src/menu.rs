//! Long-press / right-click menu attached to a bubble.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Reactions offered in the menu. The controller takes any symbol; this list
/// is only what the UI puts in front of people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionChoice {
    ThumbsUp,
    Heart,
    Laugh,
    Surprise,
    Sad,
    Angry,
}

impl ReactionChoice {
    pub const ALL: [ReactionChoice; 6] = [
        ReactionChoice::ThumbsUp,
        ReactionChoice::Heart,
        ReactionChoice::Laugh,
        ReactionChoice::Surprise,
        ReactionChoice::Sad,
        ReactionChoice::Angry,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ReactionChoice::ThumbsUp => "👍",
            ReactionChoice::Heart => "❤️",
            ReactionChoice::Laugh => "😂",
            ReactionChoice::Surprise => "😮",
            ReactionChoice::Sad => "😢",
            ReactionChoice::Angry => "😡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReactionChoice::ThumbsUp => "Like",
            ReactionChoice::Heart => "Love",
            ReactionChoice::Laugh => "Funny",
            ReactionChoice::Surprise => "Woah",
            ReactionChoice::Sad => "Sad",
            ReactionChoice::Angry => "Angry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MenuAction {
    Reply,
    React(String),
    Report,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItem {
    /// Informational, not clickable
    Label { text: String },
    Separator,
    Action {
        action: MenuAction,
        label: String,
        destructive: bool,
    },
    Submenu { label: String, items: Vec<MenuItem> },
}

impl MenuItem {
    fn action(action: MenuAction, label: impl Into<String>) -> Self {
        MenuItem::Action {
            action,
            label: label.into(),
            destructive: false,
        }
    }
}

/// Timestamp label, e.g. `3/1/2024, 7:05:09 AM`.
///
/// The time zone follows the device (`tz`); the layout is fixed to the en-US
/// date/time convention regardless of locale, since Pulse ships English only.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

pub fn build_context_menu<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> Vec<MenuItem>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let reactions = ReactionChoice::ALL
        .iter()
        .map(|choice| {
            MenuItem::action(
                MenuAction::React(choice.symbol().to_string()),
                format!("{} - {}", choice.symbol(), choice.label()),
            )
        })
        .collect();

    vec![
        MenuItem::Label {
            text: format_timestamp(timestamp, tz),
        },
        MenuItem::Separator,
        MenuItem::action(MenuAction::Reply, "Reply"),
        MenuItem::Submenu {
            label: "React".to_string(),
            items: reactions,
        },
        MenuItem::Separator,
        MenuItem::Action {
            action: MenuAction::Report,
            label: "Report".to_string(),
            destructive: true,
        },
    ]
}
