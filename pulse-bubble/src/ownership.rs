//! Who wrote the message, and everything that flips because of it.

use serde::Serialize;

use crate::gesture::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    /// The viewer authored the message
    Own,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    End,
}

/// Which side of the bubble the single avatar sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarSlot {
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BubbleTone {
    Accent,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BubbleLayout {
    pub ownership: Ownership,
    pub alignment: Alignment,
    pub avatar_slot: AvatarSlot,
    pub swipe_direction: SwipeDirection,
    pub tone: BubbleTone,
    pub text_alignment: Alignment,
}

impl Ownership {
    pub fn classify(viewer_id: &str, author_id: &str) -> Self {
        if viewer_id == author_id {
            Ownership::Own
        } else {
            Ownership::Other
        }
    }

    pub fn is_own(self) -> bool {
        matches!(self, Ownership::Own)
    }

    /// Own messages are swiped toward the left edge, others toward the right
    pub fn swipe_direction(self) -> SwipeDirection {
        match self {
            Ownership::Own => SwipeDirection::Left,
            Ownership::Other => SwipeDirection::Right,
        }
    }

    pub fn layout(self) -> BubbleLayout {
        match self {
            Ownership::Own => BubbleLayout {
                ownership: self,
                alignment: Alignment::End,
                avatar_slot: AvatarSlot::Trailing,
                swipe_direction: self.swipe_direction(),
                tone: BubbleTone::Secondary,
                text_alignment: Alignment::End,
            },
            Ownership::Other => BubbleLayout {
                ownership: self,
                alignment: Alignment::Start,
                avatar_slot: AvatarSlot::Leading,
                swipe_direction: self.swipe_direction(),
                tone: BubbleTone::Accent,
                text_alignment: Alignment::Start,
            },
        }
    }
}
