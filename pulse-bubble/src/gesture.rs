//! Swipe-to-reply adapter.
//!
//! Gesture recognition itself (thresholds, velocity) happens in the host UI;
//! this only decides whether a recognized swipe means "reply".

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipePhase {
    Moving,
    Completed,
    Cancelled,
}

/// A swipe as reported by the host gesture recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    pub phase: SwipePhase,
    pub pointers: u8,
}

impl SwipeEvent {
    pub fn completed(direction: SwipeDirection) -> Self {
        Self {
            direction,
            phase: SwipePhase::Completed,
            pointers: 1,
        }
    }
}

pub struct SwipeAdapter<F: Fn()> {
    direction: SwipeDirection,
    on_swipe: F,
}

impl<F: Fn()> SwipeAdapter<F> {
    pub fn new(direction: SwipeDirection, on_swipe: F) -> Self {
        Self { direction, on_swipe }
    }

    /// Fire the callback for a completed single-pointer swipe in the configured
    /// direction. Returns whether it fired.
    pub fn handle(&self, event: &SwipeEvent) -> bool {
        let triggers = event.phase == SwipePhase::Completed
            && event.pointers == 1
            && event.direction == self.direction;

        if triggers {
            (self.on_swipe)();
        }
        triggers
    }
}
