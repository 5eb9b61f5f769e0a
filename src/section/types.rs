//! Slot state reported by inspection.

use serde::Serialize;
use std::fmt;

/// Observed state of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Nobody holds the slot.
    Free,
    /// Another holder (process or section instance) has the slot locked.
    Busy,
    /// The inspecting section holds the slot itself.
    HeldHere,
}

impl SlotState {
    /// Get a short lowercase name for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotState::Free => "free",
            SlotState::Busy => "busy",
            SlotState::HeldHere => "held_here",
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
