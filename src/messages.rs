//! Message types for the Elm Architecture pattern
//!
//! Input handling never touches the list directly. Key presses are turned
//! into `Intent` values; the event loop feeds them through `update::update`.
//!
//! Mutating intents (toggle, shuffle) go through `IntentQueue`, a single-writer
//! FIFO. The loop only pops the next one once the previous row animation has
//! settled, so a second key press during an animation cannot desynchronize the
//! model from what is on screen.

use std::collections::VecDeque;

/// Upper bound on queued mutations (held-down keys would otherwise pile up)
pub const MAX_QUEUED_INTENTS: usize = 32;

/// A user request produced by input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Toggle the row with this id (taken from the rendered row)
    ToggleRequested(u32),

    /// Shuffle every row
    ShuffleRequested,

    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    PageUp,
    PageDown,

    Quit,
}

impl Intent {
    /// Whether applying this intent reorders or changes rows
    pub fn is_mutating(&self) -> bool {
        matches!(self, Intent::ToggleRequested(_) | Intent::ShuffleRequested)
    }
}

/// FIFO of mutating intents waiting for the current animation to settle
#[derive(Debug, Default, Clone)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. Returns false (and drops it) when the queue is full.
    pub fn push(&mut self, intent: Intent) -> bool {
        if self.pending.len() >= MAX_QUEUED_INTENTS {
            return false;
        }
        self.pending.push_back(intent);
        true
    }

    /// Next intent to apply, or None while an animation is in flight
    pub fn pop_ready(&mut self, animating: bool) -> Option<Intent> {
        if animating {
            return None;
        }
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
